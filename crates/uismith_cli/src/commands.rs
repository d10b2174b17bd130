//! Subcommand implementations

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};
use uismith_theme::{
    fix_all_theme_colors, fix_all_theme_colors_strict, generate_theme, BoxShadow, ContrastIssue,
    ContrastMeasurement, ContrastReport, FileStore, Theme, ThemeField, ThemePreset, ThemeStore,
};

use crate::config::{OutputFormat, UiSmithConfig, CONFIG_FILE};
use crate::ThemeSource;

/// Resolve the working theme and the store it belongs to.
///
/// Priority: `--preset`, then the saved theme file, then the configured
/// preset, then the built-in default.
fn load_theme(config: &UiSmithConfig, source: &ThemeSource) -> Result<(Theme, FileStore)> {
    let path = source
        .theme
        .clone()
        .unwrap_or_else(|| config.theme.path.clone());
    let store = FileStore::new(path);

    if let Some(preset) = source.preset {
        return Ok((preset.theme(), store));
    }

    let saved = store
        .load()
        .with_context(|| format!("Failed to load theme from {}", store.path().display()))?;
    if let Some(theme) = saved {
        return Ok((theme, store));
    }

    let theme = match &config.theme.preset {
        Some(name) => name
            .parse::<ThemePreset>()
            .with_context(|| format!("Invalid preset `{name}` in {CONFIG_FILE}"))?
            .theme(),
        None => Theme::default(),
    };
    tracing::debug!(path = %store.path().display(), "no saved theme, starting from preset");
    Ok((theme, store))
}

fn format_of(config: &UiSmithConfig, source: &ThemeSource) -> OutputFormat {
    source.format.unwrap_or(config.output.format)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to serialize output")?
    );
    Ok(())
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    compliant: bool,
    measurements: &'a [ContrastMeasurement],
    issues: &'a [ContrastIssue],
}

pub fn check(config: &UiSmithConfig, source: &ThemeSource) -> Result<ExitCode> {
    let (theme, _) = load_theme(config, source)?;
    let report = ContrastReport::evaluate(&theme.palette());
    let issues = report.issues();

    match format_of(config, source) {
        OutputFormat::Json => print_json(&CheckOutput {
            compliant: issues.is_empty(),
            measurements: report.measurements(),
            issues: &issues,
        })?,
        OutputFormat::Text => print!("{}", render_report(&report, &issues)),
    }

    Ok(if issues.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn render_report(report: &ContrastReport, issues: &[ContrastIssue]) -> String {
    let mut out = String::new();
    for m in report.measurements() {
        out.push_str(&format!(
            "  {:<7} {:>6.2}:1  needs ≥ {}:1  {}\n",
            m.check.id(),
            m.ratio,
            m.required,
            if m.passes() { "ok" } else { "FAIL" }
        ));
    }

    if issues.is_empty() {
        out.push_str("All contrast checks pass.\n");
    } else {
        out.push_str("\nAccessibility alerts:\n");
        for issue in issues {
            out.push_str(&format!("  • {issue}\n"));
        }
    }
    out
}

#[derive(Serialize)]
struct ColorChange {
    role: &'static str,
    from: String,
    to: String,
}

#[derive(Serialize)]
struct FixOutput {
    changes: Vec<ColorChange>,
    theme: Theme,
}

pub fn fix(
    config: &UiSmithConfig,
    source: &ThemeSource,
    write: bool,
    strict: bool,
) -> Result<ExitCode> {
    let (theme, store) = load_theme(config, source)?;
    let palette = theme.palette();

    let fixed = if strict || config.contrast.strict {
        fix_all_theme_colors_strict(&palette).context("Strict contrast fix failed")?
    } else {
        fix_all_theme_colors(&palette)
    };
    let next = theme.with_palette(fixed);

    let changes: Vec<ColorChange> = fixed
        .diff(&palette)
        .into_iter()
        .map(|role| ColorChange {
            role: role.key(),
            from: palette.get(role).to_hex(),
            to: fixed.get(role).to_hex(),
        })
        .collect();

    match format_of(config, source) {
        OutputFormat::Json => print_json(&FixOutput {
            changes,
            theme: next,
        })?,
        OutputFormat::Text => {
            if changes.is_empty() {
                println!("Nothing to fix.");
            }
            for change in &changes {
                println!("  {:<16} {} -> {}", change.role, change.from, change.to);
            }
        }
    }

    if write {
        store
            .save(&next)
            .with_context(|| format!("Failed to save theme to {}", store.path().display()))?;
        tracing::info!(path = %store.path().display(), "saved fixed theme");
    }

    Ok(ExitCode::SUCCESS)
}

fn random_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or_default()
}

pub fn generate(
    config: &UiSmithConfig,
    source: &ThemeSource,
    seed: Option<u32>,
    extra_locks: &[ThemeField],
    write: bool,
) -> Result<ExitCode> {
    let (base, store) = load_theme(config, source)?;

    let mut locks = config.theme.locks;
    for field in extra_locks {
        locks.lock(*field);
    }

    let seed = seed.unwrap_or_else(random_seed);
    let theme = generate_theme(&base, &locks, seed);
    tracing::info!(seed, "generated theme");

    match format_of(config, source) {
        OutputFormat::Json => print_json(&theme)?,
        OutputFormat::Text => {
            println!("seed {seed}");
            print!("{}", render_theme(&theme));
            let issues = theme.contrast_issues();
            if !issues.is_empty() {
                println!("\nAccessibility alerts (run `uismith fix`):");
                for issue in &issues {
                    println!("  • {issue}");
                }
            }
        }
    }

    if write {
        store
            .save(&theme)
            .with_context(|| format!("Failed to save theme to {}", store.path().display()))?;
        tracing::info!(path = %store.path().display(), "saved generated theme");
    }

    Ok(ExitCode::SUCCESS)
}

fn render_theme(theme: &Theme) -> String {
    let rows = [
        (ThemeField::Background, theme.background.to_hex()),
        (ThemeField::Foreground, theme.foreground.to_hex()),
        (ThemeField::TitleForeground, theme.title_foreground.to_hex()),
        (ThemeField::BodyForeground, theme.body_foreground.to_hex()),
        (ThemeField::Accent, theme.accent.to_hex()),
        (ThemeField::Border, theme.border.to_hex()),
        (ThemeField::FooterBackground, theme.footer_background.to_string()),
    ];
    rows.iter()
        .map(|(field, value)| format!("  {:<17} {value}\n", field.key()))
        .collect()
}

pub fn shadow(strength: f64) {
    println!("{}", BoxShadow::from_strength(strength).to_css());
}

pub fn presets() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        println!(
            "  {:<8} {:<8} bg {}  accent {}",
            preset.id(),
            preset.display_name(),
            theme.background,
            theme.accent
        );
    }
}

pub fn init(path: &Path, force: bool) -> Result<()> {
    let target = path.join(CONFIG_FILE);
    if target.exists() && !force {
        anyhow::bail!(
            "{} already exists. Pass --force to overwrite it.",
            target.display()
        );
    }

    fs::create_dir_all(path).with_context(|| format!("Failed to create {}", path.display()))?;
    fs::write(&target, UiSmithConfig::default().to_toml()?)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    tracing::info!(path = %target.display(), "wrote default config");
    Ok(())
}
