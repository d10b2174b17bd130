//! Palette contrast checks and automatic fixes
//!
//! [`check_theme_contrast`] runs five fixed checks against a [`Palette`] and
//! returns the ones that fail. [`fix_all_theme_colors`] nudges the lightness of
//! each failing color (hue and saturation held) until its check passes,
//! preferring the smallest visible change.
//!
//! Thresholds follow WCAG for text and UI chrome, plus two house rules: the
//! accent must read against a fixed dark button label color, and borders need
//! 1.5:1 against the background.

use std::fmt;

use serde::Serialize;
use uismith_color::{contrast_ratio, relative_luminance, Color, Hsl};

use crate::error::ThemeError;
use crate::palette::{Palette, PaletteRole, Theme};

/// Label color drawn on top of accent-filled buttons.
pub const BUTTON_TEXT_REFERENCE: Color = Color::from_hex(0x0b0f17);

/// Coarse lightness steps scanned in each direction.
pub const SEARCH_STEPS: u32 = 18;

/// Bisection rounds between the last failing and first passing coarse step.
const REFINE_STEPS: u32 = 16;

/// One of the fixed palette checks, in evaluation order.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastCheck {
    Body,
    Title,
    Ui,
    #[serde(rename = "btn")]
    Button,
    Border,
}

impl ContrastCheck {
    pub const ALL: [ContrastCheck; 5] = [
        ContrastCheck::Body,
        ContrastCheck::Title,
        ContrastCheck::Ui,
        ContrastCheck::Button,
        ContrastCheck::Border,
    ];

    /// Stable identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Title => "title",
            Self::Ui => "ui",
            Self::Button => "btn",
            Self::Border => "border",
        }
    }

    /// Minimum ratio for the check to pass.
    pub fn required(self) -> f64 {
        match self {
            Self::Body => 4.5,
            Self::Title => 3.0,
            Self::Ui => 3.0,
            Self::Button => 4.5,
            Self::Border => 1.5,
        }
    }

    /// The palette color this check measures (and the fixer adjusts).
    pub fn role(self) -> PaletteRole {
        match self {
            Self::Body => PaletteRole::BodyForeground,
            Self::Title => PaletteRole::TitleForeground,
            Self::Ui => PaletteRole::Foreground,
            Self::Button => PaletteRole::Accent,
            Self::Border => PaletteRole::Border,
        }
    }

    /// The color the role is measured against.
    pub fn reference(self, palette: &Palette) -> Color {
        match self {
            Self::Button => BUTTON_TEXT_REFERENCE,
            _ => palette.background,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Body => "Body text contrast too low",
            Self::Title => "Title contrast may be low",
            Self::Ui => "UI foreground contrast may be low",
            Self::Button => "Primary button text contrast too low",
            Self::Border => "Border may be indistinguishable from background",
        }
    }

    /// Unrounded ratio for this check on `palette`.
    pub fn measure(self, palette: &Palette) -> f64 {
        contrast_ratio(palette.get(self.role()), self.reference(palette))
    }
}

impl fmt::Display for ContrastCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A failed check.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContrastIssue {
    #[serde(rename = "id")]
    pub check: ContrastCheck,
    pub message: String,
    /// Measured ratio rounded to two decimals.
    pub ratio: f64,
    pub required: f64,
}

impl ContrastIssue {
    pub fn id(&self) -> &'static str {
        self.check.id()
    }
}

impl fmt::Display for ContrastIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.2}:1, needs ≥ {}:1)",
            self.message, self.ratio, self.required
        )
    }
}

/// Ratio measured for one check, pass or fail.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ContrastMeasurement {
    #[serde(rename = "id")]
    pub check: ContrastCheck,
    pub ratio: f64,
    pub required: f64,
}

impl ContrastMeasurement {
    pub fn passes(&self) -> bool {
        self.ratio >= self.required
    }

    fn to_issue(self) -> ContrastIssue {
        ContrastIssue {
            check: self.check,
            message: self.check.message().to_string(),
            ratio: round2(self.ratio),
            required: self.required,
        }
    }
}

/// All five measurements for one palette.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContrastReport {
    measurements: Vec<ContrastMeasurement>,
}

impl ContrastReport {
    pub fn evaluate(palette: &Palette) -> Self {
        let measurements = ContrastCheck::ALL
            .into_iter()
            .map(|check| ContrastMeasurement {
                check,
                ratio: check.measure(palette),
                required: check.required(),
            })
            .collect();
        Self { measurements }
    }

    pub fn measurements(&self) -> &[ContrastMeasurement] {
        &self.measurements
    }

    pub fn issues(&self) -> Vec<ContrastIssue> {
        self.measurements
            .iter()
            .filter(|m| !m.passes())
            .map(|m| m.to_issue())
            .collect()
    }

    pub fn is_compliant(&self) -> bool {
        self.measurements.iter().all(ContrastMeasurement::passes)
    }
}

/// Run every check and return the failing ones in evaluation order.
///
/// An empty result means the palette is fully compliant.
pub fn check_theme_contrast(palette: &Palette) -> Vec<ContrastIssue> {
    ContrastReport::evaluate(palette).issues()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Result of [`tune`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuned {
    pub color: Color,
    pub ratio: f64,
    /// Whether `ratio` reaches the requirement. When false, `color` is the
    /// highest-contrast candidate found.
    pub met: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Lighten,
    Darken,
}

impl Direction {
    fn opposite(self) -> Self {
        match self {
            Self::Lighten => Self::Darken,
            Self::Darken => Self::Lighten,
        }
    }

    /// Lightness `t` of the way from `start` to the extreme in this direction.
    fn lightness(self, start: f64, t: f64) -> f64 {
        match self {
            Self::Lighten => start + (1.0 - start) * t,
            Self::Darken => start - start * t,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Candidate {
    color: Color,
    ratio: f64,
}

/// Adjust `color`'s lightness until it reaches `required` against `reference`.
///
/// Returns `color` unchanged when it already passes. When the requirement
/// cannot be met at any lightness, the highest-contrast candidate is returned.
pub fn tune_to_contrast(color: Color, reference: Color, required: f64) -> Color {
    tune(color, reference, required).color
}

/// Like [`tune_to_contrast`], but reports whether the requirement was met.
pub fn tune(color: Color, reference: Color, required: f64) -> Tuned {
    let start_ratio = contrast_ratio(color, reference);
    if start_ratio >= required {
        return Tuned {
            color,
            ratio: start_ratio,
            met: true,
        };
    }

    // Luminance the color would need on either side of the reference:
    //   lighter: L >= required * (Lref + 0.05) - 0.05
    //   darker:  L <= (Lref + 0.05) / required - 0.05
    let reference_lum = relative_luminance(reference);
    let up_target = required * (reference_lum + 0.05) - 0.05;
    let down_target = (reference_lum + 0.05) / required - 0.05;

    let lum = relative_luminance(color);
    let move_up = (up_target - lum).max(0.0);
    let move_down = (lum - down_target).max(0.0);
    let preferred = if move_up <= move_down {
        Direction::Lighten
    } else {
        Direction::Darken
    };

    let hsl = Hsl::from(color);
    let first = search(hsl, reference, required, preferred);
    let second = search(hsl, reference, required, preferred.opposite());
    let chosen = choose(first, second, hsl.l, required);

    tracing::trace!(
        from = %color,
        to = %chosen.color,
        ratio = chosen.ratio,
        required,
        ?preferred,
        "tuned color lightness"
    );

    Tuned {
        color: chosen.color,
        ratio: chosen.ratio,
        met: chosen.ratio >= required,
    }
}

/// Walk lightness toward one extreme and return the passing candidate closest
/// to the start, or the highest-contrast one if none passes.
fn search(start: Hsl, reference: Color, required: f64, direction: Direction) -> Candidate {
    let at = |t: f64| {
        let color = start
            .with_lightness(direction.lightness(start.l, t))
            .to_color();
        Candidate {
            color,
            ratio: contrast_ratio(color, reference),
        }
    };

    let mut strongest: Option<Candidate> = None;
    let mut prev_t = 0.0;

    for step in 1..=SEARCH_STEPS {
        let t = f64::from(step) / f64::from(SEARCH_STEPS);
        let candidate = at(t);

        if candidate.ratio >= required {
            // Passing lightness is contiguous up to the extreme, so bisect
            // the bracket for the boundary.
            let (mut lo, mut hi) = (prev_t, t);
            let mut best = candidate;
            for _ in 0..REFINE_STEPS {
                let mid = (lo + hi) / 2.0;
                let probe = at(mid);
                if probe.ratio >= required {
                    hi = mid;
                    best = probe;
                } else {
                    lo = mid;
                }
            }
            return best;
        }

        if strongest.map_or(true, |s| candidate.ratio > s.ratio) {
            strongest = Some(candidate);
        }
        prev_t = t;
    }

    strongest.unwrap_or_else(|| at(0.0))
}

fn choose(a: Candidate, b: Candidate, start_lightness: f64, required: f64) -> Candidate {
    if a.ratio >= required && b.ratio >= required {
        let da = (Hsl::from(a.color).l - start_lightness).abs();
        let db = (Hsl::from(b.color).l - start_lightness).abs();
        if da <= db {
            a
        } else {
            b
        }
    } else if a.ratio >= b.ratio {
        a
    } else {
        b
    }
}

fn fix_check(palette: &Palette, check: ContrastCheck) -> Tuned {
    let role = check.role();
    let current = palette.get(role);
    let tuned = tune(current, check.reference(palette), check.required());

    if tuned.color != current {
        tracing::debug!(
            check = check.id(),
            %role,
            from = %current,
            to = %tuned.color,
            ratio = tuned.ratio,
            "adjusted palette color for contrast"
        );
    }
    if !tuned.met {
        tracing::warn!(
            check = check.id(),
            %role,
            achieved = tuned.ratio,
            required = check.required(),
            "contrast requirement unreachable, keeping best effort"
        );
    }

    tuned
}

/// Fix every checked role; `background` is passed through untouched.
///
/// Each role is tuned against the original palette's reference, so the result
/// does not depend on fix order.
pub fn fix_all_theme_colors(palette: &Palette) -> Palette {
    let mut next = *palette;
    for check in ContrastCheck::ALL {
        next.set(check.role(), fix_check(palette, check).color);
    }
    next
}

/// Like [`fix_all_theme_colors`], but fails instead of returning a
/// best-effort color for a role whose requirement cannot be met.
pub fn fix_all_theme_colors_strict(palette: &Palette) -> Result<Palette, ThemeError> {
    let mut next = *palette;
    for check in ContrastCheck::ALL {
        let tuned = fix_check(palette, check);
        if !tuned.met {
            return Err(ThemeError::ContrastUnreachable {
                role: check.role(),
                achieved: tuned.ratio,
                required: check.required(),
            });
        }
        next.set(check.role(), tuned.color);
    }
    Ok(next)
}

impl Theme {
    pub fn contrast_issues(&self) -> Vec<ContrastIssue> {
        check_theme_contrast(&self.palette())
    }

    /// Apply [`fix_all_theme_colors`] to the palette part of the theme.
    pub fn fix_contrast(&self) -> Theme {
        self.with_palette(fix_all_theme_colors(&self.palette()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> Color {
        Color::parse(s).unwrap()
    }

    fn scenario() -> Palette {
        Palette {
            background: hex("#0f172a"),
            foreground: hex("#e2e8f0"),
            title_foreground: hex("#f8fafc"),
            body_foreground: hex("#1e293b"),
            accent: hex("#22c55e"),
            border: hex("#334155"),
        }
    }

    #[test]
    fn black_and_white_palette_is_compliant() {
        let palette = Palette {
            background: Color::BLACK,
            foreground: Color::WHITE,
            title_foreground: Color::WHITE,
            body_foreground: Color::WHITE,
            accent: hex("#22c55e"),
            border: Color::WHITE,
        };
        assert!(check_theme_contrast(&palette).is_empty());
        assert!(ContrastReport::evaluate(&palette).is_compliant());
    }

    #[test]
    fn identical_body_and_background_is_reported() {
        let palette = Palette::default().with(PaletteRole::BodyForeground, hex("#0f172a"));
        let issues = check_theme_contrast(&palette);
        let body = issues.iter().find(|i| i.id() == "body").unwrap();
        assert_eq!(body.ratio, 1.0);
        assert_eq!(body.required, 4.5);
        assert_eq!(body.message, "Body text contrast too low");
    }

    #[test]
    fn issues_follow_evaluation_order() {
        let gray = hex("#808080");
        let palette = Palette {
            background: gray,
            foreground: gray,
            title_foreground: gray,
            body_foreground: gray,
            accent: BUTTON_TEXT_REFERENCE,
            border: gray,
        };
        let ids: Vec<_> = check_theme_contrast(&palette)
            .iter()
            .map(ContrastIssue::id)
            .collect();
        assert_eq!(ids, vec!["body", "title", "ui", "btn", "border"]);
    }

    #[test]
    fn default_palette_passes_every_check() {
        let ok = Palette::default();
        assert!(ContrastCheck::Border.measure(&ok) >= 1.5);

        let report = ContrastReport::evaluate(&ok);
        assert_eq!(report.measurements().len(), 5);
        assert!(report.issues().is_empty());
    }

    #[test]
    fn issue_display_includes_ratio_and_requirement() {
        let palette = Palette::default().with(PaletteRole::Border, hex("#0f172a"));
        let issues = check_theme_contrast(&palette);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].to_string(),
            "Border may be indistinguishable from background (1.00:1, needs ≥ 1.5:1)"
        );
    }

    #[test]
    fn issue_serializes_with_stable_id() {
        let palette = Palette::default().with(PaletteRole::Accent, BUTTON_TEXT_REFERENCE);
        let issues = check_theme_contrast(&palette);
        let json = serde_json::to_value(&issues).unwrap();
        assert_eq!(json[0]["id"], "btn");
        assert_eq!(json[0]["required"], 4.5);
        assert_eq!(json[0]["ratio"], 1.0);
    }

    #[test]
    fn scenario_reports_body_then_fixes_only_body() {
        let palette = scenario();
        let issues = check_theme_contrast(&palette);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].check, ContrastCheck::Body);
        assert!(issues[0].ratio < 4.5);

        let fixed = fix_all_theme_colors(&palette);
        assert!(check_theme_contrast(&fixed).is_empty());
        assert_eq!(fixed.diff(&palette), vec![PaletteRole::BodyForeground]);
        assert!(fixed.body_foreground.luminance() > palette.background.luminance());
    }

    #[test]
    fn fixed_color_keeps_hue_and_saturation() {
        let palette = scenario();
        let before = Hsl::from(palette.body_foreground);
        let after = Hsl::from(fix_all_theme_colors(&palette).body_foreground);
        assert!((before.h - after.h).abs() < 2.0, "{before:?} -> {after:?}");
        assert!((before.s - after.s).abs() < 0.03, "{before:?} -> {after:?}");
        assert!(after.l > before.l);
    }

    #[test]
    fn fix_is_close_to_the_boundary() {
        let palette = scenario();
        let fixed = fix_all_theme_colors(&palette);
        let ratio = ContrastCheck::Body.measure(&fixed);
        assert!(ratio >= 4.5);
        // bisection keeps the change minimal rather than jumping to white
        assert!(ratio < 5.0, "ratio was {ratio}");
    }

    #[test]
    fn passing_color_is_untouched() {
        let c = hex("#e2e8f0");
        assert_eq!(tune_to_contrast(c, hex("#0f172a"), 3.0), c);

        let fixed = fix_all_theme_colors(&Palette::default());
        assert_eq!(fixed, Palette::default());
    }

    #[test]
    fn accent_is_tuned_against_button_label() {
        let palette = Palette::default().with(PaletteRole::Accent, hex("#1e3a8a"));
        let fixed = fix_all_theme_colors(&palette);
        assert!(contrast_ratio(fixed.accent, BUTTON_TEXT_REFERENCE) >= 4.5);
        assert_eq!(fixed.diff(&palette), vec![PaletteRole::Accent]);
    }

    #[test]
    fn light_background_darkens_text() {
        let palette = Palette {
            background: hex("#f8fafc"),
            foreground: hex("#cbd5e1"),
            title_foreground: hex("#e2e8f0"),
            body_foreground: hex("#94a3b8"),
            accent: hex("#16a34a"),
            border: hex("#f1f5f9"),
        };
        let fixed = fix_all_theme_colors(&palette);
        assert!(check_theme_contrast(&fixed).is_empty());
        assert!(fixed.body_foreground.luminance() < palette.body_foreground.luminance());
        assert!(fixed.border.luminance() < palette.border.luminance());
    }

    #[test]
    fn unreachable_requirement_returns_best_effort() {
        let reference = hex("#767676");
        let tuned = tune(hex("#336699"), reference, 10.0);
        assert!(!tuned.met);
        assert_eq!(tuned.color, Color::BLACK);
        assert!(tuned.ratio > 4.5);
    }

    #[test]
    fn strict_fix_passes_on_reachable_palettes() {
        let fixed = fix_all_theme_colors_strict(&scenario()).unwrap();
        assert_eq!(fixed, fix_all_theme_colors(&scenario()));
    }

    #[test]
    fn theme_fix_keeps_footer() {
        let theme = Theme {
            body_foreground: hex("#1e293b"),
            ..Theme::default()
        };
        assert_eq!(theme.contrast_issues().len(), 1);
        let fixed = theme.fix_contrast();
        assert!(fixed.contrast_issues().is_empty());
        assert_eq!(fixed.footer_background, theme.footer_background);
    }
}
