//! Seeded dark theme generator with per-field locks

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uismith_color::{hsl_percent_to_color as hsl, Color};

use crate::error::ThemeError;
use crate::palette::{FooterBackground, Theme};

/// Theme field keys, used for locking.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ThemeField {
    Background,
    Foreground,
    Accent,
    Border,
    TitleForeground,
    BodyForeground,
    FooterBackground,
}

impl ThemeField {
    pub const ALL: [ThemeField; 7] = [
        ThemeField::Background,
        ThemeField::Foreground,
        ThemeField::Accent,
        ThemeField::Border,
        ThemeField::TitleForeground,
        ThemeField::BodyForeground,
        ThemeField::FooterBackground,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Accent => "accent",
            Self::Border => "border",
            Self::TitleForeground => "titleForeground",
            Self::BodyForeground => "bodyForeground",
            Self::FooterBackground => "footerBackground",
        }
    }
}

impl fmt::Display for ThemeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ThemeField {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s {
            "background" | "bg" => Self::Background,
            "foreground" | "fg" => Self::Foreground,
            "accent" => Self::Accent,
            "border" => Self::Border,
            "titleForeground" | "title-foreground" | "titleFg" | "title" => Self::TitleForeground,
            "bodyForeground" | "body-foreground" | "bodyFg" | "body" => Self::BodyForeground,
            "footerBackground" | "footer-background" | "footerBg" | "footer" => {
                Self::FooterBackground
            }
            _ => {
                return Err(ThemeError::UnknownName {
                    kind: "theme field",
                    name: s.to_string(),
                })
            }
        };
        Ok(field)
    }
}

/// Fields that the generator must leave alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeLocks {
    #[serde(alias = "bg")]
    pub background: bool,
    #[serde(alias = "fg")]
    pub foreground: bool,
    pub accent: bool,
    pub border: bool,
    #[serde(alias = "titleFg")]
    pub title_foreground: bool,
    #[serde(alias = "bodyFg")]
    pub body_foreground: bool,
    #[serde(alias = "footerBg")]
    pub footer_background: bool,
}

impl ThemeLocks {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self {
            background: true,
            foreground: true,
            accent: true,
            border: true,
            title_foreground: true,
            body_foreground: true,
            footer_background: true,
        }
    }

    fn slot(&mut self, field: ThemeField) -> &mut bool {
        match field {
            ThemeField::Background => &mut self.background,
            ThemeField::Foreground => &mut self.foreground,
            ThemeField::Accent => &mut self.accent,
            ThemeField::Border => &mut self.border,
            ThemeField::TitleForeground => &mut self.title_foreground,
            ThemeField::BodyForeground => &mut self.body_foreground,
            ThemeField::FooterBackground => &mut self.footer_background,
        }
    }

    pub fn is_locked(&self, field: ThemeField) -> bool {
        match field {
            ThemeField::Background => self.background,
            ThemeField::Foreground => self.foreground,
            ThemeField::Accent => self.accent,
            ThemeField::Border => self.border,
            ThemeField::TitleForeground => self.title_foreground,
            ThemeField::BodyForeground => self.body_foreground,
            ThemeField::FooterBackground => self.footer_background,
        }
    }

    pub fn lock(&mut self, field: ThemeField) {
        *self.slot(field) = true;
    }

    pub fn toggle(&mut self, field: ThemeField) {
        let slot = self.slot(field);
        *slot = !*slot;
    }
}

impl FromIterator<ThemeField> for ThemeLocks {
    fn from_iter<I: IntoIterator<Item = ThemeField>>(iter: I) -> Self {
        let mut locks = Self::none();
        for field in iter {
            locks.lock(field);
        }
        locks
    }
}

/// Mulberry32 PRNG. Same sequence as the browser editor for a given seed.
#[derive(Clone, Debug)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6d2b_79f5);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(1 | s);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t));
        t ^ (t >> 14)
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

/// Generate a dark theme from `seed`, copying locked fields from `base`.
///
/// One base hue drives the background, border and lightly tinted text
/// colors; the accent sits 310-359° around the wheel from it.
pub fn generate_theme(base: &Theme, locks: &ThemeLocks, seed: u32) -> Theme {
    let mut rng = Mulberry32::new(seed);

    let hue = (rng.next_f64() * 360.0).floor();
    let background = hsl(
        hue,
        (22.0 + rng.next_f64() * 12.0).clamp(20.0, 40.0),
        (9.0 + rng.next_f64() * 6.0).clamp(6.0, 16.0),
    );
    let border = hsl(
        hue,
        (18.0 + rng.next_f64() * 10.0).clamp(12.0, 32.0),
        (18.0 + rng.next_f64() * 10.0).clamp(14.0, 30.0),
    );
    let foreground = hsl(hue, 8.0, 92.0);
    let title_foreground = hsl(hue, 6.0, 96.0);
    let body_foreground = hsl(hue, 8.0, 78.0);
    let accent_hue = (hue + (rng.next_f64() * 50.0).floor() + 310.0) % 360.0;
    let accent = hsl(
        accent_hue,
        (60.0 + rng.next_f64() * 20.0).clamp(60.0, 85.0),
        (48.0 + rng.next_f64() * 10.0).clamp(45.0, 60.0),
    );

    tracing::debug!(seed, hue, accent_hue, "generated theme");

    let pick = |locked: bool, kept: Color, fresh: Color| if locked { kept } else { fresh };
    Theme {
        background: pick(locks.background, base.background, background),
        foreground: pick(locks.foreground, base.foreground, foreground),
        accent: pick(locks.accent, base.accent, accent),
        border: pick(locks.border, base.border, border),
        title_foreground: pick(
            locks.title_foreground,
            base.title_foreground,
            title_foreground,
        ),
        body_foreground: pick(locks.body_foreground, base.body_foreground, body_foreground),
        footer_background: if locks.footer_background {
            base.footer_background
        } else {
            FooterBackground::Transparent
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::a11y::check_theme_contrast;
    use pretty_assertions::assert_eq;
    use uismith_color::Hsl;

    #[test]
    fn rng_is_deterministic_and_in_range() {
        let mut a = Mulberry32::new(42);
        let mut b = Mulberry32::new(42);
        for _ in 0..1_000 {
            let x = a.next_f64();
            assert_eq!(x, b.next_f64());
            assert!((0.0..1.0).contains(&x));
        }
        assert_ne!(Mulberry32::new(1).next_u32(), Mulberry32::new(2).next_u32());
    }

    #[test]
    fn same_seed_same_theme() {
        let base = Theme::default();
        let locks = ThemeLocks::none();
        assert_eq!(
            generate_theme(&base, &locks, 7),
            generate_theme(&base, &locks, 7)
        );
        assert_ne!(
            generate_theme(&base, &locks, 7),
            generate_theme(&base, &locks, 8)
        );
    }

    #[test]
    fn all_locked_returns_base() {
        let base = Theme {
            footer_background: FooterBackground::Solid(Color::WHITE),
            ..Theme::default()
        };
        assert_eq!(generate_theme(&base, &ThemeLocks::all(), 99), base);
    }

    #[test]
    fn locked_fields_are_copied() {
        let base = Theme::default();
        let locks: ThemeLocks = [ThemeField::Accent, ThemeField::Background]
            .into_iter()
            .collect();
        for seed in 0..16 {
            let theme = generate_theme(&base, &locks, seed);
            assert_eq!(theme.accent, base.accent);
            assert_eq!(theme.background, base.background);
        }
    }

    #[test]
    fn generated_themes_are_dark_with_light_text() {
        for seed in 0..64 {
            let theme = generate_theme(&Theme::default(), &ThemeLocks::none(), seed);
            let bg = Hsl::from(theme.background);
            assert!(bg.l <= 0.17, "seed {seed}: background lightness {}", bg.l);
            assert!(Hsl::from(theme.foreground).l >= 0.9);
            assert_eq!(theme.footer_background, FooterBackground::Transparent);

            // text roles always clear their thresholds on these backgrounds
            let issues = check_theme_contrast(&theme.palette());
            assert!(
                issues.iter().all(|i| i.id() == "btn" || i.id() == "border"),
                "seed {seed}: {issues:?}"
            );
        }
    }

    #[test]
    fn toggle_flips_one_field() {
        let mut locks = ThemeLocks::none();
        locks.toggle(ThemeField::Border);
        assert!(locks.is_locked(ThemeField::Border));
        assert!(!locks.is_locked(ThemeField::Accent));
        locks.toggle(ThemeField::Border);
        assert_eq!(locks, ThemeLocks::none());
    }

    #[test]
    fn locks_deserialize_legacy_keys() {
        let locks: ThemeLocks = serde_json::from_str(r#"{"bg":true,"footerBg":true}"#).unwrap();
        assert!(locks.background);
        assert!(locks.footer_background);
        assert!(!locks.accent);
    }

    #[test]
    fn field_names_parse() {
        for field in ThemeField::ALL {
            assert_eq!(field.key().parse::<ThemeField>().unwrap(), field);
        }
        assert!("nope".parse::<ThemeField>().is_err());
    }
}
