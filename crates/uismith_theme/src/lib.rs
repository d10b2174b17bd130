//! UiSmith Theme
//!
//! Palette handling for the UiSmith component designer.
//!
//! # Overview
//!
//! - **Palette**: six named color roles ([`Palette`]) plus the footer fill ([`Theme`])
//! - **Contrast checks**: [`check_theme_contrast`] reports failing role pairs
//! - **Fix all**: [`fix_all_theme_colors`] adjusts only lightness until every check passes
//! - **Generator**: [`generate_theme`] builds a seeded dark theme, respecting [`ThemeLocks`]
//! - **Presets**: [`ThemePreset`] catalog of ready-made themes
//! - **Shadows**: [`BoxShadow`] maps the designer's shadow slider to CSS
//! - **Persistence**: [`ThemeStore`] with file and in-memory implementations
//!
//! # Quick Start
//!
//! ```rust
//! use uismith_theme::{check_theme_contrast, fix_all_theme_colors, Palette, PaletteRole};
//! use uismith_color::Color;
//!
//! let palette = Palette::default().with(PaletteRole::BodyForeground, Color::from_hex(0x1e293b));
//! let issues = check_theme_contrast(&palette);
//! assert_eq!(issues[0].id(), "body");
//!
//! let fixed = fix_all_theme_colors(&palette);
//! assert!(check_theme_contrast(&fixed).is_empty());
//! ```
//!
//! The checks and fixer are pure functions: no caching, no shared state, and
//! the input palette is never modified.

mod a11y;
mod error;
mod generate;
mod palette;
mod presets;
mod shadow;
mod store;

pub use a11y::{
    check_theme_contrast, fix_all_theme_colors, fix_all_theme_colors_strict, tune,
    tune_to_contrast, ContrastCheck, ContrastIssue, ContrastMeasurement, ContrastReport, Tuned,
    BUTTON_TEXT_REFERENCE, SEARCH_STEPS,
};
pub use error::ThemeError;
pub use generate::{generate_theme, Mulberry32, ThemeField, ThemeLocks};
pub use palette::{FooterBackground, Palette, PaletteRole, Theme};
pub use presets::{preset_theme, ThemePreset};
pub use shadow::{map_shadow_to_box_shadow, BoxShadow, MAX_SHADOW_ALPHA};
pub use store::{load_or_default, FileStore, MemoryStore, ThemeStore};
