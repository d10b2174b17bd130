//! UiSmith color primitives
//!
//! Pure, allocation-light color math shared by the theme tooling:
//!
//! - [`Color`]: validated 24-bit sRGB value with `#rrggbb` text form
//! - [`Hsl`]: hue/saturation/lightness view used when nudging lightness
//! - [`relative_luminance`] and [`contrast_ratio`] following WCAG 2.x
//!
//! ```rust
//! use uismith_color::{contrast_ratio, Color};
//!
//! let bg = Color::parse("#0f172a")?;
//! let fg = Color::parse("#e2e8f0")?;
//! assert!(contrast_ratio(fg, bg) > 4.5);
//! # Ok::<(), uismith_color::ColorError>(())
//! ```
//!
//! Everything here is a pure function of its arguments and is safe to call
//! from any thread.

mod color;
mod contrast;
mod error;
mod hsl;

pub use color::{hex_to_rgb, rgb_to_hex, Color};
pub use contrast::{
    contrast_ratio, contrast_ratio_hex, ratio_from_luminance, relative_luminance,
    WCAG_AA_LARGE_TEXT, WCAG_AA_NORMAL_TEXT,
};
pub use error::ColorError;
pub use hsl::{
    hex_to_hsl_percent, hsl_percent_to_color, hsl_percent_to_hex, hsl_to_rgb, rgb_to_hsl, Hsl,
};
