//! WCAG 2.x relative luminance and contrast ratio

use crate::color::Color;
use crate::error::ColorError;

/// Minimum contrast for normal body text (WCAG AA).
pub const WCAG_AA_NORMAL_TEXT: f64 = 4.5;
/// Minimum contrast for large text and UI chrome (WCAG AA).
pub const WCAG_AA_LARGE_TEXT: f64 = 3.0;

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `[0, 1]`.
pub fn relative_luminance(color: Color) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Contrast between two colors in `[1, 21]`. Argument order does not matter.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    ratio_from_luminance(relative_luminance(a), relative_luminance(b))
}

/// Contrast ratio for two already computed luminances.
pub fn ratio_from_luminance(la: f64, lb: f64) -> f64 {
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// [`contrast_ratio`] over hex strings.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64, ColorError> {
    Ok(contrast_ratio(Color::parse(a)?, Color::parse(b)?))
}

impl Color {
    pub fn luminance(self) -> f64 {
        relative_luminance(self)
    }

    pub fn contrast_ratio(self, other: Color) -> f64 {
        contrast_ratio(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!((ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn identical_colors_are_1() {
        let c = Color::from_hex(0x334155);
        assert_eq!(contrast_ratio(c, c), 1.0);
    }

    #[test]
    fn known_reference_values() {
        // #767676 is the classic lightest gray passing AA on white
        let ratio = contrast_ratio_hex("#767676", "#ffffff").unwrap();
        assert!((ratio - 4.54).abs() < 0.01, "ratio was {ratio}");

        let red = contrast_ratio_hex("#ff0000", "#fff").unwrap();
        assert!((red - 3.998).abs() < 0.01, "ratio was {red}");
    }

    #[test]
    fn luminance_bounds() {
        assert_eq!(relative_luminance(Color::BLACK), 0.0);
        assert!((relative_luminance(Color::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn low_channels_use_linear_segment() {
        // 10/255 ≈ 0.0392 sits just below the 0.03928 knee
        let c = Color::rgb(10, 10, 10);
        let expected = (10.0 / 255.0) / 12.92;
        assert!((c.luminance() - expected).abs() < 1e-12);
    }

    #[test]
    fn hex_helper_propagates_parse_errors() {
        assert!(contrast_ratio_hex("#zzzzzz", "#000").is_err());
    }
}
