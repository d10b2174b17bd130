//! HSL conversions

use crate::color::Color;
use crate::error::ColorError;

/// Hue in degrees `[0, 360)`, saturation and lightness as fractions `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Saturation and lightness given as percentages.
    pub fn from_percent(h: f64, s: f64, l: f64) -> Self {
        Self {
            h,
            s: s / 100.0,
            l: l / 100.0,
        }
    }

    /// Same hue and saturation, different lightness (clamped to `[0, 1]`).
    pub fn with_lightness(self, l: f64) -> Self {
        Self {
            l: l.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Rounded `(hue°, saturation%, lightness%)`, as shown in color inputs.
    pub fn to_percent(self) -> (i32, i32, i32) {
        (
            self.h.round() as i32 % 360,
            (self.s * 100.0).round() as i32,
            (self.l * 100.0).round() as i32,
        )
    }

    pub fn to_color(self) -> Color {
        hsl_to_rgb(self)
    }
}

impl From<Color> for Hsl {
    fn from(c: Color) -> Self {
        rgb_to_hsl(c.r, c.g, c.b)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        hsl_to_rgb(hsl)
    }
}

pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;

    if d == 0.0 {
        return Hsl::new(0.0, 0.0, l);
    }

    let s = d / (1.0 - (2.0 * l - 1.0).abs());
    let sector = if max == r {
        ((g - b) / d) % 6.0
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    let mut h = sector * 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    Hsl::new(h, s, l)
}

pub fn hsl_to_rgb(hsl: Hsl) -> Color {
    let Hsl { h, s, l } = hsl;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Color::from_rgb_f64((r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0)
}

/// CSS `hsl(h, s%, l%)` evaluated with the CSS Color 4 formula.
pub fn hsl_percent_to_color(h: f64, s: f64, l: f64) -> Color {
    let s = s / 100.0;
    let l = l / 100.0;
    let a = s * l.min(1.0 - l);
    let k = |n: f64| (n + h / 30.0) % 12.0;
    let f = |n: f64| l - a * (-1.0f64).max((k(n) - 3.0).min((9.0 - k(n)).min(1.0)));
    Color::from_rgb_f64(255.0 * f(0.0), 255.0 * f(8.0), 255.0 * f(4.0))
}

/// CSS `hsl(h, s%, l%)` to `#rrggbb`.
pub fn hsl_percent_to_hex(h: f64, s: f64, l: f64) -> String {
    hsl_percent_to_color(h, s, l).to_hex()
}

/// `#rrggbb` to rounded `(hue°, saturation%, lightness%)`.
pub fn hex_to_hsl_percent(hex: &str) -> Result<(i32, i32, i32), ColorError> {
    Ok(Hsl::from(Color::parse(hex)?).to_percent())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn primaries() {
        let red = rgb_to_hsl(255, 0, 0);
        assert!(close(red.h, 0.0) && close(red.s, 1.0) && close(red.l, 0.5));

        let green = rgb_to_hsl(0, 255, 0);
        assert!(close(green.h, 120.0));

        let blue = rgb_to_hsl(0, 0, 255);
        assert!(close(blue.h, 240.0));

        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 1.0, 0.5)), Color::rgb(255, 0, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(240.0, 1.0, 0.5)), Color::rgb(0, 0, 255));
    }

    #[test]
    fn magenta_side_hue_wraps_positive() {
        // max == r with b > g gives a negative sector before wrapping
        let hsl = rgb_to_hsl(255, 0, 128);
        assert!(hsl.h > 300.0 && hsl.h < 360.0, "hue was {}", hsl.h);
    }

    #[test]
    fn grays_have_no_saturation() {
        let hsl = rgb_to_hsl(128, 128, 128);
        assert_eq!(hsl.s, 0.0);
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl_to_rgb(hsl), Color::rgb(128, 128, 128));
    }

    #[test]
    fn lightness_extremes_are_black_and_white() {
        let hsl = Hsl::from(Color::from_hex(0x22c55e));
        assert_eq!(hsl.with_lightness(1.0).to_color(), Color::WHITE);
        assert_eq!(hsl.with_lightness(0.0).to_color(), Color::BLACK);
        assert_eq!(hsl.with_lightness(4.0).l, 1.0);
    }

    #[test]
    fn percent_helpers() {
        assert_eq!(hsl_percent_to_hex(0.0, 100.0, 50.0), "#ff0000");
        assert_eq!(hsl_percent_to_hex(120.0, 100.0, 25.0), "#008000");
        assert_eq!(hsl_percent_to_hex(210.0, 0.0, 100.0), "#ffffff");
        assert_eq!(hsl_percent_to_color(240.0, 100.0, 50.0), Color::rgb(0, 0, 255));

        let (h, s, l) = Hsl::from(Color::from_hex(0xff0000)).to_percent();
        assert_eq!((h, s, l), (0, 100, 50));
        assert!(close(Hsl::from_percent(200.0, 50.0, 25.0).s, 0.5));

        assert_eq!(hex_to_hsl_percent("#22c55e").unwrap(), (142, 71, 45));
        assert!(hex_to_hsl_percent("#22c5").is_err());
    }
}
