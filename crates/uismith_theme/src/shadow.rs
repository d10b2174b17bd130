//! Shadow strength to CSS `box-shadow` mapping
//!
//! Designer panels expose a single "shadow" slider. Higher values drop the
//! shadow further, blur it more and darken it, up to a fixed alpha cap.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Alpha never exceeds this, however strong the shadow.
pub const MAX_SHADOW_ALPHA: f64 = 0.45;

/// A black drop shadow with no horizontal offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxShadow {
    pub offset_y: u32,
    pub blur: u32,
    pub spread: u32,
    pub alpha: f64,
}

impl BoxShadow {
    pub const fn none() -> Self {
        Self {
            offset_y: 0,
            blur: 0,
            spread: 0,
            alpha: 0.0,
        }
    }

    /// Map a slider value to a shadow. Negative and NaN strengths count as 0.
    pub fn from_strength(strength: f64) -> Self {
        let s = if strength.is_nan() { 0.0 } else { strength.max(0.0) };
        Self {
            offset_y: (s / 8.0).ceil() as u32,
            blur: (8.0 + s * 1.2).ceil() as u32,
            spread: (s / 12.0).floor() as u32,
            alpha: MAX_SHADOW_ALPHA.min(0.05 + s / 100.0),
        }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BoxShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Three decimals keep float noise (0.15000000000000002) out of the CSS.
        let alpha = (self.alpha * 1000.0).round() / 1000.0;
        write!(
            f,
            "0 {}px {}px {}px rgba(0,0,0,{})",
            self.offset_y, self.blur, self.spread, alpha
        )
    }
}

/// Shorthand for `BoxShadow::from_strength(strength).to_css()`.
pub fn map_shadow_to_box_shadow(strength: f64) -> String {
    BoxShadow::from_strength(strength).to_css()
}
