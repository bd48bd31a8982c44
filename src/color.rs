//! SolidColor type — the color representation used by the picker.
//!
//! Stores RGBA as f64 values in 0.0–1.0 range. Parses the `#rrggbb` style
//! codes the palette is written in and blends between colors for the
//! folder's color transition.

use floem::peniko::Color;

use crate::math;

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl SolidColor {
    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }
}

impl Default for SolidColor {
    fn default() -> Self {
        Self {
            r: 0.5,
            g: 0.5,
            b: 0.5,
            a: 1.0,
        }
    }
}

impl SolidColor {
    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Create from f64 RGBA (all 0.0–1.0).
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 chars).
    ///
    /// 8-char hex is interpreted as RRGGBBAA. 3 and 6-char hex default to full opacity.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&stripped[range], 16).ok();
        match stripped.len() {
            3 => {
                let r = channel(0..1)?;
                let g = channel(1..2)?;
                let b = channel(2..3)?;
                Some(Self::from_rgb(r * 17, g * 17, b * 17))
            }
            6 => Some(Self::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => {
                let rgb = Self::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?);
                Some(Self {
                    a: channel(6..8)? as f64 / 255.0,
                    ..rgb
                })
            }
            _ => None,
        }
    }

    /// Format as lowercase `#rrggbb`, the form palette values are written in.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Linear blend in RGB space; `t` is clamped to 0.0–1.0.
    pub fn mix(self, to: SolidColor, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: math::lerp(self.r, to.r, t),
            g: math::lerp(self.g, to.g, t),
            b: math::lerp(self.b, to.b, t),
            a: math::lerp(self.a, to.a, t),
        }
    }

    /// Renderer color for painting.
    pub fn to_peniko(self) -> Color {
        Color::rgba(self.r, self.g, self.b, self.a)
    }
}
