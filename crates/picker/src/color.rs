//! HSV color model with derived RGB/HSL views.
//!
//! Every conversion in the crate lives here. The wheel ring, the lightness
//! overlay and the slider gradient all color themselves through these
//! functions, so the hue/saturation space stays consistent between shapes.

use serde::{Deserialize, Serialize};

use crate::errors::PickerError;

/// Hue/saturation/value color. Hue is in degrees `[0, 360)`, saturation and
/// value are percentages `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    /// Build a normalized color: hue wraps modulo 360, saturation and value
    /// clamp to `[0, 100]`. Out-of-range input is never rejected.
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 100.0),
            v: v.clamp(0.0, 100.0),
        }
    }

    /// Apply a partial update; omitted channels keep their current value.
    /// The result is normalized.
    pub fn merged(self, update: HsvUpdate) -> Self {
        Self::new(
            update.h.unwrap_or(self.h),
            update.s.unwrap_or(self.s),
            update.v.unwrap_or(self.v),
        )
    }

    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0) / 60.0;
        let s = self.s / 100.0;
        let v = self.v / 100.0;

        let c = v * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb {
            r: ((r + m) * 255.0).round() as u8,
            g: ((g + m) * 255.0).round() as u8,
            b: ((b + m) * 255.0).round() as u8,
        }
    }

    pub fn to_hsl(self) -> Hsl {
        let s = self.s / 100.0;
        let v = self.v / 100.0;

        let l = v * (2.0 - s) / 2.0;
        let denom = 1.0 - (2.0 * l - 1.0).abs();
        let sl = if denom <= f32::EPSILON {
            0.0
        } else {
            (v * s) / denom
        };

        Hsl {
            h: self.h,
            s: (sl * 100.0).clamp(0.0, 100.0),
            l: (l * 100.0).clamp(0.0, 100.0),
        }
    }
}

impl Default for Hsv {
    fn default() -> Self {
        // White, the widget's default initial color.
        Self {
            h: 0.0,
            s: 0.0,
            v: 100.0,
        }
    }
}

/// Partial HSV update. Channels left as `None` are unchanged by
/// [`Color::set`](crate::Color::set) and diff `false` in the resulting
/// [`ChangeSet`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HsvUpdate {
    pub h: Option<f32>,
    pub s: Option<f32>,
    pub v: Option<f32>,
}

impl HsvUpdate {
    /// The wheel's output: hue and saturation, value untouched.
    pub fn hue_saturation(h: f32, s: f32) -> Self {
        Self {
            h: Some(h),
            s: Some(s),
            v: None,
        }
    }

    /// The slider's output: value only.
    pub fn value(v: f32) -> Self {
        Self {
            h: None,
            s: None,
            v: Some(v),
        }
    }
}

impl From<Hsv> for HsvUpdate {
    fn from(hsv: Hsv) -> Self {
        Self {
            h: Some(hsv.h),
            s: Some(hsv.s),
            v: Some(hsv.v),
        }
    }
}

/// Per-channel diff produced by a color mutation: `true` where the channel's
/// value differs from its value before the mutation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    pub h: bool,
    pub s: bool,
    pub v: bool,
}

impl ChangeSet {
    pub(crate) fn between(before: Hsv, after: Hsv) -> Self {
        Self {
            h: before.h != after.h,
            s: before.s != after.s,
            v: before.v != after.v,
        }
    }

    pub(crate) fn all() -> Self {
        Self {
            h: true,
            s: true,
            v: true,
        }
    }

    pub fn any(self) -> bool {
        self.h || self.s || self.v
    }
}

/// 8-bit RGB view, derived from [`Hsv`] and never independently settable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Parse a `#rgb` or `#rrggbb` hex literal.
    pub fn parse_hex(value: &str) -> Result<Self, PickerError> {
        let invalid = || PickerError::InvalidColor(value.to_string());
        let digits = value.strip_prefix('#').ok_or_else(invalid)?;

        let channel = |nibbles: &str| u8::from_str_radix(nibbles, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                let nibble = |ix: usize| channel(&digits[ix..ix + 1]).map(|n| n * 16 + n);
                Ok(Self {
                    r: nibble(0)?,
                    g: nibble(1)?,
                    b: nibble(2)?,
                })
            }
            6 => Ok(Self {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            }),
            _ => Err(invalid()),
        }
    }

    pub fn to_hsv(self) -> Hsv {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;

        let s = if max == 0.0 { 0.0 } else { d / max };
        let v = max;

        let mut h = 0.0;
        if max != min {
            if max == r {
                h = (g - b) / d + (if g < b { 6.0 } else { 0.0 });
            } else if max == g {
                h = (b - r) / d + 2.0;
            } else {
                h = (r - g) / d + 4.0;
            }
            h *= 60.0;
        }

        Hsv::new(h, s * 100.0, v * 100.0)
    }

    pub fn css_string(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn hex_string(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// HSL view, derived from [`Hsv`]. Saturation and lightness are percentages.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    /// CSS form with components rounded to integers, e.g. `hsl(210, 100%, 50%)`.
    pub fn css_string(self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.h.round(),
            self.s.round(),
            self.l.round()
        )
    }
}
