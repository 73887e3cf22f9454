use crate::foundation::error::{ProtovizError, ProtovizResult};

pub use kurbo::{Point, Rect, Vec2};

/// Size of the drawing surface in logical pixels.
///
/// Layout is always recomputed from this value; nothing derived from it is cached across
/// renders, so a resize only needs a new `Surface`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Surface {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A surface that has not been mounted yet.
    pub const fn unmounted() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Whether anything can be drawn on this surface.
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Map a fractional position (`0..1` on both axes) onto this surface.
    pub fn at_fraction(self, fx: f64, fy: f64) -> Point {
        Point::new(self.width * fx, self.height * fy)
    }

    /// Pixel size of the surface, rounded up, for rasterization.
    pub fn pixel_size(self) -> ProtovizResult<(u32, u32)> {
        fn to_px(v: f64) -> ProtovizResult<u32> {
            if !v.is_finite() || v <= 0.0 {
                return Err(ProtovizError::render("surface has invalid width/height"));
            }
            Ok((v.ceil() as u32).max(1))
        }
        Ok((to_px(self.width)?, to_px(self.height)?))
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Rgba8 = Rgba8::rgb(0xff, 0xff, 0xff);
    pub const INK: Rgba8 = Rgba8::rgb(0x0a, 0x0e, 0x27);
    pub const CYAN: Rgba8 = Rgba8::rgb(0x00, 0xf0, 0xff);
    pub const VIOLET: Rgba8 = Rgba8::rgb(0xaa, 0x00, 0xff);
    pub const GREEN: Rgba8 = Rgba8::rgb(0x00, 0xff, 0x88);
    pub const MAGENTA: Rgba8 = Rgba8::rgb(0xff, 0x00, 0xaa);
    pub const RED: Rgba8 = Rgba8::rgb(0xeb, 0x47, 0x47);
    pub const AMBER: Rgba8 = Rgba8::rgb(0xff, 0xaa, 0x00);
    pub const GRAY: Rgba8 = Rgba8::rgb(0x88, 0x88, 0x88);

    /// Same color with alpha scaled by `opacity` (clamped to `[0, 1]`).
    pub fn with_opacity(self, opacity: f64) -> Self {
        let o = opacity.clamp(0.0, 1.0);
        Self {
            a: ((f64::from(self.a) * o).round()) as u8,
            ..self
        }
    }

    pub fn opacity(self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// `#rrggbb`, alpha ignored.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn parse_hex(s: &str) -> ProtovizResult<Self> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ProtovizError::validation(format!("color '{s}' must start with '#'")))?;

        let nibble = |c: u8| -> ProtovizResult<u8> {
            match c {
                b'0'..=b'9' => Ok(c - b'0'),
                b'a'..=b'f' => Ok(c - b'a' + 10),
                b'A'..=b'F' => Ok(c - b'A' + 10),
                _ => Err(ProtovizError::validation(format!(
                    "color '{s}' has a non-hex digit"
                ))),
            }
        };
        let bytes = digits.as_bytes();
        let byte = |i: usize| -> ProtovizResult<u8> { Ok(nibble(bytes[i])? << 4 | nibble(bytes[i + 1])?) };

        match bytes.len() {
            3 => {
                let r = nibble(bytes[0])?;
                let g = nibble(bytes[1])?;
                let b = nibble(bytes[2])?;
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(ProtovizError::validation(format!(
                "color '{s}' must have 3, 6 or 8 hex digits"
            ))),
        }
    }
}

/// Milliseconds on a [`crate::Clock`] timeline.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    pub fn saturating_add(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }

    pub fn saturating_sub(self, other: Millis) -> u64 {
        self.0.saturating_sub(other.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
