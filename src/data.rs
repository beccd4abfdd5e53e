//! Fixed-shape payload records.
//!
//! These are the record shapes a [`Value`](crate::Value) can carry beside the
//! scalar kinds: geometry, color, margins and font descriptions. No range
//! validation happens here; the parser hands in whatever the source said.

use bitflags::bitflags;
use serde::Serialize;

/// A 2D point in logical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// A rectangle inside the sprite sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Sprite {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

/// A 2D extent in logical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// Creates a color from channel values.
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

/// Edge insets in logical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Margins {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

bitflags! {
    /// Font style modifiers.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
    pub struct FontFlags: u32 {
        const BOLD = 0x01;
        const ITALIC = 0x02;
        const UNDERLINE = 0x04;
    }
}

/// A font description: family name, size in logical pixels, modifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Font {
    pub family: String,
    pub size: i32,
    pub flags: FontFlags,
}

/// Scales a pixel quantity to a display density.
///
/// `scale` is in quarter steps of the base density, so `4` is 100% and `5` is
/// 125%. Results round half away from zero, nudged 0.01 toward zero so that
/// exact quarter boundaries land on the smaller magnitude.
///
/// # Example
///
/// ```rust
/// use styledef::px_adjust;
///
/// assert_eq!(px_adjust(10, 4), 10);  // 100%
/// assert_eq!(px_adjust(10, 5), 12);  // 125%: 12.5 rounds down
/// assert_eq!(px_adjust(10, 6), 15);  // 150%
/// assert_eq!(px_adjust(-10, 5), -12);
/// ```
pub fn px_adjust(value: i32, scale: i32) -> i32 {
    let nudge = if value > 0 { -0.01 } else { 0.01 };
    (f64::from(value) * f64::from(scale) / 4.0 + nudge).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_adjust_identity_at_base_scale() {
        for value in [-7, -1, 0, 1, 2, 10, 33] {
            assert_eq!(px_adjust(value, 4), value);
        }
    }

    #[test]
    fn test_px_adjust_rounds_boundaries_toward_zero() {
        // 2 * 5 / 4 = 2.5, nudged to 2.49
        assert_eq!(px_adjust(2, 5), 2);
        assert_eq!(px_adjust(-2, 5), -2);
        // 3 * 6 / 4 = 4.5, nudged to 4.49
        assert_eq!(px_adjust(3, 6), 4);
    }

    #[test]
    fn test_px_adjust_zero() {
        assert_eq!(px_adjust(0, 4), 0);
        assert_eq!(px_adjust(0, 8), 0);
    }

    #[test]
    fn test_font_flags_combine() {
        let flags = FontFlags::BOLD | FontFlags::ITALIC;
        assert!(flags.contains(FontFlags::BOLD));
        assert!(!flags.contains(FontFlags::UNDERLINE));
        assert_eq!(flags.bits(), 0x03);
    }

    #[test]
    fn test_records_default_to_zero() {
        assert_eq!(Point::default(), Point { x: 0, y: 0 });
        assert_eq!(Color::default(), Color::rgba(0, 0, 0, 0));
        assert_eq!(Font::default().family, "");
        assert_eq!(Font::default().flags, FontFlags::empty());
    }
}
