//! RGB color primitives used by every solver strategy.
//!
//! This module provides:
//! - [`Rgb`], the 24-bit color value the solver works with
//! - strict `#rrggbb` parsing and formatting
//! - Euclidean RGB [`distance`] and the derived [`accuracy`] percentage
//! - the unweighted [`blend`] of any number of colors
//!
//! # Examples
//!
//! ```
//! use color_mixer::color::{Rgb, accuracy, blend, distance, parse_hex};
//!
//! let red = parse_hex("#ff0000").unwrap();
//! let green = parse_hex("00FF00").unwrap();
//!
//! // Averaging rounds half up: (255 + 0) / 2 = 127.5 -> 128
//! let olive = blend(&[red, green]);
//! assert_eq!(olive.hex(), "#808000");
//!
//! assert_eq!(distance(red, red), 0.0);
//! assert_eq!(accuracy(olive, olive), 100.0);
//! assert_eq!(blend(&[]), Rgb::BLACK);
//! ```

use num_rational::Ratio;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Largest possible Euclidean distance between two RGB colors, `sqrt(3 * 255^2)`.
pub const MAX_DISTANCE: f64 = 441.672_955_930_063_7;

/// A 24-bit RGB color with channels in 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
    pub const YELLOW: Self = Self::new(255, 255, 0);
    pub const MAGENTA: Self = Self::new(255, 0, 255);
    pub const CYAN: Self = Self::new(0, 255, 255);

    /// Create a color from RGB components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a color from wider integers, clamping each channel into 0-255.
    #[must_use]
    pub fn clamped(red: i64, green: i64, blue: i64) -> Self {
        let clamp = |v: i64| u8::try_from(v.clamp(0, 255)).unwrap_or(u8::MAX);
        Self::new(clamp(red), clamp(green), clamp(blue))
    }

    /// Returns CSS-style hex format `#rrggbb`.
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Channels as an array, in R, G, B order.
    #[must_use]
    pub const fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Returns normalized RGB as floats in range 0.0-1.0.
    #[must_use]
    pub fn normalized(&self) -> (f64, f64, f64) {
        (
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
        )
    }

    /// Convert to HSL.
    ///
    /// Achromatic colors (including black and white) report hue 0.
    #[must_use]
    pub fn to_hsl(&self) -> Hsl {
        let (r, g, b) = self.normalized();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = f64::midpoint(max, min);

        if (max - min).abs() < f64::EPSILON {
            return Hsl {
                hue: 0.0,
                saturation: 0.0,
                lightness: lightness * 100.0,
            };
        }

        let delta = max - min;
        let saturation = if lightness <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let hue = if (max - r).abs() < f64::EPSILON {
            (g - b) / delta + (if g < b { 6.0 } else { 0.0 })
        } else if (max - g).abs() < f64::EPSILON {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Hsl {
            hue: hue * 60.0,
            saturation: saturation * 100.0,
            lightness: lightness * 100.0,
        }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Rgb {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl TryFrom<&str> for Rgb {
    type Error = HexParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_hex(value)
    }
}

/// Hue in degrees [0, 360), saturation and lightness in percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

/// Circular distance between two hues in degrees, in [0, 180].
#[must_use]
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    diff.min(360.0 - diff)
}

/// Error type for hex color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexParseError {
    Empty,
    /// Not six hex digits (optionally prefixed with `#`).
    InvalidHex(String),
}

impl fmt::Display for HexParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty color string"),
            Self::InvalidHex(s) => {
                write!(f, "Invalid hex color: {s:?} (expected #RRGGBB)")
            }
        }
    }
}

impl std::error::Error for HexParseError {}

/// Parse a `#RRGGBB` (or `RRGGBB`) string, case-insensitively.
///
/// Three-digit shorthand, surrounding whitespace, and every other shape are
/// rejected.
///
/// # Errors
///
/// Returns `HexParseError::Empty` for an empty string and
/// `HexParseError::InvalidHex` for any other malformed input.
pub fn parse_hex(text: &str) -> Result<Rgb, HexParseError> {
    static HEX_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^#?([0-9a-fA-F]{6})$").expect("valid regex"));

    if text.is_empty() {
        return Err(HexParseError::Empty);
    }

    let caps = HEX_RE
        .captures(text)
        .ok_or_else(|| HexParseError::InvalidHex(text.to_string()))?;
    let digits = &caps[1];

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| HexParseError::InvalidHex(text.to_string()))
    };

    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Like [`parse_hex`], discarding the error.
#[must_use]
pub fn hex_to_rgb(text: &str) -> Option<Rgb> {
    parse_hex(text).ok()
}

/// Euclidean distance between two colors in RGB space.
#[must_use]
pub fn distance(a: Rgb, b: Rgb) -> f64 {
    a.channels()
        .iter()
        .zip(b.channels().iter())
        .map(|(&x, &y)| {
            let d = f64::from(x) - f64::from(y);
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Closeness of `actual` to `target` as a percentage in [0, 100].
///
/// 100 only for identical colors, decreasing linearly with distance.
#[must_use]
pub fn accuracy(target: Rgb, actual: Rgb) -> f64 {
    accuracy_from_distance(distance(target, actual))
}

/// [`accuracy`] for an already computed distance.
#[must_use]
pub fn accuracy_from_distance(distance: f64) -> f64 {
    (100.0 - 100.0 * distance / MAX_DISTANCE).max(0.0)
}

/// Unweighted per-channel mean, rounded half up. `blend(&[])` is black.
#[must_use]
pub fn blend(colors: &[Rgb]) -> Rgb {
    let mut sums = [0u32; 3];
    for color in colors {
        for (sum, channel) in sums.iter_mut().zip(color.channels()) {
            *sum += u32::from(channel);
        }
    }
    let count = u32::try_from(colors.len()).unwrap_or(u32::MAX);
    mean_of_sums(sums, count)
}

/// Blend from precomputed channel sums over `count` colors.
pub(crate) fn mean_of_sums(sums: [u32; 3], count: u32) -> Rgb {
    if count == 0 {
        return Rgb::BLACK;
    }
    let mean = |sum: u32| {
        let rounded = Ratio::new(sum, count).round().to_integer();
        u8::try_from(rounded).unwrap_or(u8::MAX)
    };
    Rgb::new(mean(sums[0]), mean(sums[1]), mean(sums[2]))
}

/// Human name of the eight base colors of the default palette.
#[must_use]
pub fn color_name(color: Rgb) -> Option<&'static str> {
    NAMED_COLORS
        .iter()
        .find(|(_, named)| *named == color)
        .map(|(name, _)| *name)
}

/// Base colors in default-palette order.
pub const NAMED_COLORS: [(&str, Rgb); 8] = [
    ("red", Rgb::RED),
    ("green", Rgb::GREEN),
    ("blue", Rgb::BLUE),
    ("white", Rgb::WHITE),
    ("black", Rgb::BLACK),
    ("yellow", Rgb::YELLOW),
    ("magenta", Rgb::MAGENTA),
    ("cyan", Rgb::CYAN),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb::new(255, 128, 0).hex(), "#ff8000");
        assert_eq!(Rgb::new(1, 2, 3).hex(), "#010203");
        assert_eq!(Rgb::BLACK.to_string(), "#000000");
    }

    #[test]
    fn test_rgb_from_tuple_and_array() {
        assert_eq!(Rgb::from((255, 128, 0)), Rgb::new(255, 128, 0));
        assert_eq!(Rgb::from([0, 255, 255]), Rgb::CYAN);
        let color: Rgb = Rgb::MAGENTA.channels().into();
        assert_eq!(color, Rgb::MAGENTA);
    }

    #[test]
    fn test_rgb_clamped() {
        assert_eq!(Rgb::clamped(-10, 300, 128), Rgb::new(0, 255, 128));
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(parse_hex("#ff0000"), Ok(Rgb::RED));
        assert_eq!(parse_hex("ff0000"), Ok(Rgb::RED));
        assert_eq!(parse_hex("#FF00ff"), Ok(Rgb::MAGENTA));
        assert_eq!("#00ffff".parse::<Rgb>(), Ok(Rgb::CYAN));
    }

    #[test]
    fn test_parse_hex_rejects_malformed() {
        assert_eq!(parse_hex(""), Err(HexParseError::Empty));
        for bad in ["#fff", "fff", "red", "#ff00", "#ff00000", "#gg0000", " #ff0000", "##ff0000"] {
            assert!(
                matches!(parse_hex(bad), Err(HexParseError::InvalidHex(_))),
                "{bad} should be rejected"
            );
        }
        assert_eq!(hex_to_rgb("nope"), None);
    }

    #[test]
    fn test_distance_bounds() {
        assert_eq!(distance(Rgb::RED, Rgb::RED), 0.0);
        assert!((distance(Rgb::BLACK, Rgb::WHITE) - MAX_DISTANCE).abs() < 1e-9);
        assert!((distance(Rgb::RED, Rgb::GREEN) - distance(Rgb::GREEN, Rgb::RED)).abs() < 1e-12);
    }

    #[test]
    fn test_accuracy() {
        assert_eq!(accuracy(Rgb::RED, Rgb::RED), 100.0);
        assert!(accuracy(Rgb::BLACK, Rgb::WHITE).abs() < 1e-9);
        let near = accuracy(Rgb::RED, Rgb::new(250, 0, 0));
        let far = accuracy(Rgb::RED, Rgb::new(200, 0, 0));
        assert!(near > far);
        assert!(accuracy_from_distance(MAX_DISTANCE * 2.0) >= 0.0);
    }

    #[test]
    fn test_blend_rounds_half_up() {
        assert_eq!(blend(&[Rgb::WHITE, Rgb::BLACK]), Rgb::new(128, 128, 128));
        assert_eq!(blend(&[Rgb::RED, Rgb::GREEN]).hex(), "#808000");
        // 255 / 3 = 85.0, 510 / 3 = 170.0
        assert_eq!(blend(&[Rgb::RED, Rgb::RED, Rgb::BLUE]), Rgb::new(170, 0, 85));
        // (1 + 0 + 0) / 3 = 0.33 -> 0, (2 + 0 + 0) / 3 = 0.67 -> 1
        assert_eq!(
            blend(&[Rgb::new(1, 2, 0), Rgb::BLACK, Rgb::BLACK]),
            Rgb::new(0, 1, 0)
        );
    }

    #[test]
    fn test_blend_edge_cases() {
        assert_eq!(blend(&[]), Rgb::BLACK);
        assert_eq!(blend(&[Rgb::new(12, 34, 56)]), Rgb::new(12, 34, 56));
    }

    #[test]
    fn test_to_hsl_primaries() {
        let red = Rgb::RED.to_hsl();
        assert!(red.hue.abs() < 1e-9);
        assert!((red.lightness - 50.0).abs() < 1e-9);
        assert!((red.saturation - 100.0).abs() < 1e-9);

        assert!((Rgb::GREEN.to_hsl().hue - 120.0).abs() < 1e-9);
        assert!((Rgb::BLUE.to_hsl().hue - 240.0).abs() < 1e-9);
        assert!((Rgb::MAGENTA.to_hsl().hue - 300.0).abs() < 1e-9);

        let white = Rgb::WHITE.to_hsl();
        assert_eq!(white.hue, 0.0);
        assert!((white.lightness - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_hue_distance_wraps() {
        assert!((hue_distance(350.0, 10.0) - 20.0).abs() < 1e-9);
        assert!((hue_distance(0.0, 180.0) - 180.0).abs() < 1e-9);
        assert!((hue_distance(60.0, 60.0)).abs() < 1e-9);
    }

    #[test]
    fn test_color_name() {
        assert_eq!(color_name(Rgb::RED), Some("red"));
        assert_eq!(color_name(Rgb::new(1, 1, 1)), None);
    }
}
