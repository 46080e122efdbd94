//! The ordered set of base colors a solve may combine.

use crate::color::{NAMED_COLORS, Rgb, parse_hex};

/// Hex strings of the default palette: red, green, blue, white, black, yellow,
/// magenta, cyan.
pub const DEFAULT_PALETTE_HEX: [&str; 8] = [
    "#ff0000", "#00ff00", "#0000ff", "#ffffff", "#000000", "#ffff00", "#ff00ff", "#00ffff",
];

/// Ordered, duplicate-free list of base colors.
///
/// Order matters: strategies that enumerate the palette prefer earlier
/// entries when two mixes are equally good.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Build a palette, keeping the first occurrence of each color.
    #[must_use]
    pub fn new(colors: impl IntoIterator<Item = Rgb>) -> Self {
        let mut unique: Vec<Rgb> = Vec::new();
        for color in colors {
            if !unique.contains(&color) {
                unique.push(color);
            }
        }
        Self { colors: unique }
    }

    /// The eight base colors in their conventional order.
    #[must_use]
    pub fn default_colors() -> Self {
        Self::new(NAMED_COLORS.iter().map(|(_, color)| *color))
    }

    /// Parse a list of hex strings.
    ///
    /// Entries that fail to parse are skipped with a warning; they can never
    /// take part in a mix.
    #[must_use]
    pub fn from_hex<S: AsRef<str>>(entries: &[S]) -> Self {
        let colors = entries.iter().filter_map(|entry| {
            let entry = entry.as_ref();
            match parse_hex(entry) {
                Ok(color) => Some(color),
                Err(err) => {
                    log::warn!("ignoring palette entry: {err}");
                    None
                }
            }
        });
        Self::new(colors)
    }

    #[must_use]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn contains(&self, color: Rgb) -> bool {
        self.colors.contains(&color)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.colors.iter().copied()
    }
}
