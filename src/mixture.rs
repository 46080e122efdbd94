//! Mixes and the step sequences that reproduce them.

use smallvec::SmallVec;
use std::fmt;

use crate::color::{Rgb, blend, color_name, distance};

/// Inline capacity of a [`Mixture`]; the default slot budget fits without allocating.
const INLINE_SLOTS: usize = 8;

/// An ordered combination of palette colors, one color per slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Mixture {
    colors: SmallVec<[Rgb; INLINE_SLOTS]>,
}

impl Mixture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_colors(colors: &[Rgb]) -> Self {
        Self {
            colors: SmallVec::from_slice(colors),
        }
    }

    pub fn push(&mut self, color: Rgb) {
        self.colors.push(color);
    }

    pub fn pop(&mut self) -> Option<Rgb> {
        self.colors.pop()
    }

    /// Replace the color at `index`; out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, color: Rgb) {
        if let Some(slot) = self.colors.get_mut(index) {
            *slot = color;
        }
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

    /// The color this mix produces.
    #[must_use]
    pub fn blended(&self) -> Rgb {
        blend(&self.colors)
    }

    /// Distance from the blended color to `target`.
    #[must_use]
    pub fn distance_to(&self, target: Rgb) -> f64 {
        distance(target, self.blended())
    }

    /// One `Add` step per color, slots numbered from 0.
    #[must_use]
    pub fn steps(&self) -> Vec<MixingStep> {
        self.colors
            .iter()
            .enumerate()
            .map(|(slot, color)| MixingStep::add(*color, slot))
            .collect()
    }
}

impl FromIterator<Rgb> for Mixture {
    fn from_iter<I: IntoIterator<Item = Rgb>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Mixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.colors.iter().map(|c| describe_color(*c)).collect();
        write!(f, "[{}]", parts.join(" + "))
    }
}

/// What a step does to its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepAction {
    Add,
    Clear,
}

impl StepAction {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Clear => "clear",
        }
    }
}

/// A single instruction for the player: put a color into a slot, or empty it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixingStep {
    pub action: StepAction,
    pub color: Option<Rgb>,
    pub slot_index: usize,
    pub description: String,
}

impl MixingStep {
    #[must_use]
    pub fn add(color: Rgb, slot_index: usize) -> Self {
        Self {
            action: StepAction::Add,
            color: Some(color),
            slot_index,
            description: format!("Add {} to slot {}", describe_color(color), slot_index + 1),
        }
    }

    #[must_use]
    pub fn clear(slot_index: usize) -> Self {
        Self {
            action: StepAction::Clear,
            color: None,
            slot_index,
            description: format!("Clear slot {}", slot_index + 1),
        }
    }
}

/// `red (#ff0000)` for base colors, the bare hex otherwise.
#[must_use]
pub fn describe_color(color: Rgb) -> String {
    match color_name(color) {
        Some(name) => format!("{name} ({})", color.hex()),
        None => color.hex(),
    }
}

/// Replay steps onto empty slots and blend whatever ends up occupied.
///
/// An `Add` overwrites its slot, a `Clear` empties it.
#[must_use]
pub fn apply_steps(steps: &[MixingStep]) -> Rgb {
    let mut slots: Vec<Option<Rgb>> = Vec::new();
    for step in steps {
        if slots.len() <= step.slot_index {
            slots.resize(step.slot_index + 1, None);
        }
        slots[step.slot_index] = match step.action {
            StepAction::Add => step.color,
            StepAction::Clear => None,
        };
    }
    let occupied: Vec<Rgb> = slots.into_iter().flatten().collect();
    blend(&occupied)
}
