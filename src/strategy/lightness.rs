//! Hue first, then lightness.
//!
//! Picks the palette's pure hue closest to the target's hue, then appends up
//! to three units of white (light targets) or black (dark targets). The number
//! of units scales with how far the target's lightness is from the 50% of a
//! pure hue. White and black are never combined and saturation is left alone.

use rand::RngCore;

use super::{Attempt, Strategy, StrategyKind};
use crate::color::{Rgb, distance, hue_distance};
use crate::mixture::{Mixture, describe_color};
use crate::options::NormalizedOptions;

/// Pure hues and their angles.
pub const HUE_ANCHORS: [(f64, Rgb); 6] = [
    (0.0, Rgb::RED),
    (60.0, Rgb::YELLOW),
    (120.0, Rgb::GREEN),
    (180.0, Rgb::CYAN),
    (240.0, Rgb::BLUE),
    (300.0, Rgb::MAGENTA),
];

/// Lightness of every hue anchor, in percent.
const BASE_LIGHTNESS: f64 = 50.0;
/// Targets lighter than this get white.
const LIGHT_THRESHOLD: f64 = 65.0;
/// Targets darker than this get black.
const DARK_THRESHOLD: f64 = 35.0;
const MAX_CORRECTION_UNITS: usize = 3;

#[derive(Debug, Clone, Copy, Default)]
pub struct LightnessCorrection;

impl LightnessCorrection {
    #[must_use]
    pub fn search(target: Rgb, options: &NormalizedOptions) -> Option<Attempt> {
        if options.max_slots == 0 {
            return None;
        }

        let hsl = target.to_hsl();
        let base = closest_anchor(hsl.hue, options)?;

        let mut mixture = Mixture::from_colors(&[base]);
        let units = correction_units(hsl.lightness).min(options.max_slots - 1);
        let correction = if hsl.lightness > LIGHT_THRESHOLD && options.palette.contains(Rgb::WHITE) {
            Some(Rgb::WHITE)
        } else if hsl.lightness < DARK_THRESHOLD && options.palette.contains(Rgb::BLACK) {
            Some(Rgb::BLACK)
        } else {
            None
        };

        if let Some(shade) = correction {
            for _ in 0..units {
                mixture.push(shade);
            }
        }

        let d = distance(target, mixture.blended());
        log::trace!(
            "lightness: base {} with {} correction unit(s), distance {d:.2}",
            base.hex(),
            mixture.len() - 1
        );
        if !options.within_tolerance(d) {
            return None;
        }

        let explanation = match correction {
            Some(shade) if mixture.len() > 1 => format!(
                "Started from {} as the closest hue and added {} unit(s) of {} to correct lightness.",
                describe_color(base),
                mixture.len() - 1,
                describe_color(shade)
            ),
            _ => format!("{} is the closest hue and already matches.", describe_color(base)),
        };
        Some(Attempt::new(mixture, explanation))
    }
}

/// The available anchor with the smallest circular hue distance.
/// Ties go to the anchor listed first.
fn closest_anchor(hue: f64, options: &NormalizedOptions) -> Option<Rgb> {
    let mut best: Option<(f64, Rgb)> = None;
    for (angle, color) in HUE_ANCHORS {
        if !options.palette.contains(color) {
            continue;
        }
        let d = hue_distance(hue, angle);
        if best.is_none_or(|(best_d, _)| d < best_d) {
            best = Some((d, color));
        }
    }
    best.map(|(_, color)| color)
}

/// `round(3 * |L - 50| / 50)`, at most 3.
fn correction_units(lightness: f64) -> usize {
    let deviation = (lightness - BASE_LIGHTNESS).abs();
    let units = (deviation / BASE_LIGHTNESS * 3.0).round();
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "units is a small non-negative integer"
    )]
    let units = units as usize;
    units.min(MAX_CORRECTION_UNITS)
}

impl Strategy for LightnessCorrection {
    fn kind(&self) -> StrategyKind {
        StrategyKind::LightnessCorrection
    }

    fn attempt(
        &self,
        target: Rgb,
        options: &NormalizedOptions,
        _rng: &mut dyn RngCore,
    ) -> Option<Attempt> {
        Self::search(target, options)
    }
}
