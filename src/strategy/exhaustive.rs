//! Exact search over one-, two-, and three-color mixes.
//!
//! Candidates are visited singles first, then pairs `(i <= j)`, then triples
//! `(i <= j <= k)` in palette-index order, and the first one within tolerance
//! wins. Earlier palette entries and smaller mixes therefore beat later or
//! larger ones even when those would be closer.

use rand::RngCore;

use super::{Attempt, Strategy, StrategyKind};
use crate::color::{Rgb, blend, distance};
use crate::mixture::Mixture;
use crate::options::NormalizedOptions;

#[derive(Debug, Clone, Copy, Default)]
pub struct Exhaustive;

impl Exhaustive {
    /// Deterministic search, usable without an RNG.
    #[must_use]
    pub fn search(target: Rgb, options: &NormalizedOptions) -> Option<Attempt> {
        let colors = options.palette.colors();
        let n = colors.len();
        let max_slots = options.max_slots;
        let matches = |combo: &[Rgb]| options.within_tolerance(distance(target, blend(combo)));

        if max_slots >= 1 {
            for &a in colors {
                if matches(&[a]) {
                    return Some(found(&[a]));
                }
            }
        }

        if max_slots >= 2 {
            for i in 0..n {
                for j in i..n {
                    let combo = [colors[i], colors[j]];
                    if matches(&combo) {
                        return Some(found(&combo));
                    }
                }
            }
        }

        if max_slots >= 3 {
            // The third index is also bounded by the slot budget.
            let k_end = n.min(max_slots);
            for i in 0..n {
                for j in i..n {
                    for k in j..k_end {
                        let combo = [colors[i], colors[j], colors[k]];
                        if matches(&combo) {
                            return Some(found(&combo));
                        }
                    }
                }
            }
        }

        log::trace!("exhaustive: no 1-3 color mix within {}", options.tolerance);
        None
    }
}

fn found(combo: &[Rgb]) -> Attempt {
    let explanation = match combo.len() {
        1 => "The target matches a single palette color.".to_string(),
        n => format!("Mixing {n} palette colors in equal parts reproduces the target."),
    };
    Attempt::new(Mixture::from_colors(combo), explanation)
}

impl Strategy for Exhaustive {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Exhaustive
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SolverOptions;

    fn opts(colors: &[&str], tolerance: f64) -> NormalizedOptions {
        SolverOptions::new()
            .available_colors(colors.iter().copied())
            .tolerance(tolerance)
            .normalized()
    }

    #[test]
    fn test_single_color_match() {
        let found = Exhaustive::search(Rgb::RED, &opts(&["#ff0000"], 0.0)).unwrap();
        assert_eq!(found.mixture.colors(), &[Rgb::RED]);
    }

    #[test]
    fn test_pair_match() {
        let target = Rgb::new(0x80, 0x80, 0x00);
        let found = Exhaustive::search(target, &opts(&["#ff0000", "#00ff00"], 5.0)).unwrap();
        assert_eq!(found.mixture.colors(), &[Rgb::RED, Rgb::GREEN]);
        assert_eq!(found.mixture.blended(), target);
    }

    #[test]
    fn test_triple_match() {
        // red + red + blue = (170, 0, 85)
        let target = Rgb::new(170, 0, 85);
        let found = Exhaustive::search(target, &opts(&["#ff0000", "#0000ff"], 0.0)).unwrap();
        assert_eq!(found.mixture.colors(), &[Rgb::RED, Rgb::RED, Rgb::BLUE]);
    }

    #[test]
    fn test_first_match_wins_over_closer_later_match() {
        // Both red and (254, 0, 0) are within tolerance; red comes first.
        let target = Rgb::new(254, 0, 0);
        let found = Exhaustive::search(target, &opts(&["#ff0000", "#fe0000"], 5.0)).unwrap();
        assert_eq!(found.mixture.colors(), &[Rgb::RED]);
    }

    #[test]
    fn test_smaller_mix_wins_over_exact_larger_mix() {
        // red + red + green is exactly (170, 85, 0); red + green is ~60 away.
        let target = Rgb::new(170, 85, 0);
        let found = Exhaustive::search(target, &opts(&["#ff0000", "#00ff00"], 61.0)).unwrap();
        assert_eq!(found.mixture.colors(), &[Rgb::RED, Rgb::GREEN]);

        // Red alone is ~120 away but still beats the closer pair and triple.
        let found = Exhaustive::search(target, &opts(&["#ff0000", "#00ff00"], 121.0)).unwrap();
        assert_eq!(found.mixture.colors(), &[Rgb::RED]);

        let found = Exhaustive::search(target, &opts(&["#ff0000", "#00ff00"], 0.0)).unwrap();
        assert_eq!(found.mixture.colors(), &[Rgb::RED, Rgb::RED, Rgb::GREEN]);
    }

    #[test]
    fn test_slot_budget_limits_combination_size() {
        let target = Rgb::new(0x80, 0x80, 0x00);
        let options = SolverOptions::new()
            .available_colors(["#ff0000", "#00ff00"])
            .tolerance(5.0)
            .max_slots(1)
            .normalized();
        assert!(Exhaustive::search(target, &options).is_none());
    }

    #[test]
    fn test_third_index_bounded_by_slots() {
        // white + white + blue needs k = 2 (blue is third), allowed with 3 slots.
        let target = blend(&[Rgb::WHITE, Rgb::WHITE, Rgb::BLUE]);
        let options = opts(&["#ffffff", "#ff0000", "#0000ff"], 0.0);
        assert!(Exhaustive::search(target, &options).is_some());

        // With four palette entries and 3 slots the fourth color can never be
        // the third pick.
        let target = blend(&[Rgb::WHITE, Rgb::WHITE, Rgb::GREEN]);
        let colors = ["#ffffff", "#ff0000", "#0000ff", "#00ff00"];
        let limited = SolverOptions::new()
            .available_colors(colors)
            .tolerance(0.0)
            .max_slots(3)
            .normalized();
        assert!(Exhaustive::search(target, &limited).is_none());
        assert!(Exhaustive::search(target, &opts(&colors, 0.0)).is_some());
    }

    #[test]
    fn test_empty_palette_fails() {
        assert!(Exhaustive::search(Rgb::RED, &opts(&[], 100.0)).is_none());
    }
}
