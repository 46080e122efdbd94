//! Solve entry points.
//!
//! [`solve`] validates the target, normalizes the options, then runs the
//! strategies in priority order and returns the first success. When every
//! strategy comes up empty the best-attempt fallback supplies the result, so
//! a solve always produces steps to show (unless the palette is empty).
//!
//! ```
//! use color_mixer::{SolverOptions, solve};
//!
//! let options = SolverOptions::new()
//!     .available_colors(["#ff0000", "#00ff00"])
//!     .tolerance(5.0);
//! let result = solve("#808000", &options);
//! assert!(result.success);
//! assert_eq!(result.steps.len(), 2);
//! assert_eq!(result.final_color.hex(), "#808000");
//! ```

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::color::{Rgb, parse_hex};
use crate::mixture::MixingStep;
use crate::options::{NormalizedOptions, SolverOptions};
use crate::result::SolverResult;
use crate::strategy::{self, BestAttempt};

/// Solve for a hex target (`#RRGGBB`).
///
/// The evolutionary strategy is seeded from `options.seed`, or from the OS
/// when no seed is set.
#[must_use]
pub fn solve(target: &str, options: &SolverOptions) -> SolverResult {
    let mut rng = match options.seed {
        Some(seed) => Pcg32::seed_from_u64(seed),
        None => Pcg32::from_os_rng(),
    };
    solve_with_rng(target, options, &mut rng)
}

/// [`solve`] with an explicit random source.
#[must_use]
pub fn solve_with_rng(target: &str, options: &SolverOptions, rng: &mut dyn RngCore) -> SolverResult {
    match parse_hex(target) {
        Ok(color) => solve_color(color, &options.normalized(), rng),
        Err(err) => {
            log::debug!("rejecting target: {err}");
            SolverResult::invalid_target(&err)
        }
    }
}

/// Solve for an already parsed target.
#[must_use]
pub fn solve_color(target: Rgb, options: &NormalizedOptions, rng: &mut dyn RngCore) -> SolverResult {
    log::debug!(
        "solving {} with {} palette color(s), tolerance {}, {} slot(s)",
        target.hex(),
        options.palette.len(),
        options.tolerance,
        options.max_slots
    );

    for strategy in strategy::chain() {
        if let Some(attempt) = strategy.attempt(target, options, rng) {
            log::debug!("{} strategy succeeded with {}", strategy.kind(), attempt.mixture);
            return SolverResult::from_attempt(target, strategy.kind(), attempt, true);
        }
        log::trace!("{} strategy found nothing", strategy.kind());
    }

    let fallback = BestAttempt;
    let attempt = BestAttempt::search(target, options);
    SolverResult::from_attempt(target, fallback.kind(), attempt, false)
}

/// First step toward the target: of the solution, or of the closest attempt.
#[must_use]
pub fn hint(target: &str, options: &SolverOptions) -> Option<MixingStep> {
    solve(target, options).steps.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::StrategyKind;

    fn seeded(colors: &[&str], tolerance: f64) -> SolverOptions {
        SolverOptions::new()
            .available_colors(colors.iter().copied())
            .tolerance(tolerance)
            .seed(1)
    }

    #[test]
    fn test_single_color_palette() {
        let result = solve("#ff0000", &seeded(&["#ff0000"], 25.0));
        assert!(result.success);
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.final_color.hex(), "#ff0000");
        assert_eq!(result.accuracy, 100.0);
        assert_eq!(result.strategy, Some(StrategyKind::Exhaustive));
    }

    #[test]
    fn test_invalid_target_runs_nothing() {
        let result = solve("red", &SolverOptions::new());
        assert!(!result.success);
        assert!(result.steps.is_empty());
        assert_eq!(result.strategy, None);
        assert!(result.explanation.contains("Invalid hex color"));
    }

    #[test]
    fn test_lightness_runs_after_exhaustive() {
        // With three slots the triple search never picks red (palette index 3)
        // as its last color, so only the lightness strategy finds red + 2 white.
        let target = crate::color::blend(&[Rgb::RED, Rgb::WHITE, Rgb::WHITE]);
        let options = seeded(&["#ffffff", "#000000", "#00ff00", "#ff0000"], 0.0).max_slots(3);
        let result = solve(&target.hex(), &options);
        assert!(result.success);
        assert_eq!(result.strategy, Some(StrategyKind::LightnessCorrection));
        assert_eq!(result.steps.len(), 3);
        assert_eq!(result.steps[0].color, Some(Rgb::RED));
    }

    #[test]
    fn test_unreachable_target_falls_back() {
        let result = solve("#ffffff", &seeded(&["#ff0000", "#0000ff"], 5.0));
        assert!(!result.success);
        assert_eq!(result.strategy, Some(StrategyKind::BestAttempt));
        assert!(!result.steps.is_empty());
        assert!(result.accuracy < 50.0);
    }

    #[test]
    fn test_empty_palette_degrades_to_black() {
        let options = SolverOptions::new()
            .available_colors(Vec::<String>::new())
            .seed(3);
        let result = solve("#123456", &options);
        assert!(!result.success);
        assert!(result.steps.is_empty());
        assert_eq!(result.final_color, Rgb::BLACK);
    }

    #[test]
    fn test_hint_is_first_step() {
        let step = hint("#808000", &seeded(&["#ff0000", "#00ff00"], 5.0)).unwrap();
        assert_eq!(step.color, Some(Rgb::RED));
        assert_eq!(step.slot_index, 0);
        assert!(hint("#zzzzzz", &SolverOptions::new()).is_none());
    }
}
