//! Last resort: the closest mix of any composition.
//!
//! Walks every sequence of palette colors of length 1 to `max_slots` in
//! depth-first pre-order (`[a]`, `[a, a]`, `[a, a, a]`, ..., `[a, b]`, ...).
//! Sequences that differ only in order are all visited; the first sequence to
//! reach a new minimum distance is kept. The cost is exponential in
//! `max_slots`, which stays small in practice.
//!
//! The result never counts as a success, however close it is.

use super::{Attempt, StrategyKind};
use crate::color::{Rgb, accuracy_from_distance, distance, mean_of_sums};
use crate::mixture::Mixture;
use crate::options::NormalizedOptions;

#[derive(Debug, Clone, Copy, Default)]
pub struct BestAttempt;

impl BestAttempt {
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        StrategyKind::BestAttempt
    }

    /// Closest mix with an explanation of the miss.
    #[must_use]
    pub fn search(target: Rgb, options: &NormalizedOptions) -> Attempt {
        let (mixture, d) = best_attempt(target, options);
        let explanation = if mixture.is_empty() {
            "No colors are available to mix.".to_string()
        } else {
            format!(
                "No mix of up to {} colors lands within tolerance {}; this is the closest one ({:.1}% accurate).",
                options.max_slots,
                options.tolerance,
                accuracy_from_distance(d)
            )
        };
        Attempt::new(mixture, explanation)
    }
}

/// Closest mix and its distance.
///
/// An empty palette or a zero slot budget yields the empty mix (black).
#[must_use]
pub fn best_attempt(target: Rgb, options: &NormalizedOptions) -> (Mixture, f64) {
    let palette = options.palette.colors();
    if palette.is_empty() || options.max_slots == 0 {
        let empty = Mixture::new();
        let d = empty.distance_to(target);
        return (empty, d);
    }

    let mut walk = PreorderWalk::new(palette, options.max_slots);
    let mut best_indices: Vec<usize> = Vec::new();
    let mut best_distance = f64::INFINITY;
    let mut visited: u64 = 0;

    loop {
        visited += 1;
        let d = distance(target, walk.blended());
        if d < best_distance {
            best_distance = d;
            best_indices.clone_from(&walk.indices);
            if d == 0.0 {
                break;
            }
        }
        if !walk.step() {
            break;
        }
    }

    log::debug!("best-attempt: visited {visited} mixes, best distance {best_distance:.2}");
    let mixture = best_indices.iter().map(|&i| palette[i]).collect();
    (mixture, best_distance)
}

/// Explicit-stack depth-first walk over palette index sequences, keeping
/// running channel sums so each visit costs O(1).
struct PreorderWalk<'a> {
    palette: &'a [Rgb],
    max_len: usize,
    indices: Vec<usize>,
    sums: Vec<[u32; 3]>,
}

impl<'a> PreorderWalk<'a> {
    /// Starts at the one-color sequence `[palette[0]]`; `palette` must be non-empty.
    fn new(palette: &'a [Rgb], max_len: usize) -> Self {
        let mut walk = Self {
            palette,
            max_len,
            indices: Vec::with_capacity(max_len),
            sums: Vec::with_capacity(max_len),
        };
        walk.push(0);
        walk
    }

    fn push(&mut self, index: usize) {
        let mut sums = self.sums.last().copied().unwrap_or([0; 3]);
        for (sum, channel) in sums.iter_mut().zip(self.palette[index].channels()) {
            *sum += u32::from(channel);
        }
        self.indices.push(index);
        self.sums.push(sums);
    }

    fn blended(&self) -> Rgb {
        let count = u32::try_from(self.indices.len()).unwrap_or(u32::MAX);
        mean_of_sums(self.sums.last().copied().unwrap_or([0; 3]), count)
    }

    /// Move to the next sequence in pre-order. Returns false when exhausted.
    fn step(&mut self) -> bool {
        if self.indices.len() < self.max_len {
            self.push(0);
            return true;
        }
        while let Some(last) = self.indices.pop() {
            self.sums.pop();
            if last + 1 < self.palette.len() {
                self.push(last + 1);
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::blend;
    use crate::options::SolverOptions;

    fn opts(colors: &[&str], max_slots: usize) -> NormalizedOptions {
        SolverOptions::new()
            .available_colors(colors.iter().copied())
            .max_slots(max_slots)
            .tolerance(0.0)
            .normalized()
    }

    #[test]
    fn test_walk_visits_every_sequence_in_preorder() {
        let palette = [Rgb::RED, Rgb::BLUE];
        let mut walk = PreorderWalk::new(&palette, 2);
        let mut seen = vec![walk.indices.clone()];
        while walk.step() {
            seen.push(walk.indices.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![0],
                vec![0, 0],
                vec![0, 1],
                vec![1],
                vec![1, 0],
                vec![1, 1],
            ]
        );
    }

    #[test]
    fn test_walk_sums_track_blend() {
        let palette = [Rgb::RED, Rgb::WHITE, Rgb::BLUE];
        let mut walk = PreorderWalk::new(&palette, 3);
        loop {
            let colors: Vec<Rgb> = walk.indices.iter().map(|&i| palette[i]).collect();
            assert_eq!(walk.blended(), blend(&colors));
            if !walk.step() {
                break;
            }
        }
    }

    #[test]
    fn test_finds_closest_mix() {
        // Red and blue can only reach the purple family; white is far away.
        let (mix, d) = best_attempt(Rgb::WHITE, &opts(&["#ff0000", "#0000ff"], 3));
        assert!(!mix.is_empty());
        // Every red/blue mix has green = 0, and the closest keeps r + b high.
        assert_eq!(mix.colors(), &[Rgb::RED, Rgb::BLUE]);
        assert!((d - distance(Rgb::WHITE, blend(&[Rgb::RED, Rgb::BLUE]))).abs() < 1e-9);
    }

    #[test]
    fn test_exact_match_is_returned() {
        let target = blend(&[Rgb::GREEN, Rgb::GREEN, Rgb::BLACK, Rgb::BLACK]);
        let (mix, d) = best_attempt(target, &opts(&["#00ff00", "#000000"], 4));
        assert_eq!(d, 0.0);
        assert_eq!(mix.blended(), target);
        // Pre-order reaches [green, green, black, black] before [green, black].
        assert_eq!(mix.colors(), &[Rgb::GREEN, Rgb::GREEN, Rgb::BLACK, Rgb::BLACK]);
    }

    #[test]
    fn test_degenerate_inputs_yield_empty_mix() {
        let (mix, d) = best_attempt(Rgb::WHITE, &opts(&[], 6));
        assert!(mix.is_empty());
        assert!((d - distance(Rgb::WHITE, Rgb::BLACK)).abs() < 1e-9);

        let (mix, _) = best_attempt(Rgb::WHITE, &opts(&["#ffffff"], 0));
        assert!(mix.is_empty());

        let attempt = BestAttempt::search(Rgb::WHITE, &opts(&[], 6));
        assert!(attempt.mixture.is_empty());
        assert!(attempt.explanation.contains("No colors"));
    }

    #[test]
    fn test_explanation_reports_accuracy() {
        let attempt = BestAttempt::search(Rgb::WHITE, &opts(&["#ff0000", "#0000ff"], 3));
        assert!(attempt.explanation.contains("% accurate"));
        assert_eq!(BestAttempt.kind(), StrategyKind::BestAttempt);
    }
}
