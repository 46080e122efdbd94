//! Solver configuration.
//!
//! [`SolverOptions`] is the caller-facing record: every field has a default,
//! and builder methods override individual fields. Before a solve the options
//! are [normalized](SolverOptions::normalized) into [`NormalizedOptions`],
//! which carries a parsed [`Palette`].
//!
//! ```
//! use color_mixer::options::SolverOptions;
//!
//! let options = SolverOptions::new()
//!     .tolerance(5.0)
//!     .available_colors(["#ff0000", "#00ff00"])
//!     .max_slots(4);
//! let normalized = options.normalized();
//! assert_eq!(normalized.palette.len(), 2);
//! assert_eq!(normalized.max_slots, 4);
//! ```

use crate::palette::{DEFAULT_PALETTE_HEX, Palette};

/// Default maximum Euclidean RGB distance for a success.
pub const DEFAULT_TOLERANCE: f64 = 25.0;
/// Default upper bound on colors in a mix.
pub const DEFAULT_MAX_SLOTS: usize = 6;
/// Largest slot budget a solve will use. The best-attempt search visits
/// `palette_len ^ max_slots` sequences, so larger budgets are clamped.
pub const MAX_SLOTS_LIMIT: usize = 8;
/// Default evolutionary budget; the search runs `max_iterations / 10` generations.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;
/// Default step limit. Advisory only.
pub const DEFAULT_MAX_STEPS: usize = 10;

/// Options for a single solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOptions {
    /// Maximum acceptable distance between mix and target.
    pub tolerance: f64,
    /// Palette as hex strings; entries that fail to parse are ignored.
    pub available_colors: Vec<String>,
    pub max_slots: usize,
    pub max_iterations: usize,
    /// Carried for callers; no strategy enforces it.
    pub max_steps: usize,
    /// Seed for the evolutionary search. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            available_colors: DEFAULT_PALETTE_HEX.iter().map(ToString::to_string).collect(),
            max_slots: DEFAULT_MAX_SLOTS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_steps: DEFAULT_MAX_STEPS,
            seed: None,
        }
    }
}

impl SolverOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn available_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.available_colors = colors.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn max_slots(mut self, max_slots: usize) -> Self {
        self.max_slots = max_slots;
        self
    }

    #[must_use]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse the palette and sanitize the tolerance and slot budget.
    ///
    /// A negative or NaN tolerance becomes 0, so only exact matches succeed.
    /// `max_slots` is clamped to [`MAX_SLOTS_LIMIT`].
    #[must_use]
    pub fn normalized(&self) -> NormalizedOptions {
        let tolerance = if self.tolerance.is_nan() {
            0.0
        } else {
            self.tolerance.max(0.0)
        };
        if self.max_slots > MAX_SLOTS_LIMIT {
            log::warn!(
                "max_slots {} exceeds the limit; using {MAX_SLOTS_LIMIT}",
                self.max_slots
            );
        }
        NormalizedOptions {
            tolerance,
            palette: Palette::from_hex(&self.available_colors),
            max_slots: self.max_slots.min(MAX_SLOTS_LIMIT),
            max_iterations: self.max_iterations,
            max_steps: self.max_steps,
        }
    }
}

/// Options with the palette parsed; what strategies actually read.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedOptions {
    pub tolerance: f64,
    pub palette: Palette,
    pub max_slots: usize,
    pub max_iterations: usize,
    pub max_steps: usize,
}

impl NormalizedOptions {
    /// Whether `distance` counts as a match.
    #[must_use]
    pub fn within_tolerance(&self, distance: f64) -> bool {
        distance <= self.tolerance
    }
}

impl Default for NormalizedOptions {
    fn default() -> Self {
        SolverOptions::default().normalized()
    }
}
