//! Search strategies.
//!
//! Each strategy either finds a mix within tolerance or reports that it could
//! not; running out of ideas is never an error. The solver tries them in
//! [`StrategyKind::PRIORITY`] order and the best-attempt fallback closes the
//! chain, so a solve always ends with some mix.

pub mod evolutionary;
pub mod exhaustive;
pub mod fallback;
pub mod lightness;
pub mod proportional;

use rand::RngCore;
use std::fmt;

use crate::color::Rgb;
use crate::mixture::Mixture;
use crate::options::NormalizedOptions;

pub use evolutionary::Evolutionary;
pub use exhaustive::Exhaustive;
pub use fallback::{BestAttempt, best_attempt};
pub use lightness::LightnessCorrection;
pub use proportional::Proportional;

/// Identifies the strategy that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Exhaustive,
    LightnessCorrection,
    Evolutionary,
    Proportional,
    BestAttempt,
}

impl StrategyKind {
    /// Order in which the solver runs the strategies.
    pub const PRIORITY: [Self; 5] = [
        Self::Exhaustive,
        Self::LightnessCorrection,
        Self::Evolutionary,
        Self::Proportional,
        Self::BestAttempt,
    ];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Exhaustive => "exhaustive",
            Self::LightnessCorrection => "lightness-correction",
            Self::Evolutionary => "evolutionary",
            Self::Proportional => "proportional",
            Self::BestAttempt => "best-attempt",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A mix a strategy is willing to stand behind, with its reasoning.
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    pub mixture: Mixture,
    pub explanation: String,
}

impl Attempt {
    #[must_use]
    pub fn new(mixture: Mixture, explanation: impl Into<String>) -> Self {
        Self {
            mixture,
            explanation: explanation.into(),
        }
    }
}

/// A search strategy that may find a mix within tolerance.
pub trait Strategy {
    fn kind(&self) -> StrategyKind;

    /// Returns a mix within `options.tolerance` of `target`, or `None`.
    ///
    /// Deterministic strategies ignore `rng`.
    fn attempt(
        &self,
        target: Rgb,
        options: &NormalizedOptions,
        rng: &mut dyn RngCore,
    ) -> Option<Attempt>;
}

/// The strategies that can succeed, in priority order.
#[must_use]
pub fn chain() -> [&'static dyn Strategy; 4] {
    [&Exhaustive, &LightnessCorrection, &Evolutionary, &Proportional]
}
