//! Solve outcomes and their human-readable rendering.

use std::fmt;
use std::fmt::Write as _;

use crate::color::{HexParseError, Rgb, accuracy_from_distance};
use crate::mixture::MixingStep;
use crate::strategy::{Attempt, StrategyKind};

/// Outcome of one solve.
///
/// A failed solve still carries the closest mix found; check `accuracy` or
/// `distance` to judge how near a miss it was.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverResult {
    pub success: bool,
    pub steps: Vec<MixingStep>,
    pub final_color: Rgb,
    /// Closeness to the target in percent, 0-100.
    pub accuracy: f64,
    pub explanation: String,
    /// The parsed target, absent when the input was not a valid hex color.
    pub target: Option<Rgb>,
    /// Euclidean RGB distance between `final_color` and the target.
    pub distance: f64,
    /// Strategy that produced the steps; `None` when no strategy ran.
    pub strategy: Option<StrategyKind>,
}

impl SolverResult {
    /// Build a result from a strategy's mix.
    #[must_use]
    pub fn from_attempt(target: Rgb, kind: StrategyKind, attempt: Attempt, success: bool) -> Self {
        let final_color = attempt.mixture.blended();
        let distance = attempt.mixture.distance_to(target);
        Self {
            success,
            steps: attempt.mixture.steps(),
            final_color,
            accuracy: accuracy_from_distance(distance),
            explanation: attempt.explanation,
            target: Some(target),
            distance,
            strategy: Some(kind),
        }
    }

    /// Failure for a target that could not be parsed. No strategy runs.
    #[must_use]
    pub fn invalid_target(error: &HexParseError) -> Self {
        Self {
            success: false,
            steps: Vec::new(),
            final_color: Rgb::BLACK,
            accuracy: 0.0,
            explanation: format!("Cannot solve: {error}."),
            target: None,
            distance: f64::INFINITY,
            strategy: None,
        }
    }

    /// Multi-line description of the solution for players.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str(if self.success {
            "Solution found"
        } else {
            "No exact solution found"
        });
        if let Some(target) = self.target {
            let _ = write!(out, " for {}", target.hex());
        }
        out.push('\n');
        let _ = writeln!(out, "{}", self.explanation);

        if !self.steps.is_empty() {
            out.push('\n');
            out.push_str(if self.success { "Steps:\n" } else { "Best attempt:\n" });
            for (n, step) in self.steps.iter().enumerate() {
                let _ = writeln!(out, "{}. {}", n + 1, step.description);
            }
        }

        out.push('\n');
        let _ = writeln!(
            out,
            "Accuracy: {:.1}% | Final color: {}",
            self.accuracy,
            self.final_color.hex()
        );
        out
    }

    /// JSON form of the result, for tooling around the game.
    #[cfg(feature = "json")]
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let steps: Vec<serde_json::Value> = self
            .steps
            .iter()
            .map(|step| {
                serde_json::json!({
                    "action": step.action.name(),
                    "color": step.color.map(|c| c.hex()),
                    "slotIndex": step.slot_index,
                    "description": step.description,
                })
            })
            .collect();
        serde_json::json!({
            "success": self.success,
            "steps": steps,
            "finalColor": self.final_color.hex(),
            "accuracy": self.accuracy,
            "explanation": self.explanation,
            "target": self.target.map(|c| c.hex()),
            "distance": self.distance.is_finite().then_some(self.distance),
            "strategy": self.strategy.map(|s| s.name()),
        })
    }
}

impl fmt::Display for SolverResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_text())
    }
}
