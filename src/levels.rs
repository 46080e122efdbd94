//! Built-in game levels and feasibility checks.
//!
//! A level is only fair if the solver can reach its target with the level's
//! own palette, slot budget, and tolerance. [`validate_level`] runs the solver
//! with a fixed seed so reports are reproducible.

use crate::options::SolverOptions;
use crate::result::SolverResult;
use crate::solver::solve;
use crate::strategy::StrategyKind;

/// Seed used for every validation run.
pub const VALIDATION_SEED: u64 = 0x00C0_10A5;

/// A named target the player must reproduce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
    pub name: &'static str,
    pub target: &'static str,
    pub tolerance: f64,
    pub max_slots: usize,
    /// Restricted palette; `None` means the default eight colors.
    pub palette: Option<&'static [&'static str]>,
}

impl Level {
    /// Solver options matching this level's rules.
    #[must_use]
    pub fn options(&self) -> SolverOptions {
        let options = SolverOptions::new()
            .tolerance(self.tolerance)
            .max_slots(self.max_slots)
            .seed(VALIDATION_SEED);
        match self.palette {
            Some(colors) => options.available_colors(colors.iter().copied()),
            None => options,
        }
    }
}

pub const LEVELS: [Level; 10] = [
    Level { name: "First Light", target: "#ff0000", tolerance: 25.0, max_slots: 6, palette: None },
    Level { name: "Olive Grove", target: "#808000", tolerance: 15.0, max_slots: 6, palette: None },
    Level { name: "Sunset Orange", target: "#ff8000", tolerance: 20.0, max_slots: 6, palette: None },
    Level { name: "Teal Lagoon", target: "#008080", tolerance: 20.0, max_slots: 6, palette: None },
    Level { name: "Lavender Haze", target: "#ff80ff", tolerance: 20.0, max_slots: 6, palette: None },
    Level { name: "Raspberry", target: "#ff0080", tolerance: 20.0, max_slots: 6, palette: None },
    Level { name: "Dusk Slate", target: "#5555aa", tolerance: 10.0, max_slots: 6, palette: None },
    Level { name: "Golden Hour", target: "#ffd700", tolerance: 40.0, max_slots: 6, palette: None },
    Level { name: "Midnight", target: "#191970", tolerance: 40.0, max_slots: 6, palette: None },
    Level {
        name: "Grayscale",
        target: "#808080",
        tolerance: 5.0,
        max_slots: 2,
        palette: Some(&["#ffffff", "#000000"]),
    },
];

/// Outcome of validating one level.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelReport {
    pub level: Level,
    pub feasible: bool,
    pub strategy: Option<StrategyKind>,
    pub result: SolverResult,
}

impl LevelReport {
    /// One-line summary, e.g. `Olive Grove (#808000): feasible via exhaustive, 2 step(s), 100.0%`.
    #[must_use]
    pub fn summary(&self) -> String {
        let verdict = if self.feasible { "feasible" } else { "NOT feasible" };
        let via = self.strategy.map_or("none", |s| s.name());
        format!(
            "{} ({}): {verdict} via {via}, {} step(s), {:.1}%",
            self.level.name,
            self.level.target,
            self.result.steps.len(),
            self.result.accuracy
        )
    }
}

#[must_use]
pub fn validate_level(level: &Level) -> LevelReport {
    let result = solve(level.target, &level.options());
    if !result.success {
        log::warn!(
            "level {:?} is not solvable within tolerance {} ({:.1}% best)",
            level.name,
            level.tolerance,
            result.accuracy
        );
    }
    LevelReport {
        level: *level,
        feasible: result.success,
        strategy: result.strategy,
        result,
    }
}

/// Validate every built-in level, in order.
#[must_use]
pub fn validate_all() -> Vec<LevelReport> {
    LEVELS.iter().map(validate_level).collect()
}

/// Look a level up by name, ignoring case.
#[must_use]
pub fn find_level(name: &str) -> Option<&'static Level> {
    LEVELS.iter().find(|level| level.name.eq_ignore_ascii_case(name))
}
