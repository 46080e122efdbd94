//! # color_mixer
//!
//! Solver for a color-mixing puzzle: given a target RGB color and a palette,
//! find a sequence of equal-part palette additions whose blend lands within a
//! tolerance of the target.
//!
//! ## Quick Start
//!
//! ```rust
//! use color_mixer::prelude::*;
//!
//! let options = SolverOptions::new().tolerance(5.0).seed(7);
//! let result = solve("#808000", &options);
//! assert!(result.success);
//! println!("{}", result.render_text());
//! ```
//!
//! ## Core Concepts
//!
//! - **Rgb**: 8-bit color with hex parsing, distance, and accuracy helpers
//! - **Mixture**: Ordered palette colors blended as an equal-weight mean
//! - **Strategy**: One way of searching for a mix; tried in fixed priority
//! - **SolverResult**: Steps to follow, the color they produce, and how close it is
//! - **Levels**: Built-in targets with a feasibility check

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod levels;
pub mod logging;
pub mod mixture;
pub mod options;
pub mod palette;
pub mod result;
pub mod solver;
pub mod strategy;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::color::{
        HexParseError, Hsl, Rgb, accuracy, blend, distance, hex_to_rgb, parse_hex,
    };
    pub use crate::levels::{LEVELS, Level, LevelReport, validate_all, validate_level};
    pub use crate::logging::MixLogger;
    pub use crate::mixture::{MixingStep, Mixture, StepAction, apply_steps};
    pub use crate::options::{NormalizedOptions, SolverOptions};
    pub use crate::palette::Palette;
    pub use crate::result::SolverResult;
    pub use crate::solver::{hint, solve, solve_with_rng};
    pub use crate::strategy::{Attempt, Strategy, StrategyKind};
}

// Re-export key types at crate root
pub use color::{HexParseError, Rgb, accuracy, blend, distance, hex_to_rgb};
pub use mixture::{MixingStep, StepAction};
pub use options::SolverOptions;
pub use result::SolverResult;
pub use solver::{hint, solve};
