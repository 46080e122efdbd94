//! Common test utilities and logging infrastructure
//!
//! The library logs through the `log` facade; `tracing-subscriber` bridges
//! those records so solver decisions show up in failing test output.
//!
//! # Environment Variables
//!
//! - `RUST_LOG=debug` - Enable debug logging in tests
//! - `RUST_LOG=color_mixer::strategy=trace` - Module-specific tracing
//! - `TEST_LOG_JSON=1` - Output JSON format for CI parsing

#![allow(dead_code)]

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use color_mixer::mixture::apply_steps;
use color_mixer::{SolverOptions, SolverResult};

static INIT: Once = Once::new();

/// Initialize test logging infrastructure. Idempotent.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let use_json = std::env::var("TEST_LOG_JSON").is_ok();
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("color_mixer=debug"));

        if use_json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_test_writer())
                .try_init()
                .ok();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_ansi(true)
                        .with_target(true)
                        .compact(),
                )
                .try_init()
                .ok();
        }
    });
}

/// Log test context information.
///
/// Use at the start of longer tests to record what is being checked.
pub fn log_test_context(test_name: &str, description: &str) {
    tracing::info!(test_name = test_name, description = description, "test context");
}

/// Options over an explicit palette with a fixed seed.
pub fn seeded_options(palette: &[&str], tolerance: f64) -> SolverOptions {
    SolverOptions::new()
        .available_colors(palette.iter().copied())
        .tolerance(tolerance)
        .seed(0xC0FFEE)
}

/// Replaying the steps must reproduce the reported color, and the step count
/// must respect the slot budget.
pub fn assert_consistent(result: &SolverResult, options: &SolverOptions) {
    assert_eq!(
        apply_steps(&result.steps),
        result.final_color,
        "steps do not reproduce final color:\n{result}"
    );
    assert!(
        result.steps.len() <= options.max_slots,
        "{} steps exceed {} slots",
        result.steps.len(),
        options.max_slots
    );
    if let Some(target) = result.target {
        let d = color_mixer::distance(target, result.final_color);
        assert!((d - result.distance).abs() < 1e-9);
    }
}
