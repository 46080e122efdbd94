//! Primaries in proportion to the target's channels.
//!
//! Each channel's share of `r + g + b` buys up to three units of the matching
//! primary. The mix only works for targets that are already roughly an
//! additive blend of pure red, green, and blue, so this strategy sits late in
//! the chain.

use rand::RngCore;

use super::{Attempt, Strategy, StrategyKind};
use crate::color::{Rgb, distance};
use crate::mixture::Mixture;
use crate::options::NormalizedOptions;

/// Units distributed across the three primaries.
const PROPORTIONAL_UNITS: f64 = 3.0;

const PRIMARIES: [Rgb; 3] = [Rgb::RED, Rgb::GREEN, Rgb::BLUE];

#[derive(Debug, Clone, Copy, Default)]
pub struct Proportional;

impl Proportional {
    #[must_use]
    pub fn search(target: Rgb, options: &NormalizedOptions) -> Option<Attempt> {
        proportional_mix(target, options).or_else(|| complementary_mix(target, options))
    }
}

/// Each channel's fraction of the channel total; all zero for black.
#[must_use]
pub fn channel_shares(color: Rgb) -> [f64; 3] {
    let channels = color.channels();
    let total: u32 = channels.iter().map(|&c| u32::from(c)).sum();
    if total == 0 {
        return [0.0; 3];
    }
    channels.map(|c| f64::from(c) / f64::from(total))
}

fn proportional_mix(target: Rgb, options: &NormalizedOptions) -> Option<Attempt> {
    let shares = channel_shares(target);
    let mut mixture = Mixture::new();

    for (primary, share) in PRIMARIES.into_iter().zip(shares) {
        if !options.palette.contains(primary) {
            continue;
        }
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "share is in [0, 1], so units is 0..=3"
        )]
        let units = (share * PROPORTIONAL_UNITS).round() as usize;
        for _ in 0..units {
            if mixture.len() >= options.max_slots {
                break;
            }
            mixture.push(primary);
        }
    }

    if mixture.is_empty() {
        return None;
    }

    let d = distance(target, mixture.blended());
    log::trace!("proportional: {mixture} at distance {d:.2}");
    options.within_tolerance(d).then(|| {
        Attempt::new(
            mixture,
            "Primaries mixed in proportion to the target's red, green and blue channels.",
        )
    })
}

/// Complementary-color reasoning. Not implemented: always reports failure.
fn complementary_mix(_target: Rgb, _options: &NormalizedOptions) -> Option<Attempt> {
    None
}

impl Strategy for Proportional {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Proportional
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
