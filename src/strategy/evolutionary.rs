//! Genetic search over variable-length mixes.
//!
//! A population of random mixes is scored by distance to the target and bred
//! generation by generation:
//!
//! - the best [`ELITE_COUNT`] individuals survive unchanged
//! - parents are picked by size-[`TOURNAMENT_SIZE`] tournaments
//! - children come from uniform crossover followed by mutation
//!
//! The search stops as soon as any scored individual is within tolerance, or
//! after `max_iterations / 10` generations. Randomness comes from the caller so
//! that runs can be replayed from a seed.

use rand::{Rng, RngCore};

use super::{Attempt, Strategy, StrategyKind};
use crate::color::Rgb;
use crate::mixture::Mixture;
use crate::options::NormalizedOptions;

pub const POPULATION_SIZE: usize = 50;
pub const ELITE_COUNT: usize = 10;
pub const TOURNAMENT_SIZE: usize = 3;
pub const MUTATION_RATE: f64 = 0.1;
/// Each generation stands for this many iterations of the budget.
pub const ITERATIONS_PER_GENERATION: usize = 10;

#[derive(Debug, Clone, Copy, Default)]
pub struct Evolutionary;

/// An individual with its fitness (distance to target, lower is better).
#[derive(Debug, Clone)]
struct Scored {
    fitness: f64,
    mixture: Mixture,
}

impl Evolutionary {
    pub fn search<R: Rng + ?Sized>(
        target: Rgb,
        options: &NormalizedOptions,
        rng: &mut R,
    ) -> Option<Attempt> {
        let palette = options.palette.colors();
        let max_slots = options.max_slots;
        if palette.is_empty() || max_slots == 0 {
            return None;
        }

        let generations = options.max_iterations / ITERATIONS_PER_GENERATION;
        let mut population: Vec<Mixture> = (0..POPULATION_SIZE)
            .map(|_| random_individual(palette, max_slots, rng))
            .collect();
        let mut best: Option<Scored> = None;

        for generation in 0..generations {
            let mut scored = Vec::with_capacity(population.len());
            for mixture in population {
                let fitness = mixture.distance_to(target);
                if options.within_tolerance(fitness) {
                    log::debug!(
                        "evolutionary: match {mixture} in generation {} (distance {fitness:.2})",
                        generation + 1
                    );
                    return Some(converged(mixture, generation + 1));
                }
                if best.as_ref().is_none_or(|b| fitness < b.fitness) {
                    best = Some(Scored {
                        fitness,
                        mixture: mixture.clone(),
                    });
                }
                scored.push(Scored { fitness, mixture });
            }

            if generation + 1 == generations {
                break;
            }
            population = next_generation(scored, palette, max_slots, rng);
        }

        if let Some(best) = &best {
            log::trace!(
                "evolutionary: budget of {generations} generation(s) spent, best distance {:.2}",
                best.fitness
            );
        }
        best.filter(|b| options.within_tolerance(b.fitness))
            .map(|b| converged(b.mixture, generations))
    }
}

fn converged(mixture: Mixture, generation: usize) -> Attempt {
    let explanation = format!(
        "Evolutionary search found a {}-color mix in generation {generation}.",
        mixture.len()
    );
    Attempt::new(mixture, explanation)
}

/// 1 to `max_slots` colors, each drawn uniformly from the palette.
fn random_individual<R: Rng + ?Sized>(palette: &[Rgb], max_slots: usize, rng: &mut R) -> Mixture {
    let len = rng.random_range(1..=max_slots);
    (0..len).map(|_| random_color(palette, rng)).collect()
}

fn random_color<R: Rng + ?Sized>(palette: &[Rgb], rng: &mut R) -> Rgb {
    palette[rng.random_range(0..palette.len())]
}

fn next_generation<R: Rng + ?Sized>(
    mut scored: Vec<Scored>,
    palette: &[Rgb],
    max_slots: usize,
    rng: &mut R,
) -> Vec<Mixture> {
    scored.sort_by(|a, b| a.fitness.total_cmp(&b.fitness));

    let mut next: Vec<Mixture> = scored
        .iter()
        .take(ELITE_COUNT)
        .map(|s| s.mixture.clone())
        .collect();

    while next.len() < POPULATION_SIZE {
        let first = tournament(&scored, rng);
        let second = tournament(&scored, rng);
        let mut child = crossover(first, second, rng);
        mutate(&mut child, palette, max_slots, rng);
        next.push(child);
    }
    next
}

/// Lowest fitness among [`TOURNAMENT_SIZE`] draws with replacement.
fn tournament<'a, R: Rng + ?Sized>(scored: &'a [Scored], rng: &mut R) -> &'a Mixture {
    let mut winner = &scored[rng.random_range(0..scored.len())];
    for _ in 1..TOURNAMENT_SIZE {
        let challenger = &scored[rng.random_range(0..scored.len())];
        if challenger.fitness < winner.fitness {
            winner = challenger;
        }
    }
    &winner.mixture
}

/// Uniform crossover up to the longer parent's length.
fn crossover<R: Rng + ?Sized>(first: &Mixture, second: &Mixture, rng: &mut R) -> Mixture {
    let a = first.colors();
    let b = second.colors();
    let mut child = Mixture::new();

    for i in 0..a.len().max(b.len()) {
        let gene = match (a.get(i), b.get(i)) {
            (Some(&x), Some(&y)) => {
                if rng.random_bool(0.5) {
                    x
                } else {
                    y
                }
            }
            (Some(&x), None) => x,
            (None, Some(&y)) => y,
            (None, None) => continue,
        };
        child.push(gene);
    }

    if child.is_empty()
        && let Some(&color) = a.first().or_else(|| b.first())
    {
        child.push(color);
    }
    child
}

/// Per-gene replacement, then at most one shrink or grow.
fn mutate<R: Rng + ?Sized>(mixture: &mut Mixture, palette: &[Rgb], max_slots: usize, rng: &mut R) {
    for i in 0..mixture.len() {
        if rng.random_bool(MUTATION_RATE) {
            let color = random_color(palette, rng);
            mixture.set(i, color);
        }
    }

    if rng.random_bool(MUTATION_RATE) {
        let shrink = rng.random_bool(0.5);
        if shrink && mixture.len() > 1 {
            mixture.pop();
        } else if mixture.len() < max_slots {
            let color = random_color(palette, rng);
            mixture.push(color);
        }
    }
}

impl Strategy for Evolutionary {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Evolutionary
    }

    fn attempt(
        &self,
        target: Rgb,
        options: &NormalizedOptions,
        rng: &mut dyn RngCore,
    ) -> Option<Attempt> {
        Self::search(target, options, rng)
    }
}
