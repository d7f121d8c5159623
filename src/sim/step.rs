//! One simulation step over the whole population
//!
//! Work is strictly sequential: a pair's impulse changes velocities that the
//! following pair tests read, so the iteration order is part of the result.

use std::ops::AddAssign;

use rand::Rng;

use super::Population;
use super::collision::{pair_contact, resolve_impulse};
use super::history::OverlapHistory;
use super::spawn::spawn;
use super::wall::reflect_off_walls;
use crate::config::{ImpulseModel, StepOrder};

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Velocity components flipped by walls
    pub wall_flips: u32,
    /// Pair impulses applied
    pub impulses: u32,
    /// Pairs found overlapping this step
    pub overlapping_pairs: u32,
}

impl AddAssign for StepReport {
    fn add_assign(&mut self, other: StepReport) {
        self.wall_flips += other.wall_flips;
        self.impulses += other.impulses;
        self.overlapping_pairs += other.overlapping_pairs;
    }
}

/// Advance the population by `dt` seconds with the default model and order
pub fn step(population: &mut Population, history: &mut OverlapHistory, dt: f32) -> StepReport {
    step_with(
        population,
        history,
        dt,
        ImpulseModel::default(),
        StepOrder::default(),
    )
}

/// Advance the population by `dt` seconds
pub fn step_with(
    population: &mut Population,
    history: &mut OverlapHistory,
    dt: f32,
    model: ImpulseModel,
    order: StepOrder,
) -> StepReport {
    debug_assert_eq!(
        history.dim(),
        population.len(),
        "overlap history out of sync with population"
    );

    let mut report = StepReport::default();
    match order {
        StepOrder::Phased => {
            for circle in population.iter_mut() {
                report.wall_flips += reflect_off_walls(circle);
            }
            for i in 0..population.len() {
                report += resolve_pairs_of(population, history, i, model);
            }
            for circle in population.iter_mut() {
                circle.integrate(dt);
            }
        }
        StepOrder::Interleaved => {
            for i in 0..population.len() {
                report.wall_flips += reflect_off_walls(&mut population[i]);
                report += resolve_pairs_of(population, history, i, model);
                population[i].integrate(dt);
            }
        }
    }
    report
}

/// Test circle `i` against every circle before it
fn resolve_pairs_of(
    population: &mut Population,
    history: &mut OverlapHistory,
    i: usize,
    model: ImpulseModel,
) -> StepReport {
    let mut report = StepReport::default();
    let (earlier, rest) = population.split_at_mut(i);
    let Some(current) = rest.first_mut() else {
        return report;
    };

    for (j, other) in earlier.iter_mut().enumerate() {
        let contact = pair_contact(current, other);
        if !contact.overlapping {
            history.clear_pair(i, j);
            continue;
        }
        report.overlapping_pairs += 1;

        // Only a deepening overlap gets a new impulse
        let previous = history.get(i, j);
        if previous != 0.0
            && contact.penetration > previous
            && resolve_impulse(current, other, model)
        {
            report.impulses += 1;
            log::trace!(
                "impulse between {i} and {j} at depth {:.4}",
                contact.penetration
            );
        }
        history.set(i, j, contact.penetration);
    }
    report
}

/// Replace the population with `new_n` fresh circles and clear the history
///
/// `new_n` must already be clamped by the caller.
pub fn resize<R: Rng + ?Sized>(
    population: &mut Population,
    history: &mut OverlapHistory,
    new_n: u32,
    rng: &mut R,
) {
    *population = spawn(new_n, rng);
    history.reset(population.len());
}
