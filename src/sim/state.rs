//! Simulation aggregate
//!
//! Owns the population, its overlap history and the RNG used to respawn.
//! Population changes replace both together between steps, so a step never
//! sees a history sized for a different population.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::history::OverlapHistory;
use super::step::{StepReport, resize, step_with};
use super::{Circle, Population, spawn};
use crate::config::SimConfig;
use crate::instance::CircleInstance;

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    /// Seed actually used (drawn from entropy if the config had none)
    seed: u64,
    rng: Pcg32,
    circles: Population,
    history: OverlapHistory,
    /// Steps taken since the last population change
    frame: u64,
}

impl Simulation {
    /// Create a simulation and spawn the configured initial population
    pub fn new(config: SimConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = Pcg32::seed_from_u64(seed);
        let n = config.clamp_count(config.initial_circles);
        let circles = spawn(n, &mut rng);
        let history = OverlapHistory::new(circles.len());
        log::info!("Simulation started with {n} circles (seed {seed})");

        Self {
            config,
            seed,
            rng,
            circles,
            history,
            frame: 0,
        }
    }

    /// Create a simulation with default config and a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SimConfig::with_seed(seed))
    }

    /// Build from an existing population (e.g. hand-placed circles)
    pub fn from_circles(config: SimConfig, circles: Population) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let history = OverlapHistory::new(circles.len());
        Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            circles,
            history,
            frame: 0,
        }
    }

    /// Advance one frame by `dt` seconds
    pub fn step(&mut self, dt: f32) -> StepReport {
        let report = step_with(
            &mut self.circles,
            &mut self.history,
            dt,
            self.config.impulse_model,
            self.config.step_order,
        );
        self.frame += 1;
        report
    }

    /// Replace the population with `n` fresh circles
    ///
    /// `n` is used as given; use [`Simulation::adjust_count`] or
    /// [`SimConfig::clamp_count`] to respect the configured range.
    pub fn resize(&mut self, n: u32) {
        resize(&mut self.circles, &mut self.history, n, &mut self.rng);
        self.frame = 0;
        log::info!("Number of circles = {n}");
    }

    /// Grow or shrink the population by `delta`
    ///
    /// Returns `false` (and changes nothing) if the count would be unchanged
    /// or fall outside the configured range.
    pub fn adjust_count(&mut self, delta: i32) -> bool {
        let current = self.circles.len() as i64;
        let requested = current + delta as i64;
        if requested == current || requested < 0 {
            return false;
        }
        let Ok(requested) = u32::try_from(requested) else {
            return false;
        };
        if !self.config.count_in_range(requested) {
            log::debug!("Ignoring circle count {requested} outside configured range");
            return false;
        }
        self.resize(requested);
        true
    }

    #[inline]
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    #[inline]
    pub fn history(&self) -> &OverlapHistory {
        &self.history
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Render snapshot in population order
    pub fn instances(&self) -> Vec<CircleInstance> {
        self.circles.iter().map(CircleInstance::from_circle).collect()
    }

    /// Total kinetic energy with radius² standing in for mass
    pub fn kinetic_energy(&self) -> f32 {
        self.circles.iter().map(Circle::kinetic_energy).sum()
    }
}
