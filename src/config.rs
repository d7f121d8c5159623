//! Simulation configuration
//!
//! Loaded from JSON; any missing field takes its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CIRCLES, MAX_CIRCLES, MAX_FRAME_DT, MIN_CIRCLES};

/// How a pair's normal velocities are exchanged on impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImpulseModel {
    /// Symmetric 1D elastic formula, tangential components keep their sign
    #[default]
    Symmetric,
    /// Bit-compatible with the historical formula (asymmetric mass terms,
    /// unsigned tangential speed, same operation order)
    Legacy,
}

impl ImpulseModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpulseModel::Symmetric => "symmetric",
            ImpulseModel::Legacy => "legacy",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "symmetric" | "sym" => Some(ImpulseModel::Symmetric),
            "legacy" => Some(ImpulseModel::Legacy),
            _ => None,
        }
    }
}

/// Ordering of the work inside one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StepOrder {
    /// All walls, then all pairs, then all integration
    #[default]
    Phased,
    /// Per circle: walls, pairs with earlier circles, integrate
    Interleaved,
}

impl StepOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepOrder::Phased => "phased",
            StepOrder::Interleaved => "interleaved",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "phased" => Some(StepOrder::Phased),
            "interleaved" => Some(StepOrder::Interleaved),
            _ => None,
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Circles spawned at startup (clamped into [min_circles, max_circles])
    pub initial_circles: u32,
    pub min_circles: u32,
    pub max_circles: u32,
    /// RNG seed; `None` draws one from entropy
    pub seed: Option<u64>,
    pub impulse_model: ImpulseModel,
    pub step_order: StepOrder,
    /// Upper bound on the elapsed time a frame clock reports (seconds)
    pub max_frame_dt: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            initial_circles: DEFAULT_CIRCLES,
            min_circles: MIN_CIRCLES,
            max_circles: MAX_CIRCLES,
            seed: None,
            impulse_model: ImpulseModel::Symmetric,
            step_order: StepOrder::Phased,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl SimConfig {
    /// Config with a fixed seed and defaults otherwise
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Clamp a requested circle count into the configured range
    pub fn clamp_count(&self, n: u32) -> u32 {
        let lo = self.min_circles.min(self.max_circles);
        let hi = self.max_circles.max(self.min_circles);
        n.clamp(lo, hi)
    }

    /// Whether `n` is inside the configured range
    pub fn count_in_range(&self, n: u32) -> bool {
        n >= self.min_circles && n <= self.max_circles
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load config from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config {}: {e}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read config {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }
}
