//! Simulation configuration.
//!
//! Everything here is fixed once a [`crate::Simulation`] is built.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::automaton::rule::Rule;
use crate::error::{Error, Result};

/// Bounds for the auto-advance interval, in seconds.
pub const MIN_INTERVAL_SECS: f32 = 0.01;
pub const MAX_INTERVAL_SECS: f32 = 5.0;

/// How the embedding application advances generations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AdvanceMode {
    /// One step per discrete trigger event.
    #[default]
    Manual,
    /// One step each time accumulated elapsed time reaches `interval_secs`.
    Auto { interval_secs: f32 },
}

impl AdvanceMode {
    /// The auto-advance period. None for manual mode, and for an interval that
    /// is not a representable duration (see [`AdvanceMode::validate`]).
    pub fn interval(&self) -> Option<Duration> {
        match *self {
            AdvanceMode::Manual => None,
            AdvanceMode::Auto { interval_secs } => Duration::try_from_secs_f32(interval_secs).ok(),
        }
    }

    /// Auto intervals must lie in `[MIN_INTERVAL_SECS, MAX_INTERVAL_SECS]`.
    /// NaN and infinities are rejected by the same check.
    pub fn validate(&self) -> Result<()> {
        if let AdvanceMode::Auto { interval_secs } = *self {
            if !(MIN_INTERVAL_SECS..=MAX_INTERVAL_SECS).contains(&interval_secs) {
                return Err(Error::InvalidInterval(interval_secs));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub width: i32,
    pub height: i32,
    pub depth: i32,
    pub rule: Rule,
    pub advance: AdvanceMode,
    /// Seed for the initial coin flips. `None` draws from entropy.
    pub seed: Option<u64>,
    /// Evaluation threads. 0 evaluates on the calling thread.
    pub threads: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            width: 10,
            height: 10,
            depth: 10,
            rule: Rule::classic(),
            advance: AdvanceMode::Manual,
            seed: None,
            threads: 0,
        }
    }
}

impl SimulationConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: SimulationConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<()> {
        for (axis, value) in [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
        ] {
            if value < 0 {
                return Err(Error::NegativeDimension { axis, value });
            }
        }

        self.advance.validate()
    }
}
