//! Step scheduling for an embedding application.
//!
//! The host passes elapsed frame time and discrete trigger events into
//! [`Simulation::tick`]; nothing here reads a global clock or input state.

use std::time::Duration;

use rayon::ThreadPool;

use super::grid::{initialize, is_alive, random_seeder};
use super::rule::Rule;
use super::stepping::{advance, Transitions};
use crate::config::{AdvanceMode, SimulationConfig};
use crate::error::Result;
use crate::state::Lattice;

/// Owns the current generation and decides when to advance it.
pub struct Simulation {
    /// The authoritative generation. Single writer: the stepping call.
    lattice: Lattice,
    rule: Rule,
    mode: AdvanceMode,
    /// Elapsed time not yet consumed by an auto step.
    accumulated: Duration,
    /// Evaluation pool, or None to plan on the calling thread.
    pool: Option<ThreadPool>,
}

impl Simulation {
    /// Build a randomly seeded simulation from a validated config.
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;

        let lattice = initialize(
            config.width,
            config.height,
            config.depth,
            random_seeder(config.seed),
        )?;

        let pool = match config.threads {
            0 => None,
            n => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
        };

        tracing::info!(
            width = config.width,
            height = config.height,
            depth = config.depth,
            population = lattice.population(),
            threads = config.threads,
            "created simulation"
        );

        Ok(Simulation {
            lattice,
            rule: config.rule,
            mode: config.advance,
            accumulated: Duration::ZERO,
            pool,
        })
    }

    /// Wrap an existing lattice (manual mode, serial evaluation).
    pub fn from_lattice(lattice: Lattice, rule: Rule) -> Self {
        Simulation {
            lattice,
            rule,
            mode: AdvanceMode::Manual,
            accumulated: Duration::ZERO,
            pool: None,
        }
    }

    /// Switch advance mode, resetting the accumulator. Rejects auto intervals
    /// outside the range a config would accept.
    pub fn with_mode(mut self, mode: AdvanceMode) -> Result<Self> {
        mode.validate()?;
        self.mode = mode;
        self.accumulated = Duration::ZERO;
        Ok(self)
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Mutable access for hosts that edit cells between steps.
    pub fn lattice_mut(&mut self) -> &mut Lattice {
        &mut self.lattice
    }

    /// Extract the inner lattice.
    pub fn into_lattice(self) -> Lattice {
        self.lattice
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn mode(&self) -> AdvanceMode {
        self.mode
    }

    pub fn generation(&self) -> u64 {
        self.lattice.generation
    }

    pub fn is_alive(&self, x: i32, y: i32, z: i32) -> bool {
        is_alive(&self.lattice, x, y, z)
    }

    /// Advance one generation unconditionally.
    pub fn step(&mut self) -> Transitions {
        advance(&mut self.lattice, &self.rule, self.pool.as_ref())
    }

    /// Feed one host frame. Returns true if a step was taken.
    ///
    /// Manual mode steps once when `trigger` is set. Auto mode ignores
    /// `trigger`, accumulates `elapsed`, and steps at most once per call when the
    /// interval is reached, carrying any overshoot into the next call.
    pub fn tick(&mut self, elapsed: Duration, trigger: bool) -> bool {
        match self.mode.interval() {
            None => {
                if trigger {
                    self.step();
                }
                trigger
            }
            Some(interval) => {
                self.accumulated += elapsed;
                if self.accumulated >= interval {
                    self.step();
                    self.accumulated -= interval;
                    true
                } else {
                    tracing::trace!(accumulated = ?self.accumulated, "waiting for interval");
                    false
                }
            }
        }
    }

    /// Elapsed time carried toward the next auto step.
    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::grid::set_cell;
    use crate::error::Error;

    fn lone_cell_lattice() -> Lattice {
        let mut lattice = Lattice::new_dead(3, 3, 3).unwrap();
        set_cell(&mut lattice, 1, 1, 1, true);
        lattice
    }

    #[test]
    fn test_new_from_config() {
        let config = SimulationConfig {
            width: 6,
            height: 5,
            depth: 4,
            seed: Some(11),
            ..SimulationConfig::default()
        };
        let sim = Simulation::new(&config).unwrap();
        assert_eq!(sim.lattice().volume(), 120);
        assert_eq!(sim.generation(), 0);

        // Same seed, same lattice
        let again = Simulation::new(&config).unwrap();
        assert_eq!(sim.lattice(), again.lattice());
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = SimulationConfig {
            width: -1,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            Simulation::new(&config),
            Err(Error::NegativeDimension { .. })
        ));
    }

    #[test]
    fn test_threaded_matches_serial() {
        let serial = SimulationConfig {
            width: 9,
            height: 9,
            depth: 9,
            rule: Rule::new(4, 9, 5, 7),
            seed: Some(5),
            ..SimulationConfig::default()
        };
        let threaded = SimulationConfig {
            threads: 2,
            ..serial.clone()
        };

        let mut a = Simulation::new(&serial).unwrap();
        let mut b = Simulation::new(&threaded).unwrap();
        for _ in 0..3 {
            a.step();
            b.step();
        }
        assert_eq!(a.lattice(), b.lattice());
    }

    #[test]
    fn test_with_mode_rejects_bad_interval() {
        for interval_secs in [-1.0, f32::NAN, f32::INFINITY, 0.0, 6.0] {
            let result = Simulation::from_lattice(lone_cell_lattice(), Rule::classic())
                .with_mode(AdvanceMode::Auto { interval_secs });
            assert!(matches!(result, Err(Error::InvalidInterval(_))));
        }
    }

    #[test]
    fn test_manual_tick() {
        let mut sim = Simulation::from_lattice(lone_cell_lattice(), Rule::classic());

        assert!(!sim.tick(Duration::from_secs(10), false));
        assert_eq!(sim.generation(), 0);
        assert!(sim.is_alive(1, 1, 1));

        assert!(sim.tick(Duration::ZERO, true));
        assert_eq!(sim.generation(), 1);
        assert!(!sim.is_alive(1, 1, 1));
    }

    #[test]
    fn test_auto_tick_keeps_overshoot() {
        let mut sim = Simulation::from_lattice(lone_cell_lattice(), Rule::classic())
            .with_mode(AdvanceMode::Auto { interval_secs: 1.0 })
            .unwrap();

        assert!(!sim.tick(Duration::from_millis(600), false));
        assert_eq!(sim.generation(), 0);

        // 1.2s accumulated: one step, 0.2s carried
        assert!(sim.tick(Duration::from_millis(600), false));
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.accumulated(), Duration::from_millis(200));

        // 1.0s accumulated: steps again thanks to the carried overshoot
        assert!(sim.tick(Duration::from_millis(800), false));
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.accumulated(), Duration::ZERO);
    }

    #[test]
    fn test_auto_tick_one_step_per_call() {
        let mut sim = Simulation::from_lattice(lone_cell_lattice(), Rule::classic())
            .with_mode(AdvanceMode::Auto { interval_secs: 1.0 })
            .unwrap();

        assert!(sim.tick(Duration::from_millis(3500), false));
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.accumulated(), Duration::from_millis(2500));

        assert!(sim.tick(Duration::ZERO, false));
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_auto_ignores_trigger() {
        let mut sim = Simulation::from_lattice(lone_cell_lattice(), Rule::classic())
            .with_mode(AdvanceMode::Auto { interval_secs: 1.0 })
            .unwrap();

        assert!(!sim.tick(Duration::from_millis(100), true));
        assert_eq!(sim.generation(), 0);
    }
}
