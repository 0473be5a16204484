//! Headless driver.
//!
//! Usage: `lattice-life [CONFIG.json] [GENERATIONS]`
//!
//! Runs the configured simulation for a number of generations and logs the
//! population after each one. Auto-advance configs are fed a fixed frame time.

use std::time::Duration;

use lattice_life::{AdvanceMode, Simulation, SimulationConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lattice_life=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimulationConfig::from_path(path)?,
        None => SimulationConfig::default(),
    };
    let generations: u64 = match args.next() {
        Some(n) => n.parse()?,
        None => 10,
    };

    let mut sim = Simulation::new(&config)?;

    while sim.generation() < generations {
        let stepped = match sim.mode() {
            AdvanceMode::Manual => sim.tick(Duration::ZERO, true),
            AdvanceMode::Auto { .. } => sim.tick(FRAME, false),
        };
        if stepped {
            tracing::info!(
                generation = sim.generation(),
                population = sim.lattice().population(),
                "advanced"
            );
        }
    }

    Ok(())
}
