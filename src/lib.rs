//! Lattice Life - 3D Cellular Automaton Library
//!
//! A boolean lattice stepped under a generalized neighbor-threshold rule over
//! the 26-cell Moore neighborhood. Hosts drive it either through the Rust API
//! ([`Simulation`]) or through the C ABI in [`ffi`].

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod render;
pub mod state;


pub use automaton::{Rule, Simulation, Transitions, MAX_NEIGHBORS};
pub use config::{AdvanceMode, SimulationConfig};
pub use error::{Error, Result};
pub use render::{Appearance, CellRenderer, RenderCache};
pub use state::{Coord, Lattice};
