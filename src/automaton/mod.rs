//! Core automaton logic.
//!
//! This module contains the logic for building a lattice, enumerating
//! neighborhoods, evaluating the threshold rule, and stepping generations.
//! The FFI layer in `ffi/` calls into these functions.

pub mod driver;
pub mod grid;
pub mod rule;
pub mod stepping;

pub use driver::Simulation;
pub use grid::{
    in_bounds, index_of, initialize, is_alive, living_neighbor_count, neighbors_of,
    random_seeder, set_cell, Neighbors,
};
pub use rule::{Rule, MAX_NEIGHBORS};
pub use stepping::{
    advance, apply_transitions, plan_transitions, plan_transitions_parallel, step, Transitions,
};
