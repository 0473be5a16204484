//! C FFI layer for game-engine embedding.
//!
//! This module exports C ABI functions for hosts that render the lattice
//! (one visual handle per cell) and feed frame time and input events back in.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` module. These functions are thin wrappers
//! that handle null checks, pointer safety, and C-to-Rust conversions. They never
//! unwind: construction errors are logged and surface as null pointers.

pub mod grid;
pub mod lifecycle;

pub use grid::{la_is_alive, la_population, la_set_cell, la_step, la_tick};
pub use lifecycle::{
    la_create, la_create_from_json, la_depth, la_destroy, la_get_generation, la_height, la_width,
};
