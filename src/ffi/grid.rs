//! Cell access, stepping, and frame ticks.

use std::time::Duration;

use crate::automaton::{self, Simulation};

/// Sets a cell to alive (non-zero) or dead (0).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation
///
/// Out-of-bounds coordinates are silently ignored.
#[no_mangle]
pub unsafe extern "C" fn la_set_cell(ptr: *mut Simulation, x: i32, y: i32, z: i32, alive: u8) {
    if ptr.is_null() {
        return;
    }

    let sim = &mut *ptr;
    automaton::set_cell(sim.lattice_mut(), x, y, z, alive != 0);
}

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn la_is_alive(ptr: *const Simulation, x: i32, y: i32, z: i32) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    let sim = &*ptr;
    sim.is_alive(x, y, z) as u8
}

/// Number of living cells, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
#[no_mangle]
pub unsafe extern "C" fn la_population(ptr: *const Simulation) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).lattice().population() as u64
}

/// Advances the automaton by one generation regardless of advance mode.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation
#[no_mangle]
pub unsafe extern "C" fn la_step(ptr: *mut Simulation) {
    if ptr.is_null() {
        return;
    }

    let sim = &mut *ptr;
    sim.step();
}

/// Feeds one host frame: seconds elapsed since the previous frame and whether
/// the advance trigger fired during it.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation
///
/// # Returns
/// 1 if a generation was stepped, 0 otherwise (including null pointer).
/// Negative or non-finite `elapsed_secs` count as zero.
#[no_mangle]
pub unsafe extern "C" fn la_tick(ptr: *mut Simulation, elapsed_secs: f32, trigger: u8) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    let elapsed = Duration::try_from_secs_f32(elapsed_secs).unwrap_or(Duration::ZERO);
    let sim = &mut *ptr;
    sim.tick(elapsed, trigger != 0) as u8
}
