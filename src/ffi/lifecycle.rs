//! Simulation creation, destruction, and dimension queries.

use std::ffi::{c_char, CStr};
use std::ptr;

use crate::automaton::{Rule, Simulation};
use crate::config::SimulationConfig;

fn into_handle(config: &SimulationConfig) -> *mut Simulation {
    match Simulation::new(config) {
        Ok(sim) => Box::into_raw(Box::new(sim)),
        Err(err) => {
            tracing::warn!(%err, "rejected simulation config");
            ptr::null_mut()
        }
    }
}

/// Creates a seeded, manually advanced simulation.
///
/// # Returns
/// A pointer to a new Simulation, or null if any dimension is negative or the
/// lattice is too large to allocate.
///
/// # Safety
/// The returned pointer must eventually be freed with `la_destroy()`.
#[no_mangle]
pub extern "C" fn la_create(
    width: i32,
    height: i32,
    depth: i32,
    live_min: u32,
    live_max: u32,
    revive_min: u32,
    revive_max: u32,
    seed: u64,
) -> *mut Simulation {
    let config = SimulationConfig {
        width,
        height,
        depth,
        rule: Rule::new(live_min, live_max, revive_min, revive_max),
        seed: Some(seed),
        ..SimulationConfig::default()
    };
    into_handle(&config)
}

/// Creates a simulation from a JSON configuration document.
///
/// # Safety
/// - `json` must be null or point to a NUL-terminated string
///
/// # Returns
/// A pointer to a new Simulation, or null if `json` is null, not UTF-8, or an
/// invalid configuration.
#[no_mangle]
pub unsafe extern "C" fn la_create_from_json(json: *const c_char) -> *mut Simulation {
    if json.is_null() {
        return ptr::null_mut();
    }

    let text = match CStr::from_ptr(json).to_str() {
        Ok(text) => text,
        Err(_) => return ptr::null_mut(),
    };

    match SimulationConfig::from_json(text) {
        Ok(config) => into_handle(&config),
        Err(err) => {
            tracing::warn!(%err, "rejected simulation config");
            ptr::null_mut()
        }
    }
}

/// Destroys a simulation and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `la_create*()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn la_destroy(ptr: *mut Simulation) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the current generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn la_get_generation(ptr: *const Simulation) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

/// Lattice width, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
#[no_mangle]
pub unsafe extern "C" fn la_width(ptr: *const Simulation) -> i32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).lattice().width
}

/// Lattice height, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
#[no_mangle]
pub unsafe extern "C" fn la_height(ptr: *const Simulation) -> i32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).lattice().height
}

/// Lattice depth, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
#[no_mangle]
pub unsafe extern "C" fn la_depth(ptr: *const Simulation) -> i32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).lattice().depth
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn test_create_and_destroy() {
        unsafe {
            let sim = la_create(4, 5, 6, 2, 3, 3, 3, 1);
            assert!(!sim.is_null());
            assert_eq!(la_width(sim), 4);
            assert_eq!(la_height(sim), 5);
            assert_eq!(la_depth(sim), 6);

            // Should not crash
            la_destroy(sim);
        }
    }

    #[test]
    fn test_create_negative_dimension() {
        let sim = la_create(4, -1, 4, 2, 3, 3, 3, 1);
        assert!(sim.is_null());
    }

    #[test]
    fn test_create_oversized_lattice() {
        let sim = la_create(1 << 30, 1 << 30, 16, 2, 3, 3, 3, 1);
        assert!(sim.is_null());
        let sim = la_create(i32::MAX, i32::MAX, i32::MAX, 2, 3, 3, 3, 1);
        assert!(sim.is_null());
    }

    #[test]
    fn test_initial_generation() {
        unsafe {
            let sim = la_create(4, 4, 4, 2, 3, 3, 3, 1);
            assert_eq!(la_get_generation(sim), 0);
            la_destroy(sim);
        }
    }

    #[test]
    fn test_create_from_json() {
        unsafe {
            let json = CString::new(r#"{ "width": 3, "height": 2, "depth": 1, "seed": 9 }"#).unwrap();
            let sim = la_create_from_json(json.as_ptr());
            assert!(!sim.is_null());
            assert_eq!(la_width(sim), 3);
            assert_eq!(la_depth(sim), 1);
            la_destroy(sim);

            let bad = CString::new(r#"{ "width": -3 }"#).unwrap();
            assert!(la_create_from_json(bad.as_ptr()).is_null());
            assert!(la_create_from_json(ptr::null()).is_null());
        }
    }

    #[test]
    fn test_null_handling() {
        unsafe {
            // Should not crash
            la_destroy(ptr::null_mut());
            assert_eq!(la_get_generation(ptr::null()), 0);
            assert_eq!(la_width(ptr::null()), 0);
            assert_eq!(la_height(ptr::null()), 0);
            assert_eq!(la_depth(ptr::null()), 0);
        }
    }
}
