//! Generation stepping under a neighbor-threshold [`Rule`].
//!
//! A step is split into two phases:
//! - Plan: every cell is evaluated against the pre-step snapshot and lands in
//!   exactly one of `to_kill` / `to_live`.
//! - Commit: kills then births are written back, and the generation advances.
//!
//! Planning only reads the lattice, so it may fan out across a rayon pool.
//! Commit runs after every cell is planned.

use rayon::prelude::*;
use rayon::ThreadPool;

use super::grid::{index_of, living_neighbor_count, neighbors_of};
use super::rule::Rule;
use crate::state::{Coord, Lattice};

/// Pending per-cell outcomes for one step. Disjoint and exhaustive over the lattice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transitions {
    pub to_kill: Vec<Coord>,
    pub to_live: Vec<Coord>,
}

impl Transitions {
    /// Number of cells covered by the plan.
    pub fn len(&self) -> usize {
        self.to_kill.len() + self.to_live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_kill.is_empty() && self.to_live.is_empty()
    }
}

/// Evaluate a single cell against the current lattice.
#[inline]
fn evaluate(lattice: &Lattice, rule: &Rule, at: Coord) -> bool {
    let total = neighbors_of(lattice, at.x, at.y, at.z).len();
    let living = living_neighbor_count(lattice, at.x, at.y, at.z);
    let alive = lattice.cells[index_of(lattice, at.x, at.y, at.z)];
    rule.next_state(alive, total, living)
}

fn split(lattice: &Lattice, outcomes: impl Iterator<Item = bool>) -> Transitions {
    let mut transitions = Transitions::default();
    for (at, lives) in lattice.coords().zip(outcomes) {
        if lives {
            transitions.to_live.push(at);
        } else {
            transitions.to_kill.push(at);
        }
    }
    transitions
}

/// Plan the next generation serially.
pub fn plan_transitions(lattice: &Lattice, rule: &Rule) -> Transitions {
    split(
        lattice,
        lattice.coords().map(|at| evaluate(lattice, rule, at)),
    )
}

/// Plan the next generation on `pool`. Produces the same lists, in the same
/// order, as [`plan_transitions`].
pub fn plan_transitions_parallel(lattice: &Lattice, rule: &Rule, pool: &ThreadPool) -> Transitions {
    let outcomes: Vec<bool> = pool.install(|| {
        (0..lattice.volume())
            .into_par_iter()
            .map(|idx| evaluate(lattice, rule, lattice.coord_of(idx)))
            .collect()
    });
    split(lattice, outcomes.into_iter())
}

/// Commit a plan: kills first, then births. Increments the generation.
pub fn apply_transitions(lattice: &mut Lattice, transitions: &Transitions) {
    for at in &transitions.to_kill {
        let idx = index_of(lattice, at.x, at.y, at.z);
        lattice.cells[idx] = false;
    }
    for at in &transitions.to_live {
        let idx = index_of(lattice, at.x, at.y, at.z);
        lattice.cells[idx] = true;
    }
    lattice.generation += 1;
}

/// Advance `lattice` in place by one generation, returning the committed plan.
pub fn advance(lattice: &mut Lattice, rule: &Rule, pool: Option<&ThreadPool>) -> Transitions {
    let transitions = match pool {
        Some(pool) => plan_transitions_parallel(lattice, rule, pool),
        None => plan_transitions(lattice, rule),
    };
    apply_transitions(lattice, &transitions);

    tracing::debug!(
        generation = lattice.generation,
        living = transitions.to_live.len(),
        dead = transitions.to_kill.len(),
        "stepped lattice"
    );

    transitions
}

/// Compute the next generation without touching `lattice`.
pub fn step(lattice: &Lattice, rule: &Rule) -> Lattice {
    let mut next = lattice.clone();
    advance(&mut next, rule, None);
    next
}
