//! Lattice initialization, cell access, and neighbor enumeration.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

use crate::error::Result;
use crate::state::{Coord, Lattice};

/// Neighbor list sized for a full Moore neighborhood, kept on the stack.
pub type Neighbors = SmallVec<[Coord; 26]>;

/// Allocate a `width × height × depth` lattice and seed every cell with `seed_fn`.
///
/// Cells are visited in storage order, so a deterministic seeder yields a
/// deterministic lattice. Zero-sized dimensions produce an empty lattice;
/// negative or overflowing dimensions are rejected before any seeding.
pub fn initialize<F>(width: i32, height: i32, depth: i32, mut seed_fn: F) -> Result<Lattice>
where
    F: FnMut() -> bool,
{
    let mut lattice = Lattice::new_dead(width, height, depth)?;
    for cell in lattice.cells.iter_mut() {
        *cell = seed_fn();
    }
    Ok(lattice)
}

/// Fair coin flip per call. `Some(seed)` gives a reproducible sequence.
pub fn random_seeder(seed: Option<u64>) -> impl FnMut() -> bool {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    move || rng.gen_bool(0.5)
}

/// Calculate the linear index for a 3D coordinate.
#[inline]
pub fn index_of(lattice: &Lattice, x: i32, y: i32, z: i32) -> usize {
    z as usize * lattice.height as usize * lattice.width as usize
        + y as usize * lattice.width as usize
        + x as usize
}

/// Check if coordinates are within lattice bounds.
#[inline]
pub fn in_bounds(lattice: &Lattice, x: i32, y: i32, z: i32) -> bool {
    x >= 0 && x < lattice.width && y >= 0 && y < lattice.height && z >= 0 && z < lattice.depth
}

/// Read a cell. Out-of-bounds coordinates read as dead.
#[inline]
pub fn is_alive(lattice: &Lattice, x: i32, y: i32, z: i32) -> bool {
    in_bounds(lattice, x, y, z) && lattice.cells[index_of(lattice, x, y, z)]
}

/// Write a cell. Out-of-bounds coordinates are silently ignored.
pub fn set_cell(lattice: &mut Lattice, x: i32, y: i32, z: i32, alive: bool) {
    if in_bounds(lattice, x, y, z) {
        let idx = index_of(lattice, x, y, z);
        lattice.cells[idx] = alive;
    }
}

/// Every in-bounds coordinate of the Moore neighborhood around `(x, y, z)`,
/// excluding the cell itself, in dz/dy/dx order.
///
/// Returns an empty list when the centre is itself out of bounds.
pub fn neighbors_of(lattice: &Lattice, x: i32, y: i32, z: i32) -> Neighbors {
    let mut neighbors = Neighbors::new();

    if !in_bounds(lattice, x, y, z) {
        return neighbors;
    }

    for dz in -1..=1 {
        for dy in -1..=1 {
            for dx in -1..=1 {
                // Skip the center cell
                if dx == 0 && dy == 0 && dz == 0 {
                    continue;
                }

                let (nx, ny, nz) = (x + dx, y + dy, z + dz);
                if in_bounds(lattice, nx, ny, nz) {
                    neighbors.push(Coord::new(nx, ny, nz));
                }
            }
        }
    }

    neighbors
}

/// Count living cells among [`neighbors_of`].
pub fn living_neighbor_count(lattice: &Lattice, x: i32, y: i32, z: i32) -> u32 {
    neighbors_of(lattice, x, y, z)
        .iter()
        .filter(|n| lattice.cells[index_of(lattice, n.x, n.y, n.z)])
        .count() as u32
}
