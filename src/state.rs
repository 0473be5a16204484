//! Core lattice structure and coordinate type.

use crate::error::{Error, Result};

/// An integer cell coordinate. Carries no identity beyond its components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Coord { x, y, z }
    }
}

/// The current generation of a 3D automaton.
///
/// Cells are stored in z,y,x order (z changes slowest, x changes fastest).
/// Dimensions are fixed once the lattice is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lattice {
    pub width: i32,
    pub height: i32,
    pub depth: i32,
    pub cells: Vec<bool>,
    pub generation: u64,
}

impl Lattice {
    /// Build an all-dead lattice.
    ///
    /// Fails on a negative dimension, or when the cell count does not fit in
    /// memory.
    pub fn new_dead(width: i32, height: i32, depth: i32) -> Result<Self> {
        for (axis, value) in [("width", width), ("height", height), ("depth", depth)] {
            if value < 0 {
                return Err(Error::NegativeDimension { axis, value });
            }
        }

        let too_large = || Error::TooLarge {
            width,
            height,
            depth,
        };
        let size = (width as usize)
            .checked_mul(height as usize)
            .and_then(|plane| plane.checked_mul(depth as usize))
            .ok_or_else(too_large)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(size).map_err(|_| too_large())?;
        cells.resize(size, false);

        Ok(Lattice {
            width,
            height,
            depth,
            cells,
            generation: 0,
        })
    }

    /// Total number of cells.
    #[inline]
    pub fn volume(&self) -> usize {
        self.cells.len()
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterate every coordinate in storage order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.depth).flat_map(move |z| {
            (0..self.height)
                .flat_map(move |y| (0..self.width).map(move |x| Coord::new(x, y, z)))
        })
    }

    /// Recover the coordinate of a linear cell index.
    #[inline]
    pub fn coord_of(&self, idx: usize) -> Coord {
        let w = self.width as usize;
        let plane = w * self.height as usize;
        Coord::new(
            (idx % w) as i32,
            ((idx % plane) / w) as i32,
            (idx / plane) as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dead() {
        let lattice = Lattice::new_dead(4, 3, 2).unwrap();
        assert_eq!(lattice.volume(), 24);
        assert_eq!(lattice.population(), 0);
        assert_eq!(lattice.generation, 0);
    }

    #[test]
    fn test_coords_storage_order() {
        let lattice = Lattice::new_dead(2, 2, 2).unwrap();
        let coords: Vec<Coord> = lattice.coords().collect();
        assert_eq!(coords.len(), 8);
        assert_eq!(coords[0], Coord::new(0, 0, 0));
        assert_eq!(coords[1], Coord::new(1, 0, 0));
        assert_eq!(coords[2], Coord::new(0, 1, 0));
        assert_eq!(coords[4], Coord::new(0, 0, 1));

        for (idx, coord) in coords.iter().enumerate() {
            assert_eq!(lattice.coord_of(idx), *coord);
        }
    }

    #[test]
    fn test_new_dead_rejects_negative() {
        assert!(matches!(
            Lattice::new_dead(2, 2, -1),
            Err(Error::NegativeDimension {
                axis: "depth",
                value: -1
            })
        ));
    }

    #[test]
    fn test_new_dead_rejects_overflowing_volume() {
        assert!(matches!(
            Lattice::new_dead(1 << 30, 1 << 30, 16),
            Err(Error::TooLarge {
                width: 1073741824,
                height: 1073741824,
                depth: 16
            })
        ));
        assert!(matches!(
            Lattice::new_dead(i32::MAX, i32::MAX, i32::MAX),
            Err(Error::TooLarge { .. })
        ));
    }

    #[test]
    fn test_zero_sized() {
        let lattice = Lattice::new_dead(0, 5, 5).unwrap();
        assert_eq!(lattice.volume(), 0);
        assert_eq!(lattice.coords().count(), 0);
    }
}
