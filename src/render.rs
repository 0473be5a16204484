//! Bridge between the lattice and a per-cell renderer.
//!
//! The renderer keeps one visual handle per cell, indexed like the lattice.
//! [`RenderCache`] remembers what each handle currently shows so the renderer
//! is only told about cells whose appearance must change.

use crate::state::{Coord, Lattice};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Appearance {
    Living,
    Dead,
}

impl From<bool> for Appearance {
    fn from(alive: bool) -> Self {
        if alive {
            Appearance::Living
        } else {
            Appearance::Dead
        }
    }
}

/// A host-side collaborator that draws cells.
pub trait CellRenderer {
    fn set_appearance(&mut self, at: Coord, appearance: Appearance);
}

/// Last appearance pushed to the renderer for every cell.
#[derive(Clone, Debug)]
pub struct RenderCache {
    width: i32,
    height: i32,
    depth: i32,
    shown: Vec<Appearance>,
}

impl RenderCache {
    /// Every handle starts out showing [`Appearance::Dead`].
    pub fn new(lattice: &Lattice) -> Self {
        RenderCache {
            width: lattice.width,
            height: lattice.height,
            depth: lattice.depth,
            shown: vec![Appearance::Dead; lattice.volume()],
        }
    }

    pub fn appearance(&self, idx: usize) -> Option<Appearance> {
        self.shown.get(idx).copied()
    }

    /// Push changed cells to `renderer`. Returns how many were switched.
    ///
    /// If the lattice dimensions differ from the cache, the cache is rebuilt
    /// as all-dead first.
    pub fn sync<R: CellRenderer + ?Sized>(&mut self, lattice: &Lattice, renderer: &mut R) -> usize {
        if (self.width, self.height, self.depth) != (lattice.width, lattice.height, lattice.depth) {
            *self = RenderCache::new(lattice);
        }

        let mut switched = 0;
        for (idx, &alive) in lattice.cells.iter().enumerate() {
            let wanted = Appearance::from(alive);
            if self.shown[idx] != wanted {
                renderer.set_appearance(lattice.coord_of(idx), wanted);
                self.shown[idx] = wanted;
                switched += 1;
            }
        }

        tracing::trace!(switched, "synced renderer");
        switched
    }
}
