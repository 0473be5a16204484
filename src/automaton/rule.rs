//! Generalized neighbor-threshold rule.

use serde::{Deserialize, Serialize};

/// Neighbor count of a full-interior cell: 3×3×3 cube excluding the centre.
pub const MAX_NEIGHBORS: usize = 26;

/// Survival and birth bands, both inclusive.
///
/// Bands are not validated: `live_min > live_max` is a legal rule whose
/// survival band never matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub live_min: u32,
    pub live_max: u32,
    pub revive_min: u32,
    pub revive_max: u32,
}

impl Rule {
    pub const fn new(live_min: u32, live_max: u32, revive_min: u32, revive_max: u32) -> Self {
        Rule {
            live_min,
            live_max,
            revive_min,
            revive_max,
        }
    }

    /// Survive on 2-3, born on exactly 3.
    pub const fn classic() -> Self {
        Rule::new(2, 3, 3, 3)
    }

    /// Thresholds for a cell with `total` in-bounds neighbors.
    ///
    /// Any cell short of the full 26 gets every bound halved (floor),
    /// regardless of how many neighbors it is missing.
    pub fn effective(&self, total: usize) -> Rule {
        if total < MAX_NEIGHBORS {
            Rule::new(
                self.live_min / 2,
                self.live_max / 2,
                self.revive_min / 2,
                self.revive_max / 2,
            )
        } else {
            *self
        }
    }

    /// Next state of a cell given its current state, neighbor total, and
    /// living neighbor count.
    pub fn next_state(&self, alive: bool, total: usize, living: u32) -> bool {
        let t = self.effective(total);
        if alive {
            t.live_min <= living && living <= t.live_max
        } else {
            t.revive_min <= living && living <= t.revive_max
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Rule::classic()
    }
}
