//! Road-distance table with mirror-fill symmetrisation.

use rustc_hash::FxHashMap;
use tg_core::StopId;

/// Road distances in metres between ordered stop pairs.
///
/// Users may declare `d(a,b)` without `d(b,a)`.  Each declared insert also
/// fills the mirror direction, but only while the mirror is absent or zero —
/// an explicitly declared reverse distance always wins, regardless of
/// declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceTable {
    map: FxHashMap<(StopId, StopId), u32>,
}

impl DistanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a user-declared distance from `from` to `to`.
    pub fn insert_declared(&mut self, from: StopId, to: StopId, metres: u32) {
        self.map.insert((from, to), metres);
        match self.map.get(&(to, from)) {
            None | Some(0) => {
                self.map.insert((to, from), metres);
            }
            Some(_) => {}
        }
    }

    /// Road distance from `from` to `to`, if either direction was declared.
    #[inline]
    pub fn get(&self, from: StopId, to: StopId) -> Option<u32> {
        self.map.get(&(from, to)).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
