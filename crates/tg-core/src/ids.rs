//! Dense index newtypes.
//!
//! Every table in the engine is a flat `Vec` addressed by one of these ids,
//! so each id is just its table position wrapped in a distinct type — mixing
//! a `StopId` into a bus table is a compile error instead of a silent
//! off-by-table bug.  The inner integer stays `pub` because builders mint
//! ids from `vec.len()` directly; readers go through [`index()`].
//!
//! There is no `Option`-style niche: the all-ones bit pattern doubles as the
//! `INVALID` sentinel, which keeps id arrays dense (`Vec<EdgeId>` instead of
//! `Vec<Option<EdgeId>>` in Dijkstra's predecessor table).
//!
//! [`index()`]: StopId::index

use std::fmt;

/// Declare a dense index newtype over a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// All-ones sentinel standing in for "no id".
            pub const INVALID: Self = Self(<$inner>::MAX);

            /// The id as a `Vec` index.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// `true` unless this is the [`INVALID`](Self::INVALID) sentinel.
            #[inline]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "#{}"), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a stop in catalog insertion order.
    pub struct StopId(u32);
}

typed_id! {
    /// Index of a bus route, dense in route-name order.
    pub struct BusId(u32);
}

typed_id! {
    /// Index of a time-graph vertex.  Every stop owns two: the "waiting"
    /// vertex `2·stop` and the "boarded" vertex `2·stop + 1`.
    pub struct VertexId(u32);
}

typed_id! {
    /// Index of a time-graph edge, in allocation order (wait edges first,
    /// then ride edges bus by bus).
    pub struct EdgeId(u32);
}

typed_id! {
    /// Dense id of a precomputed route in the all-pairs cache.
    pub struct RouteId(u32);
}
