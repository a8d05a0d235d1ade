//! Identifier types for nodes and streets.
//!
//! `NodeId` is the *external* identifier drawn from the source map (a 64-bit
//! integer, not necessarily dense or small) — see §3 of the design spec.
//! `StreetIndex` is the network's own dense, 0-based, stable index, assigned
//! on insertion; it is the type every per-edge array (`traffic_load`,
//! `cumulative_traffic_load`) is indexed by.
//!
//! Keeping these as distinct types (rather than both `u32`/`u64`) makes it a
//! compile error to accidentally index an array with a raw map node id, or
//! look up a node by street index.

use std::fmt;

/// External node identifier, as drawn from the source geographic map.
///
/// `Copy + Ord + Hash` so it can be used as a map key and sorted collection
/// element. Not guaranteed dense — a [`crate::NodeTable`]-style lookup is
/// required to translate to a dense internal index.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Dense, 0-based index of a street (undirected edge), assigned in insertion
/// order and stable for the network's lifetime. A bijection with
/// `[0, street_count)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreetIndex(pub u32);

impl StreetIndex {
    /// Sentinel meaning "no street" — used by the predecessor map to mark a
    /// node with no incoming edge (the shortest-paths source itself).
    pub const INVALID: StreetIndex = StreetIndex(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for StreetIndex {
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for StreetIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StreetIndex({})", self.0)
    }
}
