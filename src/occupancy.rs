//! Sparse record of open cells

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coords::Axial;
use crate::error::HexError;
use crate::region::Region;

/// Which cells of a region are open
///
/// Keys are always folded into the region, so any cell of the unbounded
/// plane can be queried. Reading an absent cell reports it closed and never
/// modifies the map. The map only grows.
///
/// With the `serde` feature it serializes as the region radius plus a
/// sorted list of open cells.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "OccupancyRecord", into = "OccupancyRecord")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyMap {
    region: Region,
    open: HashSet<Axial>,
}

impl OccupancyMap {
    /// Create an empty map where every cell of the region is closed.
    pub fn new(region: Region) -> Self {
        Self {
            region,
            open: HashSet::new(),
        }
    }

    #[inline]
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Whether the cell, folded into the region, is open.
    #[inline]
    pub fn is_open(&self, cell: Axial) -> bool {
        self.open.contains(&self.region.wrap(cell))
    }

    /// Mark the cell open. Returns `true` if it was closed before.
    pub fn open(&mut self, cell: Axial) -> bool {
        self.open.insert(self.region.wrap(cell))
    }

    /// Number of open cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Iterate open cells in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = Axial> + '_ {
        self.open.iter().copied()
    }
}

/// Serialized form of [`OccupancyMap`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyRecord {
    pub radius: u32,
    pub open: Vec<Axial>,
}

impl From<OccupancyMap> for OccupancyRecord {
    fn from(map: OccupancyMap) -> Self {
        let mut open: Vec<Axial> = map.open.into_iter().collect();
        open.sort();
        Self {
            radius: map.region.radius(),
            open,
        }
    }
}

impl TryFrom<OccupancyRecord> for OccupancyMap {
    type Error = HexError;

    fn try_from(record: OccupancyRecord) -> Result<Self, HexError> {
        let radius = i32::try_from(record.radius).map_err(|_| {
            HexError::InvalidConfig(format!("radius {} is too large", record.radius))
        })?;
        let mut map = OccupancyMap::new(Region::new(radius)?);
        for cell in record.open {
            map.open(cell);
        }
        Ok(map)
    }
}
