//! Hexagonal region and boundary folding
//!
//! A region is every cell within `radius` steps of the origin. The plane is
//! tiled with copies of the region, centered on the lattice generated by the
//! six mirror centers `rotate((radius, radius + 1), k)`. Folding ("wrap")
//! maps any cell to the cell at the same position inside the central copy,
//! which makes the region behave like a hexagonal torus.

use crate::coords::{Axial, DIRECTIONS};
use crate::error::{HexError, Result};

/// Hexagonal region of a fixed radius centered on the origin
///
/// # Example
///
/// ```
/// use hex_wrap_world::*;
///
/// let region = Region::new(2).unwrap();
/// assert_eq!(region.cell_count(), 19);
///
/// // Stepping off the east edge comes back in from the west.
/// let folded = region.wrap(Axial::new(3, 0));
/// assert!(region.contains(folded));
/// assert_eq!(region.wrap(folded), folded);
///
/// assert!(Region::new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    radius: i32,
    /// Centers of the six neighboring region copies, in rotation order.
    mirrors: [Axial; 6],
}

impl Region {
    /// Largest supported radius. Keeps mirror centers and folds far from
    /// `i32` overflow.
    pub const MAX_RADIUS: i32 = 1 << 24;

    /// Create a region of the given radius.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRadius` if `radius` is negative or above
    /// [`MAX_RADIUS`](Self::MAX_RADIUS).
    pub fn new(radius: i32) -> Result<Self> {
        if !(0..=Self::MAX_RADIUS).contains(&radius) {
            return Err(HexError::InvalidRadius(radius));
        }

        let base = Axial::new(radius, radius + 1);
        let mirrors = std::array::from_fn(|k| base.rotate(k as u32));

        Ok(Self { radius, mirrors })
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius as u32
    }

    /// Number of cells in the region, `3r² + 3r + 1`.
    pub fn cell_count(&self) -> usize {
        cell_count(self.radius())
    }

    #[inline]
    pub fn contains(&self, cell: Axial) -> bool {
        cell.length() <= self.radius as i64
    }

    /// Centers of the six region copies that surround this one.
    #[inline]
    pub fn mirror_centers(&self) -> [Axial; 6] {
        self.mirrors
    }

    /// Fold any cell into the region.
    ///
    /// Cells already inside are returned unchanged. Outside cells are first
    /// moved by a whole number of region copies to within one mirror step of
    /// the region, then by the nearest mirror center until they land inside.
    /// Ties between equally near mirrors go to the first one in rotation
    /// order.
    pub fn wrap(&self, cell: Axial) -> Axial {
        if self.contains(cell) {
            return cell;
        }
        let mut cell = self.reduce(cell);

        // Each fold strictly shortens the distance to the origin.
        let limit = cell.length();
        for folds in 0..=limit {
            if self.contains(cell) {
                if folds > 1 {
                    log::trace!("wrap: folded in {} steps to {}", folds, cell);
                }
                return cell;
            }
            cell = cell - self.nearest_mirror(cell);
        }

        debug_assert!(self.contains(cell), "wrap failed to converge at {}", cell);
        cell
    }

    /// Subtract the copy center nearest in lattice coordinates.
    ///
    /// The first two mirrors span the lattice of copy centers, whose index
    /// is the region's cell count. The result lies within `2r + 1` steps of
    /// the origin.
    fn reduce(&self, cell: Axial) -> Axial {
        let n = self.cell_count() as i64;
        let k = self.radius as i64;
        let (q0, r0) = (cell.q as i64, cell.r as i64);

        // Coordinates of the cell in the (mirrors[0], mirrors[1]) basis,
        // rounded to the nearest integer.
        let a = round_div(k * q0 + (2 * k + 1) * r0, n);
        let b = round_div((k + 1) * q0 - k * r0, n);

        let [m0, m1, ..] = self.mirrors;
        let q = q0 - a * m0.q as i64 - b * m1.q as i64;
        let r = r0 - a * m0.r as i64 - b * m1.r as i64;

        // |q|, |r| <= 2 * MAX_RADIUS + 1
        Axial::new(q as i32, r as i32)
    }

    fn nearest_mirror(&self, cell: Axial) -> Axial {
        let mut best = self.mirrors[0];
        let mut best_dist = cell.distance(best);
        for &m in &self.mirrors[1..] {
            let d = cell.distance(m);
            if d < best_dist {
                best = m;
                best_dist = d;
            }
        }
        best
    }

    /// The six cells adjacent to `cell`, folded into the region.
    pub fn neighbors(&self, cell: Axial) -> [Axial; 6] {
        DIRECTIONS.map(|d| self.wrap(cell + d))
    }

    /// Iterate every cell of the region, column by column.
    pub fn cells(&self) -> impl Iterator<Item = Axial> {
        let n = self.radius;
        (-n..=n).flat_map(move |q| {
            let r0 = (-n).max(-q - n);
            let r1 = n.min(-q + n);
            (r0..=r1).map(move |r| Axial::new(q, r))
        })
    }
}

/// Number of cells within `radius` steps of a cell, `3r² + 3r + 1`.
///
/// Saturates at `usize::MAX` for radii no region can have.
pub(crate) fn cell_count(radius: u32) -> usize {
    let r = radius as usize;
    r.saturating_mul(r)
        .saturating_add(r)
        .saturating_mul(3)
        .saturating_add(1)
}

/// `num / den` rounded to the nearest integer, halves rounding up.
fn round_div(num: i64, den: i64) -> i64 {
    (2 * num + den).div_euclid(2 * den)
}

/// Fold `cell` into the hexagonal region of the given radius.
///
/// # Errors
///
/// Returns `InvalidRadius` if `radius` is negative or too large.
pub fn wrap(radius: i32, cell: Axial) -> Result<Axial> {
    Ok(Region::new(radius)?.wrap(cell))
}
