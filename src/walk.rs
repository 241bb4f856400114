//! Drunkard's walk over a folded hex region
//!
//! A depth-first, randomized, self-avoiding walk with backtracking. Every
//! cell it emits is adjacent to a cell emitted earlier (or to the start
//! cell), so the set of opened cells stays connected.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::coords::{Axial, DIRECTIONS};
use crate::occupancy::OccupancyMap;
use crate::region::Region;

/// Pull-based random walk state machine
///
/// The walk never writes to the occupancy map. After each call to
/// [`next_cell`](Self::next_cell) the caller must mark the returned cell
/// open before pulling again, otherwise the walk can step onto it a second
/// time. Stopping early is always fine, a shorter walk is still connected.
///
/// # Example
///
/// ```
/// use hex_wrap_world::*;
///
/// let region = Region::new(3).unwrap();
/// let mut occupancy = OccupancyMap::new(region);
/// let mut walk = DrunkardsWalk::seeded(region, Axial::ORIGIN, 42);
///
/// for _ in 0..10 {
///     let Some(cell) = walk.next_cell(&occupancy) else { break };
///     occupancy.open(cell);
/// }
/// assert_eq!(occupancy.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct DrunkardsWalk<R> {
    region: Region,
    /// Path from the start cell to the current cell.
    stack: Vec<Axial>,
    rng: R,
}

impl DrunkardsWalk<ChaCha8Rng> {
    /// Start a reproducible walk driven by a ChaCha generator.
    pub fn seeded(region: Region, start: Axial, seed: u64) -> Self {
        Self::new(region, start, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> DrunkardsWalk<R> {
    /// Start a walk at `start`, folded into the region.
    pub fn new(region: Region, start: Axial, rng: R) -> Self {
        Self {
            region,
            stack: vec![region.wrap(start)],
            rng,
        }
    }

    /// Step to a random closed neighbor of the current cell and return it.
    ///
    /// Backtracks along the path while the current cell has no closed
    /// neighbors. Returns `None` once the path is empty, after which the
    /// walk stays exhausted.
    pub fn next_cell(&mut self, occupancy: &OccupancyMap) -> Option<Axial> {
        let region = self.region;
        let mut directions = DIRECTIONS;

        while let Some(&current) = self.stack.last() {
            directions.shuffle(&mut self.rng);

            let step = directions
                .iter()
                .map(|&d| region.wrap(current + d))
                .find(|&c| !occupancy.is_open(c));

            match step {
                Some(next) => {
                    self.stack.push(next);
                    return Some(next);
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }

    /// Current cell of the walk, `None` when exhausted.
    #[inline]
    pub fn position(&self) -> Option<Axial> {
        self.stack.last().copied()
    }

    /// Length of the backtracking path, including the start cell.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.stack.is_empty()
    }
}
