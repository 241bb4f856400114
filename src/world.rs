//! HexWorld main structure

use std::collections::{HashSet, VecDeque};

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::WorldConfig;
use crate::coords::Axial;
use crate::error::Result;
use crate::layout::HexLayout;
use crate::occupancy::OccupancyMap;
use crate::region::Region;
use crate::walk::DrunkardsWalk;

/// A generated world: a wrapping hex region with a connected open area
///
/// # Examples
///
/// ```
/// use hex_wrap_world::*;
///
/// let config = WorldConfigBuilder::new()
///     .seed(42)
///     .radius(6)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let world = HexWorld::generate(config).unwrap();
/// assert_eq!(world.open_count(), config.step_budget());
///
/// // The world repeats outside the region.
/// let m = world.region().mirror_centers()[0];
/// for cell in world.open_cells() {
///     assert!(world.is_open(cell + m));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HexWorld {
    /// Configuration used to generate this world
    config: WorldConfig,

    region: Region,

    occupancy: OccupancyMap,
}

impl HexWorld {
    /// Generate a world with the configuration's seeded ChaCha generator.
    pub fn generate(config: WorldConfig) -> Result<Self> {
        Self::generate_with_rng(config, ChaCha8Rng::seed_from_u64(config.seed))
    }

    /// Generate a world driving the walk with a caller-supplied generator.
    ///
    /// The configuration's seed is ignored.
    pub fn generate_with_rng<R: Rng>(config: WorldConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let region = config.region()?;
        let budget = config.step_budget();

        log::debug!(
            "generating hex world: radius {}, {} cells, {} steps",
            region.radius(),
            region.cell_count(),
            budget
        );

        let mut occupancy = OccupancyMap::new(region);
        let mut walk = DrunkardsWalk::new(region, config.start, rng);

        for step in 0..budget {
            match walk.next_cell(&occupancy) {
                Some(cell) => {
                    occupancy.open(cell);
                }
                None => {
                    log::debug!("walk exhausted after {} of {} steps", step, budget);
                    break;
                }
            }
        }

        log::debug!("opened {} cells", occupancy.len());

        Ok(Self {
            config,
            region,
            occupancy,
        })
    }

    #[inline]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    #[inline]
    pub fn region(&self) -> &Region {
        &self.region
    }

    #[inline]
    pub fn occupancy(&self) -> &OccupancyMap {
        &self.occupancy
    }

    /// Whether a cell anywhere on the plane is open.
    #[inline]
    pub fn is_open(&self, cell: Axial) -> bool {
        self.occupancy.is_open(cell)
    }

    /// Number of open cells. May be less than the step budget if the walk
    /// ran out of room.
    #[inline]
    pub fn open_count(&self) -> usize {
        self.occupancy.len()
    }

    /// Open cells inside the region, in no particular order.
    pub fn open_cells(&self) -> impl Iterator<Item = Axial> + '_ {
        self.occupancy.iter()
    }

    /// The region cell under a pixel position.
    pub fn cell_at(&self, pixel: DVec2, layout: &HexLayout) -> Axial {
        self.region.wrap(layout.pixel_to_axial(pixel))
    }

    /// Every cell reachable from `start` through open cells.
    ///
    /// The start cell is always included, open or not, so that a world can
    /// be checked for connectivity from its walk's start cell.
    pub fn reachable_from(&self, start: Axial) -> HashSet<Axial> {
        self.flood(start, usize::MAX)
    }

    /// Open cells within `hops` steps of `center`, walking only through open
    /// cells. The center is always included.
    pub fn open_within(&self, center: Axial, hops: usize) -> Vec<Axial> {
        self.flood(center, hops).into_iter().collect()
    }

    fn flood(&self, start: Axial, hops: usize) -> HashSet<Axial> {
        let start = self.region.wrap(start);
        let mut visited = HashSet::from([start]);
        let mut edge = VecDeque::from([(start, 0)]);

        while let Some((cell, depth)) = edge.pop_front() {
            if depth >= hops {
                continue;
            }
            for n in self.region.neighbors(cell) {
                if self.is_open(n) && visited.insert(n) {
                    edge.push_back((n, depth + 1));
                }
            }
        }

        visited
    }
}
