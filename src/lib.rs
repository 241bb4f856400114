//! Wrapping hexagonal grid geometry and world generation
//!
//! Converts between axial, offset and pixel coordinates of a flat-topped hex
//! grid, folds the unbounded plane onto a hexagonal region so that it wraps
//! around like a torus, and carves a connected open area into that region
//! with a seeded drunkard's walk.
//!
//! # Quick Start
//!
//! ```rust
//! use hex_wrap_world::*;
//!
//! // Generate a world
//! let config = WorldConfigBuilder::new()
//!     .seed(42)
//!     .radius(10).unwrap()
//!     .build().unwrap();
//!
//! let world = HexWorld::generate(config).unwrap();
//!
//! // Map a click at pixel (130, -45) back to a cell
//! let layout = HexLayout::new(16.0).unwrap();
//! let cell = world.cell_at(DVec2::new(130.0, -45.0), &layout);
//! println!("{} is open: {}", cell, world.is_open(cell));
//! ```
//!
//! # Features
//!
//! - `serde`: Enables serialization support for coordinates, configuration
//!   and occupancy maps

// Modules
pub mod error;
pub mod config;
pub mod math;
pub mod coords;
pub mod layout;
pub mod region;
pub mod occupancy;
pub mod walk;
pub mod world;
pub mod outline;

// Re-export core types for convenience
pub use error::{HexError, Result};
pub use config::{WorldConfig, WorldConfigBuilder};
pub use coords::{axial_to_offset, offset_to_axial, rotate, distance, cube_round, Axial, Cube, Offset, DIRECTIONS};
pub use layout::{axial_to_pixel, pixel_to_axial, corners, HexLayout};
pub use region::{wrap, Region};
pub use occupancy::{OccupancyMap, OccupancyRecord};
pub use walk::DrunkardsWalk;
pub use world::HexWorld;
pub use outline::{visible_polygons, CellPolygon, OutlineData};

// Re-export glam::DVec2 for convenience
pub use glam::DVec2;
