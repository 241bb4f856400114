//! Hex world configuration and builder
//!
//! A configuration fully determines a generated world: the same seed,
//! radius, fill ratio and start cell always produce the same open cells.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coords::Axial;
use crate::error::{HexError, Result};
use crate::region::{self, Region};

/// Region radius used when none is given.
pub const DEFAULT_RADIUS: u32 = 12;

/// Fraction of the region the walk opens by default.
pub const DEFAULT_FILL_RATIO: f64 = 0.4;

/// Configuration for deterministic world generation
///
/// Only the configuration needs to be stored to reproduce a world.
///
/// # Example
///
/// ```rust
/// use hex_wrap_world::*;
///
/// let config = WorldConfigBuilder::new()
///     .seed(42)
///     .radius(3)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.cell_count(), 37);
/// assert_eq!(config.step_budget(), 14);
///
/// # #[cfg(feature = "serde")]
/// # {
/// let json = serde_json::to_string(&config).unwrap();
/// let restored: WorldConfig = serde_json::from_str(&json).unwrap();
/// assert_eq!(config, restored);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldConfig {
    /// Seed for the walk's shuffle generator.
    pub seed: u64,

    /// Radius of the hexagonal region.
    pub radius: u32,

    /// Fraction of the region's cells the walk is asked to open.
    ///
    /// The step budget is `floor(fill_ratio * cell_count)`.
    pub fill_ratio: f64,

    /// Cell the walk starts from, folded into the region before use.
    pub start: Axial,
}

impl WorldConfig {
    /// The region described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `radius` does not fit a signed coordinate.
    pub fn region(&self) -> Result<Region> {
        let radius = i32::try_from(self.radius).map_err(|_| {
            HexError::InvalidConfig(format!("radius {} is too large", self.radius))
        })?;
        Region::new(radius)
    }

    /// Number of cells in the region, `3r² + 3r + 1`.
    pub fn cell_count(&self) -> usize {
        region::cell_count(self.radius)
    }

    /// Number of walk steps to run.
    pub fn step_budget(&self) -> usize {
        (self.fill_ratio * self.cell_count() as f64).floor() as usize
    }

    /// Check every field, for configurations assembled by hand.
    pub fn validate(&self) -> Result<()> {
        self.region()?;
        check_fill_ratio(self.fill_ratio)
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: rand::random(),
            radius: DEFAULT_RADIUS,
            fill_ratio: DEFAULT_FILL_RATIO,
            start: Axial::ORIGIN,
        }
    }
}

fn check_fill_ratio(ratio: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&ratio) {
        return Err(HexError::InvalidConfig(format!(
            "fill ratio must be within 0..=1 (got {})",
            ratio
        )));
    }
    Ok(())
}

/// Builder for creating WorldConfig with validation
///
/// # Example
///
/// ```rust
/// use hex_wrap_world::*;
///
/// // Use defaults
/// let config = WorldConfigBuilder::new().build().unwrap();
/// assert_eq!(config.radius, 12);
///
/// // Customize
/// let config = WorldConfigBuilder::new()
///     .seed(12345)
///     .radius(8)
///     .unwrap()
///     .fill_ratio(0.25)
///     .unwrap()
///     .start(Axial::new(2, -1))
///     .build()
///     .unwrap();
/// assert_eq!(config.start, Axial::new(2, -1));
/// ```
#[derive(Debug, Clone)]
pub struct WorldConfigBuilder {
    seed: Option<u64>,
    radius: u32,
    fill_ratio: f64,
    start: Axial,
}

impl WorldConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: Random (drawn when building)
    /// - radius: 12
    /// - fill_ratio: 0.4
    /// - start: origin
    pub fn new() -> Self {
        Self {
            seed: None,
            radius: DEFAULT_RADIUS,
            fill_ratio: DEFAULT_FILL_RATIO,
            start: Axial::ORIGIN,
        }
    }

    /// Set the random seed for the walk.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the region radius.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRadius` if radius is negative or above `Region::MAX_RADIUS`.
    pub fn radius(mut self, radius: i32) -> Result<Self> {
        let region = Region::new(radius)?;
        self.radius = region.radius();
        Ok(self)
    }

    /// Set the fraction of the region to open.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` unless `0.0 <= ratio <= 1.0`.
    pub fn fill_ratio(mut self, ratio: f64) -> Result<Self> {
        check_fill_ratio(ratio)?;
        self.fill_ratio = ratio;
        Ok(self)
    }

    /// Set the cell the walk starts from.
    pub fn start(mut self, start: Axial) -> Self {
        self.start = start;
        self
    }

    /// Build the configuration
    ///
    /// If no seed was provided, draws a random one.
    pub fn build(self) -> Result<WorldConfig> {
        let config = WorldConfig {
            seed: self.seed.unwrap_or_else(rand::random),
            radius: self.radius,
            fill_ratio: self.fill_ratio,
            start: self.start,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for WorldConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = WorldConfigBuilder::new().build().unwrap();
        assert_eq!(config.radius, DEFAULT_RADIUS);
        assert_eq!(config.fill_ratio, DEFAULT_FILL_RATIO);
        assert_eq!(config.start, Axial::ORIGIN);
    }

    #[test]
    fn test_builder_custom() {
        let config = WorldConfigBuilder::new()
            .seed(42)
            .radius(5)
            .unwrap()
            .fill_ratio(0.75)
            .unwrap()
            .start(Axial::new(1, 1))
            .build()
            .unwrap();

        assert_eq!(config.seed, 42);
        assert_eq!(config.radius, 5);
        assert_eq!(config.fill_ratio, 0.75);
        assert_eq!(config.start, Axial::new(1, 1));
    }

    #[test]
    fn test_builder_rejects_negative_radius() {
        let result = WorldConfigBuilder::new().radius(-1);
        assert_eq!(result.unwrap_err(), HexError::InvalidRadius(-1));
    }

    #[test]
    fn test_builder_rejects_bad_fill_ratio() {
        assert!(WorldConfigBuilder::new().fill_ratio(-0.1).is_err());
        assert!(WorldConfigBuilder::new().fill_ratio(1.5).is_err());
        assert!(WorldConfigBuilder::new().fill_ratio(f64::NAN).is_err());
        assert!(WorldConfigBuilder::new().fill_ratio(0.0).is_ok());
        assert!(WorldConfigBuilder::new().fill_ratio(1.0).is_ok());
    }

    #[test]
    fn test_step_budget() {
        let mut config = WorldConfigBuilder::new().seed(1).radius(0).unwrap().build().unwrap();
        assert_eq!(config.cell_count(), 1);
        assert_eq!(config.step_budget(), 0);

        config.radius = 3;
        assert_eq!(config.cell_count(), 37);
        assert_eq!(config.step_budget(), 14);

        config.fill_ratio = 1.0;
        assert_eq!(config.step_budget(), 37);
    }

    #[test]
    fn test_validate_hand_built() {
        let mut config = WorldConfig::default();
        assert!(config.validate().is_ok());

        config.fill_ratio = 2.0;
        assert!(config.validate().is_err());

        config.fill_ratio = 0.5;
        config.radius = u32::MAX;
        assert!(config.validate().is_err());
        assert_eq!(config.cell_count(), usize::MAX);
        assert!(config.step_budget() > 0);
    }

    #[test]
    fn test_region_matches_radius() {
        let config = WorldConfigBuilder::new().radius(7).unwrap().build().unwrap();
        let region = config.region().unwrap();
        assert_eq!(region.radius(), 7);
        assert_eq!(region.cell_count(), config.cell_count());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialization() {
        let config = WorldConfigBuilder::new()
            .seed(12345)
            .radius(6)
            .unwrap()
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let restored: WorldConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }
}
