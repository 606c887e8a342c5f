//! # Generation Module
//!
//! Procedural mine generation: mineral and obstacle veins plus the buried
//! ring.
//!
//! Generation is driven by a [`GenerationConfig`] and an injected
//! [`RandomSource`], so a given seed always produces the same mine.

pub mod veins;

pub use veins::*;

use crate::utils::RandomSource;
use crate::{config, MinerError, MinerResult, TileType};
use serde::{Deserialize, Serialize};

/// One row of the vein table: what to stamp, how often, and how long.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VeinSpec {
    /// Tile type the vein is made of
    pub tile: TileType,
    /// Number of spawn attempts
    pub count: u32,
    /// Minimum vein length in tiles
    pub min_length: u32,
    /// Maximum vein length in tiles
    pub max_length: u32,
    /// Spawn weight on a 0 to 10 scale; each attempt succeeds with weight/10
    pub weight: f64,
}

impl VeinSpec {
    /// Creates a vein specification.
    pub const fn new(tile: TileType, count: u32, min_length: u32, max_length: u32, weight: f64) -> Self {
        Self {
            tile,
            count,
            min_length,
            max_length,
            weight,
        }
    }

    /// Probability that a single spawn attempt produces a vein.
    pub fn spawn_chance(&self) -> f64 {
        (self.weight / 10.0).clamp(0.0, 1.0)
    }
}

/// The vein table of the classic mine, applied in order.
pub const CLASSIC_VEINS: [VeinSpec; 11] = [
    VeinSpec::new(TileType::Silver, 15, 1, 6, 10.0),
    VeinSpec::new(TileType::Gold, 12, 1, 5, 8.0),
    VeinSpec::new(TileType::Platinum, 8, 1, 4, 1.0),
    VeinSpec::new(TileType::Diamond, 5, 1, 3, 0.1),
    VeinSpec::new(TileType::Granite, 10, 2, 8, 5.0),
    VeinSpec::new(TileType::Water, 8, 1, 4, 3.0),
    VeinSpec::new(TileType::Spring, 6, 1, 3, 2.0),
    VeinSpec::new(TileType::Sandstone, 12, 1, 5, 10.0),
    VeinSpec::new(TileType::Volcanic, 8, 1, 4, 5.0),
    VeinSpec::new(TileType::Clover, 4, 1, 2, 0.5),
    VeinSpec::new(TileType::Pump, 3, 1, 2, 0.5),
];

/// Configuration for procedural generation.
///
/// Controls the grid dimensions, the vein table and how deep the ring is
/// buried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Grid width in tiles
    pub width: usize,
    /// Grid height in tiles
    pub height: usize,
    /// Vein table, stamped in order; later veins overwrite earlier ones
    pub veins: Vec<VeinSpec>,
    /// The ring is placed in the bottom `ring_depth` rows
    pub ring_depth: usize,
}

impl GenerationConfig {
    /// The standard 39x114 mine with the classic vein table.
    ///
    /// # Examples
    ///
    /// ```
    /// use miner::GenerationConfig;
    ///
    /// let config = GenerationConfig::classic();
    /// assert_eq!((config.width, config.height), (39, 114));
    /// assert_eq!(config.veins.len(), 11);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn classic() -> Self {
        Self {
            width: config::GRID_WIDTH,
            height: config::GRID_HEIGHT,
            veins: CLASSIC_VEINS.to_vec(),
            ring_depth: config::RING_DEPTH_BAND,
        }
    }

    /// A small field with the classic vein table, for tests.
    ///
    /// The ring band covers the lower half of the field.
    pub fn for_testing(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            veins: CLASSIC_VEINS.to_vec(),
            ring_depth: (height / 2).max(1),
        }
    }

    /// A field of plain dirt apart from the ring.
    pub fn without_veins(width: usize, height: usize) -> Self {
        Self {
            veins: Vec::new(),
            ..Self::for_testing(width, height)
        }
    }

    /// First row of the band the ring is placed in.
    pub fn ring_min_row(&self) -> usize {
        self.height.saturating_sub(self.ring_depth)
    }

    /// Checks that the configuration can produce a valid mine.
    pub fn validate(&self) -> MinerResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MinerError::GenerationFailed(format!(
                "grid must not be empty, got {}x{}",
                self.width, self.height
            )));
        }
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(MinerError::GenerationFailed(
                "grid dimensions exceed coordinate range".to_string(),
            ));
        }
        if self.ring_depth == 0 || self.ring_depth > self.height {
            return Err(MinerError::GenerationFailed(format!(
                "ring depth {} must be within 1..={}",
                self.ring_depth, self.height
            )));
        }
        for vein in &self.veins {
            if vein.min_length > vein.max_length {
                return Err(MinerError::GenerationFailed(format!(
                    "{} vein length range {}..={} is empty",
                    vein.tile, vein.min_length, vein.max_length
                )));
            }
            if !(0.0..=10.0).contains(&vein.weight) {
                return Err(MinerError::GenerationFailed(format!(
                    "{} vein weight {} is outside 0..=10",
                    vein.tile, vein.weight
                )));
            }
            if vein.tile == TileType::Ring {
                return Err(MinerError::GenerationFailed(
                    "the ring cannot be stamped as a vein".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Trait for procedural generators.
///
/// Generators build content from a configuration and a random source and
/// can check that content against the configuration afterwards.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random source.
    fn generate<R: RandomSource + ?Sized>(
        &self,
        config: &GenerationConfig,
        rng: &mut R,
    ) -> MinerResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> MinerResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation.
pub mod utils {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Creates a seeded random number generator.
    pub fn create_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }
}
