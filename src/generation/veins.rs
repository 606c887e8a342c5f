//! # Vein Generation
//!
//! Stamps straight veins of minerals and obstacles into a dirt field, then
//! buries the ring somewhere in the bottom band.
//!
//! For each vein spec, each spawn attempt:
//! 1. Rolls against the spec's spawn chance and skips on failure
//! 2. Picks an origin cell, a length and a direction
//! 3. Overwrites every in-bounds cell along that ray
//!
//! Veins never check for collisions; later veins overwrite earlier ones.

use crate::generation::{GenerationConfig, Generator, VeinSpec};
use crate::utils::RandomSource;
use crate::{MineField, MinerError, MinerResult, Position, TileType};
use log::{debug, info};

/// The three directions a vein can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VeinDirection {
    /// x increases
    Horizontal,
    /// y increases
    Vertical,
    /// x and y both increase
    Diagonal,
}

impl VeinDirection {
    /// Maps a pick in `0..=2` to a direction.
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => VeinDirection::Horizontal,
            1 => VeinDirection::Vertical,
            _ => VeinDirection::Diagonal,
        }
    }

    /// Step taken between consecutive vein cells.
    pub fn step(self) -> Position {
        match self {
            VeinDirection::Horizontal => Position::new(1, 0),
            VeinDirection::Vertical => Position::new(0, 1),
            VeinDirection::Diagonal => Position::new(1, 1),
        }
    }
}

/// A single vein that was stamped into the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vein {
    /// Tile written along the ray
    pub tile: TileType,
    /// First cell of the ray
    pub origin: Position,
    /// Number of cells, off-grid ones included
    pub length: i32,
    /// Direction the ray runs in
    pub direction: VeinDirection,
}

impl Vein {
    /// Cells covered by the vein, including any that fall off the grid.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let step = self.direction.step();
        (0..self.length).map(move |i| Position::new(self.origin.x + step.x * i, self.origin.y + step.y * i))
    }
}

/// Vein-and-ring mine generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct VeinGenerator;

impl VeinGenerator {
    /// Creates a new generator.
    pub fn new() -> Self {
        Self
    }

    /// Stamps all veins and the ring into an existing field.
    ///
    /// The field is expected to be fresh dirt of the configured size.
    pub fn populate<R: RandomSource + ?Sized>(
        &self,
        field: &mut MineField,
        config: &GenerationConfig,
        rng: &mut R,
    ) {
        let mut stamped = 0usize;
        for spec in &config.veins {
            for _ in 0..spec.count {
                if let Some(vein) = self.create_vein(field, spec, rng) {
                    debug!(
                        "Stamped {} vein at {} length {} {:?}",
                        vein.tile, vein.origin, vein.length, vein.direction
                    );
                    stamped += 1;
                }
            }
        }

        let ring = self.place_ring(field, config, rng);
        info!(
            "Generated {}x{} mine with {} veins, ring at {:?}",
            field.width, field.height, stamped, ring
        );
    }

    /// Makes one spawn attempt for a vein spec.
    ///
    /// Returns the vein if the spawn roll succeeded.
    pub fn create_vein<R: RandomSource + ?Sized>(
        &self,
        field: &mut MineField,
        spec: &VeinSpec,
        rng: &mut R,
    ) -> Option<Vein> {
        if !rng.roll(spec.spawn_chance()) {
            return None;
        }

        let x = rng.pick(0, field.width as i32 - 1);
        let y = rng.pick(0, field.height as i32 - 1);
        let length = rng.pick(spec.min_length as i32, spec.max_length as i32);
        let direction = VeinDirection::from_index(rng.pick(0, 2));

        let vein = Vein {
            tile: spec.tile,
            origin: Position::new(x, y),
            length,
            direction,
        };
        for pos in vein.cells() {
            field.set_tile(pos.x, pos.y, vein.tile);
        }
        Some(vein)
    }

    /// Buries the ring at a random column within the bottom band.
    pub fn place_ring<R: RandomSource + ?Sized>(
        &self,
        field: &mut MineField,
        config: &GenerationConfig,
        rng: &mut R,
    ) -> Option<Position> {
        if field.width == 0 || field.height == 0 {
            return None;
        }
        let min_row = field.height.saturating_sub(config.ring_depth.max(1)) as i32;
        let x = rng.pick(0, field.width as i32 - 1);
        let y = rng.pick(min_row, field.height as i32 - 1);
        field.set_tile(x, y, TileType::Ring);
        Some(Position::new(x, y))
    }
}

impl Generator<MineField> for VeinGenerator {
    fn generate<R: RandomSource + ?Sized>(
        &self,
        config: &GenerationConfig,
        rng: &mut R,
    ) -> MinerResult<MineField> {
        config.validate()?;
        let mut field = MineField::new(config.width, config.height);
        self.populate(&mut field, config, rng);
        self.validate(&field, config)?;
        Ok(field)
    }

    fn validate(&self, field: &MineField, config: &GenerationConfig) -> MinerResult<()> {
        let rings: Vec<Position> = field
            .cells()
            .filter(|(_, tile)| *tile == TileType::Ring)
            .map(|(pos, _)| pos)
            .collect();

        match rings.as_slice() {
            [ring] if ring.y as usize >= config.ring_min_row() => Ok(()),
            [ring] => Err(MinerError::GenerationFailed(format!(
                "ring at {} is above row {}",
                ring,
                config.ring_min_row()
            ))),
            _ => Err(MinerError::GenerationFailed(format!(
                "expected exactly one ring, found {}",
                rings.len()
            ))),
        }
    }

    fn generator_type(&self) -> &'static str {
        "VeinGenerator"
    }
}
