//! # Mine Field
//!
//! The excavation grid: one tile type and one reveal flag per cell.
//!
//! Coordinates outside the grid never fail. Reads return dirt (or "not
//! revealed") and writes are silently dropped, so callers may probe
//! neighbourhoods near the edges without bounds checks of their own.

use crate::generation::{GenerationConfig, VeinGenerator};
use crate::utils::RandomSource;
use crate::{Position, TileType};
use serde::{Deserialize, Serialize};

/// The mine grid, indexed `[row][col]` with row 0 at the surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineField {
    /// Width in tiles
    pub width: usize,
    /// Height in tiles
    pub height: usize,
    tiles: Vec<Vec<TileType>>,
    revealed: Vec<Vec<bool>>,
    ring_position: Option<Position>,
}

impl MineField {
    /// Creates a field of solid, unrevealed dirt.
    ///
    /// # Examples
    ///
    /// ```
    /// use miner::{MineField, TileType};
    ///
    /// let field = MineField::new(10, 20);
    /// assert_eq!(field.get_tile(3, 4), TileType::Dirt);
    /// assert!(!field.is_revealed(3, 4));
    /// ```
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![vec![TileType::Dirt; width]; height],
            revealed: vec![vec![false; width]; height],
            ring_position: None,
        }
    }

    /// Replaces the whole field with a freshly generated mine.
    ///
    /// The grid is resized to the configured dimensions, reset to
    /// unrevealed dirt, then veins and the ring are stamped in.
    pub fn generate<R: RandomSource + ?Sized>(&mut self, config: &GenerationConfig, rng: &mut R) {
        *self = Self::new(config.width, config.height);
        VeinGenerator::new().populate(self, config, rng);
    }

    /// Converts coordinates to grid indices if they are inside the field.
    fn index(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let col = usize::try_from(x).ok()?;
        let row = usize::try_from(y).ok()?;
        (col < self.width && row < self.height).then_some((row, col))
    }

    /// Whether the coordinates are inside the field.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Whether the position is inside the field.
    pub fn contains(&self, pos: Position) -> bool {
        self.in_bounds(pos.x, pos.y)
    }

    /// Tile at the coordinates, or dirt outside the field.
    pub fn get_tile(&self, x: i32, y: i32) -> TileType {
        self.index(x, y)
            .map_or(TileType::Dirt, |(row, col)| self.tiles[row][col])
    }

    /// Tile at a position, or dirt outside the field.
    pub fn tile_at(&self, pos: Position) -> TileType {
        self.get_tile(pos.x, pos.y)
    }

    /// Sets the tile at the coordinates. Outside the field this does nothing.
    pub fn set_tile(&mut self, x: i32, y: i32, tile: TileType) {
        if let Some((row, col)) = self.index(x, y) {
            let previous = std::mem::replace(&mut self.tiles[row][col], tile);
            let pos = Position::new(x, y);
            if tile == TileType::Ring {
                self.ring_position = Some(pos);
            } else if previous == TileType::Ring && self.ring_position == Some(pos) {
                self.ring_position = None;
            }
        }
    }

    /// Marks the cell as revealed. Outside the field this does nothing.
    pub fn reveal(&mut self, x: i32, y: i32) {
        if let Some((row, col)) = self.index(x, y) {
            self.revealed[row][col] = true;
        }
    }

    /// Whether the cell has been revealed; false outside the field.
    pub fn is_revealed(&self, x: i32, y: i32) -> bool {
        self.index(x, y)
            .is_some_and(|(row, col)| self.revealed[row][col])
    }

    /// Where the ring was last placed, if it is still in the ground.
    pub fn ring_position(&self) -> Option<Position> {
        self.ring_position
    }

    /// Turns every empty cell in the 3x3 square around the centre into water.
    ///
    /// Returns the number of cells flooded.
    pub fn flood_area(&mut self, x: i32, y: i32) -> usize {
        let mut flooded = 0;
        for pos in Position::new(x, y).neighborhood(1) {
            if self.contains(pos) && self.tile_at(pos) == TileType::Empty {
                self.set_tile(pos.x, pos.y, TileType::Water);
                flooded += 1;
            }
        }
        flooded
    }

    /// Collapses a random 3x3 or 5x5 square around the centre back to dirt.
    ///
    /// Returns the side length chosen.
    pub fn cave_in<R: RandomSource + ?Sized>(&mut self, x: i32, y: i32, rng: &mut R) -> i32 {
        let side = if rng.pick(0, 1) == 0 { 3 } else { 5 };
        self.collapse_square(x, y, side);
        side
    }

    /// Resets every in-bounds cell of the square of the given side to dirt.
    pub fn collapse_square(&mut self, x: i32, y: i32, side: i32) {
        let half = side / 2;
        for pos in Position::new(x, y).neighborhood(half) {
            self.set_tile(pos.x, pos.y, TileType::Dirt);
        }
    }

    /// Counts the cells holding the given tile type.
    pub fn count(&self, tile: TileType) -> usize {
        self.tiles
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == tile)
            .count()
    }

    /// Counts revealed cells.
    pub fn revealed_count(&self) -> usize {
        self.revealed
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&seen| seen)
            .count()
    }

    /// Iterates over every cell as `(position, tile)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Position, TileType)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .map(move |(col, &tile)| (Position::new(col as i32, row as i32), tile))
        })
    }
}

impl Default for MineField {
    fn default() -> Self {
        Self::new(crate::config::GRID_WIDTH, crate::config::GRID_HEIGHT)
    }
}
