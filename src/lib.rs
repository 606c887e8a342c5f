//! # Miner
//!
//! A single-player mining simulation. The player descends into a procedurally
//! generated grid of tiles, pays to excavate them, collects minerals, and
//! returns to town to sell them, buy tools and heal.
//!
//! ## Architecture Overview
//!
//! - **Tile catalog**: static per-tile metadata (cost, value, colour)
//! - **Mine field**: the grid, its reveal state and destructive effects
//! - **Economy**: pure rules for dig fees, rewards and market prices
//! - **Player state**: money, health, minerals, equipment and camera
//! - **Mine controller**: movement, dig resolution, hazards and camera follow
//! - **Game session**: the context object that owns all of the above and
//!   exposes the command and query surface to a presentation layer
//!
//! Every command returns an [`Outcome`]: either the list of [`GameEvent`]s it
//! produced or a typed [`Refusal`] explaining why nothing happened.

pub mod game;
pub mod generation;
pub mod input;
pub mod utils;

pub use game::*;
pub use generation::*;
pub use input::*;
pub use utils::*;

/// Core error type for the miner engine.
///
/// Business-rule refusals are not errors; they travel as [`Refusal`] values.
/// This type covers everything around them: I/O in the terminal driver,
/// serialization, and invalid configuration.
#[derive(thiserror::Error, Debug)]
pub enum MinerError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Generation configuration cannot produce a valid mine
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// A command was refused by the game rules
    #[error("Refused: {0}")]
    Refused(#[from] Refusal),
}

/// Result type used throughout the miner codebase.
pub type MinerResult<T> = Result<T, MinerError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants, fixed at build time.
pub mod config {
    /// Mine width in tiles
    pub const GRID_WIDTH: usize = 39;

    /// Mine depth in tiles
    pub const GRID_HEIGHT: usize = 114;

    /// Tile edge length in pixels
    pub const TILE_SIZE: i32 = 16;

    /// Screen width in pixels
    pub const SCREEN_WIDTH: i32 = 640;

    /// Screen height in pixels
    pub const SCREEN_HEIGHT: i32 = 480;

    /// Number of grid rows visible in the camera window
    pub const VISIBLE_ROWS: i32 = SCREEN_HEIGHT / TILE_SIZE;

    /// Rows kept between the player and the edge of the camera window
    pub const CAMERA_MARGIN: i32 = 3;

    /// Money a new player starts with
    pub const STARTING_MONEY: i64 = 1500;

    /// Starting and maximum player health
    pub const MAX_HEALTH: i32 = 100;

    /// Fee charged for taking the elevator down into the mine
    pub const MINE_ENTRY_FEE: i64 = 30;

    /// Hospital price per missing hit point
    pub const HEAL_COST_PER_HP: i64 = 2;

    /// Money required to be let into the saloon
    pub const SALOON_ENTRY_THRESHOLD: i64 = 5000;

    /// Money required to watch the saloon show
    pub const SALOON_SHOW_THRESHOLD: i64 = 10_000;

    /// Hit points restored by the saloon show
    pub const SALOON_SHOW_HEAL: i32 = 2;

    /// Hit points restored by a good night at the saloon
    pub const SALOON_NIGHT_HEAL: i32 = 10;

    /// Damage taken from a bad night at the saloon
    pub const SALOON_NIGHT_DAMAGE: i32 = 20;

    /// Fixed fee for digging through granite or pumping out water
    pub const GATED_DIG_FEE: i64 = 150;

    /// Probability that any successful dig triggers a cave-in
    pub const CAVE_IN_CHANCE: f64 = 0.05;

    /// Damage dealt by a cave-in
    pub const CAVE_IN_DAMAGE: i32 = 30;

    /// Damage dealt by hitting a spring
    pub const SPRING_DAMAGE: i32 = 20;

    /// Money needed, together with the ring, to win
    pub const WIN_MONEY: i64 = 20_000;

    /// The player loses once money drops below this value
    pub const LOSE_MONEY_THRESHOLD: i64 = -100;

    /// Depth of the band at the bottom of the mine where the ring is buried
    pub const RING_DEPTH_BAND: usize = 64;

    /// Number of messages kept for display
    pub const MESSAGE_LOG_CAPACITY: usize = 10;
}
