//! # Game Session Module
//!
//! The session object that owns one game: the mine, the player, the random
//! source and the mode the game is in.
//!
//! All commands go through [`GameSession`]. Each one checks that it is
//! allowed in the current mode, runs the rule that implements it, then feeds
//! the resulting events to the statistics and the message log. Several
//! sessions can live side by side; nothing is global.

use crate::generation::{utils, GenerationConfig, Generator, VeinGenerator};
use crate::utils::RandomSource;
use crate::{
    buy_equipment, config, heal_player, sell_minerals, visit_saloon, Direction, Equipment,
    Expense, GameEvent, MineController, MineField, MessageLog, MinerResult, Minerals, Outcome,
    PlayerState, Position, Refusal, SaloonOption, TileType,
};
use log::info;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Where the game currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// On the surface, using the town services
    Town,
    /// Underground, moving and digging
    Mine,
    /// Won; only restart is accepted
    Victory,
    /// Lost; only restart is accepted
    GameOver,
}

impl GameMode {
    /// Whether the game has ended.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameMode::Victory | GameMode::GameOver)
    }
}

/// Running totals for the current game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatistics {
    /// Tiles paid for and cleared
    pub tiles_dug: u32,
    /// Mineral units added to the tally
    pub minerals_collected: u64,
    /// Cave-ins suffered
    pub cave_ins: u32,
    /// Springs hit
    pub springs_hit: u32,
    /// Total damage taken from any source
    pub damage_taken: u64,
    /// Dollars spent on digging, tools, fees and healing
    pub money_spent: i64,
    /// Dollars earned at the bank
    pub money_earned: i64,
    /// Paid trips down the elevator
    pub mine_trips: u32,
}

impl GameStatistics {
    /// Creates new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates statistics based on a game event.
    pub fn update_from_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Dug { cost, .. } => {
                self.tiles_dug += 1;
                self.money_spent += cost;
            }
            GameEvent::MineralCollected { amount, .. } => {
                self.minerals_collected += u64::from(*amount);
            }
            GameEvent::SpringFlooded { damage, .. } => {
                self.springs_hit += 1;
                self.damage_taken += u64::from(damage.unsigned_abs());
            }
            GameEvent::CaveIn { damage, .. } => {
                self.cave_ins += 1;
                self.damage_taken += u64::from(damage.unsigned_abs());
            }
            GameEvent::EnteredMine { fee } => {
                self.mine_trips += 1;
                self.money_spent += fee;
            }
            GameEvent::EquipmentPurchased { price, .. } => {
                self.money_spent += price;
            }
            GameEvent::Healed { cost, .. } => {
                self.money_spent += cost;
            }
            GameEvent::MineralsSold { total } => {
                self.money_earned += total;
            }
            GameEvent::SaloonNight { health_change } if *health_change < 0 => {
                self.damage_taken += u64::from(health_change.unsigned_abs());
            }
            _ => {}
        }
    }
}

/// Whether the player has won: the ring plus enough money.
pub fn is_victory(player: &PlayerState) -> bool {
    player.has_ring && player.money >= config::WIN_MONEY
}

/// Whether the player has lost: dead or too far in debt.
pub fn is_defeat(player: &PlayerState) -> bool {
    player.health <= 0 || player.money < config::LOSE_MONEY_THRESHOLD
}

/// Read-only view of the session for display and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub mode: GameMode,
    pub money: i64,
    pub health: i32,
    pub max_health: i32,
    pub minerals: Minerals,
    pub equipment: Vec<Equipment>,
    pub has_ring: bool,
    pub position: Position,
    pub camera_y: i32,
}

/// One game in progress.
///
/// # Examples
///
/// ```
/// use miner::{Direction, GameMode, GameSession};
///
/// let mut session = GameSession::new(42).unwrap();
/// assert_eq!(session.mode(), GameMode::Mine);
///
/// session.leave_mine().unwrap();
/// assert_eq!(session.mode(), GameMode::Town);
/// assert!(session.attempt_move(Direction::South).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct GameSession<R: RandomSource = StdRng> {
    /// The mine grid
    pub mine: MineField,
    /// The player
    pub player: PlayerState,
    /// Totals for the current game
    pub statistics: GameStatistics,
    /// Recent messages for display
    pub messages: MessageLog,
    mode: GameMode,
    rng: R,
    generation: GenerationConfig,
    controller: MineController,
}

impl GameSession<StdRng> {
    /// Starts a classic game from a seed.
    pub fn new(seed: u64) -> MinerResult<Self> {
        Self::with_rng(utils::create_rng(seed), GenerationConfig::classic())
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Starts a game with the given random source and mine layout.
    ///
    /// The player starts in the mine, at the surface row in the middle
    /// column.
    pub fn with_rng(mut rng: R, generation: GenerationConfig) -> MinerResult<Self> {
        let generator = VeinGenerator::new();
        let mine = generator.generate(&generation, &mut rng)?;
        info!(
            "New session via {} ({}x{})",
            generator.generator_type(),
            mine.width,
            mine.height
        );
        let player = PlayerState::new(Self::surface_start(&mine));
        Ok(Self {
            mine,
            player,
            statistics: GameStatistics::new(),
            messages: MessageLog::default(),
            mode: GameMode::Mine,
            rng,
            generation,
            controller: MineController::default(),
        })
    }

    fn surface_start(mine: &MineField) -> Position {
        Position::new(mine.width as i32 / 2, 0)
    }

    /// Current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The layout used for this game and every restart.
    pub fn generation_config(&self) -> &GenerationConfig {
        &self.generation
    }

    /// Height of the camera window in rows.
    pub fn visible_height(&self) -> i32 {
        self.controller.visible_rows
    }

    /// Checks the mode a command needs.
    fn require(&self, wanted: GameMode) -> Result<(), Refusal> {
        if self.mode.is_terminal() {
            Err(Refusal::GameOver)
        } else if self.mode == wanted {
            Ok(())
        } else if wanted == GameMode::Mine {
            Err(Refusal::NotInMine)
        } else {
            Err(Refusal::NotInTown)
        }
    }

    /// Records an outcome in the statistics and the message log.
    fn finish(&mut self, outcome: Outcome) -> Outcome {
        if let Ok(events) = &outcome {
            for event in events {
                self.statistics.update_from_event(event);
            }
        }
        self.messages.record(&outcome);
        outcome
    }

    /// Ends the game if it is won or lost. Only applies in town.
    fn evaluate(&mut self) -> Option<GameEvent> {
        if self.mode != GameMode::Town {
            return None;
        }
        if is_victory(&self.player) {
            self.mode = GameMode::Victory;
            info!("Game won with ${}", self.player.money);
            Some(GameEvent::GameWon {
                money: self.player.money,
            })
        } else if is_defeat(&self.player) {
            self.mode = GameMode::GameOver;
            let reason = if self.player.health <= 0 {
                "you ran out of health".to_string()
            } else {
                format!("you owe ${}", -self.player.money)
            };
            info!("Game lost: {}", reason);
            Some(GameEvent::GameLost { reason })
        } else {
            None
        }
    }

    /// Runs a town service and then checks for the end of the game.
    fn town_command(
        &mut self,
        command: impl FnOnce(&mut PlayerState, &mut R) -> Outcome,
    ) -> Outcome {
        let outcome = self.require(GameMode::Town).and_then(|_| {
            let mut events = command(&mut self.player, &mut self.rng)?;
            events.extend(self.evaluate());
            Ok(events)
        });
        self.finish(outcome)
    }

    /// Moves or digs one cell in the given direction.
    pub fn attempt_move(&mut self, direction: Direction) -> Outcome {
        let outcome = self.require(GameMode::Mine).and_then(|_| {
            self.controller
                .attempt_move(&mut self.mine, &mut self.player, direction, &mut self.rng)
        });
        self.finish(outcome)
    }

    /// Pays the entry fee and goes down to the surface row of the mine.
    pub fn enter_mine(&mut self) -> Outcome {
        let outcome = self.require(GameMode::Town).and_then(|_| {
            let fee = config::MINE_ENTRY_FEE;
            if !self.player.spend_money(fee) {
                return Err(Refusal::InsufficientFunds {
                    needed: fee,
                    purpose: Expense::MineEntry,
                });
            }
            self.mode = GameMode::Mine;
            self.player.position = Self::surface_start(&self.mine);
            self.player.camera_y = 0;
            info!("Entered the mine");
            Ok(vec![GameEvent::EnteredMine { fee }])
        });
        self.finish(outcome)
    }

    /// Rides the elevator: up to the surface row, or back to town from it.
    pub fn use_elevator(&mut self) -> Outcome {
        if self.mode == GameMode::Mine && self.player.position.y == 0 {
            return self.leave_mine();
        }
        let outcome = self.require(GameMode::Mine).map(|_| {
            let from = self.player.position;
            let to = Position::new(from.x, 0);
            self.player.position = to;
            self.player.camera_y = 0;
            vec![GameEvent::ElevatorRide { from, to }]
        });
        self.finish(outcome)
    }

    /// Returns to town from anywhere in the mine.
    pub fn leave_mine(&mut self) -> Outcome {
        let outcome = self.require(GameMode::Mine).map(|_| {
            self.mode = GameMode::Town;
            info!("Returned to town");
            let mut events = vec![GameEvent::ReturnedToTown];
            events.extend(self.evaluate());
            events
        });
        self.finish(outcome)
    }

    /// Buys a tool at the store.
    pub fn buy_equipment(&mut self, item: Equipment) -> Outcome {
        self.town_command(|player, _| buy_equipment(player, item))
    }

    /// Sells every collected mineral at the bank.
    pub fn sell_minerals(&mut self) -> Outcome {
        self.town_command(|player, rng| sell_minerals(player, rng))
    }

    /// Heals to full at the hospital.
    pub fn heal_player(&mut self) -> Outcome {
        self.town_command(|player, _| heal_player(player))
    }

    /// Spends time at the saloon.
    pub fn visit_saloon(&mut self, option: SaloonOption) -> Outcome {
        self.town_command(|player, _| visit_saloon(player, option))
    }

    /// Starts over: a new mine, a new player, back at the surface.
    ///
    /// Allowed in every mode, including after the game has ended.
    pub fn restart(&mut self) -> Outcome {
        self.mine.generate(&self.generation, &mut self.rng);
        self.player = PlayerState::new(Self::surface_start(&self.mine));
        self.mode = GameMode::Mine;
        self.statistics = GameStatistics::new();
        self.messages.clear();
        info!("Game restarted");
        self.finish(Ok(vec![GameEvent::Restarted]))
    }

    /// What the renderer should draw at a cell.
    ///
    /// Empty cells always show as empty. Other cells show their true type
    /// once revealed, or always with a lantern; otherwise they look like
    /// dirt.
    pub fn visible_tile(&self, x: i32, y: i32) -> TileType {
        let tile = self.mine.get_tile(x, y);
        if tile == TileType::Empty
            || self.mine.is_revealed(x, y)
            || self.player.has_equipment(Equipment::Lantern)
        {
            tile
        } else {
            TileType::Dirt
        }
    }

    /// Rows inside the camera window, clipped to the mine.
    pub fn visible_rows(&self) -> Range<i32> {
        let top = self.player.camera_y;
        let bottom = (top + self.controller.visible_rows + 1).min(self.mine.height as i32);
        top..bottom.max(top)
    }

    pub fn is_victory(&self) -> bool {
        self.mode == GameMode::Victory
    }

    pub fn is_defeat(&self) -> bool {
        self.mode == GameMode::GameOver
    }

    /// Snapshot of the player-facing state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode,
            money: self.player.money,
            health: self.player.health,
            max_health: self.player.max_health,
            minerals: self.player.minerals,
            equipment: self.player.equipment.iter().collect(),
            has_ring: self.player.has_ring,
            position: self.player.position,
            camera_y: self.player.camera_y,
        }
    }
}
