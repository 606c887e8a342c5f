//! # Mine Controller
//!
//! Movement and dig resolution inside the mine.
//!
//! A move into an empty cell is free. A move into anything else is a dig:
//! 1. Check the gating tool and the funds, refusing without side effects
//! 2. Charge the fee
//! 3. Apply the tile's reward or hazard
//! 4. Roll for a cave-in centred on the dug cell
//! 5. Clear the cell, reveal it and move the player onto it
//!
//! After any move the camera follows the player.

use crate::utils::RandomSource;
use crate::{
    config, dig_fee, reward_for, scroll_camera, DigFee, Direction, Expense, GameEvent, MineField,
    Outcome, PlayerState, Position, Refusal, Reward, TileType,
};
use log::{debug, warn};

/// Drives the player through the mine field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MineController {
    /// Height of the camera window in rows
    pub visible_rows: i32,
}

impl MineController {
    /// Creates a controller for a camera window of the given height.
    pub fn new(visible_rows: i32) -> Self {
        Self { visible_rows }
    }

    /// Tries to move the player one cell in the given direction.
    ///
    /// Moving off the grid does nothing and succeeds with no events.
    ///
    /// # Examples
    ///
    /// ```
    /// use miner::{Direction, MineController, MineField, PlayerState, Position, TileType};
    /// use miner::utils::ScriptedRandom;
    ///
    /// let mut field = MineField::new(5, 5);
    /// field.set_tile(2, 1, TileType::Empty);
    /// let mut player = PlayerState::new(Position::new(2, 0));
    /// let mut rng = ScriptedRandom::new();
    ///
    /// let events = MineController::default()
    ///     .attempt_move(&mut field, &mut player, Direction::South, &mut rng)
    ///     .unwrap();
    /// assert_eq!(events.len(), 1);
    /// assert_eq!(player.position, Position::new(2, 1));
    /// assert_eq!(player.money, 1500);
    /// ```
    pub fn attempt_move<R: RandomSource + ?Sized>(
        &self,
        field: &mut MineField,
        player: &mut PlayerState,
        direction: Direction,
        rng: &mut R,
    ) -> Outcome {
        let target = player.position + direction.to_delta();
        if !field.contains(target) {
            return Ok(Vec::new());
        }

        let mut events = if field.tile_at(target).is_passable() {
            let from = player.position;
            player.position = target;
            vec![GameEvent::Moved { from, to: target }]
        } else {
            self.dig(field, player, target, rng)?
        };

        events.extend(self.follow(player));
        Ok(events)
    }

    /// Digs out the target cell and moves the player onto it.
    ///
    /// Refusals leave the field and the player exactly as they were.
    pub fn dig<R: RandomSource + ?Sized>(
        &self,
        field: &mut MineField,
        player: &mut PlayerState,
        target: Position,
        rng: &mut R,
    ) -> Outcome {
        let tile = field.tile_at(target);
        let fee = dig_fee(tile, player.equipment);
        if let DigFee::Gated { requires, .. } = fee {
            if !player.has_equipment(requires) {
                return Err(Refusal::MissingEquipment {
                    tool: requires,
                    tile,
                });
            }
        }
        let cost = fee.amount();
        if !player.spend_money(cost) {
            return Err(Refusal::InsufficientFunds {
                needed: cost,
                purpose: Expense::Dig(tile),
            });
        }
        debug!("Dug {} at {} for ${}", tile, target, cost);

        let mut events = vec![GameEvent::Dug {
            position: target,
            tile,
            cost,
        }];

        match reward_for(tile, rng) {
            Reward::Mineral { mineral, amount } => {
                player.add_mineral(mineral, amount);
                events.push(GameEvent::MineralCollected { mineral, amount });
            }
            Reward::RingFound => {
                player.has_ring = true;
                events.push(GameEvent::RingFound { position: target });
            }
            Reward::Spring { damage } => {
                let flooded = field.flood_area(target.x, target.y);
                let damage = player.take_damage(damage);
                warn!("Spring at {} flooded {} cells", target, flooded);
                events.push(GameEvent::SpringFlooded {
                    center: target,
                    flooded,
                    damage,
                });
            }
            Reward::Nothing => {}
        }

        if rng.roll(config::CAVE_IN_CHANCE) {
            let size = field.cave_in(target.x, target.y, rng);
            let damage = player.take_damage(config::CAVE_IN_DAMAGE);
            warn!("Cave-in of size {} at {}", size, target);
            events.push(GameEvent::CaveIn {
                center: target,
                size,
                damage,
            });
        }

        field.set_tile(target.x, target.y, TileType::Empty);
        field.reveal(target.x, target.y);
        player.position = target;
        Ok(events)
    }

    /// Scrolls the camera after a move, reporting the scroll if there was one.
    pub fn follow(&self, player: &mut PlayerState) -> Option<GameEvent> {
        let from = player.camera_y;
        let to = scroll_camera(from, player.position.y, self.visible_rows);
        if to == from {
            return None;
        }
        debug!("Camera scrolled from row {} to {}", from, to);
        player.camera_y = to;
        Some(GameEvent::CameraScrolled { from, to })
    }
}

impl Default for MineController {
    fn default() -> Self {
        Self::new(config::VISIBLE_ROWS)
    }
}
