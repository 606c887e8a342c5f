//! # Game Events
//!
//! What commands report back to the presentation layer.
//!
//! A successful command yields the [`GameEvent`]s it caused, in order. A
//! refused command yields a [`Refusal`] and leaves the game untouched.

use crate::{config, Equipment, Mineral, Position, TileType};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Something that happened as the result of a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// The player walked into an already empty cell
    Moved { from: Position, to: Position },
    /// The player paid to dig out a tile and moved onto it
    Dug {
        position: Position,
        tile: TileType,
        cost: i64,
    },
    /// Minerals were added to the tally
    MineralCollected { mineral: Mineral, amount: u32 },
    /// The ring was dug up
    RingFound { position: Position },
    /// A spring flooded the surrounding cells
    SpringFlooded {
        center: Position,
        flooded: usize,
        damage: i32,
    },
    /// The ground collapsed around a dig
    CaveIn {
        center: Position,
        size: i32,
        damage: i32,
    },
    /// The camera window scrolled
    CameraScrolled { from: i32, to: i32 },
    /// The player paid the entry fee and went down
    EnteredMine { fee: i64 },
    /// The player is back in town
    ReturnedToTown,
    /// The elevator lifted the player to the surface row
    ElevatorRide { from: Position, to: Position },
    /// A tool was bought
    EquipmentPurchased { item: Equipment, price: i64 },
    /// The tally was sold at the bank
    MineralsSold { total: i64 },
    /// The hospital healed the player
    Healed { amount: i32, cost: i64 },
    /// The saloon show was watched
    SaloonShow { healed: i32 },
    /// A night at the saloon; positive change heals, negative hurts
    SaloonNight { health_change: i32 },
    /// The player has the ring and enough money
    GameWon { money: i64 },
    /// The player died or went broke
    GameLost { reason: String },
    /// A new game was started
    Restarted,
}

impl GameEvent {
    /// Human-readable message for the event.
    pub fn message(&self) -> String {
        match self {
            GameEvent::Moved { to, .. } => format!("You move to {}.", to),
            GameEvent::Dug { tile, cost, .. } => format!("You dig through {} for ${}.", tile, cost),
            GameEvent::MineralCollected { mineral, amount } => {
                format!("You found {} {}!", amount, mineral)
            }
            GameEvent::RingFound { .. } => "You found the ring!".to_string(),
            GameEvent::SpringFlooded { damage, .. } => {
                format!("You hit a spring! Water floods in. (-{} HP)", damage)
            }
            GameEvent::CaveIn { damage, .. } => format!("Cave-in! (-{} HP)", damage),
            GameEvent::CameraScrolled { to, .. } => format!("View now starts at row {}.", to),
            GameEvent::EnteredMine { fee } => format!("You enter the mine (${} elevator fee).", fee),
            GameEvent::ReturnedToTown => "You return to town.".to_string(),
            GameEvent::ElevatorRide { .. } => "You take the elevator up.".to_string(),
            GameEvent::EquipmentPurchased { item, price } => {
                format!("You bought a {} for ${}.", item, price)
            }
            GameEvent::MineralsSold { total } => format!("You sold your minerals for ${}.", total),
            GameEvent::Healed { amount, cost } => {
                format!("The doctor heals {} HP for ${}.", amount, cost)
            }
            GameEvent::SaloonShow { healed } => {
                format!("You enjoy the show and feel better. (+{} HP)", healed)
            }
            GameEvent::SaloonNight { health_change } if *health_change >= 0 => format!(
                "Your shovel keeps you out of trouble. (+{} HP)",
                health_change
            ),
            GameEvent::SaloonNight { health_change } => {
                format!("You get into a fight! (-{} HP)", -health_change)
            }
            GameEvent::GameWon { money } => {
                format!("You win! You have the ring and ${}.", money)
            }
            GameEvent::GameLost { reason } => format!("Game over: {}.", reason),
            GameEvent::Restarted => "A new game begins.".to_string(),
        }
    }
}

/// What a refused payment was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expense {
    Dig(TileType),
    Equipment(Equipment),
    MineEntry,
    Healing,
}

impl std::fmt::Display for Expense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expense::Dig(tile) => write!(f, "dig through {}", tile),
            Expense::Equipment(item) => write!(f, "buy a {}", item),
            Expense::MineEntry => f.write_str("ride the elevator down"),
            Expense::Healing => f.write_str("pay the doctor"),
        }
    }
}

/// Why a command was refused. Refusals never change game state.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Refusal {
    #[error("You need ${needed} to {purpose}")]
    InsufficientFunds { needed: i64, purpose: Expense },

    #[error("You need a {tool} to dig through {tile}")]
    MissingEquipment { tool: Equipment, tile: TileType },

    #[error("You already own a {0}")]
    AlreadyOwned(Equipment),

    #[error("Your health is already at maximum")]
    InvalidHealTarget,

    #[error("You have no minerals to sell")]
    NothingToSell,

    #[error("The saloon wants to see ${needed} before letting you in")]
    SaloonTooPoor { needed: i64 },

    #[error("You must be in the mine to do that")]
    NotInMine,

    #[error("You must be in town to do that")]
    NotInTown,

    #[error("The game is over; restart to play again")]
    GameOver,
}

/// Result of every game command.
pub type Outcome = Result<Vec<GameEvent>, Refusal>;

/// The most recent messages, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageLog {
    messages: VecDeque<String>,
    capacity: usize,
}

impl MessageLog {
    /// Creates a log holding up to `capacity` messages.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            messages: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a message, dropping the oldest once full.
    pub fn add_message(&mut self, message: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        while self.messages.len() >= self.capacity {
            self.messages.pop_front();
        }
        self.messages.push_back(message.into());
    }

    /// Records the message of every event, or the reason of a refusal.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Ok(events) => {
                for event in events {
                    self.add_message(event.message());
                }
            }
            Err(refusal) => self.add_message(refusal.to_string()),
        }
    }

    /// Messages in order, oldest first.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    /// The newest message.
    pub fn latest(&self) -> Option<&str> {
        self.messages.back().map(String::as_str)
    }

    /// Number of messages kept.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drops every message.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::with_capacity(config::MESSAGE_LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refusal_messages() {
        let refusal = Refusal::InsufficientFunds {
            needed: 150,
            purpose: Expense::Dig(TileType::Granite),
        };
        assert_eq!(refusal.to_string(), "You need $150 to dig through granite");

        let refusal = Refusal::MissingEquipment {
            tool: Equipment::Bucket,
            tile: TileType::Water,
        };
        assert_eq!(refusal.to_string(), "You need a bucket to dig through water");
        assert_eq!(
            Refusal::AlreadyOwned(Equipment::Drill).to_string(),
            "You already own a drill"
        );
    }

    #[test]
    fn test_log_keeps_latest_messages() {
        let mut log = MessageLog::default();
        for i in 0..15 {
            log.add_message(format!("message {}", i));
        }
        assert_eq!(log.len(), 10);
        assert_eq!(log.messages().next(), Some("message 5"));
        assert_eq!(log.latest(), Some("message 14"));

        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.latest(), None);
    }

    #[test]
    fn test_log_records_outcomes() {
        let mut log = MessageLog::with_capacity(3);
        log.record(&Ok(vec![
            GameEvent::ReturnedToTown,
            GameEvent::MineralsSold { total: 42 },
        ]));
        log.record(&Err(Refusal::NothingToSell));
        let messages: Vec<&str> = log.messages().collect();
        assert_eq!(
            messages,
            vec![
                "You return to town.",
                "You sold your minerals for $42.",
                "You have no minerals to sell",
            ]
        );
    }

    #[test]
    fn test_events_serialize_with_tag() {
        let event = GameEvent::CaveIn {
            center: Position::new(4, 9),
            size: 5,
            damage: 30,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "cave_in");
        assert_eq!(json["size"], 5);
        assert_eq!(json["center"]["y"], 9);
    }

    #[test]
    fn test_saloon_night_messages() {
        assert!(GameEvent::SaloonNight { health_change: 10 }
            .message()
            .contains("+10"));
        assert!(GameEvent::SaloonNight { health_change: -20 }
            .message()
            .contains("-20"));
    }
}
