//! # Player State
//!
//! Money, health, mineral tally, owned tools, position and camera.

use crate::{config, Equipment, EquipmentSet, Position};
use serde::{Deserialize, Serialize};

/// The four minerals the bank buys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mineral {
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl Mineral {
    /// All minerals in tally order.
    pub const ALL: [Mineral; 4] = [
        Mineral::Silver,
        Mineral::Gold,
        Mineral::Platinum,
        Mineral::Diamond,
    ];

    /// Name used for the tally.
    pub fn name(self) -> &'static str {
        match self {
            Mineral::Silver => "silver",
            Mineral::Gold => "gold",
            Mineral::Platinum => "platinum",
            Mineral::Diamond => "diamonds",
        }
    }
}

impl std::fmt::Display for Mineral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Collected but unsold minerals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Minerals {
    pub silver: u32,
    pub gold: u32,
    pub platinum: u32,
    pub diamonds: u32,
}

impl Minerals {
    /// Count held of one mineral.
    pub fn get(&self, mineral: Mineral) -> u32 {
        match mineral {
            Mineral::Silver => self.silver,
            Mineral::Gold => self.gold,
            Mineral::Platinum => self.platinum,
            Mineral::Diamond => self.diamonds,
        }
    }

    /// Adds to the count of one mineral.
    pub fn add(&mut self, mineral: Mineral, amount: u32) {
        let slot = match mineral {
            Mineral::Silver => &mut self.silver,
            Mineral::Gold => &mut self.gold,
            Mineral::Platinum => &mut self.platinum,
            Mineral::Diamond => &mut self.diamonds,
        };
        *slot = slot.saturating_add(amount);
    }

    /// Total count of all minerals.
    pub fn total(&self) -> u64 {
        Mineral::ALL
            .iter()
            .map(|&mineral| u64::from(self.get(mineral)))
            .sum()
    }

    /// Whether nothing is held.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Non-zero entries in tally order.
    pub fn iter(&self) -> impl Iterator<Item = (Mineral, u32)> + '_ {
        Mineral::ALL
            .into_iter()
            .map(|mineral| (mineral, self.get(mineral)))
            .filter(|(_, amount)| *amount > 0)
    }
}

/// Everything the game tracks about the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Cash in dollars
    pub money: i64,
    /// Current health, `0..=max_health`
    pub health: i32,
    /// Maximum health
    pub max_health: i32,
    /// Unsold minerals
    pub minerals: Minerals,
    /// Owned tools
    pub equipment: EquipmentSet,
    /// Whether the ring has been dug up
    pub has_ring: bool,
    /// Grid position
    pub position: Position,
    /// Top visible row of the camera window
    pub camera_y: i32,
}

impl PlayerState {
    /// Creates a fresh player standing at the given position.
    ///
    /// # Examples
    ///
    /// ```
    /// use miner::{PlayerState, Position};
    ///
    /// let player = PlayerState::new(Position::new(19, 0));
    /// assert_eq!(player.money, 1500);
    /// assert_eq!(player.health, 100);
    /// assert!(player.minerals.is_empty());
    /// ```
    pub fn new(position: Position) -> Self {
        Self {
            money: config::STARTING_MONEY,
            health: config::MAX_HEALTH,
            max_health: config::MAX_HEALTH,
            minerals: Minerals::default(),
            equipment: EquipmentSet::new(),
            has_ring: false,
            position,
            camera_y: 0,
        }
    }

    /// Adds money.
    pub fn add_money(&mut self, amount: i64) {
        self.money = self.money.saturating_add(amount);
    }

    /// Whether the player can pay the amount.
    pub fn can_afford(&self, amount: i64) -> bool {
        self.money >= amount
    }

    /// Spends money if enough is available. Returns false and leaves money
    /// untouched otherwise.
    pub fn spend_money(&mut self, amount: i64) -> bool {
        if self.can_afford(amount) {
            self.money -= amount;
            true
        } else {
            false
        }
    }

    /// Lowers health, never below zero. Returns the damage actually taken.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = self.health.saturating_sub(amount.max(0)).max(0);
        before - self.health
    }

    /// Raises health, never above the maximum. Returns the amount healed.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount.max(0)).min(self.max_health);
        self.health - before
    }

    /// Hit points missing from full health.
    pub fn missing_health(&self) -> i32 {
        (self.max_health - self.health).max(0)
    }

    /// Whether the player owns the tool.
    pub fn has_equipment(&self, item: Equipment) -> bool {
        self.equipment.contains(item)
    }

    /// Adds a tool. Returns false if it was already owned.
    pub fn add_equipment(&mut self, item: Equipment) -> bool {
        self.equipment.insert(item)
    }

    /// Adds minerals to the tally.
    pub fn add_mineral(&mut self, mineral: Mineral, amount: u32) {
        self.minerals.add(mineral, amount);
    }

    /// Empties the tally after a sale.
    pub fn clear_minerals(&mut self) {
        self.minerals = Minerals::default();
    }

    /// Whether health is above zero.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(Position::new(config::GRID_WIDTH as i32 / 2, 0))
    }
}
