//! # Equipment
//!
//! Tools sold in the town store and the set of tools a player owns.

use serde::{Deserialize, Serialize};

/// A tool the player can buy once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equipment {
    Shovel,
    Pick,
    Drill,
    Lantern,
    Bucket,
    Dynamite,
    Torch,
}

impl Equipment {
    /// All tools in store order (the order of the number keys).
    pub const ALL: [Equipment; 7] = [
        Equipment::Shovel,
        Equipment::Pick,
        Equipment::Drill,
        Equipment::Lantern,
        Equipment::Bucket,
        Equipment::Torch,
        Equipment::Dynamite,
    ];

    /// Store price in dollars.
    pub fn price(self) -> i64 {
        match self {
            Equipment::Shovel => 100,
            Equipment::Pick => 150,
            Equipment::Drill => 250,
            Equipment::Lantern => 300,
            Equipment::Bucket => 200,
            Equipment::Torch => 100,
            Equipment::Dynamite => 300,
        }
    }

    /// Lower-case name used in messages and commands.
    pub fn name(self) -> &'static str {
        match self {
            Equipment::Shovel => "shovel",
            Equipment::Pick => "pick",
            Equipment::Drill => "drill",
            Equipment::Lantern => "lantern",
            Equipment::Bucket => "bucket",
            Equipment::Dynamite => "dynamite",
            Equipment::Torch => "torch",
        }
    }

    /// Store blurb.
    pub fn description(self) -> &'static str {
        match self {
            Equipment::Shovel => "Cheaper digging",
            Equipment::Pick => "Even cheaper digging",
            Equipment::Drill => "Digs through granite",
            Equipment::Lantern => "Reveals unknown tiles",
            Equipment::Bucket => "Removes water",
            Equipment::Torch => "Helps find hidden treasures",
            Equipment::Dynamite => "Explodes large areas",
        }
    }

    /// Parses a tool by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Equipment> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|item| item.name() == name)
    }

    /// Store slot number (1-based) as used by the town keys.
    pub fn from_slot(slot: usize) -> Option<Equipment> {
        slot.checked_sub(1).and_then(|index| Self::ALL.get(index).copied())
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl std::fmt::Display for Equipment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The tools a player owns. Tools are only ever added.
///
/// # Examples
///
/// ```
/// use miner::{Equipment, EquipmentSet};
///
/// let mut owned = EquipmentSet::new();
/// assert!(owned.insert(Equipment::Drill));
/// assert!(!owned.insert(Equipment::Drill));
/// assert!(owned.contains(Equipment::Drill));
/// assert!(!owned.contains(Equipment::Bucket));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EquipmentSet {
    bits: u8,
}

impl EquipmentSet {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Whether the tool is owned.
    pub const fn contains(self, item: Equipment) -> bool {
        self.bits & item.bit() != 0
    }

    /// Adds a tool. Returns false if it was already owned.
    pub fn insert(&mut self, item: Equipment) -> bool {
        let added = !self.contains(item);
        self.bits |= item.bit();
        added
    }

    /// Number of tools owned.
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Whether no tools are owned.
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Owned tools in store order.
    pub fn iter(self) -> impl Iterator<Item = Equipment> {
        Equipment::ALL
            .into_iter()
            .filter(move |item| self.contains(*item))
    }
}

impl FromIterator<Equipment> for EquipmentSet {
    fn from_iter<I: IntoIterator<Item = Equipment>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}
