//! # Economy Rules
//!
//! Pure functions that price digging, roll rewards, price minerals at the
//! bank and price healing. Nothing here mutates game state.

use crate::utils::RandomSource;
use crate::{config, Equipment, EquipmentSet, Mineral, Minerals, PlayerState, TileType};
use serde::{Deserialize, Serialize};

/// What it takes to dig a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigFee {
    /// Ordinary tile, already discounted by owned tools
    Ordinary(i64),
    /// Tile that needs a specific tool and always costs a flat fee
    Gated { fee: i64, requires: Equipment },
}

impl DigFee {
    /// Amount charged if the dig goes ahead.
    pub fn amount(self) -> i64 {
        match self {
            DigFee::Ordinary(cost) => cost,
            DigFee::Gated { fee, .. } => fee,
        }
    }
}

/// Base cost of an ordinary tile before tool discounts.
pub fn base_dig_cost(tile: TileType) -> i64 {
    match tile {
        TileType::Sandstone => 10,
        TileType::Volcanic => 30,
        _ => 20,
    }
}

/// Tool that must be owned before the tile can be dug at all.
pub fn gating_equipment(tile: TileType) -> Option<Equipment> {
    match tile {
        TileType::Granite => Some(Equipment::Drill),
        TileType::Water => Some(Equipment::Bucket),
        _ => None,
    }
}

/// Works out the fee for digging a tile with the given tools.
///
/// Granite and water cost a flat fee that no tool reduces. Other tiles start
/// from their base cost; a shovel takes 12 off (floor 8) and then a pick
/// takes 5 off (floor 5).
pub fn dig_fee(tile: TileType, equipment: EquipmentSet) -> DigFee {
    if let Some(requires) = gating_equipment(tile) {
        return DigFee::Gated {
            fee: config::GATED_DIG_FEE,
            requires,
        };
    }

    let mut cost = base_dig_cost(tile);
    if equipment.contains(Equipment::Shovel) {
        cost = (cost - 12).max(8);
    }
    if equipment.contains(Equipment::Pick) {
        cost = (cost - 5).max(5);
    }
    DigFee::Ordinary(cost)
}

/// Dollar cost of digging a tile with the given tools.
///
/// # Examples
///
/// ```
/// use miner::{dig_cost, Equipment, EquipmentSet, TileType};
///
/// let tools: EquipmentSet = [Equipment::Shovel, Equipment::Pick].into_iter().collect();
/// assert_eq!(dig_cost(TileType::Dirt, EquipmentSet::new()), 20);
/// assert_eq!(dig_cost(TileType::Dirt, tools), 5);
/// assert_eq!(dig_cost(TileType::Granite, tools), 150);
/// ```
pub fn dig_cost(tile: TileType, equipment: EquipmentSet) -> i64 {
    dig_fee(tile, equipment).amount()
}

/// What digging a tile yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reward {
    /// Minerals for the tally
    Mineral { mineral: Mineral, amount: u32 },
    /// The ring
    RingFound,
    /// A spring: floods the surroundings and hurts the player
    Spring { damage: i32 },
    /// Nothing of interest
    Nothing,
}

/// Mineral produced by a tile, if any.
pub fn mineral_for(tile: TileType) -> Option<Mineral> {
    match tile {
        TileType::Silver => Some(Mineral::Silver),
        TileType::Gold => Some(Mineral::Gold),
        TileType::Platinum => Some(Mineral::Platinum),
        TileType::Diamond => Some(Mineral::Diamond),
        _ => None,
    }
}

/// Rolls the reward for a dug tile.
///
/// Silver, gold and platinum draw an amount in `1..=6`; a diamond is always
/// exactly one. No other tile draws from the random source.
pub fn reward_for<R: RandomSource + ?Sized>(tile: TileType, rng: &mut R) -> Reward {
    match tile {
        TileType::Diamond => Reward::Mineral {
            mineral: Mineral::Diamond,
            amount: 1,
        },
        TileType::Ring => Reward::RingFound,
        TileType::Spring => Reward::Spring {
            damage: config::SPRING_DAMAGE,
        },
        _ => mineral_for(tile).map_or(Reward::Nothing, |mineral| Reward::Mineral {
            mineral,
            amount: rng.pick(1, 6) as u32,
        }),
    }
}

/// Per-unit bank prices for one sale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketRates {
    pub silver: f64,
    pub gold: f64,
    pub platinum: f64,
    pub diamonds: f64,
}

impl MarketRates {
    /// Draws today's prices: silver 9 to 20, gold 45 to 63, platinum 225 to
    /// 279, diamonds a flat 1000.
    pub fn roll<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let silver = rng.uniform(9.0, 20.0);
        let gold = rng.uniform(45.0, 63.0);
        let platinum = rng.uniform(225.0, 279.0);
        Self {
            silver,
            gold,
            platinum,
            diamonds: 1000.0,
        }
    }

    /// Price of one unit of a mineral.
    pub fn rate(&self, mineral: Mineral) -> f64 {
        match mineral {
            Mineral::Silver => self.silver,
            Mineral::Gold => self.gold,
            Mineral::Platinum => self.platinum,
            Mineral::Diamond => self.diamonds,
        }
    }

    /// Sale value of a tally; each mineral's subtotal is rounded down.
    pub fn value_of(&self, minerals: &Minerals) -> i64 {
        minerals
            .iter()
            .map(|(mineral, amount)| (f64::from(amount) * self.rate(mineral)).floor() as i64)
            .sum()
    }
}

/// Hospital price for healing the player to full.
pub fn heal_cost(player: &PlayerState) -> i64 {
    i64::from(player.missing_health()) * config::HEAL_COST_PER_HP
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ScriptedRandom;

    fn tools(items: &[Equipment]) -> EquipmentSet {
        items.iter().copied().collect()
    }

    #[test]
    fn test_base_costs_without_tools() {
        let none = EquipmentSet::new();
        assert_eq!(dig_cost(TileType::Dirt, none), 20);
        assert_eq!(dig_cost(TileType::Gold, none), 20);
        assert_eq!(dig_cost(TileType::Sandstone, none), 10);
        assert_eq!(dig_cost(TileType::Volcanic, none), 30);
    }

    #[test]
    fn test_shovel_discount_and_floor() {
        let shovel = tools(&[Equipment::Shovel]);
        assert_eq!(dig_cost(TileType::Dirt, shovel), 8);
        assert_eq!(dig_cost(TileType::Sandstone, shovel), 8);
        assert_eq!(dig_cost(TileType::Volcanic, shovel), 18);
    }

    #[test]
    fn test_pick_discount_and_floor() {
        let pick = tools(&[Equipment::Pick]);
        assert_eq!(dig_cost(TileType::Dirt, pick), 15);
        assert_eq!(dig_cost(TileType::Sandstone, pick), 5);
        assert_eq!(dig_cost(TileType::Volcanic, pick), 25);
    }

    #[test]
    fn test_floors_compose() {
        let both = tools(&[Equipment::Shovel, Equipment::Pick]);
        assert_eq!(dig_cost(TileType::Dirt, both), 5);
        assert_eq!(dig_cost(TileType::Sandstone, both), 5);
        assert_eq!(dig_cost(TileType::Volcanic, both), 13);
    }

    #[test]
    fn test_gated_tiles_ignore_discounts() {
        let all: EquipmentSet = Equipment::ALL.into_iter().collect();
        assert_eq!(
            dig_fee(TileType::Granite, all),
            DigFee::Gated {
                fee: 150,
                requires: Equipment::Drill
            }
        );
        assert_eq!(
            dig_fee(TileType::Water, EquipmentSet::new()),
            DigFee::Gated {
                fee: 150,
                requires: Equipment::Bucket
            }
        );
    }

    #[test]
    fn test_mineral_rewards() {
        let mut rng = ScriptedRandom::new().with_picks([6, 1, 3]);
        assert_eq!(
            reward_for(TileType::Silver, &mut rng),
            Reward::Mineral {
                mineral: Mineral::Silver,
                amount: 6
            }
        );
        assert_eq!(
            reward_for(TileType::Gold, &mut rng),
            Reward::Mineral {
                mineral: Mineral::Gold,
                amount: 1
            }
        );
        assert_eq!(
            reward_for(TileType::Platinum, &mut rng),
            Reward::Mineral {
                mineral: Mineral::Platinum,
                amount: 3
            }
        );
    }

    #[test]
    fn test_only_ores_draw() {
        for tile in TileType::ALL {
            let mut rng = ScriptedRandom::new().with_picks([2]);
            let reward = reward_for(tile, &mut rng);
            let is_ore = matches!(tile, TileType::Silver | TileType::Gold | TileType::Platinum);
            assert_eq!(rng.remaining(), if is_ore { 0 } else { 1 }, "{}", tile);
            if is_ore {
                assert_eq!(
                    reward,
                    Reward::Mineral {
                        mineral: mineral_for(tile).unwrap(),
                        amount: 2
                    }
                );
            }
        }
    }

    #[test]
    fn test_fixed_rewards_do_not_draw() {
        let mut rng = ScriptedRandom::new().with_picks([4]);
        assert_eq!(
            reward_for(TileType::Diamond, &mut rng),
            Reward::Mineral {
                mineral: Mineral::Diamond,
                amount: 1
            }
        );
        assert_eq!(reward_for(TileType::Ring, &mut rng), Reward::RingFound);
        assert_eq!(
            reward_for(TileType::Spring, &mut rng),
            Reward::Spring { damage: 20 }
        );
        assert_eq!(reward_for(TileType::Clover, &mut rng), Reward::Nothing);
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn test_market_value_floors_each_mineral() {
        let rates = MarketRates {
            silver: 9.5,
            gold: 45.9,
            platinum: 225.0,
            diamonds: 1000.0,
        };
        let minerals = Minerals {
            silver: 3,
            gold: 1,
            platinum: 0,
            diamonds: 2,
        };
        // 28.5 -> 28, 45.9 -> 45
        assert_eq!(rates.value_of(&minerals), 28 + 45 + 2000);
    }

    #[test]
    fn test_market_rates_roll_in_order() {
        let mut rng = ScriptedRandom::new().with_uniforms([10.0, 50.0, 250.0]);
        let rates = MarketRates::roll(&mut rng);
        assert_eq!(rates.rate(Mineral::Silver), 10.0);
        assert_eq!(rates.rate(Mineral::Gold), 50.0);
        assert_eq!(rates.rate(Mineral::Platinum), 250.0);
        assert_eq!(rates.rate(Mineral::Diamond), 1000.0);
    }

    #[test]
    fn test_heal_cost() {
        let mut player = PlayerState::default();
        assert_eq!(heal_cost(&player), 0);
        player.take_damage(35);
        assert_eq!(heal_cost(&player), 70);
    }
}
