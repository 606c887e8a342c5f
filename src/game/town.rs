//! # Town Services
//!
//! The store, the bank, the hospital and the saloon. Each service checks its
//! preconditions first and only then touches the player.

use crate::utils::RandomSource;
use crate::{
    config, heal_cost, Equipment, Expense, GameEvent, MarketRates, Outcome, PlayerState, Refusal,
};
use log::info;
use serde::{Deserialize, Serialize};

/// Buys a tool from the store.
///
/// Ownership is checked before funds so a second purchase never charges.
///
/// # Examples
///
/// ```
/// use miner::{buy_equipment, Equipment, PlayerState, Refusal};
///
/// let mut player = PlayerState::default();
/// assert!(buy_equipment(&mut player, Equipment::Drill).is_ok());
/// assert_eq!(player.money, 1250);
/// assert_eq!(
///     buy_equipment(&mut player, Equipment::Drill),
///     Err(Refusal::AlreadyOwned(Equipment::Drill))
/// );
/// assert_eq!(player.money, 1250);
/// ```
pub fn buy_equipment(player: &mut PlayerState, item: Equipment) -> Outcome {
    if player.has_equipment(item) {
        return Err(Refusal::AlreadyOwned(item));
    }
    let price = item.price();
    if !player.spend_money(price) {
        return Err(Refusal::InsufficientFunds {
            needed: price,
            purpose: Expense::Equipment(item),
        });
    }
    player.add_equipment(item);
    info!("Bought {} for ${}", item, price);
    Ok(vec![GameEvent::EquipmentPurchased { item, price }])
}

/// Sells the whole mineral tally at today's market rates.
pub fn sell_minerals<R: RandomSource + ?Sized>(player: &mut PlayerState, rng: &mut R) -> Outcome {
    if player.minerals.is_empty() {
        return Err(Refusal::NothingToSell);
    }
    let rates = MarketRates::roll(rng);
    let total = rates.value_of(&player.minerals);
    player.add_money(total);
    player.clear_minerals();
    info!("Sold minerals for ${}", total);
    Ok(vec![GameEvent::MineralsSold { total }])
}

/// Heals the player to full health at the hospital.
pub fn heal_player(player: &mut PlayerState) -> Outcome {
    if player.missing_health() == 0 {
        return Err(Refusal::InvalidHealTarget);
    }
    let cost = heal_cost(player);
    if !player.spend_money(cost) {
        return Err(Refusal::InsufficientFunds {
            needed: cost,
            purpose: Expense::Healing,
        });
    }
    let amount = player.heal(player.missing_health());
    info!("Healed {} HP for ${}", amount, cost);
    Ok(vec![GameEvent::Healed { amount, cost }])
}

/// The two ways to spend time at the saloon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaloonOption {
    /// Watch the show; needs a larger bankroll and restores a little health
    Show,
    /// Spend the night; goes well only for players carrying a shovel
    Night,
}

/// Visits the saloon.
pub fn visit_saloon(player: &mut PlayerState, option: SaloonOption) -> Outcome {
    if player.money < config::SALOON_ENTRY_THRESHOLD {
        return Err(Refusal::SaloonTooPoor {
            needed: config::SALOON_ENTRY_THRESHOLD,
        });
    }

    let event = match option {
        SaloonOption::Show => {
            if player.money < config::SALOON_SHOW_THRESHOLD {
                return Err(Refusal::SaloonTooPoor {
                    needed: config::SALOON_SHOW_THRESHOLD,
                });
            }
            let healed = player.heal(config::SALOON_SHOW_HEAL);
            GameEvent::SaloonShow { healed }
        }
        SaloonOption::Night if player.has_equipment(Equipment::Shovel) => GameEvent::SaloonNight {
            health_change: player.heal(config::SALOON_NIGHT_HEAL),
        },
        SaloonOption::Night => GameEvent::SaloonNight {
            health_change: -player.take_damage(config::SALOON_NIGHT_DAMAGE),
        },
    };
    info!("Saloon visit: {:?}", option);
    Ok(vec![event])
}
