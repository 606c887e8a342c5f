//! Integration tests for dig resolution: gating, atomicity, discounts,
//! rewards and hazards.

use miner::{
    dig_cost, Direction, Equipment, EquipmentSet, Expense, GameEvent, MineController, MineField,
    Mineral, PlayerState, Position, Refusal, ScriptedRandom, TileType,
};

/// A 9x9 dirt field with the player standing in a dug cell at the centre
/// and the given tile directly below.
fn pit(below: TileType) -> (MineField, PlayerState) {
    let mut field = MineField::new(9, 9);
    field.set_tile(4, 4, TileType::Empty);
    field.set_tile(4, 5, below);
    (field, PlayerState::new(Position::new(4, 4)))
}

fn dig_down(
    field: &mut MineField,
    player: &mut PlayerState,
    rng: &mut ScriptedRandom,
) -> Result<Vec<GameEvent>, Refusal> {
    MineController::default().attempt_move(field, player, Direction::South, rng)
}

/// Gold plus a forced cave-in: reward, damage and collapse in one dig.
#[test]
fn test_cave_in_and_reward_in_same_dig() {
    let (mut field, mut player) = pit(TileType::Gold);
    for x in 2..=6 {
        field.set_tile(x, 3, TileType::Empty);
    }
    // reward 5 gold, cave-in roll succeeds, large square
    let mut rng = ScriptedRandom::new().with_picks([5, 1]).with_rolls([true]);

    let events = dig_down(&mut field, &mut player, &mut rng).expect("dig should succeed");

    assert_eq!(player.minerals.get(Mineral::Gold), 5);
    assert_eq!(player.health, 70);
    assert_eq!(player.money, 1480);
    assert_eq!(player.position, Position::new(4, 5));
    // 5x5 around (4, 5) covers rows 3..=7 and columns 2..=6
    for x in 2..=6 {
        assert_eq!(field.get_tile(x, 3), TileType::Dirt);
    }
    assert_eq!(field.get_tile(4, 4), TileType::Dirt);
    assert_eq!(field.get_tile(4, 5), TileType::Empty);
    assert_eq!(
        events,
        vec![
            GameEvent::Dug {
                position: Position::new(4, 5),
                tile: TileType::Gold,
                cost: 20
            },
            GameEvent::MineralCollected {
                mineral: Mineral::Gold,
                amount: 5
            },
            GameEvent::CaveIn {
                center: Position::new(4, 5),
                size: 5,
                damage: 30
            },
        ]
    );
    assert_eq!(rng.remaining(), 0);
}

/// Without the cave-in roll nothing collapses and no second pick is drawn.
#[test]
fn test_no_cave_in_draws_no_size() {
    let (mut field, mut player) = pit(TileType::Silver);
    let mut rng = ScriptedRandom::new().with_picks([2, 1]).with_rolls([false]);

    dig_down(&mut field, &mut player, &mut rng).expect("dig should succeed");
    assert_eq!(player.minerals.silver, 2);
    assert_eq!(player.health, 100);
    assert_eq!(field.get_tile(4, 4), TileType::Empty);
    assert_eq!(rng.remaining(), 1);
}

/// Granite and water refuse without their tool, however rich the player.
#[test]
fn test_gating_ignores_funds() {
    for (tile, tool) in [
        (TileType::Granite, Equipment::Drill),
        (TileType::Water, Equipment::Bucket),
    ] {
        let (mut field, mut player) = pit(tile);
        player.money = 1_000_000;
        let result = dig_down(&mut field, &mut player, &mut ScriptedRandom::new());

        assert_eq!(result, Err(Refusal::MissingEquipment { tool, tile }));
        assert_eq!(player.money, 1_000_000);
        assert_eq!(player.position, Position::new(4, 4));
        assert_eq!(field.get_tile(4, 5), tile);
    }
}

/// With the tool, granite costs the flat fee whatever else is owned.
#[test]
fn test_granite_with_drill() {
    let (mut field, mut player) = pit(TileType::Granite);
    for item in [Equipment::Drill, Equipment::Shovel, Equipment::Pick] {
        player.add_equipment(item);
    }
    dig_down(&mut field, &mut player, &mut ScriptedRandom::new()).expect("dig should succeed");
    assert_eq!(player.money, 1500 - 150);
    assert!(field.is_revealed(4, 5));
}

/// Not enough money: nothing changes and the reason says so.
#[test]
fn test_insufficient_funds_is_atomic() {
    let (mut field, mut player) = pit(TileType::Volcanic);
    player.money = 29;
    let before_field = field.clone();
    let before_player = player.clone();
    let mut rng = ScriptedRandom::new().with_rolls([true]).with_picks([1]);

    let result = dig_down(&mut field, &mut player, &mut rng);
    assert_eq!(
        result,
        Err(Refusal::InsufficientFunds {
            needed: 30,
            purpose: Expense::Dig(TileType::Volcanic)
        })
    );
    assert_eq!(field, before_field);
    assert_eq!(player, before_player);
    assert_eq!(rng.remaining(), 2);
}

/// Exactly enough money is enough.
#[test]
fn test_exact_funds_succeed() {
    let (mut field, mut player) = pit(TileType::Dirt);
    player.money = 20;
    dig_down(&mut field, &mut player, &mut ScriptedRandom::new()).expect("dig should succeed");
    assert_eq!(player.money, 0);
}

/// Shovel then pick, each with its own floor.
#[test]
fn test_discount_floors_compose() {
    let shovel: EquipmentSet = [Equipment::Shovel].into_iter().collect();
    let both: EquipmentSet = [Equipment::Shovel, Equipment::Pick].into_iter().collect();

    assert_eq!(dig_cost(TileType::Dirt, shovel), 8);
    assert_eq!(dig_cost(TileType::Dirt, both), 5);
    assert_eq!(dig_cost(TileType::Volcanic, both), 13);
    assert_eq!(dig_cost(TileType::Water, both), 150);
}

/// Springs flood around the dug tile and hurt the player.
#[test]
fn test_spring_floods_dug_space() {
    let (mut field, mut player) = pit(TileType::Spring);
    field.set_tile(3, 6, TileType::Empty);
    field.set_tile(5, 6, TileType::Gold);

    let events = dig_down(&mut field, &mut player, &mut ScriptedRandom::new())
        .expect("dig should succeed");
    assert_eq!(player.health, 80);
    assert_eq!(field.get_tile(3, 6), TileType::Water);
    assert_eq!(field.get_tile(4, 4), TileType::Water);
    assert_eq!(field.get_tile(5, 6), TileType::Gold);
    assert_eq!(field.get_tile(4, 5), TileType::Empty);
    assert!(matches!(
        events[1],
        GameEvent::SpringFlooded {
            flooded: 2,
            damage: 20,
            ..
        }
    ));
}

/// Diamonds are counted one at a time and draw nothing.
#[test]
fn test_diamond_reward() {
    let (mut field, mut player) = pit(TileType::Diamond);
    let mut rng = ScriptedRandom::new().with_picks([6]);
    dig_down(&mut field, &mut player, &mut rng).expect("dig should succeed");
    assert_eq!(player.minerals.diamonds, 1);
    assert_eq!(rng.remaining(), 1);
}

/// Walking back through dug space is free.
#[test]
fn test_moving_through_empty_is_free() {
    let (mut field, mut player) = pit(TileType::Dirt);
    let mut rng = ScriptedRandom::new();
    dig_down(&mut field, &mut player, &mut rng).expect("dig should succeed");
    let money = player.money;

    let events = MineController::default()
        .attempt_move(&mut field, &mut player, Direction::North, &mut rng)
        .expect("move should succeed");
    assert_eq!(
        events,
        vec![GameEvent::Moved {
            from: Position::new(4, 5),
            to: Position::new(4, 4)
        }]
    );
    assert_eq!(player.money, money);
}
