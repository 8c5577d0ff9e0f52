use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{bot, Battlefield, BattlefieldError, Coordinate, PlayerId, Sign, AREA_AROUND, FLEET};

fn ship_layout(battlefield: &Battlefield) -> Vec<Vec<Coordinate>> {
    battlefield
        .ships()
        .map(|ship| ship.coordinates().to_vec())
        .collect()
}

#[test]
fn easy_bot_places_whole_fleet() -> Result<(), BattlefieldError> {
    let mut rng = SmallRng::seed_from_u64(11);
    let sailor = bot::easy_bot(PlayerId(1), "Sailor", "Mike", &mut rng)?;
    let battlefield = sailor.battlefield();
    assert!(sailor.is_all_ships_added());
    assert_eq!(sailor.policy_name(), "hunting");

    let mut lengths: Vec<usize> = battlefield.ships().map(|ship| ship.len()).collect();
    lengths.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(lengths, vec![4, 3, 3, 2, 2, 2, 1, 1, 1, 1]);

    let structure = battlefield.get_fleet_structure();
    for class in FLEET {
        assert_eq!(structure[class.name()], class.count());
    }
    assert_eq!(
        battlefield.cells().filter(|cell| cell.sign == Sign::Ship).count(),
        20
    );
    Ok(())
}

#[test]
fn placed_ships_never_touch() -> Result<(), BattlefieldError> {
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut battlefield = Battlefield::new("Sailor", true);
        bot::place_fleet(&mut battlefield, &mut rng)?;
        for ship in battlefield.ships() {
            for &(x, y) in ship.coordinates() {
                assert!(battlefield.is_playable((x, y)));
                for (dx, dy) in AREA_AROUND {
                    if let Some(other) = battlefield.ship_at((x + dx, y + dy)) {
                        assert_eq!(other.id(), ship.id(), "seed {} at {:?}", seed, (x, y));
                    }
                }
            }
        }
    }
    Ok(())
}

#[test]
fn same_seed_same_fleet() -> Result<(), BattlefieldError> {
    let mut a = Battlefield::new("a", true);
    let mut b = Battlefield::new("b", true);
    bot::place_fleet(&mut a, &mut SmallRng::seed_from_u64(5))?;
    bot::place_fleet(&mut b, &mut SmallRng::seed_from_u64(5))?;
    assert_eq!(ship_layout(&a), ship_layout(&b));
    Ok(())
}

#[test]
fn completes_partial_fleet() -> Result<(), BattlefieldError> {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut battlefield = Battlefield::new("Mike", true);
    let id = battlefield.set_ship_coordinates(&[(1, 1), (1, 2), (1, 3), (1, 4)])?;
    bot::place_fleet(&mut battlefield, &mut rng)?;
    assert!(battlefield.is_all_ships_added());
    assert_eq!(battlefield.ships().count(), 10);
    assert_eq!(
        battlefield.ship(id).map(|ship| ship.coordinates().to_vec()),
        Some(vec![(1, 1), (1, 2), (1, 3), (1, 4)])
    );
    Ok(())
}

#[test]
fn full_fleet_is_left_alone() -> Result<(), BattlefieldError> {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut battlefield = Battlefield::new("Mike", true);
    bot::place_fleet(&mut battlefield, &mut rng)?;
    let before = ship_layout(&battlefield);
    bot::place_fleet(&mut battlefield, &mut rng)?;
    assert_eq!(ship_layout(&battlefield), before);
    Ok(())
}

#[test]
fn no_room_is_reported() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut battlefield = Battlefield::with_size("tiny", 3, 3, true);
    assert_eq!(
        bot::place_fleet(&mut battlefield, &mut rng),
        Err(BattlefieldError::UnableToPlaceShip(4))
    );
    assert_eq!(battlefield.ships().count(), 0);
    assert_eq!(battlefield.remaining_ship_sizes().len(), 10);
}
