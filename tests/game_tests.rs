use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    BattlefieldError, Coordinate, Game, GameError, GameStatus, Side, Sign, DIAGONAL_AROUND,
};

fn fleet_layout() -> Vec<Vec<Coordinate>> {
    vec![
        vec![(1, 1), (2, 1), (3, 1), (4, 1)],
        vec![(6, 1), (7, 1), (8, 1)],
        vec![(1, 3), (2, 3), (3, 3)],
        vec![(5, 3), (6, 3)],
        vec![(8, 3), (9, 3)],
        vec![(1, 5), (2, 5)],
        vec![(4, 5)],
        vec![(6, 5)],
        vec![(8, 5)],
        vec![(10, 5)],
    ]
}

fn ready_game(seed: u64, player_first: bool) -> Result<Game, GameError> {
    let mut game = Game::seeded(seed)?;
    for ship in fleet_layout() {
        game.player_set_ship(&ship)?;
    }
    game.set_first_move(player_first)?;
    game.start_game()?;
    Ok(game)
}

fn enemy_ship_cell(game: &Game) -> Coordinate {
    game.enemy()
        .battlefield()
        .cells()
        .find(|cell| cell.sign == Sign::Ship)
        .map(|cell| cell.coordinate())
        .unwrap()
}

fn enemy_water_cell(game: &Game) -> Coordinate {
    let battlefield = game.enemy().battlefield();
    battlefield
        .playable_coordinates()
        .find(|&c| battlefield.sign_at(c) == Some(Sign::Empty))
        .unwrap()
}

#[test]
fn new_game_is_in_setup() -> Result<(), GameError> {
    let game = Game::seeded(1)?;
    assert_eq!(game.status(), GameStatus::Setup);
    assert!(!game.is_game_started());
    assert!(!game.is_game_over());
    assert!(!game.player().is_all_ships_added());
    assert!(game.enemy().is_all_ships_added());
    assert_eq!(game.winner(), None);
    Ok(())
}

#[test]
fn game_from_thread_rng() -> Result<(), GameError> {
    let game = Game::new()?;
    assert!(game.enemy().is_all_ships_added());
    assert_ne!(game.player().id(), game.enemy().id());
    Ok(())
}

#[test]
fn same_seed_same_game() -> Result<(), GameError> {
    let a = Game::seeded(99)?;
    let b = Game::seeded(99)?;
    assert_eq!(a.id(), b.id());
    assert_eq!(a.is_player_move(), b.is_player_move());
    let cells = |g: &Game| {
        g.enemy()
            .battlefield()
            .cells()
            .map(|cell| cell.sign)
            .collect::<Vec<_>>()
    };
    assert_eq!(cells(&a), cells(&b));
    Ok(())
}

#[test]
fn start_needs_both_fleets() -> Result<(), GameError> {
    let mut game = Game::seeded(2)?;
    assert_eq!(game.start_game(), Err(GameError::NotStartedGame));
    game.player_set_ship(&[(1, 1), (2, 1), (3, 1), (4, 1)])?;
    assert_eq!(game.start_game(), Err(GameError::NotStartedGame));
    assert!(!game.is_game_started());
    Ok(())
}

#[test]
fn shots_before_start_are_rejected() -> Result<(), GameError> {
    let mut game = Game::seeded(3)?;
    assert_eq!(game.player_shoot((5, 5)).unwrap_err(), GameError::NotStartedGame);
    assert_eq!(game.enemy_shoot().unwrap_err(), GameError::NotStartedGame);
    assert_eq!(game.player_autoshoot().unwrap_err().code(), "NOT_STARTED_GAME");
    Ok(())
}

#[test]
fn setup_is_closed_after_start() -> Result<(), GameError> {
    let mut game = ready_game(4, true)?;
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.start_game(), Err(GameError::StartedGame));
    assert_eq!(game.player_set_ship(&[(10, 10)]), Err(GameError::StartedGame));
    assert_eq!(game.player_auto_place(), Err(GameError::StartedGame));
    assert_eq!(game.set_first_move(false), Err(GameError::StartedGame));
    assert_eq!(GameError::StartedGame.code(), "STARTED_GAME");
    Ok(())
}

#[test]
fn placement_errors_pass_through() -> Result<(), GameError> {
    let mut game = Game::seeded(5)?;
    game.player_set_ship(&[(1, 1)])?;
    assert_eq!(
        game.player_set_ship(&[(1, 2)]),
        Err(GameError::Battlefield(BattlefieldError::BlockedAreaAround(vec![(1, 2)])))
    );
    assert_eq!(
        game.player_set_ship(&[(0, 5)]).unwrap_err().code(),
        "AREA_OUTSIDE_BATTLEFIELD"
    );
    Ok(())
}

#[test]
fn auto_place_completes_player_fleet() -> Result<(), GameError> {
    let mut game = Game::seeded(6)?;
    game.player_set_ship(&[(1, 1), (1, 2)])?;
    game.player_auto_place()?;
    assert!(game.player().is_all_ships_added());
    game.start_game()?;
    assert!(game.is_game_started());
    Ok(())
}

#[test]
fn wrong_side_is_not_your_turn() -> Result<(), GameError> {
    let mut game = ready_game(7, false)?;
    assert_eq!(game.player_shoot((5, 5)), Err(GameError::NotYourTurn));
    assert_eq!(game.player().enemy_battlefield().sign_at((5, 5)), Some(Sign::Empty));

    let mut game = ready_game(7, true)?;
    assert_eq!(game.enemy_shoot().unwrap_err(), GameError::NotYourTurn);
    assert_eq!(GameError::NotYourTurn.code(), "NOT_YOUR_TURN");
    Ok(())
}

#[test]
fn hit_keeps_turn_miss_passes_it() -> Result<(), GameError> {
    let mut game = ready_game(8, true)?;

    let target = enemy_ship_cell(&game);
    let report = game.player_shoot(target)?;
    assert!(report.is_hit());
    assert!(game.is_player_move());
    assert_eq!(game.player().enemy_battlefield().sign_at(target), Some(Sign::Hit));

    let water = enemy_water_cell(&game);
    let report = game.player_shoot(water)?;
    assert_eq!(report.target_sign(), Sign::Miss);
    assert!(!game.is_player_move());

    // the bot keeps shooting until it misses
    loop {
        let (_, report) = game.enemy_shoot()?;
        if !report.is_hit() {
            break;
        }
        assert!(!game.is_player_move());
    }
    assert!(game.is_player_move());
    Ok(())
}

#[test]
fn revealed_cells_cannot_be_shot_again() -> Result<(), GameError> {
    let mut game = ready_game(9, true)?;
    let (x, y) = enemy_ship_cell(&game);
    game.player_shoot((x, y))?;
    let revealed = DIAGONAL_AROUND
        .iter()
        .map(|&(dx, dy)| (x + dx, y + dy))
        .find(|&c| game.enemy().battlefield().is_playable(c))
        .unwrap();
    assert_eq!(
        game.player_shoot(revealed),
        Err(GameError::Battlefield(BattlefieldError::ShotCellEarlier(revealed)))
    );
    assert!(game.is_player_move());
    Ok(())
}

#[test]
fn human_cannot_autoshoot() -> Result<(), GameError> {
    let mut game = ready_game(10, true)?;
    assert_eq!(game.player_autoshoot().unwrap_err(), GameError::NoTargetAvailable);
    assert_eq!(game.play_out().unwrap_err().code(), "NO_TARGET_AVAILABLE");
    Ok(())
}

#[test]
fn bot_vs_bot_plays_to_the_end() -> Result<(), GameError> {
    let mut game = Game::bot_vs_bot(SmallRng::seed_from_u64(12))?;
    let winner = game.play_out()?;
    assert!(game.is_game_over());
    assert_eq!(game.status(), GameStatus::Over);
    assert_eq!(game.winner(), Some(winner));

    let loser = match winner {
        Side::Player => game.enemy(),
        Side::Enemy => game.player(),
    };
    assert!(loser.is_game_over());
    assert!(loser.battlefield().cells().all(|cell| cell.sign != Sign::Ship));

    assert_eq!(game.player_shoot((5, 5)), Err(GameError::GameOver));
    assert_eq!(game.enemy_shoot().unwrap_err(), GameError::GameOver);
    assert_eq!(game.play_out(), Ok(winner));
    Ok(())
}

#[test]
fn human_wins_by_sinking_everything() -> Result<(), GameError> {
    let mut game = ready_game(13, true)?;
    let targets: Vec<Coordinate> = game
        .enemy()
        .battlefield()
        .ships()
        .flat_map(|ship| ship.coordinates().to_vec())
        .collect();
    for c in targets {
        let report = game.player_shoot(c)?;
        assert!(report.is_hit());
    }
    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(Side::Player));
    assert!(game.enemy().battlefield().get_fleet_structure().values().all(|&n| n == 0));
    Ok(())
}
