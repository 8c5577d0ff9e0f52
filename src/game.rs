//! Turn orchestration between a player and its opponent.
//!
//! A game moves SETUP -> IN_PROGRESS -> OVER. Ships are placed during setup,
//! `start_game` requires both fleets, and shots alternate except that a hit
//! lets the shooter go again.

use core::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::battlefield::ShotReport;
use crate::bot;
use crate::cell::Coordinate;
use crate::common::GameError;
use crate::config::{DEFAULT_BOT_NAME, DEFAULT_PLAYER_NAME};
use crate::player::{Player, PlayerId};
use crate::ship::ShipId;
use crate::snapshot::GameSnapshot;

/// Opaque game identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameId(pub u64);

impl GameId {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        GameId(rng.random())
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// One side of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Side {
    Player,
    Enemy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Setup,
    InProgress,
    Over,
}

#[derive(Debug)]
pub struct Game {
    id: GameId,
    player: Player,
    enemy: Player,
    is_game_started: bool,
    is_player_move: bool,
    is_game_over: bool,
    rng: SmallRng,
}

impl Game {
    /// Human player against a freshly placed bot, seeded from the thread RNG.
    #[cfg(feature = "std")]
    pub fn new() -> Result<Self, GameError> {
        let mut seed_rng = rand::rng();
        Self::with_rng(SmallRng::from_rng(&mut seed_rng))
    }

    /// Human player against a bot; every random decision comes from `rng`.
    pub fn with_rng(mut rng: SmallRng) -> Result<Self, GameError> {
        let player = Player::human(PlayerId::random(&mut rng), DEFAULT_PLAYER_NAME, DEFAULT_BOT_NAME);
        let enemy = bot::easy_bot(
            PlayerId::random(&mut rng),
            DEFAULT_BOT_NAME,
            DEFAULT_PLAYER_NAME,
            &mut rng,
        )?;
        Ok(Self::from_players(player, enemy, rng))
    }

    /// Two bots with complete fleets, ready to start.
    pub fn bot_vs_bot(mut rng: SmallRng) -> Result<Self, GameError> {
        let player = bot::easy_bot(
            PlayerId::random(&mut rng),
            DEFAULT_PLAYER_NAME,
            DEFAULT_BOT_NAME,
            &mut rng,
        )?;
        let enemy = bot::easy_bot(
            PlayerId::random(&mut rng),
            DEFAULT_BOT_NAME,
            DEFAULT_PLAYER_NAME,
            &mut rng,
        )?;
        Ok(Self::from_players(player, enemy, rng))
    }

    /// Game over arbitrary players. The first move is drawn here.
    pub fn from_players(player: Player, enemy: Player, mut rng: SmallRng) -> Self {
        let id = GameId::random(&mut rng);
        let is_player_move = rng.random_bool(0.5);
        Self {
            id,
            player,
            enemy,
            is_game_started: false,
            is_player_move,
            is_game_over: false,
            rng,
        }
    }

    /// Reproducible game from a numeric seed.
    pub fn seeded(seed: u64) -> Result<Self, GameError> {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemy(&self) -> &Player {
        &self.enemy
    }

    pub fn is_game_started(&self) -> bool {
        self.is_game_started
    }

    pub fn is_player_move(&self) -> bool {
        self.is_player_move
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn status(&self) -> GameStatus {
        if self.is_game_over {
            GameStatus::Over
        } else if self.is_game_started {
            GameStatus::InProgress
        } else {
            GameStatus::Setup
        }
    }

    /// Side whose opponent lost every ship.
    pub fn winner(&self) -> Option<Side> {
        if self.player.is_game_over() {
            Some(Side::Enemy)
        } else if self.enemy.is_game_over() {
            Some(Side::Player)
        } else {
            None
        }
    }

    /// Override the drawn first move. Only allowed during setup.
    pub fn set_first_move(&mut self, is_player_move: bool) -> Result<(), GameError> {
        if self.is_game_started {
            return Err(GameError::StartedGame);
        }
        self.is_player_move = is_player_move;
        Ok(())
    }

    pub fn player_set_ship(&mut self, coordinates: &[Coordinate]) -> Result<ShipId, GameError> {
        if self.is_game_started {
            return Err(GameError::StartedGame);
        }
        Ok(self.player.set_ship_coordinates(coordinates)?)
    }

    /// Place the player's remaining ships at random.
    pub fn player_auto_place(&mut self) -> Result<(), GameError> {
        if self.is_game_started {
            return Err(GameError::StartedGame);
        }
        bot::place_fleet(self.player.battlefield_mut(), &mut self.rng)?;
        Ok(())
    }

    pub fn start_game(&mut self) -> Result<(), GameError> {
        if self.is_game_started {
            return Err(GameError::StartedGame);
        }
        if !(self.player.is_all_ships_added() && self.enemy.is_all_ships_added()) {
            return Err(GameError::NotStartedGame);
        }
        self.is_game_started = true;
        Ok(())
    }

    fn check_turn(&self, is_player: bool) -> Result<(), GameError> {
        if self.is_game_over {
            return Err(GameError::GameOver);
        }
        if !self.is_game_started {
            return Err(GameError::NotStartedGame);
        }
        if self.is_player_move != is_player {
            return Err(GameError::NotYourTurn);
        }
        Ok(())
    }

    fn finish_shot(&mut self, report: &ShotReport, shooter_is_player: bool) {
        if !report.is_hit() {
            self.is_player_move = !shooter_is_player;
        }
        self.is_game_over = self.player.is_game_over() || self.enemy.is_game_over();
    }

    /// Player shoots at the enemy's grid.
    pub fn player_shoot(&mut self, coordinate: Coordinate) -> Result<ShotReport, GameError> {
        self.check_turn(true)?;
        let report = self.enemy.enemy_shooting(coordinate)?;
        self.player.shoot(&report.signs(), report.is_killed);
        self.finish_shot(&report, true);
        Ok(report)
    }

    /// Player shoots where its own policy points.
    pub fn player_autoshoot(&mut self) -> Result<(Coordinate, ShotReport), GameError> {
        self.check_turn(true)?;
        let coordinate = self
            .player
            .choose_shooting_coordinate(&mut self.rng)
            .ok_or(GameError::NoTargetAvailable)?;
        let report = self.player_shoot(coordinate)?;
        Ok((coordinate, report))
    }

    /// Enemy picks a coordinate with its policy and shoots at the player.
    pub fn enemy_shoot(&mut self) -> Result<(Coordinate, ShotReport), GameError> {
        self.check_turn(false)?;
        let coordinate = self
            .enemy
            .choose_shooting_coordinate(&mut self.rng)
            .ok_or(GameError::NoTargetAvailable)?;
        let report = self.player.enemy_shooting(coordinate)?;
        self.enemy.shoot(&report.signs(), report.is_killed);
        self.finish_shot(&report, false);
        Ok((coordinate, report))
    }

    /// Start if needed and let both policies shoot until one fleet is gone.
    pub fn play_out(&mut self) -> Result<Side, GameError> {
        if !self.is_game_started {
            self.start_game()?;
        }
        while !self.is_game_over {
            if self.is_player_move {
                self.player_autoshoot()?;
            } else {
                self.enemy_shoot()?;
            }
        }
        self.winner().ok_or(GameError::GameOver)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}
