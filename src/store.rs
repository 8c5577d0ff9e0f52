#![cfg(feature = "std")]

//! In-process registry of running games.

use std::collections::HashMap;
use std::fmt;

use log::{info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::common::GameError;
use crate::game::{Game, GameId};
use crate::player::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No game is stored under this id.
    NoGame(GameId),
    /// The game exists but the player id does not belong to it.
    NoGamePlayer(GameId, PlayerId),
}

impl StoreError {
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NoGame(_) => "NO_GAME",
            StoreError::NoGamePlayer(..) => "NO_GAME_PLAYER",
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NoGame(id) => write!(f, "Game {} not found", id),
            StoreError::NoGamePlayer(id, player) => {
                write!(f, "Player {} not found in game {}", player, id)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Games keyed by id. Lookups are checked against the human player's id.
#[derive(Debug, Default)]
pub struct GameStore {
    games: HashMap<GameId, Game>,
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a human-vs-bot game and return its id and the player's id.
    pub fn new_game(&mut self, seed: Option<u64>) -> Result<(GameId, PlayerId), GameError> {
        let game = match seed {
            Some(s) => Game::with_rng(SmallRng::seed_from_u64(s))?,
            None => Game::new()?,
        };
        Ok(self.insert(game))
    }

    pub fn insert(&mut self, game: Game) -> (GameId, PlayerId) {
        let ids = (game.id(), game.player().id());
        info!("game {} created for player {}", ids.0, ids.1);
        self.games.insert(ids.0, game);
        ids
    }

    pub fn get(&mut self, game_id: GameId, player_id: PlayerId) -> Result<&mut Game, StoreError> {
        let Some(game) = self.games.get_mut(&game_id) else {
            warn!("game {} not found", game_id);
            return Err(StoreError::NoGame(game_id));
        };
        if game.player().id() != player_id {
            warn!("player {} is not part of game {}", player_id, game_id);
            return Err(StoreError::NoGamePlayer(game_id, player_id));
        }
        Ok(game)
    }

    /// Drop the game. The player id has to match as for `get`.
    pub fn exit(&mut self, game_id: GameId, player_id: PlayerId) -> Result<Game, StoreError> {
        self.get(game_id, player_id)?;
        let game = self
            .games
            .remove(&game_id)
            .ok_or(StoreError::NoGame(game_id))?;
        info!("game {} closed by player {}", game_id, player_id);
        Ok(game)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
