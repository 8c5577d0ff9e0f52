//! Serializable view of a game from the human player's seat.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::battlefield::Battlefield;
use crate::cell::{Cell, Sign};
use crate::game::{Game, GameId, Side};
use crate::player::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CellView {
    pub x: i32,
    pub y: i32,
    pub sign: Sign,
}

impl From<&Cell> for CellView {
    fn from(cell: &Cell) -> Self {
        Self {
            x: cell.x,
            y: cell.y,
            sign: cell.sign,
        }
    }
}

/// Everything a client needs to redraw both boards.
///
/// `enemy_cells` is the player's fogged knowledge of the opponent; the enemy
/// fleet counts come from the opponent's real battlefield so sunk classes are
/// reported accurately.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub is_game_started: bool,
    pub is_player_move: bool,
    pub is_game_over: bool,
    pub winner: Option<Side>,
    pub player_cells: Vec<CellView>,
    pub player_fleet: BTreeMap<String, usize>,
    pub enemy_cells: Vec<CellView>,
    pub enemy_fleet: BTreeMap<String, usize>,
}

fn cell_views(battlefield: &Battlefield) -> Vec<CellView> {
    battlefield.visible_cells().iter().map(CellView::from).collect()
}

fn fleet(battlefield: &Battlefield) -> BTreeMap<String, usize> {
    battlefield
        .get_fleet_structure()
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect()
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        let player = game.player();
        Self {
            game_id: game.id(),
            player_id: player.id(),
            is_game_started: game.is_game_started(),
            is_player_move: game.is_player_move(),
            is_game_over: game.is_game_over(),
            winner: game.winner(),
            player_cells: cell_views(player.battlefield()),
            player_fleet: fleet(player.battlefield()),
            enemy_cells: cell_views(player.enemy_battlefield()),
            enemy_fleet: fleet(game.enemy().battlefield()),
        }
    }
}
