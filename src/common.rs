//! Error types shared by ships, battlefields and games.

use alloc::vec::Vec;
use core::fmt;

use crate::cell::Coordinate;

/// Errors raised while building a ship from a set of coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipError {
    /// Coordinates share neither the x nor the y axis.
    NotParallelShip(Vec<Coordinate>),
    /// Coordinates are parallel to an axis but have gaps or duplicates.
    WrongShipCoordinate(Vec<Coordinate>),
}

impl ShipError {
    pub fn code(&self) -> &'static str {
        match self {
            ShipError::NotParallelShip(_) => "NOT_PARALLEL_SHIP",
            ShipError::WrongShipCoordinate(_) => "WRONG_SHIP_COORDINATE",
        }
    }
}

impl fmt::Display for ShipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipError::NotParallelShip(coords) => {
                write!(f, "Ship with coordinates {:?} is not parallel to the x or y axis", coords)
            }
            ShipError::WrongShipCoordinate(coords) => {
                write!(f, "Ship with coordinates {:?} is not a contiguous line", coords)
            }
        }
    }
}

/// Errors returned by battlefield placement and shooting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattlefieldError {
    /// The grid has no cell with this coordinate.
    CellNotExist(Coordinate),
    /// At least one coordinate lies on the border or outside the grid.
    AreaOutsideBattlefield(Vec<Coordinate>),
    /// At least one target cell is already occupied.
    BlockedArea(Vec<Coordinate>),
    /// A cell next to the target cells (diagonals included) is occupied.
    BlockedAreaAround(Vec<Coordinate>),
    /// No ship of this length is left to place.
    ExtraShipInFleet(usize),
    /// The cell was shot at before.
    ShotCellEarlier(Coordinate),
    /// Ship construction rejected the coordinates.
    Ship(ShipError),
    /// Randomized placement found no room for a ship of this length.
    UnableToPlaceShip(usize),
}

impl BattlefieldError {
    pub fn code(&self) -> &'static str {
        match self {
            BattlefieldError::CellNotExist(_) => "CELL_NOT_EXIST",
            BattlefieldError::AreaOutsideBattlefield(_) => "AREA_OUTSIDE_BATTLEFIELD",
            BattlefieldError::BlockedArea(_) => "BLOCKED_AREA",
            BattlefieldError::BlockedAreaAround(_) => "BLOCKED_AREA_AROUND",
            BattlefieldError::ExtraShipInFleet(_) => "EXTRA_SHIP_IN_FLEET",
            BattlefieldError::ShotCellEarlier(_) => "SHOT_CELL_EARLIER",
            BattlefieldError::Ship(e) => e.code(),
            BattlefieldError::UnableToPlaceShip(_) => "UNABLE_TO_PLACE_SHIP",
        }
    }
}

impl From<ShipError> for BattlefieldError {
    fn from(err: ShipError) -> Self {
        BattlefieldError::Ship(err)
    }
}

impl fmt::Display for BattlefieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattlefieldError::CellNotExist(c) => write!(f, "Cell with coordinate {:?} does not exist", c),
            BattlefieldError::AreaOutsideBattlefield(coords) => {
                write!(f, "Area with coordinates {:?} is outside the battlefield", coords)
            }
            BattlefieldError::BlockedArea(coords) => {
                write!(f, "Area with coordinates {:?} is not empty", coords)
            }
            BattlefieldError::BlockedAreaAround(coords) => {
                write!(f, "Area around coordinates {:?} is not empty", coords)
            }
            BattlefieldError::ExtraShipInFleet(len) => {
                write!(f, "Couldn't add ship with such size: {}", len)
            }
            BattlefieldError::ShotCellEarlier(c) => {
                write!(f, "Cell with coordinate {:?} was shot already", c)
            }
            BattlefieldError::Ship(e) => write!(f, "{}", e),
            BattlefieldError::UnableToPlaceShip(len) => {
                write!(f, "Unable to place ship with size {}", len)
            }
        }
    }
}

/// Errors returned by game lifecycle and turn checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The action needs a started game, or the fleets are incomplete.
    NotStartedGame,
    /// The action is only allowed before the game starts.
    StartedGame,
    /// The other side owns the turn.
    NotYourTurn,
    /// The game already has a winner.
    GameOver,
    /// The shooter's policy produced no coordinate.
    NoTargetAvailable,
    Battlefield(BattlefieldError),
}

impl GameError {
    pub fn code(&self) -> &'static str {
        match self {
            GameError::NotStartedGame => "NOT_STARTED_GAME",
            GameError::StartedGame => "STARTED_GAME",
            GameError::NotYourTurn => "NOT_YOUR_TURN",
            GameError::GameOver => "GAME_OVER",
            GameError::NoTargetAvailable => "NO_TARGET_AVAILABLE",
            GameError::Battlefield(e) => e.code(),
        }
    }
}

impl From<BattlefieldError> for GameError {
    fn from(err: BattlefieldError) -> Self {
        GameError::Battlefield(err)
    }
}

impl From<ShipError> for GameError {
    fn from(err: ShipError) -> Self {
        GameError::Battlefield(BattlefieldError::Ship(err))
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotStartedGame => write!(f, "Game is not started"),
            GameError::StartedGame => write!(f, "Game is already started"),
            GameError::NotYourTurn => write!(f, "Right now is not your turn for shooting"),
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::NoTargetAvailable => write!(f, "No coordinate available for shooting"),
            GameError::Battlefield(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShipError {}
#[cfg(feature = "std")]
impl std::error::Error for BattlefieldError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
