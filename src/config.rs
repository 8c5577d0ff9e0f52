use crate::cell::Coordinate;
use crate::ship::ShipClass;

/// Grid width including both border columns. Playable columns are `1..WIDTH`.
pub const BATTLEFIELD_WIDTH: i32 = 11;
/// Grid height including both border rows. Playable rows are `1..HEIGHT`.
pub const BATTLEFIELD_HEIGHT: i32 = 11;

pub const NUM_SHIP_CLASSES: usize = 4;
/// Fleet composition, largest class first.
pub const FLEET: [ShipClass; NUM_SHIP_CLASSES] = [
    ShipClass::new("battleship", 4, 1),
    ShipClass::new("cruiser", 3, 2),
    ShipClass::new("destroyer", 2, 3),
    ShipClass::new("patrol_boat", 1, 4),
];

/// Total number of ships every player places before the game starts.
pub const SHIPS_IN_FLEET: usize = 1 + 2 + 3 + 4;

pub const DIAGONAL_AROUND: [Coordinate; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const HORIZONTAL_AROUND: [Coordinate; 2] = [(-1, 0), (1, 0)];
pub const VERTICAL_AROUND: [Coordinate; 2] = [(0, -1), (0, 1)];
/// Full 8-neighbourhood.
pub const AREA_AROUND: [Coordinate; 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

/// Number of complete greedy passes tried by randomized fleet placement.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

pub const DEFAULT_PLAYER_NAME: &str = "Player";
pub const DEFAULT_BOT_NAME: &str = "Bot";

/// Ship class for a given ship length, if the fleet has one.
pub fn ship_class(length: usize) -> Option<ShipClass> {
    FLEET.iter().copied().find(|class| class.length() == length)
}

/// Ship lengths every player has to place, largest first:
/// `[4, 3, 3, 2, 2, 2, 1, 1, 1, 1]`.
pub fn initial_ship_sizes() -> alloc::vec::Vec<usize> {
    FLEET
        .iter()
        .flat_map(|class| core::iter::repeat(class.length()).take(class.count()))
        .collect()
}
