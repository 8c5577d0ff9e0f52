//! Grid cells and their marks.

use alloc::collections::BTreeMap;
use core::fmt;

use crate::ship::ShipId;

/// `(x, y)` position on a battlefield grid. `x` grows to the right, `y` down.
pub type Coordinate = (i32, i32);

/// Grid storage owned by a battlefield.
pub type Grid = BTreeMap<Coordinate, Cell>;

/// Mark carried by a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Sign {
    /// Water nobody shot at.
    Empty,
    /// Undamaged ship segment.
    Ship,
    /// Shot into water.
    Miss,
    /// Shot into a ship segment.
    Hit,
}

impl Sign {
    /// Single character used by text renderings.
    pub const fn symbol(self) -> &'static str {
        match self {
            Sign::Empty => " ",
            Sign::Ship => "0",
            Sign::Miss => "*",
            Sign::Hit => "X",
        }
    }

    /// `true` once somebody shot at the cell.
    pub const fn is_shot(self) -> bool {
        matches!(self, Sign::Miss | Sign::Hit)
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Atomic grid unit. The owning ship is referenced by id only; the
/// battlefield resolves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub sign: Sign,
    pub ship_id: Option<ShipId>,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            sign: Sign::Empty,
            ship_id: None,
        }
    }

    pub const fn coordinate(&self) -> Coordinate {
        (self.x, self.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.sign.fmt(f)
    }
}
