//! Ship classes and placed ships.

use alloc::vec::Vec;
use core::fmt;

use crate::cell::{Coordinate, Grid, Sign};
use crate::common::ShipError;
use crate::config;

/// Class of ship: name, length and how many of them a fleet carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
    count: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize, count: usize) -> Self {
        Self {
            name,
            length,
            count,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Index of a ship inside its battlefield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShipId(pub u32);

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A straight, gap-free line of cells owned by one battlefield.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    id: ShipId,
    coordinates: Vec<Coordinate>,
    name: &'static str,
    is_alive: bool,
}

impl Ship {
    /// Check that `coordinates` form a ship and return them sorted along the
    /// ship's axis.
    ///
    /// All coordinates must share x or share y, and sorted along the other
    /// axis they must equal the run `first..=first + len - 1`.
    pub fn validate(coordinates: &[Coordinate]) -> Result<Vec<Coordinate>, ShipError> {
        let Some(&(x0, y0)) = coordinates.first() else {
            return Err(ShipError::WrongShipCoordinate(Vec::new()));
        };
        let same_x = coordinates.iter().all(|&(x, _)| x == x0);
        let same_y = coordinates.iter().all(|&(_, y)| y == y0);
        if !same_x && !same_y {
            return Err(ShipError::NotParallelShip(coordinates.to_vec()));
        }

        let mut sorted = coordinates.to_vec();
        sorted.sort_unstable_by_key(|&(x, y)| if same_x { y } else { x });
        let (sx, sy) = sorted[0];
        // `None` marks a run that would leave the i32 range.
        let theoretical = (0..sorted.len()).map(|i| {
            let i = i32::try_from(i).ok()?;
            if same_x {
                sy.checked_add(i).map(|y| (sx, y))
            } else {
                sx.checked_add(i).map(|x| (x, sy))
            }
        });
        if !theoretical.eq(sorted.iter().copied().map(Some)) {
            return Err(ShipError::WrongShipCoordinate(sorted));
        }
        Ok(sorted)
    }

    /// Build a ship over `coordinates` and mark its cells in `grid`.
    ///
    /// Validation runs before any cell is touched.
    pub fn new(id: ShipId, coordinates: &[Coordinate], grid: &mut Grid) -> Result<Self, ShipError> {
        let coordinates = Self::validate(coordinates)?;
        for coordinate in &coordinates {
            if let Some(cell) = grid.get_mut(coordinate) {
                cell.sign = Sign::Ship;
                cell.ship_id = Some(id);
            }
        }
        let name = config::ship_class(coordinates.len())
            .map(|class| class.name())
            .unwrap_or("unclassified");
        Ok(Ship {
            id,
            coordinates,
            name,
            is_alive: true,
        })
    }

    /// Recompute and cache whether any segment is still undamaged.
    pub fn is_ship_alive(&mut self, grid: &Grid) -> bool {
        self.is_alive = self
            .coordinates
            .iter()
            .any(|c| grid.get(c).map_or(false, |cell| cell.sign == Sign::Ship));
        self.is_alive
    }

    /// Alive state as of the last recomputation.
    pub fn is_alive(&self) -> bool {
        self.is_alive
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Segments sorted along the ship's axis.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.coordinates.contains(&coordinate)
    }
}
