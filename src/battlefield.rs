//! A player's grid: ship placement, shot resolution and fleet queries.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::cell::{Cell, Coordinate, Grid, Sign};
use crate::common::BattlefieldError;
use crate::config::{self, AREA_AROUND, FLEET};
use crate::ship::{Ship, ShipId};

/// Cells touched by one shot and whether the shot sank a ship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotReport {
    /// Coordinate that was aimed at.
    pub target: Coordinate,
    /// Every cell whose state the shooter learns about, target included.
    pub cells: BTreeMap<Coordinate, Cell>,
    pub is_killed: bool,
}

impl ShotReport {
    fn single(cell: Cell, is_killed: bool) -> Self {
        let mut cells = BTreeMap::new();
        cells.insert(cell.coordinate(), cell);
        Self {
            target: cell.coordinate(),
            cells,
            is_killed,
        }
    }

    /// Sign of the aimed-at cell after the shot.
    pub fn target_sign(&self) -> Sign {
        self.cells
            .get(&self.target)
            .map_or(Sign::Empty, |cell| cell.sign)
    }

    pub fn is_hit(&self) -> bool {
        self.target_sign() == Sign::Hit
    }

    /// Coordinate to sign view, the form a shooter records on its enemy view.
    pub fn signs(&self) -> BTreeMap<Coordinate, Sign> {
        self.cells.iter().map(|(&c, cell)| (c, cell.sign)).collect()
    }
}

/// Grid of cells plus the ships placed on it.
///
/// Keys cover `[0, width] x [0, height]`; only `[1, width - 1] x [1, height - 1]`
/// is playable, the outer ring stays empty as a buffer.
#[derive(Debug, Clone)]
pub struct Battlefield {
    name: String,
    width: i32,
    height: i32,
    grid: Grid,
    ships: BTreeMap<ShipId, Ship>,
    remaining_ship_sizes: Vec<usize>,
    next_ship_id: u32,
    is_game_over: bool,
    is_visible: bool,
}

impl Battlefield {
    /// Standard 11x11 battlefield.
    pub fn new(name: &str, is_visible: bool) -> Self {
        Self::with_size(
            name,
            config::BATTLEFIELD_WIDTH,
            config::BATTLEFIELD_HEIGHT,
            is_visible,
        )
    }

    pub fn with_size(name: &str, width: i32, height: i32, is_visible: bool) -> Self {
        let grid = (0..=width)
            .flat_map(|x| (0..=height).map(move |y| ((x, y), Cell::new(x, y))))
            .collect();
        Battlefield {
            name: String::from(name),
            width,
            height,
            grid,
            ships: BTreeMap::new(),
            remaining_ship_sizes: config::initial_ship_sizes(),
            next_ship_id: 0,
            is_game_over: false,
            is_visible,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    /// `true` once a shot left no ship segment standing.
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn cell(&self, coordinate: Coordinate) -> Option<&Cell> {
        self.grid.get(&coordinate)
    }

    pub fn sign_at(&self, coordinate: Coordinate) -> Option<Sign> {
        self.grid.get(&coordinate).map(|cell| cell.sign)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.values()
    }

    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.values()
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(&id)
    }

    /// Ship occupying `coordinate`, hit or not.
    pub fn ship_at(&self, coordinate: Coordinate) -> Option<&Ship> {
        self.cell(coordinate)
            .and_then(|cell| cell.ship_id)
            .and_then(|id| self.ships.get(&id))
    }

    /// Ship lengths still waiting to be placed, largest first.
    pub fn remaining_ship_sizes(&self) -> &[usize] {
        &self.remaining_ship_sizes
    }

    pub fn is_all_ships_added(&self) -> bool {
        self.remaining_ship_sizes.is_empty()
    }

    /// `true` if `coordinate` lies strictly inside the border.
    pub fn is_playable(&self, (x, y): Coordinate) -> bool {
        0 < x && x < self.width && 0 < y && y < self.height
    }

    /// Playable coordinates, column by column.
    pub fn playable_coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let (width, height) = (self.width, self.height);
        (1..width).flat_map(move |x| (1..height).map(move |y| (x, y)))
    }

    fn is_area_around_empty(&self, (x, y): Coordinate) -> bool {
        AREA_AROUND.iter().all(|&(dx, dy)| {
            self.sign_at((x + dx, y + dy))
                .map_or(true, |sign| sign == Sign::Empty)
        })
    }

    /// Place a ship over `coordinates`.
    ///
    /// Checks run in order: playable region, empty target cells, empty
    /// 8-neighbourhood, ship length still available, then ship shape. The
    /// first failing check is returned and nothing is modified.
    pub fn set_ship_coordinates(&mut self, coordinates: &[Coordinate]) -> Result<ShipId, BattlefieldError> {
        if !coordinates.iter().all(|&c| self.is_playable(c)) {
            return Err(BattlefieldError::AreaOutsideBattlefield(coordinates.to_vec()));
        }
        if !coordinates
            .iter()
            .all(|&c| self.sign_at(c) == Some(Sign::Empty))
        {
            return Err(BattlefieldError::BlockedArea(coordinates.to_vec()));
        }
        if !coordinates.iter().all(|&c| self.is_area_around_empty(c)) {
            return Err(BattlefieldError::BlockedAreaAround(coordinates.to_vec()));
        }
        let size_index = self
            .remaining_ship_sizes
            .iter()
            .position(|&size| size == coordinates.len())
            .ok_or(BattlefieldError::ExtraShipInFleet(coordinates.len()))?;

        let id = ShipId(self.next_ship_id);
        let ship = Ship::new(id, coordinates, &mut self.grid)?;
        self.remaining_ship_sizes.remove(size_index);
        self.next_ship_id += 1;
        self.ships.insert(id, ship);
        Ok(id)
    }

    /// Shoot at `coordinate`: water becomes a miss, a ship segment a hit.
    pub fn shoot(&mut self, coordinate: Coordinate) -> Result<ShotReport, BattlefieldError> {
        if !self.grid.contains_key(&coordinate) {
            return Err(BattlefieldError::CellNotExist(coordinate));
        }
        if !self.is_playable(coordinate) {
            return Err(BattlefieldError::AreaOutsideBattlefield(alloc::vec![coordinate]));
        }
        let cell = self
            .grid
            .get_mut(&coordinate)
            .ok_or(BattlefieldError::CellNotExist(coordinate))?;
        match cell.sign {
            Sign::Empty => cell.sign = Sign::Miss,
            Sign::Ship => cell.sign = Sign::Hit,
            Sign::Miss | Sign::Hit => return Err(BattlefieldError::ShotCellEarlier(coordinate)),
        }
        let cell = *cell;

        let mut ship_sunk = false;
        if cell.sign == Sign::Hit {
            if let Some(ship) = cell.ship_id.and_then(|id| self.ships.get_mut(&id)) {
                ship_sunk = !ship.is_ship_alive(&self.grid);
            }
        }
        self.update_game_over();
        Ok(ShotReport::single(cell, ship_sunk))
    }

    fn update_game_over(&mut self) {
        self.is_game_over = !self.grid.values().any(|cell| cell.sign == Sign::Ship);
    }

    /// Record a sign learned about the opponent's grid.
    pub fn set_sign(&mut self, coordinate: Coordinate, sign: Sign) -> Result<(), BattlefieldError> {
        let cell = self
            .grid
            .get_mut(&coordinate)
            .ok_or(BattlefieldError::CellNotExist(coordinate))?;
        cell.sign = sign;
        Ok(())
    }

    /// Turn untouched water at `coordinate` into a miss. Returns the cell as
    /// it is afterwards.
    pub fn reveal_miss(&mut self, coordinate: Coordinate) -> Option<Cell> {
        let cell = self.grid.get_mut(&coordinate)?;
        if cell.sign == Sign::Empty {
            cell.sign = Sign::Miss;
        }
        Some(*cell)
    }

    /// Alive ships per class, every class listed.
    pub fn get_fleet_structure(&self) -> BTreeMap<&'static str, usize> {
        let mut structure: BTreeMap<&'static str, usize> =
            FLEET.iter().map(|class| (class.name(), 0)).collect();
        for ship in self.ships.values().filter(|ship| ship.is_alive()) {
            *structure.entry(ship.name()).or_insert(0) += 1;
        }
        structure
    }

    /// Cells of the playable region as an opponent may see them.
    pub fn visible_cells(&self) -> Vec<Cell> {
        self.playable_coordinates()
            .filter_map(|c| self.grid.get(&c))
            .map(|cell| {
                let mut cell = *cell;
                if !self.is_visible && cell.sign == Sign::Ship {
                    cell.sign = Sign::Empty;
                    cell.ship_id = None;
                }
                cell
            })
            .collect()
    }
}

impl fmt::Display for Battlefield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 1..self.height {
            if y > 1 {
                writeln!(f)?;
            }
            for x in 1..self.width {
                if x > 1 {
                    f.write_str(" ")?;
                }
                let sign = self.sign_at((x, y)).unwrap_or(Sign::Empty);
                let sign = if !self.is_visible && sign == Sign::Ship {
                    Sign::Empty
                } else {
                    sign
                };
                f.write_str(sign.symbol())?;
            }
        }
        Ok(())
    }
}
