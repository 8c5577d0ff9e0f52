//! A player: own battlefield, fogged view of the opponent, targeting state.

use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;
use core::fmt;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::battlefield::{Battlefield, ShotReport};
use crate::cell::{Cell, Coordinate, Sign};
use crate::common::BattlefieldError;
use crate::config::{AREA_AROUND, DIAGONAL_AROUND};
use crate::ship::ShipId;
use crate::targeting::{ManualPolicy, ShotPolicy, Targets};

/// Opaque player identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        PlayerId(rng.random())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[derive(Debug)]
pub struct Player {
    id: PlayerId,
    battlefield: Battlefield,
    enemy_battlefield: Battlefield,
    targets: Targets,
    policy: Box<dyn ShotPolicy>,
    is_game_over: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: &str, enemy_name: &str, policy: Box<dyn ShotPolicy>) -> Self {
        let battlefield = Battlefield::new(name, true);
        let enemy_battlefield = Battlefield::new(enemy_name, false);
        let targets = Targets::new(enemy_battlefield.width(), enemy_battlefield.height());
        Self {
            id,
            battlefield,
            enemy_battlefield,
            targets,
            policy,
            is_game_over: false,
        }
    }

    /// Player whose shots are supplied from outside.
    pub fn human(id: PlayerId, name: &str, enemy_name: &str) -> Self {
        Self::new(id, name, enemy_name, Box::new(ManualPolicy))
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.battlefield.name()
    }

    pub fn battlefield(&self) -> &Battlefield {
        &self.battlefield
    }

    pub(crate) fn battlefield_mut(&mut self) -> &mut Battlefield {
        &mut self.battlefield
    }

    /// What this player knows about the opponent's grid.
    pub fn enemy_battlefield(&self) -> &Battlefield {
        &self.enemy_battlefield
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    pub fn targets_mut(&mut self) -> &mut Targets {
        &mut self.targets
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// `true` once every ship of this player is sunk.
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn is_all_ships_added(&self) -> bool {
        self.battlefield.is_all_ships_added()
    }

    pub fn set_ship_coordinates(&mut self, coordinates: &[Coordinate]) -> Result<ShipId, BattlefieldError> {
        self.battlefield.set_ship_coordinates(coordinates)
    }

    /// Record the outcome of this player's shot on the enemy view.
    ///
    /// `shooting_results` is the whole cascade returned by the opponent, so
    /// every listed coordinate leaves the pool of shooting candidates.
    pub fn shoot(&mut self, shooting_results: &BTreeMap<Coordinate, Sign>, is_killed: bool) {
        for (&coordinate, &sign) in shooting_results {
            // Cascades name grid cells only, border ring included. Anything
            // off the grid carries no information and is skipped.
            if self.enemy_battlefield.set_sign(coordinate, sign).is_err() {
                continue;
            }
            if sign == Sign::Hit {
                self.targets.record_damage(coordinate);
                self.targets.define_top_target_coordinates(coordinate, is_killed);
            }
        }
        self.targets.clear_coordinates_for_shooting(shooting_results.keys());
    }

    /// Take the opponent's shot on the own battlefield.
    ///
    /// A hit reveals the four diagonal neighbours as misses since ships never
    /// touch; a sunk ship also reveals its whole surrounding ring.
    pub fn enemy_shooting(&mut self, coordinate: Coordinate) -> Result<ShotReport, BattlefieldError> {
        let mut report = self.battlefield.shoot(coordinate)?;
        if report.is_hit() {
            for cell in self.set_signs_for_lucky_shot(coordinate, report.is_killed) {
                report.cells.insert(cell.coordinate(), cell);
            }
        }
        self.is_game_over = self.battlefield.is_game_over();
        Ok(report)
    }

    /// Coordinates whose state is deducible after a hit at `coordinate`,
    /// the hit itself included.
    pub fn coordinates_for_update(&self, coordinate: Coordinate, is_killed: bool) -> BTreeSet<Coordinate> {
        let (x, y) = coordinate;
        let mut coordinates: BTreeSet<Coordinate> = DIAGONAL_AROUND
            .iter()
            .map(|&(dx, dy)| (x + dx, y + dy))
            .collect();
        coordinates.insert(coordinate);
        if is_killed {
            if let Some(ship) = self.battlefield.ship_at(coordinate) {
                for &(sx, sy) in ship.coordinates() {
                    coordinates.insert((sx, sy));
                    coordinates.extend(AREA_AROUND.iter().map(|&(dx, dy)| (sx + dx, sy + dy)));
                }
            }
        }
        coordinates
            .into_iter()
            .filter(|&c| self.battlefield.cell(c).is_some())
            .collect()
    }

    /// Mark the deducible water around a hit as missed and return the
    /// resulting cells.
    pub fn set_signs_for_lucky_shot(&mut self, coordinate: Coordinate, is_killed: bool) -> Vec<Cell> {
        self.coordinates_for_update(coordinate, is_killed)
            .into_iter()
            .filter_map(|c| self.battlefield.reveal_miss(c))
            .collect()
    }

    /// Next coordinate according to the player's policy.
    pub fn choose_shooting_coordinate(&mut self, rng: &mut SmallRng) -> Option<Coordinate> {
        self.policy.choose_target(&mut self.targets, rng)
    }

    pub fn define_top_target_coordinates(&mut self, coordinate: Coordinate, is_killed: bool) {
        self.targets.define_top_target_coordinates(coordinate, is_killed);
    }

    pub fn clear_coordinates_for_shooting(&mut self, coordinates: &[Coordinate]) {
        self.targets.clear_coordinates_for_shooting(coordinates);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "------------{}'s battlefield---------", self.battlefield.name())?;
        writeln!(f, "{}", self.battlefield)?;
        writeln!(f, "------------{}'s battlefield---------", self.enemy_battlefield.name())?;
        write!(f, "{}", self.enemy_battlefield)
    }
}
