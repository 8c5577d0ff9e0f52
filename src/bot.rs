//! Computer opponent: randomized fleet placement plus the hunting policy.

use alloc::boxed::Box;
use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use rand::Rng;

use crate::battlefield::Battlefield;
use crate::cell::{Coordinate, Sign};
use crate::common::BattlefieldError;
use crate::config::{AREA_AROUND, MAX_PLACEMENT_ATTEMPTS};
use crate::player::{Player, PlayerId};
use crate::targeting::HuntingPolicy;

/// Bot that places its whole fleet at random and hunts damaged ships.
pub fn easy_bot<R: Rng + ?Sized>(
    id: PlayerId,
    name: &str,
    enemy_name: &str,
    rng: &mut R,
) -> Result<Player, BattlefieldError> {
    let mut bot = Player::new(id, name, enemy_name, Box::new(HuntingPolicy));
    place_fleet(bot.battlefield_mut(), rng)?;
    Ok(bot)
}

/// Place every ship still missing on `battlefield` at random.
///
/// Each pass works largest ship first on a copy of the battlefield and is
/// committed only when the whole fleet fits. Gives up after
/// `MAX_PLACEMENT_ATTEMPTS` passes.
pub fn place_fleet<R: Rng + ?Sized>(battlefield: &mut Battlefield, rng: &mut R) -> Result<(), BattlefieldError> {
    let mut last_err = None;
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let mut candidate = battlefield.clone();
        match fill_battlefield(&mut candidate, rng) {
            Ok(()) => {
                *battlefield = candidate;
                return Ok(());
            }
            Err(e) => last_err = Some(e),
        }
    }
    Err(last_err.unwrap_or(BattlefieldError::UnableToPlaceShip(0)))
}

fn fill_battlefield<R: Rng + ?Sized>(battlefield: &mut Battlefield, rng: &mut R) -> Result<(), BattlefieldError> {
    let mut empty_cells = free_cells(battlefield);
    let mut sizes = battlefield.remaining_ship_sizes().to_vec();
    sizes.sort_unstable_by(|a, b| b.cmp(a));

    for ship_len in sizes {
        let mut candidates = ship_candidates(ship_len, &empty_cells);
        let mut placed = None;
        while !candidates.is_empty() {
            let idx = rng.random_range(0..candidates.len());
            let coordinates = candidates.swap_remove(idx);
            if battlefield.set_ship_coordinates(&coordinates).is_ok() {
                placed = Some(coordinates);
                break;
            }
        }
        let coordinates = placed.ok_or(BattlefieldError::UnableToPlaceShip(ship_len))?;
        clear_not_empty_coordinates(&coordinates, &mut empty_cells);
    }
    Ok(())
}

/// Playable cells that are empty and have no occupied neighbour.
fn free_cells(battlefield: &Battlefield) -> BTreeSet<Coordinate> {
    battlefield
        .playable_coordinates()
        .filter(|&(x, y)| {
            core::iter::once((0, 0))
                .chain(AREA_AROUND)
                .all(|(dx, dy)| {
                    battlefield
                        .sign_at((x + dx, y + dy))
                        .map_or(true, |sign| sign == Sign::Empty)
                })
        })
        .collect()
}

/// Every horizontal and vertical run of `ship_len` free cells.
fn ship_candidates(ship_len: usize, empty_cells: &BTreeSet<Coordinate>) -> Vec<Vec<Coordinate>> {
    let directions: &[Coordinate] = if ship_len == 1 { &[(1, 0)] } else { &[(1, 0), (0, 1)] };
    let mut candidates = Vec::new();
    for &(x, y) in empty_cells {
        for &(dx, dy) in directions {
            let coordinates: Vec<Coordinate> = (0..ship_len as i32)
                .map(|i| (x + i * dx, y + i * dy))
                .collect();
            if coordinates.iter().all(|c| empty_cells.contains(c)) {
                candidates.push(coordinates);
            }
        }
    }
    candidates
}

/// Remove a placed ship's footprint and its one-cell halo.
fn clear_not_empty_coordinates(coordinates: &[Coordinate], empty_cells: &mut BTreeSet<Coordinate>) {
    for &(x, y) in coordinates {
        empty_cells.remove(&(x, y));
        for (dx, dy) in AREA_AROUND {
            empty_cells.remove(&(x + dx, y + dy));
        }
    }
}
