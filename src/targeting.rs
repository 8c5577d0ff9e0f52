//! Targeting state kept across turns and the policies that pick shots.
//!
//! A shooter is idle while `top_target_queue` is empty and hunting while it
//! holds follow-up coordinates around a damaged, not yet sunk ship.

use alloc::vec::Vec;
use core::fmt;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::cell::Coordinate;
use crate::config::{HORIZONTAL_AROUND, VERTICAL_AROUND};

/// Coordinates a shooter may still aim at, plus the hunt queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Targets {
    width: i32,
    height: i32,
    coordinates_for_shooting: Vec<Coordinate>,
    top_target_queue: Vec<Coordinate>,
    damaged_ship_coordinates: Vec<Coordinate>,
}

impl Targets {
    /// Every playable coordinate of a `width` x `height` battlefield.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            coordinates_for_shooting: (1..width)
                .flat_map(|x| (1..height).map(move |y| (x, y)))
                .collect(),
            top_target_queue: Vec::new(),
            damaged_ship_coordinates: Vec::new(),
        }
    }

    pub fn coordinates_for_shooting(&self) -> &[Coordinate] {
        &self.coordinates_for_shooting
    }

    pub fn top_target_queue(&self) -> &[Coordinate] {
        &self.top_target_queue
    }

    pub fn damaged_ship_coordinates(&self) -> &[Coordinate] {
        &self.damaged_ship_coordinates
    }

    pub fn is_hunting(&self) -> bool {
        !self.top_target_queue.is_empty()
    }

    pub fn is_available(&self, coordinate: Coordinate) -> bool {
        self.coordinates_for_shooting.contains(&coordinate)
    }

    /// Remember a hit on the ship currently hunted.
    pub fn record_damage(&mut self, coordinate: Coordinate) {
        if !self.damaged_ship_coordinates.contains(&coordinate) {
            self.damaged_ship_coordinates.push(coordinate);
        }
    }

    /// Uniformly random entry of the hunt queue that is still available.
    pub fn pop_top_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coordinate> {
        while !self.top_target_queue.is_empty() {
            let idx = rng.random_range(0..self.top_target_queue.len());
            let coordinate = self.top_target_queue.swap_remove(idx);
            if self.is_available(coordinate) {
                self.coordinates_for_shooting.retain(|&c| c != coordinate);
                return Some(coordinate);
            }
        }
        None
    }

    /// Uniformly random coordinate nobody shot at yet.
    pub fn pop_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coordinate> {
        if self.coordinates_for_shooting.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.coordinates_for_shooting.len());
        let coordinate = self.coordinates_for_shooting.swap_remove(idx);
        self.top_target_queue.retain(|&c| c != coordinate);
        Some(coordinate)
    }

    /// Hunt queue first, random search otherwise.
    pub fn choose_shooting_coordinate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coordinate> {
        match self.pop_top_target(rng) {
            Some(coordinate) => Some(coordinate),
            None => self.pop_random(rng),
        }
    }

    /// Update the hunt queue after a hit at `coordinate`.
    ///
    /// A sunk ship resets the hunt. The first hit on a ship queues all four
    /// orthogonal neighbours; once two hits share an x (vertical ship) or a y
    /// (horizontal ship) the queue keeps only that line and grows along it.
    pub fn define_top_target_coordinates(&mut self, coordinate: Coordinate, is_killed: bool) {
        if is_killed {
            self.top_target_queue.clear();
            self.damaged_ship_coordinates.clear();
            return;
        }

        let (x, y) = coordinate;
        if self.damaged_ship_coordinates.len() <= 1 {
            for (dx, dy) in HORIZONTAL_AROUND.iter().chain(VERTICAL_AROUND.iter()) {
                self.push_top_target((x + dx, y + dy));
            }
            return;
        }

        let damaged = &self.damaged_ship_coordinates;
        let first_x = damaged[0].0;
        let is_vertical = damaged.iter().all(|&(dx, _)| dx == first_x);
        if is_vertical {
            self.top_target_queue
                .retain(|&(qx, qy)| qx == x && !damaged.contains(&(qx, qy)));
            for (dx, dy) in VERTICAL_AROUND {
                self.push_top_target((x + dx, y + dy));
            }
        } else {
            self.top_target_queue
                .retain(|&(qx, qy)| qy == y && !damaged.contains(&(qx, qy)));
            for (dx, dy) in HORIZONTAL_AROUND {
                self.push_top_target((x + dx, y + dy));
            }
        }
    }

    /// Queue `coordinate` unless it is queued already or was shot before.
    /// Border cells never enter the pool and are queued as they are.
    fn push_top_target(&mut self, coordinate: Coordinate) {
        if self.top_target_queue.contains(&coordinate)
            || self.damaged_ship_coordinates.contains(&coordinate)
            || (self.is_playable(coordinate) && !self.is_available(coordinate))
        {
            return;
        }
        self.top_target_queue.push(coordinate);
    }

    fn is_playable(&self, (x, y): Coordinate) -> bool {
        (1..self.width).contains(&x) && (1..self.height).contains(&y)
    }

    /// Drop consumed coordinates from both the shooting pool and the hunt
    /// queue.
    ///
    /// Queue entries that were never in the pool (border cells) stay queued;
    /// `pop_top_target` skips them. Cells shot earlier never re-enter the
    /// queue, see `push_top_target`.
    pub fn clear_coordinates_for_shooting<'a, I>(&mut self, coordinates: I)
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        for coordinate in coordinates {
            self.coordinates_for_shooting.retain(|c| c != coordinate);
            self.top_target_queue.retain(|c| c != coordinate);
        }
    }
}

/// Strategy deciding where a player shoots next.
pub trait ShotPolicy: Send + fmt::Debug {
    /// Pick and consume the next coordinate, or `None` when the shooter
    /// supplies coordinates itself or nothing is left.
    fn choose_target(&mut self, targets: &mut Targets, rng: &mut SmallRng) -> Option<Coordinate>;

    fn name(&self) -> &'static str;
}

/// Coordinates come from outside, e.g. a human at a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualPolicy;

impl ShotPolicy for ManualPolicy {
    fn choose_target(&mut self, _targets: &mut Targets, _rng: &mut SmallRng) -> Option<Coordinate> {
        None
    }

    fn name(&self) -> &'static str {
        "manual"
    }
}

/// Uniform random search that ignores hits.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPolicy;

impl ShotPolicy for RandomPolicy {
    fn choose_target(&mut self, targets: &mut Targets, rng: &mut SmallRng) -> Option<Coordinate> {
        targets.pop_random(rng)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Random search until a hit, then work the hunt queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuntingPolicy;

impl ShotPolicy for HuntingPolicy {
    fn choose_target(&mut self, targets: &mut Targets, rng: &mut SmallRng) -> Option<Coordinate> {
        targets.choose_shooting_coordinate(rng)
    }

    fn name(&self) -> &'static str {
        "hunting"
    }
}
