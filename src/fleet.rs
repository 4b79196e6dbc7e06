//! Fleet state: the five-ship roster, placement rules, shot resolution and
//! the win condition.

use alloc::vec::Vec;
use core::fmt;
use log::debug;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{PlacementError, ShotResult};
use crate::config::{BOARD_SIZE, NUM_SHIPS, SHIPS};
use crate::position::{Column, Position};
use crate::ship::{Orientation, Ship};

/// One side's ships plus the set of cells they occupy.
#[derive(Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
    occupied: BitBoard,
}

impl Fleet {
    /// The standard roster with no positions placed.
    pub fn new() -> Self {
        Fleet {
            ships: SHIPS.iter().map(|def| Ship::new(*def)).collect(),
            occupied: BitBoard::new(),
        }
    }

    /// Fixed layout used for the computer's fleet when randomness is off.
    pub fn preset() -> Self {
        let layout: [(Column, u8, Orientation); NUM_SHIPS] = [
            (Column::B, 4, Orientation::Vertical),
            (Column::E, 5, Orientation::Vertical),
            (Column::A, 3, Orientation::Horizontal),
            (Column::F, 8, Orientation::Horizontal),
            (Column::C, 5, Orientation::Vertical),
        ];
        let mut fleet = Fleet::new();
        for (i, (column, row, orientation)) in layout.into_iter().enumerate() {
            let cells = run(column.ordinal(), row, orientation, SHIPS[i].length());
            for pos in cells.into_iter().flatten() {
                fleet.occupied.insert(&pos);
                fleet.ships[i].add_position(pos);
            }
        }
        fleet
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Add a position to ship `ship_index` without the shape and capacity
    /// rules, keeping its hit flag. The cell must still be free.
    pub fn add_position(&mut self, ship_index: usize, pos: Position) -> Result<(), PlacementError> {
        if ship_index >= self.ships.len() {
            return Err(PlacementError::InvalidIndex);
        }
        if !self.occupied.insert(&pos) {
            return Err(PlacementError::Overlap);
        }
        self.ships[ship_index].add_position(pos);
        Ok(())
    }

    /// Cells occupied by any ship of this fleet.
    pub fn occupied(&self) -> BitBoard {
        self.occupied
    }

    /// `true` once every ship holds all of its positions.
    pub fn is_complete(&self) -> bool {
        self.ships.iter().all(Ship::is_valid)
    }

    /// Ships with at least one unhit position.
    pub fn remaining_ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().filter(|ship| !ship.all_hit())
    }

    /// Place one position of ship `ship_index`, enforcing the placement rules.
    ///
    /// The cell must be free across the whole fleet. After the first
    /// position, it must lie on the ship's line and touch one of its
    /// positions.
    pub fn place_position(&mut self, ship_index: usize, pos: Position) -> Result<(), PlacementError> {
        let ship = self.ships.get(ship_index).ok_or(PlacementError::InvalidIndex)?;
        if ship.positions().len() >= ship.size() {
            return Err(PlacementError::ShipAlreadyPlaced);
        }
        if self.occupied.contains(&pos) {
            return Err(PlacementError::Overlap);
        }
        if !ship.positions().is_empty() {
            // With two or more positions the axis is fixed, so every placed
            // cell has to share it.
            let same_column = ship.positions().iter().all(|p| p.column() == pos.column());
            let same_row = ship.positions().iter().all(|p| p.row() == pos.row());
            if !(same_column || same_row) {
                return Err(PlacementError::NotStraight);
            }
            if !ship.positions().iter().any(|p| p.is_adjacent(&pos)) {
                return Err(PlacementError::NotContiguous);
            }
        }

        let pos = pos.with_hit(false);
        self.occupied.insert(&pos);
        self.ships[ship_index].add_position(pos);
        debug!("placed {} of {}", pos, self.ships[ship_index].name());
        Ok(())
    }

    /// Place every incomplete ship at a random legal spot.
    ///
    /// Partially placed ships are cleared first. Sampling repeats until a
    /// run fits, which always happens on an 8×8 board with this roster.
    pub fn place_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in 0..self.ships.len() {
            if self.ships[i].is_valid() {
                continue;
            }
            for pos in self.ships[i].positions() {
                self.occupied.remove(pos);
            }
            self.ships[i].clear_positions();

            let len = self.ships[i].size();
            let cells = loop {
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let column = rng.random_range(1..=BOARD_SIZE);
                let row = rng.random_range(1..=BOARD_SIZE);
                let Some(cells) = run(column, row, orientation, len)
                    .into_iter()
                    .collect::<Option<Vec<_>>>()
                else {
                    continue;
                };
                if cells.iter().all(|p| !self.occupied.contains(p)) {
                    break cells;
                }
            };
            for pos in cells {
                self.occupied.insert(&pos);
                self.ships[i].add_position(pos);
            }
            debug!("randomly placed {}: {:?}", self.ships[i].name(), self.ships[i]);
        }
    }

    /// Fire at `shot`, marking every matching position as hit.
    ///
    /// Returns `Sink` when the ship that was hit has no unhit position left,
    /// including when the shot repeats one that already sank it.
    pub fn resolve_shot(&mut self, shot: &Position) -> ShotResult {
        let mut hit_ship = None;
        for (i, ship) in self.ships.iter_mut().enumerate() {
            for pos in ship.positions_mut() {
                if pos.same_cell(shot) {
                    pos.mark_hit();
                    hit_ship = Some(i);
                }
            }
        }
        let result = match hit_ship {
            None => ShotResult::Miss,
            Some(i) if self.ships[i].all_hit() => ShotResult::Sink(self.ships[i].name()),
            Some(_) => ShotResult::Hit,
        };
        debug!("shot at {}: {:?}", shot, result);
        result
    }

    /// `true` when no ship has an unhit position left.
    pub fn is_defeated(&self) -> bool {
        self.ships.iter().all(Ship::all_hit)
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fleet")
            .field("ships", &self.ships)
            .field("occupied", &self.occupied)
            .finish()
    }
}

/// Cells of a `len`-long run starting at 1-based (`column`, `row`). Cells past
/// the board edge come back as `None`.
fn run(column: u8, row: u8, orientation: Orientation, len: usize) -> Vec<Option<Position>> {
    (0..len as u8)
        .map(|k| match orientation {
            Orientation::Horizontal => Position::from_ordinals(column + k, row).ok(),
            Orientation::Vertical => Position::from_ordinals(column, row + k).ok(),
        })
        .collect()
}

/// The standard roster with no positions placed.
pub fn initialize_fleet() -> Fleet {
    Fleet::new()
}

/// Free-function form of [`Fleet::place_randomly`].
pub fn place_fleet_randomly<R: Rng + ?Sized>(fleet: &mut Fleet, rng: &mut R) {
    fleet.place_randomly(rng)
}

/// Free-function form of [`Fleet::resolve_shot`].
pub fn resolve_shot(fleet: &mut Fleet, shot: &Position) -> ShotResult {
    fleet.resolve_shot(shot)
}

/// Free-function form of [`Fleet::is_defeated`].
pub fn is_fleet_defeated(fleet: &Fleet) -> bool {
    fleet.is_defeated()
}
