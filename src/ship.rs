//! Ship definitions: the roster entry and the placed vessel.

use alloc::vec::Vec;
use core::fmt;

use crate::position::Position;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Along a row, columns increasing.
    Horizontal,
    /// Along a column, rows increasing.
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A named ship holding the positions placed for it so far.
///
/// The ship is a plain ordered container: it does not check capacity or
/// shape. [`Fleet`](crate::Fleet) enforces both.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    positions: Vec<Position>,
}

impl Ship {
    /// An empty ship of the given type.
    pub fn new(ship_type: ShipType) -> Self {
        Self {
            ship_type,
            positions: Vec::with_capacity(ship_type.length()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn size(&self) -> usize {
        self.ship_type.length()
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub(crate) fn positions_mut(&mut self) -> &mut [Position] {
        &mut self.positions
    }

    /// Append a position.
    pub fn add_position(&mut self, pos: Position) {
        self.positions.push(pos);
    }

    pub(crate) fn clear_positions(&mut self) {
        self.positions.clear();
    }

    /// `true` once the ship holds exactly `size` positions.
    pub fn is_valid(&self) -> bool {
        self.positions.len() == self.size()
    }

    /// `true` if the ship is complete and every position is hit.
    pub fn is_sunk(&self) -> bool {
        !self.positions.is_empty() && self.is_valid() && self.all_hit()
    }

    /// `true` if no position is left unhit. Vacuously true for an empty ship.
    pub fn all_hit(&self) -> bool {
        self.positions.iter().all(Position::is_hit)
    }

    /// Number of positions already hit.
    pub fn hits(&self) -> usize {
        self.positions.iter().filter(|p| p.is_hit()).count()
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.positions.iter().any(|p| p.same_cell(pos))
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ship {{ name: \"{}\", size: {}, positions: [", self.name(), self.size())?;
        for (i, pos) in self.positions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}{}", pos, if pos.is_hit() { "*" } else { "" })?;
        }
        write!(f, "] }}")
    }
}
