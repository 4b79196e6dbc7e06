//! Common types for the engine: error enums and shot results.

use thiserror::Error;

/// Result of resolving a shot against a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotResult {
    /// Shot hit a ship that still has unhit positions.
    Hit,
    /// Shot missed all ships.
    Miss,
    /// Shot left a ship with every position hit, carrying its name.
    Sink(&'static str),
}

impl ShotResult {
    /// `true` for [`ShotResult::Hit`] and [`ShotResult::Sink`].
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotResult::Miss)
    }

    /// Name of the sunk ship, if this shot reports one.
    pub fn sunk_ship(&self) -> Option<&'static str> {
        match self {
            ShotResult::Sink(name) => Some(name),
            _ => None,
        }
    }
}

/// Errors returned when turning text into a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PositionError {
    /// Input is missing or blank.
    #[error("Invalid position input")]
    InvalidInput,
    /// Input is not a letter A-H followed by a digit 1-8.
    #[error("Position outside of board (A-H and 1-8)")]
    OutOfBounds,
}

/// Errors returned by interactive ship placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Ship index is not part of the fleet.
    #[error("Ship index is out of range")]
    InvalidIndex,
    /// Ship already holds as many positions as its size.
    #[error("Ship is already fully placed")]
    ShipAlreadyPlaced,
    /// Cell is already taken by a ship of this fleet.
    #[error("Position overlaps with another ship")]
    Overlap,
    /// Cell does not share the ship's row or column.
    #[error("Ship positions must form a straight line")]
    NotStraight,
    /// Cell is not next to any position of the ship.
    #[error("Ship positions must be contiguous")]
    NotContiguous,
}

/// Errors returned by the automated target selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TargetError {
    /// Every board cell has already been returned.
    #[error("No valid positions remaining")]
    NoPositionsRemaining,
}

/// Errors returned when starting a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A fleet still has a ship without all of its positions.
    #[error("Ship {0} is not fully placed")]
    FleetIncomplete(&'static str),
}
