//! Commonly used types and utilities for ease of import.

pub use crate::{
    initialize_fleet, is_fleet_defeated, parse_position, place_fleet_randomly, resolve_shot,
    Column, ComputerPlayer, Fleet, Game, GameStatus, Player, Position, ShotResult,
    TargetSelector,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_fleet, print_remaining_ships, CliPlayer};
