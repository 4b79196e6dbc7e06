#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod bitboard;
mod common;
mod config;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
#[cfg(feature = "std")]
mod player_cli;
mod position;
pub mod prelude;
mod ship;

pub use ai::*;
pub use bitboard::{BitBoard, SetCells};
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env};
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use position::*;
pub use ship::*;
