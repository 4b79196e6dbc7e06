// Non-repeating random targeting for the computer shooter.
// Uses no_std and keeps its state in a single bitboard.

use log::warn;
use rand::Rng;

use crate::{
    bitboard::BitBoard,
    common::TargetError,
    config::{BOARD_SIZE, MAX_RANDOM_ATTEMPTS},
    position::Position,
};

/// Picks shot targets uniformly at random, never returning a cell twice.
///
/// The selector owns the set of cells it has already returned. Each shooter
/// keeps its own selector for the length of a game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSelector {
    fired: BitBoard,
}

impl TargetSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next target.
    ///
    /// Draws up to [`MAX_RANDOM_ATTEMPTS`] random cells, then falls back to
    /// the first unfired cell in column-major order (A1, A2, ..., H8).
    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Position, TargetError> {
        if self.fired.is_full() {
            return Err(TargetError::NoPositionsRemaining);
        }
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let column = rng.random_range(1..=BOARD_SIZE);
            let row = rng.random_range(1..=BOARD_SIZE);
            let Ok(pos) = Position::from_ordinals(column, row) else {
                continue;
            };
            if self.fired.insert(&pos) {
                return Ok(pos);
            }
        }

        warn!(
            "no fresh target after {} random draws, scanning",
            MAX_RANDOM_ATTEMPTS
        );
        let pos = self
            .fired
            .iter_unset()
            .next()
            .ok_or(TargetError::NoPositionsRemaining)?;
        self.fired.insert(&pos);
        Ok(pos)
    }

    /// Number of cells not yet returned.
    pub fn remaining(&self) -> usize {
        BitBoard::CELLS - self.fired.count_ones()
    }

    /// `true` if `pos` has already been returned.
    pub fn has_fired(&self, pos: &Position) -> bool {
        self.fired.contains(pos)
    }

    /// Cells returned so far, column-major.
    pub fn fired(&self) -> BitBoard {
        self.fired
    }
}
