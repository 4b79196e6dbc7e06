//! Fixed 8×8 bitboard used as the fleet's occupied set and the selector's
//! fired set.
//!
//! Cells are packed into a `u64` in column-major order: bit 0 is `A1`,
//! bit 7 is `A8`, bit 8 is `B1` and so on. Iteration follows the same order.

use core::fmt;

use crate::config::BOARD_SIZE;
use crate::position::{Column, Position};

const N: usize = BOARD_SIZE as usize;

/// Set of board cells. The hit flag of inserted positions is ignored.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct BitBoard {
    bits: u64,
}

impl BitBoard {
    /// Number of cells on the board.
    pub const CELLS: usize = N * N;

    /// Create an empty bitboard.
    #[inline]
    pub const fn new() -> Self {
        BitBoard { bits: 0 }
    }

    #[inline]
    fn index(pos: &Position) -> usize {
        (pos.column().ordinal() as usize - 1) * N + (pos.row() as usize - 1)
    }

    /// Cell at bit `idx`, or `None` past the end of the board.
    fn cell(idx: usize) -> Option<Position> {
        if idx >= Self::CELLS {
            return None;
        }
        let column = Column::ALL[idx / N];
        Position::new(column, (idx % N) as u8 + 1).ok()
    }

    /// Returns the number of set cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cells are set.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns true if every cell of the board is set.
    pub fn is_full(&self) -> bool {
        self.bits == u64::MAX
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.bits & (1 << Self::index(pos)) != 0
    }

    /// Sets the cell, returning `false` if it was already set.
    pub fn insert(&mut self, pos: &Position) -> bool {
        let fresh = !self.contains(pos);
        self.bits |= 1 << Self::index(pos);
        fresh
    }

    /// Clears the cell.
    pub fn remove(&mut self, pos: &Position) {
        self.bits &= !(1 << Self::index(pos));
    }

    /// Iterator over the set cells, column-major.
    pub fn iter(&self) -> SetCells {
        SetCells {
            bits: self.bits,
            idx: 0,
        }
    }

    /// Iterator over the unset cells, column-major.
    pub fn iter_unset(&self) -> SetCells {
        SetCells {
            bits: !self.bits,
            idx: 0,
        }
    }
}

impl<'a> FromIterator<&'a Position> for BitBoard {
    fn from_iter<I: IntoIterator<Item = &'a Position>>(iter: I) -> Self {
        let mut board = BitBoard::new();
        for pos in iter {
            board.insert(pos);
        }
        board
    }
}

/// Iterator over the set bits of a [`BitBoard`].
pub struct SetCells {
    bits: u64,
    idx: usize,
}

impl Iterator for SetCells {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < BitBoard::CELLS {
            let idx = self.idx;
            self.idx += 1;
            if self.bits & (1 << idx) != 0 {
                return BitBoard::cell(idx);
            }
        }
        None
    }
}

impl fmt::Debug for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard:")?;
        for row in 1..=BOARD_SIZE {
            for column in Column::ALL {
                let bit = match Position::new(column, row) {
                    Ok(pos) if self.contains(&pos) => '■',
                    _ => '□',
                };
                write!(f, "{}", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
