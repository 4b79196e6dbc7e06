//! Board coordinates: the closed `Column` enum, `Position`, and text parsing.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use crate::common::PositionError;
use crate::config::BOARD_SIZE;

/// Board column, `A` (leftmost) through `H`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Column {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl Column {
    /// All columns in board order.
    pub const ALL: [Column; BOARD_SIZE as usize] = [
        Column::A,
        Column::B,
        Column::C,
        Column::D,
        Column::E,
        Column::F,
        Column::G,
        Column::H,
    ];

    /// 1-based ordinal, `A` = 1 through `H` = 8.
    pub fn ordinal(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`Column::ordinal`].
    pub fn from_ordinal(ordinal: u8) -> Option<Column> {
        Self::ALL.get(usize::from(ordinal).checked_sub(1)?).copied()
    }

    /// Upper-case letter of the column.
    pub fn letter(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Column for a letter, in either case.
    pub fn from_letter(letter: char) -> Option<Column> {
        let upper = letter.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return None;
        }
        Self::from_ordinal(upper as u8 - b'A' + 1)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A board cell plus a hit flag.
///
/// Identity is the `(column, row)` pair; `is_hit` is state and takes no part
/// in equality or hashing.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "PositionFields"))]
pub struct Position {
    column: Column,
    row: u8,
    is_hit: bool,
}

impl Position {
    /// Position at `column` and 1-based `row`, not yet hit.
    pub fn new(column: Column, row: u8) -> Result<Self, PositionError> {
        if !(1..=BOARD_SIZE).contains(&row) {
            return Err(PositionError::OutOfBounds);
        }
        Ok(Self {
            column,
            row,
            is_hit: false,
        })
    }

    /// Position from 1-based column and row ordinals.
    pub fn from_ordinals(column: u8, row: u8) -> Result<Self, PositionError> {
        let column = Column::from_ordinal(column).ok_or(PositionError::OutOfBounds)?;
        Self::new(column, row)
    }

    /// Same cell with the hit flag set as given.
    pub fn with_hit(mut self, is_hit: bool) -> Self {
        self.is_hit = is_hit;
        self
    }

    pub fn column(&self) -> Column {
        self.column
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn is_hit(&self) -> bool {
        self.is_hit
    }

    /// Record a hit on this cell. Idempotent.
    pub fn mark_hit(&mut self) {
        self.is_hit = true;
    }

    /// `true` if both positions sit on the same cell.
    pub fn same_cell(&self, other: &Position) -> bool {
        self.column == other.column && self.row == other.row
    }

    /// `true` if `other` is one step away along a row or a column.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        let dc = self.column.ordinal().abs_diff(other.column.ordinal());
        let dr = self.row.abs_diff(other.row);
        (dc == 0 && dr == 1) || (dc == 1 && dr == 0)
    }
}

/// Wire form of [`Position`]; decoding goes through [`Position::new`] so the
/// row is range checked.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct PositionFields {
    column: Column,
    row: u8,
    #[serde(default)]
    is_hit: bool,
}

#[cfg(feature = "std")]
impl TryFrom<PositionFields> for Position {
    type Error = PositionError;

    fn try_from(fields: PositionFields) -> Result<Self, Self::Error> {
        Position::new(fields.column, fields.row).map(|pos| pos.with_hit(fields.is_hit))
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.same_cell(other)
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.column.hash(state);
        self.row.hash(state);
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_position(s)
    }
}

/// Parse text such as `"B3"` or `"  h8 "` into a position.
///
/// Blank input is `InvalidInput`. Anything other than exactly one letter A-H
/// followed by one digit 1-8 (after trimming) is `OutOfBounds`.
pub fn parse_position(input: &str) -> Result<Position, PositionError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PositionError::InvalidInput);
    }
    let mut chars = trimmed.chars();
    let (letter, digit) = match (chars.next(), chars.next(), chars.next()) {
        (Some(letter), Some(digit), None) => (letter, digit),
        _ => return Err(PositionError::OutOfBounds),
    };
    let column = Column::from_letter(letter).ok_or(PositionError::OutOfBounds)?;
    let row = digit
        .to_digit(10)
        .ok_or(PositionError::OutOfBounds)?;
    Position::new(column, row as u8)
}

/// [`parse_position`] for callers whose input may be absent.
pub fn parse_optional_position(input: Option<&str>) -> Result<Position, PositionError> {
    parse_position(input.ok_or(PositionError::InvalidInput)?)
}
