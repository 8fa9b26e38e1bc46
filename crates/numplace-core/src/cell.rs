//! Cell states.

use crate::{Digit, DigitSet, GridError};

/// One board cell: part of the puzzle, player input, or empty.
///
/// The given/editable split is decided once, at load time, and never changes
/// afterwards: a `Given` cell refuses every write for the lifetime of the
/// board, while `Filled` and `Empty` cells accept any in-range digit,
/// including one that conflicts with a peer, since conflicts are flagged
/// rather than blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Cell {
    /// A fixed puzzle digit, set at load and immutable afterwards.
    Given(Digit),
    /// A player-entered digit.
    Filled(Digit),
    /// No digit.
    Empty,
}

impl Cell {
    /// The digit held by this cell, if any.
    #[must_use]
    pub const fn digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }

    /// Replaces the cell's digit; `None` clears it.
    ///
    /// # Errors
    ///
    /// Fails with [`GridError::GivenCellImmutable`] on a given cell, leaving
    /// it untouched.
    pub fn set(&mut self, digit: Option<Digit>) -> Result<(), GridError> {
        if self.is_given() {
            return Err(GridError::GivenCellImmutable);
        }
        *self = match digit {
            Some(digit) => Self::Filled(digit),
            None => Self::Empty,
        };
        Ok(())
    }

    /// Whether the cell agrees with the candidate set computed for it.
    ///
    /// Given cells are consistent by definition and empty cells by
    /// convention (there is nothing to conflict); a filled cell is
    /// consistent iff its digit is a member of `candidates`.
    #[must_use]
    pub fn is_consistent(self, candidates: DigitSet) -> bool {
        match self {
            Self::Given(_) | Self::Empty => true,
            Self::Filled(digit) => candidates.contains(digit),
        }
    }
}
