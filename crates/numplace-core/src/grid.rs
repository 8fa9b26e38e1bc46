//! The 9×9 board and its rule checks.

use std::fmt::{self, Display, Write as _};
use std::str::FromStr;

use crate::{Cell, Digit, DigitSet, GridError, MalformedReason, Position};

/// A 9×9 board holding exactly one [`Cell`] per [`Position`].
///
/// Cells are stored in row-major order and indexed through
/// [`Position::index`], so the one-cell-per-coordinate invariant is
/// structural. Candidate sets and the completion status are recomputed from
/// the live cells on every query; nothing is cached across mutations, so a
/// result always reflects the board as it currently stands.
///
/// The engine is permissive: [`set_digit`](Grid::set_digit) accepts a digit
/// that duplicates a peer and leaves the conflict to
/// [`is_valid_placement`](Grid::is_valid_placement) to flag.
///
/// # Examples
///
/// ```
/// use numplace_core::{Grid, Position};
///
/// let mut grid = Grid::empty();
/// grid.set_digit(Position::new(0, 0), 5).unwrap();
/// grid.set_digit(Position::new(0, 4), 5).unwrap();
///
/// // Both fives landed, and both are flagged as conflicting.
/// assert!(!grid.is_valid_placement(Position::new(0, 0)));
/// assert!(!grid.is_valid_placement(Position::new(0, 4)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; 81],
}

impl Grid {
    /// Creates an all-empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; 81],
        }
    }

    /// Loads a board from 81 numeric cell values in row-major order.
    ///
    /// Values 1-9 become given cells; 0 is an empty cell.
    ///
    /// # Errors
    ///
    /// Fails with [`GridError::MalformedPuzzle`] if `values` is not exactly
    /// 81 long or contains a value above 9.
    pub fn load(values: &[u8]) -> Result<Self, GridError> {
        if values.len() != 81 {
            return Err(GridError::MalformedPuzzle {
                reason: MalformedReason::BadLength(values.len()),
            });
        }
        let mut cells = [Cell::Empty; 81];
        for (cell, &value) in cells.iter_mut().zip(values) {
            *cell = match Digit::try_from_value(value) {
                Some(digit) => Cell::Given(digit),
                None if value == 0 => Cell::Empty,
                None => {
                    return Err(GridError::MalformedPuzzle {
                        reason: MalformedReason::BadValue(value),
                    });
                }
            };
        }
        Ok(Self { cells })
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Legal candidates for the cell at `pos`, derived from live board state.
    ///
    /// A given cell's candidate set is the singleton of its own digit. For
    /// any other cell the set starts at all nine digits and drops every digit
    /// currently held by a peer (same row, column, or box); empty peers
    /// contribute no exclusion. The peer scan runs against the cells as they
    /// are at call time.
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        if let Cell::Given(digit) = self.cell(pos) {
            return DigitSet::singleton(digit);
        }
        let mut candidates = DigitSet::FULL;
        for peer in pos.peers() {
            if let Some(digit) = self.cell(peer).digit() {
                candidates.remove(digit);
            }
        }
        candidates
    }

    /// Whether the placement at `pos` is free of conflicts.
    ///
    /// Given and empty cells are always valid; a filled cell is valid iff
    /// its digit is among [`candidates`](Grid::candidates) for that cell.
    /// This drives conflict highlighting; it never blocks a write.
    #[must_use]
    pub fn is_valid_placement(&self, pos: Position) -> bool {
        self.cell(pos).is_consistent(self.candidates(pos))
    }

    /// Whether the puzzle is solved: no empty cells and no flagged conflicts.
    ///
    /// Recomputed in full on every call; an O(81) scan of O(81) peer scans,
    /// cheap enough to run after every mutation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Position::ALL
            .into_iter()
            .all(|pos| !self.cell(pos).is_empty() && self.is_valid_placement(pos))
    }

    /// Writes `value` into the cell at `pos`; 0 clears the cell.
    ///
    /// A conflicting digit is accepted and only flagged afterwards via
    /// [`is_valid_placement`](Grid::is_valid_placement).
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidDigit`] if `value > 9`.
    /// - [`GridError::GivenCellImmutable`] if the cell is a given.
    /// - [`GridError::PositionNotFound`] if no cell backs `pos`; this cannot
    ///   happen while the board invariant holds and means the grid is
    ///   corrupt.
    ///
    /// The board is untouched on every error.
    pub fn set_digit(&mut self, pos: Position, value: u8) -> Result<(), GridError> {
        let digit = match value {
            0 => None,
            _ => Some(Digit::try_from_value(value).ok_or(GridError::InvalidDigit(value))?),
        };
        let cell = self
            .cells
            .get_mut(pos.index())
            .ok_or(GridError::PositionNotFound(pos))?;
        cell.set(digit)
    }

    /// Number of given cells on the board.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_given()).count()
    }

    /// Number of empty cells on the board.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

/// Serializes the board as 81 row-major symbols, `.` for empty cells.
///
/// The output parses back via [`FromStr`]; on reload every nonzero cell
/// becomes a given.
impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell.digit() {
                Some(digit) => f.write_char(digit.to_char())?,
                None => f.write_char('.')?,
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses 81 cell symbols in row-major order, ignoring ASCII whitespace.
    ///
    /// `'1'..='9'` load as given digits; `'.'`, `'_'`, and `'0'` are the
    /// recognized blanks. Any other symbol fails with
    /// [`GridError::MalformedPuzzle`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::with_capacity(81);
        for c in s.chars().filter(|c| !c.is_ascii_whitespace()) {
            match c {
                '.' | '_' | '0' => values.push(0),
                _ => match Digit::from_char(c) {
                    Some(digit) => values.push(digit.value()),
                    None => {
                        return Err(GridError::MalformedPuzzle {
                            reason: MalformedReason::BadSymbol(c),
                        });
                    }
                },
            }
        }
        Self::load(&values)
    }
}
