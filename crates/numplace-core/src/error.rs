//! Engine error kinds.

use crate::Position;

/// Rejections reported by the rule engine.
///
/// Every variant except [`PositionNotFound`](GridError::PositionNotFound) is
/// a routine, recoverable outcome of user interaction or puzzle loading:
/// callers report or ignore it and carry on. `PositionNotFound` means the
/// fixed 81-cell board invariant no longer holds and the grid must be
/// treated as corrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A coordinate was outside the 9×9 board.
    #[display("coordinate out of range: row {row}, col {col}")]
    InvalidCoordinate {
        /// Offending row value.
        row: u8,
        /// Offending column value.
        col: u8,
    },
    /// A cell value was outside `0..=9`.
    #[display("digit out of range: {_0}")]
    InvalidDigit(#[error(not(source))] u8),
    /// A write was attempted on a given cell. The cell keeps its digit.
    #[display("cannot modify a given cell")]
    GivenCellImmutable,
    /// A puzzle sequence could not be loaded as a board.
    #[display("malformed puzzle: {reason}")]
    MalformedPuzzle {
        /// What was wrong with the sequence.
        reason: MalformedReason,
    },
    /// No cell exists at the requested position.
    ///
    /// Unreachable while the board invariant holds; implies grid corruption.
    #[display("no cell at {_0}")]
    PositionNotFound(#[error(not(source))] Position),
}

/// Why a puzzle sequence failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MalformedReason {
    /// The sequence did not contain exactly 81 cells.
    #[display("expected 81 cells, found {_0}")]
    BadLength(usize),
    /// A symbol was neither a digit nor a recognized blank.
    #[display("unrecognized symbol {_0:?}")]
    BadSymbol(char),
    /// A numeric cell value was outside `0..=9`.
    #[display("cell value out of range: {_0}")]
    BadValue(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            GridError::InvalidCoordinate { row: 9, col: 2 }.to_string(),
            "coordinate out of range: row 9, col 2"
        );
        assert_eq!(
            GridError::InvalidDigit(12).to_string(),
            "digit out of range: 12"
        );
        assert_eq!(
            GridError::GivenCellImmutable.to_string(),
            "cannot modify a given cell"
        );
        assert_eq!(
            GridError::MalformedPuzzle {
                reason: MalformedReason::BadLength(80)
            }
            .to_string(),
            "malformed puzzle: expected 81 cells, found 80"
        );
        assert_eq!(
            GridError::MalformedPuzzle {
                reason: MalformedReason::BadSymbol('x')
            }
            .to_string(),
            "malformed puzzle: unrecognized symbol 'x'"
        );
        assert_eq!(
            GridError::PositionNotFound(Position::new(0, 0)).to_string(),
            "no cell at r0c0"
        );
    }
}
