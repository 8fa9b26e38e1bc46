//! Board positions.

use std::fmt::{self, Display};

use crate::GridError;

/// A cell position on the 9×9 board.
///
/// Rows are counted top to bottom and columns left to right, both in the
/// range 0-8. The 3×3 box index is derived from the coordinates (never
/// stored) as `row / 3 + 3 * (col / 3)`, which numbers boxes top to bottom
/// within a band of columns, bands left to right.
///
/// Equality compares the two stored coordinates only; since the box index is
/// a pure function of them, it never needs comparing.
///
/// # Examples
///
/// ```
/// use numplace_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.box_index(), 4 / 3 + 3 * (7 / 3));
/// assert_eq!(pos.index(), 4 * 9 + 7);
///
/// // Untrusted coordinates go through the fallible constructor.
/// assert!(Position::try_new(9, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from coordinates known to be in range.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is greater than 8. Use
    /// [`try_new`](Position::try_new) for untrusted input.
    #[must_use]
    pub fn new(row: u8, col: u8) -> Self {
        Self::try_new(row, col).unwrap_or_else(|_| panic!("position out of range: ({row}, {col})"))
    }

    /// Creates a position from untrusted coordinates.
    ///
    /// # Errors
    ///
    /// Fails with [`GridError::InvalidCoordinate`] if `row` or `col` is
    /// greater than 8. (Coordinates are unsigned, so negative values are
    /// unrepresentable to begin with.)
    pub const fn try_new(row: u8, col: u8) -> Result<Self, GridError> {
        if row > 8 || col > 8 {
            return Err(GridError::InvalidCoordinate { row, col });
        }
        Ok(Self { row, col })
    }

    /// Row coordinate (0-8, top to bottom).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column coordinate (0-8, left to right).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Index of the 3×3 box containing this position (0-8).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        self.row / 3 + 3 * (self.col / 3)
    }

    /// Row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Inverse of [`index`](Position::index).
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than 80.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn from_index(index: usize) -> Self {
        assert!(index < 81, "cell index out of range: {index}");
        Self {
            row: (index / 9) as u8,
            col: (index % 9) as u8,
        }
    }

    /// Whether `other` shares this position's row, column, or box.
    ///
    /// A position sees itself.
    #[must_use]
    pub const fn sees(self, other: Self) -> bool {
        self.row == other.row || self.col == other.col || self.box_index() == other.box_index()
    }

    /// The 20 positions sharing a row, column, or box with this one,
    /// excluding the position itself.
    ///
    /// These are the cells whose digits restrict what can legally go here.
    pub fn peers(self) -> impl Iterator<Item = Self> {
        Self::ALL
            .into_iter()
            .filter(move |&other| other != self && self.sees(other))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}
