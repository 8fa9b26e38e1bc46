//! Rule engine for an interactive number-place (Sudoku) game.
//!
//! This crate models the 9×9 board and nothing else: positions, cells, the
//! digits they hold, and the rule checks a game front end needs on every
//! frame. It has no opinion about rendering, input devices, or where puzzles
//! come from; those collaborators drive the engine through [`Grid`].
//!
//! The engine is deliberately permissive: a digit that conflicts with a peer
//! is accepted and *flagged*, never rejected. Blocking bad input is a policy
//! decision that belongs to the layer above.
//!
//! # Overview
//!
//! - [`Digit`]: type-safe digits 1-9 (empty cells are `Option<Digit>`)
//! - [`DigitSet`]: a nine-bit set of digits, used for candidate sets
//! - [`Position`]: a (row, col) coordinate with its derived box index
//! - [`Cell`]: given, filled, or empty state of one board cell
//! - [`Grid`]: the 81-cell board with candidate derivation, conflict
//!   flagging, and the completion check
//! - [`GridError`]: the recoverable rejections the engine reports
//!
//! # Examples
//!
//! ```
//! use numplace_core::{Digit, Grid, Position};
//!
//! let mut grid: Grid = "
//!     53. .7. ...
//!     6.. 195 ...
//!     .98 ... .6.
//!     8.. .6. ..3
//!     4.. 8.3 ..1
//!     7.. .2. ..6
//!     .6. ... 28.
//!     ... 419 ..5
//!     ... .8. .79
//! "
//! .parse()
//! .expect("valid puzzle");
//!
//! // The empty cell at (0, 2) sees 5, 3, 7, 6, 9 and 8, so 1, 2, or 4 fits.
//! let pos = Position::new(0, 2);
//! let candidates = grid.candidates(pos);
//! assert!(candidates.contains(Digit::D1));
//! assert!(!candidates.contains(Digit::D5));
//!
//! // Writes are never blocked; conflicts are only flagged.
//! grid.set_digit(pos, 5).expect("editable cell");
//! assert!(!grid.is_valid_placement(pos));
//! assert!(!grid.is_complete());
//! ```

pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod error;
pub mod grid;
pub mod position;

pub use self::{
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    error::{GridError, MalformedReason},
    grid::Grid,
    position::Position,
};
