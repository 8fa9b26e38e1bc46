//! Session management for the puzzle game.
//!
//! A [`Session`] owns one [`Grid`](numplace_core::Grid) for the duration of
//! a single puzzle attempt, together with the puzzle's catalog identity and
//! the accumulated play time. Presentation layers drive it with digit writes
//! and clock ticks; persistence layers take a [`SessionOutcome`] snapshot
//! when the player finishes or quits.
//!
//! Keeping the attempt state in one value (instead of process-wide globals)
//! means a front end can drop a session and start another without any
//! cleanup protocol: loading a new puzzle is constructing a new `Session`.

mod session;

pub use self::session::{PuzzleId, Session, SessionOutcome, format_elapsed};
