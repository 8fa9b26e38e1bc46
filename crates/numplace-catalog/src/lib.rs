//! CSV-backed puzzle selection and score persistence.
//!
//! A [`PuzzleCatalog`] pairs two files: a read-only puzzle data file
//! (id, difficulty, 81-symbol board string per row) and an append-only score
//! file recording one row per attempt. Selection draws a random puzzle of
//! the requested [`Difficulty`] that has no row in the score file yet, so
//! each puzzle is offered at most once; recording an outcome appends to the
//! score file and updates the in-memory play history.
//!
//! The storage format is plain CSV with a header row, readable and editable
//! by hand or by spreadsheet tools.

mod catalog;
mod record;

pub use self::{
    catalog::{CatalogError, PuzzleCatalog, SelectedPuzzle},
    record::{Difficulty, PuzzleRecord, ScoreRecord},
};
