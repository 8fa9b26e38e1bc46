use std::time::Duration;

use log::debug;
use numplace_core::{Grid, GridError, Position};

/// Identifier of a puzzle within a catalog.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::From,
)]
pub struct PuzzleId(pub u32);

/// A single puzzle attempt.
///
/// Owns the board for the lifetime of the attempt and tracks how long the
/// player has been working on it. The clock only advances through
/// [`tick`](Session::tick) and freezes once the board completes, so the
/// recorded time is play time, not wall time.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use numplace_core::{Grid, Position};
/// use numplace_game::{PuzzleId, Session};
///
/// // A solved board with one hole at the top-left corner.
/// let grid: Grid = "
///     .34 678 912
///     672 195 348
///     198 342 567
///     859 761 423
///     426 853 791
///     713 924 856
///     961 537 284
///     287 419 635
///     345 286 179
/// "
/// .parse()
/// .expect("valid board");
///
/// let mut session = Session::new(PuzzleId::from(7), grid);
/// session.tick(Duration::from_secs(90));
/// assert!(!session.is_finished());
///
/// session.set_digit(Position::new(0, 0), 5).unwrap();
/// assert!(session.is_finished());
///
/// let outcome = session.outcome();
/// assert!(outcome.finished);
/// assert_eq!(outcome.elapsed, Duration::from_secs(90));
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    puzzle_id: PuzzleId,
    grid: Grid,
    elapsed: Duration,
}

impl Session {
    /// Starts a session on `grid` with zero elapsed time.
    #[must_use]
    pub fn new(puzzle_id: PuzzleId, grid: Grid) -> Self {
        Self {
            puzzle_id,
            grid,
            elapsed: Duration::ZERO,
        }
    }

    /// The board being played.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The catalog id of the puzzle being played.
    #[must_use]
    pub fn puzzle_id(&self) -> PuzzleId {
        self.puzzle_id
    }

    /// Play time accumulated so far.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Whether the board is complete.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.grid.is_complete()
    }

    /// Writes `value` into the cell at `pos`; 0 clears the cell.
    ///
    /// Routine rejections (a given cell, an out-of-range value) leave the
    /// board untouched and the session running; they are logged and handed
    /// back for the front end to surface or ignore.
    ///
    /// # Errors
    ///
    /// Surfaces [`GridError`] from the engine unchanged.
    pub fn set_digit(&mut self, pos: Position, value: u8) -> Result<(), GridError> {
        if let Err(err) = self.grid.set_digit(pos, value) {
            debug!("rejected input {value} at {pos}: {err}");
            return Err(err);
        }
        Ok(())
    }

    /// Clears the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Fails with [`GridError::GivenCellImmutable`] on a given cell.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GridError> {
        self.set_digit(pos, 0)
    }

    /// Advances the play clock by `delta` while the puzzle is unfinished.
    ///
    /// Once the board completes, further ticks are ignored.
    pub fn tick(&mut self, delta: Duration) {
        if !self.is_finished() {
            self.elapsed += delta;
        }
    }

    /// Snapshot handed to the persistence collaborator.
    ///
    /// Valid at any point in the attempt: quitting mid-game records an
    /// unfinished outcome with the board as it stands.
    #[must_use]
    pub fn outcome(&self) -> SessionOutcome {
        SessionOutcome {
            puzzle_id: self.puzzle_id,
            elapsed: self.elapsed,
            finished: self.is_finished(),
            state: self.grid.to_string(),
        }
    }
}

/// Result of a puzzle attempt, finished or abandoned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Which puzzle was played.
    pub puzzle_id: PuzzleId,
    /// Play time accumulated when the snapshot was taken.
    pub elapsed: Duration,
    /// Whether the board was complete when the snapshot was taken.
    pub finished: bool,
    /// Serialized board state (81 row-major symbols, `.` for empty).
    pub state: String,
}

/// Formats a play duration as `mm:ss` for scoreboards.
///
/// Durations of an hour or more keep counting minutes past 59.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use numplace_core::Cell;

    use super::*;

    const SOLUTION: &str = "\
        534678912 \
        672195348 \
        198342567 \
        859761423 \
        426853791 \
        713924856 \
        961537284 \
        287419635 \
        345286179";

    /// The solved fixture with one hole punched at (0, 0).
    fn one_hole_grid() -> Grid {
        let mut s: String = SOLUTION.split_whitespace().collect();
        s.replace_range(0..1, ".");
        s.parse().expect("valid board")
    }

    #[test]
    fn timer_accrues_while_unfinished() {
        let mut session = Session::new(PuzzleId(3), one_hole_grid());
        session.tick(Duration::from_secs(30));
        session.tick(Duration::from_secs(12));
        assert_eq!(session.elapsed(), Duration::from_secs(42));
        assert!(!session.is_finished());
    }

    #[test]
    fn timer_freezes_on_completion() {
        let mut session = Session::new(PuzzleId(3), one_hole_grid());
        session.tick(Duration::from_secs(60));

        session.set_digit(Position::new(0, 0), 5).unwrap();
        assert!(session.is_finished());

        session.tick(Duration::from_secs(60));
        assert_eq!(session.elapsed(), Duration::from_secs(60));
    }

    #[test]
    fn rejected_input_leaves_session_running() {
        let mut session = Session::new(PuzzleId(3), one_hole_grid());

        // (0, 1) is a given 3 in the fixture.
        let given = Position::new(0, 1);
        assert_eq!(
            session.set_digit(given, 9),
            Err(GridError::GivenCellImmutable)
        );
        assert_eq!(session.grid().cell(given), Cell::Given(numplace_core::Digit::D3));

        assert_eq!(
            session.set_digit(Position::new(0, 0), 10),
            Err(GridError::InvalidDigit(10))
        );
        assert!(!session.is_finished());
    }

    #[test]
    fn clear_cell_empties_editable_cells() {
        let mut session = Session::new(PuzzleId(3), one_hole_grid());
        let pos = Position::new(0, 0);
        session.set_digit(pos, 7).unwrap();
        session.clear_cell(pos).unwrap();
        assert_eq!(session.grid().cell(pos), Cell::Empty);
    }

    #[test]
    fn outcome_snapshots_current_state() {
        let mut session = Session::new(PuzzleId(11), one_hole_grid());
        session.tick(Duration::from_secs(75));

        let unfinished = session.outcome();
        assert_eq!(unfinished.puzzle_id, PuzzleId(11));
        assert!(!unfinished.finished);
        assert!(unfinished.state.starts_with('.'));
        assert_eq!(unfinished.state.len(), 81);

        session.set_digit(Position::new(0, 0), 5).unwrap();
        let finished = session.outcome();
        assert!(finished.finished);
        assert!(finished.state.starts_with('5'));
        assert_eq!(finished.elapsed, Duration::from_secs(75));
    }

    #[test]
    fn elapsed_formatting() {
        assert_eq!(format_elapsed(Duration::ZERO), "00:00");
        assert_eq!(format_elapsed(Duration::from_secs(75)), "01:15");
        assert_eq!(format_elapsed(Duration::from_secs(3_599)), "59:59");
        assert_eq!(format_elapsed(Duration::from_secs(3_600)), "60:00");
    }
}
