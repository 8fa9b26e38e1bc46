use numplace_game::{SessionOutcome, format_elapsed};
use serde::{Deserialize, Serialize};

/// Challenge level of a stored puzzle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Difficulty {
    /// Boards with many givens.
    Easy,
    /// Mid-range boards.
    Intermediate,
    /// Boards with few givens.
    Expert,
}

/// One stored puzzle in the data file.
///
/// CSV headers: `Puzzle_id,Difficulty,Puzzle`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRecord {
    /// Stable identifier, echoed into the score file after an attempt.
    #[serde(rename = "Puzzle_id")]
    pub id: u32,
    /// Challenge level used for selection.
    #[serde(rename = "Difficulty")]
    pub difficulty: Difficulty,
    /// 81-symbol board string (`.`, `_`, or `0` for empty cells).
    #[serde(rename = "Puzzle")]
    pub puzzle: String,
}

/// One recorded attempt in the score file.
///
/// CSV headers: `Time,Finished,Puzzle_id,Puzzle_state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Play time, rendered `mm:ss`.
    #[serde(rename = "Time")]
    pub time: String,
    /// Whether the puzzle was completed.
    #[serde(rename = "Finished")]
    pub finished: bool,
    /// Id of the puzzle that was played.
    #[serde(rename = "Puzzle_id")]
    pub puzzle_id: u32,
    /// Serialized board state at the end of the attempt.
    #[serde(rename = "Puzzle_state")]
    pub state: String,
}

impl From<&SessionOutcome> for ScoreRecord {
    fn from(outcome: &SessionOutcome) -> Self {
        Self {
            time: format_elapsed(outcome.elapsed),
            finished: outcome.finished,
            puzzle_id: outcome.puzzle_id.0,
            state: outcome.state.clone(),
        }
    }
}
