use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use numplace_core::{Grid, GridError};
use numplace_game::{PuzzleId, SessionOutcome};
use rand::Rng;
use rand::seq::IndexedRandom as _;

use crate::{Difficulty, PuzzleRecord, ScoreRecord};

/// Errors from catalog I/O and puzzle selection.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CatalogError {
    /// Reading or writing a catalog file failed.
    #[display("catalog I/O failed: {_0}")]
    Io(#[from] io::Error),
    /// A catalog file could not be parsed as CSV.
    #[display("catalog file is not valid CSV: {_0}")]
    Csv(#[from] csv::Error),
    /// A stored puzzle string was rejected by the engine.
    #[display("stored puzzle {id} is malformed: {source}")]
    MalformedRecord {
        /// Id of the offending record.
        id: u32,
        /// The engine's rejection.
        source: GridError,
    },
    /// No unplayed puzzle matches the requested difficulty.
    #[display("no unplayed {_0} puzzle available")]
    NoPuzzleAvailable(#[error(not(source))] Difficulty),
}

/// A puzzle chosen for play, parsed and ready for a session.
#[derive(Debug, Clone)]
pub struct SelectedPuzzle {
    /// Catalog id, to echo into the score file after the attempt.
    pub id: PuzzleId,
    /// Challenge level of the selected puzzle.
    pub difficulty: Difficulty,
    /// The loaded board, with a given at every stored digit.
    pub grid: Grid,
}

/// Puzzle data and score files backing play sessions.
///
/// The data file is read once at open time; the score file is read at open
/// time and kept in sync in memory as outcomes are recorded, so repeated
/// selections within one process never re-offer a played puzzle.
#[derive(Debug)]
pub struct PuzzleCatalog {
    puzzles: Vec<PuzzleRecord>,
    scores: Vec<ScoreRecord>,
    score_path: PathBuf,
}

impl PuzzleCatalog {
    /// Opens a catalog from a puzzle data file and a score file.
    ///
    /// The data file must exist; a missing score file is an empty play
    /// history (it is created on the first recorded outcome).
    ///
    /// # Errors
    ///
    /// Fails with [`CatalogError::Io`] or [`CatalogError::Csv`] when either
    /// file cannot be read or parsed.
    pub fn open<P, Q>(data_path: P, score_path: Q) -> Result<Self, CatalogError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let puzzles = read_records(data_path.as_ref())?;
        let score_path = score_path.as_ref().to_path_buf();
        let scores = if score_path.exists() {
            read_records(&score_path)?
        } else {
            Vec::new()
        };
        debug!(
            "catalog opened: {} puzzles, {} recorded attempts",
            puzzles.len(),
            scores.len()
        );
        Ok(Self {
            puzzles,
            scores,
            score_path,
        })
    }

    /// Puzzles stored in the data file.
    #[must_use]
    pub fn puzzles(&self) -> &[PuzzleRecord] {
        &self.puzzles
    }

    /// Attempts recorded in the score file.
    #[must_use]
    pub fn scores(&self) -> &[ScoreRecord] {
        &self.scores
    }

    fn is_played(&self, id: u32) -> bool {
        self.scores.iter().any(|score| score.puzzle_id == id)
    }

    /// Picks a random unplayed puzzle of the requested difficulty.
    ///
    /// Every id present in the score file is excluded, so each puzzle is
    /// offered at most once.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NoPuzzleAvailable`] when every matching puzzle has
    ///   already been played, or none exists.
    /// - [`CatalogError::MalformedRecord`] when the stored board string does
    ///   not load.
    pub fn select_puzzle<R>(
        &self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<SelectedPuzzle, CatalogError>
    where
        R: Rng + ?Sized,
    {
        let available: Vec<&PuzzleRecord> = self
            .puzzles
            .iter()
            .filter(|record| record.difficulty == difficulty && !self.is_played(record.id))
            .collect();
        let record = *available
            .choose(rng)
            .ok_or(CatalogError::NoPuzzleAvailable(difficulty))?;
        let grid: Grid = record.puzzle.parse().map_err(|source| {
            CatalogError::MalformedRecord {
                id: record.id,
                source,
            }
        })?;
        info!(
            "selected {} puzzle {}: {}",
            record.difficulty, record.id, record.puzzle
        );
        Ok(SelectedPuzzle {
            id: PuzzleId::from(record.id),
            difficulty: record.difficulty,
            grid,
        })
    }

    /// Appends the outcome of a session to the score file.
    ///
    /// The file and its header row are created on the first write. The
    /// in-memory play history is updated too, so a subsequent
    /// [`select_puzzle`](PuzzleCatalog::select_puzzle) will not offer the
    /// same puzzle again.
    ///
    /// # Errors
    ///
    /// Fails with [`CatalogError::Io`] or [`CatalogError::Csv`] when the
    /// score file cannot be written.
    pub fn record_outcome(&mut self, outcome: &SessionOutcome) -> Result<(), CatalogError> {
        let record = ScoreRecord::from(outcome);
        append_score(&self.score_path, &record)?;
        debug!(
            "recorded attempt on puzzle {}: finished={}, time={}",
            record.puzzle_id, record.finished, record.time
        );
        self.scores.push(record);
        Ok(())
    }
}

fn read_records<T>(path: &Path) -> Result<Vec<T>, CatalogError>
where
    T: serde::de::DeserializeOwned,
{
    let mut reader = csv::Reader::from_path(path)?;
    let records = reader.deserialize().collect::<Result<_, _>>()?;
    Ok(records)
}

fn append_score(path: &Path, record: &ScoreRecord) -> Result<(), CatalogError> {
    let write_headers = !path.exists();
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(write_headers)
        .from_writer(file);
    writer.serialize(record)?;
    writer.flush()?;
    Ok(())
}
