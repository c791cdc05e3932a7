use crate::game::Game;
use crate::journal::InputJournal;
use crate::placement::PlacementError;
use crate::types::{GameError, SessionEnd};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ReplayError {
    #[error("journal seed could not be placed: {0}")]
    Setup(#[from] PlacementError),
    #[error("input {seq} is out of order; the session expected turn {expected}")]
    OutOfOrder { seq: u64, expected: u64 },
    #[error("input {seq} was rejected by the engine: {source}")]
    RejectedInput { seq: u64, source: GameError },
    #[error("input {seq} arrives after the session ended ({end:?})")]
    InputAfterSessionEnd { seq: u64, end: SessionEnd },
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    /// `None` when the journal stops while the session is still running.
    pub end: Option<SessionEnd>,
    pub final_turn: u64,
    pub final_snapshot_hash: u64,
}

/// Rebuilds the session from the journal's seed and config and feeds every
/// recorded command back through the engine.
pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    let mut game = Game::new(journal.seed, &journal.config)?;

    for record in &journal.inputs {
        if let Some(end) = game.finished() {
            return Err(ReplayError::InputAfterSessionEnd { seq: record.seq, end });
        }
        if record.seq != game.current_turn() {
            return Err(ReplayError::OutOfOrder { seq: record.seq, expected: game.current_turn() });
        }
        game.play_turn(record.command)
            .map_err(|source| ReplayError::RejectedInput { seq: record.seq, source })?;
    }

    tracing::debug!(
        seed = journal.seed,
        inputs = journal.inputs.len(),
        turn = game.current_turn(),
        "replay finished"
    );

    Ok(ReplayResult {
        end: game.finished(),
        final_turn: game.current_turn(),
        final_snapshot_hash: game.snapshot_hash(),
    })
}
