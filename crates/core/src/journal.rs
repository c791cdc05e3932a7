use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::types::Command;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Everything needed to reproduce a session: the seed, the config it was
/// placed with, and every accepted command in turn order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub config: GameConfig,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    /// Turn index the command was accepted on, starting at 0.
    pub seq: u64,
    pub command: Command,
}

#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("malformed journal: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported journal format version {found} (expected {JOURNAL_FORMAT_VERSION})")]
    UnsupportedVersion { found: u16 },
}

impl InputJournal {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, config, inputs: Vec::new() }
    }

    pub fn append(&mut self, seq: u64, command: Command) {
        self.inputs.push(InputRecord { seq, command });
    }

    pub fn to_json_pretty(&self) -> Result<String, JournalError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, JournalError> {
        let journal: Self = serde_json::from_str(text)?;
        if journal.format_version != JOURNAL_FORMAT_VERSION {
            return Err(JournalError::UnsupportedVersion { found: journal.format_version });
        }
        Ok(journal)
    }
}
