use std::fs;
use std::io;
use std::path::Path;

use tactical_core::InputJournal;

/// Writes the journal as pretty JSON through a temporary sibling file so a
/// crash never leaves a half-written journal behind.
pub fn write_journal_atomic(journal: &InputJournal, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let json = journal.to_json_pretty().map_err(io::Error::other)?;

    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}

pub fn load_journal(path: &Path) -> io::Result<InputJournal> {
    let content = fs::read_to_string(path)?;
    InputJournal::from_json_str(&content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
