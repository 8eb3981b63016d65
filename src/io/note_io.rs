use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::NamedTempFile;

use crate::model::config::{Config, LookBackMode};

/// Error type for daily-note I/O
#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("notes directory not found: {0}")]
    MissingDir(PathBuf),
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// One prior daily note, loaded into memory
#[derive(Debug, Clone)]
pub struct DailyNote {
    pub date: NaiveDate,
    pub path: PathBuf,
    pub text: String,
}

/// Path of the note for a given date under `dir`
pub fn daily_note_path(dir: &Path, date: NaiveDate, config: &Config) -> PathBuf {
    dir.join(format!("{}.md", date.format(&config.note_format)))
}

/// Collect the prior daily notes in the lookback window, oldest first.
///
/// Scans `dir` for `*.md` files whose stem parses with the configured date
/// format and whose date precedes `today`, then applies the window: the
/// last `look_back` calendar days, or the `look_back` most recent notes
/// that exist. Today's own note is never included.
pub fn collect_daily_notes(
    dir: &Path,
    today: NaiveDate,
    config: &Config,
) -> Result<Vec<DailyNote>, NoteError> {
    if !dir.is_dir() {
        return Err(NoteError::MissingDir(dir.to_path_buf()));
    }

    let mut dated: Vec<(NaiveDate, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let Ok(date) = NaiveDate::parse_from_str(stem, &config.note_format) else {
            continue;
        };
        if date < today {
            dated.push((date, path));
        }
    }
    dated.sort_by_key(|(date, _)| *date);

    let window: Vec<(NaiveDate, PathBuf)> = match config.look_back_mode {
        LookBackMode::Days => {
            let oldest = today - chrono::Days::new(config.look_back as u64);
            dated.into_iter().filter(|(d, _)| *d >= oldest).collect()
        }
        LookBackMode::Recent => {
            let skip = dated.len().saturating_sub(config.look_back);
            dated.into_iter().skip(skip).collect()
        }
    };

    let mut notes = Vec::with_capacity(window.len());
    for (date, path) in window {
        let text = fs::read_to_string(&path).map_err(|e| NoteError::Read {
            path: path.clone(),
            source: e,
        })?;
        notes.push(DailyNote { date, path, text });
    }
    Ok(notes)
}

/// Read today's note if it exists
pub fn read_note(path: &Path) -> Result<Option<String>, NoteError> {
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .map_err(|e| NoteError::Read {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Write a note atomically: temp file in the same directory, then rename
pub fn write_note(path: &Path, text: &str) -> Result<(), NoteError> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| NoteError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    tmp.write_all(text.as_bytes()).map_err(|e| NoteError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    tmp.persist(path).map_err(|e| NoteError::Write {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}
