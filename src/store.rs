//! store.rs
//!
//! Persists the reference instant between runs, the way the web version
//! of this tool used localStorage: one fixed key holding an ISO-8601
//! timestamp. Here the "storage" is a small JSON dotfile.
//!
//! A missing file means no active session. A file that exists but does
//! not parse is treated the same way (with a warning) rather than
//! crashing the render loop; only genuine I/O failures propagate.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DEFAULT_FILE_NAME: &str = ".agetick.json";

#[derive(Serialize, Deserialize)]
struct SavedSession {
    birth_datetime: String,
}

pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Dotfile in the user's home directory, or the current directory
    /// when `$HOME` is unset.
    pub fn default_path() -> PathBuf {
        match std::env::var_os("HOME") {
            Some(home) => Path::new(&home).join(DEFAULT_FILE_NAME),
            None => PathBuf::from(DEFAULT_FILE_NAME),
        }
    }

    /// Load the persisted reference instant, if any.
    pub fn load(&self) -> Result<Option<NaiveDateTime>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).context(format!("Failed to read {}", self.path.display()));
            }
        };

        let session: SavedSession = match serde_json::from_str(&raw) {
            Ok(session) => session,
            Err(e) => {
                log::warn!(
                    "Ignoring malformed session file {}: {e}",
                    self.path.display()
                );
                return Ok(None);
            }
        };

        match NaiveDateTime::parse_from_str(&session.birth_datetime, TIMESTAMP_FORMAT) {
            Ok(instant) => Ok(Some(instant)),
            Err(e) => {
                log::warn!(
                    "Ignoring unparsable timestamp {:?} in {}: {e}",
                    session.birth_datetime,
                    self.path.display()
                );
                Ok(None)
            }
        }
    }

    /// Persist `instant` as the active session, replacing any previous one.
    pub fn save(&self, instant: NaiveDateTime) -> Result<()> {
        let session = SavedSession {
            birth_datetime: instant.format(TIMESTAMP_FORMAT).to_string(),
        };
        let json = serde_json::to_string_pretty(&session)?;
        fs::write(&self.path, json)
            .context(format!("Failed to write {}", self.path.display()))
    }

    /// Remove the persisted session. Idempotent.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context(format!("Failed to remove {}", self.path.display())),
        }
    }
}
