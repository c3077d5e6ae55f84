//! Session State
//!
//! One [`GameState`] per session, owned by the engine and threaded through
//! the router. Uses BTreeMap for deterministic iteration order in display
//! and serialization. Save/load snapshots the whole state as JSON.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured proof fields recorded alongside a token, keyed by field name.
pub type Evidence = BTreeMap<String, String>;

/// Mutable session data.
///
/// `current_room` must always name a room in the registry; the router
/// enforces this on `move` and on `load`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Room the player is currently in.
    pub current_room: String,
    /// Held item/token presence markers, keyed by tag.
    #[serde(default)]
    pub inventory: BTreeMap<String, bool>,
    /// Extracted tokens, keyed by room tag.
    #[serde(default)]
    pub tokens: BTreeMap<String, String>,
    /// Proof fields backing each token, keyed by room tag.
    #[serde(default)]
    pub evidence: BTreeMap<String, Evidence>,
}

/// Save/load failures, surfaced by the router as player-facing lines.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The save file does not exist (non-fatal on load).
    #[error("save file not found")]
    NotFound,
    /// Underlying filesystem error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The file exists but is not a valid snapshot.
    #[error("malformed save file: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl GameState {
    /// Fresh state positioned in `starting_room` with nothing collected.
    pub fn new(starting_room: &str) -> Self {
        Self {
            current_room: starting_room.to_string(),
            inventory: BTreeMap::new(),
            tokens: BTreeMap::new(),
            evidence: BTreeMap::new(),
        }
    }

    /// Record a solved puzzle: the token, its inventory marker, and the
    /// evidence fields that the extractor printed.
    ///
    /// Extractors call this exactly once, on success only, so a failed
    /// inspection never leaves partial state behind.
    pub fn record_token(&mut self, tag: &str, token: &str, evidence: &[(&str, String)]) {
        self.tokens.insert(tag.to_string(), token.to_string());
        self.inventory.insert(tag.to_string(), true);
        let fields = self.evidence.entry(tag.to_string()).or_default();
        fields.clear();
        for (field, value) in evidence {
            fields.insert((*field).to_string(), value.clone());
        }
    }

    /// Write a pretty-printed JSON snapshot to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), SaveError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Read a snapshot from `path`, replacing nothing on failure.
    pub fn load_from(path: &Path) -> Result<Self, SaveError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SaveError::NotFound
            } else {
                SaveError::Io(e)
            }
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

// =============================================================================
// TESTS
// =============================================================================
