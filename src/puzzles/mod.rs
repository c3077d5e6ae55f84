//! Per-Room Token Extractors
//!
//! One extractor per puzzle room, dispatched as a tagged variant. Shared
//! contract: an extractor reads one artifact file and returns the lines to
//! display. On success it emits exactly one `TOKEN[<TAG>]=<value>` line
//! plus one or more `EVIDENCE[<TAG>].<FIELD>=<value>` lines and records
//! the same data in [`GameState`](crate::game::state::GameState) via
//! `record_token`. On any failure (missing file, nothing extractable) it
//! returns explanatory lines and mutates nothing.

use std::path::Path;

use crate::game::state::GameState;

pub mod authlog;
pub mod dnscfg;
pub mod malware;
pub mod vault;

/// Which puzzle backs a room's artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PuzzleKind {
    /// Failed-login /24 aggregation over `auth.log` (tag KEYPAD).
    AuthLog,
    /// Base64 hint decoding over `dns.cfg` (tag DNS).
    DnsConfig,
    /// SAFE{a-b-c} pattern match over `vault_dump.txt` (tag SAFE).
    Vault,
    /// Process-tree puzzle over `proc_tree.jsonl` (stub, no token yet).
    Malware,
}

impl PuzzleKind {
    /// Run the extractor against the artifact at `path`.
    pub fn inspect(self, path: &Path, state: &mut GameState) -> Vec<String> {
        match self {
            PuzzleKind::AuthLog => authlog::inspect(path, state),
            PuzzleKind::DnsConfig => dnscfg::inspect(path, state),
            PuzzleKind::Vault => vault::inspect(path, state),
            PuzzleKind::Malware => malware::inspect(path, state),
        }
    }
}
