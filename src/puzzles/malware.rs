//! Process-Tree Puzzle (stub)
//!
//! The Malware Lab's `proc_tree.jsonl` puzzle is not wired up yet:
//! inspecting it produces no lines and no token.

use std::path::Path;

use crate::game::state::GameState;

// TODO: parse proc_tree.jsonl, rebuild the parent/child process tree, and
// flag the suspicious chain as the fourth token.

/// Stub extractor: no output, no state mutation.
pub fn inspect(_path: &Path, _state: &mut GameState) -> Vec<String> {
    Vec::new()
}
