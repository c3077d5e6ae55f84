//! key=value Artifact Parsing
//!
//! Two rooms and the final gate all read flat key=value files. The gate
//! uses the strict line-per-entry form here; the DNS puzzle layers its own
//! tolerant pattern on top of [`join_continuations`].

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Parse a key=value file into a map.
///
/// Blank lines and `#` comments are skipped; keys and values are trimmed.
/// A line without `=` is ignored. Later duplicates overwrite earlier ones.
pub fn parse_kv_file(path: &Path) -> io::Result<BTreeMap<String, String>> {
    let content = fs::read_to_string(path)?;
    let mut map = BTreeMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    Ok(map)
}

/// Reassemble backslash-continuation lines.
///
/// A line ending in `\` has the backslash stripped and the following line
/// appended with no inserted separator. Trailing whitespace is trimmed
/// before the backslash check, matching how the artifacts are written.
pub fn join_continuations(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut buf = String::new();
    for raw in content.lines() {
        let line = raw.trim_end();
        if let Some(stripped) = line.strip_suffix('\\') {
            buf.push_str(stripped);
        } else {
            buf.push_str(line);
            lines.push(std::mem::take(&mut buf));
        }
    }
    if !buf.is_empty() {
        // File ended on a continuation; keep what we have.
        lines.push(buf);
    }
    lines
}

// =============================================================================
// TESTS
// =============================================================================
