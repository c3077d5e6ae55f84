//! Config-Decode Puzzle (tag DNS)
//!
//! `dns.cfg` hides its hints as Base64 values in key=value pairs, some of
//! them split across backslash-continuation lines. The token is the first
//! decoded hint that reads like text, with `token_tag` taking priority.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;

use crate::core::config::join_continuations;
use crate::game::state::GameState;

const TAG: &str = "DNS";

/// Tolerant key=value pattern: word key, optional whitespace around `=`,
/// matched anywhere in the line.
static HINT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z0-9_]+)\s*=\s*(.+)").expect("valid hint pattern")
});

/// Strict Base64 decode to text, after stripping all whitespace.
///
/// Accepted only if the result is UTF-8 and at least half its characters
/// are printable ASCII.
fn try_base64_decode(value: &str) -> Option<String> {
    let compact: String = value.split_whitespace().collect();
    let bytes = STANDARD.decode(compact.as_bytes()).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    let total = text.chars().count();
    let printable = text.chars().filter(|c| (' '..='~').contains(c)).count();
    if printable * 2 >= total.max(1) {
        Some(text)
    } else {
        None
    }
}

/// Run the DNS extractor against `path`.
pub fn inspect(path: &Path, state: &mut GameState) -> Vec<String> {
    let mut output = vec!["[Room DNS] Searching for DNS hints...".to_string()];

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return vec!["[Room DNS] Error: dns.cfg not found".to_string()],
    };

    let pairs: Vec<(String, String)> = join_continuations(&content)
        .iter()
        .filter_map(|line| {
            HINT_LINE.captures(line).map(|caps| {
                (caps[1].to_string(), caps[2].to_string())
            })
        })
        .collect();

    if pairs.is_empty() {
        output.push("No DNS hint lines found.".to_string());
        return output;
    }

    // Insertion order matters below, so this stays a Vec. A repeated key
    // keeps its first-seen position but takes the last decodable value;
    // duplicates that fail to decode never displace a decoded one.
    let mut decoded: Vec<(String, String, String)> = Vec::new();
    for (key, value) in pairs {
        let Some(text) = try_base64_decode(&value) else {
            continue;
        };
        match decoded.iter().position(|(k, _, _)| *k == key) {
            Some(i) => {
                decoded[i].1 = value;
                decoded[i].2 = text;
            }
            None => decoded.push((key, value, text)),
        }
    }

    if decoded.is_empty() {
        output.push("No valid Base64 hints decoded.".to_string());
        return output;
    }

    // token_tag wins outright; otherwise the first hint with two or more
    // words is taken as English-like.
    let chosen = decoded
        .iter()
        .find(|(key, _, _)| key == "token_tag")
        .or_else(|| {
            decoded
                .iter()
                .find(|(_, _, text)| text.split_whitespace().count() >= 2)
        });

    let Some((key, encoded, text)) = chosen else {
        output.push("No hint text contains a valid token clue.".to_string());
        return output;
    };

    state.record_token(
        TAG,
        text,
        &[
            ("MATCH", format!("\"{key}={encoded}\"")),
            ("CHECK", format!("{key}->decoded({text})")),
        ],
    );

    output.push(format!("Found valid DNS hint: {key}={encoded}"));
    output.push(format!("TOKEN[{TAG}]={text}"));
    output.push(format!("EVIDENCE[{TAG}].MATCH=\"{key}={encoded}\""));
    output.push(format!("EVIDENCE[{TAG}].CHECK={key}->decoded({text})"));
    output
}

// =============================================================================
// TESTS
// =============================================================================
