//! Pattern-Match Puzzle (tag SAFE)
//!
//! `vault_dump.txt` is freeform text littered with `SAFE{a-b-c}` codes.
//! Only one is genuine: the first occurrence, in document order, where
//! `a + b == c`.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::game::state::GameState;

const TAG: &str = "SAFE";

/// `SAFE{a-b-c}`: case-insensitive keyword, optional whitespace around
/// braces and hyphens, decimal digits for a, b, c.
static SAFE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)SAFE\s*\{\s*(\d+)\s*-\s*(\d+)\s*-\s*(\d+)\s*\}")
        .expect("valid safe pattern")
});

/// Run the SAFE extractor against `path`.
pub fn inspect(path: &Path, state: &mut GameState) -> Vec<String> {
    let mut output = vec!["[Room Vault] Searching for safe codes...".to_string()];

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return vec!["[Room Vault] Error: vault_dump.txt not found".to_string()],
    };

    for caps in SAFE_PATTERN.captures_iter(&content) {
        // Overflowing digits just disqualify the candidate.
        let (Ok(a), Ok(b), Ok(c)) = (
            caps[1].parse::<u64>(),
            caps[2].parse::<u64>(),
            caps[3].parse::<u64>(),
        ) else {
            continue;
        };
        if a.checked_add(b) != Some(c) {
            continue;
        }

        let literal = caps.get(0).expect("whole match always present").as_str();
        let token = format!("{a}-{b}-{c}");

        state.record_token(
            TAG,
            &token,
            &[
                ("MATCH", format!("\"{literal}\"")),
                ("CHECK", format!("{a}+{b}={c}")),
            ],
        );

        output.push(format!("Found valid code: {literal}"));
        output.push(format!("TOKEN[{TAG}]={token}"));
        output.push(format!("EVIDENCE[{TAG}].MATCH=\"{literal}\""));
        output.push(format!("EVIDENCE[{TAG}].CHECK={a}+{b}={c}"));
        return output;
    }

    output.push("No valid SAFE code found (none satisfy a+b=c)".to_string());
    output
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn run(dump: &str) -> (Vec<String>, GameState) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(dump.as_bytes()).unwrap();
        file.flush().unwrap();
        let mut state = GameState::new("vault");
        let output = inspect(file.path(), &mut state);
        (output, state)
    }

    #[test]
    fn test_first_satisfying_candidate_wins() {
        let (output, state) = run("junk SAFE{2-3-6} more junk SAFE{2-3-5} tail SAFE{1-1-2}");
        assert_eq!(state.tokens["SAFE"], "2-3-5");
        assert_eq!(state.evidence["SAFE"]["CHECK"], "2+3=5");
        assert!(output.contains(&"TOKEN[SAFE]=2-3-5".to_string()));
    }

    #[test]
    fn test_case_and_whitespace_tolerance() {
        let (_, state) = run("scratched: safe { 10 - 20 -30 } on the wall");
        assert_eq!(state.tokens["SAFE"], "10-20-30");
        // Evidence keeps the literal matched text, scratches and all.
        assert_eq!(state.evidence["SAFE"]["MATCH"], "\"safe { 10 - 20 -30 }\"");
    }

    #[test]
    fn test_no_satisfying_candidate() {
        let (output, state) = run("SAFE{1-1-3} SAFE{4-4-9}");
        assert!(output.contains(&"No valid SAFE code found (none satisfy a+b=c)".to_string()));
        assert!(state.tokens.is_empty());
        assert!(state.inventory.is_empty());
    }

    #[test]
    fn test_no_candidates_at_all() {
        let (output, state) = run("nothing bracketed in here");
        assert!(output.contains(&"No valid SAFE code found (none satisfy a+b=c)".to_string()));
        assert!(state.tokens.is_empty());
    }

    #[test]
    fn test_overflowing_candidate_disqualified() {
        let big = "99999999999999999999999999";
        let (_, state) = run(&format!("SAFE{{{big}-1-2}} SAFE{{3-4-7}}"));
        assert_eq!(state.tokens["SAFE"], "3-4-7");
    }

    #[test]
    fn test_missing_file() {
        let mut state = GameState::new("vault");
        let output = inspect(Path::new("/no/such/vault_dump.txt"), &mut state);
        assert_eq!(
            output,
            vec!["[Room Vault] Error: vault_dump.txt not found".to_string()]
        );
        assert!(state.tokens.is_empty());
    }
}
