//! Final Gate Verification
//!
//! Triggered by `use gate` in the final room. The gate artifact names the
//! required token order, the group id (which doubles as the HMAC key), and
//! the expected digest. The message is `group_id|token-token-...` over the
//! collected tokens in the configured order.
//!
//! The check is deterministic and idempotent: the config is re-read on
//! every attempt and nothing in the game state changes.

use std::path::Path;

use thiserror::Error;

use crate::core::config::parse_kv_file;
use crate::core::hash::{compute_hmac_hex, verify_hmac_hex};
use crate::game::state::GameState;

/// Sentinel shown for tokens not yet collected.
const MISSING: &str = "?";

/// Parsed gate artifact. Reloaded fresh on every attempt; never cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateConfig {
    /// Required token tags, in message order.
    pub token_order: Vec<String>,
    /// Group identifier; also the HMAC key.
    pub group_id: String,
    /// Expected HMAC-SHA256 digest, hex.
    pub expected_hmac: String,
}

/// Gate configuration failures.
#[derive(Debug, Error)]
pub enum GateError {
    /// The gate artifact is absent.
    #[error("final_gate.txt not found")]
    Missing,
    /// The gate artifact exists but could not be read.
    #[error("gate config unreadable: {0}")]
    Io(std::io::Error),
}

impl GateConfig {
    /// Load and parse the gate artifact at `path`.
    pub fn load(path: &Path) -> Result<Self, GateError> {
        let map = parse_kv_file(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GateError::Missing
            } else {
                GateError::Io(e)
            }
        })?;

        let token_order = map
            .get("token_order")
            .map(String::as_str)
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            token_order,
            group_id: map.get("group_id").cloned().unwrap_or_default(),
            expected_hmac: map.get("expected_hmac").cloned().unwrap_or_default(),
        })
    }

    /// Assemble the gate message from resolved token values.
    pub fn message(&self, token_values: &[String]) -> String {
        format!("{}|{}", self.group_id, token_values.join("-"))
    }
}

/// Run the full gate protocol and return the lines to display.
pub fn check(state: &GameState, path: &Path) -> Vec<String> {
    let config = match GateConfig::load(path) {
        Ok(config) => config,
        Err(GateError::Missing) => {
            return vec!["[Final Gate] Error: final_gate.txt not found".to_string()]
        }
        Err(e) => return vec![format!("[Final Gate] Error: {e}")],
    };

    let mut lines = Vec::new();

    // Always show the full summary, collected or not.
    let collected: Vec<(&String, &str)> = config
        .token_order
        .iter()
        .map(|tag| {
            (tag, state.tokens.get(tag).map(String::as_str).unwrap_or(MISSING))
        })
        .collect();

    let status = collected
        .iter()
        .map(|(tag, value)| format!("{tag}={value}"))
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!("Collected tokens: {status}"));

    if collected.iter().any(|(_, value)| *value == MISSING) {
        lines.push("Not all tokens found. The gate remains locked.".to_string());
        return lines;
    }

    let token_values: Vec<String> =
        collected.iter().map(|(_, value)| value.to_string()).collect();
    let message = config.message(&token_values);

    lines.push("All tokens found! Verifying...".to_string());
    lines.push(format!("MSG={message}"));

    let computed = compute_hmac_hex(&config.group_id, &message);
    lines.push(format!("COMPUTED_HMAC={computed}"));
    lines.push(format!("EXPECTED_HMAC={}", config.expected_hmac));

    if verify_hmac_hex(&config.group_id, &message, &config.expected_hmac) {
        lines.push("✓ HMAC VERIFIED! The gate opens...".to_string());
        lines.push("[Final Gate] SUCCESS - All flags verified correctly!".to_string());
    } else {
        lines.push("✗ HMAC VERIFICATION FAILED!".to_string());
        lines.push("[Final Gate] The gate remains locked. Check your tokens.".to_string());
    }
    lines
}

// =============================================================================
// TESTS
// =============================================================================
