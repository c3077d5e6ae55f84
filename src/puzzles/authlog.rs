//! Auth-Log Aggregation (tag KEYPAD)
//!
//! Scans `auth.log` for failed SSH logins, buckets them by /24 network,
//! and forms the keypad token from the top attacker: the last octet of the
//! busiest IP inside the busiest network, concatenated with that network's
//! total failure count.
//!
//! Tie-breaks are first-seen: the buckets are kept in insertion order and
//! a later bucket only wins with a strictly higher count.

use std::fs;
use std::path::Path;

use crate::game::state::GameState;

const TAG: &str = "KEYPAD";

/// Per-IP failure count plus the first matching log line seen for it.
struct IpBucket {
    ip: String,
    count: u32,
    sample: String,
}

/// Failures aggregated over one /24 network.
struct NetworkBucket {
    cidr: String,
    total: u32,
    ips: Vec<IpBucket>,
}

/// Strict IPv4: exactly four dot-separated decimal integers, each 0-255.
/// Digits only, so `+7` or hex octets never pass.
fn is_strict_ipv4(candidate: &str) -> bool {
    let octets: Vec<&str> = candidate.split('.').collect();
    octets.len() == 4
        && octets.iter().all(|o| {
            !o.is_empty()
                && o.bytes().all(|b| b.is_ascii_digit())
                && o.parse::<u32>().map(|n| n <= 255).unwrap_or(false)
        })
}

/// Run the KEYPAD extractor against `path`.
pub fn inspect(path: &Path, state: &mut GameState) -> Vec<String> {
    let mut output = vec!["[Room SOC] Parsing logs...".to_string()];

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return vec!["[Room SOC] Error: auth.log not found".to_string()],
    };

    let mut networks: Vec<NetworkBucket> = Vec::new();
    let mut malformed_skipped = 0u32;

    for line in content.lines() {
        let words: Vec<&str> = line.split_whitespace().collect();

        // Source IP is the token after the literal "from".
        let ip = match words
            .iter()
            .position(|w| *w == "from")
            .and_then(|i| words.get(i + 1))
        {
            Some(ip) => *ip,
            None => {
                malformed_skipped += 1;
                continue;
            }
        };

        if !is_strict_ipv4(ip) {
            malformed_skipped += 1;
            continue;
        }

        if !line.contains("Failed password") {
            continue;
        }

        let prefix = ip.rsplit_once('.').map(|(p, _)| p).unwrap_or(ip);
        let cidr = format!("{prefix}.0/24");

        let index = networks.iter().position(|n| n.cidr == cidr).unwrap_or_else(|| {
            networks.push(NetworkBucket { cidr, total: 0, ips: Vec::new() });
            networks.len() - 1
        });
        let bucket = &mut networks[index];
        bucket.total += 1;

        match bucket.ips.iter_mut().find(|b| b.ip == ip) {
            Some(ip_bucket) => ip_bucket.count += 1,
            None => bucket.ips.push(IpBucket {
                ip: ip.to_string(),
                count: 1,
                sample: line.trim().to_string(),
            }),
        }
    }

    // First-seen wins ties at both levels.
    let Some(top_network) = networks.iter().reduce(|best, n| {
        if n.total > best.total {
            n
        } else {
            best
        }
    }) else {
        output.push("No failed-login activity found.".to_string());
        return output;
    };

    let top_ip = top_network
        .ips
        .iter()
        .reduce(|best, b| if b.count > best.count { b } else { best })
        .expect("a network bucket always holds at least one IP");

    let last_octet = top_ip.ip.rsplit('.').next().unwrap_or_default();
    let token = format!("{last_octet}{}", top_network.total);

    state.record_token(
        TAG,
        &token,
        &[
            ("TOP24", top_network.cidr.clone()),
            ("COUNT", top_network.total.to_string()),
            ("SAMPLE", top_ip.sample.clone()),
            ("MALFORMED_SKIPPED", malformed_skipped.to_string()),
        ],
    );

    output.push(format!(
        "{} failed attempts found in {}",
        top_network.total, top_network.cidr
    ));
    output.push(format!("Top IP is {} (last octet={last_octet})", top_ip.ip));
    output.push(format!("Token formed: {token}"));
    output.push(format!("TOKEN[{TAG}]={token}"));
    output.push(format!("EVIDENCE[{TAG}].TOP24={}", top_network.cidr));
    output.push(format!("EVIDENCE[{TAG}].COUNT={}", top_network.total));
    output.push(format!("EVIDENCE[{TAG}].SAMPLE={}", top_ip.sample));
    output.push(format!("EVIDENCE[{TAG}].MALFORMED_SKIPPED={malformed_skipped}"));
    output
}

// =============================================================================
// TESTS
// =============================================================================
