//! Static Room Registry
//!
//! The room graph is fixed at startup and never mutated: six rooms, fully
//! connected except that every room lists its own exits explicitly. Each
//! puzzle room carries one artifact item and the puzzle kind that knows how
//! to read it.

use crate::puzzles::PuzzleKind;

/// A single room: identity, flavor text, exits, items, optional puzzle.
#[derive(Clone, Copy, Debug)]
pub struct Room {
    /// Registry key, also the `move` target name.
    pub id: &'static str,
    /// Short description used in logs.
    pub description: &'static str,
    /// Lines printed by `look`, in order.
    pub flavor: &'static [&'static str],
    /// Rooms reachable from here.
    pub exits: &'static [&'static str],
    /// Inspectable items present in the room (artifact file names).
    pub items: &'static [&'static str],
    /// Puzzle backing `inspect` on this room's artifact, if any.
    pub puzzle: Option<PuzzleKind>,
}

/// The fixed room graph.
#[derive(Clone, Debug)]
pub struct RoomRegistry {
    rooms: Vec<Room>,
}

impl RoomRegistry {
    /// Build the standard six-room layout.
    pub fn new() -> Self {
        let rooms = vec![
            Room {
                id: "intro",
                description: "Intro Lobby",
                flavor: &[
                    "You are in the Intro Lobby.",
                    "A terminal blinks in the corner. Doors lead to: soc, dns, vault, malware, final.",
                ],
                exits: &["soc", "dns", "vault", "malware", "final"],
                items: &[],
                puzzle: None,
            },
            Room {
                id: "soc",
                description: "SOC Triage Desk",
                flavor: &[
                    "You enter the SOC Triage Desk.",
                    "A cluttered screen shows failed SSH login attempts.",
                    "Items here: auth.log",
                ],
                exits: &["intro", "dns", "vault", "malware", "final"],
                items: &["auth.log"],
                puzzle: Some(PuzzleKind::AuthLog),
            },
            Room {
                id: "dns",
                description: "DNS Closet",
                flavor: &[
                    "You enter the DNS Closet.",
                    "The walls are covered with scribbled key=value pairs.",
                    "Items here: dns.cfg",
                ],
                exits: &["intro", "soc", "vault", "malware", "final"],
                items: &["dns.cfg"],
                puzzle: Some(PuzzleKind::DnsConfig),
            },
            Room {
                id: "vault",
                description: "Vault Corridor",
                flavor: &[
                    "You enter the Vault Corridor.",
                    "The safe looms before you, covered in scratches and codes.",
                    "Items here: vault_dump.txt",
                ],
                exits: &["intro", "soc", "dns", "malware", "final"],
                items: &["vault_dump.txt"],
                puzzle: Some(PuzzleKind::Vault),
            },
            Room {
                id: "malware",
                description: "Malware Lab",
                flavor: &[
                    "You enter the Malware Lab.",
                    "Process trees sprawl across multiple screens.",
                    "Items here: proc_tree.jsonl",
                ],
                exits: &["intro", "soc", "dns", "vault", "final"],
                items: &["proc_tree.jsonl"],
                puzzle: Some(PuzzleKind::Malware),
            },
            Room {
                id: "final",
                description: "Final Gate",
                flavor: &["You stand before the Final Gate. The console asks for proof."],
                exits: &["intro", "soc", "dns", "vault", "malware"],
                items: &["gate"],
                puzzle: None,
            },
        ];
        Self { rooms }
    }

    /// Look up a room by id.
    pub fn get(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Whether `id` names a registered room.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All room ids, in layout order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rooms.iter().map(|r| r.id)
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Static per-room hint table; unmapped rooms get the generic message.
pub fn hint_for(room_id: &str) -> &'static str {
    match room_id {
        "soc" => "Parse the log file line by line. Look for Failed password entries.",
        "dns" => "Check the token_tag to know which hint to decode.",
        "vault" => "Find SAFE{a-b-c} where a+b=c",
        "malware" => "Build a process tree and find the malicious chain.",
        _ => "No hints available here.",
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_six_rooms() {
        let registry = RoomRegistry::new();
        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(ids, vec!["intro", "soc", "dns", "vault", "malware", "final"]);
    }

    #[test]
    fn test_exits_all_reference_registered_rooms() {
        let registry = RoomRegistry::new();
        for id in registry.ids().collect::<Vec<_>>() {
            let room = registry.get(id).unwrap();
            for exit in room.exits {
                assert!(registry.contains(exit), "room {id} exits to unknown {exit}");
            }
            // No room exits to itself.
            assert!(!room.exits.contains(&id));
        }
    }

    #[test]
    fn test_puzzle_rooms_carry_their_artifact() {
        let registry = RoomRegistry::new();
        assert_eq!(registry.get("soc").unwrap().items, &["auth.log"]);
        assert_eq!(registry.get("dns").unwrap().items, &["dns.cfg"]);
        assert_eq!(registry.get("vault").unwrap().items, &["vault_dump.txt"]);
        assert!(registry.get("intro").unwrap().puzzle.is_none());
        assert!(registry.get("final").unwrap().puzzle.is_none());
    }

    #[test]
    fn test_hint_table() {
        assert!(hint_for("vault").contains("a+b=c"));
        assert_eq!(hint_for("intro"), "No hints available here.");
        assert_eq!(hint_for("nowhere"), "No hints available here.");
    }
}
