//! Command Router
//!
//! Parses one input line into a [`Command`] and dispatches it against the
//! room registry and the mutable [`GameState`]. The router is pure with
//! respect to the terminal: it returns the lines to display and a
//! continue/quit verdict, and the engine handles printing and the
//! transcript.
//!
//! Verbs match case-insensitively; arguments pass through verbatim.

use std::path::{Path, PathBuf};

use crate::game::rooms::{hint_for, Room, RoomRegistry};
use crate::game::state::{GameState, SaveError};
use crate::gate;
use crate::{DEFAULT_SAVE_FILE, GATE_FILE};

/// One parsed command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Re-display the current room.
    Look,
    /// Transition to an adjacent room.
    Move(String),
    /// Run the current room's extractor on an item.
    Inspect(String),
    /// Use an item; only `gate` in the final room does anything.
    Use(String),
    /// List held tags.
    Inventory,
    /// Show the current room's hint.
    Hint,
    /// Snapshot state to a file (default `save.json`).
    Save(Option<String>),
    /// Restore state from a file (default `save.json`).
    Load(Option<String>),
    /// One-line command summary.
    Help,
    /// Leave the game.
    Quit,
    /// Anything else; the verb is echoed back.
    Unknown(String),
}

impl Command {
    /// Parse an input line. Returns `None` for blank input.
    ///
    /// The verb is lowercased; the remainder is passed through with only
    /// the separating whitespace stripped.
    pub fn parse(input: &str) -> Option<Command> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        let mut parts = trimmed.splitn(2, char::is_whitespace);
        let verb = parts.next()?.to_lowercase();
        let args = parts.next().unwrap_or("").trim_start().to_string();

        Some(match verb.as_str() {
            "look" => Command::Look,
            "move" => Command::Move(args),
            "inspect" => Command::Inspect(args),
            "use" => Command::Use(args),
            "inventory" => Command::Inventory,
            "hint" => Command::Hint,
            "save" => Command::Save(if args.is_empty() { None } else { Some(args) }),
            "load" => Command::Load(if args.is_empty() { None } else { Some(args) }),
            "help" => Command::Help,
            "exit" | "quit" => Command::Quit,
            _ => Command::Unknown(verb),
        })
    }
}

/// Whether the REPL keeps going after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Keep reading commands.
    Continue,
    /// The player asked to leave.
    Quit,
}

/// Output of one dispatched command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    /// Lines to print and transcribe, in order.
    pub lines: Vec<String>,
    /// Continue or quit.
    pub verdict: Verdict,
}

impl Response {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, verdict: Verdict::Continue }
    }

    fn line(line: String) -> Self {
        Self::lines(vec![line])
    }
}

/// Dispatches commands against the static room graph.
#[derive(Clone, Debug)]
pub struct Router {
    rooms: RoomRegistry,
    data_dir: PathBuf,
}

impl Router {
    /// Router over the given registry, reading artifacts from `data_dir`.
    pub fn new(rooms: RoomRegistry, data_dir: impl Into<PathBuf>) -> Self {
        Self { rooms, data_dir: data_dir.into() }
    }

    /// The room registry backing this router.
    pub fn rooms(&self) -> &RoomRegistry {
        &self.rooms
    }

    /// Parse and execute one input line.
    pub fn dispatch(&self, state: &mut GameState, input: &str) -> Response {
        let Some(command) = Command::parse(input) else {
            return Response::lines(Vec::new());
        };

        match command {
            Command::Look => Response::lines(self.look(state)),
            Command::Move(target) => self.do_move(state, &target),
            Command::Inspect(item) => self.do_inspect(state, &item),
            Command::Use(item) => self.do_use(state, &item),
            Command::Inventory => Response::line(Self::inventory_line(state)),
            Command::Hint => Response::line(format!("[Hint] {}", hint_for(&state.current_room))),
            Command::Save(path) => self.do_save(state, path.as_deref()),
            Command::Load(path) => self.do_load(state, path.as_deref()),
            Command::Help => Response::line(
                "Commands: look, move <room>, inspect <item>, use <item>, inventory, hint, save, load, quit"
                    .to_string(),
            ),
            Command::Quit => Response { lines: Vec::new(), verdict: Verdict::Quit },
            Command::Unknown(verb) => Response::line(format!("Unknown command: {verb}")),
        }
    }

    fn current_room<'a>(&'a self, state: &GameState) -> &'a Room {
        self.rooms
            .get(&state.current_room)
            .expect("current_room always names a registered room")
    }

    fn look(&self, state: &GameState) -> Vec<String> {
        self.current_room(state)
            .flavor
            .iter()
            .map(|l| l.to_string())
            .collect()
    }

    fn do_move(&self, state: &mut GameState, target: &str) -> Response {
        if target.is_empty() {
            return Response::line("Move where?".to_string());
        }
        let current = self.current_room(state);
        if !current.exits.iter().any(|exit| *exit == target) {
            return Response::line(format!("Cannot move to {target} from here."));
        }
        state.current_room = target.to_string();
        Response::lines(self.look(state))
    }

    fn do_inspect(&self, state: &mut GameState, item: &str) -> Response {
        if item.is_empty() {
            return Response::line("Inspect what?".to_string());
        }
        let room = self.current_room(state);
        if !room.items.iter().any(|i| *i == item) {
            return Response::line(format!("{item} not found here."));
        }
        match room.puzzle {
            Some(kind) => {
                let path = self.data_dir.join(item);
                Response::lines(kind.inspect(&path, state))
            }
            None => Response::lines(Vec::new()),
        }
    }

    fn do_use(&self, state: &mut GameState, item: &str) -> Response {
        if item.is_empty() {
            return Response::line("Use what?".to_string());
        }
        if item == "gate" && state.current_room == "final" {
            return Response::lines(gate::check(state, &self.data_dir.join(GATE_FILE)));
        }
        Response::line(format!("Cannot use {item}"))
    }

    fn inventory_line(state: &GameState) -> String {
        if state.inventory.is_empty() {
            "Your inventory is empty.".to_string()
        } else {
            let items: Vec<&str> = state.inventory.keys().map(String::as_str).collect();
            format!("You currently hold: {}", items.join(", "))
        }
    }

    fn do_save(&self, state: &GameState, path: Option<&str>) -> Response {
        let path = Path::new(path.unwrap_or(DEFAULT_SAVE_FILE));
        match state.save_to(path) {
            Ok(()) => Response::line("[Game] Progress saved.".to_string()),
            Err(e) => Response::line(format!("[Game] Error: could not save progress ({e}).")),
        }
    }

    fn do_load(&self, state: &mut GameState, path: Option<&str>) -> Response {
        let path = Path::new(path.unwrap_or(DEFAULT_SAVE_FILE));
        match GameState::load_from(path) {
            Ok(loaded) => {
                if !self.rooms.contains(&loaded.current_room) {
                    return Response::line(format!(
                        "[Game] Save file references unknown room '{}'.",
                        loaded.current_room
                    ));
                }
                *state = loaded;
                Response::line("[Game] Progress loaded.".to_string())
            }
            Err(SaveError::NotFound) => {
                Response::line("[Game] Save file not found.".to_string())
            }
            Err(e) => Response::line(format!("[Game] Error: could not load progress ({e}).")),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture() -> (Router, GameState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let router = Router::new(RoomRegistry::new(), dir.path());
        let state = GameState::new("intro");
        (router, state, dir)
    }

    #[test]
    fn test_parse_verb_case_insensitive_args_verbatim() {
        assert_eq!(Command::parse("LOOK"), Some(Command::Look));
        assert_eq!(Command::parse("MoVe SOC"), Some(Command::Move("SOC".to_string())));
        assert_eq!(
            Command::parse("inspect Auth.Log"),
            Some(Command::Inspect("Auth.Log".to_string()))
        );
        assert_eq!(Command::parse("   "), None);
        assert_eq!(Command::parse("exit"), Some(Command::Quit));
        assert_eq!(Command::parse("QUIT"), Some(Command::Quit));
        assert_eq!(Command::parse("dance"), Some(Command::Unknown("dance".to_string())));
    }

    #[test]
    fn test_move_valid_and_invalid() {
        let (router, mut state, _dir) = fixture();

        let ok = router.dispatch(&mut state, "move soc");
        assert_eq!(state.current_room, "soc");
        assert!(ok.lines.contains(&"You enter the SOC Triage Desk.".to_string()));

        // soc's exits include dns but exclude soc itself.
        let bad = router.dispatch(&mut state, "move soc");
        assert_eq!(state.current_room, "soc");
        assert_eq!(bad.lines, vec!["Cannot move to soc from here.".to_string()]);

        let nowhere = router.dispatch(&mut state, "move attic");
        assert_eq!(nowhere.lines, vec!["Cannot move to attic from here.".to_string()]);
        assert_eq!(state.current_room, "soc");
    }

    #[test]
    fn test_move_case_sensitive_target() {
        let (router, mut state, _dir) = fixture();
        let response = router.dispatch(&mut state, "move SOC");
        assert_eq!(response.lines, vec!["Cannot move to SOC from here.".to_string()]);
        assert_eq!(state.current_room, "intro");
    }

    #[test]
    fn test_look_is_idempotent() {
        let (router, mut state, _dir) = fixture();
        let before = state.clone();
        let first = router.dispatch(&mut state, "look");
        let second = router.dispatch(&mut state, "look");
        assert_eq!(first, second);
        assert_eq!(state, before);
    }

    #[test]
    fn test_inspect_wrong_room_and_missing_args() {
        let (router, mut state, _dir) = fixture();
        let response = router.dispatch(&mut state, "inspect auth.log");
        assert_eq!(response.lines, vec!["auth.log not found here.".to_string()]);

        let response = router.dispatch(&mut state, "inspect");
        assert_eq!(response.lines, vec!["Inspect what?".to_string()]);
    }

    #[test]
    fn test_inspect_runs_extractor_and_collects_token() {
        let (router, mut state, dir) = fixture();
        fs::write(
            dir.path().join("vault_dump.txt"),
            "noise SAFE{2-3-5} noise",
        )
        .unwrap();

        router.dispatch(&mut state, "move vault");
        let response = router.dispatch(&mut state, "inspect vault_dump.txt");
        assert!(response.lines.contains(&"TOKEN[SAFE]=2-3-5".to_string()));
        assert_eq!(state.tokens["SAFE"], "2-3-5");
    }

    #[test]
    fn test_inspect_room_without_extractor_is_silent() {
        let (router, mut state, _dir) = fixture();
        router.dispatch(&mut state, "move final");
        let response = router.dispatch(&mut state, "inspect gate");
        assert!(response.lines.is_empty());
        assert!(state.tokens.is_empty());
    }

    #[test]
    fn test_use_gate_outside_final_room() {
        let (router, mut state, _dir) = fixture();
        let response = router.dispatch(&mut state, "use gate");
        assert_eq!(response.lines, vec!["Cannot use gate".to_string()]);

        let response = router.dispatch(&mut state, "use crowbar");
        assert_eq!(response.lines, vec!["Cannot use crowbar".to_string()]);
    }

    #[test]
    fn test_use_gate_in_final_room_reports_missing_artifact() {
        let (router, mut state, _dir) = fixture();
        router.dispatch(&mut state, "move final");
        let response = router.dispatch(&mut state, "use gate");
        assert_eq!(
            response.lines,
            vec!["[Final Gate] Error: final_gate.txt not found".to_string()]
        );
    }

    #[test]
    fn test_inventory_empty_and_populated() {
        let (router, mut state, _dir) = fixture();
        let response = router.dispatch(&mut state, "inventory");
        assert_eq!(response.lines, vec!["Your inventory is empty.".to_string()]);

        state.record_token("SAFE", "2-3-5", &[]);
        state.record_token("DNS", "test hint", &[]);
        let response = router.dispatch(&mut state, "inventory");
        assert_eq!(response.lines, vec!["You currently hold: DNS, SAFE".to_string()]);
    }

    #[test]
    fn test_hint_per_room() {
        let (router, mut state, _dir) = fixture();
        let response = router.dispatch(&mut state, "hint");
        assert_eq!(response.lines, vec!["[Hint] No hints available here.".to_string()]);

        router.dispatch(&mut state, "move vault");
        let response = router.dispatch(&mut state, "hint");
        assert_eq!(response.lines, vec!["[Hint] Find SAFE{a-b-c} where a+b=c".to_string()]);
    }

    #[test]
    fn test_save_load_round_trip_via_commands() {
        let (router, mut state, dir) = fixture();
        fs::write(dir.path().join("vault_dump.txt"), "SAFE{1-2-3}").unwrap();

        router.dispatch(&mut state, "move vault");
        router.dispatch(&mut state, "inspect vault_dump.txt");

        let save_path = dir.path().join("snapshot.json");
        let save_cmd = format!("save {}", save_path.display());
        let response = router.dispatch(&mut state, &save_cmd);
        assert_eq!(response.lines, vec!["[Game] Progress saved.".to_string()]);

        let saved = state.clone();
        router.dispatch(&mut state, "move intro");
        state.tokens.clear();

        let load_cmd = format!("load {}", save_path.display());
        let response = router.dispatch(&mut state, &load_cmd);
        assert_eq!(response.lines, vec!["[Game] Progress loaded.".to_string()]);
        assert_eq!(state, saved);
    }

    #[test]
    fn test_load_missing_file_non_fatal() {
        let (router, mut state, dir) = fixture();
        let before = state.clone();
        let load_cmd = format!("load {}", dir.path().join("absent.json").display());
        let response = router.dispatch(&mut state, &load_cmd);
        assert_eq!(response.lines, vec!["[Game] Save file not found.".to_string()]);
        assert_eq!(state, before);
    }

    #[test]
    fn test_load_rejects_unknown_room() {
        let (router, mut state, dir) = fixture();
        let path = dir.path().join("weird.json");
        fs::write(
            &path,
            r#"{"current_room":"basement","inventory":{},"tokens":{},"evidence":{}}"#,
        )
        .unwrap();

        let before = state.clone();
        let load_cmd = format!("load {}", path.display());
        let response = router.dispatch(&mut state, &load_cmd);
        assert_eq!(
            response.lines,
            vec!["[Game] Save file references unknown room 'basement'.".to_string()]
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_unknown_command_leaves_state_untouched() {
        let (router, mut state, _dir) = fixture();
        let before = state.clone();
        let response = router.dispatch(&mut state, "teleport final");
        assert_eq!(response.lines, vec!["Unknown command: teleport".to_string()]);
        assert_eq!(response.verdict, Verdict::Continue);
        assert_eq!(state, before);
    }

    #[test]
    fn test_quit_verdict() {
        let (router, mut state, _dir) = fixture();
        assert_eq!(router.dispatch(&mut state, "quit").verdict, Verdict::Quit);
        assert_eq!(router.dispatch(&mut state, "EXIT").verdict, Verdict::Quit);
    }
}
