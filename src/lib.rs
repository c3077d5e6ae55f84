//! # Cyber Escape Room
//!
//! Single-player, text-based puzzle game: navigate rooms, inspect artifact
//! files that each encode a puzzle, collect per-room tokens, and unlock the
//! final gate with an HMAC check.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    CYBER ESCAPE ROOM                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Shared primitives                         │
//! │  ├── hash.rs     - HMAC-SHA256 + constant-time verify        │
//! │  └── config.rs   - key=value artifact parsing                │
//! │                                                              │
//! │  game/           - State machine                             │
//! │  ├── state.rs    - Session state + JSON save/load            │
//! │  ├── rooms.rs    - Static room registry and hints            │
//! │  ├── router.rs   - Command parsing and dispatch              │
//! │  └── engine.rs   - Blocking REPL loop                        │
//! │                                                              │
//! │  puzzles/        - Per-room token extractors                 │
//! │  ├── authlog.rs  - Failed-login /24 aggregation (KEYPAD)     │
//! │  ├── dnscfg.rs   - Base64 hint decoding (DNS)                │
//! │  ├── vault.rs    - SAFE{a-b-c} pattern match (SAFE)          │
//! │  └── malware.rs  - Process-tree puzzle (stub)                │
//! │                                                              │
//! │  gate.rs         - Final gate HMAC verification              │
//! │  transcript.rs   - Append-only timestamped transcript        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! Everything downstream of the REPL is deterministic: state maps are
//! `BTreeMap` (sorted iteration for display and serialization), extractor
//! selection and tie-breaks use insertion order, and the gate check is a
//! pure function of the collected tokens and the gate artifact. Re-running
//! `use gate` with unchanged state reproduces identical output.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;
pub mod gate;
pub mod puzzles;
pub mod transcript;

// Re-export commonly used types
pub use game::engine::{EngineError, GameEngine};
pub use game::rooms::{Room, RoomRegistry};
pub use game::router::{Router, Verdict};
pub use game::state::GameState;
pub use gate::GateConfig;
pub use puzzles::PuzzleKind;
pub use transcript::TranscriptLogger;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default starting room
pub const DEFAULT_START_ROOM: &str = "intro";

/// Default save-file path for `save`/`load` without an argument
pub const DEFAULT_SAVE_FILE: &str = "save.json";

/// Gate configuration artifact inside the data directory
pub const GATE_FILE: &str = "final_gate.txt";
