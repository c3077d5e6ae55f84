//! REPL Engine
//!
//! Blocking read-dispatch-print loop over stdin. Single-threaded by
//! design: the one [`GameState`] is owned here and handed to the router
//! per command, so there is no shared mutable state and no locking.
//!
//! EOF is treated as an intentional quit: the goodbye line is printed and
//! transcribed and the loop exits cleanly. Ctrl-C gets the same treatment
//! via a SIGINT handler installed at loop start - the blocking read does
//! not return once the signal fires, so the handler itself prints and
//! transcribes the goodbye line before exiting the process.

use std::io::{self, BufRead, Write};
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::game::rooms::RoomRegistry;
use crate::game::router::{Router, Verdict};
use crate::game::state::GameState;
use crate::transcript::TranscriptLogger;

/// Engine startup failures.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The configured starting room is not in the registry.
    #[error("unknown starting room: {0}")]
    UnknownRoom(String),
}

/// Owns the session: router, state, and transcript.
#[derive(Debug)]
pub struct GameEngine {
    router: Router,
    state: GameState,
    transcript: TranscriptLogger,
}

impl GameEngine {
    /// Build an engine starting in `starting_room`, reading artifacts from
    /// `data_dir` and appending the session to `transcript_file`.
    pub fn new(
        starting_room: &str,
        transcript_file: &Path,
        data_dir: &Path,
    ) -> Result<Self, EngineError> {
        let rooms = RoomRegistry::new();
        if !rooms.contains(starting_room) {
            return Err(EngineError::UnknownRoom(starting_room.to_string()));
        }
        Ok(Self {
            router: Router::new(rooms, data_dir),
            state: GameState::new(starting_room),
            transcript: TranscriptLogger::new(transcript_file),
        })
    }

    /// The current session state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run the REPL until quit, EOF, or interrupt.
    pub fn run(&mut self) {
        self.install_interrupt_handler();
        self.emit("[Game] Cyber Escape Room started. Type 'help' for commands.");

        let stdin = io::stdin();
        loop {
            print!("> ");
            let _ = io::stdout().flush();

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) => {
                    // EOF
                    println!();
                    self.goodbye();
                    break;
                }
                Ok(_) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }
                    if let Err(e) = self.transcript.log_command(input) {
                        warn!(error = %e, "transcript write failed");
                    }
                    let response = self.router.dispatch(&mut self.state, input);
                    for output_line in &response.lines {
                        self.emit(output_line);
                    }
                    if response.verdict == Verdict::Quit {
                        self.goodbye();
                        break;
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                    // Reached only if a signal other than the handled
                    // SIGINT breaks the read; same quit path either way.
                    println!();
                    self.goodbye();
                    break;
                }
                Err(e) => {
                    // Any other read failure also takes the quit path; the
                    // loop never panics out from under the transcript.
                    warn!(error = %e, "stdin read failed");
                    self.goodbye();
                    break;
                }
            }
        }
    }

    /// Register the SIGINT handler. The read blocks through the signal,
    /// so the handler owns its own transcript handle and exits directly
    /// after the goodbye is printed and transcribed.
    fn install_interrupt_handler(&self) {
        let transcript = self.transcript.clone();
        if let Err(e) = ctrlc::set_handler(move || {
            println!();
            emit_goodbye(&transcript);
            std::process::exit(0);
        }) {
            warn!(error = %e, "could not install interrupt handler");
        }
    }

    fn goodbye(&self) {
        emit_goodbye(&self.transcript);
    }

    fn emit(&self, line: &str) {
        println!("{line}");
        if let Err(e) = self.transcript.log_output(line) {
            warn!(error = %e, "transcript write failed");
        }
    }
}

/// Print and transcribe the goodbye line. Shared between the normal quit
/// path and the SIGINT handler.
fn emit_goodbye(transcript: &TranscriptLogger) {
    let line = format!(
        "[Game] Goodbye. Transcript written to {}",
        transcript.path().display()
    );
    println!("{line}");
    if let Err(e) = transcript.log_output(&line) {
        warn!(error = %e, "transcript write failed");
    }
}

// =============================================================================
// TESTS
// =============================================================================
