//! Game state machine: session state, the static room graph, command
//! routing, and the blocking REPL loop.

pub mod engine;
pub mod rooms;
pub mod router;
pub mod state;
