//! Shared primitives used across the game.
//!
//! - [`hash`] - HMAC-SHA256 helpers for the final gate
//! - [`config`] - key=value artifact parsing

pub mod config;
pub mod hash;
