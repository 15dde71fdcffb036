//! Match log tooling for tournament round inference
//!
//! This crate provides infrastructure for:
//! - Loading and saving JSON match logs
//! - Applying known data corrections and round-robin flags from config
//! - Assigning rounds with a configurable failure policy
//! - Generating per-tournament reports
//!
//! # Usage
//!
//! ```bash
//! # Annotate a match log with rounds
//! cargo run -p tournament -- assign matches.json -o rounds.json -c crates/tournament/rounds.toml
//!
//! # Print the rounds of an annotated log
//! cargo run -p tournament -- report rounds.json
//! ```

mod config;
mod corrections;
mod results;
mod runner;

pub use config::*;
pub use corrections::*;
pub use results::*;
pub use runner::*;
