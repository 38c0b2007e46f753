//! # Medtest CLI
//!
//! Command-line client for the remote medical-records service.
//!
//! Handles:
//! - Routing a verb and its arguments to one remote procedure (`cli`)
//! - Holding the four service stubs over a single channel (`client`)
//! - Invoking the procedure and rendering what comes back (`commands`)
//!
//! Uses `medtest-core` for request construction and output layout.

#![warn(rust_2018_idioms)]

pub mod cli;
pub mod client;
pub mod commands;

pub use cli::{Cli, Commands};
pub use client::Clients;
pub use commands::execute;
