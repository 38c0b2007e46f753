//! # Medtest Core
//!
//! Transport-free logic for the medical test records client.
//!
//! This crate contains the pure parts of every CLI invocation:
//! - Request construction from raw command-line values (`request`)
//! - Fixed-layout text rendering of returned records (`render`)
//! - Client configuration resolved once at startup (`config`)
//! - Error types shared with the CLI (`error`)
//!
//! **No network concerns**: opening channels and invoking stubs belongs in `medtest-cli`.

pub mod config;
pub mod error;
pub mod render;
pub mod request;

// Use the medtest-proto crate for generated protobuf types.
pub use medtest_proto::pb;

pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::{ClientError, ClientResult, ResultEntryError};
pub use render::PersonRecord;
pub use request::ResultEntry;
