//! `stockroom-cli` — interactive menu on top of the inventory store.
//!
//! Thin glue: reads lines, calls store operations, prints results.

pub mod config;
pub mod render;
pub mod session;

pub use config::{Cli, Config};
pub use session::{Session, SessionEnd, SessionError};
