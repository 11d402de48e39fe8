//! `stockroom-auth` — credential check gating access to the inventory.
//!
//! This crate is intentionally decoupled from the terminal and from storage.

pub mod authenticator;
pub mod credentials;

pub use authenticator::Authenticator;
pub use credentials::{Credentials, DEFAULT_PASSWORD, DEFAULT_USERNAME};
