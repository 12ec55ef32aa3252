//! Connection constants and a connection accessor over SQLite.
//!
//! # Intention
//!
//! - Hand out a ready-to-use connection handle from a single accessor.
//! - Keep connection constants in one place, overridable from the environment.
//!
//! # Architectural Boundaries
//!
//! - Only connection acquisition belongs here.
//! - No pooling, query helpers or business logic.

pub mod config;
pub mod connection;
pub mod error;

pub use config::{ConnectionConfig, Target, URL, URL_ENV};
pub use connection::{close, get_connection, is_valid, open};
pub use error::{ConnectionError, Result};
