//! Shared library for the awards service
//!
//! Holds the pieces used by awards-api that are not specific to any one
//! endpoint: the common error type, configuration resolution, and SQLite
//! initialization with the movies schema.

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
