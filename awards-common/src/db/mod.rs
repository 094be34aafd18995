//! Database access layer shared by the awards crates

pub mod init;
pub mod models;

pub use init::init_database;
