//! Row models for the movies table

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie row as stored in the database
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MovieRow {
    pub id: i64,
    pub year: i64,
    pub title: String,
    pub studios: String,
    pub producers: String,
    pub winner: bool,
}

/// A validated nomination record ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub year: i64,
    pub title: String,
    pub studios: String,
    /// Producer credit exactly as listed in the source file
    pub producers: String,
    pub winner: bool,
}
