//! CSV ingest pipeline
//!
//! Reads the semicolon-delimited nomination list, inserts valid rows into
//! the movies table, and writes rejected rows to a sibling
//! `*_invalid.csv` file with the validation error appended. Rejected rows
//! never abort a load; a malformed header or unreadable file does.

use std::path::{Path, PathBuf};

use awards_common::Result;
use csv::StringRecord;
use sqlx::SqlitePool;
use tracing::{error, info};

use crate::store;

mod row;

/// Summary of one CSV load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    /// Rows inserted into the movies table
    pub imported: usize,
    /// Rows rejected by validation
    pub rejected: usize,
    /// Side file holding the rejected rows, when any were written
    pub invalid_file: Option<PathBuf>,
}

/// Load the nomination CSV into the movies table
///
/// Valid rows are inserted in a single transaction committed at the end,
/// so a database failure partway through leaves the table untouched.
pub async fn load_movie_csv(pool: &SqlitePool, path: &Path) -> Result<IngestReport> {
    info!("Starting CSV import: {}", path.display());

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let columns = row::ColumnIndexes::from_headers(&headers)?;

    let mut invalid_records: Vec<(StringRecord, String)> = Vec::new();
    let mut imported = 0usize;
    let mut tx = pool.begin().await?;

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        match columns.parse_row(&record) {
            Ok(movie) => {
                store::insert_movie(&mut *tx, &movie).await?;
                imported += 1;
            }
            Err(e) => {
                error!("Validation error in record {:?}: {}", record, e);
                invalid_records.push((record, format!("{} (line {})", e, index)));
            }
        }
    }

    tx.commit().await?;

    let rejected = invalid_records.len();
    let invalid_file = if invalid_records.is_empty() {
        None
    } else {
        let side_path = invalid_file_path(path);
        write_invalid_records(&side_path, &headers, &invalid_records)?;
        info!("Invalid records saved to {}", side_path.display());
        Some(side_path)
    };

    info!(
        "CSV import finished: {} imported, {} rejected",
        imported, rejected
    );

    Ok(IngestReport {
        imported,
        rejected,
        invalid_file,
    })
}

/// Sibling path for rejected rows (`movielist.csv` -> `movielist_invalid.csv`)
fn invalid_file_path(path: &Path) -> PathBuf {
    match path.file_stem() {
        Some(stem) => {
            let mut name = stem.to_os_string();
            name.push("_invalid.csv");
            path.with_file_name(name)
        }
        None => path.with_extension("invalid.csv"),
    }
}

/// Write rejected rows with the original columns plus an errors column
fn write_invalid_records(
    path: &Path,
    headers: &StringRecord,
    records: &[(StringRecord, String)],
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_path(path)?;

    let mut header_row = headers.clone();
    header_row.push_field("errors");
    writer.write_record(&header_row)?;

    for (record, error) in records {
        let mut out = record.clone();
        // Pad short rows so the errors column stays aligned
        while out.len() < headers.len() {
            out.push_field("");
        }
        out.push_field(error);
        writer.write_record(&out)?;
    }

    writer.flush()?;
    Ok(())
}
