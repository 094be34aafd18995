//! Row-level validation for the nomination CSV

use awards_common::db::models::NewMovie;
use awards_common::{Error, Result};
use csv::StringRecord;

/// Columns every nomination file must carry
pub const REQUIRED_COLUMNS: [&str; 5] = ["year", "studios", "title", "producers", "winner"];

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy)]
pub struct ColumnIndexes {
    year: usize,
    title: usize,
    studios: usize,
    producers: usize,
    winner: usize,
}

impl ColumnIndexes {
    /// Resolve column positions from the header, failing when any
    /// required column is missing. Extra columns are ignored.
    pub fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers.iter().position(|h| h == name).ok_or_else(|| {
                Error::InvalidInput(format!(
                    "Invalid CSV. Expected columns: {:?}, found: {:?}",
                    REQUIRED_COLUMNS,
                    headers.iter().collect::<Vec<_>>()
                ))
            })
        };

        Ok(Self {
            year: find("year")?,
            title: find("title")?,
            studios: find("studios")?,
            producers: find("producers")?,
            winner: find("winner")?,
        })
    }

    /// Validate one data row into an insertable movie
    pub fn parse_row(&self, record: &StringRecord) -> Result<NewMovie> {
        let field = |idx: usize, name: &str| {
            record
                .get(idx)
                .ok_or_else(|| Error::InvalidInput(format!("missing field '{}'", name)))
        };

        let year_raw = field(self.year, "year")?;
        let year: i64 = year_raw.trim().parse().map_err(|_| {
            Error::InvalidInput(format!("year must be an integer, got '{}'", year_raw))
        })?;

        Ok(NewMovie {
            year,
            title: field(self.title, "title")?.to_string(),
            studios: field(self.studios, "studios")?.to_string(),
            producers: field(self.producers, "producers")?.to_string(),
            winner: parse_winner(field(self.winner, "winner")?)?,
        })
    }
}

/// Winner flag parsing: an empty cell means no, otherwise a
/// case-insensitive yes/no
pub fn parse_winner(raw: &str) -> Result<bool> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(false);
    }

    match value.to_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(Error::InvalidInput(
            "winner must be 'Yes' or 'No'".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winner_accepts_yes_no_and_empty() {
        assert!(parse_winner("yes").unwrap());
        assert!(parse_winner("Yes").unwrap());
        assert!(parse_winner("YES").unwrap());
        assert!(!parse_winner("no").unwrap());
        assert!(!parse_winner("No").unwrap());
        assert!(!parse_winner("").unwrap());
        assert!(!parse_winner("   ").unwrap());
    }

    #[test]
    fn winner_rejects_other_strings() {
        assert!(parse_winner("true").is_err());
        assert!(parse_winner("1").is_err());
        assert!(parse_winner("winner").is_err());
    }

    #[test]
    fn header_resolution_is_order_independent() {
        let headers = StringRecord::from(vec!["winner", "producers", "studios", "title", "year"]);
        let columns = ColumnIndexes::from_headers(&headers).unwrap();

        let record = StringRecord::from(vec!["yes", "Bo Derek", "MGM", "Bolero", "1984"]);
        let movie = columns.parse_row(&record).unwrap();

        assert_eq!(movie.year, 1984);
        assert_eq!(movie.title, "Bolero");
        assert_eq!(movie.studios, "MGM");
        assert_eq!(movie.producers, "Bo Derek");
        assert!(movie.winner);
    }

    #[test]
    fn missing_column_is_reported() {
        let headers = StringRecord::from(vec!["year", "title", "studios", "winner"]);
        let err = ColumnIndexes::from_headers(&headers).unwrap_err();
        assert!(err.to_string().contains("Invalid CSV"));
    }

    #[test]
    fn non_numeric_year_is_rejected() {
        let headers = StringRecord::from(vec!["year", "title", "studios", "producers", "winner"]);
        let columns = ColumnIndexes::from_headers(&headers).unwrap();

        let record = StringRecord::from(vec!["198O", "Movie", "Studio", "Someone", "yes"]);
        assert!(columns.parse_row(&record).is_err());
    }

    #[test]
    fn short_row_is_rejected() {
        let headers = StringRecord::from(vec!["year", "title", "studios", "producers", "winner"]);
        let columns = ColumnIndexes::from_headers(&headers).unwrap();

        let record = StringRecord::from(vec!["1980", "Movie"]);
        assert!(columns.parse_row(&record).is_err());
    }
}
