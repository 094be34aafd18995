//! Movie store queries
//!
//! Thin repository over the shared SQLite pool. The loader writes through
//! [`insert_movie`]; the interval endpoint reads through
//! [`fetch_winning_records`].

use awards_common::db::models::NewMovie;
use awards_common::Result;
use sqlx::SqlitePool;

use crate::intervals::WinRecord;

/// Insert one movie row
pub async fn insert_movie<'e, E>(executor: E, movie: &NewMovie) -> Result<()>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query(
        "INSERT INTO movies (year, title, studios, producers, winner) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(movie.year)
    .bind(&movie.title)
    .bind(&movie.studios)
    .bind(&movie.producers)
    .bind(movie.winner)
    .execute(executor)
    .await?;

    Ok(())
}

/// Delete every movie row. The loader repopulates from scratch on startup.
pub async fn clear_movies(pool: &SqlitePool) -> Result<()> {
    sqlx::query("DELETE FROM movies").execute(pool).await?;
    Ok(())
}

/// All winning rows as (producer, year) pairs, ordered by producer then year
pub async fn fetch_winning_records(pool: &SqlitePool) -> Result<Vec<WinRecord>> {
    let rows: Vec<(String, i64)> = sqlx::query_as(
        "SELECT producers, year FROM movies WHERE winner = 1 ORDER BY producers, year",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(producer, year)| WinRecord { producer, year })
        .collect())
}

/// Total number of movie rows
pub async fn count_movies(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
