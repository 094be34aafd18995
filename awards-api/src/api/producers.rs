//! Awarded producer interval endpoint

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::intervals::{compute_intervals, ProducerInterval};
use crate::store;
use crate::AppState;

/// Interval tie sets as returned to clients
#[derive(Debug, Serialize)]
pub struct ProducerIntervalResponse {
    pub min: Vec<ProducerInterval>,
    pub max: Vec<ProducerInterval>,
}

/// GET /api/movies/awarded-producer
///
/// Reports the producers with the shortest and longest gaps between
/// consecutive wins, with every record tied at either extreme included.
/// Responds 404 when no producer has at least two wins.
pub async fn get_awarded_producer(
    State(state): State<AppState>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let wins = store::fetch_winning_records(&state.db).await?;
    let report = compute_intervals(&wins);

    if report.shortest.is_empty() || report.longest.is_empty() {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({
                "status_code": 404,
                "data": null,
                "detail": "Unable to calculate intervals.",
            })),
        ));
    }

    let data = ProducerIntervalResponse {
        min: report.shortest,
        max: report.longest,
    };

    Ok((
        StatusCode::OK,
        Json(json!({
            "status_code": 200,
            "data": data,
            "detail": null,
        })),
    ))
}
