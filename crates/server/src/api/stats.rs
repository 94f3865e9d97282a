//! `GET /{operation}?nums=...`: mean, median and mode.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::Json;
use serde::Deserialize;

use numstat_core::{parse_numeric_list, Operation, StatisticResult};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct NumsQuery {
    /// Comma-separated list of numbers.
    pub nums: Option<String>,
}

/// Resolve the operation (404 when unknown), validate `nums` (400), then
/// compute exactly one statistic.
pub async fn compute(
    operation: Result<Path<String>, PathRejection>,
    query: Result<Query<NumsQuery>, QueryRejection>,
) -> Result<Json<StatisticResult>, ApiError> {
    let Path(operation) = operation.map_err(|_| ApiError::not_found())?;
    let operation: Operation = operation.parse()?;

    let Query(params) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let values = parse_numeric_list(params.nums.as_deref())?;

    Ok(Json(operation.apply(&values)))
}
