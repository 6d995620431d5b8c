use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use crate::application::{GetAverageUseCase, NumberSource};
use crate::presentation::rest::{ApiError, dto::*};

use super::AppState;

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::up())
}

/// GET /numbers/{number_id}
pub async fn numbers<S: NumberSource>(
    Path(number_id): Path<String>,
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<NumbersResponse>, ApiError> {
    let use_case = GetAverageUseCase::new(
        Arc::clone(&state.fetcher),
        Arc::clone(&state.windows),
    );

    let result = use_case.execute(&number_id).await.map_err(|e| {
        tracing::debug!(number_id = %number_id, error = %e, "Rejected request");
        ApiError::from(e)
    })?;

    Ok(Json(NumbersResponse::from(result)))
}
