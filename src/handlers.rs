use crate::errors::AppError;
use crate::models::SummaryResponse;
use crate::source::fetch_all_records;
use crate::state::AppState;
use crate::stats::aggregate;
use crate::ui;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use tracing::error;

pub async fn index() -> Html<&'static str> {
    Html(ui::INDEX_HTML)
}

pub async fn get_summary(
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, AppError> {
    let config = state.store.as_ref().ok_or_else(AppError::not_configured)?;

    let records = fetch_all_records(&state.client, config)
        .await
        .map_err(|err| {
            error!("record store scan failed: {err}");
            AppError::from(err)
        })?;

    Ok(Json(SummaryResponse::success(aggregate(&records))))
}

pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
