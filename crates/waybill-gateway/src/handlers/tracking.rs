use crate::error::Result;
use crate::model::{TrackingNumberParams, TrackingNumberResponse};
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use jiff::Timestamp;

pub async fn next_tracking_number_handler(
    State(state): State<AppState>,
    Query(params): Query<TrackingNumberParams>,
) -> Result<Json<TrackingNumberResponse>> {
    let request = params.into_request()?;
    let tracking_number = state.service().next_tracking_number(&request).await?;

    Ok(Json(TrackingNumberResponse {
        tracking_number: tracking_number.to_string(),
        // Generated at response time, not echoed from the request.
        created_at: Timestamp::now().to_string(),
    }))
}
