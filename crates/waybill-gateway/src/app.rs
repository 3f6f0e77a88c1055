use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{health_handler, next_tracking_number_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/next-tracking-number", get(next_tracking_number_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
