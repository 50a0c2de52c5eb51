// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    change_page, change_page_size, click_sort, dashboard_page, health_check, not_found,
    profile_page, root_redirect, search,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/", get(root_redirect))
        .route("/dashboard", get(dashboard_page))
        .route("/dashboard/search", post(search))
        .route("/dashboard/sort", post(click_sort))
        .route("/dashboard/page", post(change_page))
        .route("/dashboard/page-size", post(change_page_size))
        .route("/profile", get(profile_page))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
