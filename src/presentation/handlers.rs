// HTTP request handlers
use crate::domain::errors::{ActionError, InteractionError};
use crate::domain::view_state::{SortColumn, ViewState};
use crate::infrastructure::chunked_html::chunked_html_stream;
use crate::infrastructure::http_response::{accepts_brotli, html_response};
use crate::presentation::app_state::AppState;
use crate::presentation::views::{DASHBOARD_TITLE, PROFILE_TITLE};
use axum::{
    Form,
    body::Body,
    extract::State,
    http::{HeaderMap, Response, StatusCode},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use std::sync::Arc;

const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub term: String,
}

#[derive(Deserialize)]
pub struct SortForm {
    #[serde(default)]
    pub column: String,
}

#[derive(Deserialize)]
pub struct PageForm {
    #[serde(default)]
    pub page: String,
}

#[derive(Deserialize)]
pub struct PageSizeForm {
    #[serde(default, rename = "pageSize")]
    pub page_size: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn root_redirect() -> Redirect {
    Redirect::to(DASHBOARD_PATH)
}

pub async fn not_found(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let html = state.views.document("Not found", &state.views.not_found());
    (StatusCode::NOT_FOUND, axum::response::Html(html))
}

/// Mount the dashboard: rehydrate view state, fetch comments, render the table
pub async fn dashboard_page(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response<Body> {
    let mut page = state.dashboard_service.mount();

    if !state.ui.stream_pages {
        page.resolve().await;
        let content = state.views.dashboard(&page, &state.ui.page_size_options);
        let html = state.views.document(DASHBOARD_TITLE, &content);
        return complete_page(html, &headers).await;
    }

    let fragments = async_stream::stream! {
        yield state.views.shell_open(DASHBOARD_TITLE);
        yield state.views.spinner();
        page.resolve().await;
        yield state.views.loaded();
        yield state.views.dashboard(&page, &state.ui.page_size_options);
        yield state.views.shell_close();
    };

    chunked_html_stream(fragments)
}

/// Mount the profile page for the first fetched user
pub async fn profile_page(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response<Body> {
    let mut page = state.profile_service.mount();

    if !state.ui.stream_pages {
        let content = state.views.profile(&page.finish().await);
        let html = state.views.document(PROFILE_TITLE, &content);
        return complete_page(html, &headers).await;
    }

    let fragments = async_stream::stream! {
        yield state.views.shell_open(PROFILE_TITLE);
        yield state.views.spinner();
        page.resolve().await;
        yield state.views.loaded();
        yield state.views.profile(page.state());
        yield state.views.shell_close();
    };

    chunked_html_stream(fragments)
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> Response<Body> {
    after_action(state.dashboard_service.search(&form.term))
}

pub async fn click_sort(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SortForm>,
) -> Response<Body> {
    let result = form
        .column
        .parse::<SortColumn>()
        .map_err(ActionError::from)
        .and_then(|column| state.dashboard_service.click_sort(column));
    after_action(result)
}

pub async fn change_page(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PageForm>,
) -> Response<Body> {
    let result = form
        .page
        .trim()
        .parse::<usize>()
        .map_err(|_| ActionError::from(InteractionError::InvalidPage))
        .and_then(|page| state.dashboard_service.go_to_page(page));
    after_action(result)
}

pub async fn change_page_size(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PageSizeForm>,
) -> Response<Body> {
    let result = form
        .page_size
        .trim()
        .parse::<usize>()
        .map_err(|_| ActionError::from(InteractionError::InvalidPageSize))
        .and_then(|size| state.dashboard_service.resize_pages(size));
    after_action(result)
}

async fn complete_page(html: String, headers: &HeaderMap) -> Response<Body> {
    match html_response(html, accepts_brotli(headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Redirect back so that a reload re-mounts from the persisted state
fn after_action(result: Result<ViewState, ActionError>) -> Response<Body> {
    match result {
        Ok(_) => Redirect::to(DASHBOARD_PATH).into_response(),
        Err(ActionError::Interaction(e)) => {
            tracing::debug!("Rejected dashboard interaction: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
        Err(ActionError::Store(e)) => {
            tracing::error!("Failed to persist dashboard state: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to save view state").into_response()
        }
    }
}
