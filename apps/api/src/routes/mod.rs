pub mod health;

use std::any::Any;

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, Method,
    },
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
};

use crate::accounts::handlers as accounts;
use crate::catalog::handlers as catalog;
use crate::engagement::handlers as engagement;
use crate::errors::AppError;
use crate::events::handlers as events;
use crate::feed::handlers as feed;
use crate::job_requests::{handlers as job_requests, uploads::MAX_BODY_BYTES};
use crate::posts::handlers as posts;
use crate::state::AppState;

/// Any origin; request headers limited to what the web and mobile clients send.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}

fn panic_response(_: Box<dyn Any + Send + 'static>) -> Response {
    AppError::Internal(anyhow::anyhow!("request handler panicked")).into_response()
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Feed
        .route(
            "/functions/v1/get-job-post-list-company",
            post(feed::handle_company_feed),
        )
        // Engagement
        .route(
            "/functions/v1/toggle-like",
            post(engagement::handle_toggle_like),
        )
        .route(
            "/functions/v1/toggle-share",
            post(engagement::handle_toggle_share),
        )
        .route(
            "/functions/v1/toggle-favorite",
            post(engagement::handle_toggle_favorite),
        )
        .route(
            "/functions/v1/add-comment",
            post(engagement::handle_add_comment),
        )
        // Content creation
        .route("/functions/v1/create-post", post(posts::handle_create_post))
        .route(
            "/functions/v1/create-job-request",
            post(job_requests::handle_create_job_request)
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .route(
            "/functions/v1/mark-event-interest",
            post(events::handle_mark_event_interest),
        )
        // Accounts
        .route(
            "/functions/v1/validate-login",
            post(accounts::handle_validate_login),
        )
        .route(
            "/functions/v1/delete-account",
            post(accounts::handle_delete_account),
        )
        // Admin catalog
        .route(
            "/api/v1/catalog/:kind",
            get(catalog::handle_list_entries).post(catalog::handle_create_entry),
        )
        .route(
            "/api/v1/catalog/:kind/:id",
            patch(catalog::handle_update_entry).delete(catalog::handle_delete_entry),
        )
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer())
}
