//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter for endpoint exposure:
//! - `worksheet` - PDF generation (`/api/generate-pdf`, `/api/sample-pdf`)
//! - `exercise` - CRUD over stored exercises (`/api/exercises`)

pub mod error;
pub mod exercise;
pub mod worksheet;

use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

// Re-export key types for convenience
pub use error::{ApiError, ErrorResponse};
pub use exercise::{exercise_routes, ExerciseHandlers};
pub use worksheet::{worksheet_routes, WorksheetHandlers};

/// Every route the service exposes, without middleware.
pub fn api_router(worksheet: WorksheetHandlers, exercises: ExerciseHandlers) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(worksheet_routes(worksheet))
        .merge(exercise_routes(exercises))
}

/// Wraps `router` with request tracing, the request timeout and CORS.
pub fn with_middleware(router: Router, config: &ServerConfig) -> Router {
    router
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(cors_layer(&config.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

/// Any origin when none are configured.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(
            origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_returns_ok() {
        let router = Router::new().route("/health", get(health));
        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn configured_origin_is_echoed() {
        let config = ServerConfig {
            cors_origins: Some("http://localhost:5173, ".to_string()),
            ..ServerConfig::default()
        };
        let router = with_middleware(Router::new().route("/health", get(health)), &config);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
    }
}
