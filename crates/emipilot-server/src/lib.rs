//! EMI Pilot Web Server
//!
//! Axum-based REST API for the EMI Pilot personal finance tracker.
//!
//! There is no authentication: the tracker models a single implicit user.
//! Validation failures come back as 400 with a human-readable `message`
//! field, unknown identifiers as 404, and store failures as a generic 500
//! (the underlying error is logged, never returned to the client).

use std::sync::Arc;

use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

use emipilot_core::db::Database;

mod handlers;

/// Shared application state
pub struct AppState {
    pub db: Database,
}

/// Create the application router
pub fn create_router(db: Database, static_dir: Option<&str>) -> Router {
    let state = Arc::new(AppState { db });

    let api_routes = Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // EMIs
        .route(
            "/emis",
            get(handlers::list_emis).post(handlers::create_emi),
        )
        .route("/emis/summary/all", get(handlers::emi_summary))
        .route(
            "/emis/:id",
            get(handlers::get_emi)
                .put(handlers::update_emi)
                .delete(handlers::delete_emi),
        )
        // Income singleton
        .route(
            "/user/income",
            get(handlers::get_income).post(handlers::set_income),
        )
        // Derived metrics (server-side rendering of the engine)
        .route("/stress", get(handlers::get_stress))
        .route("/insights", get(handlers::get_insights))
        .route("/timeline", get(handlers::get_timeline));

    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    let mut app = Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Serve the web UI build if a directory was provided
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app
}

/// Start the server
pub async fn serve(
    db: Database,
    host: &str,
    port: u16,
    static_dir: Option<&str>,
) -> anyhow::Result<()> {
    let app = create_router(db, static_dir);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "message": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<emipilot_core::Error> for AppError {
    fn from(err: emipilot_core::Error) -> Self {
        use emipilot_core::Error;

        match err {
            Error::InvalidData(msg) => Self {
                status: StatusCode::BAD_REQUEST,
                message: msg,
                internal: None,
            },
            Error::NotFound(msg) => Self {
                status: StatusCode::NOT_FOUND,
                message: msg,
                internal: None,
            },
            other => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                // Return generic message to client
                message: "An internal error occurred".to_string(),
                // Keep full error for logging
                internal: Some(other.into()),
            },
        }
    }
}
