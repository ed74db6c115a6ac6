//! StudyMate API Service
//!
//! HTTP surface for the study-material generator: upload a PDF and a
//! topic, page through the generated sections, download the Word
//! export.

use anyhow::Result;
use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{delete, get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use uuid::Uuid;

use studymate_api::completion_client::CompletionClient;
use studymate_api::service::{GenerationSummary, PageView, SessionCreated, SessionService};
use studymate_models::SectionToggleSet;
use studymate_utils::{init_logging, AppConfig, ErrorResponse, StudyMateError};

const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().unwrap_or_else(|_| {
        eprintln!("Failed to load configuration, using defaults");
        AppConfig::default()
    });

    init_logging(&config.logging)?;
    info!("Starting StudyMate API Service");

    let completion_client = CompletionClient::new(config.completion.clone())?;
    let service = SessionService::new(completion_client);

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/sessions", post(create_session))
        .route("/api/v1/sessions/:id", delete(end_session))
        .route("/api/v1/sessions/:id/generate", post(generate))
        .route("/api/v1/sessions/:id/page", get(current_page))
        .route("/api/v1/sessions/:id/page/previous", post(previous_page))
        .route("/api/v1/sessions/:id/page/next", post(next_page))
        .route("/api/v1/sessions/:id/export", get(export))
        .layer(DefaultBodyLimit::max(config.server.max_upload_bytes))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = TcpListener::bind(&addr).await?;
    info!("StudyMate API listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// StudyMateError carried across the handler boundary.
struct ApiError(StudyMateError);

impl From<StudyMateError> for ApiError {
    fn from(error: StudyMateError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = self.0.into();
        (status, Json(body)).into_response()
    }
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "study-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn create_session(State(service): State<SessionService>) -> Json<SessionCreated> {
    Json(service.create_session().await)
}

async fn end_session(
    State(service): State<SessionService>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    service.end_session(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Multipart upload: a `file` part with the PDF bytes and a `topic`
/// text part. Toggles ride in as query parameters, defaulting to all
/// sections enabled.
async fn generate(
    State(service): State<SessionService>,
    Path(id): Path<Uuid>,
    Query(toggles): Query<SectionToggleSet>,
    mut multipart: Multipart,
) -> Result<Json<GenerationSummary>, ApiError> {
    let mut pdf_bytes: Option<Vec<u8>> = None;
    let mut topic: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| StudyMateError::validation("upload", e.to_string()))?
    {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("file") => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| StudyMateError::validation("file", e.to_string()))?;
                pdf_bytes = Some(data.to_vec());
            }
            Some("topic") => {
                topic = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| StudyMateError::validation("topic", e.to_string()))?,
                );
            }
            _ => {}
        }
    }

    let pdf_bytes = pdf_bytes.ok_or_else(|| {
        StudyMateError::validation("file", "please upload a PDF and enter a topic/keyword")
    })?;
    let topic = topic.unwrap_or_default();

    let summary = service.generate(id, &pdf_bytes, &topic, &toggles).await?;
    Ok(Json(summary))
}

async fn current_page(
    State(service): State<SessionService>,
    Path(id): Path<Uuid>,
    Query(toggles): Query<SectionToggleSet>,
) -> Result<Json<PageView>, ApiError> {
    Ok(Json(service.current_page(id, &toggles).await?))
}

async fn previous_page(
    State(service): State<SessionService>,
    Path(id): Path<Uuid>,
    Query(toggles): Query<SectionToggleSet>,
) -> Result<Json<PageView>, ApiError> {
    Ok(Json(service.previous_page(id, &toggles).await?))
}

async fn next_page(
    State(service): State<SessionService>,
    Path(id): Path<Uuid>,
    Query(toggles): Query<SectionToggleSet>,
) -> Result<Json<PageView>, ApiError> {
    Ok(Json(service.next_page(id, &toggles).await?))
}

async fn export(
    State(service): State<SessionService>,
    Path(id): Path<Uuid>,
    Query(toggles): Query<SectionToggleSet>,
) -> Result<Response, ApiError> {
    let export = service.export(id, &toggles).await?;

    let headers = [
        (header::CONTENT_TYPE, DOCX_MIME.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export.filename),
        ),
    ];
    Ok((headers, export.bytes).into_response())
}
