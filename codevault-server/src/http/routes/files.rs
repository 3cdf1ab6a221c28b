//! File endpoint - one path, dispatched on method
//!
//! - `GET /api/files`: list, newest first
//! - `POST /api/files`: upsert keyed by `id`, keeping the original `createdAt`
//! - `DELETE /api/files?id=<id>`: delete one
//! - `DELETE /api/files?action=clear`: delete all
//! - `OPTIONS /api/files`: bare 200

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{FileRecord, NewFile, ValidationError};

/// `action` value that clears the whole collection
const CLEAR_ACTION: &str = "clear";

/// Query parameters understood by DELETE
#[derive(Debug, Default, Deserialize)]
pub struct FileQuery {
    pub id: Option<String>,
    pub action: Option<String>,
}

#[derive(Serialize)]
pub struct FileListResponse {
    pub success: bool,
    pub files: Vec<FileRecord>,
}

#[derive(Serialize)]
pub struct FileResponse {
    pub success: bool,
    pub file: FileRecord,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

impl MessageResponse {
    fn ok(message: &'static str) -> Json<Self> {
        Json(Self {
            success: true,
            message,
        })
    }
}

/// Route a request on `/api/files` by method
async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    query: Result<Query<FileQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Response, ApiError> {
    // Only DELETE reads the query; a malformed one must not block other methods
    match method {
        Method::OPTIONS => Ok(StatusCode::OK.into_response()),
        Method::GET => Ok(list_files(&state).await?.into_response()),
        Method::POST => Ok(upsert_file(&state, &body).await?.into_response()),
        Method::DELETE => {
            let Query(query) = query.map_err(|rejection| {
                tracing::debug!("Rejected query string: {}", rejection);
                ValidationError::InvalidQuery
            })?;
            Ok(delete_files(&state, query).await?.into_response())
        }
        other => Err(ApiError::MethodNotAllowed(other)),
    }
}

async fn list_files(state: &AppState) -> Result<Json<FileListResponse>, ApiError> {
    let files = state.store().list().await?;

    Ok(Json(FileListResponse {
        success: true,
        files,
    }))
}

async fn upsert_file(state: &AppState, body: &[u8]) -> Result<Json<FileResponse>, ApiError> {
    let mut file = NewFile::from_body(body)?.stamp(Utc::now());
    let store = state.store();

    match store.find(&file.id).await? {
        Some(existing) => {
            file.created_at = existing.created_at;
            store.replace(&file).await?;
            tracing::debug!(id = %file.id, "Replaced file");
        }
        None => {
            store.insert(&file).await?;
            tracing::debug!(id = %file.id, "Inserted file");
        }
    }

    Ok(Json(FileResponse {
        success: true,
        file,
    }))
}

async fn delete_files(
    state: &AppState,
    query: FileQuery,
) -> Result<Json<MessageResponse>, ApiError> {
    if query.action.as_deref() == Some(CLEAR_ACTION) {
        let removed = state.store().clear().await?;
        tracing::info!(removed, "Cleared all files");
        return Ok(MessageResponse::ok("All files cleared"));
    }

    let id = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or(ValidationError::MissingTarget)?;

    if state.store().delete(&id).await? == 0 {
        return Err(ApiError::NotFound);
    }

    tracing::debug!(id = %id, "Deleted file");
    Ok(MessageResponse::ok("File deleted"))
}

/// File routes
pub fn router() -> Router<AppState> {
    Router::new().route("/api/files", any(dispatch))
}
