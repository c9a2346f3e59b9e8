//! API request handlers

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::RemapResult;
use crate::excel::{decode_base64, encode_base64};
use crate::mapping::MappingProvider;
use crate::remap::{parse_standard_columns, remap_workbook};
use crate::types::{ColumnMapping, ModelConnection};

use super::server::AppState;

/// Caller-supplied model connection headers
pub const HEADER_API_KEY: &str = "OpenAI-APIKey";
pub const HEADER_HOST: &str = "OpenAI-Host";
pub const HEADER_VERSION: &str = "OpenAI-Version";
pub const HEADER_DEPLOYMENT: &str = "OpenAI-Deployment";

pub const MISSING_HEADERS_MESSAGE: &str =
    "Please provide the OpenAI API Key, Host, Version, and Deployment headers";
pub const MISSING_COLUMNS_MESSAGE: &str =
    "Please provide a comma separated list of standard headers.";
pub const MISSING_FILE_MESSAGE: &str = "Please provide a base64 encoded Excel document.";

/// Standard API response wrapper for the informational endpoints
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            data: Some(data),
        }
    }
}

/// Root endpoint response
#[derive(Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Serialize)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

impl EndpointInfo {
    fn new(path: &str, method: &str, description: &str) -> Self {
        Self {
            path: path.to_string(),
            method: method.to_string(),
            description: description.to_string(),
        }
    }
}

/// GET / - Root info
pub async fn root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = RootResponse {
        name: "Excel Remap API Server".to_string(),
        version: state.version.clone(),
        description: "Remap spreadsheet columns to a standard layout".to_string(),
        endpoints: vec![
            EndpointInfo::new("/health", "GET", "Health check endpoint"),
            EndpointInfo::new("/version", "GET", "Get server version"),
            EndpointInfo::new(
                "/api/remap_excel",
                "POST",
                "Remap a base64 encoded workbook onto standard columns",
            ),
        ],
    };
    Json(ApiResponse::ok(response))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
    }))
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(VersionResponse {
        version: state.version.clone(),
    }))
}

/// Remap request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemapRequest {
    #[serde(default)]
    pub standard_columns: Option<String>,
    #[serde(default)]
    pub excel_file: Option<String>,
}

/// Remap response body
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemapResponse {
    pub standard_columns: Vec<String>,
    pub excel_columns: Vec<String>,
    pub mapping: ColumnMapping,
    pub excel_file: String,
}

/// Collect the four model connection headers. Missing, empty or non-text
/// values yield `None`.
pub fn model_connection(headers: &HeaderMap) -> Option<ModelConnection> {
    let get = |name: &str| -> Option<String> {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
    };

    Some(ModelConnection::new(
        get(HEADER_API_KEY)?,
        get(HEADER_HOST)?,
        get(HEADER_VERSION)?,
        get(HEADER_DEPLOYMENT)?,
    ))
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, message.to_string()).into_response()
}

fn server_error(error: impl std::fmt::Display) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("An error occurred: {}", error),
    )
        .into_response()
}

async fn run_remap(
    excel_file: &str,
    standard_columns: &str,
    provider: &dyn MappingProvider,
) -> RemapResult<RemapResponse> {
    let workbook = decode_base64(excel_file)?;
    let standard_columns = parse_standard_columns(standard_columns);
    let outcome = remap_workbook(&workbook, &standard_columns, provider).await?;

    Ok(RemapResponse {
        standard_columns: outcome.standard_columns,
        excel_columns: outcome.excel_columns,
        mapping: outcome.mapping,
        excel_file: encode_base64(&outcome.excel_file),
    })
}

/// POST /api/remap_excel - Remap a workbook onto the standard columns
///
/// A body over the size limit is reported like any other unreadable body:
/// 500 with the error text, after the header check.
pub async fn remap_excel(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let request_id = Uuid::new_v4();
    info!(%request_id, "Processing remap_excel request");

    let Some(connection) = model_connection(&headers) else {
        warn!(%request_id, "Missing model connection headers");
        return bad_request(MISSING_HEADERS_MESSAGE);
    };

    let body = match body {
        Ok(body) => body,
        Err(e) => {
            warn!(%request_id, error = %e, "Request body could not be read");
            return server_error(e);
        }
    };

    let req: RemapRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => {
            warn!(%request_id, error = %e, "Request body is not valid JSON");
            return server_error(e);
        }
    };

    let Some(standard_columns) = req.standard_columns.filter(|s| !s.is_empty()) else {
        return bad_request(MISSING_COLUMNS_MESSAGE);
    };
    let Some(excel_file) = req.excel_file.filter(|s| !s.is_empty()) else {
        return bad_request(MISSING_FILE_MESSAGE);
    };

    let provider = state.connector.connect(connection);
    let result = run_remap(&excel_file, &standard_columns, provider.as_ref()).await;

    match result {
        Ok(response) => {
            info!(%request_id, "remap_excel completed");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            warn!(%request_id, error = %e, "remap_excel failed");
            server_error(e)
        }
    }
}
