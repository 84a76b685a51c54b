//! HTTP handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::device::CardDeviceType;
use crate::error::CommandError;
use crate::protocol::{
    CardProfileRequest, DefaultDeviceRequest, ErrorResponse, MuteRequest, SnapshotResponse, VolumeRequest,
};
use crate::ui::server::AppState;

/// Handler failure, rendered as `{ "error": ... }`
#[derive(Debug)]
pub enum ApiError {
    /// Malformed body or device type
    BadRequest(String),
    /// The control tool rejected the command
    Command(CommandError),
}

impl From<CommandError> for ApiError {
    fn from(e: CommandError) -> Self {
        match e {
            CommandError::UnspecifiedProfile => Self::BadRequest(e.to_string()),
            e => Self::Command(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Command(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::BadRequest(format!("bad request body: {}", e)))
}

fn parse_device_type(value: &str) -> Result<CardDeviceType, ApiError> {
    value.parse().map_err(|e: crate::error::ParseError| ApiError::BadRequest(e.to_string()))
}

/// GET /
pub async fn index() -> Redirect {
    Redirect::to("/audio")
}

/// GET /audio
pub async fn get_audio(State(state): State<Arc<AppState>>) -> Json<SnapshotResponse> {
    let snapshot = state.emit_device_state().await;
    Json(SnapshotResponse::now(snapshot))
}

/// POST /audio/volume
pub async fn set_volume(State(state): State<Arc<AppState>>, body: String) -> Result<StatusCode, ApiError> {
    let request: VolumeRequest = parse_body(&body)?;
    let device_type = parse_device_type(&request.device_type)?;

    state.audio.set_volume(device_type, request.index, request.volume).await?;
    state.emit_device_state().await;

    Ok(StatusCode::OK)
}

/// POST /audio/mute
pub async fn set_mute(State(state): State<Arc<AppState>>, body: String) -> Result<StatusCode, ApiError> {
    let request: MuteRequest = parse_body(&body)?;
    let device_type = parse_device_type(&request.device_type)?;

    state.audio.set_mute(device_type, request.index, request.mute).await?;
    state.emit_device_state().await;

    Ok(StatusCode::OK)
}

/// POST /audio/default
///
/// Also moves every client onto the new default device.
pub async fn set_default_device(State(state): State<Arc<AppState>>, body: String) -> Result<StatusCode, ApiError> {
    let request: DefaultDeviceRequest = parse_body(&body)?;
    let device_type = parse_device_type(&request.device_type)?;

    state.audio.set_default_device(device_type, request.index).await?;
    state
        .audio
        .move_audio_clients(device_type, request.index, &request.name)
        .await?;
    state.emit_device_state().await;

    Ok(StatusCode::OK)
}

/// POST /audio/profile
pub async fn set_card_profile(State(state): State<Arc<AppState>>, body: String) -> Result<StatusCode, ApiError> {
    let request: CardProfileRequest = parse_body(&body)?;

    state.audio.set_card_profile(request.index, request.profile).await?;
    state.emit_device_state().await;

    Ok(StatusCode::OK)
}
