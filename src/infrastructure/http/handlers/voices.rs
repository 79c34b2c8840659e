//! Voices HTTP Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ListVoices;
use crate::infrastructure::http::dto::{ApiResponse, VoiceDto, VoicesResult};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 当前引擎的可用音色列表
pub async fn list_voices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<VoicesResult>>, ApiError> {
    let voices = state.list_voices_handler.handle(ListVoices).await?;

    Ok(Json(ApiResponse::success(VoicesResult {
        voices: voices.into_iter().map(VoiceDto::from).collect(),
    })))
}
