//! Speak HTTP Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::Speak;
use crate::infrastructure::http::dto::{ApiResponse, SpeakRequest, SpeakResult};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 合成并播放一段文本
pub async fn speak(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SpeakRequest>,
) -> Result<Json<ApiResponse<SpeakResult>>, ApiError> {
    let result = state.speak_handler.handle(Speak { text: req.text }).await?;

    Ok(Json(ApiResponse::success(SpeakResult::from(result))))
}
