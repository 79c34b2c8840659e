//! Status HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{GetEngineInfo, GetStatus};
use crate::infrastructure::http::dto::{
    ApiResponse, EngineHealthDto, EngineInfoResult, SettingsDto, StatusResult, VoiceDto,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 服务状态：当前引擎可达性与可用音色
pub async fn status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<StatusResult>>, ApiError> {
    let report = state.get_status_handler.handle(GetStatus).await?;

    let status = if report.engine_reachable {
        "running"
    } else {
        "degraded"
    };

    Ok(Json(ApiResponse::success(StatusResult {
        status,
        module: "corpus-speech",
        engine: report.engine.to_string(),
        engine_reachable: report.engine_reachable,
        available_voices: report
            .available_voices
            .into_iter()
            .map(VoiceDto::from)
            .collect(),
    })))
}

/// 引擎详情与当前参数快照
pub async fn info(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<EngineInfoResult>>, ApiError> {
    let report = state.get_engine_info_handler.handle(GetEngineInfo).await?;

    Ok(Json(ApiResponse::success(EngineInfoResult {
        engines: report
            .engines
            .into_iter()
            .map(|e| EngineHealthDto {
                engine: e.engine.to_string(),
                reachable: e.reachable,
            })
            .collect(),
        settings: SettingsDto::from(report.settings),
    })))
}
