//! Config HTTP Handlers
//!
//! /config 接收 JSON 局部更新；/voice /speed /engine 沿用
//! Corpus 伴生系统的查询参数约定

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::application::{SetSpeed, SetVoice, SwitchEngine, UpdateVoiceConfig};
use crate::infrastructure::http::dto::{
    ApiResponse, ConfigUpdateRequest, SetSpeedParams, SetVoiceParams, SetVoiceResult, SettingsDto,
    SwitchEngineParams, SwitchEngineResult,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 局部更新合成参数
pub async fn update_config(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConfigUpdateRequest>,
) -> Result<Json<ApiResponse<SettingsDto>>, ApiError> {
    let command = UpdateVoiceConfig {
        rate: req.rate,
        volume: req.volume,
        voice: req.voice,
        device: req.device,
    };

    let updated = state.update_config_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(SettingsDto::from(updated))))
}

/// 按友好名称设置音色
pub async fn set_voice(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SetVoiceParams>,
) -> Result<Json<ApiResponse<SetVoiceResult>>, ApiError> {
    let result = state
        .set_voice_handler
        .handle(SetVoice {
            voice_name: params.voice_name,
        })
        .await?;

    Ok(Json(ApiResponse::success(SetVoiceResult {
        voice_id: result.voice_id,
        voice_name: result.voice_name,
        settings: SettingsDto::from(result.settings),
    })))
}

/// 设置语速倍率
pub async fn set_speed(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SetSpeedParams>,
) -> Result<Json<ApiResponse<SettingsDto>>, ApiError> {
    let updated = state
        .set_speed_handler
        .handle(SetSpeed {
            speed: params.speed,
        })
        .await?;

    Ok(Json(ApiResponse::success(SettingsDto::from(updated))))
}

/// 切换 TTS 引擎
pub async fn switch_engine(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SwitchEngineParams>,
) -> Result<Json<ApiResponse<SwitchEngineResult>>, ApiError> {
    let result = state
        .switch_engine_handler
        .handle(SwitchEngine {
            engine: params.engine,
        })
        .await?;

    Ok(Json(ApiResponse::success(SwitchEngineResult {
        engine: result.engine.to_string(),
        reachable: result.reachable,
        settings: SettingsDto::from(result.settings),
    })))
}
