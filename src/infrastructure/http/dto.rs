//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{SpeakResponse, SpeechSettings};
use crate::domain::speech::VoiceInfo;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

/// 空数据响应
#[derive(Debug, Serialize)]
pub struct Empty {}

impl ApiResponse<Empty> {
    /// 成功但无数据
    #[allow(dead_code)]
    pub fn ok() -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(Empty {}),
        }
    }
}

// ============================================================================
// Speak DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SpeakResult {
    pub utterance_id: Uuid,
    pub engine: String,
    pub voice: String,
    pub chars: usize,
    pub audio_bytes: usize,
    pub duration_ms: Option<u64>,
    pub sample_rate: Option<u32>,
}

impl From<SpeakResponse> for SpeakResult {
    fn from(r: SpeakResponse) -> Self {
        Self {
            utterance_id: r.utterance_id,
            engine: r.engine.to_string(),
            voice: r.voice,
            chars: r.chars,
            audio_bytes: r.audio_bytes,
            duration_ms: r.duration_ms,
            sample_rate: r.sample_rate,
        }
    }
}

// ============================================================================
// Config DTOs
// ============================================================================

#[derive(Debug, Deserialize, Default)]
pub struct ConfigUpdateRequest {
    /// 语速（wpm）
    pub rate: Option<u16>,
    /// 音量（0.0 - 1.0）
    pub volume: Option<f32>,
    /// 引擎音色标识
    pub voice: Option<String>,
    /// 音频输出设备
    pub device: Option<String>,
}

/// 当前合成参数
#[derive(Debug, Serialize)]
pub struct SettingsDto {
    pub engine: String,
    pub voice: String,
    pub rate: u16,
    pub volume: f32,
    pub device: Option<String>,
    pub updated_at: String,
}

impl From<SpeechSettings> for SettingsDto {
    fn from(s: SpeechSettings) -> Self {
        Self {
            engine: s.engine.to_string(),
            voice: s.voice,
            rate: s.rate.wpm(),
            volume: s.volume.value(),
            device: s.device,
            updated_at: s.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SetVoiceParams {
    pub voice_name: String,
}

#[derive(Debug, Serialize)]
pub struct SetVoiceResult {
    pub voice_id: String,
    pub voice_name: String,
    pub settings: SettingsDto,
}

#[derive(Debug, Deserialize)]
pub struct SetSpeedParams {
    pub speed: f32,
}

#[derive(Debug, Deserialize)]
pub struct SwitchEngineParams {
    pub engine: String,
}

#[derive(Debug, Serialize)]
pub struct SwitchEngineResult {
    pub engine: String,
    pub reachable: bool,
    pub settings: SettingsDto,
}

// ============================================================================
// Status / Voices DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct VoiceDto {
    pub id: String,
    pub name: String,
    pub language: Option<String>,
}

impl From<VoiceInfo> for VoiceDto {
    fn from(v: VoiceInfo) -> Self {
        Self {
            id: v.id,
            name: v.name,
            language: v.language,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResult {
    pub status: &'static str,
    pub module: &'static str,
    pub engine: String,
    pub engine_reachable: bool,
    pub available_voices: Vec<VoiceDto>,
}

#[derive(Debug, Serialize)]
pub struct VoicesResult {
    pub voices: Vec<VoiceDto>,
}

#[derive(Debug, Serialize)]
pub struct EngineHealthDto {
    pub engine: String,
    pub reachable: bool,
}

#[derive(Debug, Serialize)]
pub struct EngineInfoResult {
    pub engines: Vec<EngineHealthDto>,
    pub settings: SettingsDto,
}
