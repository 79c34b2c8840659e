//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{PlaybackError, TtsError};
use crate::domain::speech::SpeechError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 音色未找到
    #[error("Voice not found: {0}")]
    VoiceNotFound(String),

    /// 引擎不可用
    #[error("Engine unavailable: {0}")]
    EngineUnavailable(String),

    /// 合成失败
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// 播放失败
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建引擎不可用错误
    pub fn engine_unavailable(message: impl Into<String>) -> Self {
        Self::EngineUnavailable(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<SpeechError> for ApplicationError {
    fn from(err: SpeechError) -> Self {
        match err {
            SpeechError::VoiceNotFound(name) => Self::VoiceNotFound(name),
            other => Self::ValidationError(other.to_string()),
        }
    }
}

impl From<TtsError> for ApplicationError {
    fn from(err: TtsError) -> Self {
        match err {
            TtsError::BinaryNotFound(_) | TtsError::Timeout(_) => {
                Self::EngineUnavailable(err.to_string())
            }
            TtsError::VoiceNotFound(name) => Self::VoiceNotFound(name),
            other => Self::SynthesisFailed(other.to_string()),
        }
    }
}

impl From<PlaybackError> for ApplicationError {
    fn from(err: PlaybackError) -> Self {
        Self::PlaybackFailed(err.to_string())
    }
}
