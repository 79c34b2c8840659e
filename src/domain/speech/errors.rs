//! Speech Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("未知的 TTS 引擎: {0}")]
    UnknownEngine(String),

    #[error("语速必须在 {min} 到 {max} wpm 之间: {value}")]
    InvalidRate { value: u16, min: u16, max: u16 },

    #[error("音量必须在 0.0 到 1.0 之间: {0}")]
    InvalidVolume(f32),

    #[error("语速倍率必须在 0.5 到 2.0 之间: {0}")]
    InvalidSpeed(f32),

    #[error("音色名称不能为空")]
    EmptyVoiceName,

    #[error("音色不存在: {0}")]
    VoiceNotFound(String),
}
