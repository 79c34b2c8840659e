//! TTS Engine Port - 合成引擎抽象
//!
//! 定义外部 TTS 引擎（espeak / festival 等子进程）的抽象接口，
//! 具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::speech::{EngineKind, SpeakingRate, VoiceInfo, Volume};

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Engine binary not found: {0}")]
    BinaryNotFound(String),

    #[error("Failed to spawn engine process: {0}")]
    SpawnError(String),

    #[error("Engine timed out after {0}s")]
    Timeout(u64),

    #[error("Engine exited with {status}: {stderr}")]
    EngineFailed { status: String, stderr: String },

    #[error("Invalid engine output: {0}")]
    InvalidOutput(String),

    #[error("Voice not found: {0}")]
    VoiceNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 合成请求
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// 要合成的文本
    pub text: String,
    /// 引擎音色标识
    pub voice: String,
    /// 语速
    pub rate: SpeakingRate,
    /// 音量
    pub volume: Volume,
}

/// 合成结果
///
/// audio_data 为完整的 WAV 字节流，时长与采样率由
/// infrastructure 层的 WAV 探测补充
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    /// WAV 音频数据
    pub audio_data: Vec<u8>,
}

/// TTS Engine Port
///
/// 每个实现包装一个外部引擎二进制
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 引擎种类
    fn kind(&self) -> EngineKind;

    /// 合成语音，返回 WAV 数据
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesizedAudio, TtsError>;

    /// 列出引擎已安装的音色
    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, TtsError>;

    /// 检查引擎二进制是否可用
    async fn health_check(&self) -> bool;
}
