//! Audio Sink Port - 音频播放抽象
//!
//! 音频输出设备是整个服务唯一的共享资源，实现必须串行化播放：
//! 并发的播放请求排队等待，而不是争抢设备

use async_trait::async_trait;
use thiserror::Error;

/// 播放错误
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("Player binary not found: {0}")]
    BinaryNotFound(String),

    #[error("Failed to spawn player process: {0}")]
    SpawnError(String),

    #[error("Player exited with {status}: {stderr}")]
    PlayerFailed { status: String, stderr: String },

    #[error("Audio device unavailable: {0}")]
    DeviceUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Audio Sink Port
#[async_trait]
pub trait AudioSinkPort: Send + Sync {
    /// 播放 WAV 数据，阻塞直至播放完成
    ///
    /// device 为 ALSA 设备标识（如 "hw:0,0"），None 表示系统默认设备
    async fn play(&self, wav_data: &[u8], device: Option<&str>) -> Result<(), PlaybackError>;
}
