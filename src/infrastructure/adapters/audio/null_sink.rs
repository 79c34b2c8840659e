//! Null Sink - 丢弃音频的播放器
//!
//! 用于测试和无音频硬件的环境（CI、容器）

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{AudioSinkPort, PlaybackError};

/// 丢弃一切的播放器
#[derive(Debug, Default)]
pub struct NullSink {
    played: AtomicUsize,
}

impl NullSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已"播放"的次数
    pub fn play_count(&self) -> usize {
        self.played.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AudioSinkPort for NullSink {
    async fn play(&self, wav_data: &[u8], device: Option<&str>) -> Result<(), PlaybackError> {
        self.played.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(
            bytes = wav_data.len(),
            device = device.unwrap_or("default"),
            "NullSink: discarding audio"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_counts_plays() {
        let sink = NullSink::new();
        sink.play(&[0u8; 16], None).await.unwrap();
        sink.play(&[0u8; 16], Some("hw:0,0")).await.unwrap();
        assert_eq!(sink.play_count(), 2);
    }
}
