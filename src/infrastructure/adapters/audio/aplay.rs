//! Aplay Sink - 通过 aplay 子进程播放
//!
//! WAV 字节流经 stdin 管道送入 `aplay -q [-D <device>] -`。
//! 内部以异步互斥锁串行化播放：音频设备是唯一的共享资源，
//! 并发请求在锁上排队

use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::sync::Mutex;

use crate::application::ports::{AudioSinkPort, PlaybackError};

/// Aplay 配置
#[derive(Debug, Clone)]
pub struct AplaySinkConfig {
    /// 播放器二进制名
    pub binary: String,
}

impl Default for AplaySinkConfig {
    fn default() -> Self {
        Self {
            binary: "aplay".to_string(),
        }
    }
}

/// Aplay 播放器
pub struct AplaySink {
    config: AplaySinkConfig,
    playback_lock: Mutex<()>,
}

impl AplaySink {
    pub fn new(config: AplaySinkConfig) -> Self {
        Self {
            config,
            playback_lock: Mutex::new(()),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(AplaySinkConfig::default())
    }

    fn build_args(device: Option<&str>) -> Vec<String> {
        let mut args = vec!["-q".to_string()];
        if let Some(device) = device {
            args.push("-D".to_string());
            args.push(device.to_string());
        }
        // 从 stdin 读取
        args.push("-".to_string());
        args
    }
}

#[async_trait]
impl AudioSinkPort for AplaySink {
    async fn play(&self, wav_data: &[u8], device: Option<&str>) -> Result<(), PlaybackError> {
        let _guard = self.playback_lock.lock().await;

        let args = Self::build_args(device);
        tracing::debug!(
            binary = %self.config.binary,
            device = device.unwrap_or("default"),
            bytes = wav_data.len(),
            "Starting playback"
        );

        let mut child = Command::new(&self.config.binary)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PlaybackError::BinaryNotFound(self.config.binary.clone())
                } else {
                    PlaybackError::SpawnError(e.to_string())
                }
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| PlaybackError::SpawnError("failed to open player stdin".to_string()))?;
        stdin.write_all(wav_data).await?;
        drop(stdin);

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            // aplay 打不开设备时报 "audio open error"
            if stderr.contains("audio open error") {
                return Err(PlaybackError::DeviceUnavailable(stderr));
            }
            return Err(PlaybackError::PlayerFailed {
                status: output.status.to_string(),
                stderr,
            });
        }

        tracing::debug!(bytes = wav_data.len(), "Playback finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_args_default_device() {
        assert_eq!(AplaySink::build_args(None), vec!["-q", "-"]);
    }

    #[test]
    fn test_build_args_with_device() {
        assert_eq!(
            AplaySink::build_args(Some("hw:1,0")),
            vec!["-q", "-D", "hw:1,0", "-"]
        );
    }
}
