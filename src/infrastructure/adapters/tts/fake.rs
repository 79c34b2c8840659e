//! Fake TTS Engine - 用于测试的引擎实现
//!
//! 不 spawn 任何子进程，返回内存中生成的静音 WAV，
//! 并记录最近一次收到的合成请求供断言使用

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::application::ports::{SynthesisRequest, SynthesizedAudio, TtsEnginePort, TtsError};
use crate::domain::speech::{EngineKind, VoiceInfo};

/// 生成指定时长的单声道 16-bit PCM 静音 WAV
pub fn silent_wav(duration_ms: u32, sample_rate: u32) -> Vec<u8> {
    let data_size = (u64::from(duration_ms) * u64::from(sample_rate) * 2 / 1000) as u32;
    let byte_rate = sample_rate * 2;

    let mut wav = Vec::with_capacity(44 + data_size as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_size).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    wav.resize(44 + data_size as usize, 0);
    wav
}

/// Fake TTS Engine
pub struct FakeTtsEngine {
    kind: EngineKind,
    voices: Vec<VoiceInfo>,
    healthy: bool,
    fail_synthesis: bool,
    last_request: Mutex<Option<SynthesisRequest>>,
    list_voices_calls: AtomicUsize,
}

impl FakeTtsEngine {
    pub fn new(kind: EngineKind, voices: Vec<VoiceInfo>) -> Self {
        Self {
            kind,
            voices,
            healthy: true,
            fail_synthesis: false,
            last_request: Mutex::new(None),
            list_voices_calls: AtomicUsize::new(0),
        }
    }

    /// 预置了常见音色的 espeak 替身
    pub fn espeak() -> Self {
        Self::new(
            EngineKind::Espeak,
            vec![
                VoiceInfo::new("en-gb", "english").with_language("en-gb"),
                VoiceInfo::new("en-us", "english-us").with_language("en-us"),
                VoiceInfo::new("de", "german").with_language("de"),
            ],
        )
    }

    /// 预置了常见音色的 festival 替身
    pub fn festival() -> Self {
        Self::new(
            EngineKind::Festival,
            vec![
                VoiceInfo::new("kal_diphone", "kal_diphone"),
                VoiceInfo::new("ked_diphone", "ked_diphone"),
            ],
        )
    }

    pub fn with_health(mut self, healthy: bool) -> Self {
        self.healthy = healthy;
        self
    }

    pub fn with_failing_synthesis(mut self) -> Self {
        self.fail_synthesis = true;
        self
    }

    /// 最近一次合成请求
    pub fn last_request(&self) -> Option<SynthesisRequest> {
        self.last_request.lock().unwrap().clone()
    }

    pub fn list_voices_calls(&self) -> usize {
        self.list_voices_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsEngine {
    fn kind(&self) -> EngineKind {
        self.kind
    }

    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesizedAudio, TtsError> {
        tracing::debug!(
            engine = %self.kind,
            text_len = request.text.len(),
            voice = %request.voice,
            "FakeTtsEngine: returning generated audio"
        );

        *self.last_request.lock().unwrap() = Some(request);

        if self.fail_synthesis {
            return Err(TtsError::EngineFailed {
                status: "exit code: 1".to_string(),
                stderr: "fake engine failure".to_string(),
            });
        }

        Ok(SynthesizedAudio {
            audio_data: silent_wav(250, 22050),
        })
    }

    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, TtsError> {
        self.list_voices_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.voices.clone())
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::speech::{SpeakingRate, Volume};

    #[tokio::test]
    async fn test_records_last_request() {
        let fake = FakeTtsEngine::espeak();
        let request = SynthesisRequest {
            text: "hello".to_string(),
            voice: "en-gb".to_string(),
            rate: SpeakingRate::default(),
            volume: Volume::default(),
        };

        fake.synthesize(request).await.unwrap();

        let seen = fake.last_request().unwrap();
        assert_eq!(seen.text, "hello");
        assert_eq!(seen.voice, "en-gb");
    }

    #[test]
    fn test_silent_wav_shape() {
        let wav = silent_wav(1000, 22050);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        // 1 秒 22050Hz 16-bit 单声道 = 44100 字节数据
        assert_eq!(wav.len(), 44 + 44100);
    }
}
