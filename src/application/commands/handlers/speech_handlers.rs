//! Speech Command Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::Speak;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioSinkPort, SpeechSettingsPort, SynthesisRequest,
};
use crate::domain::speech::EngineKind;
use crate::infrastructure::adapters::audio::wav;
use crate::infrastructure::adapters::tts::EngineRegistry;

/// 合成播放响应
#[derive(Debug, Clone)]
pub struct SpeakResponse {
    pub utterance_id: Uuid,
    pub engine: EngineKind,
    pub voice: String,
    pub chars: usize,
    pub audio_bytes: usize,
    pub duration_ms: Option<u64>,
    pub sample_rate: Option<u32>,
}

/// Speak Handler
///
/// 读取当前参数快照 → 引擎合成 → WAV 探测 → 播放。
/// 播放排队由 AudioSink 负责，handler 本身不持锁
pub struct SpeakHandler {
    registry: Arc<EngineRegistry>,
    settings: Arc<dyn SpeechSettingsPort>,
    sink: Arc<dyn AudioSinkPort>,
    max_text_len: usize,
}

impl SpeakHandler {
    pub fn new(
        registry: Arc<EngineRegistry>,
        settings: Arc<dyn SpeechSettingsPort>,
        sink: Arc<dyn AudioSinkPort>,
        max_text_len: usize,
    ) -> Self {
        Self {
            registry,
            settings,
            sink,
            max_text_len,
        }
    }

    pub async fn handle(&self, command: Speak) -> Result<SpeakResponse, ApplicationError> {
        let text = command.text.trim();
        if text.is_empty() {
            return Err(ApplicationError::validation("Text must not be empty"));
        }
        if text.chars().count() > self.max_text_len {
            return Err(ApplicationError::validation(format!(
                "Text exceeds {} characters",
                self.max_text_len
            )));
        }

        let settings = self.settings.snapshot();
        let engine = self.registry.get(settings.engine).ok_or_else(|| {
            ApplicationError::engine_unavailable(format!(
                "Engine {} is not configured",
                settings.engine
            ))
        })?;

        let utterance_id = Uuid::new_v4();
        let request = SynthesisRequest {
            text: text.to_string(),
            voice: settings.voice.clone(),
            rate: settings.rate,
            volume: settings.volume,
        };

        let audio = engine.synthesize(request).await?;

        // WAV 探测失败不阻止播放，只丢掉元数据
        let info = match wav::probe(&audio.audio_data) {
            Ok(info) => Some(info),
            Err(e) => {
                tracing::warn!(utterance_id = %utterance_id, error = %e, "WAV probe failed");
                None
            }
        };

        self.sink
            .play(&audio.audio_data, settings.device.as_deref())
            .await?;

        tracing::info!(
            utterance_id = %utterance_id,
            engine = %settings.engine,
            voice = %settings.voice,
            chars = text.chars().count(),
            audio_bytes = audio.audio_data.len(),
            duration_ms = ?info.map(|i| i.duration_ms()),
            "Utterance spoken"
        );

        Ok(SpeakResponse {
            utterance_id,
            engine: settings.engine,
            voice: settings.voice,
            chars: text.chars().count(),
            audio_bytes: audio.audio_data.len(),
            duration_ms: info.map(|i| i.duration_ms()),
            sample_rate: info.map(|i| i.sample_rate),
        })
    }
}
