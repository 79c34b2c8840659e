//! Config Command Handlers

use std::str::FromStr;
use std::sync::Arc;

use crate::application::commands::{SetSpeed, SetVoice, SwitchEngine, UpdateVoiceConfig};
use crate::application::error::ApplicationError;
use crate::application::ports::{SettingsPatch, SpeechSettings, SpeechSettingsPort};
use crate::domain::speech::{resolve_voice, EngineKind, SpeakingRate, Volume};
use crate::infrastructure::adapters::tts::EngineRegistry;

// ============================================================================
// UpdateVoiceConfig
// ============================================================================

/// UpdateVoiceConfig Handler（/config）
///
/// 数值范围在领域层校验，非法值整体拒绝，不做部分应用
pub struct UpdateVoiceConfigHandler {
    settings: Arc<dyn SpeechSettingsPort>,
}

impl UpdateVoiceConfigHandler {
    pub fn new(settings: Arc<dyn SpeechSettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn handle(
        &self,
        command: UpdateVoiceConfig,
    ) -> Result<SpeechSettings, ApplicationError> {
        let mut patch = SettingsPatch::default();

        if let Some(wpm) = command.rate {
            patch.rate = Some(SpeakingRate::new(wpm)?);
        }
        if let Some(volume) = command.volume {
            patch.volume = Some(Volume::new(volume)?);
        }
        if let Some(voice) = command.voice {
            if voice.trim().is_empty() {
                return Err(ApplicationError::validation("Voice must not be empty"));
            }
            patch.voice = Some(voice);
        }
        if let Some(device) = command.device {
            patch.device = Some(device);
        }

        if patch.is_empty() {
            return Err(ApplicationError::validation(
                "No configuration fields provided",
            ));
        }

        let updated = self.settings.apply(patch);
        tracing::info!(
            voice = %updated.voice,
            rate = updated.rate.wpm(),
            volume = updated.volume.value(),
            "Voice configuration updated"
        );
        Ok(updated)
    }
}

// ============================================================================
// SetVoice
// ============================================================================

/// 设置音色响应
#[derive(Debug, Clone)]
pub struct SetVoiceResponse {
    pub voice_id: String,
    pub voice_name: String,
    pub settings: SpeechSettings,
}

/// SetVoice Handler（/voice）
///
/// 按友好名称解析为当前引擎的音色标识后再写入设置
pub struct SetVoiceHandler {
    registry: Arc<EngineRegistry>,
    settings: Arc<dyn SpeechSettingsPort>,
}

impl SetVoiceHandler {
    pub fn new(registry: Arc<EngineRegistry>, settings: Arc<dyn SpeechSettingsPort>) -> Self {
        Self { registry, settings }
    }

    pub async fn handle(&self, command: SetVoice) -> Result<SetVoiceResponse, ApplicationError> {
        let query = command.voice_name.trim();
        if query.is_empty() {
            return Err(ApplicationError::validation("Voice name must not be empty"));
        }

        let engine = self.settings.snapshot().engine;
        let voices = self.registry.voices(engine).await?;

        let resolved = resolve_voice(&voices, query).ok_or_else(|| {
            let available: Vec<&str> = voices.iter().take(10).map(|v| v.name.as_str()).collect();
            ApplicationError::VoiceNotFound(format!(
                "{} (available: {})",
                query,
                available.join(", ")
            ))
        })?;

        let voice_id = resolved.id.clone();
        let voice_name = resolved.name.clone();

        let updated = self.settings.apply(SettingsPatch {
            voice: Some(voice_id.clone()),
            ..Default::default()
        });

        tracing::info!(engine = %engine, voice = %voice_id, "Voice set by name");

        Ok(SetVoiceResponse {
            voice_id,
            voice_name,
            settings: updated,
        })
    }
}

// ============================================================================
// SetSpeed
// ============================================================================

/// SetSpeed Handler（/speed）
///
/// 倍率换算为 wpm 语速后写入设置
pub struct SetSpeedHandler {
    settings: Arc<dyn SpeechSettingsPort>,
}

impl SetSpeedHandler {
    pub fn new(settings: Arc<dyn SpeechSettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn handle(&self, command: SetSpeed) -> Result<SpeechSettings, ApplicationError> {
        let rate = SpeakingRate::from_multiplier(command.speed)?;

        let updated = self.settings.apply(SettingsPatch {
            rate: Some(rate),
            ..Default::default()
        });

        tracing::info!(speed = command.speed, rate = rate.wpm(), "Speech speed set");
        Ok(updated)
    }
}

// ============================================================================
// SwitchEngine
// ============================================================================

/// 切换引擎响应
#[derive(Debug, Clone)]
pub struct SwitchEngineResponse {
    pub engine: EngineKind,
    pub reachable: bool,
    pub settings: SpeechSettings,
}

/// SwitchEngine Handler（/engine）
///
/// 目标引擎必须已注册且健康检查通过才会切换
pub struct SwitchEngineHandler {
    registry: Arc<EngineRegistry>,
    settings: Arc<dyn SpeechSettingsPort>,
}

impl SwitchEngineHandler {
    pub fn new(registry: Arc<EngineRegistry>, settings: Arc<dyn SpeechSettingsPort>) -> Self {
        Self { registry, settings }
    }

    pub async fn handle(
        &self,
        command: SwitchEngine,
    ) -> Result<SwitchEngineResponse, ApplicationError> {
        let kind = EngineKind::from_str(&command.engine)?;

        let engine = self.registry.get(kind).ok_or_else(|| {
            ApplicationError::validation(format!(
                "Engine {} is not configured (configured: {})",
                kind,
                self.registry
                    .kinds()
                    .iter()
                    .map(|k| k.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })?;

        if !engine.health_check().await {
            return Err(ApplicationError::engine_unavailable(format!(
                "Engine {} did not respond to health check",
                kind
            )));
        }

        let updated = self.settings.apply(SettingsPatch {
            engine: Some(kind),
            ..Default::default()
        });

        tracing::info!(engine = %kind, "Engine switched");

        Ok(SwitchEngineResponse {
            engine: kind,
            reachable: true,
            settings: updated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::tts::FakeTtsEngine;
    use crate::infrastructure::memory::InMemorySpeechSettings;

    fn settings_store() -> Arc<InMemorySpeechSettings> {
        InMemorySpeechSettings::new(SpeechSettings::new(
            EngineKind::Espeak,
            "en-gb",
            SpeakingRate::default(),
            Volume::default(),
            None,
        ))
        .arc()
    }

    fn registry() -> Arc<EngineRegistry> {
        EngineRegistry::new()
            .register(Arc::new(FakeTtsEngine::espeak()))
            .register(Arc::new(FakeTtsEngine::festival()))
            .arc()
    }

    #[tokio::test]
    async fn test_update_config_applies_fields() {
        let settings = settings_store();
        let handler = UpdateVoiceConfigHandler::new(settings.clone());

        let updated = handler
            .handle(UpdateVoiceConfig {
                rate: Some(250),
                volume: Some(0.4),
                voice: None,
                device: Some("hw:1,0".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(updated.rate.wpm(), 250);
        assert_eq!(updated.volume.value(), 0.4);
        assert_eq!(updated.device.as_deref(), Some("hw:1,0"));
        assert_eq!(settings.snapshot().rate.wpm(), 250);
    }

    #[tokio::test]
    async fn test_update_config_rejects_invalid_volume() {
        let settings = settings_store();
        let handler = UpdateVoiceConfigHandler::new(settings.clone());

        let result = handler
            .handle(UpdateVoiceConfig {
                volume: Some(-0.5),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
        // 拒绝时不得改动现有设置
        assert_eq!(settings.snapshot().volume.value(), 0.9);
    }

    #[tokio::test]
    async fn test_update_config_rejects_empty_patch() {
        let handler = UpdateVoiceConfigHandler::new(settings_store());
        let result = handler.handle(UpdateVoiceConfig::default()).await;
        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_set_voice_resolves_name() {
        let settings = settings_store();
        let handler = SetVoiceHandler::new(registry(), settings.clone());

        let response = handler
            .handle(SetVoice {
                voice_name: "german".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.voice_id, "de");
        assert_eq!(settings.snapshot().voice, "de");
    }

    #[tokio::test]
    async fn test_set_voice_unknown_name_lists_available() {
        let handler = SetVoiceHandler::new(registry(), settings_store());

        let result = handler
            .handle(SetVoice {
                voice_name: "mandarin".to_string(),
            })
            .await;

        match result {
            Err(ApplicationError::VoiceNotFound(msg)) => {
                assert!(msg.contains("english"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_set_speed_converts_to_rate() {
        let settings = settings_store();
        let handler = SetSpeedHandler::new(settings.clone());

        let updated = handler.handle(SetSpeed { speed: 1.5 }).await.unwrap();
        assert_eq!(updated.rate.wpm(), 300);
    }

    #[tokio::test]
    async fn test_set_speed_rejects_out_of_range() {
        let settings = settings_store();
        let handler = SetSpeedHandler::new(settings.clone());

        assert!(handler.handle(SetSpeed { speed: 3.0 }).await.is_err());
        assert_eq!(settings.snapshot().rate.wpm(), 200);
    }

    #[tokio::test]
    async fn test_switch_engine() {
        let settings = settings_store();
        let handler = SwitchEngineHandler::new(registry(), settings.clone());

        let response = handler
            .handle(SwitchEngine {
                engine: "festival".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.engine, EngineKind::Festival);
        assert_eq!(settings.snapshot().engine, EngineKind::Festival);
    }

    #[tokio::test]
    async fn test_switch_engine_unknown_name() {
        let handler = SwitchEngineHandler::new(registry(), settings_store());
        let result = handler
            .handle(SwitchEngine {
                engine: "flite".to_string(),
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_switch_engine_unhealthy() {
        let registry = EngineRegistry::new()
            .register(Arc::new(FakeTtsEngine::espeak()))
            .register(Arc::new(FakeTtsEngine::festival().with_health(false)))
            .arc();
        let settings = settings_store();
        let handler = SwitchEngineHandler::new(registry, settings.clone());

        let result = handler
            .handle(SwitchEngine {
                engine: "festival".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::EngineUnavailable(_))));
        // 切换失败保持原引擎
        assert_eq!(settings.snapshot().engine, EngineKind::Espeak);
    }
}
