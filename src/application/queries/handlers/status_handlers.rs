//! Status Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{SpeechSettings, SpeechSettingsPort};
use crate::application::queries::{GetEngineInfo, GetStatus, ListVoices};
use crate::domain::speech::{EngineKind, VoiceInfo};
use crate::infrastructure::adapters::tts::EngineRegistry;

// ============================================================================
// Response DTOs
// ============================================================================

/// 服务状态报告
#[derive(Debug, Clone)]
pub struct StatusReport {
    /// 当前引擎
    pub engine: EngineKind,
    /// 当前引擎是否响应健康检查
    pub engine_reachable: bool,
    /// 当前引擎的可用音色（查询失败时为空）
    pub available_voices: Vec<VoiceInfo>,
}

/// 单个引擎的可达性
#[derive(Debug, Clone)]
pub struct EngineHealth {
    pub engine: EngineKind,
    pub reachable: bool,
}

/// 引擎详情报告
#[derive(Debug, Clone)]
pub struct EngineInfoReport {
    pub settings: SpeechSettings,
    pub engines: Vec<EngineHealth>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GetStatus Handler
pub struct GetStatusHandler {
    registry: Arc<EngineRegistry>,
    settings: Arc<dyn SpeechSettingsPort>,
}

impl GetStatusHandler {
    pub fn new(registry: Arc<EngineRegistry>, settings: Arc<dyn SpeechSettingsPort>) -> Self {
        Self { registry, settings }
    }

    pub async fn handle(&self, _query: GetStatus) -> Result<StatusReport, ApplicationError> {
        let kind = self.settings.snapshot().engine;

        let engine_reachable = match self.registry.get(kind) {
            Some(engine) => engine.health_check().await,
            None => false,
        };

        // 音色查询失败只降级为空列表，/status 本身不报错
        let available_voices = match self.registry.voices(kind).await {
            Ok(voices) => voices,
            Err(e) => {
                tracing::warn!(engine = %kind, error = %e, "Voice listing failed for status");
                Vec::new()
            }
        };

        Ok(StatusReport {
            engine: kind,
            engine_reachable,
            available_voices,
        })
    }
}

/// ListVoices Handler
pub struct ListVoicesHandler {
    registry: Arc<EngineRegistry>,
    settings: Arc<dyn SpeechSettingsPort>,
}

impl ListVoicesHandler {
    pub fn new(registry: Arc<EngineRegistry>, settings: Arc<dyn SpeechSettingsPort>) -> Self {
        Self { registry, settings }
    }

    pub async fn handle(&self, _query: ListVoices) -> Result<Vec<VoiceInfo>, ApplicationError> {
        let kind = self.settings.snapshot().engine;
        Ok(self.registry.voices(kind).await?)
    }
}

/// GetEngineInfo Handler
pub struct GetEngineInfoHandler {
    registry: Arc<EngineRegistry>,
    settings: Arc<dyn SpeechSettingsPort>,
}

impl GetEngineInfoHandler {
    pub fn new(registry: Arc<EngineRegistry>, settings: Arc<dyn SpeechSettingsPort>) -> Self {
        Self { registry, settings }
    }

    pub async fn handle(&self, _query: GetEngineInfo) -> Result<EngineInfoReport, ApplicationError> {
        let settings = self.settings.snapshot();

        let mut engines = Vec::new();
        for kind in self.registry.kinds() {
            let reachable = match self.registry.get(kind) {
                Some(engine) => engine.health_check().await,
                None => false,
            };
            engines.push(EngineHealth {
                engine: kind,
                reachable,
            });
        }

        Ok(EngineInfoReport { settings, engines })
    }
}
