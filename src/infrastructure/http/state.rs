//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    SetSpeedHandler, SetVoiceHandler, SpeakHandler, SwitchEngineHandler, UpdateVoiceConfigHandler,
    // Query handlers
    GetEngineInfoHandler, GetStatusHandler, ListVoicesHandler,
    // Ports
    AudioSinkPort, SpeechSettingsPort,
};
use crate::infrastructure::adapters::tts::EngineRegistry;

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub settings: Arc<dyn SpeechSettingsPort>,
    pub registry: Arc<EngineRegistry>,

    // ========== Command Handlers ==========
    pub speak_handler: SpeakHandler,
    pub update_config_handler: UpdateVoiceConfigHandler,
    pub set_voice_handler: SetVoiceHandler,
    pub set_speed_handler: SetSpeedHandler,
    pub switch_engine_handler: SwitchEngineHandler,

    // ========== Query Handlers ==========
    pub get_status_handler: GetStatusHandler,
    pub list_voices_handler: ListVoicesHandler,
    pub get_engine_info_handler: GetEngineInfoHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        settings: Arc<dyn SpeechSettingsPort>,
        registry: Arc<EngineRegistry>,
        sink: Arc<dyn AudioSinkPort>,
        max_text_len: usize,
    ) -> Self {
        Self {
            // Ports
            settings: settings.clone(),
            registry: registry.clone(),

            // Command handlers
            speak_handler: SpeakHandler::new(
                registry.clone(),
                settings.clone(),
                sink,
                max_text_len,
            ),
            update_config_handler: UpdateVoiceConfigHandler::new(settings.clone()),
            set_voice_handler: SetVoiceHandler::new(registry.clone(), settings.clone()),
            set_speed_handler: SetSpeedHandler::new(settings.clone()),
            switch_engine_handler: SwitchEngineHandler::new(registry.clone(), settings.clone()),

            // Query handlers
            get_status_handler: GetStatusHandler::new(registry.clone(), settings.clone()),
            list_voices_handler: ListVoicesHandler::new(registry.clone(), settings.clone()),
            get_engine_info_handler: GetEngineInfoHandler::new(registry, settings),
        }
    }
}
