//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TtsEngine、AudioSink、SpeechSettings）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Config commands
    SetSpeed,
    SetVoice,
    SwitchEngine,
    UpdateVoiceConfig,
    // Speech commands
    Speak,
    // Handlers
    handlers::{
        SetSpeedHandler, SetVoiceHandler, SetVoiceResponse, SpeakHandler, SpeakResponse,
        SwitchEngineHandler, SwitchEngineResponse, UpdateVoiceConfigHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    // Audio sink
    AudioSinkPort,
    PlaybackError,
    // Settings
    SettingsPatch,
    SpeechSettings,
    SpeechSettingsPort,
    // TTS engine
    SynthesisRequest,
    SynthesizedAudio,
    TtsEnginePort,
    TtsError,
};

pub use queries::{
    // Status queries
    GetEngineInfo,
    GetStatus,
    ListVoices,
    // Handlers
    handlers::{
        EngineHealth, EngineInfoReport, GetEngineInfoHandler, GetStatusHandler, ListVoicesHandler,
        StatusReport,
    },
};
