//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_sink;
mod settings;
mod tts_engine;

pub use audio_sink::{AudioSinkPort, PlaybackError};
pub use settings::{SettingsPatch, SpeechSettings, SpeechSettingsPort};
pub use tts_engine::{SynthesisRequest, SynthesizedAudio, TtsEnginePort, TtsError};
