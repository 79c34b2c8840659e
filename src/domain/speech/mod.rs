//! Speech Context - 语音限界上下文
//!
//! 职责:
//! - 合成参数值对象（引擎、语速、音量）及其校验
//! - 音色友好名称解析

mod errors;
mod value_objects;
mod voice_match;

pub use errors::SpeechError;
pub use value_objects::{EngineKind, SpeakingRate, VoiceInfo, Volume, BASE_RATE_WPM};
pub use voice_match::resolve_voice;
