//! Command Handlers

mod config_handlers;
mod speech_handlers;

pub use config_handlers::{
    SetSpeedHandler, SetVoiceHandler, SetVoiceResponse, SwitchEngineHandler,
    SwitchEngineResponse, UpdateVoiceConfigHandler,
};
pub use speech_handlers::{SpeakHandler, SpeakResponse};
