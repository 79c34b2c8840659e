//! Config Commands - 合成参数修改命令
//!
//! 字段均为原始类型，领域校验在 handler 中完成

/// 部分更新合成参数（/config）
#[derive(Debug, Clone, Default)]
pub struct UpdateVoiceConfig {
    /// 语速（wpm）
    pub rate: Option<u16>,
    /// 音量（0.0 - 1.0）
    pub volume: Option<f32>,
    /// 引擎音色标识（不做存在性校验，与按名称设置的 SetVoice 不同）
    pub voice: Option<String>,
    /// 音频输出设备
    pub device: Option<String>,
}

/// 按友好名称设置音色（/voice）
#[derive(Debug, Clone)]
pub struct SetVoice {
    pub voice_name: String,
}

/// 设置语速倍率（/speed）
#[derive(Debug, Clone)]
pub struct SetSpeed {
    pub speed: f32,
}

/// 切换 TTS 引擎（/engine）
#[derive(Debug, Clone)]
pub struct SwitchEngine {
    pub engine: String,
}
