//! Speech Settings Port - 合成参数状态管理
//!
//! 进程级共享的 VoiceConfig：启动时由配置文件填充，
//! 运行期通过 /config 等接口修改，所有状态存储在内存中，
//! 不跨重启持久化

use chrono::{DateTime, Utc};

use crate::domain::speech::{EngineKind, SpeakingRate, Volume};

/// 当前生效的合成参数（in-memory）
#[derive(Debug, Clone)]
pub struct SpeechSettings {
    /// 当前引擎
    pub engine: EngineKind,
    /// 引擎音色标识
    pub voice: String,
    /// 语速
    pub rate: SpeakingRate,
    /// 音量
    pub volume: Volume,
    /// 音频输出设备（None 为系统默认）
    pub device: Option<String>,
    /// 最后一次修改时间
    pub updated_at: DateTime<Utc>,
}

impl SpeechSettings {
    pub fn new(
        engine: EngineKind,
        voice: impl Into<String>,
        rate: SpeakingRate,
        volume: Volume,
        device: Option<String>,
    ) -> Self {
        Self {
            engine,
            voice: voice.into(),
            rate,
            volume,
            device,
            updated_at: Utc::now(),
        }
    }
}

/// 合成参数的部分更新
///
/// 所有字段均已通过领域层校验，apply 只做合并
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub engine: Option<EngineKind>,
    pub voice: Option<String>,
    pub rate: Option<SpeakingRate>,
    pub volume: Option<Volume>,
    pub device: Option<String>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        self.engine.is_none()
            && self.voice.is_none()
            && self.rate.is_none()
            && self.volume.is_none()
            && self.device.is_none()
    }
}

/// Speech Settings Port
pub trait SpeechSettingsPort: Send + Sync {
    /// 读取当前参数快照
    fn snapshot(&self) -> SpeechSettings;

    /// 应用部分更新，返回更新后的快照
    fn apply(&self, patch: SettingsPatch) -> SpeechSettings;
}
