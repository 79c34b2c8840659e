//! In-Memory Speech Settings Implementation

use chrono::Utc;
use std::sync::{Arc, RwLock};

use crate::application::ports::{SettingsPatch, SpeechSettings, SpeechSettingsPort};

/// 内存合成参数存储
///
/// /config 等接口的修改只作用于进程内存，不跨重启持久化；
/// 重启后回到配置文件给出的初始值
pub struct InMemorySpeechSettings {
    inner: RwLock<SpeechSettings>,
}

impl InMemorySpeechSettings {
    pub fn new(initial: SpeechSettings) -> Self {
        Self {
            inner: RwLock::new(initial),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl SpeechSettingsPort for InMemorySpeechSettings {
    fn snapshot(&self) -> SpeechSettings {
        self.inner.read().expect("settings lock poisoned").clone()
    }

    fn apply(&self, patch: SettingsPatch) -> SpeechSettings {
        let mut settings = self.inner.write().expect("settings lock poisoned");

        if let Some(engine) = patch.engine {
            settings.engine = engine;
        }
        if let Some(voice) = patch.voice {
            settings.voice = voice;
        }
        if let Some(rate) = patch.rate {
            settings.rate = rate;
        }
        if let Some(volume) = patch.volume {
            settings.volume = volume;
        }
        if let Some(device) = patch.device {
            settings.device = Some(device);
        }
        settings.updated_at = Utc::now();

        tracing::debug!(
            engine = %settings.engine,
            voice = %settings.voice,
            rate = settings.rate.wpm(),
            volume = settings.volume.value(),
            "Speech settings updated"
        );

        settings.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::speech::{EngineKind, SpeakingRate, Volume};

    fn initial() -> SpeechSettings {
        SpeechSettings::new(
            EngineKind::Espeak,
            "en-gb",
            SpeakingRate::default(),
            Volume::default(),
            None,
        )
    }

    #[test]
    fn test_snapshot_returns_initial() {
        let store = InMemorySpeechSettings::new(initial());
        let snapshot = store.snapshot();
        assert_eq!(snapshot.engine, EngineKind::Espeak);
        assert_eq!(snapshot.voice, "en-gb");
        assert_eq!(snapshot.rate.wpm(), 200);
    }

    #[test]
    fn test_apply_merges_partial_patch() {
        let store = InMemorySpeechSettings::new(initial());

        let updated = store.apply(SettingsPatch {
            rate: Some(SpeakingRate::new(300).unwrap()),
            ..Default::default()
        });

        assert_eq!(updated.rate.wpm(), 300);
        // 未指定的字段保持不变
        assert_eq!(updated.voice, "en-gb");
        assert_eq!(updated.engine, EngineKind::Espeak);
        assert_eq!(store.snapshot().rate.wpm(), 300);
    }

    #[test]
    fn test_apply_touches_updated_at() {
        let store = InMemorySpeechSettings::new(initial());
        let before = store.snapshot().updated_at;

        let updated = store.apply(SettingsPatch {
            voice: Some("de".to_string()),
            ..Default::default()
        });

        assert!(updated.updated_at >= before);
        assert_eq!(updated.voice, "de");
    }

    #[test]
    fn test_apply_sets_device() {
        let store = InMemorySpeechSettings::new(initial());
        let updated = store.apply(SettingsPatch {
            device: Some("hw:1,0".to_string()),
            ..Default::default()
        });
        assert_eq!(updated.device.as_deref(), Some("hw:1,0"));
    }
}
