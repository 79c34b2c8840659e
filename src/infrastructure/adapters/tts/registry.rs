//! Engine Registry - 已配置引擎的注册表
//!
//! 持有所有已构建的引擎适配器，并按引擎缓存音色列表。
//! 音色列表来自子进程调用，结果在首次查询后缓存于内存

use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::{TtsEnginePort, TtsError};
use crate::domain::speech::{EngineKind, VoiceInfo};

/// 引擎注册表
pub struct EngineRegistry {
    engines: HashMap<EngineKind, Arc<dyn TtsEnginePort>>,
    voice_cache: DashMap<EngineKind, Vec<VoiceInfo>>,
}

impl EngineRegistry {
    pub fn new() -> Self {
        Self {
            engines: HashMap::new(),
            voice_cache: DashMap::new(),
        }
    }

    /// 注册一个引擎适配器
    pub fn register(mut self, engine: Arc<dyn TtsEnginePort>) -> Self {
        self.engines.insert(engine.kind(), engine);
        self
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 获取引擎适配器
    pub fn get(&self, kind: EngineKind) -> Option<Arc<dyn TtsEnginePort>> {
        self.engines.get(&kind).cloned()
    }

    pub fn contains(&self, kind: EngineKind) -> bool {
        self.engines.contains_key(&kind)
    }

    /// 已注册的引擎种类
    pub fn kinds(&self) -> Vec<EngineKind> {
        let mut kinds: Vec<_> = self.engines.keys().copied().collect();
        kinds.sort_by_key(|k| k.as_str());
        kinds
    }

    /// 查询引擎音色列表（带缓存）
    pub async fn voices(&self, kind: EngineKind) -> Result<Vec<VoiceInfo>, TtsError> {
        if let Some(cached) = self.voice_cache.get(&kind) {
            return Ok(cached.clone());
        }

        let engine = self
            .engines
            .get(&kind)
            .ok_or_else(|| TtsError::BinaryNotFound(kind.to_string()))?;

        let voices = engine.list_voices().await?;
        tracing::info!(engine = %kind, count = voices.len(), "Voice list cached");
        self.voice_cache.insert(kind, voices.clone());
        Ok(voices)
    }

    /// 丢弃某引擎的音色缓存
    #[allow(dead_code)]
    pub fn invalidate_voices(&self, kind: EngineKind) {
        self.voice_cache.remove(&kind);
    }
}

impl Default for EngineRegistry {
    fn default() -> Self {
        Self::new()
    }
}
