//! Corvox - Corpus 伴生系统的语音合成服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Speech Context: 合成参数值对象与音色名称解析
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TtsEngine, AudioSink, SpeechSettings）
//! - Commands: CQRS 命令处理器（Speak, UpdateVoiceConfig, SetVoice, SetSpeed, SwitchEngine）
//! - Queries: CQRS 查询处理器（GetStatus, ListVoices, GetEngineInfo）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（axum）
//! - Memory: SpeechSettings 内存实现
//! - Adapters: espeak / festival 子进程引擎、aplay 播放、WAV 探测

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
