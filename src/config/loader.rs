//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.yaml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use super::types::AppConfig;
use crate::domain::speech::{EngineKind, SpeakingRate, Volume};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `CORVOX_`，层级分隔符 `__`）
/// 2. 配置文件（config.yaml 或 config.local.yaml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `CORVOX_SERVER__PORT=8080`
/// - `CORVOX_SPEECH__ENGINE=festival`
/// - `CORVOX_SPEECH__VOICE=en-us`
/// - `CORVOX_AUDIO__DEVICE=hw:1,0`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5001)?
        .set_default("speech.engine", "espeak")?
        .set_default("speech.voice", "en")?
        .set_default("speech.rate", 200)?
        .set_default("speech.volume", 0.9)?
        .set_default("speech.max_text_len", 5000)?
        .set_default("speech.timeout_secs", 30)?
        .set_default("speech.espeak.binary", "espeak-ng")?
        .set_default("speech.festival.text2wave_binary", "text2wave")?
        .set_default("speech.festival.festival_binary", "festival")?
        .set_default("audio.sink", "aplay")?
        .set_default("audio.aplay_binary", "aplay")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: CORVOX_
    // 层级分隔符: __ (双下划线)
    // 例如: CORVOX_SPEECH__ENGINE=festival
    builder = builder.add_source(
        Environment::with_prefix("CORVOX")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    // 验证端口范围
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    // 验证引擎名
    EngineKind::from_str(&config.speech.engine)
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

    // 验证初始合成参数（与运行期 /config 同一套领域规则）
    SpeakingRate::new(config.speech.rate)
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
    Volume::new(config.speech.volume).map_err(|e| ConfigError::ValidationError(e.to_string()))?;

    if config.speech.voice.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Initial voice cannot be empty".to_string(),
        ));
    }

    if config.speech.max_text_len == 0 {
        return Err(ConfigError::ValidationError(
            "max_text_len cannot be 0".to_string(),
        ));
    }

    if config.speech.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Synthesis timeout cannot be 0".to_string(),
        ));
    }

    // 验证播放方式
    if !matches!(config.audio.sink.as_str(), "aplay" | "null") {
        return Err(ConfigError::ValidationError(format!(
            "Unknown audio sink: {} (expected aplay or null)",
            config.audio.sink
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Engine: {}", config.speech.engine);
    tracing::info!("Voice: {}", config.speech.voice);
    tracing::info!(
        "Rate: {} wpm, Volume: {}",
        config.speech.rate,
        config.speech.volume
    );
    tracing::info!("Synthesis Timeout: {}s", config.speech.timeout_secs);
    tracing::info!("Audio Sink: {}", config.audio.sink);
    tracing::info!(
        "Audio Device: {}",
        config.audio.device.as_deref().unwrap_or("default")
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_default_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_unknown_engine() {
        let mut config = AppConfig::default();
        config.speech.engine = "flite".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_out_of_range_volume() {
        let mut config = AppConfig::default();
        config.speech.volume = 1.5;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_unknown_sink() {
        let mut config = AppConfig::default();
        config.audio.sink = "pulse".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "server:\n  port: 8099\nspeech:\n  engine: festival\n  voice: kal_diphone"
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 8099);
        assert_eq!(config.speech.engine, "festival");
        assert_eq!(config.speech.voice, "kal_diphone");
        // 未覆盖的字段保持默认值
        assert_eq!(config.speech.rate, 200);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_load_rejects_invalid_yaml_values() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        writeln!(file, "speech:\n  volume: -2.0").unwrap();

        assert!(load_config_from_path(Some(file.path())).is_err());
    }
}
