//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 语音合成配置
    #[serde(default)]
    pub speech: SpeechConfig,

    /// 音频输出配置
    #[serde(default)]
    pub audio: AudioConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 语音合成配置
///
/// 这里的 voice / rate / volume 是启动时的初始值，
/// 运行期可通过 /config 等接口修改（不持久化）
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// 启动引擎: espeak | festival
    #[serde(default = "default_engine")]
    pub engine: String,

    /// 初始音色标识
    #[serde(default = "default_voice")]
    pub voice: String,

    /// 初始语速（wpm）
    #[serde(default = "default_rate")]
    pub rate: u16,

    /// 初始音量（0.0 - 1.0）
    #[serde(default = "default_volume")]
    pub volume: f32,

    /// /speak 接受的最大文本长度（字符数）
    #[serde(default = "default_max_text_len")]
    pub max_text_len: usize,

    /// 单次合成超时（秒）
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// espeak 引擎配置
    #[serde(default)]
    pub espeak: EspeakConfig,

    /// festival 引擎配置
    #[serde(default)]
    pub festival: FestivalConfig,
}

fn default_engine() -> String {
    "espeak".to_string()
}

fn default_voice() -> String {
    "en".to_string()
}

fn default_rate() -> u16 {
    200
}

fn default_volume() -> f32 {
    0.9
}

fn default_max_text_len() -> usize {
    5000
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            voice: default_voice(),
            rate: default_rate(),
            volume: default_volume(),
            max_text_len: default_max_text_len(),
            timeout_secs: default_timeout_secs(),
            espeak: EspeakConfig::default(),
            festival: FestivalConfig::default(),
        }
    }
}

/// espeak 引擎配置
#[derive(Debug, Clone, Deserialize)]
pub struct EspeakConfig {
    /// 二进制名（espeak 或 espeak-ng）
    #[serde(default = "default_espeak_binary")]
    pub binary: String,
}

fn default_espeak_binary() -> String {
    "espeak-ng".to_string()
}

impl Default for EspeakConfig {
    fn default() -> Self {
        Self {
            binary: default_espeak_binary(),
        }
    }
}

/// festival 引擎配置
#[derive(Debug, Clone, Deserialize)]
pub struct FestivalConfig {
    /// 合成二进制名
    #[serde(default = "default_text2wave_binary")]
    pub text2wave_binary: String,

    /// 交互二进制名
    #[serde(default = "default_festival_binary")]
    pub festival_binary: String,
}

fn default_text2wave_binary() -> String {
    "text2wave".to_string()
}

fn default_festival_binary() -> String {
    "festival".to_string()
}

impl Default for FestivalConfig {
    fn default() -> Self {
        Self {
            text2wave_binary: default_text2wave_binary(),
            festival_binary: default_festival_binary(),
        }
    }
}

/// 音频输出配置
#[derive(Debug, Clone, Deserialize)]
pub struct AudioConfig {
    /// 播放方式: aplay | null
    #[serde(default = "default_sink")]
    pub sink: String,

    /// ALSA 输出设备（如 "hw:0,0"），None 为系统默认
    #[serde(default)]
    pub device: Option<String>,

    /// 播放器二进制名
    #[serde(default = "default_aplay_binary")]
    pub aplay_binary: String,
}

fn default_sink() -> String {
    "aplay".to_string()
}

fn default_aplay_binary() -> String {
    "aplay".to_string()
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sink: default_sink(),
            device: None,
            aplay_binary: default_aplay_binary(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
