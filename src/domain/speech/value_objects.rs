//! Speech Context - Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::SpeechError;

/// 语速倍率 1.0 对应的基准语速（wpm）
///
/// `/speed` 接口以倍率表达语速，换算公式: rate = BASE_RATE_WPM * speed
pub const BASE_RATE_WPM: u16 = 200;

/// TTS 引擎种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Espeak,
    Festival,
}

impl EngineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Espeak => "espeak",
            Self::Festival => "festival",
        }
    }

    /// 所有已知引擎
    pub fn all() -> &'static [EngineKind] {
        &[Self::Espeak, Self::Festival]
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EngineKind {
    type Err = SpeechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "espeak" | "espeak-ng" => Ok(Self::Espeak),
            "festival" => Ok(Self::Festival),
            other => Err(SpeechError::UnknownEngine(other.to_string())),
        }
    }
}

/// 语速（每分钟单词数）
///
/// 不变量: 80 <= wpm <= 450（espeak 支持的范围）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakingRate(u16);

impl SpeakingRate {
    pub const MIN_WPM: u16 = 80;
    pub const MAX_WPM: u16 = 450;

    pub fn new(wpm: u16) -> Result<Self, SpeechError> {
        if !(Self::MIN_WPM..=Self::MAX_WPM).contains(&wpm) {
            return Err(SpeechError::InvalidRate {
                value: wpm,
                min: Self::MIN_WPM,
                max: Self::MAX_WPM,
            });
        }
        Ok(Self(wpm))
    }

    /// 由语速倍率换算（0.5 - 2.0）
    pub fn from_multiplier(speed: f32) -> Result<Self, SpeechError> {
        if !(0.5..=2.0).contains(&speed) {
            return Err(SpeechError::InvalidSpeed(speed));
        }
        Self::new((BASE_RATE_WPM as f32 * speed).round() as u16)
    }

    pub fn wpm(&self) -> u16 {
        self.0
    }
}

impl Default for SpeakingRate {
    fn default() -> Self {
        Self(BASE_RATE_WPM)
    }
}

impl fmt::Display for SpeakingRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wpm", self.0)
    }
}

/// 音量
///
/// 不变量: 0.0 <= value <= 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Volume(f32);

impl Volume {
    pub fn new(value: f32) -> Result<Self, SpeechError> {
        if !(0.0..=1.0).contains(&value) || value.is_nan() {
            return Err(SpeechError::InvalidVolume(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(0.9)
    }
}

/// 引擎已安装音色的描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceInfo {
    /// 引擎内部标识（espeak 的 voice name / festival 的 voice symbol）
    pub id: String,
    /// 展示名称
    pub name: String,
    /// 语言标签（如 "en-gb"），festival 不提供
    pub language: Option<String>,
}

impl VoiceInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            language: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_kind_parse() {
        assert_eq!("espeak".parse::<EngineKind>().unwrap(), EngineKind::Espeak);
        assert_eq!(
            "espeak-ng".parse::<EngineKind>().unwrap(),
            EngineKind::Espeak
        );
        assert_eq!(
            "Festival".parse::<EngineKind>().unwrap(),
            EngineKind::Festival
        );
        assert!("flite".parse::<EngineKind>().is_err());
    }

    #[test]
    fn test_rate_bounds() {
        assert!(SpeakingRate::new(79).is_err());
        assert!(SpeakingRate::new(451).is_err());
        assert_eq!(SpeakingRate::new(200).unwrap().wpm(), 200);
    }

    #[test]
    fn test_rate_from_multiplier() {
        assert_eq!(SpeakingRate::from_multiplier(1.0).unwrap().wpm(), 200);
        assert_eq!(SpeakingRate::from_multiplier(0.5).unwrap().wpm(), 100);
        assert_eq!(SpeakingRate::from_multiplier(2.0).unwrap().wpm(), 400);
        assert!(SpeakingRate::from_multiplier(0.4).is_err());
        assert!(SpeakingRate::from_multiplier(2.1).is_err());
    }

    #[test]
    fn test_volume_bounds() {
        assert!(Volume::new(-0.1).is_err());
        assert!(Volume::new(1.1).is_err());
        assert!(Volume::new(f32::NAN).is_err());
        assert_eq!(Volume::new(0.9).unwrap().value(), 0.9);
    }
}
