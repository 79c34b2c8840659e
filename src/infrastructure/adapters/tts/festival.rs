//! Festival Engine - festival / text2wave 子进程适配器
//!
//! 合成: `text2wave -o <tmpfile> -scale <vol> -eval "(voice_<name>)"
//! -eval "(Parameter.set 'Duration_Stretch <stretch>)"`，文本经 stdin 送入，
//! WAV 从临时文件读回后删除。
//! 音色列表: festival 批处理模式求值 `(voice.list)`

use async_trait::async_trait;
use std::path::PathBuf;
use uuid::Uuid;

use super::process::{ensure_success, run_with_stdin};
use crate::application::ports::{SynthesisRequest, SynthesizedAudio, TtsEnginePort, TtsError};
use crate::domain::speech::{EngineKind, VoiceInfo, BASE_RATE_WPM};

/// festival 适配器配置
#[derive(Debug, Clone)]
pub struct FestivalEngineConfig {
    /// 合成二进制名
    pub text2wave_binary: String,
    /// 交互二进制名（音色列表、健康检查）
    pub festival_binary: String,
    /// 合成超时（秒）
    pub timeout_secs: u64,
}

impl Default for FestivalEngineConfig {
    fn default() -> Self {
        Self {
            text2wave_binary: "text2wave".to_string(),
            festival_binary: "festival".to_string(),
            timeout_secs: 30,
        }
    }
}

/// festival 引擎适配器
pub struct FestivalEngine {
    config: FestivalEngineConfig,
}

impl FestivalEngine {
    pub fn new(config: FestivalEngineConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(FestivalEngineConfig::default())
    }

    /// 音色符号只允许 [A-Za-z0-9_]，否则会破坏 -eval 的 Scheme 表达式
    fn validate_voice_symbol(voice: &str) -> Result<&str, TtsError> {
        let symbol = voice.strip_prefix("voice_").unwrap_or(voice);
        if symbol.is_empty()
            || !symbol
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(TtsError::VoiceNotFound(voice.to_string()));
        }
        Ok(symbol)
    }

    /// 构造 text2wave 参数
    ///
    /// festival 没有 wpm 语速参数，用 Duration_Stretch 表达：
    /// stretch = 基准语速 / 目标语速（越大越慢）
    fn build_synthesis_args(
        request: &SynthesisRequest,
        out_path: &PathBuf,
    ) -> Result<Vec<String>, TtsError> {
        let stretch = f32::from(BASE_RATE_WPM) / f32::from(request.rate.wpm());

        let mut args = vec![
            "-o".to_string(),
            out_path.display().to_string(),
            "-scale".to_string(),
            format!("{:.2}", request.volume.value()),
            "-eval".to_string(),
            format!("(Parameter.set 'Duration_Stretch {:.2})", stretch),
        ];

        if !request.voice.is_empty() {
            let symbol = Self::validate_voice_symbol(&request.voice)?;
            args.push("-eval".to_string());
            args.push(format!("(voice_{})", symbol));
        }

        Ok(args)
    }

    /// 解析 `(voice.list)` 的输出，如 "(kal_diphone ked_diphone)"
    fn parse_voice_list(output: &str) -> Vec<VoiceInfo> {
        let inner = match (output.find('('), output.rfind(')')) {
            (Some(open), Some(close)) if close > open => &output[open + 1..close],
            _ => return Vec::new(),
        };

        inner
            .split_whitespace()
            .filter(|s| !s.is_empty() && *s != "nil")
            .map(|symbol| VoiceInfo::new(symbol, symbol))
            .collect()
    }

    fn temp_output_path() -> PathBuf {
        std::env::temp_dir().join(format!("corvox-{}.wav", Uuid::new_v4()))
    }
}

#[async_trait]
impl TtsEnginePort for FestivalEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Festival
    }

    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesizedAudio, TtsError> {
        let out_path = Self::temp_output_path();
        let args = Self::build_synthesis_args(&request, &out_path)?;

        tracing::debug!(
            binary = %self.config.text2wave_binary,
            voice = %request.voice,
            rate = request.rate.wpm(),
            text_len = request.text.len(),
            "Spawning text2wave"
        );

        let result = run_with_stdin(
            &self.config.text2wave_binary,
            &args,
            Some(request.text.as_bytes()),
            self.config.timeout_secs,
        )
        .await;

        let read_audio = match result {
            Ok(output) => match ensure_success(&output) {
                Ok(()) => tokio::fs::read(&out_path).await.map_err(|e| {
                    TtsError::InvalidOutput(format!("text2wave wrote no audio: {}", e))
                }),
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        };

        // 无论成败都清理临时文件
        if let Err(e) = tokio::fs::remove_file(&out_path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %out_path.display(), error = %e, "Failed to remove temp wav");
            }
        }

        let audio_data = read_audio?;
        if audio_data.is_empty() {
            return Err(TtsError::InvalidOutput(
                "text2wave produced empty audio".to_string(),
            ));
        }

        Ok(SynthesizedAudio { audio_data })
    }

    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, TtsError> {
        let args = vec!["-b".to_string(), "(print (voice.list))".to_string()];
        let output = run_with_stdin(
            &self.config.festival_binary,
            &args,
            None,
            self.config.timeout_secs,
        )
        .await?;
        ensure_success(&output)?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let voices = Self::parse_voice_list(&stdout);
        if voices.is_empty() {
            return Err(TtsError::InvalidOutput(
                "no voices in festival (voice.list) output".to_string(),
            ));
        }
        Ok(voices)
    }

    async fn health_check(&self) -> bool {
        let args = vec!["--version".to_string()];
        matches!(
            run_with_stdin(&self.config.festival_binary, &args, None, 5).await,
            Ok(output) if output.status.success()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::speech::{SpeakingRate, Volume};

    fn request(voice: &str, wpm: u16) -> SynthesisRequest {
        SynthesisRequest {
            text: "hello".to_string(),
            voice: voice.to_string(),
            rate: SpeakingRate::new(wpm).unwrap(),
            volume: Volume::new(0.9).unwrap(),
        }
    }

    #[test]
    fn test_synthesis_args() {
        let out = PathBuf::from("/tmp/out.wav");
        let args = FestivalEngine::build_synthesis_args(&request("kal_diphone", 200), &out).unwrap();
        assert_eq!(
            args,
            vec![
                "-o",
                "/tmp/out.wav",
                "-scale",
                "0.90",
                "-eval",
                "(Parameter.set 'Duration_Stretch 1.00)",
                "-eval",
                "(voice_kal_diphone)",
            ]
        );
    }

    #[test]
    fn test_faster_rate_shrinks_stretch() {
        let out = PathBuf::from("/tmp/out.wav");
        let args = FestivalEngine::build_synthesis_args(&request("kal_diphone", 400), &out).unwrap();
        assert!(args.contains(&"(Parameter.set 'Duration_Stretch 0.50)".to_string()));
    }

    #[test]
    fn test_voice_prefix_stripped() {
        let out = PathBuf::from("/tmp/out.wav");
        let args =
            FestivalEngine::build_synthesis_args(&request("voice_ked_diphone", 200), &out).unwrap();
        assert!(args.contains(&"(voice_ked_diphone)".to_string()));
    }

    #[test]
    fn test_scheme_injection_rejected() {
        let out = PathBuf::from("/tmp/out.wav");
        let result = FestivalEngine::build_synthesis_args(&request("kal) (exit", 200), &out);
        assert!(matches!(result, Err(TtsError::VoiceNotFound(_))));
    }

    #[test]
    fn test_parse_voice_list() {
        let voices = FestivalEngine::parse_voice_list("(kal_diphone ked_diphone)\n");
        assert_eq!(voices.len(), 2);
        assert_eq!(voices[0].id, "kal_diphone");
    }

    #[test]
    fn test_parse_voice_list_empty() {
        assert!(FestivalEngine::parse_voice_list("nil\n").is_empty());
        assert!(FestivalEngine::parse_voice_list("()").is_empty());
    }
}
