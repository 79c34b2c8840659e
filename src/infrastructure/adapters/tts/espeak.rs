//! Espeak Engine - espeak / espeak-ng 子进程适配器
//!
//! 合成: `espeak-ng -v <voice> -s <rate> -a <amplitude> --stdout --stdin`，
//! 文本经 stdin 送入，WAV 从 stdout 收集。
//! 音色列表: 解析 `espeak-ng --voices` 的表格输出

use async_trait::async_trait;

use super::process::{ensure_success, run_with_stdin};
use crate::application::ports::{SynthesisRequest, SynthesizedAudio, TtsEnginePort, TtsError};
use crate::domain::speech::{EngineKind, VoiceInfo};

/// espeak 适配器配置
#[derive(Debug, Clone)]
pub struct EspeakEngineConfig {
    /// 二进制名（espeak 或 espeak-ng）
    pub binary: String,
    /// 合成超时（秒）
    pub timeout_secs: u64,
}

impl Default for EspeakEngineConfig {
    fn default() -> Self {
        Self {
            binary: "espeak-ng".to_string(),
            timeout_secs: 30,
        }
    }
}

/// espeak 引擎适配器
pub struct EspeakEngine {
    config: EspeakEngineConfig,
}

impl EspeakEngine {
    pub fn new(config: EspeakEngineConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(EspeakEngineConfig::default())
    }

    /// 构造合成命令行参数
    ///
    /// 音量 0.0-1.0 映射到 espeak 的振幅刻度 0-200
    fn build_synthesis_args(request: &SynthesisRequest) -> Vec<String> {
        let amplitude = (request.volume.value() * 200.0).round() as u32;
        vec![
            "-v".to_string(),
            request.voice.clone(),
            "-s".to_string(),
            request.rate.wpm().to_string(),
            "-a".to_string(),
            amplitude.to_string(),
            "--stdout".to_string(),
            "--stdin".to_string(),
        ]
    }

    /// 解析 `--voices` 表格
    ///
    /// 格式（首行为表头）:
    /// ```text
    /// Pty Language Age/Gender VoiceName          File          Other Languages
    ///  5  en-gb          M  english              en            (en 2)
    /// ```
    fn parse_voice_table(output: &str) -> Vec<VoiceInfo> {
        output
            .lines()
            .filter_map(|line| {
                let fields: Vec<&str> = line.split_whitespace().collect();
                if fields.len() < 4 {
                    return None;
                }
                // 表头行的首列不是数字优先级
                fields[0].parse::<u8>().ok()?;
                Some(VoiceInfo::new(fields[3], fields[3]).with_language(fields[1]))
            })
            .collect()
    }
}

#[async_trait]
impl TtsEnginePort for EspeakEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Espeak
    }

    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesizedAudio, TtsError> {
        let args = Self::build_synthesis_args(&request);

        tracing::debug!(
            binary = %self.config.binary,
            voice = %request.voice,
            rate = request.rate.wpm(),
            text_len = request.text.len(),
            "Spawning espeak"
        );

        let output = run_with_stdin(
            &self.config.binary,
            &args,
            Some(request.text.as_bytes()),
            self.config.timeout_secs,
        )
        .await?;

        if let Err(e) = ensure_success(&output) {
            // espeak 对未知音色报错退出
            if let TtsError::EngineFailed { ref stderr, .. } = e {
                if stderr.contains("unknown voice") || stderr.contains("Failed to load voice") {
                    return Err(TtsError::VoiceNotFound(request.voice));
                }
            }
            return Err(e);
        }

        if output.stdout.is_empty() {
            return Err(TtsError::InvalidOutput(
                "espeak produced no audio".to_string(),
            ));
        }

        Ok(SynthesizedAudio {
            audio_data: output.stdout,
        })
    }

    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, TtsError> {
        let args = vec!["--voices".to_string()];
        let output = run_with_stdin(&self.config.binary, &args, None, self.config.timeout_secs)
            .await?;
        ensure_success(&output)?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let voices = Self::parse_voice_table(&stdout);
        if voices.is_empty() {
            return Err(TtsError::InvalidOutput(
                "no voices in espeak --voices output".to_string(),
            ));
        }
        Ok(voices)
    }

    async fn health_check(&self) -> bool {
        let args = vec!["--version".to_string()];
        matches!(
            run_with_stdin(&self.config.binary, &args, None, 5).await,
            Ok(output) if output.status.success()
        )
    }
}
