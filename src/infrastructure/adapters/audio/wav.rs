//! WAV Probe - WAV 头解析
//!
//! 从引擎输出的 WAV 字节流中提取采样率、声道数与时长，
//! 用于 /speak 响应和日志。只解析头部，不做解码

use thiserror::Error;

/// WAV 解析错误
#[derive(Debug, Error)]
pub enum WavError {
    #[error("WAV data too short")]
    TooShort,

    #[error("Invalid WAV: {0}")]
    Invalid(&'static str),
}

/// fmt chunk 内容
#[derive(Debug, Clone, Copy)]
struct FmtChunk {
    num_channels: u16,
    sample_rate: u32,
    byte_rate: u32,
    bits_per_sample: u16,
}

/// WAV 音频信息
#[derive(Debug, Clone, Copy)]
pub struct WavInfo {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    pub data_size: u64,
    byte_rate: u32,
}

impl WavInfo {
    /// 按数据长度和码率计算时长
    pub fn duration_ms(&self) -> u64 {
        if self.byte_rate == 0 {
            return 0;
        }
        self.data_size * 1000 / u64::from(self.byte_rate)
    }
}

/// 解析 WAV 文件头
pub fn probe(data: &[u8]) -> Result<WavInfo, WavError> {
    if data.len() < 44 {
        return Err(WavError::TooShort);
    }

    if &data[0..4] != b"RIFF" {
        return Err(WavError::Invalid("missing RIFF header"));
    }
    if &data[8..12] != b"WAVE" {
        return Err(WavError::Invalid("missing WAVE identifier"));
    }

    // 逐 chunk 查找 fmt 与 data
    let mut pos = 12;
    let mut fmt_chunk: Option<FmtChunk> = None;
    let mut data_size: Option<u64> = None;

    while pos + 8 <= data.len() {
        let chunk_id = &data[pos..pos + 4];
        let chunk_size =
            u32::from_le_bytes([data[pos + 4], data[pos + 5], data[pos + 6], data[pos + 7]])
                as usize;

        match chunk_id {
            b"fmt " => {
                if chunk_size < 16 || pos + 8 + 16 > data.len() {
                    return Err(WavError::Invalid("fmt chunk truncated"));
                }
                let f = &data[pos + 8..pos + 8 + 16];
                fmt_chunk = Some(FmtChunk {
                    num_channels: u16::from_le_bytes([f[2], f[3]]),
                    sample_rate: u32::from_le_bytes([f[4], f[5], f[6], f[7]]),
                    byte_rate: u32::from_le_bytes([f[8], f[9], f[10], f[11]]),
                    bits_per_sample: u16::from_le_bytes([f[14], f[15]]),
                });
            }
            b"data" => {
                // espeak 流式输出时 data 长度可能写 0 或 0xFFFFFFFF，
                // 以实际剩余字节数为准
                let declared = chunk_size as u64;
                let remaining = (data.len() - pos - 8) as u64;
                let size = if declared == 0 || declared == u64::from(u32::MAX) {
                    remaining
                } else {
                    declared.min(remaining)
                };
                data_size = Some(size);
                break;
            }
            _ => {}
        }

        pos += 8 + chunk_size;
        // chunk 按偶数字节对齐
        if chunk_size % 2 != 0 {
            pos += 1;
        }
    }

    let fmt = fmt_chunk.ok_or(WavError::Invalid("missing fmt chunk"))?;
    let data_size = data_size.ok_or(WavError::Invalid("missing data chunk"))?;

    Ok(WavInfo {
        sample_rate: fmt.sample_rate,
        channels: fmt.num_channels,
        bits_per_sample: fmt.bits_per_sample,
        data_size,
        byte_rate: fmt.byte_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::tts::silent_wav;

    #[test]
    fn test_probe_generated_wav() {
        let wav = silent_wav(1000, 22050);
        let info = probe(&wav).unwrap();

        assert_eq!(info.sample_rate, 22050);
        assert_eq!(info.channels, 1);
        assert_eq!(info.bits_per_sample, 16);
        assert_eq!(info.duration_ms(), 1000);
    }

    #[test]
    fn test_probe_rejects_short_data() {
        assert!(matches!(probe(&[0u8; 10]), Err(WavError::TooShort)));
    }

    #[test]
    fn test_probe_rejects_non_riff() {
        let mut wav = silent_wav(100, 22050);
        wav[0..4].copy_from_slice(b"OGGS");
        assert!(probe(&wav).is_err());
    }

    #[test]
    fn test_probe_streaming_zero_data_size() {
        // espeak --stdout 写 0 长度 data chunk 的情况
        let mut wav = silent_wav(500, 22050);
        wav[40..44].copy_from_slice(&0u32.to_le_bytes());
        let info = probe(&wav).unwrap();
        assert_eq!(info.duration_ms(), 500);
    }
}
