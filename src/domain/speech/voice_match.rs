//! 音色友好名称解析
//!
//! 将用户给出的名称解析为引擎音色，匹配优先级:
//! 1. 名称完全匹配（忽略大小写）
//! 2. 前缀匹配（"en" 匹配 "en-gb"）
//! 3. 包含匹配

use super::VoiceInfo;

/// 按友好名称解析音色
///
/// 名称先与 `name` 字段比较，再与 `id` 字段比较，保证
/// 用户无论给出展示名还是引擎内部标识都能命中。
pub fn resolve_voice<'a>(voices: &'a [VoiceInfo], query: &str) -> Option<&'a VoiceInfo> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    // 完全匹配
    if let Some(v) = voices
        .iter()
        .find(|v| v.name.to_lowercase() == query || v.id.to_lowercase() == query)
    {
        return Some(v);
    }

    // 前缀匹配
    if let Some(v) = voices.iter().find(|v| {
        v.name.to_lowercase().starts_with(&query) || v.id.to_lowercase().starts_with(&query)
    }) {
        return Some(v);
    }

    // 包含匹配
    voices
        .iter()
        .find(|v| v.name.to_lowercase().contains(&query) || v.id.to_lowercase().contains(&query))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_voices() -> Vec<VoiceInfo> {
        vec![
            VoiceInfo::new("en-gb", "english").with_language("en-gb"),
            VoiceInfo::new("en-us", "english-us").with_language("en-us"),
            VoiceInfo::new("kal_diphone", "kal_diphone"),
        ]
    }

    #[test]
    fn test_exact_match_wins() {
        let voices = sample_voices();
        let v = resolve_voice(&voices, "english").unwrap();
        assert_eq!(v.id, "en-gb");
    }

    #[test]
    fn test_exact_match_by_id() {
        let voices = sample_voices();
        let v = resolve_voice(&voices, "EN-US").unwrap();
        assert_eq!(v.id, "en-us");
    }

    #[test]
    fn test_prefix_match() {
        let voices = sample_voices();
        let v = resolve_voice(&voices, "kal").unwrap();
        assert_eq!(v.id, "kal_diphone");
    }

    #[test]
    fn test_contains_match() {
        let voices = sample_voices();
        let v = resolve_voice(&voices, "diphone").unwrap();
        assert_eq!(v.id, "kal_diphone");
    }

    #[test]
    fn test_no_match() {
        let voices = sample_voices();
        assert!(resolve_voice(&voices, "mandarin").is_none());
        assert!(resolve_voice(&voices, "  ").is_none());
    }
}
