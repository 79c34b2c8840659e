//! Speech Commands

/// 合成并播放一段文本
#[derive(Debug, Clone)]
pub struct Speak {
    pub text: String,
}
