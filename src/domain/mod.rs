//! Domain Layer - 领域层
//!
//! 单一限界上下文:
//! - Speech Context: 语音合成参数与音色管理

pub mod speech;
