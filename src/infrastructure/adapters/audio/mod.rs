//! Audio Adapters - 播放与 WAV 探测

mod aplay;
mod null_sink;
pub mod wav;

pub use aplay::{AplaySink, AplaySinkConfig};
pub use null_sink::NullSink;
