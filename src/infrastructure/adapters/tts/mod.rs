//! TTS Adapters - 引擎子进程适配器

mod espeak;
mod fake;
mod festival;
mod process;
mod registry;

pub use espeak::{EspeakEngine, EspeakEngineConfig};
pub use fake::{silent_wav, FakeTtsEngine};
pub use festival::{FestivalEngine, FestivalEngineConfig};
pub use registry::EngineRegistry;
