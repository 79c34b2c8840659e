//! Corvox - Corpus 伴生系统的语音合成服务
//!
//! 启动流程:
//! - 加载配置（环境变量 > config.yaml > 默认值）
//! - 按配置构建引擎适配器（espeak / festival）与播放器
//! - 启动 HTTP 服务器（带优雅关闭）

use std::str::FromStr;
use std::sync::Arc;

use corvox::config::{load_config, print_config};
use corvox::application::ports::{AudioSinkPort, SpeechSettings};
use corvox::domain::speech::{EngineKind, SpeakingRate, Volume};
use corvox::infrastructure::adapters::audio::{AplaySink, AplaySinkConfig, NullSink};
use corvox::infrastructure::adapters::tts::{
    EngineRegistry, EspeakEngine, EspeakEngineConfig, FestivalEngine, FestivalEngineConfig,
};
use corvox::infrastructure::http::{AppState, HttpServer, ServerConfig};
use corvox::infrastructure::memory::InMemorySpeechSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},corvox={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Corvox - Corpus speech synthesis service");
    print_config(&config);

    // 构建引擎适配器（两个引擎都注册，/engine 可在运行期切换）
    let espeak = EspeakEngine::new(EspeakEngineConfig {
        binary: config.speech.espeak.binary.clone(),
        timeout_secs: config.speech.timeout_secs,
    });
    let festival = FestivalEngine::new(FestivalEngineConfig {
        text2wave_binary: config.speech.festival.text2wave_binary.clone(),
        festival_binary: config.speech.festival.festival_binary.clone(),
        timeout_secs: config.speech.timeout_secs,
    });
    let registry = EngineRegistry::new()
        .register(Arc::new(espeak))
        .register(Arc::new(festival))
        .arc();

    // 初始合成参数（已在配置加载时校验）
    let initial_engine = EngineKind::from_str(&config.speech.engine)
        .map_err(|e| anyhow::anyhow!("Invalid engine: {}", e))?;
    let initial = SpeechSettings::new(
        initial_engine,
        config.speech.voice.clone(),
        SpeakingRate::new(config.speech.rate).map_err(|e| anyhow::anyhow!("{}", e))?,
        Volume::new(config.speech.volume).map_err(|e| anyhow::anyhow!("{}", e))?,
        config.audio.device.clone(),
    );
    let settings = InMemorySpeechSettings::new(initial).arc();

    // 启动时探测当前引擎，不可达时降级启动而不是直接退出
    match registry.get(initial_engine) {
        Some(engine) if engine.health_check().await => {
            tracing::info!(engine = %initial_engine, "TTS engine ready");
        }
        _ => {
            tracing::warn!(
                engine = %initial_engine,
                "TTS engine did not respond, /speak will fail until it is available"
            );
        }
    }

    // 构建播放器
    let sink: Arc<dyn AudioSinkPort> = match config.audio.sink.as_str() {
        "null" => Arc::new(NullSink::new()),
        _ => Arc::new(AplaySink::new(AplaySinkConfig {
            binary: config.audio.aplay_binary.clone(),
        })),
    };

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(settings, registry, sink, config.speech.max_text_len);

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
