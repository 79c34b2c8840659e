//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /ping     GET   存活检查
//! - /speak    POST  合成并播放文本
//! - /status   GET   服务状态（引擎可达性 + 可用音色）
//! - /config   POST  局部更新合成参数
//! - /voices   GET   当前引擎音色列表
//! - /voice    POST  按友好名称设置音色（query: voice_name）
//! - /speed    POST  设置语速倍率（query: speed）
//! - /engine   POST  切换 TTS 引擎（query: engine）
//! - /info     GET   引擎详情与参数快照

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/speak", post(handlers::speak))
        .route("/status", get(handlers::status))
        .route("/config", post(handlers::update_config))
        .route("/voices", get(handlers::list_voices))
        .route("/voice", post(handlers::set_voice))
        .route("/speed", post(handlers::set_speed))
        .route("/engine", post(handlers::switch_engine))
        .route("/info", get(handlers::info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use crate::application::ports::SpeechSettings;
    use crate::domain::speech::{EngineKind, SpeakingRate, Volume};
    use crate::infrastructure::adapters::audio::NullSink;
    use crate::infrastructure::adapters::tts::{EngineRegistry, FakeTtsEngine};
    use crate::infrastructure::memory::InMemorySpeechSettings;

    fn test_app() -> Router {
        let registry = EngineRegistry::new()
            .register(Arc::new(FakeTtsEngine::espeak()))
            .register(Arc::new(FakeTtsEngine::festival()))
            .arc();
        let settings = InMemorySpeechSettings::new(SpeechSettings::new(
            EngineKind::Espeak,
            "en-gb",
            SpeakingRate::default(),
            Volume::default(),
            None,
        ))
        .arc();
        let state = Arc::new(AppState::new(
            settings,
            registry,
            Arc::new(NullSink::new()),
            5000,
        ));
        create_routes().with_state(state)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_empty(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn response_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let response = test_app().oneshot(get_request("/ping")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_speak_success() {
        let response = test_app()
            .oneshot(post_json("/speak", json!({"text": "hello world"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["engine"], "espeak");
        assert_eq!(body["data"]["voice"], "en-gb");
        assert_eq!(body["data"]["chars"], 11);
    }

    #[tokio::test]
    async fn test_speak_empty_text_rejected() {
        let response = test_app()
            .oneshot(post_json("/speak", json!({"text": "  "})))
            .await
            .unwrap();

        let body = response_json(response).await;
        assert_eq!(body["errno"], 400);
    }

    #[tokio::test]
    async fn test_config_then_speak_uses_new_settings() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(post_json("/config", json!({"voice": "de", "rate": 300})))
            .await
            .unwrap();
        let body = response_json(response).await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["voice"], "de");
        assert_eq!(body["data"]["rate"], 300);

        let response = app
            .oneshot(post_json("/speak", json!({"text": "guten tag"})))
            .await
            .unwrap();
        let body = response_json(response).await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["voice"], "de");
    }

    #[tokio::test]
    async fn test_config_invalid_volume_rejected() {
        let response = test_app()
            .oneshot(post_json("/config", json!({"volume": 2.5})))
            .await
            .unwrap();

        let body = response_json(response).await;
        assert_eq!(body["errno"], 400);
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_status_shape() {
        let response = test_app().oneshot(get_request("/status")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["status"], "running");
        assert_eq!(body["data"]["module"], "corpus-speech");
        assert_eq!(body["data"]["engine_reachable"], true);
        assert_eq!(body["data"]["available_voices"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_voices_listing() {
        let response = test_app().oneshot(get_request("/voices")).await.unwrap();

        let body = response_json(response).await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["voices"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_set_voice_by_name() {
        let response = test_app()
            .oneshot(post_empty("/voice?voice_name=german"))
            .await
            .unwrap();

        let body = response_json(response).await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["voice_id"], "de");
    }

    #[tokio::test]
    async fn test_set_voice_unknown_name() {
        let response = test_app()
            .oneshot(post_empty("/voice?voice_name=mandarin"))
            .await
            .unwrap();

        let body = response_json(response).await;
        assert_eq!(body["errno"], 404);
    }

    #[tokio::test]
    async fn test_set_speed() {
        let response = test_app()
            .oneshot(post_empty("/speed?speed=1.5"))
            .await
            .unwrap();

        let body = response_json(response).await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["rate"], 300);
    }

    #[tokio::test]
    async fn test_switch_engine_changes_voice_listing() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(post_empty("/engine?engine=festival"))
            .await
            .unwrap();
        let body = response_json(response).await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["engine"], "festival");

        // /voices 跟随当前引擎
        let response = app.oneshot(get_request("/voices")).await.unwrap();
        let body = response_json(response).await;
        let voices = body["data"]["voices"].as_array().unwrap();
        assert_eq!(voices.len(), 2);
        assert_eq!(voices[0]["id"], "kal_diphone");
    }

    #[tokio::test]
    async fn test_switch_engine_unknown() {
        let response = test_app()
            .oneshot(post_empty("/engine?engine=flite"))
            .await
            .unwrap();

        let body = response_json(response).await;
        assert_eq!(body["errno"], 400);
    }

    #[tokio::test]
    async fn test_info_shape() {
        let response = test_app().oneshot(get_request("/info")).await.unwrap();

        let body = response_json(response).await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["engines"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"]["settings"]["engine"], "espeak");
        assert_eq!(body["data"]["settings"]["rate"], 200);
    }
}
