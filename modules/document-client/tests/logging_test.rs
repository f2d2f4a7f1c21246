//! Classified failures are returned, not reported: the client only emits
//! debug-level events, leaving warn/error logging to whoever handles the error.

use std::sync::{Arc, Mutex};

use document_client::DocumentClient;
use serde_json::json;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Clone, Default)]
struct LevelRecorder(Arc<Mutex<Vec<Level>>>);

impl<S: Subscriber> Layer<S> for LevelRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.0.lock().unwrap().push(*event.metadata().level());
    }
}

#[tokio::test]
async fn test_classified_failures_only_log_at_debug() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "errorCode": "FAIL", "message": "Boom" })),
        )
        .mount(&server)
        .await;
    let client = DocumentClient::new(&server.uri()).unwrap();

    let recorder = LevelRecorder::default();
    let _guard =
        tracing::subscriber::set_default(tracing_subscriber::registry().with(recorder.clone()));

    let err = client.fetch("500").await.unwrap_err();
    assert!(err.is_server_failure());

    let levels = recorder.0.lock().unwrap().clone();
    assert!(levels.contains(&Level::DEBUG), "no client events recorded: {levels:?}");
    assert!(
        !levels.iter().any(|l| *l == Level::WARN || *l == Level::ERROR),
        "client logged above debug: {levels:?}"
    );
}
