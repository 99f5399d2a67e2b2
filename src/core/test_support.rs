use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

#[derive(Debug, Clone)]
pub enum RelayReply {
    /// Wraps the document in a `{"contents": ...}` envelope.
    Feed(String),
    Status(u16),
    Json(serde_json::Value),
}

#[derive(Clone)]
struct RelayState {
    reply: RelayReply,
    request_count: Arc<AtomicUsize>,
    last_feed_url: Arc<Mutex<Option<String>>>,
}

pub struct TestRelay {
    pub url: String,
    state: RelayState,
    task: tokio::task::JoinHandle<()>,
}

impl TestRelay {
    pub fn request_count(&self) -> usize {
        self.state.request_count.load(Ordering::SeqCst)
    }

    pub fn last_feed_url(&self) -> Option<String> {
        self.state
            .last_feed_url
            .lock()
            .expect("relay state lock")
            .clone()
    }
}

impl Drop for TestRelay {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn relay_handler(
    State(state): State<RelayState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.request_count.fetch_add(1, Ordering::SeqCst);
    *state.last_feed_url.lock().expect("relay state lock") = params.get("url").cloned();

    match state.reply {
        RelayReply::Feed(contents) => Json(serde_json::json!({
            "contents": contents,
            "status": { "http_code": 200 }
        }))
        .into_response(),
        RelayReply::Status(code) => {
            let status = StatusCode::from_u16(code).expect("status code must be valid");
            (status, "relay failure").into_response()
        }
        RelayReply::Json(value) => Json(value).into_response(),
    }
}

/// Starts a local stand-in for the CORS relay that answers every `/get`
/// request with `reply`.
pub async fn spawn_relay(reply: RelayReply) -> TestRelay {
    let state = RelayState {
        reply,
        request_count: Arc::new(AtomicUsize::new(0)),
        last_feed_url: Arc::new(Mutex::new(None)),
    };
    let app = Router::new()
        .route("/get", get(relay_handler))
        .with_state(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let address = listener.local_addr().expect("local addr should exist");
    let task = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server should run");
    });
    TestRelay {
        url: format!("http://{address}/get"),
        state,
        task,
    }
}

/// A relay URL on a port nothing listens on.
pub async fn unreachable_relay_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let address = listener.local_addr().expect("local addr should exist");
    drop(listener);
    format!("http://{address}/get")
}

pub fn rss_document(items: &[(&str, &str, &str, &str)]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rss version=\"2.0\"><channel><title>Clinic</title>\n",
    );
    for (title, description, pub_date, link) in items {
        xml.push_str(&format!(
            "<item><title>{title}</title><description><![CDATA[{description}]]></description><pubDate>{pub_date}</pubDate><link>{link}</link></item>\n"
        ));
    }
    xml.push_str("</channel></rss>");
    xml
}
