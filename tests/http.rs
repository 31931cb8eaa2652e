use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct SummaryEnvelope {
    status: String,
    data: SummaryData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryData {
    daily_trend: Vec<TrendEntry>,
    type_breakdown: Vec<BreakdownEntry>,
    total_events: u64,
    last_updated: String,
}

#[derive(Debug, Deserialize)]
struct TrendEntry {
    date: String,
    accesses: u64,
}

#[derive(Debug, Deserialize)]
struct BreakdownEntry {
    name: String,
    value: u64,
    percentage: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    status: String,
    message: String,
    error: Option<String>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

#[cfg(unix)]
mod cleanup {
    use once_cell::sync::Lazy;
    use std::sync::{Mutex, Once};

    static REGISTER: Once = Once::new();
    static PIDS: Lazy<Mutex<Vec<i32>>> = Lazy::new(|| Mutex::new(Vec::new()));

    pub fn register(pid: u32) {
        REGISTER.call_once(|| unsafe {
            libc::atexit(on_exit);
        });
        PIDS.lock().unwrap().push(pid as i32);
    }

    extern "C" fn on_exit() {
        if let Ok(pids) = PIDS.lock() {
            for pid in pids.iter() {
                unsafe {
                    libc::kill(*pid, libc::SIGTERM);
                }
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(base_url.to_string()).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server(store_url: Option<&str>) -> TestServer {
    let port = pick_free_port();
    let mut command = Command::new(env!("CARGO_BIN_EXE_analytics_api"));
    command
        .env("PORT", port.to_string())
        .env("RUST_LOG", "info")
        .env_remove("STORE_URL")
        .env_remove("STORE_REGION")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    if let Some(url) = store_url {
        command.env("STORE_URL", url);
    }

    let child = command.spawn().expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

/// Serves paged record responses the way the real store does: the cursor
/// query parameter selects the page, and every page except the last carries
/// a continuation token.
async fn spawn_store(pages: Vec<serde_json::Value>) -> String {
    let pages = Arc::new(pages);
    let app = Router::new()
        .route(
            "/records",
            get(
                |State(pages): State<Arc<Vec<serde_json::Value>>>,
                 Query(params): Query<HashMap<String, String>>| async move {
                    let index = params
                        .get("cursor")
                        .and_then(|token| token.parse::<usize>().ok())
                        .unwrap_or(0);
                    Json(pages[index].clone())
                },
            ),
        )
        .with_state(pages);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn three_page_store() -> Vec<serde_json::Value> {
    vec![
        serde_json::json!({
            "items": [
                {"dateKey": "2024-01-02", "eventType": "PageView", "userTier": "Free"},
                {"dateKey": "2024-01-01", "eventType": "PageView", "value": 1200},
            ],
            "nextToken": "1",
        }),
        serde_json::json!({
            "items": [
                {"dateKey": "2024-01-01", "eventType": "Checkout"},
                {"dateKey": "2024-01-01", "eventType": "PageView"},
            ],
            "nextToken": "2",
        }),
        serde_json::json!({
            "items": [
                {"eventType": "Error"},
                {"dateKey": "2024-01-03"},
            ],
        }),
    ]
}

#[tokio::test]
async fn http_summary_aggregates_all_pages() {
    let store_url = spawn_store(three_page_store()).await;
    let server = spawn_server(Some(&store_url)).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/summary", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );

    let envelope: SummaryEnvelope = response.json().await.unwrap();
    assert_eq!(envelope.status, "success");

    let data = envelope.data;
    assert_eq!(data.total_events, 6);
    assert!(!data.last_updated.is_empty());

    let dates: Vec<&str> = data
        .daily_trend
        .iter()
        .map(|entry| entry.date.as_str())
        .collect();
    assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03", "unknown"]);
    assert_eq!(data.daily_trend[0].accesses, 3);

    let trend_sum: u64 = data.daily_trend.iter().map(|entry| entry.accesses).sum();
    assert_eq!(trend_sum, data.total_events);

    let names: Vec<&str> = data
        .type_breakdown
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names, vec!["PageView", "Checkout", "Error", "Other"]);

    let pageview = &data.type_breakdown[0];
    assert_eq!(pageview.value, 3);
    assert_eq!(pageview.percentage, "50.0");

    let breakdown_sum: u64 = data.type_breakdown.iter().map(|entry| entry.value).sum();
    assert_eq!(breakdown_sum, data.total_events);
}

#[tokio::test]
async fn http_summary_without_store_url_is_configuration_error() {
    let server = spawn_server(None).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/summary", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );

    let envelope: ErrorEnvelope = response.json().await.unwrap();
    assert_eq!(envelope.status, "error");
    assert!(envelope.message.contains("not configured"));
}

#[tokio::test]
async fn http_summary_with_unreachable_store_is_bad_gateway() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let dead_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let server = spawn_server(Some(&dead_url)).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/summary", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 502);

    let envelope: ErrorEnvelope = response.json().await.unwrap();
    assert_eq!(envelope.status, "error");
    assert!(envelope.error.is_some());
}

#[tokio::test]
async fn http_preflight_carries_cors_headers() {
    let server = spawn_server(None).await;
    let client = Client::new();

    let response = client
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/api/summary", server.base_url),
        )
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-methods")
            .and_then(|value| value.to_str().ok()),
        Some("GET, OPTIONS")
    );
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-headers")
            .and_then(|value| value.to_str().ok()),
        Some("content-type")
    );
}

#[tokio::test]
async fn http_index_serves_dashboard() {
    let server = spawn_server(None).await;
    let client = Client::new();

    let response = client.get(server.base_url.clone()).send().await.unwrap();
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains("Event Analytics"));
    assert!(body.contains("/api/summary"));
}
