//! Fake upstream dataset and service harness.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use manhattan_violations::api::{self, AppState};
use manhattan_violations::config::Config;

/// Canned upstream answer.
#[derive(Debug, Clone)]
pub struct Canned {
    pub status: StatusCode,
    pub body: String,
}

impl Canned {
    pub fn json(value: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: value.to_string(),
        }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Clone)]
struct UpstreamState {
    canned: Canned,
    limits: Arc<Mutex<Vec<String>>>,
}

/// Fake dataset endpoint.
pub struct FakeUpstream {
    pub url: String,
    limits: Arc<Mutex<Vec<String>>>,
}

impl FakeUpstream {
    pub async fn start(canned: Canned) -> Self {
        let limits = Arc::new(Mutex::new(Vec::new()));
        let state = UpstreamState {
            canned,
            limits: limits.clone(),
        };

        let router = Router::new()
            .route("/resource/43nn-pn8j.json", get(dataset))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            url: format!("http://{}/resource/43nn-pn8j.json", addr),
            limits,
        }
    }

    /// `$limit` values received so far.
    pub fn limits(&self) -> Vec<String> {
        self.limits.lock().unwrap().clone()
    }
}

async fn dataset(
    State(state): State<UpstreamState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    if let Some(limit) = params.get("$limit") {
        state.limits.lock().unwrap().push(limit.clone());
    }
    (
        state.canned.status,
        [("content-type", "application/json")],
        state.canned.body.clone(),
    )
}

/// A URL with nothing listening behind it.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/resource/43nn-pn8j.json", addr)
}

pub fn config_for(upstream_url: &str) -> Config {
    Config {
        upstream_url: upstream_url.to_string(),
        port: 0,
        ..Config::default()
    }
}

/// Running service under test.
pub struct Service {
    pub addr: SocketAddr,
    stop: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<std::io::Result<()>>,
}

impl Service {
    pub async fn start(config: Config) -> Self {
        let state = AppState::new(&config).unwrap();
        let server = api::bind(config.listen_addr(), state).await.unwrap();
        let addr = server.local_addr().unwrap();

        let (stop, stopped) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.run(async move {
            let _ = stopped.await;
        }));

        Self {
            addr,
            stop: Some(stop),
            handle,
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::get(format!("http://{}{}", self.addr, path))
            .await
            .unwrap()
    }

    pub async fn shutdown(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        self.handle.await.unwrap().unwrap();
    }
}

pub fn record(name: &str, boro: &str, flag: &str, date: &str) -> Value {
    json!({
        "camis": "41234567",
        "dba": name,
        "boro": boro,
        "building": "100",
        "street": "1st Ave",
        "zipcode": "10001",
        "phone": "2125550100",
        "cuisine_description": "American",
        "inspection_date": date,
        "action": "Violations were cited in the following area(s).",
        "violation_code": "02B",
        "violation_description": "Improper storage",
        "critical_flag": flag,
        "score": "12",
        "grade": "A",
        "inspection_type": "Cycle Inspection / Initial Inspection"
    })
}

/// Body rows in a rendered page (the header row excluded).
pub fn body_rows(page: &str) -> usize {
    page.matches("<tr>").count().saturating_sub(1)
}
