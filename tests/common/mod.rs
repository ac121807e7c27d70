//! A local stand-in for the DNSPod API.
//!
//! Every request is recorded and answered with the same status and body, so
//! tests can check both what the client sent and how it read the answer.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header::CONTENT_TYPE},
};
use dnspod::Client;
use url::Url;

pub const TOKEN: &str = "13490,6b5976c68aba5b14a0558b77c17c3932";

/// A request as seen by the mock server.
#[derive(Debug, Clone)]
pub struct Received {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub form: HashMap<String, String>,
    pub pairs: usize,
}

struct Shared {
    status: StatusCode,
    body: String,
    received: Mutex<Vec<Received>>,
}

pub struct MockServer {
    pub url: Url,
    shared: Arc<Shared>,
}

impl MockServer {
    /// Starts a server on a random port that answers with `status` and `body`.
    pub fn start(status: u16, body: &str) -> Self {
        let shared = Arc::new(Shared {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
            received: Mutex::new(Vec::new()),
        });

        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        let app = Router::new().fallback(answer).with_state(shared.clone());
        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                axum::serve(listener, app).await
            })
            .unwrap();
        });

        Self {
            url: format!("http://{addr}/").parse().unwrap(),
            shared,
        }
    }

    pub fn received(&self) -> Vec<Received> {
        self.shared.received.lock().unwrap().clone()
    }

    /// A client pointed at this server, bypassing any proxy from the environment.
    pub fn client(&self) -> Client {
        let transport = reqwest::blocking::Client::builder()
            .no_proxy()
            .build()
            .unwrap();

        Client::builder()
            .endpoint(&self.url)
            .token(TOKEN)
            .transport(transport)
            .build()
            .unwrap()
    }
}

async fn answer(
    State(shared): State<Arc<Shared>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, [(axum::http::HeaderName, &'static str); 1], String) {
    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(&body).into_owned().collect();
    let received = Received {
        method,
        path: uri.path().to_string(),
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        pairs: pairs.len(),
        form: pairs.into_iter().collect(),
    };
    shared.received.lock().unwrap().push(received);

    (
        shared.status,
        [(CONTENT_TYPE, "application/json")],
        shared.body.clone(),
    )
}
