// common/mod.rs - In-process mock of the remote product API
//
// Each test starts its own Actix server on an ephemeral port. Responses are
// registered per (method, path) below the `/products` root; every request is
// recorded so tests can assert on exactly what was sent.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use dummyjson_catalog::fixtures::ApiFixture;
use dummyjson_catalog::web_app::api::DummyJsonClient;

/// Largest request body the mock accepts; above the app server's 8 MiB
const PAYLOAD_LIMIT: usize = 16 * 1024 * 1024;

/// One request as the mock saw it
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    /// Path below `/products` ("" for the collection itself)
    pub path: String,
    pub query: String,
    pub body: String,
}

impl RecordedRequest {
    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or(serde_json::Value::Null)
    }

    pub fn query_map(&self) -> HashMap<String, String> {
        web::Query::<HashMap<String, String>>::from_query(&self.query)
            .map(|q| q.into_inner())
            .unwrap_or_default()
    }
}

#[derive(Default)]
struct MockState {
    responses: Mutex<HashMap<(String, String), (u16, String)>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockApi {
    pub base_url: String,
    state: web::Data<MockState>,
    handle: ServerHandle,
}

impl MockApi {
    /// Start a mock with no routes; unknown routes answer 404
    pub async fn start() -> anyhow::Result<Self> {
        let state = web::Data::new(MockState::default());
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;

        let app_state = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(app_state.clone())
                .app_data(web::PayloadConfig::new(PAYLOAD_LIMIT))
                .default_service(web::to(handle_request))
        })
        .workers(1)
        .listen(listener)?
        .run();

        let handle = server.handle();
        tokio::spawn(server);

        Ok(Self {
            base_url: format!("http://{}/products", addr),
            state,
            handle,
        })
    }

    pub fn client(&self) -> DummyJsonClient {
        DummyJsonClient::with_base_url(self.base_url.clone())
    }

    /// Answer `method` on the fixture's path with its body
    pub fn respond_with<F: ApiFixture>(&self, method: &str) -> &Self {
        self.respond(method, F::path(), 200, F::body())
    }

    pub fn respond(&self, method: &str, path: &str, status: u16, body: &str) -> &Self {
        let mut responses = self.state.responses.lock().unwrap();
        responses.insert((method.to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn handle_request(req: HttpRequest, body: web::Bytes, state: web::Data<MockState>) -> HttpResponse {
    let path = req
        .path()
        .trim_start_matches("/products")
        .trim_start_matches('/')
        .to_string();
    let method = req.method().to_string();

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query: req.query_string().to_string(),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let responses = state.responses.lock().unwrap();
    match responses.get(&(method, path)) {
        Some((status, body)) => HttpResponse::build(
            actix_web::http::StatusCode::from_u16(*status).unwrap(),
        )
        .content_type("application/json")
        .body(body.clone()),
        None => HttpResponse::NotFound()
            .content_type("application/json")
            .body(r#"{"message":"not found"}"#),
    }
}
