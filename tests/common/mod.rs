//! Shared utilities for integration testing.
//!
//! Hosts a programmable mock of the upstream employee API: a real axum
//! server speaking the `{data, status}` envelope, with failure injection
//! (429 bursts, missing data) and side-effect recording.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;

use employee_gateway::client::{CreateEmployeeInput, DeleteEmployeeInput, Employee};
use employee_gateway::config::{AppConfig, RetryConfig};
use employee_gateway::{HttpServer, Shutdown};

#[derive(Default)]
struct UpstreamState {
    employees: Mutex<Vec<Employee>>,
    reject_next: Mutex<u32>,
    missing_data: AtomicBool,
    calls: AtomicU32,
    deleted: Mutex<Vec<String>>,
}

/// Handle to a running mock upstream.
#[derive(Clone, Default)]
pub struct MockUpstream {
    state: Arc<UpstreamState>,
}

#[allow(dead_code)]
impl MockUpstream {
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        let mock = Self::default();
        *mock.state.employees.lock().unwrap() = employees;
        mock
    }

    /// Answer the next `n` calls with HTTP 429.
    pub fn reject_next(&self, n: u32) {
        *self.state.reject_next.lock().unwrap() = n;
    }

    /// Serve envelopes without a `data` field.
    pub fn omit_data(&self) {
        self.state.missing_data.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> u32 {
        self.state.calls.load(Ordering::SeqCst)
    }

    pub fn deleted_names(&self) -> Vec<String> {
        self.state.deleted.lock().unwrap().clone()
    }

    pub fn employee_count(&self) -> usize {
        self.state.employees.lock().unwrap().len()
    }

    /// Record a call; true means this one should be rate-limited.
    fn gate(&self) -> bool {
        self.state.calls.fetch_add(1, Ordering::SeqCst);
        let mut remaining = self.state.reject_next.lock().unwrap();
        if *remaining > 0 {
            *remaining -= 1;
            true
        } else {
            false
        }
    }

    /// Bind the mock on an ephemeral port and serve it; returns the base URL.
    pub async fn spawn(&self) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let router = Router::new()
            .route(
                "/api/v1/employee",
                get(list_employees).post(create_employee).delete(delete_employee),
            )
            .with_state(self.clone());

        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        format!("http://{}/api/v1/employee", addr)
    }
}

fn too_many_requests() -> Response {
    (
        StatusCode::TOO_MANY_REQUESTS,
        Json(json!({ "status": "Too many requests." })),
    )
        .into_response()
}

async fn list_employees(State(mock): State<MockUpstream>) -> Response {
    if mock.gate() {
        return too_many_requests();
    }
    if mock.state.missing_data.load(Ordering::SeqCst) {
        return Json(json!({ "status": "Successfully processed request." })).into_response();
    }

    let employees = mock.state.employees.lock().unwrap().clone();
    Json(json!({ "data": employees, "status": "Successfully processed request." })).into_response()
}

async fn create_employee(
    State(mock): State<MockUpstream>,
    Json(input): Json<CreateEmployeeInput>,
) -> Response {
    if mock.gate() {
        return too_many_requests();
    }
    if mock.state.missing_data.load(Ordering::SeqCst) {
        return Json(json!({ "status": "Successfully processed request." })).into_response();
    }

    let employee = Employee {
        id: uuid::Uuid::new_v4().to_string(),
        name: input.name,
        salary: input.salary,
        age: input.age,
        title: input.title,
        email: Some("created@company.com".into()),
    };
    mock.state.employees.lock().unwrap().push(employee.clone());

    Json(json!({ "data": employee, "status": "Successfully processed request." })).into_response()
}

async fn delete_employee(
    State(mock): State<MockUpstream>,
    Json(input): Json<DeleteEmployeeInput>,
) -> Response {
    if mock.gate() {
        return too_many_requests();
    }

    mock.state.deleted.lock().unwrap().push(input.name.clone());
    mock.state.employees.lock().unwrap().retain(|e| e.name != input.name);

    Json(json!({ "data": true, "status": "Successfully processed request." })).into_response()
}

/// Retry policy with short delays so failure-injection tests run quickly.
pub fn fast_retries() -> RetryConfig {
    RetryConfig {
        max_attempts: 3,
        base_delay_ms: 50,
        max_delay_ms: 400,
    }
}

/// Start the gateway against the given upstream; returns its base URL and
/// the shutdown handle.
#[allow(dead_code)]
pub async fn start_gateway(upstream_base_url: String, retries: RetryConfig) -> (String, Shutdown) {
    let mut config = AppConfig::default();
    config.upstream.base_url = upstream_base_url;
    config.retries = retries;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    let server = HttpServer::new(config).unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener, receiver).await;
    });

    (format!("http://{}", addr), shutdown)
}

/// Employee fixture with sensible defaults.
#[allow(dead_code)]
pub fn employee(id: &str, name: &str, salary: i64) -> Employee {
    Employee {
        id: id.into(),
        name: name.into(),
        salary,
        age: 35,
        title: "Engineer".into(),
        email: Some(format!("{}@company.com", id)),
    }
}
