//! Stub REST backend
//!
//! A warp server on an ephemeral port. Every request is counted and its
//! `Authorization` header captured so tests can assert on what the client
//! actually sent. Collections live in memory; create routes assign ids and
//! fill server-side defaults the way the real backend does.

use parking_lot::Mutex;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;
use warp::http::{Method, StatusCode};
use warp::hyper::body::Bytes;
use warp::path::FullPath;
use warp::Filter;

#[derive(Default)]
struct StubState {
    requests: AtomicUsize,
    auth_headers: Mutex<Vec<Option<String>>>,
    meetings: Mutex<Vec<Value>>,
    documents: Mutex<Vec<Value>>,
    members: Mutex<Vec<Value>>,
    committees: Mutex<Vec<Value>>,
    deadlines: Mutex<Vec<Value>>,
    fail_logout: AtomicBool,
    force_unauthorized: AtomicBool,
    force_server_error: AtomicBool,
}

/// Handle to a running stub backend
pub struct StubBackend {
    addr: SocketAddr,
    state: Arc<StubState>,
    server: tokio::task::JoinHandle<()>,
}

/// Spawn a stub backend on an ephemeral localhost port
///
/// Must be called from within a tokio runtime (any `#[tokio::test]` body).
pub fn spawn_stub() -> StubBackend {
    let state = Arc::new(StubState::default());
    let handler_state = Arc::clone(&state);

    let route = warp::any()
        .and(warp::method())
        .and(warp::path::full())
        .and(warp::header::optional::<String>("authorization"))
        .and(warp::body::bytes())
        .map(move |method: Method, path: FullPath, auth: Option<String>, body: Bytes| {
            handle(&handler_state, &method, path.as_str(), auth, &body)
        });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    let server = tokio::spawn(server);
    StubBackend { addr, state, server }
}

impl StubBackend {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Total requests received
    pub fn request_count(&self) -> usize {
        self.state.requests.load(Ordering::SeqCst)
    }

    /// Captured `Authorization` headers, one entry per request
    pub fn auth_headers(&self) -> Vec<Option<String>> {
        self.state.auth_headers.lock().clone()
    }

    /// Make `POST /auth/logout` answer 500
    pub fn fail_logout(&self, fail: bool) {
        self.state.fail_logout.store(fail, Ordering::SeqCst);
    }

    /// Answer 401 to everything, simulating an expired token
    pub fn force_unauthorized(&self, force: bool) {
        self.state.force_unauthorized.store(force, Ordering::SeqCst);
    }

    /// Answer 500 to everything, simulating a backend outage
    pub fn force_server_error(&self, force: bool) {
        self.state.force_server_error.store(force, Ordering::SeqCst);
    }

    pub fn seed_meeting(&self, meeting: Value) {
        self.state.meetings.lock().push(meeting);
    }

    pub fn seed_document(&self, document: Value) {
        self.state.documents.lock().push(document);
    }

    pub fn seed_member(&self, member: Value) {
        self.state.members.lock().push(member);
    }

    pub fn seed_deadline(&self, deadline: Value) {
        self.state.deadlines.lock().push(deadline);
    }
}

impl Drop for StubBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

type StubReply = warp::reply::WithStatus<warp::reply::Json>;

fn reply(status: StatusCode, body: Value) -> StubReply {
    warp::reply::with_status(warp::reply::json(&body), status)
}

fn ok(body: Value) -> StubReply {
    reply(StatusCode::OK, body)
}

fn handle(
    state: &Arc<StubState>,
    method: &Method,
    path: &str,
    auth: Option<String>,
    body: &Bytes,
) -> StubReply {
    state.requests.fetch_add(1, Ordering::SeqCst);
    state.auth_headers.lock().push(auth);

    if state.force_unauthorized.load(Ordering::SeqCst) {
        return reply(
            StatusCode::UNAUTHORIZED,
            json!({"error": "Authentication required"}),
        );
    }
    if state.force_server_error.load(Ordering::SeqCst) {
        return reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"error": "backend outage"}),
        );
    }

    let body: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

    match (method.as_str(), path) {
        ("POST", "/auth/login") => login(&body),
        ("POST", "/auth/logout") => {
            if state.fail_logout.load(Ordering::SeqCst) {
                reply(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": "logout failed"}),
                )
            } else {
                ok(json!({"success": true}))
            }
        }
        ("GET", "/health") => ok(json!({"status": "ok"})),
        ("GET", "/dashboard") => ok(json!({
            "stats": {
                "activeDirectors": 4,
                "totalDocuments": state.documents.lock().len(),
                "compliancePercentage": 75
            },
            "upcomingMeetings": [],
            "recentActivity": []
        })),

        ("GET", "/meetings") => ok(Value::Array(state.meetings.lock().clone())),
        ("POST", "/meetings") => {
            let record = create(&state.meetings, body, &[("status", json!("scheduled"))]);
            reply(StatusCode::CREATED, record)
        }

        ("GET", "/documents") => ok(Value::Array(state.documents.lock().clone())),
        ("POST", "/documents") => {
            let record = create(
                &state.documents,
                body,
                &[
                    ("version", json!(1)),
                    ("is_current_version", json!(true)),
                ],
            );
            reply(StatusCode::CREATED, record)
        }

        ("GET", "/board") => ok(Value::Array(state.members.lock().clone())),
        ("POST", "/board") => {
            let record = create(&state.members, body, &[]);
            reply(StatusCode::CREATED, record)
        }
        ("GET", "/board/committees") => ok(Value::Array(state.committees.lock().clone())),
        ("POST", "/board/committees") => {
            let record = create(&state.committees, body, &[]);
            reply(StatusCode::CREATED, record)
        }

        ("GET", "/compliance") => ok(json!({"overall": "attention_needed"})),
        ("GET", "/compliance/deadlines") => ok(Value::Array(state.deadlines.lock().clone())),
        ("POST", "/compliance/deadlines") => {
            let record = create(&state.deadlines, body, &[("status", json!("pending"))]);
            reply(StatusCode::CREATED, record)
        }
        ("GET", "/compliance/areas") => ok(json!([])),
        ("GET", "/compliance/audit") => ok(json!([])),

        ("GET", "/users") => ok(json!([])),
        ("GET", "/activity") => ok(json!([])),

        ("POST", path)
            if path.starts_with("/compliance/deadlines/") && path.ends_with("/complete") =>
        {
            complete_deadline(state, path)
        }
        ("PUT", path) if path.starts_with("/meetings/") => update(&state.meetings, path, body),
        ("PUT", path) if path.starts_with("/documents/") => update(&state.documents, path, body),

        _ => reply(StatusCode::NOT_FOUND, json!({"error": "not found"})),
    }
}

fn login(body: &Value) -> StubReply {
    let email = body.get("email").and_then(Value::as_str).unwrap_or("");
    let password = body.get("password").and_then(Value::as_str).unwrap_or("");
    if password == "wrong" || email.is_empty() {
        return reply(
            StatusCode::UNAUTHORIZED,
            json!({"error": "Invalid credentials"}),
        );
    }
    ok(json!({
        "token": "stub-token",
        "user": {
            "id": Uuid::new_v4(),
            "name": "David Park",
            "email": email,
            "role": "President"
        }
    }))
}

/// Assign an id, apply server-side defaults, store and echo the record
fn create(collection: &Mutex<Vec<Value>>, body: Value, defaults: &[(&str, Value)]) -> Value {
    let mut record = if body.is_object() { body } else { json!({}) };
    let fields = record.as_object_mut().unwrap();
    fields
        .entry("id")
        .or_insert_with(|| json!(Uuid::new_v4()));
    for (key, value) in defaults {
        fields.entry(*key).or_insert_with(|| value.clone());
    }
    collection.lock().push(record.clone());
    record
}

fn update(collection: &Mutex<Vec<Value>>, path: &str, body: Value) -> StubReply {
    let id = path.rsplit('/').next().unwrap_or_default();
    let mut records = collection.lock();
    for record in records.iter_mut() {
        if record.get("id").and_then(Value::as_str) == Some(id) {
            *record = body.clone();
            return ok(body);
        }
    }
    reply(StatusCode::NOT_FOUND, json!({"error": "not found"}))
}

fn complete_deadline(state: &Arc<StubState>, path: &str) -> StubReply {
    let id = path
        .trim_start_matches("/compliance/deadlines/")
        .trim_end_matches("/complete");
    let mut deadlines = state.deadlines.lock();
    for deadline in deadlines.iter_mut() {
        if deadline.get("id").and_then(Value::as_str) == Some(id) {
            deadline["status"] = json!("completed");
            return ok(deadline.clone());
        }
    }
    reply(StatusCode::NOT_FOUND, json!({"error": "not found"}))
}
