#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]
//! Mock school REST backend
//!
//! Serves `/api/...` with the response shapes the real backend uses: some
//! endpoints wrap payloads in `{"success": true, "data": ...}`, others return
//! them bare, and errors carry a `message` field.

use axum::{
    extract::{Multipart, Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

#[derive(Default)]
struct MockSchoolState {
    students: HashMap<String, Value>,
    teachers: HashMap<String, Value>,
    routines: Vec<Value>,
    settings: Value,
    /// "METHOD /path" -> (status, message)
    failures: HashMap<String, (u16, String)>,
    /// Serve by-class routines without the `{"data": ...}` wrapper.
    bare_by_class: bool,
    log: Vec<String>,
    next_id: u32,
}

type Shared = Arc<RwLock<MockSchoolState>>;

/// Mock school backend server
pub struct MockSchoolBackend {
    addr: SocketAddr,
    state: Shared,
    handle: JoinHandle<()>,
}

impl MockSchoolBackend {
    /// Start a mock backend on a random port
    pub async fn start() -> Self {
        let state: Shared = Arc::new(RwLock::new(MockSchoolState {
            settings: json!({ "schoolName": "Mock High School" }),
            next_id: 1,
            ..Default::default()
        }));

        let api = Router::new()
            .route("/students/{id}", get(get_student))
            .route("/teachers/{id}", get(get_teacher))
            .route("/routines", get(list_routines).post(create_routine))
            .route("/routines/class/{class_id}", get(routine_for_class))
            .route("/routines/{id}", put(update_routine).delete(delete_routine))
            .route("/settings", get(get_settings).put(update_settings))
            .route("/settings/{field}", put(upload_image))
            .with_state(state.clone());
        let app = Router::new().nest("/api", api);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    /// Get the server address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL to configure the portal with
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub async fn add_student(&self, id: &str, name: &str, class: Option<(&str, &str, &str)>) {
        let class = class.map(|(class_id, class_name, section)| {
            json!({ "_id": class_id, "className": class_name, "section": section })
        });
        self.state.write().await.students.insert(
            id.to_string(),
            json!({ "_id": id, "name": name, "class": class }),
        );
    }

    pub async fn add_teacher(&self, id: &str, name: &str) {
        self.state
            .write()
            .await
            .teachers
            .insert(id.to_string(), json!({ "_id": id, "name": name }));
    }

    /// Add a routine document; it needs `_id` and `class._id`.
    pub async fn add_routine(&self, routine: Value) {
        self.state.write().await.routines.push(routine);
    }

    pub async fn set_settings(&self, settings: Value) {
        self.state.write().await.settings = settings;
    }

    /// Answer `GET /routines/class/{id}` with the bare routine document.
    pub async fn serve_bare_by_class(&self) {
        self.state.write().await.bare_by_class = true;
    }

    /// Make `request` ("PUT /settings") fail with `status` and `message`.
    pub async fn fail(&self, request: &str, status: u16, message: &str) {
        self.state
            .write()
            .await
            .failures
            .insert(request.to_string(), (status, message.to_string()));
    }

    /// Requests received so far, as "METHOD /path [detail]".
    pub async fn requests(&self) -> Vec<String> {
        self.state.read().await.log.clone()
    }

    /// Requests other than the settings reads every page does for branding.
    pub async fn requests_except_branding(&self) -> Vec<String> {
        self.requests()
            .await
            .into_iter()
            .filter(|r| r != "GET /settings")
            .collect()
    }

    pub async fn clear_requests(&self) {
        self.state.write().await.log.clear();
    }

    pub async fn routine_count(&self) -> usize {
        self.state.read().await.routines.len()
    }

    /// Stop the mock server
    pub async fn stop(self) {
        self.handle.abort();
    }
}

fn error(status: u16, message: &str) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "success": false, "message": message }))).into_response()
}

fn wrapped(data: Value) -> Response {
    Json(json!({ "success": true, "data": data })).into_response()
}

/// Log the request and return the configured failure, if any.
async fn record(state: &Shared, method: Method, path: &str, detail: Option<String>) -> Option<Response> {
    let key = format!("{} {}", method, path);
    let mut s = state.write().await;
    let line = match detail {
        Some(d) => format!("{} {}", key, d),
        None => key.clone(),
    };
    s.log.push(line);
    s.failures
        .get(&key)
        .map(|(status, message)| error(*status, message))
}

/// Store ids the way the real backend does, as `_id` only.
fn set_id(body: &mut Value, id: &str) {
    if let Some(obj) = body.as_object_mut() {
        obj.remove("id");
        obj.insert("_id".to_string(), json!(id));
    }
}

async fn get_student(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    if let Some(r) = record(&state, Method::GET, &format!("/students/{}", id), None).await {
        return r;
    }
    match state.read().await.students.get(&id) {
        Some(student) => wrapped(student.clone()),
        None => error(404, "Student not found"),
    }
}

async fn get_teacher(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    if let Some(r) = record(&state, Method::GET, &format!("/teachers/{}", id), None).await {
        return r;
    }
    match state.read().await.teachers.get(&id) {
        // Bare payload
        Some(teacher) => Json(teacher.clone()).into_response(),
        None => error(404, "Teacher not found"),
    }
}

async fn list_routines(State(state): State<Shared>) -> Response {
    if let Some(r) = record(&state, Method::GET, "/routines", None).await {
        return r;
    }
    wrapped(Value::Array(state.read().await.routines.clone()))
}

async fn create_routine(State(state): State<Shared>, Json(mut body): Json<Value>) -> Response {
    if let Some(r) = record(&state, Method::POST, "/routines", None).await {
        return r;
    }
    let mut s = state.write().await;
    let id = format!("routine-{}", s.next_id);
    s.next_id += 1;
    set_id(&mut body, &id);
    s.routines.push(body.clone());
    (StatusCode::CREATED, Json(json!({ "success": true, "data": body }))).into_response()
}

async fn routine_for_class(State(state): State<Shared>, Path(class_id): Path<String>) -> Response {
    let path = format!("/routines/class/{}", class_id);
    if let Some(r) = record(&state, Method::GET, &path, None).await {
        return r;
    }
    let s = state.read().await;
    match s
        .routines
        .iter()
        .find(|r| r["class"]["_id"].as_str() == Some(class_id.as_str()))
    {
        Some(routine) if s.bare_by_class => Json(routine.clone()).into_response(),
        Some(routine) => wrapped(routine.clone()),
        None => error(404, "No routine found for this class"),
    }
}

async fn update_routine(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(mut body): Json<Value>,
) -> Response {
    if let Some(r) = record(&state, Method::PUT, &format!("/routines/{}", id), None).await {
        return r;
    }
    let mut s = state.write().await;
    match s
        .routines
        .iter_mut()
        .find(|r| r["_id"].as_str() == Some(id.as_str()))
    {
        Some(existing) => {
            set_id(&mut body, &id);
            *existing = body.clone();
            wrapped(body)
        }
        None => error(404, "Routine not found"),
    }
}

async fn delete_routine(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    if let Some(r) = record(&state, Method::DELETE, &format!("/routines/{}", id), None).await {
        return r;
    }
    let mut s = state.write().await;
    let before = s.routines.len();
    s.routines.retain(|r| r["_id"].as_str() != Some(id.as_str()));
    if s.routines.len() == before {
        return error(404, "Routine not found");
    }
    Json(json!({ "success": true, "message": "Routine deleted" })).into_response()
}

async fn get_settings(State(state): State<Shared>) -> Response {
    if let Some(r) = record(&state, Method::GET, "/settings", None).await {
        return r;
    }
    wrapped(state.read().await.settings.clone())
}

async fn update_settings(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    if let Some(r) = record(&state, Method::PUT, "/settings", None).await {
        return r;
    }
    let mut s = state.write().await;
    if let (Some(current), Some(update)) = (s.settings.as_object_mut(), body.as_object()) {
        for (k, v) in update {
            current.insert(k.clone(), v.clone());
        }
    }
    wrapped(s.settings.clone())
}

async fn upload_image(
    State(state): State<Shared>,
    Path(field): Path<String>,
    mut multipart: Multipart,
) -> Response {
    let mut upload = None;
    while let Ok(Some(part)) = multipart.next_field().await {
        let name = part.name().unwrap_or_default().to_string();
        let file_name = part.file_name().unwrap_or_default().to_string();
        let content_type = part.content_type().unwrap_or_default().to_string();
        let size = part.bytes().await.map(|b| b.len()).unwrap_or(0);
        upload = Some((name, file_name, content_type, size));
    }
    let detail = upload
        .as_ref()
        .map(|(name, file, mime, size)| format!("{}={} {} {}", name, file, mime, size));
    let path = format!("/settings/{}", field);
    if let Some(r) = record(&state, Method::PUT, &path, detail).await {
        return r;
    }
    let Some((part, file_name, _, _)) = upload else {
        return error(400, "No file uploaded");
    };
    if part != "image" {
        return error(400, "Expected an 'image' part");
    }
    let mut s = state.write().await;
    s.settings[field.as_str()] = json!(format!("https://cdn.example/{}", file_name));
    wrapped(s.settings.clone())
}
