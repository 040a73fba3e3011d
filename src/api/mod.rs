//! HTTP surface: shared state, health endpoint and the route table.

use axum::{
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::backend::SharedApi;
use crate::flash::FlashStore;
use crate::settings::{ImageField, WebsiteSettings, MAX_IMAGE_BYTES};
use crate::ui;

/// Largest settings form accepted. Leaves room for oversized files so they
/// can be rejected with a notice instead of a bare 413.
pub const MAX_FORM_BYTES: usize = 2 * ImageField::ALL.len() * MAX_IMAGE_BYTES;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub api: SharedApi,
    pub flash: FlashStore,
    /// Root of every view scope; cancelled on shutdown.
    pub shutdown: CancellationToken,
    /// Branding used when the backend cannot supply settings.
    pub site_defaults: WebsiteSettings,
    started_at: Instant,
}

impl AppState {
    pub fn new(
        api: SharedApi,
        flash: FlashStore,
        shutdown: CancellationToken,
        site_defaults: WebsiteSettings,
    ) -> Self {
        Self {
            api,
            flash,
            shutdown,
            site_defaults,
            started_at: Instant::now(),
        }
    }
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub uptime_secs: u64,
    pub pending_flash_notices: usize,
}

/// GET /health - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "school-portal",
        version: env!("PORTAL_VERSION"),
        git_sha: env!("PORTAL_GIT_SHA"),
        uptime_secs: state.started_at.elapsed().as_secs(),
        pending_flash_notices: state.flash.len(),
    })
}

/// Build the portal router.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(status_handler))
        // Public site
        .route("/", get(ui::home_page))
        .route("/about", get(ui::about_page))
        .route("/academic", get(ui::academic_page))
        .route("/administration", get(ui::administration_page))
        .route("/admission", get(ui::admission_page))
        .route("/gallery", get(ui::gallery_page))
        .route("/contact", get(ui::contact_page))
        // Dashboard
        .route("/dashboard", get(ui::dashboard_page))
        .route("/dashboard/routine", get(ui::student_routine_page))
        .route("/dashboard/teacher-routine", get(ui::teacher_routine_page))
        .route("/dashboard/routines", get(ui::routines_admin_page))
        .route("/dashboard/routines/{id}/delete", post(ui::delete_routine_action))
        .route("/dashboard/settings", get(ui::settings_page))
        .route("/dashboard/settings", post(ui::settings_submit))
        // Middleware
        .layer(DefaultBodyLimit::max(MAX_FORM_BYTES))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
