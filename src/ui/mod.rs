//! Web UI handlers.
//!
//! Pages are Dioxus components rendered to HTML on the server; styling is
//! Pico CSS plus a small set of custom rules in the layout. Any behaviour
//! that must not hit the network (dropdown timers, routine switching,
//! upload size checks) ships as inline script with the page.
//!
//! - components/ - shared Dioxus components (layout, header, dashboard shell, ...)
//! - pages/ - one component per page

pub mod components;
pub mod pages;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use dioxus::prelude::*;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::api::AppState;
use crate::loader::{
    load_branding, load_settings_form, load_student_routine, load_teacher_routines,
    submit_settings, StudentRoutineView, TeacherRoutineView, ViewScope,
};
use crate::menu::{can_access, DASHBOARD_MENU};
use crate::notify::Notice;
use crate::session::Session;
use crate::settings::{FileSelection, ImageField, SettingsForm, WebsiteSettings};
use pages::{
    AboutPage, AcademicPage, AccessDeniedPage, AdministrationPage, AdmissionPage, ContactPage,
    DashboardPage, GalleryCategory, GalleryPage, HomePage, RoutinesAdminPage, SettingsPage,
    StudentRoutinePage, TeacherRoutinePage,
};

const ROUTINES_ADMIN_PATH: &str = "/dashboard/routines";
const SETTINGS_PATH: &str = "/dashboard/settings";

/// Wrap a rendered page in the HTML document shell.
fn render_document(page: Element) -> Html<String> {
    let html = dioxus::ssr::render_element(page);
    Html(format!("<!DOCTYPE html>\n<html lang=\"en\">\n{}</html>", html))
}

async fn branding(state: &AppState) -> WebsiteSettings {
    load_branding(state.api.as_ref(), &state.site_defaults).await
}

/// 403 page for dashboard routes the session's role may not open.
async fn access_denied(state: &AppState, session: &Session, path: &str) -> Response {
    warn!(
        "Denied {} to role {:?}",
        path,
        session.role.map(|r| r.as_str())
    );
    let site = branding(state).await;
    let page = render_document(rsx! {
        AccessDeniedPage { site: site, role: session.role, path: path.to_string() }
    });
    (StatusCode::FORBIDDEN, page).into_response()
}

/// The view was abandoned (server shutting down) before its data arrived.
fn abandoned() -> Response {
    StatusCode::SERVICE_UNAVAILABLE.into_response()
}

// =============================================================================
// Public pages
// =============================================================================

/// GET / - Home page
pub async fn home_page(State(state): State<AppState>) -> impl IntoResponse {
    let site = branding(&state).await;
    render_document(rsx! { HomePage { site: site } })
}

/// GET /about
pub async fn about_page(State(state): State<AppState>) -> impl IntoResponse {
    let site = branding(&state).await;
    render_document(rsx! { AboutPage { site: site } })
}

/// GET /academic
pub async fn academic_page(State(state): State<AppState>) -> impl IntoResponse {
    let site = branding(&state).await;
    render_document(rsx! { AcademicPage { site: site } })
}

/// GET /administration
pub async fn administration_page(State(state): State<AppState>) -> impl IntoResponse {
    let site = branding(&state).await;
    render_document(rsx! { AdministrationPage { site: site } })
}

/// GET /admission
pub async fn admission_page(State(state): State<AppState>) -> impl IntoResponse {
    let site = branding(&state).await;
    render_document(rsx! { AdmissionPage { site: site } })
}

#[derive(Deserialize)]
pub struct GalleryQuery {
    pub category: Option<String>,
}

/// GET /gallery?category=
pub async fn gallery_page(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> impl IntoResponse {
    let category = GalleryCategory::from_query(query.category.as_deref());
    let site = branding(&state).await;
    render_document(rsx! { GalleryPage { site: site, category: category } })
}

/// GET /contact
pub async fn contact_page(State(state): State<AppState>) -> impl IntoResponse {
    let site = branding(&state).await;
    render_document(rsx! { ContactPage { site: site } })
}

// =============================================================================
// Dashboard
// =============================================================================

/// GET /dashboard - Overview; renders for any session, role or not.
pub async fn dashboard_page(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let notice = state.flash.take(&session.flash_key());
    let site = branding(&state).await;
    render_document(rsx! {
        DashboardPage {
            site: site,
            role: session.role,
            user_id: session.user_id.clone(),
            notice: notice,
        }
    })
}

/// GET /dashboard/routine - Routine of the student's class
pub async fn student_routine_page(State(state): State<AppState>, session: Session) -> Response {
    const PATH: &str = "/dashboard/routine";
    if !can_access(DASHBOARD_MENU, session.role, PATH) {
        return access_denied(&state, &session, PATH).await;
    }

    let scope = ViewScope::new(&state.shutdown);
    let load = async {
        match session.user_id.as_deref() {
            Some(id) => load_student_routine(state.api.as_ref(), id, &scope).await,
            None => Some(StudentRoutineView::Unavailable {
                notice: Notice::error("Your session does not identify a student."),
            }),
        }
    };
    let (site, view) = tokio::join!(branding(&state), load);
    let Some(view) = view else {
        return abandoned();
    };

    render_document(rsx! {
        StudentRoutinePage { site: site, role: session.role, view: view }
    })
    .into_response()
}

#[derive(Deserialize)]
pub struct RoutineSelection {
    pub selected: Option<usize>,
}

/// GET /dashboard/teacher-routine?selected= - All routines, own periods highlighted
pub async fn teacher_routine_page(
    State(state): State<AppState>,
    session: Session,
    Query(selection): Query<RoutineSelection>,
) -> Response {
    const PATH: &str = "/dashboard/teacher-routine";
    if !can_access(DASHBOARD_MENU, session.role, PATH) {
        return access_denied(&state, &session, PATH).await;
    }

    let scope = ViewScope::new(&state.shutdown);
    let load = async {
        match session.user_id.as_deref() {
            Some(id) => load_teacher_routines(state.api.as_ref(), id, &scope).await,
            None => Some(TeacherRoutineView::Unavailable {
                notice: Notice::error("Your session does not identify a teacher."),
            }),
        }
    };
    let (site, view) = tokio::join!(branding(&state), load);
    let Some(mut view) = view else {
        return abandoned();
    };

    if let (TeacherRoutineView::Ready(routines), Some(index)) = (&mut view, selection.selected) {
        if !routines.select(index) {
            debug!("Ignoring out-of-range routine selection {}", index);
        }
    }

    render_document(rsx! {
        TeacherRoutinePage { site: site, role: session.role, view: view }
    })
    .into_response()
}

/// GET /dashboard/routines - Routine administration list
pub async fn routines_admin_page(State(state): State<AppState>, session: Session) -> Response {
    if !can_access(DASHBOARD_MENU, session.role, ROUTINES_ADMIN_PATH) {
        return access_denied(&state, &session, ROUTINES_ADMIN_PATH).await;
    }

    let flash = state.flash.take(&session.flash_key());
    let scope = ViewScope::new(&state.shutdown);
    let (site, listed) = tokio::join!(
        branding(&state),
        scope.run(state.api.list_routines())
    );
    let Some(listed) = listed else {
        return abandoned();
    };

    let (routines, loaded, notice) = match listed {
        Ok(routines) => (routines, true, flash),
        Err(e) => {
            warn!("Routine list failed: {}", e);
            (Vec::new(), false, Some(e.to_notice()))
        }
    };

    render_document(rsx! {
        RoutinesAdminPage {
            site: site,
            role: session.role,
            routines: routines,
            notice: notice,
            loaded: loaded,
        }
    })
    .into_response()
}

/// POST /dashboard/routines/{id}/delete
pub async fn delete_routine_action(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Response {
    if !can_access(DASHBOARD_MENU, session.role, ROUTINES_ADMIN_PATH) {
        return access_denied(&state, &session, ROUTINES_ADMIN_PATH).await;
    }

    let notice = match state.api.delete_routine(&id).await {
        Ok(()) => {
            info!("Routine {} deleted", id);
            Notice::success("Routine deleted.")
        }
        Err(e) => {
            warn!("Deleting routine {} failed: {}", id, e);
            e.to_notice()
        }
    };
    state.flash.push(&session.flash_key(), notice);
    Redirect::to(ROUTINES_ADMIN_PATH).into_response()
}

/// GET /dashboard/settings - Website settings editor
pub async fn settings_page(State(state): State<AppState>, session: Session) -> Response {
    if !can_access(DASHBOARD_MENU, session.role, SETTINGS_PATH) {
        return access_denied(&state, &session, SETTINGS_PATH).await;
    }

    let flash = state.flash.take(&session.flash_key());
    let scope = ViewScope::new(&state.shutdown);
    let (site, loaded) = tokio::join!(
        branding(&state),
        load_settings_form(state.api.as_ref(), &scope)
    );
    let Some(loaded) = loaded else {
        return abandoned();
    };

    let (form, notice) = match loaded {
        Ok(form) => (Some(form), flash),
        Err(notice) => (None, Some(notice)),
    };

    render_document(rsx! {
        SettingsPage { site: site, role: session.role, form: form, notice: notice }
    })
    .into_response()
}

/// POST /dashboard/settings - Multipart form; saves and redirects back
pub async fn settings_submit(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Response {
    if !can_access(DASHBOARD_MENU, session.role, SETTINGS_PATH) {
        return access_denied(&state, &session, SETTINGS_PATH).await;
    }

    let notice = match read_settings_form(multipart).await {
        Ok(form) => match submit_settings(state.api.as_ref(), &form).await {
            Ok(_) => Notice::success("Settings saved."),
            Err(e) => {
                warn!("Saving settings failed: {}", e);
                e.to_notice()
            }
        },
        Err(notice) => notice,
    };
    state.flash.push(&session.flash_key(), notice);
    Redirect::to(SETTINGS_PATH).into_response()
}

/// Collect the posted fields into a form. Files are checked as they are
/// staged, so an oversized or non-image file ends the request here.
async fn read_settings_form(mut multipart: Multipart) -> Result<SettingsForm, Notice> {
    let mut form = SettingsForm::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!("Malformed settings form: {}", e);
                return Err(Notice::error("The submitted form could not be read."));
            }
        };
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if let Some(image) = ImageField::from_form_name(&name) {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field.bytes().await.map_err(|e| {
                warn!("Reading upload {} failed: {}", name, e);
                Notice::error("The submitted form could not be read.")
            })?;
            if file_name.is_empty() && bytes.is_empty() {
                continue;
            }
            let selection = FileSelection {
                file_name,
                content_type,
                bytes: bytes.to_vec(),
            };
            form.stage_image(image, selection)
                .map_err(|e| Notice::error(e.to_string()))?;
        } else {
            let value = field.text().await.map_err(|e| {
                warn!("Reading field {} failed: {}", name, e);
                Notice::error("The submitted form could not be read.")
            })?;
            form.set_text(&name, value);
        }
    }

    Ok(form)
}
