//! Page layout: document head, site header, footer and shared scripts.

use dioxus::prelude::*;

use super::header::{SiteHeader, HEADER_SCRIPT};
use crate::nav::{breadcrumbs, SITE_NAVIGATION};
use crate::settings::WebsiteSettings;

/// CSS styles for the portal (extends Pico CSS).
const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 15px; }
small { color: var(--pico-muted-color); }
.is-hidden { display: none !important; }
/* Header */
.site-header nav { flex-wrap: wrap; }
.brand { display: flex; align-items: center; gap: 0.5rem; }
.brand img { height: 2.5rem; }
.nav-dropdown { position: relative; }
.nav-dropdown > ul.submenu { display: none; position: absolute; z-index: 10; flex-direction: column; background: var(--pico-card-background-color); box-shadow: var(--pico-card-box-shadow); padding: 0.5rem; min-width: 12rem; }
.nav-dropdown.open > ul.submenu { display: flex; }
.nav-dropdown > ul.submenu li { padding: 0.25rem 0.5rem; }
.mobile-menu { display: none; }
@media (max-width: 768px) {
    .desktop-menu { display: none; }
    .mobile-menu { display: block; }
}
/* Skeletons */
.skeleton-line { height: 1rem; margin: 0.75rem 0; border-radius: 4px; background: var(--pico-muted-border-color); }
/* Toasts */
.toast { padding: 0.75rem 1rem; border-radius: var(--pico-border-radius); margin-bottom: 1rem; }
.toast-success { background: #e6f4ea; color: #1e6b34; }
.toast-error { background: #fdecea; color: #a4262c; }
.toast-info { background: #e8f0fe; color: #1a4d8f; }
/* Dashboard */
.dashboard { display: grid; grid-template-columns: 14rem 1fr; gap: 2rem; }
.dashboard aside nav ul { flex-direction: column; align-items: stretch; }
@media (max-width: 768px) { .dashboard { grid-template-columns: 1fr; } }
/* Routine table */
.routine-table th[scope=row] { white-space: nowrap; }
.routine-periods { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.period-card { border: 1px solid var(--pico-muted-border-color); border-radius: var(--pico-border-radius); padding: 0.5rem; min-width: 9rem; }
.period-card.highlight { border-color: var(--pico-primary); background: var(--pico-primary-focus); }
.no-classes { color: var(--pico-muted-color); font-style: italic; }
/* Gallery */
.gallery-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }
.gallery-grid figure { margin: 0; }
.image-preview { max-height: 6rem; display: block; margin-bottom: 0.5rem; }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Path of the current request, used to mark the active nav item
    pub current_path: String,
    pub site: WebsiteSettings,
    pub children: Element,
    /// Optional additional scripts to include
    #[props(default)]
    pub scripts: Option<String>,
}

/// Main layout component wrapping every page.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let school = props.site.school_name.clone();
    let year = chrono::Local::now().format("%Y").to_string();
    let version = env!("CARGO_PKG_VERSION");

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{props.title} - {school}" }
            link {
                rel: "stylesheet",
                href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css"
            }
            style { {CUSTOM_STYLES} }
        }
        body {
            SiteHeader {
                site: props.site.clone(),
                current_path: props.current_path.clone(),
            }
            main { class: "container",
                {breadcrumb_trail(&props.current_path)}
                {props.children}
            }
            footer { class: "container",
                hr {}
                {contact_line(&props.site)}
                small { "© {year} {school} · portal v{version}" }
            }
            script { dangerous_inner_html: HEADER_SCRIPT }
            if let Some(scripts) = props.scripts {
                script { dangerous_inner_html: "{scripts}" }
            }
        }
    }
}

fn breadcrumb_trail(path: &str) -> Element {
    if path == "/" {
        return rsx! {};
    }
    let trail = breadcrumbs(SITE_NAVIGATION, path);
    if trail.is_empty() {
        return rsx! {};
    }
    rsx! {
        nav { "aria-label": "breadcrumb",
            ul {
                li { a { href: "/", "Home" } }
                for item in trail.iter() {
                    li { "{item.label}" }
                }
            }
        }
    }
}

fn contact_line(site: &WebsiteSettings) -> Element {
    let parts: Vec<&str> = [site.address.as_str(), site.phone.as_str(), site.email.as_str()]
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect();
    if parts.is_empty() {
        return rsx! {};
    }
    let line = parts.join(" · ");
    rsx! {
        p { small { "{line}" } }
    }
}
