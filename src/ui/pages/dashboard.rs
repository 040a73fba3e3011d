//! Dashboard overview and the access-denied page.

use dioxus::prelude::*;

use crate::menu::{filter_menu, Role, DASHBOARD_MENU};
use crate::notify::Notice;
use crate::settings::WebsiteSettings;
use crate::ui::components::DashboardShell;

#[component]
pub fn DashboardPage(
    site: WebsiteSettings,
    role: Option<Role>,
    user_id: Option<String>,
    notice: Option<Notice>,
) -> Element {
    let shortcuts: Vec<_> = filter_menu(DASHBOARD_MENU, role)
        .into_iter()
        .filter(|e| e.path != "/dashboard")
        .collect();
    let greeting = match (role, user_id.as_deref()) {
        (Some(r), Some(id)) => format!("Welcome, {} ({}).", r.label(), id),
        (Some(r), None) => format!("Welcome, {}.", r.label()),
        (None, _) => "Your account has no dashboard role assigned.".to_string(),
    };

    rsx! {
        DashboardShell {
            title: "Dashboard".to_string(),
            current_path: "/dashboard".to_string(),
            role: role,
            site: site,
            notice: notice,

            p { "{greeting}" }
            if !shortcuts.is_empty() {
                div { class: "grid",
                    for entry in shortcuts.iter() {
                        article {
                            a { href: entry.path, strong { "{entry.label}" } }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AccessDeniedPage(site: WebsiteSettings, role: Option<Role>, path: String) -> Element {
    rsx! {
        DashboardShell {
            title: "Access denied".to_string(),
            current_path: path.clone(),
            role: role,
            site: site,

            p { "You do not have permission to view this page." }
            p { a { href: "/dashboard", "Back to dashboard" } }
        }
    }
}
