//! Dashboard frame: role-filtered sidebar plus page content.

use dioxus::prelude::*;

use super::{Layout, NoticeBanner};
use crate::menu::{filter_menu, Role, DASHBOARD_MENU};
use crate::notify::Notice;
use crate::settings::WebsiteSettings;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardShellProps {
    pub title: String,
    pub current_path: String,
    pub role: Option<Role>,
    pub site: WebsiteSettings,
    #[props(default)]
    pub notice: Option<Notice>,
    pub children: Element,
    #[props(default)]
    pub scripts: Option<String>,
}

/// Sidebar entries are filtered for the session role on every render.
#[component]
pub fn DashboardShell(props: DashboardShellProps) -> Element {
    let entries = filter_menu(DASHBOARD_MENU, props.role);
    let current = props.current_path.clone();
    let role_label = props.role.map(|r| r.label());

    rsx! {
        Layout {
            title: props.title.clone(),
            current_path: props.current_path.clone(),
            site: props.site.clone(),
            scripts: props.scripts.clone(),

            div { class: "dashboard",
                aside {
                    nav { "aria-label": "Dashboard",
                        if let Some(label) = role_label {
                            p { small { "Signed in as {label}" } }
                        }
                        if entries.is_empty() {
                            p { class: "no-menu",
                                small { "No dashboard pages are available for your account." }
                            }
                        }
                        ul {
                            for entry in entries.iter() {
                                li {
                                    {sidebar_link(entry.path, entry.label, entry.path == current)}
                                }
                            }
                        }
                    }
                }
                section {
                    if let Some(notice) = props.notice.clone() {
                        NoticeBanner { notice: notice }
                    }
                    h1 { "{props.title}" }
                    {props.children}
                }
            }
        }
    }
}

fn sidebar_link(href: &'static str, label: &'static str, active: bool) -> Element {
    if active {
        rsx! {
            a { href: href, "aria-current": "page", strong { "{label}" } }
        }
    } else {
        rsx! {
            a { href: href, "{label}" }
        }
    }
}
