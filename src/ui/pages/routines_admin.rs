//! Routine administration: list published routines and delete them.

use dioxus::prelude::*;

use crate::menu::Role;
use crate::notify::Notice;
use crate::routine::RoutineSchedule;
use crate::settings::WebsiteSettings;
use crate::ui::components::DashboardShell;

#[component]
pub fn RoutinesAdminPage(
    site: WebsiteSettings,
    role: Option<Role>,
    routines: Vec<RoutineSchedule>,
    notice: Option<Notice>,
    /// False when the list could not be loaded.
    loaded: bool,
) -> Element {
    rsx! {
        DashboardShell {
            title: "Routines".to_string(),
            current_path: "/dashboard/routines".to_string(),
            role: role,
            site: site,
            notice: notice,

            if !loaded {
                article { "Routines are not available right now." }
            } else if routines.is_empty() {
                article { "No routines have been published yet." }
            } else {
                figure {
                    table {
                        thead {
                            tr {
                                th { scope: "col", "Class" }
                                th { scope: "col", "Academic year" }
                                th { scope: "col", "Periods" }
                                th { scope: "col", "" }
                            }
                        }
                        tbody {
                            for routine in routines.iter() {
                                {routine_row(routine)}
                            }
                        }
                    }
                }
            }
        }
    }
}

fn routine_row(routine: &RoutineSchedule) -> Element {
    let title = routine.title();
    let year = routine.academic_year.clone();
    let periods: usize = routine.schedule.iter().map(|d| d.periods.len()).sum();
    let id = routine.id.clone().filter(|id| !id.is_empty());

    rsx! {
        tr {
            td { "{title}" }
            td { "{year}" }
            td { "{periods}" }
            td {
                if let Some(id) = id {
                    {delete_form(&id)}
                }
            }
        }
    }
}

fn delete_form(id: &str) -> Element {
    let action = format!("/dashboard/routines/{}/delete", urlencoding::encode(id));
    rsx! {
        form { method: "post", action: "{action}",
            button { r#type: "submit", class: "outline secondary", style: "margin:0;", "Delete" }
        }
    }
}
