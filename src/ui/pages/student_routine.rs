//! Student view of the class routine.

use dioxus::prelude::*;

use crate::loader::StudentRoutineView;
use crate::menu::Role;
use crate::notify::Notice;
use crate::routine::WeekTable;
use crate::settings::WebsiteSettings;
use crate::ui::components::{DashboardShell, RoutineTable};

#[component]
pub fn StudentRoutinePage(
    site: WebsiteSettings,
    role: Option<Role>,
    view: StudentRoutineView,
) -> Element {
    let notice = match &view {
        StudentRoutineView::Unavailable { notice } => Some(notice.clone()),
        StudentRoutineView::NotEnrolled => Some(Notice::info(
            "You are not enrolled in a class yet. Please contact the school office.",
        )),
        _ => None,
    };

    rsx! {
        DashboardShell {
            title: "Class Routine".to_string(),
            current_path: "/dashboard/routine".to_string(),
            role: role,
            site: site,
            notice: notice,

            {student_body(&view)}
        }
    }
}

fn student_body(view: &StudentRoutineView) -> Element {
    match view {
        StudentRoutineView::Ready { routine, .. } => {
            let title = routine.title();
            let year = routine.academic_year.clone();
            let table = WeekTable::build(routine, None);
            rsx! {
                hgroup {
                    h2 { "{title}" }
                    p { "Academic year {year}" }
                }
                RoutineTable { table: table }
            }
        }
        StudentRoutineView::NotPublished { class } => {
            let name = class.class.class_name.clone();
            rsx! {
                article { "No routine has been published for {name} yet." }
            }
        }
        StudentRoutineView::NotEnrolled => rsx! {
            article { "Your routine will appear here once you are assigned to a class." }
        },
        StudentRoutineView::Unavailable { .. } => rsx! {
            article { "The routine is not available right now. Reload the page to try again." }
        },
    }
}
