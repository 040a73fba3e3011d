//! Teacher view: every published routine, the teacher's own periods
//! highlighted, one routine visible at a time.

use dioxus::prelude::*;

use crate::loader::{TeacherRoutineView, TeacherRoutines};
use crate::menu::Role;
use crate::routine::WeekTable;
use crate::settings::WebsiteSettings;
use crate::ui::components::{DashboardShell, RoutineTable};

/// Switches the visible routine without a request. The form still works
/// without JavaScript by reloading with `?selected=`.
const SELECTOR_SCRIPT: &str = r#"
(function () {
    const select = document.getElementById('routine-selector');
    if (!select) return;
    const apply = () => {
        document.querySelectorAll('[data-routine-index]').forEach(panel => {
            panel.classList.toggle('is-hidden', panel.dataset.routineIndex !== select.value);
        });
    };
    select.addEventListener('change', apply);
    const submit = document.getElementById('routine-selector-submit');
    if (submit) submit.classList.add('is-hidden');
})();
"#;

#[component]
pub fn TeacherRoutinePage(
    site: WebsiteSettings,
    role: Option<Role>,
    view: TeacherRoutineView,
) -> Element {
    let notice = match &view {
        TeacherRoutineView::Unavailable { notice } => Some(notice.clone()),
        _ => None,
    };

    rsx! {
        DashboardShell {
            title: "Teaching Routine".to_string(),
            current_path: "/dashboard/teacher-routine".to_string(),
            role: role,
            site: site,
            notice: notice,
            scripts: Some(SELECTOR_SCRIPT.to_string()),

            {teacher_body(&view)}
        }
    }
}

fn teacher_body(view: &TeacherRoutineView) -> Element {
    match view {
        TeacherRoutineView::Ready(routines) => ready_body(routines),
        TeacherRoutineView::NotPublished { .. } => rsx! {
            article { "No routines have been published yet." }
        },
        TeacherRoutineView::Unavailable { .. } => rsx! {
            article { "Routines are not available right now. Reload the page to try again." }
        },
    }
}

fn ready_body(routines: &TeacherRoutines) -> Element {
    let selected = routines.selected_index();
    let highlight = routines.highlight_id();
    let teacher = routines.teacher.name.clone();

    rsx! {
        p { small { "Periods taught by {teacher} are highlighted." } }
        form { method: "get", action: "/dashboard/teacher-routine",
            label {
                "Routine"
                select { id: "routine-selector", name: "selected",
                    for (index, routine) in routines.routines().iter().enumerate() {
                        {selector_option(index, &routine.title(), index == selected)}
                    }
                }
            }
            button { id: "routine-selector-submit", r#type: "submit", class: "secondary", "Show" }
        }
        for (index, routine) in routines.routines().iter().enumerate() {
            {routine_panel(index, index == selected, &routine.title(), &routine.academic_year, WeekTable::build(routine, highlight))}
        }
    }
}

fn selector_option(index: usize, title: &str, selected: bool) -> Element {
    rsx! {
        option { value: "{index}", selected: selected, "{title}" }
    }
}

fn routine_panel(
    index: usize,
    visible: bool,
    title: &str,
    academic_year: &str,
    table: WeekTable,
) -> Element {
    let class = if visible {
        "routine-panel"
    } else {
        "routine-panel is-hidden"
    };
    rsx! {
        section { key: "{index}", class: "{class}", "data-routine-index": "{index}",
            hgroup {
                h2 { "{title}" }
                p { "Academic year {academic_year}" }
            }
            RoutineTable { table: table }
        }
    }
}
