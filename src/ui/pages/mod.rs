//! Page components. Each renders a full document through `Layout`, either
//! directly (public pages) or via `DashboardShell`.

pub mod about;
pub mod academic;
pub mod administration;
pub mod admission;
pub mod contact;
pub mod dashboard;
pub mod gallery;
pub mod home;
pub mod routines_admin;
pub mod settings;
pub mod student_routine;
pub mod teacher_routine;

pub use about::AboutPage;
pub use academic::AcademicPage;
pub use administration::AdministrationPage;
pub use admission::AdmissionPage;
pub use contact::ContactPage;
pub use dashboard::{AccessDeniedPage, DashboardPage};
pub use gallery::{filter_gallery, GalleryCategory, GalleryPage};
pub use home::HomePage;
pub use routines_admin::RoutinesAdminPage;
pub use settings::SettingsPage;
pub use student_routine::StudentRoutinePage;
pub use teacher_routine::TeacherRoutinePage;

use dioxus::prelude::*;

use crate::nav::{find_by_path, SITE_NAVIGATION};

/// "On this page" links built from the navigation entry's children.
#[component]
fn SectionIndex(path: &'static str) -> Element {
    let Some(item) = find_by_path(SITE_NAVIGATION, path) else {
        return rsx! {};
    };
    if !item.has_children() {
        return rsx! {};
    }
    rsx! {
        nav { "aria-label": "On this page",
            ul {
                for child in item.sub_items.iter() {
                    li { a { href: child.path, "{child.label}" } }
                }
            }
        }
    }
}
