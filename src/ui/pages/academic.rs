use dioxus::prelude::*;

use super::SectionIndex;
use crate::settings::WebsiteSettings;
use crate::ui::components::{ContentShell, Layout};

const PROGRAMS: &[(&str, &str)] = &[
    ("Primary", "Classes 1 to 5"),
    ("Secondary", "Classes 6 to 10, Science, Business Studies and Humanities groups"),
    ("Higher Secondary", "Classes 11 and 12"),
];

const CALENDAR: &[(&str, &str)] = &[
    ("January", "Academic year begins"),
    ("June", "Half-yearly examinations"),
    ("November", "Annual examinations"),
    ("December", "Results and winter vacation"),
];

#[component]
pub fn AcademicPage(site: WebsiteSettings) -> Element {
    rsx! {
        Layout {
            title: "Academic".to_string(),
            current_path: "/academic".to_string(),
            site: site,

            ContentShell {
                h1 { "Academic" }
                SectionIndex { path: "/academic" }
                section { id: "programs",
                    h2 { "Programs" }
                    div { class: "grid",
                        for (name, detail) in PROGRAMS.iter() {
                            article {
                                header { strong { "{name}" } }
                                "{detail}"
                            }
                        }
                    }
                }
                section { id: "calendar",
                    h2 { "Academic Calendar" }
                    table {
                        tbody {
                            for (month, event) in CALENDAR.iter() {
                                tr {
                                    th { scope: "row", "{month}" }
                                    td { "{event}" }
                                }
                            }
                        }
                    }
                }
                section { id: "results",
                    h2 { "Results" }
                    p { "Examination results are published on the notice board and in the student dashboard." }
                }
            }
        }
    }
}
