use dioxus::prelude::*;

use super::SectionIndex;
use crate::settings::WebsiteSettings;
use crate::ui::components::{ContentShell, Layout};

const STEPS: &[&str] = &[
    "Collect the admission form from the school office or download it.",
    "Submit the form with the required documents.",
    "Sit the admission test on the published date.",
    "Complete enrolment after the results are announced.",
];

const FEES: &[(&str, &str)] = &[
    ("Admission fee", "One-time"),
    ("Tuition fee", "Monthly"),
    ("Examination fee", "Per term"),
];

#[component]
pub fn AdmissionPage(site: WebsiteSettings) -> Element {
    let phone = site.phone.clone();

    rsx! {
        Layout {
            title: "Admission".to_string(),
            current_path: "/admission".to_string(),
            site: site.clone(),

            ContentShell {
                h1 { "Admission" }
                SectionIndex { path: "/admission" }
                section { id: "process",
                    h2 { "Admission Process" }
                    ol {
                        for step in STEPS.iter() {
                            li { "{step}" }
                        }
                    }
                }
                section { id: "requirements",
                    h2 { "Requirements" }
                    ul {
                        li { "Birth registration certificate" }
                        li { "Previous school transcript and transfer certificate" }
                        li { "Two passport-size photographs" }
                    }
                }
                section { id: "fees",
                    h2 { "Fees" }
                    table {
                        tbody {
                            for (fee, period) in FEES.iter() {
                                tr {
                                    th { scope: "row", "{fee}" }
                                    td { "{period}" }
                                }
                            }
                        }
                    }
                    if !phone.is_empty() {
                        p { small { "Current amounts are available from the office: {phone}" } }
                    }
                }
            }
        }
    }
}
