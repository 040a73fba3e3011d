use dioxus::prelude::*;

use super::SectionIndex;
use crate::settings::WebsiteSettings;
use crate::ui::components::{ContentShell, Layout};

#[component]
pub fn AboutPage(site: WebsiteSettings) -> Element {
    let school = site.school_name.clone();
    let about = site.about_text.clone();
    let founded = site
        .established_year
        .map(|y| format!("Founded in {}, ", y))
        .unwrap_or_default();

    rsx! {
        Layout {
            title: "About".to_string(),
            current_path: "/about".to_string(),
            site: site.clone(),

            ContentShell {
                h1 { "About {school}" }
                SectionIndex { path: "/about" }
                section { id: "history",
                    h2 { "Our History" }
                    if about.trim().is_empty() {
                        p { "{founded}{school} has grown from a small neighbourhood school into a full secondary and higher secondary institution." }
                    } else {
                        p { "{about}" }
                    }
                }
                section { id: "mission",
                    h2 { "Mission & Vision" }
                    p { "We aim to give every student a sound academic foundation, strong character and the confidence to serve their community." }
                }
                section { id: "facilities",
                    h2 { "Facilities" }
                    ul {
                        li { "Science and computer laboratories" }
                        li { "Library with reading room" }
                        li { "Playground and indoor games room" }
                        li { "Prayer room and medical corner" }
                    }
                }
            }
        }
    }
}
