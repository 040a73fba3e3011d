use dioxus::prelude::*;

use super::SectionIndex;
use crate::settings::WebsiteSettings;
use crate::ui::components::{ContentShell, Layout};

#[component]
pub fn AdministrationPage(site: WebsiteSettings) -> Element {
    let principal = site.principal_name.clone();
    let principal_photo = site.principal_image.clone();
    let chairman_photo = site.chairman_image.clone();

    rsx! {
        Layout {
            title: "Administration".to_string(),
            current_path: "/administration".to_string(),
            site: site.clone(),

            ContentShell {
                h1 { "Administration" }
                SectionIndex { path: "/administration" }
                section { id: "governing-body",
                    h2 { "Governing Body" }
                    div { class: "grid",
                        article {
                            if let Some(src) = chairman_photo {
                                img { class: "image-preview", src: "{src}", alt: "Chairman" }
                            }
                            strong { "Chairman" }
                        }
                        article {
                            if let Some(src) = principal_photo {
                                img { class: "image-preview", src: "{src}", alt: "Principal" }
                            }
                            strong { "Principal" }
                            if !principal.is_empty() {
                                p { "{principal}" }
                            }
                        }
                    }
                }
                section { id: "faculty",
                    h2 { "Faculty" }
                    p { "Our teachers are organised in departments for Science, Mathematics, Languages, Business Studies and Humanities." }
                }
                section { id: "staff",
                    h2 { "Staff" }
                    p { "Office, library and accounts staff support students and parents from 8:00 to 16:00 on working days." }
                }
            }
        }
    }
}
