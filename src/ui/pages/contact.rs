use dioxus::prelude::*;

use crate::settings::WebsiteSettings;
use crate::ui::components::{ContentShell, Layout};

#[component]
pub fn ContactPage(site: WebsiteSettings) -> Element {
    let address = site.address.clone();
    let phone = site.phone.clone();
    let email = site.email.clone();
    let has_details = !(address.is_empty() && phone.is_empty() && email.is_empty());

    rsx! {
        Layout {
            title: "Contact".to_string(),
            current_path: "/contact".to_string(),
            site: site.clone(),

            ContentShell {
                skeleton_lines: 3,
                h1 { "Contact" }
                article {
                    if !has_details {
                        p { "Contact details will be published soon." }
                    }
                    if !address.is_empty() {
                        p { strong { "Address: " } "{address}" }
                    }
                    if !phone.is_empty() {
                        p { strong { "Phone: " } a { href: "tel:{phone}", "{phone}" } }
                    }
                    if !email.is_empty() {
                        p { strong { "Email: " } a { href: "mailto:{email}", "{email}" } }
                    }
                    p { small { "Office hours: Saturday to Thursday, 8:00 to 16:00." } }
                }
            }
        }
    }
}
