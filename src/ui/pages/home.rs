//! Home page: hero, notice board and the principal's message.

use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::settings::WebsiteSettings;
use crate::ui::components::{ContentShell, Layout};

/// A notice board entry.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardNotice {
    pub date: NaiveDate,
    pub title: &'static str,
}

const BOARD: &[(&str, &str)] = &[
    ("2024-01-10", "Admission test results published"),
    ("2024-03-02", "Annual sports day: schedule and house lists"),
    ("2024-02-14", "Parent-teacher meeting for classes 6 to 10"),
    ("2024-03-20", "Half-yearly examination routine released"),
];

/// Notice board entries, newest first.
pub fn board_notices() -> Vec<BoardNotice> {
    let mut notices: Vec<BoardNotice> = BOARD
        .iter()
        .filter_map(|&(date, title)| {
            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .ok()
                .map(|date| BoardNotice { date, title })
        })
        .collect();
    notices.sort_by(|a, b| b.date.cmp(&a.date));
    notices
}

#[component]
pub fn HomePage(site: WebsiteSettings) -> Element {
    let school = site.school_name.clone();
    let tagline = site.tagline.clone();
    let banner = site.banner.clone().filter(|b| !b.trim().is_empty());
    let notices = board_notices();

    rsx! {
        Layout {
            title: "Home".to_string(),
            current_path: "/".to_string(),
            site: site.clone(),

            ContentShell {
                section { class: "hero",
                    if let Some(src) = banner {
                        img { src: "{src}", alt: "{school}", style: "width:100%;max-height:22rem;object-fit:cover;" }
                    }
                    hgroup {
                        h1 { "{school}" }
                        if !tagline.is_empty() {
                            p { "{tagline}" }
                        }
                    }
                }
                div { class: "grid",
                    article {
                        header { strong { "Notice Board" } }
                        ul {
                            for notice in notices.iter() {
                                {notice_item(notice)}
                            }
                        }
                    }
                    {principal_message(&site)}
                }
            }
        }
    }
}

fn notice_item(notice: &BoardNotice) -> Element {
    let date = notice.date.format("%d %b %Y").to_string();
    let title = notice.title;
    rsx! {
        li {
            small { "{date}" }
            br {}
            "{title}"
        }
    }
}

fn principal_message(site: &WebsiteSettings) -> Element {
    if site.principal_message.trim().is_empty() {
        return rsx! {};
    }
    let message = site.principal_message.clone();
    let name = site.principal_name.clone();
    let photo = site.principal_image.clone();
    rsx! {
        article {
            header { strong { "Message from the Principal" } }
            if let Some(src) = photo {
                img { class: "image-preview", src: "{src}", alt: "{name}" }
            }
            blockquote {
                "{message}"
                if !name.is_empty() {
                    footer { cite { "{name}" } }
                }
            }
        }
    }
}
