//! Toast banner for a [`Notice`].

use dioxus::prelude::*;

use crate::notify::{Notice, NoticeLevel};

/// Notices dismiss themselves after this long; the close button hides them
/// sooner.
const NOTICE_SCRIPT: &str = r#"
(function () {
    const AUTO_DISMISS_MS = 6000;
    const pending = [];
    document.querySelectorAll('[data-toast]').forEach(el => {
        const hide = () => el.classList.add('is-hidden');
        const btn = el.querySelector('button');
        if (btn) btn.addEventListener('click', hide);
        pending.push(setTimeout(hide, AUTO_DISMISS_MS));
    });
    window.addEventListener('pagehide', () => pending.forEach(t => clearTimeout(t)));
})();
"#;

#[component]
pub fn NoticeBanner(notice: Notice) -> Element {
    let class = notice.level.css_class();
    let role = match notice.level {
        NoticeLevel::Error => "alert",
        NoticeLevel::Success | NoticeLevel::Info => "status",
    };
    let message = notice.message.clone();

    rsx! {
        div { class: "{class}", role: "{role}", "data-toast": "true",
            span { "{message}" }
            button {
                class: "outline secondary",
                r#type: "button",
                "aria-label": "Dismiss",
                style: "float:right;padding:0 0.5rem;margin:0;",
                "×"
            }
        }
        script { dangerous_inner_html: NOTICE_SCRIPT }
    }
}
