//! Skeleton-then-content wrapper for the informational pages.
//!
//! The content is rendered hidden behind skeleton lines and revealed by a
//! short inline script. Without JavaScript the `noscript` style shows it
//! straight away.

use dioxus::prelude::*;

/// Delay before the skeleton is swapped for the content.
pub const CONTENT_REVEAL_MS: u64 = 300;

const NOSCRIPT_STYLE: &str =
    "[data-skeleton] { display: none; } [data-content].is-hidden { display: block !important; }";

fn reveal_script() -> String {
    format!(
        r#"
(function () {{
    const timer = setTimeout(() => {{
        document.querySelectorAll('[data-skeleton]').forEach(el => el.classList.add('is-hidden'));
        document.querySelectorAll('[data-content]').forEach(el => el.classList.remove('is-hidden'));
    }}, {CONTENT_REVEAL_MS});
    window.addEventListener('pagehide', () => clearTimeout(timer));
}})();
"#
    )
}

#[derive(Props, Clone, PartialEq)]
pub struct ContentShellProps {
    #[props(default = 4)]
    pub skeleton_lines: usize,
    pub children: Element,
}

#[component]
pub fn ContentShell(props: ContentShellProps) -> Element {
    let script = reveal_script();
    let widths: Vec<u32> = (0..props.skeleton_lines)
        .map(|i| 100 - (i as u32 % 4) * 15)
        .collect();

    rsx! {
        noscript {
            style { {NOSCRIPT_STYLE} }
        }
        div { "data-skeleton": "true", "aria-busy": "true",
            for width in widths {
                div { class: "skeleton-line", style: "width: {width}%;" }
            }
        }
        div { class: "is-hidden", "data-content": "true",
            {props.children}
        }
        script { dangerous_inner_html: "{script}" }
    }
}
