//! Site header: brand, desktop dropdown menu and mobile menu, both built
//! from [`SITE_NAVIGATION`].

use dioxus::prelude::*;

use crate::nav::{NavigationItem, SITE_NAVIGATION};
use crate::settings::WebsiteSettings;

/// Dropdown hover handling. Leaving a dropdown arms a close timer; entering
/// it again cancels the pending close. Timers are cleared on pagehide.
pub const HEADER_SCRIPT: &str = r#"
(function () {
    const CLOSE_DELAY_MS = 150;
    const timers = new Map();
    function cancelClose(el) {
        const t = timers.get(el);
        if (t !== undefined) { clearTimeout(t); timers.delete(el); }
    }
    function armClose(el) {
        cancelClose(el);
        timers.set(el, setTimeout(() => {
            el.classList.remove('open');
            timers.delete(el);
        }, CLOSE_DELAY_MS));
    }
    document.querySelectorAll('.nav-dropdown').forEach(el => {
        el.addEventListener('mouseenter', () => { cancelClose(el); el.classList.add('open'); });
        el.addEventListener('mouseleave', () => armClose(el));
        el.addEventListener('focusin', () => { cancelClose(el); el.classList.add('open'); });
        el.addEventListener('focusout', () => armClose(el));
    });
    window.addEventListener('pagehide', () => {
        timers.forEach(t => clearTimeout(t));
        timers.clear();
    });
})();
"#;

#[derive(Props, Clone, PartialEq)]
pub struct SiteHeaderProps {
    pub site: WebsiteSettings,
    pub current_path: String,
}

#[component]
pub fn SiteHeader(props: SiteHeaderProps) -> Element {
    let school = props.site.school_name.clone();
    let tagline = props.site.tagline.clone();
    let logo = props.site.logo.clone().filter(|l| !l.trim().is_empty());
    let path = props.current_path.as_str();

    rsx! {
        header { class: "container site-header",
            nav {
                ul {
                    li {
                        a { class: "brand", href: "/",
                            if let Some(src) = logo {
                                img { src: "{src}", alt: "{school} logo" }
                            }
                            span {
                                strong { "{school}" }
                                if !tagline.is_empty() {
                                    br {}
                                    small { "{tagline}" }
                                }
                            }
                        }
                    }
                }
                ul { class: "desktop-menu",
                    for item in SITE_NAVIGATION.iter() {
                        {desktop_item(item, path)}
                    }
                }
            }
            details { class: "mobile-menu",
                summary { "Menu" }
                ul {
                    for item in SITE_NAVIGATION.iter() {
                        {mobile_item(item, path)}
                    }
                }
            }
        }
    }
}

fn desktop_item(item: &NavigationItem, current_path: &str) -> Element {
    let active = item.contains_path(current_path);
    let href = item.path;
    let label = item.label;
    let id = item.id;

    if !item.has_children() {
        return rsx! {
            li { key: "{id}", {nav_link(href, label, active)} }
        };
    }

    rsx! {
        li { key: "{id}", class: "nav-dropdown",
            {nav_link(href, label, active)}
            ul { class: "submenu",
                for child in item.sub_items.iter() {
                    li { a { href: child.path, "{child.label}" } }
                }
            }
        }
    }
}

fn mobile_item(item: &NavigationItem, current_path: &str) -> Element {
    let active = item.contains_path(current_path);
    let href = item.path;
    let label = item.label;

    if !item.has_children() {
        return rsx! {
            li { {nav_link(href, label, active)} }
        };
    }

    rsx! {
        li {
            details {
                open: active,
                summary { "{label}" }
                ul {
                    li { {nav_link(href, label, active)} }
                    for child in item.sub_items.iter() {
                        li { a { href: child.path, "{child.label}" } }
                    }
                }
            }
        }
    }
}

fn nav_link(href: &'static str, label: &'static str, active: bool) -> Element {
    if active {
        rsx! {
            a { href: href, "aria-current": "page", strong { "{label}" } }
        }
    } else {
        rsx! {
            a { href: href, "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(path: &str) -> String {
        let site = WebsiteSettings {
            school_name: "Greenfield School".into(),
            ..Default::default()
        };
        dioxus::ssr::render_element(rsx! {
            SiteHeader { site: site, current_path: path.to_string() }
        })
    }

    #[test]
    fn renders_every_top_level_item() {
        let html = render("/");
        for item in SITE_NAVIGATION {
            assert!(html.contains(item.label), "missing {}", item.label);
        }
        assert!(html.contains("Greenfield School"));
    }

    #[test]
    fn parent_of_current_path_is_active() {
        let html = render("/academic");
        assert!(html.contains(r#"href="/academic" aria-current="page""#));
        assert!(!html.contains(r#"href="/about" aria-current="page""#));
    }
}
