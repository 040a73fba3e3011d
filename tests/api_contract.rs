#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Route contract for the portal router.
//!
//! tests/fixtures/api_routes.txt is the approved route list. Beyond matching
//! it, every route has to be reachable from somewhere a user can click:
//! public pages from the site navigation, dashboard pages from the sidebar
//! menu, and form posts from the dashboard page that owns them.
//!
//! Run with: cargo test --test api_contract

use regex::Regex;
use school_portal::menu::DASHBOARD_MENU;
use school_portal::nav::SITE_NAVIGATION;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

const GOLDEN: &str = "tests/fixtures/api_routes.txt";

/// Routes that are not pages: nothing links to them.
const UNLINKED: &[&str] = &["GET /health"];

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Route {
    method: String,
    path: String,
}

impl Route {
    fn parse(line: &str) -> Self {
        let (method, path) = line
            .split_once(' ')
            .unwrap_or_else(|| panic!("malformed route line: {:?}", line));
        Route {
            method: method.to_string(),
            path: path.to_string(),
        }
    }

    fn key(&self) -> String {
        format!("{} {}", self.method, self.path)
    }

    fn is_dashboard(&self) -> bool {
        self.path == "/dashboard" || self.path.starts_with("/dashboard/")
    }
}

fn golden_lines() -> Vec<String> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    fs::read_to_string(root.join(GOLDEN))
        .expect("read golden route list")
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn golden_routes() -> BTreeSet<Route> {
    golden_lines().iter().map(|l| Route::parse(l)).collect()
}

/// Every `.route("/path", method(handler))` registered in `api::router`.
fn registered_routes() -> BTreeSet<Route> {
    let source = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("api")
        .join("mod.rs");
    let content = fs::read_to_string(&source).expect("read src/api/mod.rs");
    let route_re = Regex::new(r#"\.route\(\s*"([^"]+)"\s*,\s*(get|post|put|delete)\("#).unwrap();

    content
        .lines()
        .filter(|l| !l.trim_start().starts_with("//"))
        .flat_map(|l| route_re.captures_iter(l).collect::<Vec<_>>())
        .map(|c| Route {
            method: c[2].to_uppercase(),
            path: c[1].to_string(),
        })
        .collect()
}

#[test]
fn router_matches_approved_routes() {
    let golden = golden_routes();
    let actual = registered_routes();
    assert!(!actual.is_empty(), "no routes found in src/api/mod.rs");

    let added: Vec<String> = actual.difference(&golden).map(Route::key).collect();
    let removed: Vec<String> = golden.difference(&actual).map(Route::key).collect();

    assert!(
        added.is_empty() && removed.is_empty(),
        "\nrouter and {} disagree\n  not approved: {:?}\n  missing: {:?}\n\
         Update the route list only for intentional changes.\n",
        GOLDEN,
        added,
        removed
    );
}

#[test]
fn approved_routes_are_sorted_and_unique() {
    let lines = golden_lines();
    let mut sorted = lines.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(lines, sorted, "{} must be sorted without duplicates", GOLDEN);
}

#[test]
fn dashboard_pages_are_menu_entries() {
    let menu: BTreeSet<&str> = DASHBOARD_MENU
        .iter()
        .filter(|e| !e.roles.is_empty())
        .map(|e| e.path)
        .collect();
    let pages: BTreeSet<String> = golden_routes()
        .into_iter()
        .filter(|r| r.method == "GET" && r.is_dashboard())
        .map(|r| r.path)
        .collect();

    // A dashboard page without a menu entry could never pass the role guard.
    let unlisted: Vec<&String> = pages.iter().filter(|p| !menu.contains(p.as_str())).collect();
    assert!(unlisted.is_empty(), "dashboard pages without a menu entry: {:?}", unlisted);

    // A menu link without a page would 404.
    let missing: Vec<&&str> = menu.iter().filter(|m| !pages.contains(**m)).collect();
    assert!(missing.is_empty(), "menu entries without a page: {:?}", missing);
}

#[test]
fn form_posts_belong_to_a_guarded_page() {
    for route in golden_routes().iter().filter(|r| r.method != "GET") {
        assert!(route.is_dashboard(), "{} is not a dashboard form", route.key());
        let owner = DASHBOARD_MENU
            .iter()
            .filter(|e| e.path != "/dashboard" && !e.roles.is_empty())
            .find(|e| route.path == e.path || route.path.starts_with(&format!("{}/", e.path)));
        assert!(
            owner.is_some(),
            "{} is not under any role-guarded menu page",
            route.key()
        );
    }
}

#[test]
fn public_pages_match_site_navigation() {
    let nav: BTreeSet<&str> = SITE_NAVIGATION.iter().map(|i| i.path).collect();
    let public: BTreeSet<String> = golden_routes()
        .into_iter()
        .filter(|r| r.method == "GET" && !r.is_dashboard())
        .filter(|r| !UNLINKED.contains(&r.key().as_str()))
        .map(|r| r.path)
        .collect();
    let public: BTreeSet<&str> = public.iter().map(String::as_str).collect();

    assert_eq!(
        public, nav,
        "every public page needs a top-level navigation item and vice versa"
    );
    for item in SITE_NAVIGATION {
        for child in item.sub_items {
            let page = child.path.split('#').next().unwrap_or_default();
            assert_eq!(page, item.path, "{} points outside its parent", child.id);
        }
    }
}
