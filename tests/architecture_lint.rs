//! Architecture enforcement lint - pages and loaders must go through `SchoolApi`.
//!
//! `SchoolApi` is the only seam between the portal and the school backend.
//! UI handlers, components and the view loaders take a `&dyn SchoolApi` so
//! they can be driven by in-memory fakes; only `backend/` knows about HTTP.
//!
//! This test walks `src/ui/` and `src/loader/` and flags any direct use of
//! the HTTP client:
//! - `reqwest::` anywhere in those trees
//! - `HttpBackend` (construct it in main.rs, pass it down as `SharedApi`)
//!
//! A separate check keeps the router free of backend construction, so a
//! test can hand `api::router` any implementation it likes.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Patterns that bypass the `SchoolApi` seam
const DISALLOWED_PATTERNS: &[(&str, &str)] = &[
    (
        "reqwest::",
        "Call the backend through state.api (SchoolApi) instead",
    ),
    (
        "HttpBackend",
        "Take a &dyn SchoolApi / SharedApi instead of the concrete client",
    ),
    (
        "Client::new(",
        "Backend HTTP clients belong in src/backend/",
    ),
];

/// Directories whose files are checked
const CHECKED_DIRS: &[&str] = &["ui", "loader"];

fn is_checked(path: &Path, src_dir: &Path) -> bool {
    let Ok(relative) = path.strip_prefix(src_dir) else {
        return false;
    };
    relative
        .components()
        .next()
        .and_then(|c| c.as_os_str().to_str())
        .is_some_and(|first| CHECKED_DIRS.contains(&first))
}

fn analyze_file(path: &Path) -> Vec<(String, String, String)> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return vec![],
    };
    let path_str = path.display().to_string();

    let mut violations = Vec::new();
    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim_start();
        // Doc and line comments may mention the client by name
        if trimmed.starts_with("//") {
            continue;
        }
        for (pattern, suggestion) in DISALLOWED_PATTERNS {
            if line.contains(pattern) {
                violations.push((
                    format!("{}:{}", path_str, line_num + 1),
                    (*pattern).to_string(),
                    (*suggestion).to_string(),
                ));
            }
        }
    }

    violations
}

#[test]
fn pages_and_loaders_use_school_api() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

    let mut all_violations = Vec::new();
    let mut checked = 0;

    for entry in WalkDir::new(&src_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .filter(|e| is_checked(e.path(), &src_dir))
    {
        checked += 1;
        all_violations.extend(analyze_file(entry.path()));
    }

    assert!(checked > 0, "no files found under src/ui or src/loader");

    if !all_violations.is_empty() {
        let mut error_msg = String::from(
            "\n\n\
            ╔══════════════════════════════════════════════════════════════════════════════╗\n\
            ║  ARCHITECTURE VIOLATION: pages and loaders must use SchoolApi                ║\n\
            ╚══════════════════════════════════════════════════════════════════════════════╝\n\n\
            Only src/backend/ may talk HTTP to the school backend.\n\
            Everything else receives a SharedApi so it can be tested with fakes.\n\n\
            Violations found:\n\n",
        );

        for (location, pattern, suggestion) in &all_violations {
            error_msg.push_str(&format!("  {} \n", location));
            error_msg.push_str(&format!("    Found: {}\n", pattern));
            error_msg.push_str(&format!("    Fix: {}\n\n", suggestion));
        }

        panic!("{}", error_msg);
    }
}

#[test]
fn app_state_holds_the_trait_object() {
    let api_mod = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("api")
        .join("mod.rs");

    let content = fs::read_to_string(&api_mod).expect("Failed to read api/mod.rs");

    assert!(
        content.contains("pub api: SharedApi"),
        "AppState must have a `pub api: SharedApi` field"
    );
    assert!(
        !content.contains("HttpBackend"),
        "api/mod.rs must not construct the HTTP backend; main.rs does"
    );
}
