//! Shared Dioxus components rendered on the server.

pub mod content_shell;
pub mod dashboard_shell;
pub mod form_inputs;
pub mod header;
pub mod layout;
pub mod notice;
pub mod routine_table;

pub use content_shell::{ContentShell, CONTENT_REVEAL_MS};
pub use dashboard_shell::DashboardShell;
pub use form_inputs::{ImageInput, TextAreaInput, TextInput};
pub use header::SiteHeader;
pub use layout::Layout;
pub use notice::NoticeBanner;
pub use routine_table::RoutineTable;
