//! School Portal
//!
//! Server-rendered public website and staff/student dashboard for a school
//! management system.
//!
//! This library provides:
//! - Static site navigation and role-filtered dashboard menus
//! - Weekly class routine rendering (student and teacher views)
//! - A website settings editor with image uploads
//! - A typed client for the school REST backend
//! - axum handlers rendering Dioxus components to HTML (Pico CSS)

pub mod api;
pub mod backend;
pub mod config;
pub mod flash;
pub mod loader;
pub mod menu;
pub mod nav;
pub mod notify;
pub mod routine;
pub mod session;
pub mod settings;
pub mod timer;
pub mod ui;
