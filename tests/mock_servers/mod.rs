//! Mock servers for integration testing
//!
//! The mock school backend serves the REST API the portal consumes, so the
//! HTTP client and the page handlers can be exercised end to end.

pub mod school;

pub use school::MockSchoolBackend;
