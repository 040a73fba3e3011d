//! Session provided by the upstream auth proxy.
//!
//! The portal never authenticates anyone: it trusts the role and user id
//! headers set in front of it and passes them down to handlers explicitly.

use axum::extract::FromRequestParts;
use axum::http::{request::Parts, HeaderMap};
use std::convert::Infallible;

use crate::menu::Role;

pub const ROLE_HEADER: &str = "x-portal-role";
pub const USER_HEADER: &str = "x-portal-user";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// `None` when the header is missing or names no known role.
    pub role: Option<Role>,
    pub user_id: Option<String>,
}

impl Session {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };
        let raw_role = header(ROLE_HEADER);
        let role = raw_role.and_then(Role::parse);
        if let (Some(raw), None) = (raw_role, role) {
            tracing::warn!("Unknown session role {:?}, treating as absent", raw);
        }
        Self {
            role,
            user_id: header(USER_HEADER).map(str::to_string),
        }
    }

    /// Key for per-user state such as flash notices.
    pub fn flash_key(&self) -> String {
        match (&self.user_id, self.role) {
            (Some(id), _) => id.clone(),
            (None, Some(role)) => format!("role:{}", role.as_str()),
            (None, None) => "anonymous".to_string(),
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Session::from_headers(&parts.headers))
    }
}
