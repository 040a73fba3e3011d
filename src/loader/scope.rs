//! Per-view cancellation scope.
//!
//! Each page load gets its own scope, a child of the server's shutdown
//! token. Results that arrive after the scope is cancelled are discarded.

use std::future::Future;
use tokio_util::sync::CancellationToken;

#[derive(Debug)]
pub struct ViewScope {
    token: CancellationToken,
}

impl ViewScope {
    pub fn new(parent: &CancellationToken) -> Self {
        Self {
            token: parent.child_token(),
        }
    }

    /// Standalone scope with no parent.
    pub fn detached() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Drive `fut` to completion unless the scope is cancelled first.
    /// A result that lands after cancellation is dropped as well.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        let out = tokio::select! {
            biased;
            _ = self.token.cancelled() => return None,
            out = fut => out,
        };
        if self.token.is_cancelled() {
            return None;
        }
        Some(out)
    }

    pub fn close(&self) {
        self.token.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
