//! Cancellable one-shot timer.
//!
//! At most one callback is pending per timer. Re-arming cancels the previous
//! arm, and dropping the timer cancels whatever is pending.

use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Default)]
pub struct DismissTimer {
    pending: Option<CancellationToken>,
}

impl DismissTimer {
    pub fn idle() -> Self {
        Self::default()
    }

    /// Run `on_fire` after `delay` unless cancelled first.
    pub fn arm<F, Fut>(&mut self, delay: Duration, on_fire: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let token = CancellationToken::new();
        let child = token.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = child.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    if !child.is_cancelled() {
                        on_fire().await;
                    }
                }
            }
        });
        self.pending = Some(token);
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }

    /// True while an arm is outstanding. Stays true after firing until the
    /// timer is cancelled or re-armed.
    pub fn is_armed(&self) -> bool {
        self.pending.as_ref().is_some_and(|t| !t.is_cancelled())
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }

    fn bump(c: &Arc<AtomicUsize>) -> impl FnOnce() -> std::future::Ready<()> + Send + 'static {
        let c = c.clone();
        move || {
            c.fetch_add(1, Ordering::SeqCst);
            std::future::ready(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_delay() {
        let hits = counter();
        let mut timer = DismissTimer::idle();
        timer.arm(Duration::from_millis(150), bump(&hits));
        assert!(timer.is_armed());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn rearm_cancels_previous() {
        let first = counter();
        let second = counter();
        let mut timer = DismissTimer::idle();
        timer.arm(Duration::from_millis(150), bump(&first));
        tokio::time::sleep(Duration::from_millis(100)).await;
        timer.arm(Duration::from_millis(150), bump(&second));

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_and_drop_prevent_firing() {
        let hits = counter();
        let mut timer = DismissTimer::idle();
        timer.arm(Duration::from_millis(50), bump(&hits));
        timer.cancel();
        assert!(!timer.is_armed());

        {
            let mut scoped = DismissTimer::idle();
            scoped.arm(Duration::from_millis(50), bump(&hits));
        }

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
