use thiserror::Error;

/// How many pixels a render loop may process between two cancellation polls.
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("render cancelled")]
pub struct Cancelled;

/// Polled by long-running renders; `true` means abandon the work.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;

    fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Token for the synchronous API, where a render always runs to completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

    #[test]
    fn never_cancel_always_passes() {
        assert!(!NeverCancel.is_cancelled());
        assert_eq!(NeverCancel.check(), Ok(()));
    }

    #[test]
    fn closure_token_reflects_atomic_flag() {
        let flag = AtomicBool::new(false);
        let token = || flag.load(Ordering::Relaxed);
        assert_eq!(token.check(), Ok(()));

        flag.store(true, Ordering::Relaxed);
        assert_eq!(token.check(), Err(Cancelled));
    }

    #[test]
    fn closure_token_compares_generations() {
        let current = AtomicU64::new(1);
        let job = 1;
        let token = || current.load(Ordering::Relaxed) != job;

        assert!(!token.is_cancelled());

        current.store(2, Ordering::Relaxed);
        assert!(token.is_cancelled());
    }

    #[test]
    fn cancelled_display() {
        assert_eq!(Cancelled.to_string(), "render cancelled");
    }
}
