use crate::error::Cancelled;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A shared flag through which the caller of a query can abandon it.
///
/// The engine checks the flag between templates and between subjects. A host callback that is
/// already running is never interrupted.
#[derive(Clone, Debug, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag. Every clone observes it.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Returns [`Cancelled`] if the flag has been raised.
    pub fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }

    /// Returns a guard that raises the flag when it is dropped, unless it is
    /// [disarmed](CancelOnDrop::disarm) first.
    pub fn cancel_on_drop(&self) -> CancelOnDrop {
        CancelOnDrop(Some(self.clone()))
    }
}

/// Raises a [`CancellationFlag`] on drop.
#[derive(Debug)]
pub struct CancelOnDrop(Option<CancellationFlag>);

impl CancelOnDrop {
    pub fn disarm(mut self) {
        self.0 = None;
    }
}

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        if let Some(flag) = self.0.take() {
            flag.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_cancels_on_drop() {
        let flag = CancellationFlag::new();
        drop(flag.cancel_on_drop());
        assert_eq!(flag.check(), Err(Cancelled));
    }

    #[test]
    fn test_disarmed_guard_does_not_cancel() {
        let flag = CancellationFlag::new();
        flag.cancel_on_drop().disarm();
        assert!(!flag.is_cancelled());
    }
}
