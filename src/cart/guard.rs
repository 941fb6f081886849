use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Marks a submission as in flight until dropped.
///
/// Dropping releases the flag whatever the outcome of the request, so the
/// triggering control is always re-enabled.
#[derive(Debug)]
pub(crate) struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl InFlightGuard {
    /// `None` when another submission already holds the flag.
    pub(crate) fn try_acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self {
                flag: Arc::clone(flag),
            })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_fails_until_drop() {
        let flag = Arc::new(AtomicBool::new(false));
        let guard = InFlightGuard::try_acquire(&flag).unwrap();
        assert!(InFlightGuard::try_acquire(&flag).is_none());
        drop(guard);
        assert!(!flag.load(Ordering::Acquire));
        assert!(InFlightGuard::try_acquire(&flag).is_some());
    }
}
