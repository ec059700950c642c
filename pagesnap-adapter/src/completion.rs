use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll, Waker};

/// How a navigation request settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapOutcome {
    /// The animation ran to completion and the viewport sits exactly on the destination.
    Snapped { index: usize },
    /// No section exists at the requested index; nothing happened.
    OutOfRange,
    /// A newer navigation replaced this one before it finished.
    Superseded,
}

#[derive(Default)]
struct Shared {
    outcome: Option<SnapOutcome>,
    waker: Option<Waker>,
}

/// Single-shot completion of a snap navigation.
///
/// Resolved exactly once by the controller's frame loop. It can be awaited (it is a `Future`) or
/// polled synchronously with [`Self::outcome`]. Dropping it does not cancel the animation.
///
/// Single-threaded: this type is `!Send`.
#[derive(Clone)]
pub struct SnapCompletion {
    shared: Rc<RefCell<Shared>>,
}

impl SnapCompletion {
    pub(crate) fn pending() -> (Self, CompletionResolver) {
        let shared = Rc::new(RefCell::new(Shared::default()));
        (
            Self {
                shared: Rc::clone(&shared),
            },
            CompletionResolver { shared },
        )
    }

    pub(crate) fn settled(outcome: SnapOutcome) -> Self {
        let (completion, resolver) = Self::pending();
        resolver.resolve(outcome);
        completion
    }

    pub fn outcome(&self) -> Option<SnapOutcome> {
        self.shared.borrow().outcome
    }

    pub fn is_settled(&self) -> bool {
        self.outcome().is_some()
    }
}

impl fmt::Debug for SnapCompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapCompletion")
            .field("outcome", &self.outcome())
            .finish()
    }
}

impl Future for SnapCompletion {
    type Output = SnapOutcome;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<SnapOutcome> {
        let mut shared = self.shared.borrow_mut();
        match shared.outcome {
            Some(outcome) => Poll::Ready(outcome),
            None => {
                shared.waker = Some(cx.waker().clone());
                Poll::Pending
            }
        }
    }
}

/// The engine's half of a [`SnapCompletion`]. Consumed on resolve.
pub(crate) struct CompletionResolver {
    shared: Rc<RefCell<Shared>>,
}

impl CompletionResolver {
    pub(crate) fn resolve(self, outcome: SnapOutcome) {
        let waker = {
            let mut shared = self.shared.borrow_mut();
            debug_assert!(shared.outcome.is_none(), "completion resolved twice");
            shared.outcome = Some(outcome);
            shared.waker.take()
        };
        if let Some(waker) = waker {
            waker.wake();
        }
    }
}

impl fmt::Debug for CompletionResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionResolver").finish_non_exhaustive()
    }
}
