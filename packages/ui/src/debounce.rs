//! Trailing-edge debounce for navigation requests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Collapses bursts of calls into one, delivered `delay` after the last call.
///
/// Clones share the same timer. Each [`call`](Debouncer::call) supersedes any
/// call still waiting; only the last one in a burst resolves to `Some`.
pub struct Debouncer<T> {
    delay: Duration,
    generation: Rc<Cell<u64>>,
    pending: Rc<RefCell<Option<T>>>,
}

impl<T> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            delay: self.delay,
            generation: self.generation.clone(),
            pending: self.pending.clone(),
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Rc::new(Cell::new(0)),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Queue `value` and wait out the quiet period.
    ///
    /// Returns `None` if another call or [`cancel`](Debouncer::cancel) happened
    /// in the meantime.
    pub async fn call(&self, value: T) -> Option<T> {
        let ticket = self.bump();
        *self.pending.borrow_mut() = Some(value);

        sleep(self.delay).await;

        if self.generation.get() != ticket {
            return None;
        }
        self.pending.borrow_mut().take()
    }

    /// Drop whatever is waiting.
    pub fn cancel(&self) {
        self.bump();
        self.pending.borrow_mut().take();
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }

    fn bump(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}
