use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub mod services;

/// Counts calls of the method it's attached to.
#[derive(Debug, Clone, Default)]
pub struct Spy {
    calls: Arc<AtomicUsize>,
}

impl Spy {
    pub fn signal(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn method_called(&self) -> bool {
        self.calls() > 0
    }
}
