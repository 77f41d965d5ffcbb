use crate::tls::structs::slot::Slot;
use arc_swap::ArcSwapOption;
use log::debug;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{
    AtomicU64,
    Ordering
};

impl<T> Slot<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            current: ArcSwapOption::new(None),
            writer: Mutex::new(0),
            version: AtomicU64::new(0),
        }
    }

    pub fn with_value(name: &'static str, value: T) -> Self {
        let slot = Self::new(name);
        slot.publish(value);
        slot
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Snapshot of the current value. Holding the returned `Arc` keeps that
    /// value alive even after newer ones are published.
    pub fn read(&self) -> Option<Arc<T>> {
        self.current.load_full()
    }

    /// Replaces the value and returns its version. Versions start at 1 and
    /// increase by one per publish.
    pub fn publish(&self, value: T) -> u64 {
        self.publish_arc(Arc::new(value))
    }

    pub fn publish_arc(&self, value: Arc<T>) -> u64 {
        let mut version = self.writer.lock();
        *version += 1;
        self.current.store(Some(value));
        self.version.store(*version, Ordering::Release);
        debug!("[SLOT] {} published version {}", self.name, *version);
        *version
    }

    /// Version of the most recent publish, 0 when nothing was published yet.
    /// Informational only; pair it with `read` under no assumptions.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    pub fn is_empty(&self) -> bool {
        self.current.load().is_none()
    }
}

impl<T> std::fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot")
            .field("name", &self.name)
            .field("version", &self.version())
            .field("published", &!self.is_empty())
            .finish()
    }
}
