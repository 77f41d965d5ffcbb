use arc_swap::ArcSwapOption;
use parking_lot::Mutex;
use std::sync::atomic::AtomicU64;

/// Readers load the current `Arc` without locking; publishers are admitted
/// one at a time through `writer`, which also owns the version counter.
pub struct Slot<T> {
    pub(crate) name: &'static str,
    pub(crate) current: ArcSwapOption<T>,
    pub(crate) writer: Mutex<u64>,
    pub(crate) version: AtomicU64,
}
