//! Process-wide bind counters.
//!
//! Counters are plain atomics: binding runs on ordinary threads and every
//! event is a single relaxed increment.

use crate::obs::sink::BindEvent;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

static ENTITIES_CREATED: AtomicU64 = AtomicU64::new(0);
static FIELDS_READ: AtomicU64 = AtomicU64::new(0);
static FIELDS_WRITTEN: AtomicU64 = AtomicU64::new(0);
static VALUES_COERCED: AtomicU64 = AtomicU64::new(0);
static COERCION_FALLBACKS: AtomicU64 = AtomicU64::new(0);
static BIND_FAILURES: AtomicU64 = AtomicU64::new(0);

///
/// BindMetrics
/// Snapshot of the process-wide bind counters.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BindMetrics {
    pub entities_created: u64,
    pub fields_read: u64,
    pub fields_written: u64,
    pub values_coerced: u64,
    pub coercion_fallbacks: u64,
    pub bind_failures: u64,
}

pub(crate) fn count(event: &BindEvent) {
    let counter = match event {
        BindEvent::EntityCreated { .. } => &ENTITIES_CREATED,
        BindEvent::FieldRead { .. } => &FIELDS_READ,
        BindEvent::FieldWritten { .. } => &FIELDS_WRITTEN,
        BindEvent::ValueCoerced { .. } => &VALUES_COERCED,
        BindEvent::CoercionFallback { .. } => &COERCION_FALLBACKS,
        BindEvent::BindFailed { .. } => &BIND_FAILURES,
    };

    counter.fetch_add(1, Ordering::Relaxed);
}

/// Snapshot the current counters for endpoint/test plumbing.
#[must_use]
pub fn snapshot() -> BindMetrics {
    BindMetrics {
        entities_created: ENTITIES_CREATED.load(Ordering::Relaxed),
        fields_read: FIELDS_READ.load(Ordering::Relaxed),
        fields_written: FIELDS_WRITTEN.load(Ordering::Relaxed),
        values_coerced: VALUES_COERCED.load(Ordering::Relaxed),
        coercion_fallbacks: COERCION_FALLBACKS.load(Ordering::Relaxed),
        bind_failures: BIND_FAILURES.load(Ordering::Relaxed),
    }
}

/// Reset all counters.
pub fn reset_all() {
    for counter in [
        &ENTITIES_CREATED,
        &FIELDS_READ,
        &FIELDS_WRITTEN,
        &VALUES_COERCED,
        &COERCION_FALLBACKS,
        &BIND_FAILURES,
    ] {
        counter.store(0, Ordering::Relaxed);
    }
}
