//! Bind-event sink boundary.
//!
//! Binding logic MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through BindEvent and BindSink.
//!
//! This module is the only allowed bridge between binding logic and the
//! global counter state.

use crate::{kind::FieldKind, obs::metrics};
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn BindSink>> = RefCell::new(None);
}

///
/// BindEvent
///

#[derive(Clone, Copy, Debug)]
pub enum BindEvent {
    EntityCreated {
        entity_path: &'static str,
    },
    FieldRead {
        entity_path: &'static str,
        field: &'static str,
    },
    FieldWritten {
        entity_path: &'static str,
        field: &'static str,
    },
    ValueCoerced {
        kind: FieldKind,
    },
    CoercionFallback {
        kind: FieldKind,
    },
    BindFailed {
        entity_path: &'static str,
    },
}

///
/// BindSink
///

pub trait BindSink {
    fn record(&self, event: BindEvent);
}

/// GlobalCounterSink
/// Default process-wide sink that writes into the global counter state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalCounterSink;

impl BindSink for GlobalCounterSink {
    fn record(&self, event: BindEvent) {
        metrics::count(&event);
    }
}

pub(crate) const GLOBAL_COUNTER_SINK: GlobalCounterSink = GlobalCounterSink;

pub(crate) fn record(event: BindEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // - `ptr` was produced from a valid `&dyn BindSink` in
        //   `with_bind_sink`, which always restores the previous pointer
        //   before returning, including unwind paths via `Guard::drop`.
        // - `record` is synchronous and never stores `ptr` beyond this call.
        // - Only a shared reference is materialized, matching the shared
        //   borrow used to install the override.
        unsafe { (&*ptr).record(event) };
    } else {
        GLOBAL_COUNTER_SINK.record(event);
    }
}

/// Run a closure with a temporary sink override on this thread.
///
/// The previous override is restored on every exit, panic included.
pub fn with_bind_sink<T>(sink: &dyn BindSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn BindSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // - `sink_ptr` is installed only for this dynamic scope; `Guard`
    //   restores the previous slot on all exits, including panic.
    // - `record` only dereferences synchronously and never persists the
    //   pointer, so it cannot outlive the borrowed sink.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn BindSink, *const dyn BindSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| {
        let mut slot = cell.borrow_mut();
        slot.replace(sink_ptr)
    });
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///
