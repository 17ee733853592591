//! Observability boundary for the binding engine.
//!
//! Binding logic emits [`BindEvent`]s through [`sink`]; the default sink
//! aggregates process-wide counters readable via [`metrics::snapshot`].
//! Embedders bridge the sink to their own logger or metrics pipeline.

pub mod metrics;
pub mod sink;

pub use metrics::BindMetrics;
pub use sink::{BindEvent, BindSink, with_bind_sink};

pub(crate) use sink::record;
