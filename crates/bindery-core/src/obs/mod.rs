//! Observability: binding diagnostics and the sink abstraction.
//!
//! Field evaluation never logs on its own. Entry points that want
//! diagnostics go through [`crate::bind::Binder`], which forwards
//! [`FieldEvent`]s to an injected [`DiagnosticsSink`].

pub mod metrics;
pub mod sink;

// re-exports
pub use metrics::{FieldMetrics, MetricsReport};
pub use sink::{DiagnosticsSink, FieldEvent, NoopSink};
