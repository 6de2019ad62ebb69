//! Diagnostics sink boundary.
//!
//! All binding instrumentation flows through `FieldEvent` and
//! `DiagnosticsSink`. Sinks are injected per call; there is no global state.

///
/// FieldEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldEvent<'a> {
    /// `copy` found no applicable getter for the source.
    CopySkipped {
        field: &'a str,
        source: &'static str,
    },

    /// A value (or a clear) reached `writers` setters.
    Written {
        field: &'a str,
        target: &'static str,
        writers: usize,
        cleared: bool,
    },

    /// No setter accepted the target.
    WriteRejected {
        field: &'a str,
        target: &'static str,
    },
}

impl FieldEvent<'_> {
    #[must_use]
    pub const fn field(&self) -> &str {
        match self {
            Self::CopySkipped { field, .. }
            | Self::Written { field, .. }
            | Self::WriteRejected { field, .. } => field,
        }
    }
}

///
/// DiagnosticsSink
///

pub trait DiagnosticsSink: Send + Sync {
    fn on_event(&self, event: FieldEvent<'_>);
}

///
/// NoopSink
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl DiagnosticsSink for NoopSink {
    fn on_event(&self, _: FieldEvent<'_>) {}
}

impl<S: DiagnosticsSink + ?Sized> DiagnosticsSink for &S {
    fn on_event(&self, event: FieldEvent<'_>) {
        (**self).on_event(event);
    }
}
