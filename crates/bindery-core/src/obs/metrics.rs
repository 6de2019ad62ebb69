//! Counting sink for binding diagnostics.

use crate::obs::sink::{DiagnosticsSink, FieldEvent};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

///
/// MetricsReport
///
/// Point-in-time snapshot of a [`FieldMetrics`] sink.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MetricsReport {
    pub copies_skipped: u64,
    pub writes: u64,
    pub clears: u64,
    pub writers_invoked: u64,
    pub writes_rejected: u64,

    /// Per-field event counts, keyed by field label.
    pub fields: BTreeMap<String, FieldCounters>,
}

///
/// FieldCounters
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldCounters {
    pub skipped: u64,
    pub written: u64,
    pub rejected: u64,
}

///
/// FieldMetrics
///
/// In-memory counters fed by [`FieldEvent`]s.
/// Share one instance across binders with `Binder::new(&metrics)`.
///

#[derive(Debug, Default)]
pub struct FieldMetrics {
    state: Mutex<MetricsReport>,
}

impl FieldMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn report(&self) -> MetricsReport {
        self.state().clone()
    }

    pub fn reset(&self) {
        *self.state() = MetricsReport::default();
    }

    fn state(&self) -> MutexGuard<'_, MetricsReport> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DiagnosticsSink for FieldMetrics {
    fn on_event(&self, event: FieldEvent<'_>) {
        let mut m = self.state();
        let label = event.field().to_string();

        match event {
            FieldEvent::CopySkipped { .. } => {
                m.copies_skipped += 1;
                m.fields.entry(label).or_default().skipped += 1;
            }
            FieldEvent::Written {
                writers, cleared, ..
            } => {
                if cleared {
                    m.clears += 1;
                } else {
                    m.writes += 1;
                }
                m.writers_invoked += writers as u64;
                m.fields.entry(label).or_default().written += 1;
            }
            FieldEvent::WriteRejected { .. } => {
                m.writes_rejected += 1;
                m.fields.entry(label).or_default().rejected += 1;
            }
        }
    }
}

///
/// TESTS
///
