//! Evaluation entry points with an injected diagnostics sink.

use crate::{
    field::Field,
    object::Object,
    obs::sink::{DiagnosticsSink, FieldEvent, NoopSink},
};

static NOOP_SINK: NoopSink = NoopSink;

///
/// Binder
///
/// Runs `copy`/`set_value` and reports outcomes to a caller-supplied sink.
/// Holds no state besides the sink reference; cheap to create per call site.
///

#[derive(Clone, Copy)]
pub struct Binder<'s> {
    sink: &'s dyn DiagnosticsSink,
}

impl<'s> Binder<'s> {
    #[must_use]
    pub const fn new(sink: &'s dyn DiagnosticsSink) -> Self {
        Self { sink }
    }

    /// Binder whose diagnostics are discarded.
    #[must_use]
    pub fn silent() -> Binder<'static> {
        Binder { sink: &NOOP_SINK }
    }

    /// Copy `field` from `from` into `to`.
    ///
    /// Returns `false` when the getter is not applicable to `from`; nothing
    /// else happens in that case. Otherwise the (possibly absent) value is
    /// forwarded to [`Self::set_value`] and `true` is returned, whether or
    /// not any setter accepted it.
    pub fn copy<T: 'static>(&self, field: &Field<T>, from: &dyn Object, to: &mut dyn Object) -> bool {
        let Some(value) = field.get(from) else {
            self.sink.on_event(FieldEvent::CopySkipped {
                field: field.label(),
                source: Object::shape(from).name(),
            });
            return false;
        };

        self.set_value(field, to, value);

        true
    }

    /// Fan `value` out to every setter of `field` that accepts `to`.
    /// A target no setter accepts is reported as `WriteRejected`.
    pub fn set_value<T: 'static>(&self, field: &Field<T>, to: &mut dyn Object, value: Option<T>) -> bool {
        let target = Object::shape(&*to).name();

        if !field.is_writable(to) {
            self.sink.on_event(FieldEvent::WriteRejected {
                field: field.label(),
                target,
            });
            return false;
        }

        match field.set(to, value.as_ref()) {
            Ok(writers) => {
                self.sink.on_event(FieldEvent::Written {
                    field: field.label(),
                    target,
                    writers,
                    cleared: value.is_none(),
                });
                true
            }
            Err(_) => {
                self.sink.on_event(FieldEvent::WriteRejected {
                    field: field.label(),
                    target,
                });
                false
            }
        }
    }
}

impl Default for Binder<'static> {
    fn default() -> Self {
        Self::silent()
    }
}
