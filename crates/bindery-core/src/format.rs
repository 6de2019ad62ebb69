//! Bidirectional string formats and the formatted field.
//!
//! A formatted field wraps a `Field<String>`: reads parse the inner string,
//! writes format the value before handing it to the inner setter. A string
//! that does not parse reads as an absent value, never as an error.

use crate::{
    convert::date,
    field::{Accessor, Field, FieldNode, NodeKind, NodeMeta},
    object::Object,
};
use std::{fmt::Display, marker::PhantomData, str::FromStr, sync::Arc};
use thiserror::Error as ThisError;
use time::{Date, Month, error::InvalidFormatDescription, format_description::OwnedFormatItem};

///
/// DateFormatError
///

#[derive(Debug, ThisError)]
pub enum DateFormatError {
    #[error("invalid date pattern: {0}")]
    Invalid(#[from] InvalidFormatDescription),

    #[error("date pattern '{0}' cannot format and parse back a calendar date")]
    NotADate(String),
}

///
/// ValueFormat
///
/// `format` is total; `parse` is partial.
///

pub trait ValueFormat<T>: Send + Sync {
    fn format(&self, value: &T) -> String;

    fn parse(&self, text: &str) -> Option<T>;
}

///
/// ParseFormat
///
/// Format through `Display` and parse through `FromStr`.
/// Surrounding whitespace is ignored when parsing.
///

pub struct ParseFormat<T>(PhantomData<fn() -> T>);

impl<T> ParseFormat<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for ParseFormat<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ParseFormat<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ParseFormat<T> {}

impl<T: FromStr + Display> ValueFormat<T> for ParseFormat<T> {
    fn format(&self, value: &T) -> String {
        value.to_string()
    }

    fn parse(&self, text: &str) -> Option<T> {
        text.trim().parse().ok()
    }
}

///
/// FixedFormat
///
/// Fixed number of decimal places, e.g. currency amounts.
/// Only finite numbers parse.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixedFormat {
    places: usize,
}

impl FixedFormat {
    #[must_use]
    pub const fn new(places: usize) -> Self {
        Self { places }
    }

    #[must_use]
    pub const fn places(&self) -> usize {
        self.places
    }
}

impl ValueFormat<f64> for FixedFormat {
    fn format(&self, value: &f64) -> String {
        format!("{:.*}", self.places, value)
    }

    fn parse(&self, text: &str) -> Option<f64> {
        text.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }
}

///
/// DateFormat
///
/// Calendar dates, ISO `YYYY-MM-DD` by default or a `time` format
/// description such as `[day]/[month]/[year]`.
///

#[derive(Clone, Debug, Default)]
pub struct DateFormat {
    pattern: Option<OwnedFormatItem>,
}

impl DateFormat {
    #[must_use]
    pub const fn iso() -> Self {
        Self { pattern: None }
    }

    /// Build from a `time` format description.
    ///
    /// The pattern must format a bare date and parse its own output back to
    /// the same date; time-of-day components or lossy year forms are rejected.
    pub fn new(pattern: &str) -> Result<Self, DateFormatError> {
        let items = time::format_description::parse_owned::<1>(pattern)?;

        let reference = Date::from_calendar_date(2001, Month::December, 31).unwrap_or(Date::MIN);
        let round_trips = reference
            .format(&items)
            .ok()
            .and_then(|text| Date::parse(&text, &items).ok())
            == Some(reference);

        if !round_trips {
            return Err(DateFormatError::NotADate(pattern.to_string()));
        }

        Ok(Self {
            pattern: Some(items),
        })
    }
}

impl ValueFormat<Date> for DateFormat {
    fn format(&self, value: &Date) -> String {
        // accepted patterns always format; iso covers the unset case
        self.pattern
            .as_ref()
            .and_then(|pattern| value.format(pattern).ok())
            .unwrap_or_else(|| date::format_iso(value))
    }

    fn parse(&self, text: &str) -> Option<Date> {
        match &self.pattern {
            Some(pattern) => Date::parse(text.trim(), pattern).ok(),
            None => date::parse_iso(text),
        }
    }
}

///
/// BoolFormat
///
/// Configurable words for `true` and `false`; parsing ignores case.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoolFormat {
    yes: String,
    no: String,
}

impl BoolFormat {
    #[must_use]
    pub fn new(yes: impl Into<String>, no: impl Into<String>) -> Self {
        Self {
            yes: yes.into(),
            no: no.into(),
        }
    }
}

impl Default for BoolFormat {
    fn default() -> Self {
        Self::new("yes", "no")
    }
}

impl ValueFormat<bool> for BoolFormat {
    fn format(&self, value: &bool) -> String {
        let word = if *value { &self.yes } else { &self.no };

        word.clone()
    }

    fn parse(&self, text: &str) -> Option<bool> {
        let text = text.trim();

        if text.eq_ignore_ascii_case(&self.yes) {
            Some(true)
        } else if text.eq_ignore_ascii_case(&self.no) {
            Some(false)
        } else {
            None
        }
    }
}

///
/// FormattedAccessor
///
/// Accessor over a string field, converting through a [`ValueFormat`].
/// Its only constituent is the inner string field.
///

struct FormattedAccessor<T> {
    meta: NodeMeta,
    format: Arc<dyn ValueFormat<T>>,
    inner: Field<String>,
}

impl<T: 'static> FieldNode for FormattedAccessor<T> {
    fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    fn drive(&self, visit: &mut dyn FnMut(&dyn FieldNode)) {
        visit(&self.inner);
    }
}

impl<T: 'static> Accessor<T> for FormattedAccessor<T> {
    fn reads(&self, from: &dyn Object) -> bool {
        self.inner.is_readable(from)
    }

    fn read(&self, from: &dyn Object) -> Option<T> {
        let text = self.inner.get(from)??;

        self.format.parse(&text)
    }

    fn writes(&self, to: &dyn Object) -> bool {
        self.inner.is_writable(to)
    }

    fn write(&self, to: &mut dyn Object, value: Option<&T>) {
        let text = value.map(|value| self.format.format(value));

        // applicability was checked by the caller
        let _ = self.inner.set(to, text.as_ref());
    }
}

impl<T: 'static> Field<T> {
    /// Present a string field as a `T` field through `format`.
    pub fn formatted<F>(format: F, field: Field<String>) -> Self
    where
        F: ValueFormat<T> + 'static,
    {
        let inner_meta = field.meta();
        let mut meta = NodeMeta::new::<T>(NodeKind::Formatted);
        meta.reads = inner_meta.reads;
        meta.writes = inner_meta.writes;
        meta.key.clone_from(&inner_meta.key);

        Self::from_accessor(FormattedAccessor {
            meta,
            format: Arc::new(format),
            inner: field,
        })
    }
}

///
/// TESTS
///
