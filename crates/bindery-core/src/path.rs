//! Addressable entity paths.
//!
//! A path is an ordered list of segments that alternate between a name and
//! an id, e.g. `/customer/7/order/42`.

use crate::field::{Field, Leaf, NodeKind};
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

///
/// EntityPath
///
/// Immutable; every operation returns a new path.
///

#[derive(
    Clone, Debug, Default, Deref, Deserialize, Eq, Hash, IntoIterator, PartialEq, Serialize,
)]
pub struct EntityPath {
    #[into_iterator(owned, ref)]
    segments: Vec<String>,
}

impl EntityPath {
    #[must_use]
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Split on `/`, ignoring empty segments.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::new(text.split('/').filter(|segment| !segment.is_empty()))
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Append segments.
    #[must_use]
    pub fn join<I, S>(&self, tail: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut segments = self.segments.clone();
        segments.extend(tail.into_iter().map(Into::into));

        Self { segments }
    }

    /// Keep everything before the first `anchor` segment, then `anchor`, then
    /// `tail`. When `anchor` does not occur, `anchor` and `tail` are appended.
    #[must_use]
    pub fn replace_suffix<I, S>(&self, anchor: &str, tail: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keep = self
            .position(anchor)
            .unwrap_or(self.segments.len());

        let mut segments = self.segments[..keep].to_vec();
        segments.push(anchor.to_string());
        segments.extend(tail.into_iter().map(Into::into));

        Self { segments }
    }

    /// Segment following the first `name` segment.
    #[must_use]
    pub fn segment_after(&self, name: &str) -> Option<&str> {
        let at = self.position(name)?;

        self.segments.get(at + 1).map(String::as_str)
    }

    /// Numeric id following the first `name` segment.
    #[must_use]
    pub fn find_id(&self, name: &str) -> Option<i64> {
        self.segment_after(name)?.parse().ok()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.segments.iter().position(|segment| segment == name)
    }
}

impl fmt::Display for EntityPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }

        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }

        Ok(())
    }
}

impl FromStr for EntityPath {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(text))
    }
}

/// Read-only field yielding the id that follows `entity` in a path.
/// Absent when `entity` is missing or its id is not numeric.
#[must_use]
pub fn path_id(entity: &'static str) -> Field<i64> {
    Field::from_accessor(
        Leaf::new(NodeKind::ReadOnly)
            .reading(move |path: &EntityPath| path.find_id(entity))
            .keyed(entity),
    )
}

///
/// TESTS
///
