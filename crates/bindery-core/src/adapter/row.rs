use crate::{
    adapter::{Binding, bound_attribute},
    convert::Persist,
    field::{Field, FieldList, Leaf, NodeKind},
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

///
/// Row
///
/// Read-only query result row: ordered columns and their cells.
/// A column the row does not carry reads as absent.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Row {
    cells: Vec<(String, Value)>,
}

impl Row {
    #[must_use]
    pub fn new<I, K, V>(cells: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            cells: cells
                .into_iter()
                .map(|(column, cell)| (column.into(), cell.into()))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, cell)| cell)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

///
/// RowValues
///
/// Ordered column → cell write set for an insert or update.
/// Columns keep the order they were first written in.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct RowValues {
    cells: Vec<(String, Value)>,
}

impl RowValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `column`, replacing an earlier cell in place.
    pub fn put(&mut self, column: &str, cell: Value) {
        match self.cells.iter_mut().find(|(name, _)| name == column) {
            Some((_, slot)) => *slot = cell,
            None => self.cells.push((column.to_string(), cell)),
        }
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, cell)| cell)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The row a store would return after applying this write set.
    #[must_use]
    pub fn into_row(self) -> Row {
        Row { cells: self.cells }
    }
}

/// Field reading `column` from a [`Row`] and writing it into [`RowValues`].
/// Writing an absent value stores `Null`.
pub fn persisted<T: Persist>(column: impl Into<Cow<'static, str>>) -> Field<T> {
    let binding = Binding::new(column.into(), T::persisted_type());
    let (read, write, clear) = (binding.clone(), binding.clone(), binding.clone());

    Field::from_accessor(
        Leaf::new(NodeKind::Flow)
            .reading(move |row: &Row| {
                row.get(&read.key)
                    .and_then(|cell| read.ty.to_value(cell))
            })
            .writing(
                move |values: &mut RowValues, value: &T| {
                    values.put(&write.key, write.ty.to_persisted(value));
                },
                move |values: &mut RowValues| values.put(&clear.key, Value::Null),
            )
            .keyed(binding.key.clone())
            .encoded(binding.encoding()),
    )
}

/// Persisted column names of a schema, in declaration order.
#[must_use]
pub fn column_names(fields: &FieldList) -> Vec<String> {
    column_schema(fields)
        .into_iter()
        .map(|(name, _)| name)
        .collect()
}

/// Persisted `(column, sql type)` pairs of a schema, in declaration order.
#[must_use]
pub fn column_schema(fields: &FieldList) -> Vec<(String, &'static str)> {
    fields.deep_collect(|node| {
        bound_attribute::<RowValues>(node)
            .map(|(name, encoding)| vec![(name, encoding.sql_type())])
    })
}

///
/// TESTS
///
