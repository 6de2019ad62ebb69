use crate::{
    field::{Field, FieldList, Leaf, NodeKind},
    format::ValueFormat,
};
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, collections::BTreeMap};

///
/// ElementTree
///
/// Text slots of display elements keyed by element id.
/// Structure only; nothing here renders.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ElementTree {
    slots: BTreeMap<String, String>,
}

impl ElementTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare element `id` with empty text.
    #[must_use]
    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.slots.entry(id.into()).or_default();
        self
    }

    #[must_use]
    pub fn text(&self, id: &str) -> Option<&str> {
        self.slots.get(id).map(String::as_str)
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) {
        self.slots.insert(id.to_string(), text.into());
    }

    pub fn element_ids(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }
}

/// String field bound to element `id`. Empty text reads as absent; writing
/// an absent value empties the element.
pub fn element_text(id: impl Into<Cow<'static, str>>) -> Field<String> {
    let id: Cow<'static, str> = id.into();
    let (read, write, clear) = (id.clone(), id.clone(), id.clone());

    Field::from_accessor(
        Leaf::new(NodeKind::Flow)
            .reading(move |tree: &ElementTree| {
                tree.text(&read)
                    .filter(|text| !text.is_empty())
                    .map(str::to_string)
            })
            .writing(
                move |tree: &mut ElementTree, text: &String| tree.set_text(&write, text.as_str()),
                move |tree: &mut ElementTree| tree.set_text(&clear, ""),
            )
            .keyed(id),
    )
}

/// Element `id` presented through `format`.
pub fn element_field<T, F>(id: impl Into<Cow<'static, str>>, format: F) -> Field<T>
where
    T: 'static,
    F: ValueFormat<T> + 'static,
{
    Field::formatted(format, element_text(id))
}

/// Ids of every element a schema binds to, in declaration order.
#[must_use]
pub fn bindable_elements(fields: &FieldList) -> Vec<String> {
    fields.deep_collect(|node| {
        let meta = node.meta();

        (meta.reads_shape::<ElementTree>() || meta.writes_shape::<ElementTree>())
            .then(|| meta.key().map(|id| vec![id.to_string()]))
            .flatten()
    })
}

///
/// TESTS
///
