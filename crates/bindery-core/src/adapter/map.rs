use crate::{
    adapter::Binding,
    convert::Persist,
    field::{Field, Leaf, NodeKind},
    value::Value,
};
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, collections::BTreeMap};

///
/// ValueMap
///
/// In-memory key → value map, e.g. a decoded settings document.
///

#[derive(Clone, Debug, Default, Deref, Deserialize, IntoIterator, PartialEq, Serialize)]
pub struct ValueMap {
    #[into_iterator(owned, ref)]
    entries: BTreeMap<String, Value>,
}

impl ValueMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }
}

/// Field bound to `key` of a [`ValueMap`], for both reads and writes.
/// Writing an absent value removes the key.
pub fn map_field<T: Persist>(key: impl Into<Cow<'static, str>>) -> Field<T> {
    let binding = Binding::new(key.into(), T::persisted_type());
    let (read, write, clear) = (binding.clone(), binding.clone(), binding.clone());

    Field::from_accessor(
        Leaf::new(NodeKind::Flow)
            .reading(move |map: &ValueMap| {
                map.get(&*read.key)
                    .and_then(|cell| read.ty.to_value(cell))
            })
            .writing(
                move |map: &mut ValueMap, value: &T| {
                    map.insert(&*write.key, write.ty.to_persisted(value));
                },
                move |map: &mut ValueMap| {
                    map.remove(&clear.key);
                },
            )
            .keyed(binding.key.clone())
            .encoded(binding.encoding()),
    )
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Encoding;

    #[test]
    fn reads_and_writes_the_key() {
        let field = map_field::<i32>("retries");
        let mut map = ValueMap::new().with("retries", 3_i64);

        assert_eq!(field.get(&map), Some(Some(3)));

        assert!(field.set_value(&mut map, Some(5)));
        assert_eq!(map.get("retries"), Some(&Value::Integer(5)));
    }

    #[test]
    fn missing_or_mistyped_keys_are_absent() {
        let field = map_field::<i64>("retries");

        assert_eq!(field.get(&ValueMap::new()), Some(None));
        assert_eq!(field.get(&ValueMap::new().with("retries", "many")), Some(None));
    }

    #[test]
    fn clearing_removes_the_key() {
        let field = map_field::<String>("name");
        let mut map = ValueMap::new().with("name", "Ann").with("other", 1_i64);

        assert!(field.set_value(&mut map, None));
        assert!(!map.contains_key("name"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn leaf_carries_key_and_encoding() {
        use crate::field::FieldNode;

        let field = map_field::<f32>("ratio");

        assert_eq!(field.meta().key(), Some("ratio"));
        assert_eq!(field.meta().encoding, Some(Encoding::Real));
        assert!(field.meta().reads_shape::<ValueMap>());
        assert!(field.meta().writes_shape::<ValueMap>());
    }
}
