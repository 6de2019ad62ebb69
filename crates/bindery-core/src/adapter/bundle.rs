use crate::{
    field::{Field, Leaf, NodeKind},
    serialize::{SerializeError, deserialize, serialize},
};
use derive_more::Deref;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::{borrow::Cow, collections::BTreeMap};

///
/// Bundle
///
/// Serialized container of independently encoded entries, e.g. saved
/// screen state. Each entry is decoded on demand.
///

#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, PartialEq, Serialize)]
pub struct Bundle {
    entries: BTreeMap<String, Vec<u8>>,
}

impl Bundle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode and store `value` under `key`.
    pub fn put<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), SerializeError> {
        let bytes = serialize(value)?;
        self.entries.insert(key.to_string(), bytes);

        Ok(())
    }

    /// Decode the entry under `key`; missing or undecodable entries are `None`.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.entries
            .get(key)
            .and_then(|bytes| deserialize(bytes).ok())
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SerializeError> {
        serialize(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SerializeError> {
        deserialize(bytes)
    }
}

/// Field bound to entry `key` of a [`Bundle`].
/// A value that fails to encode leaves the entry removed.
pub fn bundle_field<T>(key: impl Into<Cow<'static, str>>) -> Field<T>
where
    T: Serialize + DeserializeOwned + 'static,
{
    let key: Cow<'static, str> = key.into();
    let (read, write, clear) = (key.clone(), key.clone(), key.clone());

    Field::from_accessor(
        Leaf::new(NodeKind::Flow)
            .reading(move |bundle: &Bundle| bundle.get(&read))
            .writing(
                move |bundle: &mut Bundle, value: &T| {
                    if bundle.put(&write, value).is_err() {
                        bundle.remove(&write);
                    }
                },
                move |bundle: &mut Bundle| {
                    bundle.remove(&clear);
                },
            )
            .keyed(key),
    )
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::{Error as _, Serializer};

    #[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
    struct Scroll {
        offset: u32,
        anchor: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("unencodable"))
        }
    }

    #[test]
    fn entries_round_trip_through_fields() {
        let field = bundle_field::<Scroll>("scroll");
        let mut bundle = Bundle::new();
        let scroll = Scroll {
            offset: 120,
            anchor: Some("top".into()),
        };

        assert!(field.set_value(&mut bundle, Some(scroll.clone())));
        assert_eq!(field.apply(&bundle), Ok(scroll));
    }

    #[test]
    fn undecodable_entries_are_absent() {
        let field = bundle_field::<Scroll>("scroll");
        let mut bundle = Bundle::new();
        bundle.put("scroll", &"not a scroll").expect("encode text");

        assert_eq!(field.get(&bundle), Some(None));
    }

    #[test]
    fn failed_encoding_removes_the_entry() {
        let field = bundle_field::<Unencodable>("state");
        let mut bundle = Bundle::new();
        bundle.put("state", &1_u8).expect("encode byte");

        assert!(field.set_value(&mut bundle, Some(Unencodable)));
        assert!(!bundle.contains_key("state"));
    }

    #[test]
    fn clearing_removes_the_entry() {
        let field = bundle_field::<u32>("count");
        let mut bundle = Bundle::new();
        bundle.put("count", &3_u32).expect("encode count");

        assert!(field.set_value(&mut bundle, None));
        assert!(bundle.is_empty());
    }

    #[test]
    fn whole_bundle_round_trips() {
        let mut bundle = Bundle::new();
        bundle.put("count", &3_u32).expect("encode count");
        bundle.put("title", &"Orders").expect("encode title");

        let bytes = bundle.to_bytes().expect("encode bundle");
        let decoded = Bundle::from_bytes(&bytes).expect("decode bundle");

        assert_eq!(decoded, bundle);
        assert_eq!(decoded.get::<String>("title").as_deref(), Some("Orders"));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(Bundle::from_bytes(&[0xff, 0x00, 0x13]).is_err());
    }
}
