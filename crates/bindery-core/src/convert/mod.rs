//! Type-directed conversion between domain values and storage primitives.
//!
//! A [`PersistedType`] is resolved by value type through [`Persist`] when a
//! field is declared. Direct descriptors store the domain type as-is;
//! converted descriptors layer a pair of conversions over a direct one and
//! inherit its encoding.

pub(crate) mod date;

#[cfg(test)]
mod tests;

use crate::value::{Encoding, Value};
use std::{fmt::Display, str::FromStr, sync::Arc};

type ToValueFn<T> = dyn Fn(&Value) -> Option<T> + Send + Sync;
type ToPersistedFn<T> = dyn Fn(&T) -> Value + Send + Sync;

///
/// Primitive
///
/// A domain type that is itself a storage primitive.
/// `from_value` returns `None` for null cells and for cells of another kind.
///

pub trait Primitive: Sized + 'static {
    const ENCODING: Encoding;

    fn to_value(&self) -> Value;

    fn from_value(value: &Value) -> Option<Self>;
}

impl Primitive for String {
    const ENCODING: Encoding = Encoding::Text;

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_text().map(ToString::to_string)
    }
}

impl Primitive for i64 {
    const ENCODING: Encoding = Encoding::Integer;

    fn to_value(&self) -> Value {
        Value::Integer(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_integer()
    }
}

impl Primitive for f64 {
    const ENCODING: Encoding = Encoding::Real;

    fn to_value(&self) -> Value {
        Value::Real(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_real()
    }
}

impl Primitive for Vec<u8> {
    const ENCODING: Encoding = Encoding::Binary;

    fn to_value(&self) -> Value {
        Value::Blob(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_blob().map(<[u8]>::to_vec)
    }
}

///
/// PersistedType
///
/// Immutable descriptor pairing a domain type `T` with a storage primitive.
/// `to_persisted` is total; `to_value` is partial and reports absence instead
/// of failing when a cell cannot represent `T`.
///

pub struct PersistedType<T> {
    encoding: Encoding,
    to_value: Arc<ToValueFn<T>>,
    to_persisted: Arc<ToPersistedFn<T>>,
}

impl<T> Clone for PersistedType<T> {
    fn clone(&self) -> Self {
        Self {
            encoding: self.encoding,
            to_value: Arc::clone(&self.to_value),
            to_persisted: Arc::clone(&self.to_persisted),
        }
    }
}

impl<T: 'static> PersistedType<T> {
    /// Descriptor for a domain type that is its own storage primitive.
    #[must_use]
    pub fn direct() -> Self
    where
        T: Primitive,
    {
        Self {
            encoding: T::ENCODING,
            to_value: Arc::new(T::from_value),
            to_persisted: Arc::new(T::to_value),
        }
    }

    /// Descriptor layered over the direct descriptor of primitive `P`.
    pub fn converted<P, V, S>(to_value: V, to_persisted: S) -> Self
    where
        P: Primitive,
        V: Fn(P) -> Option<T> + Send + Sync + 'static,
        S: Fn(&T) -> P + Send + Sync + 'static,
    {
        let base = PersistedType::<P>::direct();
        let encoding = base.encoding();
        let read_base = base.clone();

        Self {
            encoding,
            to_value: Arc::new(move |cell: &Value| {
                read_base.to_value(cell).and_then(&to_value)
            }),
            to_persisted: Arc::new(move |value: &T| {
                base.to_persisted(&to_persisted(value))
            }),
        }
    }

    /// Descriptor storing `T` as text through its `Display`/`FromStr` pair.
    #[must_use]
    pub fn textual() -> Self
    where
        T: Display + FromStr,
    {
        Self::converted::<String, _, _>(|text| text.parse().ok(), ToString::to_string)
    }

    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Convert a storage cell into a domain value; `None` when not representable.
    #[must_use]
    pub fn to_value(&self, cell: &Value) -> Option<T> {
        (self.to_value)(cell)
    }

    /// Convert a domain value into its storage cell.
    #[must_use]
    pub fn to_persisted(&self, value: &T) -> Value {
        (self.to_persisted)(value)
    }
}

///
/// Persist
///
/// Resolves the conversion descriptor for a value type.
///

pub trait Persist: Sized + 'static {
    fn persisted_type() -> PersistedType<Self>;
}

macro_rules! impl_persist_direct {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Persist for $ty {
                fn persisted_type() -> PersistedType<Self> {
                    PersistedType::direct()
                }
            }
        )*
    };
}

macro_rules! impl_persist_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Persist for $ty {
                fn persisted_type() -> PersistedType<Self> {
                    PersistedType::converted::<i64, _, _>(
                        |v| Self::try_from(v).ok(),
                        |v| i64::from(*v),
                    )
                }
            }
        )*
    };
}

impl_persist_direct!(String, i64, f64, Vec<u8>);
impl_persist_integer!(i8, i16, i32, u8, u16, u32);

impl Persist for f32 {
    #[expect(clippy::cast_possible_truncation)]
    fn persisted_type() -> PersistedType<Self> {
        PersistedType::converted::<f64, _, _>(
            |v| {
                let narrowed = v as Self;
                (narrowed.is_finite() || !v.is_finite()).then_some(narrowed)
            },
            |v| f64::from(*v),
        )
    }
}

impl Persist for bool {
    fn persisted_type() -> PersistedType<Self> {
        PersistedType::converted::<i64, _, _>(|v| Some(v != 0), |v| i64::from(*v))
    }
}

impl Persist for time::Date {
    fn persisted_type() -> PersistedType<Self> {
        PersistedType::converted::<String, _, _>(|text| date::parse_iso(&text), date::format_iso)
    }
}
