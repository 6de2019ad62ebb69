use crate::{
    convert::{Persist, PersistedType},
    value::{Encoding, Value},
};
use proptest::prelude::*;
use time::{Date, Month};

// ---- helpers -----------------------------------------------------------

fn round_trip<T: Persist>(value: &T) -> Option<T> {
    let ty = T::persisted_type();
    ty.to_value(&ty.to_persisted(value))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Priority {
    Low,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => f.write_str("low"),
            Self::High => f.write_str("high"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "high" => Ok(Self::High),
            _ => Err(()),
        }
    }
}

// ---- direct ------------------------------------------------------------

#[test]
fn direct_descriptors_use_their_own_encoding() {
    assert_eq!(String::persisted_type().encoding(), Encoding::Text);
    assert_eq!(i64::persisted_type().encoding(), Encoding::Integer);
    assert_eq!(f64::persisted_type().encoding(), Encoding::Real);
    assert_eq!(Vec::<u8>::persisted_type().encoding(), Encoding::Binary);
}

#[test]
fn null_cells_read_as_absent() {
    assert_eq!(String::persisted_type().to_value(&Value::Null), None);
    assert_eq!(i64::persisted_type().to_value(&Value::Null), None);
    assert_eq!(bool::persisted_type().to_value(&Value::Null), None);
}

#[test]
fn mismatched_cells_read_as_absent() {
    assert_eq!(i64::persisted_type().to_value(&Value::Text("1".into())), None);
    assert_eq!(String::persisted_type().to_value(&Value::Integer(1)), None);
}

// ---- converted ---------------------------------------------------------

#[test]
fn converted_descriptors_inherit_encoding() {
    assert_eq!(i32::persisted_type().encoding(), Encoding::Integer);
    assert_eq!(bool::persisted_type().encoding(), Encoding::Integer);
    assert_eq!(f32::persisted_type().encoding(), Encoding::Real);
    assert_eq!(Date::persisted_type().encoding(), Encoding::Text);
    assert_eq!(PersistedType::<Priority>::textual().encoding(), Encoding::Text);
}

#[test]
fn narrowing_out_of_range_is_absent() {
    let ty = u8::persisted_type();

    assert_eq!(ty.to_value(&Value::Integer(255)), Some(255));
    assert_eq!(ty.to_value(&Value::Integer(256)), None);
    assert_eq!(ty.to_value(&Value::Integer(-1)), None);
}

#[test]
fn f32_narrowing_rejects_overflow() {
    let ty = f32::persisted_type();

    assert_eq!(ty.to_value(&Value::Real(1e300)), None);
    assert_eq!(ty.to_value(&Value::Real(-1e300)), None);
    assert_eq!(ty.to_value(&Value::Real(2.5)), Some(2.5));
    assert_eq!(ty.to_value(&Value::Real(f64::INFINITY)), Some(f32::INFINITY));
}

#[test]
fn bool_is_stored_as_integer() {
    let ty = bool::persisted_type();

    assert_eq!(ty.to_persisted(&true), Value::Integer(1));
    assert_eq!(ty.to_persisted(&false), Value::Integer(0));
    assert_eq!(ty.to_value(&Value::Integer(7)), Some(true));
}

#[test]
fn dates_are_stored_as_iso_text() {
    let date = Date::from_calendar_date(2025, Month::March, 9).expect("valid date");
    let ty = Date::persisted_type();

    assert_eq!(ty.to_persisted(&date), Value::Text("2025-03-09".into()));
    assert_eq!(ty.to_value(&Value::Text("not a date".into())), None);
}

#[test]
fn textual_descriptor_rejects_unknown_names() {
    let ty = PersistedType::<Priority>::textual();

    assert_eq!(ty.to_persisted(&Priority::High), Value::Text("high".into()));
    assert_eq!(ty.to_value(&Value::Text("low".into())), Some(Priority::Low));
    assert_eq!(ty.to_value(&Value::Text("urgent".into())), None);
}

#[test]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn custom_converted_descriptor_composes_over_direct() {
    // cents stored as integer, domain value in whole units
    let ty = PersistedType::<f64>::converted::<i64, _, _>(
        |cents| Some(cents as f64 / 100.0),
        |units| (units * 100.0).round() as i64,
    );

    assert_eq!(ty.encoding(), Encoding::Integer);
    assert_eq!(ty.to_persisted(&12.34), Value::Integer(1234));
    assert_eq!(ty.to_value(&Value::Integer(250)), Some(2.5));
}

// ---- round trips -------------------------------------------------------

proptest! {
    #[test]
    fn integers_round_trip(v in any::<i64>(), w in any::<i32>(), x in any::<u32>(), y in any::<i8>()) {
        prop_assert_eq!(round_trip(&v), Some(v));
        prop_assert_eq!(round_trip(&w), Some(w));
        prop_assert_eq!(round_trip(&x), Some(x));
        prop_assert_eq!(round_trip(&y), Some(y));
    }

    #[test]
    fn text_and_blobs_round_trip(s in ".*", b in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(round_trip(&s), Some(s.clone()));
        prop_assert_eq!(round_trip(&b), Some(b.clone()));
    }

    #[test]
    fn finite_floats_round_trip(v in -1.0e12f64..1.0e12, w in -1.0e6f32..1.0e6) {
        prop_assert_eq!(round_trip(&v), Some(v));
        prop_assert_eq!(round_trip(&w), Some(w));
    }

    #[test]
    fn bools_round_trip(v in any::<bool>()) {
        prop_assert_eq!(round_trip(&v), Some(v));
    }

    #[test]
    fn dates_round_trip(year in 1i32..9999, ordinal in 1u16..=365) {
        let date = Date::from_ordinal_date(year, ordinal).expect("ordinal within year");
        prop_assert_eq!(round_trip(&date), Some(date));
    }
}
