use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde_json::Value as JsonValue;

use crate::error::{ReqlError, Result};

/// A literal carried by a term: the non-term half of an argument.
///
/// ReQL numbers are IEEE doubles on the wire, so all Rust numeric input
/// normalizes to `f64`. Objects keep their keys sorted so that encoding a
/// tree twice yields structurally identical output.
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Datum>),
    Object(BTreeMap<String, Datum>),
}

impl Datum {
    /// Checked numeric normalization. Non-finite floats have no wire
    /// representation and are rejected here rather than at encode time.
    pub fn number(value: f64) -> Result<Self> {
        if value.is_finite() {
            Ok(Datum::Number(value))
        } else {
            Err(ReqlError::UnsupportedArgument(format!(
                "non-finite number {value}"
            )))
        }
    }

    /// The protocol's TIME pseudo-type: an object tagged with
    /// `$reql_type$` carrying epoch seconds and a printed offset.
    pub fn time(value: DateTime<FixedOffset>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("$reql_type$".to_string(), Datum::String("TIME".to_string()));
        fields.insert(
            "epoch_time".to_string(),
            Datum::Number(value.timestamp_micros() as f64 / 1e6),
        );
        fields.insert(
            "timezone".to_string(),
            Datum::String(value.offset().to_string()),
        );
        Datum::Object(fields)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Datum::Null)
    }
}

impl From<()> for Datum {
    fn from(_: ()) -> Self {
        Datum::Null
    }
}

impl From<bool> for Datum {
    fn from(b: bool) -> Self {
        Datum::Bool(b)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(impl From<$t> for Datum {
            fn from(i: $t) -> Self {
                Datum::Number(i as f64)
            }
        })*
    };
}
impl_from_integer!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize);

impl From<f32> for Datum {
    fn from(f: f32) -> Self {
        Datum::Number(f as f64)
    }
}

impl From<f64> for Datum {
    fn from(f: f64) -> Self {
        // Unchecked storage; the encoder rejects non-finite values.
        Datum::Number(f)
    }
}

impl From<&str> for Datum {
    fn from(s: &str) -> Self {
        Datum::String(s.to_string())
    }
}

impl From<String> for Datum {
    fn from(s: String) -> Self {
        Datum::String(s)
    }
}

impl<T> From<Option<T>> for Datum
where
    T: Into<Datum>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Datum::Null,
        }
    }
}

impl<T> From<Vec<T>> for Datum
where
    T: Into<Datum>,
{
    fn from(values: Vec<T>) -> Self {
        Datum::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T> From<BTreeMap<String, T>> for Datum
where
    T: Into<Datum>,
{
    fn from(map: BTreeMap<String, T>) -> Self {
        Datum::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T> From<HashMap<String, T>> for Datum
where
    T: Into<Datum>,
{
    fn from(map: HashMap<String, T>) -> Self {
        Datum::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<DateTime<FixedOffset>> for Datum {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Datum::time(value)
    }
}

impl From<DateTime<Utc>> for Datum {
    fn from(value: DateTime<Utc>) -> Self {
        Datum::time(value.with_timezone(&Utc.fix()))
    }
}

impl From<JsonValue> for Datum {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Datum::Null,
            JsonValue::Bool(b) => Datum::Bool(b),
            // serde_json numbers are finite by construction; precision
            // beyond f64 is lost, matching the double-only wire format.
            JsonValue::Number(n) => Datum::Number(n.as_f64().unwrap_or_default()),
            JsonValue::String(s) => Datum::String(s),
            JsonValue::Array(items) => {
                Datum::Array(items.into_iter().map(Datum::from).collect())
            }
            JsonValue::Object(map) => {
                Datum::Object(map.into_iter().map(|(k, v)| (k, Datum::from(v))).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn integers_normalize_to_numbers() {
        assert_eq!(Datum::from(42u8), Datum::Number(42.0));
        assert_eq!(Datum::from(-7i64), Datum::Number(-7.0));
    }

    #[test]
    fn checked_number_rejects_non_finite() {
        assert!(Datum::number(1.5).is_ok());
        assert!(matches!(
            Datum::number(f64::NAN),
            Err(ReqlError::UnsupportedArgument(_))
        ));
        assert!(matches!(
            Datum::number(f64::INFINITY),
            Err(ReqlError::UnsupportedArgument(_))
        ));
    }

    #[test]
    fn json_trees_normalize_recursively() {
        let datum = Datum::from(json!({"a": [1, "two", null], "b": true}));
        match datum {
            Datum::Object(fields) => {
                assert_eq!(fields.len(), 2);
                assert!(matches!(fields["a"], Datum::Array(_)));
                assert_eq!(fields["b"], Datum::Bool(true));
            }
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn utc_datetime_becomes_time_pseudo_type() {
        let dt = Utc.with_ymd_and_hms(2015, 5, 6, 12, 0, 0).unwrap();
        match Datum::from(dt) {
            Datum::Object(fields) => {
                assert_eq!(
                    fields["$reql_type$"],
                    Datum::String("TIME".to_string())
                );
                assert_eq!(fields["timezone"], Datum::String("+00:00".to_string()));
                assert!(matches!(fields["epoch_time"], Datum::Number(_)));
            }
            other => panic!("expected TIME object, got {other:?}"),
        }
    }
}
