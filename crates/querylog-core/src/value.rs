//! Bound parameter values.
//!
//! `Value` is the closed set of runtime types a prepared statement parameter
//! can carry by the time it reaches the logger. The model layer produces
//! these; querylog only renders them.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// A bound parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer of any width, widened to 64 bits.
    Int(i64),
    /// Double precision float.
    Double(f64),
    /// Arbitrary precision decimal, kept as the text the driver supplied.
    Decimal(String),
    /// Character data.
    Text(String),
    /// Raw bytes. Sixteen byte values are shown as UUIDs.
    Bytes(Vec<u8>),
    /// Calendar date.
    Date(NaiveDate),
    /// Time of day.
    Time(NaiveTime),
    /// Timestamp without time zone.
    Timestamp(NaiveDateTime),
    /// Timestamp with time zone, normalized to UTC.
    TimestampTz(DateTime<Utc>),
    /// JSON document.
    Json(serde_json::Value),
    /// Homogeneous array, possibly nested.
    Array(Vec<Value>),
    /// Composite (row) value.
    Row(Vec<Value>),
    /// A value the model layer could not classify.
    ///
    /// `repr` is whatever inspection text the producer had available.
    Opaque {
        /// Name of the producer's type.
        type_name: String,
        /// Raw textual inspection of the value.
        repr: String,
    },
}

impl Value {
    /// Build an opaque value from any debuggable type.
    pub fn opaque<T: std::fmt::Debug>(value: &T) -> Self {
        Value::Opaque {
            type_name: std::any::type_name::<T>().to_string(),
            repr: format!("{:?}", value),
        }
    }

    /// Build an array from anything convertible into values.
    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// Build a composite row from anything convertible into values.
    pub fn row<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Row(items.into_iter().map(Into::into).collect())
    }

    /// Check if this is a NULL value.
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the string slice of a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) | Value::Decimal(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the variant, used in diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Double(_) => "double",
            Value::Decimal(_) => "decimal",
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::Date(_) => "date",
            Value::Time(_) => "time",
            Value::Timestamp(_) => "timestamp",
            Value::TimestampTz(_) => "timestamptz",
            Value::Json(_) => "json",
            Value::Array(_) => "array",
            Value::Row(_) => "row",
            Value::Opaque { .. } => "opaque",
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Double(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<uuid::Uuid> for Value {
    fn from(v: uuid::Uuid) -> Self {
        Value::Bytes(v.as_bytes().to_vec())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<NaiveTime> for Value {
    fn from(v: NaiveTime) -> Self {
        Value::Time(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Timestamp(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::TimestampTz(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(5_i32)), Value::Int(5));
    }

    #[test]
    fn test_array_constructor() {
        assert_eq!(
            Value::array(vec![1_i64, 2]),
            Value::Array(vec![Value::Int(1), Value::Int(2)])
        );
        assert_eq!(Value::from(vec![1_u8, 2]), Value::Bytes(vec![1, 2]));
        assert_eq!(
            Value::row(["a", "b"]),
            Value::Row(vec![Value::Text("a".into()), Value::Text("b".into())])
        );
    }

    #[test]
    fn test_uuid_conversion_is_sixteen_bytes() {
        let id = uuid::Uuid::nil();
        match Value::from(id) {
            Value::Bytes(b) => assert_eq!(b.len(), 16),
            other => panic!("expected bytes, got {:?}", other),
        }
    }

    #[test]
    fn test_opaque_captures_debug() {
        #[derive(Debug)]
        struct Point(i32, i32);

        let v = Value::opaque(&Point(1, 2));
        match v {
            Value::Opaque { type_name, repr } => {
                assert!(type_name.ends_with("Point"));
                assert_eq!(repr, "Point(1, 2)");
            }
            other => panic!("expected opaque, got {:?}", other),
        }
    }

    #[test]
    fn test_kind_and_accessors() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::Text("x".into()).as_str(), Some("x"));
        assert_eq!(Value::Int(1).as_str(), None);
        assert_eq!(Value::Row(vec![]).kind(), "row");
    }
}
