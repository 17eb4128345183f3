//! Literal rendering.
//!
//! Turns a bound [`Value`] into the text a human would type in place of the
//! placeholder. The output is meant for reading, not execution: only single
//! quotes are escaped and nothing is validated against the target database.

use uuid::Uuid;

use crate::dialect::{ArrayStyle, BinaryStyle, BoolStyle, Dialect, DialectSpec};
use crate::value::Value;

/// Render a value as a literal for the given dialect.
///
/// Rendering never fails. Values the model layer could not classify come out
/// as a `<type: repr>` marker.
pub fn render(value: &Value, dialect: Dialect) -> String {
    let mut out = String::new();
    write_literal(&mut out, value, dialect.spec());
    out
}

/// Quote text as a single-quoted SQL string, doubling embedded quotes.
pub fn quote_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    push_quoted(&mut out, text);
    out
}

fn push_quoted(out: &mut String, text: &str) {
    out.push('\'');
    for c in text.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
}

fn write_literal(out: &mut String, value: &Value, spec: &DialectSpec) {
    match value {
        Value::Null => out.push_str("NULL"),
        Value::Bool(b) => out.push_str(match (spec.bool_style, *b) {
            (BoolStyle::Keyword, true) => "TRUE",
            (BoolStyle::Keyword, false) => "FALSE",
            (BoolStyle::Bit, true) => "1",
            (BoolStyle::Bit, false) => "0",
        }),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Double(f) => write_double(out, *f),
        Value::Decimal(s) => out.push_str(s),
        Value::Text(s) => push_quoted(out, s),
        Value::Bytes(bytes) => write_bytes(out, bytes, spec),
        Value::Date(d) => push_quoted(out, &d.format("%Y-%m-%d").to_string()),
        Value::Time(t) => push_quoted(out, &t.format("%H:%M:%S%.f").to_string()),
        Value::Timestamp(ts) => push_quoted(out, &ts.format("%Y-%m-%dT%H:%M:%S%.f").to_string()),
        Value::TimestampTz(ts) => push_quoted(out, &ts.to_rfc3339()),
        Value::Json(json) => push_quoted(out, &json.to_string()),
        Value::Array(items) => {
            let (open, close) = match spec.array_style {
                ArrayStyle::Constructor => ("ARRAY[", "]"),
                ArrayStyle::Parenthesized => ("(", ")"),
            };
            out.push_str(open);
            write_list(out, items, spec);
            out.push_str(close);
        }
        Value::Row(fields) => {
            out.push('(');
            write_list(out, fields, spec);
            out.push(')');
        }
        Value::Opaque { type_name, repr } => {
            tracing::debug!(
                target: "querylog::render",
                type_name = type_name.as_str(),
                dialect = spec.name,
                "rendering unclassified parameter with fallback marker"
            );
            out.push('<');
            out.push_str(type_name);
            out.push_str(": ");
            out.push_str(repr);
            out.push('>');
        }
    }
}

fn write_list(out: &mut String, items: &[Value], spec: &DialectSpec) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_literal(out, item, spec);
    }
}

fn write_double(out: &mut String, f: f64) {
    if f.is_nan() {
        out.push_str("'NaN'");
    } else if f.is_infinite() {
        out.push_str(if f > 0.0 { "'Infinity'" } else { "'-Infinity'" });
    } else {
        out.push_str(&f.to_string());
    }
}

fn write_bytes(out: &mut String, bytes: &[u8], spec: &DialectSpec) {
    // 16-byte values are almost always identifiers.
    if let Ok(id) = Uuid::from_slice(bytes) {
        out.push('\'');
        out.push_str(&id.hyphenated().to_string());
        out.push('\'');
        return;
    }

    let encoded = hex::encode(bytes);
    match spec.binary_style {
        BinaryStyle::EscapedString => {
            out.push_str("'\\x");
            out.push_str(&encoded);
            out.push('\'');
        }
        BinaryStyle::ZeroX => {
            out.push_str("0x");
            out.push_str(&encoded);
        }
        BinaryStyle::XQuoted => {
            out.push_str("x'");
            out.push_str(&encoded);
            out.push('\'');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn test_null_is_dialect_independent() {
        for dialect in Dialect::ALL {
            assert_eq!(render(&Value::Null, dialect), "NULL");
        }
    }

    #[test]
    fn test_bool_spelling() {
        assert_eq!(render(&Value::Bool(true), Dialect::Postgres), "TRUE");
        assert_eq!(render(&Value::Bool(false), Dialect::MySql), "FALSE");
        assert_eq!(render(&Value::Bool(true), Dialect::Tds), "1");
        assert_eq!(render(&Value::Bool(false), Dialect::Tds), "0");
    }

    #[test]
    fn test_numbers_unquoted_and_untouched() {
        assert_eq!(render(&Value::Int(-42), Dialect::Postgres), "-42");
        assert_eq!(
            render(&Value::Decimal("12.3400".to_string()), Dialect::Postgres),
            "12.3400"
        );
        assert_eq!(render(&Value::Double(1.5), Dialect::MySql), "1.5");
        assert_eq!(render(&Value::Double(f64::NAN), Dialect::Postgres), "'NaN'");
        assert_eq!(
            render(&Value::Double(f64::NEG_INFINITY), Dialect::Postgres),
            "'-Infinity'"
        );
    }

    #[test]
    fn test_text_doubles_single_quotes_only() {
        assert_eq!(
            render(&Value::Text("it's \"here\"\n".to_string()), Dialect::Postgres),
            "'it''s \"here\"\n'"
        );
        assert_eq!(quote_text(""), "''");
    }

    #[test]
    fn test_sixteen_bytes_render_as_uuid() {
        let bytes = Uuid::parse_str("5f833165-b0d4-4d56-b21f-500d29bd94ae")
            .unwrap()
            .as_bytes()
            .to_vec();
        for dialect in Dialect::ALL {
            assert_eq!(
                render(&Value::Bytes(bytes.clone()), dialect),
                "'5f833165-b0d4-4d56-b21f-500d29bd94ae'"
            );
        }
    }

    #[test]
    fn test_other_bytes_render_as_hex() {
        let bytes = Value::Bytes(vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(render(&bytes, Dialect::Postgres), "'\\xdeadbeef'");
        assert_eq!(render(&bytes, Dialect::Tds), "0xdeadbeef");
        assert_eq!(render(&bytes, Dialect::MySql), "x'deadbeef'");
        assert_eq!(render(&Value::Bytes(vec![]), Dialect::MySql), "x''");
    }

    #[test]
    fn test_temporal_values_are_quoted_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let ts = date.and_hms_opt(10, 30, 0).unwrap();
        let ts_frac = date.and_hms_milli_opt(10, 30, 0, 250).unwrap();

        assert_eq!(render(&Value::Date(date), Dialect::Postgres), "'2024-01-15'");
        assert_eq!(render(&Value::Time(ts.time()), Dialect::Postgres), "'10:30:00'");
        assert_eq!(
            render(&Value::Timestamp(ts), Dialect::Postgres),
            "'2024-01-15T10:30:00'"
        );
        assert_eq!(
            render(&Value::Timestamp(ts_frac), Dialect::Postgres),
            "'2024-01-15T10:30:00.250'"
        );
        let utc = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(
            render(&Value::TimestampTz(utc), Dialect::Tds),
            "'2024-01-15T10:30:00+00:00'"
        );
    }

    #[test]
    fn test_json_is_quoted_compact() {
        let json = serde_json::json!({"name": "O'Brien"});
        assert_eq!(
            render(&Value::Json(json), Dialect::Postgres),
            "'{\"name\":\"O''Brien\"}'"
        );
    }

    #[test]
    fn test_arrays_by_dialect() {
        let arr = Value::Array(vec![Value::Int(1), Value::Text("a".to_string())]);
        assert_eq!(render(&arr, Dialect::Postgres), "ARRAY[1, 'a']");
        assert_eq!(render(&arr, Dialect::MySql), "(1, 'a')");
        assert_eq!(render(&Value::Array(vec![]), Dialect::Postgres), "ARRAY[]");
    }

    #[test]
    fn test_nested_composites() {
        let v = Value::Row(vec![
            Value::Int(1),
            Value::Array(vec![Value::Row(vec![Value::Null, Value::Bool(true)])]),
        ]);
        assert_eq!(render(&v, Dialect::Postgres), "(1, ARRAY[(NULL, TRUE)])");
        assert_eq!(render(&v, Dialect::Tds), "(1, ((NULL, 1)))");
    }

    #[test]
    fn test_opaque_fallback_marker() {
        let v = Value::Opaque {
            type_name: "Geometry".to_string(),
            repr: "POINT(1 2)".to_string(),
        };
        assert_eq!(render(&v, Dialect::Postgres), "<Geometry: POINT(1 2)>");
    }
}
