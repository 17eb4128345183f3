//! Shared events for querylog integration tests.

use querylog::{Dialect, QueryEvent, Value};

pub const POST_ID: &str = "5f833165-b0d4-4d56-b21f-500d29bd94ae";

/// The `UPDATE "posts"` statement written with each dialect's markers.
pub fn update_post(dialect: Dialect) -> QueryEvent {
    let (a, b) = match dialect {
        Dialect::Postgres => ("$1", "$2"),
        Dialect::Tds => ("@1", "@2"),
        Dialect::MySql => ("?", "?"),
    };
    let id = uuid::Uuid::parse_str(POST_ID).expect("valid uuid");
    QueryEvent::new(
        format!("UPDATE \"posts\" SET \"string\" = {a} WHERE \"id\" = {b} RETURNING \"id\""),
        dialect,
    )
    .params(vec![Value::Null, Value::from(id)])
    .source("posts")
}

/// A select with one parameter of each scalar kind.
pub fn mixed_select() -> QueryEvent {
    let ts = chrono::NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|d| d.and_hms_opt(10, 30, 0))
        .expect("valid timestamp");
    QueryEvent::new(
        "SELECT * FROM events WHERE kind = $1 AND at > $2 AND tags && $3 AND payload = $4",
        Dialect::Postgres,
    )
    .bind("sign'up")
    .bind(ts)
    .bind(Value::array(["a", "b"]))
    .bind(Value::Bytes(vec![0x00, 0xff]))
}
