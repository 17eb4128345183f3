//! Parameter inlining.
//!
//! Rebuilds a prepared statement with each placeholder replaced by the
//! rendered literal of the parameter it refers to.
//!
//! # Example
//!
//! ```rust
//! use querylog_console::{Color, inline_params_plain};
//! use querylog_core::{Dialect, Value};
//!
//! let sql = inline_params_plain(
//!     "SELECT * FROM users WHERE name = $1 AND active = $2",
//!     &[Value::from("alice"), Value::from(true)],
//!     Dialect::Postgres,
//! )
//! .unwrap();
//! assert_eq!(sql, "SELECT * FROM users WHERE name = 'alice' AND active = TRUE");
//! ```

use querylog_core::{Dialect, Error, Result, Value, render, scan};

use crate::color::{Color, annotate};

/// Inline parameters into `statement`, coloring each literal.
///
/// Every literal is wrapped in the parameter accent color followed by the
/// escape for `restore`. Text outside placeholders is copied byte for byte.
/// A placeholder referring to a parameter that was not bound fails with
/// [`Error::ParamCountMismatch`]; unused parameters are ignored.
pub fn inline_params(
    statement: &str,
    params: &[Value],
    restore: Color,
    dialect: Dialect,
) -> Result<String> {
    inline_with(statement, params, dialect, |literal| annotate(literal, restore))
}

/// Inline parameters into `statement` without any color escapes.
pub fn inline_params_plain(statement: &str, params: &[Value], dialect: Dialect) -> Result<String> {
    inline_with(statement, params, dialect, str::to_string)
}

fn inline_with<F>(statement: &str, params: &[Value], dialect: Dialect, decorate: F) -> Result<String>
where
    F: Fn(&str) -> String,
{
    let occurrences = scan(statement, dialect)?;
    if let Some(bad) = occurrences.iter().find(|occ| occ.index >= params.len()) {
        return Err(Error::ParamCountMismatch {
            index: bad.index,
            params: params.len(),
        });
    }

    // Reused placeholders render their parameter once.
    let mut rendered: Vec<Option<String>> = vec![None; params.len()];
    let mut out = String::with_capacity(statement.len() + occurrences.len() * 16);
    let mut cursor = 0;

    for occ in &occurrences {
        out.push_str(&statement[cursor..occ.span.start]);
        let literal = rendered[occ.index]
            .get_or_insert_with(|| decorate(&render(&params[occ.index], dialect)));
        out.push_str(literal);
        cursor = occ.span.end;
    }
    out.push_str(&statement[cursor..]);

    Ok(out)
}
