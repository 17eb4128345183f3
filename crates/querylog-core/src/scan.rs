//! Placeholder scanning.
//!
//! Locates parameter placeholders in raw statement text. Scanning is purely
//! lexical: it does not know about string literals or comments, so a
//! marker-shaped substring inside `'...'` or `-- ...` is reported like any
//! other placeholder. Callers already depend on this output, so it stays.

use std::collections::HashMap;
use std::ops::Range;
use std::sync::{OnceLock, PoisonError, RwLock};

use regex::Regex;

use crate::dialect::{Dialect, Numbering};
use crate::error::Result;

/// One placeholder found in a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderOccurrence {
    /// Byte range of the placeholder text, marker included.
    pub span: Range<usize>,
    /// Zero-based index of the parameter it refers to.
    pub index: usize,
}

/// Compiled `<marker><digits>` patterns keyed by marker.
fn numbered_patterns() -> &'static RwLock<HashMap<char, Regex>> {
    static CACHE: OnceLock<RwLock<HashMap<char, Regex>>> = OnceLock::new();
    CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

fn numbered_pattern(marker: char) -> Result<Regex> {
    {
        let cache = numbered_patterns()
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(regex) = cache.get(&marker) {
            return Ok(regex.clone());
        }
    }

    let pattern = format!("{}([0-9]+)", regex::escape(&marker.to_string()));
    let regex = Regex::new(&pattern)?;
    numbered_patterns()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(marker, regex.clone());
    Ok(regex)
}

/// Find every placeholder in `statement`, ordered by position.
///
/// For numbered dialects the index is the placeholder number minus one, so
/// `$2 ... $1 ... $2` yields indices `1, 0, 1`. A number of zero is not a
/// placeholder. For sequential dialects the k-th marker gets index `k - 1`
/// and any digits after it are left in the text.
pub fn scan(statement: &str, dialect: Dialect) -> Result<Vec<PlaceholderOccurrence>> {
    let spec = dialect.spec();
    match spec.numbering {
        Numbering::Numbered => {
            let regex = numbered_pattern(spec.marker)?;
            let mut found = Vec::new();
            for caps in regex.captures_iter(statement) {
                let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) else {
                    continue;
                };
                // Numbers too large for usize can never match a bound parameter.
                let number = digits.as_str().parse::<usize>().unwrap_or(usize::MAX);
                if number == 0 {
                    continue;
                }
                found.push(PlaceholderOccurrence {
                    span: whole.range(),
                    index: number - 1,
                });
            }
            Ok(found)
        }
        Numbering::Sequential => Ok(statement
            .match_indices(spec.marker)
            .enumerate()
            .map(|(index, (start, marker))| PlaceholderOccurrence {
                span: start..start + marker.len(),
                index,
            })
            .collect()),
    }
}

/// Number of distinct parameters a statement refers to.
///
/// For numbered dialects this is the highest placeholder number, for
/// sequential dialects the marker count.
pub fn required_params(statement: &str, dialect: Dialect) -> Result<usize> {
    Ok(scan(statement, dialect)?
        .iter()
        .map(|occ| occ.index.saturating_add(1))
        .max()
        .unwrap_or(0))
}
