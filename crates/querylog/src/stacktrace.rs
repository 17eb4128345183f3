//! Condensed stack traces.
//!
//! A full call stack is far too noisy for a one-line query log, so only the
//! first few frames from application code are kept.

/// Arrow printed before each kept frame.
pub const FRAME_MARKER: &str = "\u{21b3}";

/// Pick the frames worth showing.
///
/// Frames are scanned innermost first. With no prefixes every frame
/// qualifies; otherwise only frames starting with one of `prefixes`. At most
/// `depth` frames are returned.
pub fn condense<'a>(frames: &'a [String], prefixes: &[String], depth: usize) -> Vec<&'a str> {
    frames
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .filter(|f| prefixes.is_empty() || prefixes.iter().any(|p| f.starts_with(p.as_str())))
        .take(depth)
        .collect()
}

/// Render kept frames as a line suffix, e.g. ` ↳ app/users.rs:42`.
pub fn suffix(frames: &[&str]) -> String {
    let mut out = String::new();
    for frame in frames {
        out.push(' ');
        out.push_str(FRAME_MARKER);
        out.push(' ');
        out.push_str(frame);
    }
    out
}
