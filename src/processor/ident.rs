//! Segment name -> Java identifier.

use crate::error::{Error, Result};

/// Turns `Prep_Artifacts_1` into `prepArtifacts1`.
///
/// Splits on runs of `_` and whitespace, lower-cases the first word and
/// capitalizes the rest (first letter upper, remainder lower). Names that
/// contain nothing but separators are rejected.
pub fn identifier(name: &str) -> Result<String> {
    let mut words = name
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty());

    let first = words
        .next()
        .ok_or_else(|| Error::malformed(format!("segment name `{name}` has no usable characters")))?;

    let mut out = first.to_lowercase();
    for word in words {
        out.push_str(&capitalize(word));
    }
    Ok(out)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
