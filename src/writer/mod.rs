//! Output stage: turns a `NormalizedPath` into source text.
pub mod format;
pub mod java;
