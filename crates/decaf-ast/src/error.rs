//! Errors the AST builder can raise while constructing a tree.
//!
//! `spec.md` §6 places string-length and similar shape constraints on the
//! upstream parser's output ("it may assume that string lengths are
//! ≤ 255"); since this workspace has no parser, the builder (`SPEC_FULL.md`
//! §A.4) is the only thing that can violate them, so it is the only
//! fallible-construction path in the crate.

#[derive(Debug, Clone, thiserror::Error)]
pub enum BuildError {
    #[error("identifier {0:?} exceeds the 255-character limit")]
    NameTooLong(String),
}
