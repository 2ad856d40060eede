//! Analysis options (`spec.md` §9 "Open questions").
//!
//! `spec.md` identifies a handful of rules its source drafts disagreed on
//! and asks implementations to "treat each rule as independently
//! toggleable in tests" rather than guess. This is a plain `Default`-deriving
//! struct, matching the teacher's own notion of configuration
//! (`plotnik-compiler::typegen::typescript::config::Config`) — there is no
//! file- or environment-loaded configuration layer anywhere in this
//! workspace, just like the teacher.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    /// Require a symbol named `main` to exist at program scope.
    pub require_main: bool,
    /// Require `main` to take no parameters.
    pub require_main_parameterless: bool,
    /// Require `main`'s return type to be `Int`.
    pub require_main_returns_int: bool,
    /// Report indexing a scalar variable as an error.
    pub forbid_scalar_indexing: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            require_main: true,
            require_main_parameterless: true,
            require_main_returns_int: true,
            forbid_scalar_indexing: true,
        }
    }
}
