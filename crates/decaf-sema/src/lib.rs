//! Symbol-table construction and semantic analysis for Decaf.
//!
//! Given a tree built against `decaf-ast`, this crate runs the visitor
//! engine (`spec.md` §4.3), the structural decorators (§4.4), the
//! symbol-table builder (§4.5), and the semantic analyzer (§4.6), in that
//! order, producing an ordered diagnostic list (§4.7).

pub mod analyze;
pub mod decorate;
pub mod diagnostics;
pub mod options;
pub mod symtab;
pub mod visitor;

pub use analyze::{analyze, run_prerequisites};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use options::AnalysisOptions;
pub use visitor::{Visitor, walk, walk_root};
