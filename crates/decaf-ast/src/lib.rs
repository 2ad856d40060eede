//! AST, attribute, and symbol data model for the Decaf semantic analyzer.
//!
//! This crate is the dependency-free leaf of the workspace: it defines the
//! tree shape the upstream parser is assumed to hand over (`spec.md` §3),
//! the attribute store each pass decorates it with (§4.1), and the symbol
//! model the scope builder populates (§4.5). It has no opinion on how the
//! tree gets traversed or checked — that is `decaf-sema`.

pub mod attrs;
pub mod builder;
pub mod error;
pub mod interner;
pub mod list;
pub mod node;
pub mod symbol;
pub mod types;

pub use builder::{Builder, Tree};
pub use error::BuildError;
pub use interner::{Interner, Name};
pub use list::{NodeList, ParameterList};
pub use node::{BinOp, Literal, Node, NodeData, NodeKind, UnOp};
pub use symbol::{Symbol, SymbolKind, SymbolTable};
pub use types::DecafType;
