//! Symbols and scopes (`spec.md` §3, §4.5).

use std::rc::Rc;

use crate::interner::Name;
use crate::types::DecafType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Scalar,
    Array,
    Function,
}

/// One declared name in a scope.
///
/// `ty` is the value type for scalars/arrays and the return type for
/// functions. `array_length` is meaningless for scalars and functions (kept
/// at 1 for scalars, matching `spec.md`'s "array_length (≥ 1; 1 when
/// scalar)"). `params` is populated only for functions.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub name: Name,
    pub ty: DecafType,
    pub array_length: i64,
    pub params: Vec<(Name, DecafType)>,
}

impl Symbol {
    pub fn scalar(name: Name, ty: DecafType) -> Self {
        Symbol { kind: SymbolKind::Scalar, name, ty, array_length: 1, params: Vec::new() }
    }

    pub fn array(name: Name, ty: DecafType, array_length: i64) -> Self {
        Symbol { kind: SymbolKind::Array, name, ty, array_length, params: Vec::new() }
    }

    pub fn function(name: Name, return_type: DecafType, params: Vec<(Name, DecafType)>) -> Self {
        Symbol { kind: SymbolKind::Function, name, ty: return_type, array_length: 1, params }
    }
}

/// One lexical scope: an ordered list of local symbols plus a link to the
/// enclosing scope.
///
/// The local list intentionally allows two symbols with the same name to
/// coexist — `spec.md` §4.6 requires a later pass to detect and report every
/// duplicate, which means the builder must not silently overwrite one
/// declaration with another the way an associative map would.
#[derive(Debug, Default)]
pub struct SymbolTable {
    locals: Vec<Symbol>,
    parent: Option<Rc<std::cell::RefCell<SymbolTable>>>,
}

impl SymbolTable {
    pub fn new(parent: Option<Rc<std::cell::RefCell<SymbolTable>>>) -> Self {
        SymbolTable { locals: Vec::new(), parent }
    }

    pub fn insert(&mut self, symbol: Symbol) {
        self.locals.push(symbol);
    }

    pub fn locals(&self) -> &[Symbol] {
        &self.locals
    }

    pub fn parent(&self) -> Option<Rc<std::cell::RefCell<SymbolTable>>> {
        self.parent.clone()
    }

    /// The first local symbol with this name, if any.
    pub fn find_local(&self, name: Name) -> Option<&Symbol> {
        self.locals.iter().find(|s| s.name == name)
    }

    /// Every name that occurs more than once among the local symbols,
    /// each reported exactly once (`spec.md` §4.6 "Duplicate check").
    pub fn duplicate_names(&self) -> Vec<Name> {
        let mut seen = Vec::new();
        let mut reported = Vec::new();
        for symbol in &self.locals {
            if seen.contains(&symbol.name) {
                if !reported.contains(&symbol.name) {
                    reported.push(symbol.name);
                }
            } else {
                seen.push(symbol.name);
            }
        }
        reported
    }
}
