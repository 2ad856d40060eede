//! Symbol-table builder (`spec.md` §4.5).
//!
//! Maintains the current scope as an explicit stack (`spec.md` §9, "Scope
//! stack during symbol-table construction": "an explicit stack of scope
//! handles rather than... a reassignable pointer field, so pop is
//! unambiguous").

use std::cell::RefCell;
use std::rc::Rc;

use decaf_ast::{Interner, Name, Node, NodeKind, Symbol, SymbolTable};

use crate::visitor::{Visitor, walk_root};

type BuiltinParam = (&'static str, decaf_ast::DecafType);
type Builtin = (&'static str, decaf_ast::DecafType, &'static [BuiltinParam]);

const BUILTINS: &[Builtin] = &[
    ("print_int", decaf_ast::DecafType::Void, &[("x", decaf_ast::DecafType::Int)]),
    ("print_bool", decaf_ast::DecafType::Void, &[("x", decaf_ast::DecafType::Bool)]),
    ("print_str", decaf_ast::DecafType::Void, &[("x", decaf_ast::DecafType::Str)]),
];

struct SymbolTableBuilder<'i> {
    interner: &'i mut Interner,
    stack: Vec<Rc<RefCell<SymbolTable>>>,
}

impl<'i> SymbolTableBuilder<'i> {
    fn push_scope(&mut self, node: &Node) -> Rc<RefCell<SymbolTable>> {
        let parent = self.stack.last().cloned();
        let table = Rc::new(RefCell::new(SymbolTable::new(parent)));
        node.attrs.set_symbol_table(table.clone());
        self.stack.push(table.clone());
        table
    }

    fn pop_scope(&mut self) {
        self.stack.pop();
    }

    fn current(&self) -> Rc<RefCell<SymbolTable>> {
        self.stack.last().expect("scope stack empty").clone()
    }
}

impl Visitor for SymbolTableBuilder<'_> {
    fn pre_program(&mut self, node: &Node) {
        let root = self.push_scope(node);

        for (name, return_type, params) in BUILTINS {
            let name = self.interner.intern(name);
            let params = params.iter().map(|(n, ty)| (self.interner.intern(n), *ty)).collect();
            root.borrow_mut().insert(Symbol::function(name, *return_type, params));
        }

        let NodeKind::Program { funcs, .. } = &node.kind else { unreachable!() };
        for func in funcs.iter() {
            let NodeKind::FuncDecl { name, return_type, params, .. } = &func.kind else {
                unreachable!()
            };
            let params: Vec<(Name, _)> = params.iter().copied().collect();
            root.borrow_mut().insert(Symbol::function(*name, *return_type, params));
        }
    }

    fn post_program(&mut self, _node: &Node) {
        self.pop_scope();
    }

    fn pre_func_decl(&mut self, node: &Node) {
        let scope = self.push_scope(node);
        let NodeKind::FuncDecl { params, .. } = &node.kind else { unreachable!() };
        for (name, ty) in params.iter() {
            scope.borrow_mut().insert(Symbol::scalar(*name, *ty));
        }
    }

    fn post_func_decl(&mut self, _node: &Node) {
        self.pop_scope();
    }

    fn pre_block(&mut self, node: &Node) {
        self.push_scope(node);
    }

    fn post_block(&mut self, _node: &Node) {
        self.pop_scope();
    }

    fn pre_var_decl(&mut self, node: &Node) {
        let NodeKind::VarDecl { name, ty, is_array, array_length } = &node.kind else {
            unreachable!()
        };
        let symbol = if *is_array {
            Symbol::array(*name, *ty, *array_length)
        } else {
            Symbol::scalar(*name, *ty)
        };
        self.current().borrow_mut().insert(symbol);
    }
}

/// Build the scope tree over `root`, attaching a `symbolTable` attribute to
/// every `Program`/`FuncDecl`/`Block` node.
///
/// This pass only needs the visitor's own descent, not the `parent`
/// attribute, but [`crate::analyze::run_prerequisites`] still runs it after
/// `SetParent`/`CalcDepth`, matching `spec.md` §6's prerequisite contract
/// for the workspace as a whole.
pub fn build(root: &Node, interner: &mut Interner) {
    let mut builder = SymbolTableBuilder { interner, stack: Vec::new() };
    walk_root(&mut builder, root);
}

/// Walk up from `node` until an ancestor with a `symbolTable` attribute is
/// found, per `spec.md` §4.6 "Symbol resolution".
///
/// # Panics
/// Panics if no ancestor carries a `symbolTable` attribute — a prerequisite
/// violation (`spec.md` §6), not a diagnostic.
pub fn enclosing_scope(node: &Node) -> Rc<RefCell<SymbolTable>> {
    let mut current = node.attrs.parent();
    while let Some(n) = current {
        if n.attrs.has_symbol_table() {
            return n.attrs.symbol_table();
        }
        current = n.attrs.parent();
    }
    panic!("no enclosing scope for node: symbol-table builder prerequisite not run")
}

/// Resolve `name` starting from `node`'s enclosing scope and walking up
/// scope parents. Returns the first match, preserving lexical shadowing.
pub fn resolve(node: &Node, name: Name) -> Option<Symbol> {
    let mut scope = Some(enclosing_scope(node));
    while let Some(table) = scope {
        let table_ref = table.borrow();
        if let Some(symbol) = table_ref.find_local(name) {
            return Some(symbol.clone());
        }
        scope = table_ref.parent();
    }
    None
}
