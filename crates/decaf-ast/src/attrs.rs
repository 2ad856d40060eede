//! The attribute store (`spec.md` §4.1).
//!
//! Per design note §9(a), this is a fixed struct with one optional field per
//! known attribute key rather than a generic string-keyed map: the key set
//! (`parent`, `depth`, `symbolTable`, `type`) is small, closed, and known at
//! compile time. Every field gets the minimal interior-mutability cell its
//! type requires, since attributes are written by later passes over a tree
//! that is otherwise shared through `Rc`. Reading an attribute that hasn't
//! been written yet is a programmer error (a precondition violation, per
//! `spec.md` §6), signaled by panicking rather than returning an option the
//! caller is likely to unwrap anyway.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::node::{Node, NodeData};
use crate::symbol::SymbolTable;
use crate::types::DecafType;

#[derive(Default)]
pub struct Attributes {
    parent: RefCell<Option<Weak<NodeData>>>,
    depth: Cell<Option<u32>>,
    symbol_table: RefCell<Option<Rc<RefCell<SymbolTable>>>>,
    ty: Cell<Option<DecafType>>,
}

impl Attributes {
    pub fn has_parent(&self) -> bool {
        self.parent.borrow().is_some()
    }

    /// The enclosing node, or `None` for the root or before `SetParent` has run.
    pub fn parent(&self) -> Option<Node> {
        self.parent.borrow().as_ref().and_then(Weak::upgrade)
    }

    pub fn set_parent(&self, parent: &Node) {
        *self.parent.borrow_mut() = Some(Rc::downgrade(parent));
    }

    pub fn has_depth(&self) -> bool {
        self.depth.get().is_some()
    }

    pub fn depth(&self) -> u32 {
        self.depth
            .get()
            .expect("depth attribute read before CalcDepth ran")
    }

    pub fn set_depth(&self, depth: u32) {
        self.depth.set(Some(depth));
    }

    pub fn has_symbol_table(&self) -> bool {
        self.symbol_table.borrow().is_some()
    }

    pub fn symbol_table(&self) -> Rc<RefCell<SymbolTable>> {
        self.symbol_table
            .borrow()
            .clone()
            .expect("symbolTable attribute read before the symbol-table builder ran")
    }

    pub fn set_symbol_table(&self, table: Rc<RefCell<SymbolTable>>) {
        *self.symbol_table.borrow_mut() = Some(table);
    }

    pub fn has_ty(&self) -> bool {
        self.ty.get().is_some()
    }

    pub fn ty(&self) -> DecafType {
        self.ty.get().expect("type attribute read before analysis ran")
    }

    pub fn set_ty(&self, ty: DecafType) {
        self.ty.set(Some(ty));
    }
}
