//! The visitor engine (`spec.md` §4.3).
//!
//! `Visitor` is a capability set of per-variant pre/post callbacks, with an
//! extra "in" callback on `BinaryOp`, each defaulting to a no-op — the same
//! shape as the teacher's `Visitor` trait, adapted so every variant gets an
//! independent pre *and* post hook rather than a single overridable
//! `visit_x` entry point (every pass this workspace has needs full,
//! unconditional traversal; none needs to skip or reorder subtrees the way
//! the teacher's predicate validator does).
//!
//! [`walk`] is the single fixed traversal driver; the order it encodes is
//! not a visitor responsibility; it is identical across every pass that
//! exists in this crate. `on_enter` is fired for every node/parent edge
//! before the node's own `pre_*` hook, letting cross-cutting structural
//! passes (`decorate`) avoid overriding all fourteen `pre_*` methods for a
//! single piece of bookkeeping.

use decaf_ast::{Node, NodeKind};

#[allow(unused_variables)]
pub trait Visitor {
    /// Fired for every node before its own `pre_*` hook, with its parent
    /// (`None` only for the root).
    fn on_enter(&mut self, node: &Node, parent: Option<&Node>) {}

    fn pre_program(&mut self, node: &Node) {}
    fn post_program(&mut self, node: &Node) {}

    fn pre_var_decl(&mut self, node: &Node) {}
    fn post_var_decl(&mut self, node: &Node) {}

    fn pre_func_decl(&mut self, node: &Node) {}
    fn post_func_decl(&mut self, node: &Node) {}

    fn pre_block(&mut self, node: &Node) {}
    fn post_block(&mut self, node: &Node) {}

    fn pre_assignment(&mut self, node: &Node) {}
    fn post_assignment(&mut self, node: &Node) {}

    fn pre_conditional(&mut self, node: &Node) {}
    fn post_conditional(&mut self, node: &Node) {}

    fn pre_while_loop(&mut self, node: &Node) {}
    fn post_while_loop(&mut self, node: &Node) {}

    fn pre_return(&mut self, node: &Node) {}
    fn post_return(&mut self, node: &Node) {}

    fn pre_break(&mut self, node: &Node) {}
    fn post_break(&mut self, node: &Node) {}

    fn pre_continue(&mut self, node: &Node) {}
    fn post_continue(&mut self, node: &Node) {}

    fn pre_binary_op(&mut self, node: &Node) {}
    fn in_binary_op(&mut self, node: &Node) {}
    fn post_binary_op(&mut self, node: &Node) {}

    fn pre_unary_op(&mut self, node: &Node) {}
    fn post_unary_op(&mut self, node: &Node) {}

    fn pre_location(&mut self, node: &Node) {}
    fn post_location(&mut self, node: &Node) {}

    fn pre_func_call(&mut self, node: &Node) {}
    fn post_func_call(&mut self, node: &Node) {}

    fn pre_literal(&mut self, node: &Node) {}
    fn post_literal(&mut self, node: &Node) {}
}

fn enter<V: Visitor>(visitor: &mut V, node: &Node, parent: Option<&Node>) {
    visitor.on_enter(node, parent);
}

/// Walk `node` in the fixed pre/in/post order `spec.md` §4.3 defines,
/// invoking `visitor`'s callbacks. `parent` is the node whose own walk call
/// is recursing into this one (`None` at the root).
pub fn walk<V: Visitor>(visitor: &mut V, node: &Node, parent: Option<&Node>) {
    enter(visitor, node, parent);
    match &node.kind {
        NodeKind::Program { vars, funcs } => {
            visitor.pre_program(node);
            for var in vars.iter() {
                walk(visitor, var, Some(node));
            }
            for func in funcs.iter() {
                walk(visitor, func, Some(node));
            }
            visitor.post_program(node);
        }
        NodeKind::VarDecl { .. } => {
            visitor.pre_var_decl(node);
            visitor.post_var_decl(node);
        }
        NodeKind::FuncDecl { body, .. } => {
            visitor.pre_func_decl(node);
            walk(visitor, body, Some(node));
            visitor.post_func_decl(node);
        }
        NodeKind::Block { vars, stmts } => {
            visitor.pre_block(node);
            for var in vars.iter() {
                walk(visitor, var, Some(node));
            }
            for stmt in stmts.iter() {
                walk(visitor, stmt, Some(node));
            }
            visitor.post_block(node);
        }
        NodeKind::Assignment { location, value } => {
            visitor.pre_assignment(node);
            walk(visitor, location, Some(node));
            walk(visitor, value, Some(node));
            visitor.post_assignment(node);
        }
        NodeKind::Conditional { cond, then_block, else_block } => {
            visitor.pre_conditional(node);
            walk(visitor, cond, Some(node));
            walk(visitor, then_block, Some(node));
            if let Some(else_block) = else_block {
                walk(visitor, else_block, Some(node));
            }
            visitor.post_conditional(node);
        }
        NodeKind::WhileLoop { cond, body } => {
            visitor.pre_while_loop(node);
            walk(visitor, cond, Some(node));
            walk(visitor, body, Some(node));
            visitor.post_while_loop(node);
        }
        NodeKind::Return { value } => {
            visitor.pre_return(node);
            if let Some(value) = value {
                walk(visitor, value, Some(node));
            }
            visitor.post_return(node);
        }
        NodeKind::Break => {
            visitor.pre_break(node);
            visitor.post_break(node);
        }
        NodeKind::Continue => {
            visitor.pre_continue(node);
            visitor.post_continue(node);
        }
        NodeKind::BinaryOp { left, right, .. } => {
            visitor.pre_binary_op(node);
            walk(visitor, left, Some(node));
            visitor.in_binary_op(node);
            walk(visitor, right, Some(node));
            visitor.post_binary_op(node);
        }
        NodeKind::UnaryOp { child, .. } => {
            visitor.pre_unary_op(node);
            walk(visitor, child, Some(node));
            visitor.post_unary_op(node);
        }
        NodeKind::Location { index, .. } => {
            visitor.pre_location(node);
            if let Some(index) = index {
                walk(visitor, index, Some(node));
            }
            visitor.post_location(node);
        }
        NodeKind::FuncCall { args, .. } => {
            visitor.pre_func_call(node);
            for arg in args.iter() {
                walk(visitor, arg, Some(node));
            }
            visitor.post_func_call(node);
        }
        NodeKind::Literal(_) => {
            visitor.pre_literal(node);
            visitor.post_literal(node);
        }
    }
}

/// Walk a freshly-built tree from its root.
pub fn walk_root<V: Visitor>(visitor: &mut V, root: &Node) {
    walk(visitor, root, None);
}
