//! A Rust-native AST builder.
//!
//! `spec.md`'s analyzer consumes a tree handed to it by an upstream parser,
//! which is explicitly out of scope here (`spec.md` §1 "Out of scope").
//! This builder plays that role for tests: it constructs exactly the trees
//! `spec.md` §8's scenarios describe, directly, without a lexer or grammar.

use std::rc::Rc;

use crate::attrs::Attributes;
use crate::error::BuildError;
use crate::interner::{Interner, Name};
use crate::list::{NodeList, ParameterList};
use crate::node::{BinOp, Literal, Node, NodeData, NodeKind, UnOp};
use crate::types::DecafType;

const MAX_NAME_LEN: usize = 255;

/// An analyzed (or analysis-ready) tree together with the interner that
/// produced its identifiers — needed to turn a [`crate::interner::Name`]
/// back into text when rendering a diagnostic message.
pub struct Tree {
    pub root: Node,
    pub interner: Interner,
}

#[derive(Default)]
pub struct Builder {
    interner: Interner,
}

fn node(line: u32, kind: NodeKind) -> Node {
    Rc::new(NodeData { line, attrs: Attributes::default(), kind })
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&mut self, text: &str) -> Result<Name, BuildError> {
        if text.len() > MAX_NAME_LEN {
            return Err(BuildError::NameTooLong(text.to_owned()));
        }
        Ok(self.interner.intern(text))
    }

    pub fn int_lit(&mut self, line: u32, value: i64) -> Node {
        node(line, NodeKind::Literal(Literal::Int(value)))
    }

    pub fn bool_lit(&mut self, line: u32, value: bool) -> Node {
        node(line, NodeKind::Literal(Literal::Bool(value)))
    }

    pub fn str_lit(&mut self, line: u32, value: impl Into<String>) -> Node {
        node(line, NodeKind::Literal(Literal::Str(value.into())))
    }

    pub fn location(&mut self, line: u32, name: &str) -> Result<Node, BuildError> {
        let name = self.name(name)?;
        Ok(node(line, NodeKind::Location { name, index: None }))
    }

    pub fn indexed_location(&mut self, line: u32, name: &str, index: Node) -> Result<Node, BuildError> {
        let name = self.name(name)?;
        Ok(node(line, NodeKind::Location { name, index: Some(index) }))
    }

    pub fn binary(&mut self, line: u32, op: BinOp, left: Node, right: Node) -> Node {
        node(line, NodeKind::BinaryOp { op, left, right })
    }

    pub fn unary(&mut self, line: u32, op: UnOp, child: Node) -> Node {
        node(line, NodeKind::UnaryOp { op, child })
    }

    pub fn func_call(&mut self, line: u32, name: &str, args: Vec<Node>) -> Result<Node, BuildError> {
        let name = self.name(name)?;
        Ok(node(line, NodeKind::FuncCall { name, args: args.into_iter().collect::<NodeList>() }))
    }

    pub fn assignment(&mut self, line: u32, location: Node, value: Node) -> Node {
        node(line, NodeKind::Assignment { location, value })
    }

    pub fn var_decl(
        &mut self,
        line: u32,
        name: &str,
        ty: DecafType,
        array_length: Option<i64>,
    ) -> Result<Node, BuildError> {
        let name = self.name(name)?;
        let (is_array, array_length) = match array_length {
            Some(len) => (true, len),
            None => (false, 1),
        };
        Ok(node(line, NodeKind::VarDecl { name, ty, is_array, array_length }))
    }

    pub fn block(&mut self, line: u32, vars: Vec<Node>, stmts: Vec<Node>) -> Node {
        node(
            line,
            NodeKind::Block {
                vars: vars.into_iter().collect::<NodeList>(),
                stmts: stmts.into_iter().collect::<NodeList>(),
            },
        )
    }

    pub fn conditional(&mut self, line: u32, cond: Node, then_block: Node, else_block: Option<Node>) -> Node {
        node(line, NodeKind::Conditional { cond, then_block, else_block })
    }

    pub fn while_loop(&mut self, line: u32, cond: Node, body: Node) -> Node {
        node(line, NodeKind::WhileLoop { cond, body })
    }

    pub fn ret(&mut self, line: u32, value: Option<Node>) -> Node {
        node(line, NodeKind::Return { value })
    }

    pub fn brk(&mut self, line: u32) -> Node {
        node(line, NodeKind::Break)
    }

    pub fn cont(&mut self, line: u32) -> Node {
        node(line, NodeKind::Continue)
    }

    pub fn func_decl(
        &mut self,
        line: u32,
        name: &str,
        return_type: DecafType,
        params: Vec<(&str, DecafType)>,
        body: Node,
    ) -> Result<Node, BuildError> {
        let name = self.name(name)?;
        let mut param_list = ParameterList::new();
        for (param_name, ty) in params {
            let param_name = self.name(param_name)?;
            param_list.push(param_name, ty);
        }
        Ok(node(line, NodeKind::FuncDecl { name, return_type, params: param_list, body }))
    }

    /// Consumes the builder, producing the program root plus the interner
    /// needed to resolve its identifiers.
    pub fn program(self, vars: Vec<Node>, funcs: Vec<Node>) -> Tree {
        let root = node(
            1,
            NodeKind::Program {
                vars: vars.into_iter().collect::<NodeList>(),
                funcs: funcs.into_iter().collect::<NodeList>(),
            },
        );
        Tree { root, interner: self.interner }
    }
}
