//! The semantic analyzer (`spec.md` §4.6).
//!
//! Threads the context `spec.md` describes (current function return type,
//! `in_loop`/`in_block`/`in_function` flags) as fields on the `Analyzer`
//! struct rather than as an extra argument on every `Visitor` method — see
//! `SPEC_FULL.md` §4.6 for why this departs from design note §9's literal
//! suggestion.

use decaf_ast::{DecafType, Interner, Literal, Node, NodeKind, UnOp};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::options::AnalysisOptions;
use crate::symtab;
use crate::visitor::{Visitor, walk_root};

struct Analyzer<'a> {
    interner: &'a Interner,
    options: &'a AnalysisOptions,
    diagnostics: Diagnostics,
    return_type: DecafType,
    in_loop: bool,
}

impl<'a> Analyzer<'a> {
    fn new(interner: &'a Interner, options: &'a AnalysisOptions) -> Self {
        Analyzer {
            interner,
            options,
            diagnostics: Diagnostics::new(),
            return_type: DecafType::Void,
            in_loop: false,
        }
    }

    fn name(&self, name: decaf_ast::Name) -> &str {
        self.interner.resolve(name)
    }

    fn check_duplicates(&mut self, scope: &decaf_ast::SymbolTable, line: u32) {
        for name in scope.duplicate_names() {
            let text = self.name(name).to_owned();
            self.diagnostics.report(DiagnosticKind::DuplicateSymbol, line).detail(text).emit();
        }
    }
}

impl Visitor for Analyzer<'_> {
    fn pre_program(&mut self, node: &Node) {
        let scope = node.attrs.symbol_table();
        let scope = scope.borrow();

        let main = find_by_text(&scope, self.interner, "main");
        match main {
            None => {
                if self.options.require_main {
                    self.diagnostics.report(DiagnosticKind::MissingMain, node.line).emit();
                }
            }
            Some(symbol) => {
                if symbol.kind != decaf_ast::SymbolKind::Function {
                    self.diagnostics.report(DiagnosticKind::MainNotFunction, node.line).emit();
                } else if self.options.require_main_parameterless && !symbol.params.is_empty() {
                    self.diagnostics.report(DiagnosticKind::MainHasParameters, node.line).emit();
                }
            }
        }

        self.check_duplicates(&scope, node.line);
    }

    fn post_program(&mut self, node: &Node) {
        let scope = node.attrs.symbol_table();
        let scope = scope.borrow();

        if let Some(symbol) = find_by_text(&scope, self.interner, "main")
            && symbol.kind == decaf_ast::SymbolKind::Function
            && self.options.require_main_returns_int
            && symbol.ty != DecafType::Int
        {
            self.diagnostics.report(DiagnosticKind::MainReturnNotInt, node.line).emit();
        }
    }

    fn pre_func_decl(&mut self, node: &Node) {
        let NodeKind::FuncDecl { return_type, .. } = &node.kind else { unreachable!() };
        self.return_type = *return_type;
    }

    fn post_func_decl(&mut self, node: &Node) {
        let scope = node.attrs.symbol_table();
        let scope = scope.borrow();
        self.check_duplicates(&scope, node.line);
    }

    fn post_block(&mut self, node: &Node) {
        let scope = node.attrs.symbol_table();
        let scope = scope.borrow();
        self.check_duplicates(&scope, node.line);
    }

    fn pre_var_decl(&mut self, node: &Node) {
        let NodeKind::VarDecl { ty, .. } = &node.kind else { unreachable!() };
        node.attrs.set_ty(*ty);
    }

    fn post_var_decl(&mut self, node: &Node) {
        let NodeKind::VarDecl { ty, is_array, array_length, .. } = &node.kind else {
            unreachable!()
        };
        if *ty == DecafType::Void {
            self.diagnostics.report(DiagnosticKind::VoidVariable, node.line).emit();
        }
        if *is_array {
            if *array_length < 1 {
                self.diagnostics.report(DiagnosticKind::InvalidArrayLength, node.line).emit();
            }
            let declared_globally = node
                .attrs
                .parent()
                .map(|p| matches!(p.kind, NodeKind::Program { .. }))
                .unwrap_or(false);
            if !declared_globally {
                self.diagnostics.report(DiagnosticKind::ArrayOutsideGlobalScope, node.line).emit();
            }
        }
    }

    fn pre_literal(&mut self, node: &Node) {
        let NodeKind::Literal(literal) = &node.kind else { unreachable!() };
        let ty = match literal {
            Literal::Int(_) => DecafType::Int,
            Literal::Bool(_) => DecafType::Bool,
            Literal::Str(_) => DecafType::Str,
        };
        node.attrs.set_ty(ty);
    }

    fn pre_location(&mut self, node: &Node) {
        let NodeKind::Location { name, .. } = &node.kind else { unreachable!() };
        match symtab::resolve(node, *name) {
            Some(symbol) => node.attrs.set_ty(symbol.ty),
            None => {
                node.attrs.set_ty(DecafType::Unknown);
                let text = self.name(*name).to_owned();
                self.diagnostics
                    .report(DiagnosticKind::UndefinedIdentifier, node.line)
                    .detail(text)
                    .emit();
            }
        }
    }

    fn post_location(&mut self, node: &Node) {
        let NodeKind::Location { name, index } = &node.kind else { unreachable!() };
        let Some(symbol) = symtab::resolve(node, *name) else { return };

        if symbol.kind == decaf_ast::SymbolKind::Array {
            match index {
                None => {
                    self.diagnostics.report(DiagnosticKind::MissingArrayIndex, node.line).emit();
                }
                Some(index) => {
                    let it = index.attrs.ty();
                    if it.is_known() && it != DecafType::Int {
                        self.diagnostics.report(DiagnosticKind::NonIntegerIndex, node.line).emit();
                    }
                }
            }
        } else if self.options.forbid_scalar_indexing && index.is_some() {
            self.diagnostics.report(DiagnosticKind::ScalarIndexed, node.line).emit();
        }
    }

    fn pre_func_call(&mut self, node: &Node) {
        let NodeKind::FuncCall { name, .. } = &node.kind else { unreachable!() };
        match symtab::resolve(node, *name) {
            Some(symbol) => node.attrs.set_ty(symbol.ty),
            None => {
                node.attrs.set_ty(DecafType::Unknown);
                let text = self.name(*name).to_owned();
                self.diagnostics
                    .report(DiagnosticKind::UndefinedFunction, node.line)
                    .detail(text)
                    .emit();
            }
        }
    }

    fn post_func_call(&mut self, node: &Node) {
        let NodeKind::FuncCall { name, args } = &node.kind else { unreachable!() };
        let Some(symbol) = symtab::resolve(node, *name) else { return };
        let text = self.name(*name).to_owned();

        if args.len() != symbol.params.len() {
            self.diagnostics
                .report(DiagnosticKind::ArgumentCountMismatch, node.line)
                .detail(text)
                .emit();
            return;
        }

        for (i, (arg, (_, param_ty))) in args.iter().zip(symbol.params.iter()).enumerate() {
            let at = arg.attrs.ty();
            if at.is_known() && at != *param_ty {
                self.diagnostics
                    .report(DiagnosticKind::ArgumentTypeMismatch, node.line)
                    .detail(format!("{} argument {}", text, i + 1))
                    .emit();
            }
        }
    }

    fn pre_binary_op(&mut self, node: &Node) {
        let NodeKind::BinaryOp { op, .. } = &node.kind else { unreachable!() };
        let ty = if op.is_logical() || op.is_equality() || op.is_relational() {
            DecafType::Bool
        } else {
            DecafType::Int
        };
        node.attrs.set_ty(ty);
    }

    fn post_binary_op(&mut self, node: &Node) {
        let NodeKind::BinaryOp { op, left, right } = &node.kind else { unreachable!() };
        let (lt, rt) = (left.attrs.ty(), right.attrs.ty());
        if !lt.is_known() || !rt.is_known() {
            return;
        }
        let ok = if op.is_logical() {
            lt == DecafType::Bool && rt == DecafType::Bool
        } else if op.is_equality() {
            lt == rt
        } else if op.is_relational() {
            lt == DecafType::Int && rt == DecafType::Int
        } else {
            debug_assert!(op.is_arithmetic());
            lt == DecafType::Int && rt == DecafType::Int
        };
        if !ok {
            self.diagnostics
                .report(DiagnosticKind::OperandTypeMismatch, node.line)
                .detail(format_args!("{:?} ({} and {})", op, lt, rt))
                .emit();
        }
    }

    fn post_unary_op(&mut self, node: &Node) {
        let NodeKind::UnaryOp { op, child } = &node.kind else { unreachable!() };
        let ty = child.attrs.ty();
        let (result, expected) = match op {
            UnOp::Negate => (DecafType::Int, DecafType::Int),
            UnOp::Not => (DecafType::Bool, DecafType::Bool),
        };
        node.attrs.set_ty(result);
        if ty.is_known() && ty != expected {
            self.diagnostics
                .report(DiagnosticKind::OperandTypeMismatch, node.line)
                .detail(format_args!("{:?} on {}", op, ty))
                .emit();
        }
    }

    fn post_assignment(&mut self, node: &Node) {
        let NodeKind::Assignment { location, value } = &node.kind else { unreachable!() };
        let (lt, vt) = (location.attrs.ty(), value.attrs.ty());
        if lt.is_known() && vt.is_known() && lt != vt {
            self.diagnostics.report(DiagnosticKind::AssignmentTypeMismatch, node.line).emit();
        }
    }

    fn post_conditional(&mut self, node: &Node) {
        let NodeKind::Conditional { cond, .. } = &node.kind else { unreachable!() };
        let ct = cond.attrs.ty();
        if ct.is_known() && ct != DecafType::Bool {
            self.diagnostics.report(DiagnosticKind::NonBooleanCondition, node.line).emit();
        }
    }

    fn pre_while_loop(&mut self, _node: &Node) {
        self.in_loop = true;
    }

    fn post_while_loop(&mut self, node: &Node) {
        self.in_loop = false;
        let NodeKind::WhileLoop { cond, .. } = &node.kind else { unreachable!() };
        let ct = cond.attrs.ty();
        if ct.is_known() && ct != DecafType::Bool {
            self.diagnostics.report(DiagnosticKind::NonBooleanCondition, node.line).emit();
        }
    }

    fn post_return(&mut self, node: &Node) {
        let NodeKind::Return { value } = &node.kind else { unreachable!() };
        match value {
            Some(value) => {
                let vt = value.attrs.ty();
                if vt.is_known() && vt != self.return_type {
                    self.diagnostics.report(DiagnosticKind::ReturnTypeMismatch, node.line).emit();
                }
            }
            None => {
                if self.return_type != DecafType::Void {
                    self.diagnostics.report(DiagnosticKind::ReturnTypeMismatch, node.line).emit();
                }
            }
        }
    }

    fn pre_break(&mut self, node: &Node) {
        if !self.in_loop {
            self.diagnostics.report(DiagnosticKind::BreakOutsideLoop, node.line).emit();
        }
    }

    fn pre_continue(&mut self, node: &Node) {
        if !self.in_loop {
            self.diagnostics.report(DiagnosticKind::ContinueOutsideLoop, node.line).emit();
        }
    }
}

fn find_by_text(
    scope: &decaf_ast::SymbolTable,
    interner: &Interner,
    text: &str,
) -> Option<decaf_ast::Symbol> {
    scope.locals().iter().find(|s| interner.resolve(s.name) == text).cloned()
}

/// Runs the prerequisite passes (`SetParent`, `CalcDepth`, then the
/// symbol-table builder) over `root`, per `spec.md` §6's prerequisite
/// contract.
pub fn run_prerequisites(root: &Node, interner: &mut Interner) {
    crate::decorate::run(root);
    symtab::build(root, interner);
}

/// The core entry point (`spec.md` §6): analyzes `root`, returning an
/// ordered list of diagnostics that is empty iff the program is
/// semantically valid. Runs the prerequisite passes itself, tightening
/// `spec.md`'s "programmer error if violated" precondition into
/// "impossible to violate" where doing so costs nothing (see
/// `SPEC_FULL.md` §5–8).
pub fn analyze(root: &Node, interner: &mut Interner, options: &AnalysisOptions) -> Diagnostics {
    run_prerequisites(root, interner);
    let mut analyzer = Analyzer::new(interner, options);
    walk_root(&mut analyzer, root);
    analyzer.diagnostics
}
