//! Structural decorators (`spec.md` §4.4): `SetParent` and `CalcDepth`.
//!
//! Both are prerequisite passes run once over a fresh tree before the
//! symbol-table builder or the analyzer. Both only need the `on_enter`
//! hook — they never care which variant a node is, only its place in the
//! tree — so neither overrides any `pre_*`/`post_*` method.

use decaf_ast::Node;

use crate::visitor::{Visitor, walk_root};

/// Writes a `parent` attribute on every non-root node.
pub struct SetParent;

impl Visitor for SetParent {
    fn on_enter(&mut self, node: &Node, parent: Option<&Node>) {
        if let Some(parent) = parent {
            node.attrs.set_parent(parent);
        }
    }
}

/// Writes `depth = 0` on the root and `depth = parent.depth + 1` elsewhere.
///
/// Depth only needs the parent the walk already passes down, not the
/// `parent` attribute, so this pass has no real data dependency on
/// `SetParent`. [`run`] still performs them in the order `spec.md` §4.4
/// mandates, since later passes may rely on both having run.
pub struct CalcDepth;

impl Visitor for CalcDepth {
    fn on_enter(&mut self, node: &Node, parent: Option<&Node>) {
        let depth = match parent {
            Some(parent) => parent.attrs.depth() + 1,
            None => 0,
        };
        node.attrs.set_depth(depth);
    }
}

/// Runs `SetParent` then `CalcDepth` over `root`, in the order `spec.md`
/// §4.4 and §6 require.
pub fn run(root: &Node) {
    walk_root(&mut SetParent, root);
    walk_root(&mut CalcDepth, root);
}
