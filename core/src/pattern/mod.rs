//! Structural pattern matching over syntax trees.
//!
//! A pattern is an ordinary tree whose nodes may include the placeholder
//! kinds from [`PatternKind`](crate::kind::PatternKind). Matching walks
//! the pattern and a candidate in lockstep; named placeholders record
//! what they matched in a [`Match`].
//!
//! ```
//! use sylva_core::nodes::{AstNode, GotoCaseStatement, PatternPlaceholder, PrimitiveExpression};
//! use sylva_core::pattern::Match;
//! use sylva_core::tree::Ast;
//!
//! // Pattern: goto case $x;
//! let mut patterns = Ast::new();
//! let x = PatternPlaceholder::any_node(&mut patterns, Some("x"));
//! let pattern = GotoCaseStatement::new(&mut patterns, x.id()).unwrap();
//!
//! // Candidate: goto case 5;
//! let mut ast = Ast::new();
//! let five = PrimitiveExpression::int(&mut ast, 5);
//! let candidate = GotoCaseStatement::new(&mut ast, five.id()).unwrap();
//!
//! let mut m = Match::new();
//! assert!(patterns.do_match(pattern.id(), &ast, candidate.id(), &mut m));
//! assert_eq!(m.get("x"), Some(five.id()));
//! ```

use ecow::EcoString;
use hashbrown::HashMap;

use crate::Vec;
use crate::tree::{Ast, NodeId};

mod matcher;

pub use matcher::{matches, structurally_equal};

/// Bindings collected while matching: group name to candidate node.
///
/// Each binding keeps the candidate node id together with a private copy
/// of its subtree, so a context can be carried across candidates in
/// different arenas. [`get`](Match::get) returns an id in the candidate
/// arena of the match that made the binding; [`captured`](Match::captured)
/// is valid regardless of which arena that was.
#[derive(Debug, Clone, Default)]
pub struct Match {
    bindings: HashMap<EcoString, Binding>,
    /// Groups in binding order, for `restore` and ordered iteration.
    trail: Vec<EcoString>,
    /// Copies of every bound subtree.
    captured: Ast,
}

#[derive(Debug, Clone, Copy)]
struct Binding {
    node: NodeId,
    copy: NodeId,
}

/// Opaque position in a [`Match`]'s binding history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    bindings: usize,
    captured: usize,
}

impl Match {
    pub fn new() -> Self {
        Self::default()
    }

    /// Node bound to `group`, if any.
    pub fn get(&self, group: &str) -> Option<NodeId> {
        self.bindings.get(group).map(|binding| binding.node)
    }

    /// The copy of the subtree bound to `group`, and the arena holding it.
    pub fn captured(&self, group: &str) -> Option<(&Ast, NodeId)> {
        let binding = self.bindings.get(group)?;
        Some((&self.captured, binding.copy))
    }

    pub fn is_bound(&self, group: &str) -> bool {
        self.bindings.contains_key(group)
    }

    pub fn len(&self) -> usize {
        self.trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    /// Bindings in the order they were made.
    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.trail
            .iter()
            .filter_map(|group| Some((group.as_str(), self.bindings.get(group)?.node)))
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            bindings: self.trail.len(),
            captured: self.captured.len(),
        }
    }

    /// Forget every binding made after `checkpoint`.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        if checkpoint.bindings >= self.trail.len() {
            return;
        }
        for group in self.trail.drain(checkpoint.bindings..) {
            self.bindings.remove(&group);
        }
        // Copies are appended in binding order, so the later ones sit at the end.
        self.captured.truncate(checkpoint.captured);
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
        self.trail.clear();
        self.captured = Ast::new();
    }

    /// Record a new binding of `group` to `node` in `candidate`. The caller
    /// has checked `group` is unbound.
    pub(crate) fn bind(&mut self, group: &str, candidate: &Ast, node: NodeId) {
        let group = EcoString::from(group);
        debug_assert!(!self.bindings.contains_key(&group));
        let copy = self.captured.import(candidate, node);
        self.bindings.insert(group.clone(), Binding { node, copy });
        self.trail.push(group);
    }
}
