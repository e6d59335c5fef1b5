use smallvec::{SmallVec, smallvec};

use super::Match;
use crate::kind::{ExpressionKind, NodeKind, PatternKind, StatementKind};
use crate::options::MatchOptions;
use crate::role::{Cardinality, ROLES, RoleId};
use crate::tree::{Ast, NodeId};
use crate::{Vec, vec};

/// Lockstep walk over a pattern tree and a candidate tree.
///
/// The two trees may live in different arenas. New bindings refer to
/// nodes of `candidate`; existing ones are compared through their copies.
struct Matcher<'a> {
    pattern: &'a Ast,
    candidate: &'a Ast,
    max_depth: usize,
    depth: usize,
}

impl<'a> Matcher<'a> {
    fn new(pattern: &'a Ast, candidate: &'a Ast, options: &MatchOptions) -> Self {
        Self {
            pattern,
            candidate,
            max_depth: options.max_depth,
            depth: 0,
        }
    }

    /// `candidate` is `None` when the corresponding slot is empty.
    fn match_node(&mut self, p: NodeId, candidate: Option<NodeId>, m: &mut Match) -> bool {
        if self.depth >= self.max_depth {
            tracing::warn!(max_depth = self.max_depth, pattern = %p, "match depth exceeded");
            return false;
        }
        self.depth += 1;
        let result = self.match_node_inner(p, candidate, m);
        self.depth -= 1;
        result
    }

    fn match_node_inner(&mut self, p: NodeId, candidate: Option<NodeId>, m: &mut Match) -> bool {
        let pattern = self.pattern;
        match (pattern.kind(p), candidate) {
            (NodeKind::Pattern(kind), candidate) => self.match_placeholder(p, kind, candidate, m),
            (_, None) => false,
            (kind, Some(c)) => self.match_concrete(p, kind, c, m),
        }
    }

    fn match_concrete(&mut self, p: NodeId, kind: &NodeKind, c: NodeId, m: &mut Match) -> bool {
        let candidate_kind = self.candidate.kind(c);
        if kind.tag() != candidate_kind.tag() {
            tracing::trace!(
                pattern = %kind.tag(),
                candidate = %candidate_kind.tag(),
                "kind mismatch"
            );
            return false;
        }
        // Same tag, so this only compares payloads: names, literals, operators.
        if kind != candidate_kind {
            tracing::trace!(pattern = %p, candidate = %c, "payload mismatch");
            return false;
        }
        compared_roles(kind)
            .into_iter()
            .all(|role| self.match_role(p, c, role, m))
    }

    fn match_role(&mut self, p: NodeId, c: NodeId, role: RoleId, m: &mut Match) -> bool {
        let (pattern, candidate) = (self.pattern, self.candidate);
        match role.cardinality() {
            Cardinality::Single => {
                match (
                    pattern.child_by_role_id(p, role),
                    candidate.child_by_role_id(c, role),
                ) {
                    (None, None) => true,
                    // An unnamed pattern goto or label stands for any name.
                    (None, Some(_)) => role == ROLES.identifier.id(),
                    (Some(pp), cc) => self.match_node(pp, cc, m),
                }
            }
            Cardinality::Many => {
                let pattern_children: SmallVec<[NodeId; 8]> =
                    pattern.children_by_role_id(p, role).collect();
                let candidate_children: SmallVec<[NodeId; 8]> =
                    candidate.children_by_role_id(c, role).collect();
                pattern_children.len() == candidate_children.len()
                    && pattern_children
                        .into_iter()
                        .zip(candidate_children)
                        .all(|(pp, cc)| self.match_node(pp, Some(cc), m))
            }
        }
    }

    fn match_placeholder(
        &mut self,
        p: NodeId,
        kind: &PatternKind,
        candidate: Option<NodeId>,
        m: &mut Match,
    ) -> bool {
        match kind {
            PatternKind::AnyNode { group } => match candidate {
                Some(c) => group.as_ref().is_none_or(|group| self.bind(group, c, m)),
                None => false,
            },
            PatternKind::AnyNodeOrNull { group } => match candidate {
                Some(c) => group.as_ref().is_none_or(|group| self.bind(group, c, m)),
                None => true,
            },
            PatternKind::Backreference { group } => match (m.captured(group), candidate) {
                (Some((captured, bound)), Some(c)) => {
                    structurally_equal(captured, bound, self.candidate, c)
                }
                (None, _) => {
                    tracing::trace!(%group, "backreference to unbound group");
                    false
                }
                (Some(_), None) => false,
            },
            PatternKind::Named { group } => {
                let Some(inner) = self.pattern.child_by_role_id(p, ROLES.pattern_child.id())
                else {
                    return false;
                };
                match candidate {
                    Some(c) => self.match_node(inner, Some(c), m) && self.bind(group, c, m),
                    None => false,
                }
            }
            PatternKind::Choice => {
                let pattern = self.pattern;
                for alternative in pattern.children_by_role_id(p, ROLES.alternative.id()) {
                    let checkpoint = m.checkpoint();
                    if self.match_node(alternative, candidate, m) {
                        return true;
                    }
                    m.restore(checkpoint);
                }
                false
            }
        }
    }

    /// Bind `group` to `c`, or check `c` against the existing binding.
    fn bind(&self, group: &str, c: NodeId, m: &mut Match) -> bool {
        match m.captured(group) {
            Some((captured, bound)) => {
                let consistent = structurally_equal(captured, bound, self.candidate, c);
                tracing::trace!(%group, %bound, candidate = %c, consistent, "group already bound");
                consistent
            }
            None => {
                tracing::trace!(%group, node = %c, "bound group");
                m.bind(group, self.candidate, c);
                true
            }
        }
    }
}

/// Value-bearing roles compared for each concrete kind, in grammar order.
///
/// Keyword and punctuation tokens are implied by the kind and skipped.
fn compared_roles(kind: &NodeKind) -> SmallVec<[RoleId; 2]> {
    match kind {
        NodeKind::Token(_) | NodeKind::Identifier(_) | NodeKind::Pattern(_) => smallvec![],
        NodeKind::Expression(kind) => match kind {
            ExpressionKind::Primitive(_) => smallvec![],
            ExpressionKind::Identifier => smallvec![ROLES.identifier.id()],
            ExpressionKind::Binary(_) => smallvec![ROLES.left.id(), ROLES.right.id()],
        },
        NodeKind::Statement(kind) => match kind {
            StatementKind::Goto | StatementKind::Label => smallvec![ROLES.identifier.id()],
            StatementKind::GotoCase | StatementKind::Expression => {
                smallvec![ROLES.expression.id()]
            }
            StatementKind::GotoDefault => smallvec![],
            StatementKind::Block => smallvec![ROLES.statement.id()],
        },
    }
}

/// Exact structural equality of two subtrees, tokens included.
///
/// The subtrees may live in different arenas.
pub fn structurally_equal(ast_a: &Ast, a: NodeId, ast_b: &Ast, b: NodeId) -> bool {
    let mut stack = vec![(a, b)];
    while let Some((a, b)) = stack.pop() {
        if ast_a.kind(a) != ast_b.kind(b) {
            return false;
        }
        let (children_a, children_b) = (ast_a.children(a), ast_b.children(b));
        if children_a.len() != children_b.len() {
            return false;
        }
        for (&(role_a, child_a), &(role_b, child_b)) in children_a.iter().zip(children_b) {
            if role_a != role_b {
                return false;
            }
            stack.push((child_a, child_b));
        }
    }
    true
}

/// Match `pattern` against `candidate` with a fresh context.
pub fn matches(
    pattern_ast: &Ast,
    pattern: NodeId,
    candidate_ast: &Ast,
    candidate: NodeId,
) -> Option<Match> {
    let mut m = Match::new();
    pattern_ast
        .do_match(pattern, candidate_ast, candidate, &mut m)
        .then_some(m)
}

impl Ast {
    /// Match the pattern rooted at `pattern` (in `self`) against
    /// `candidate` (in `candidate_ast`), recording bindings in `m`.
    ///
    /// On failure `m` is left exactly as it was before the call.
    pub fn do_match(
        &self,
        pattern: NodeId,
        candidate_ast: &Ast,
        candidate: NodeId,
        m: &mut Match,
    ) -> bool {
        self.do_match_with(pattern, candidate_ast, candidate, m, &MatchOptions::default())
    }

    pub fn do_match_with(
        &self,
        pattern: NodeId,
        candidate_ast: &Ast,
        candidate: NodeId,
        m: &mut Match,
        options: &MatchOptions,
    ) -> bool {
        let checkpoint = m.checkpoint();
        let matched =
            Matcher::new(self, candidate_ast, options).match_node(pattern, Some(candidate), m);
        if !matched {
            m.restore(checkpoint);
        }
        matched
    }

    /// Every node under `root` (inclusive, pre-order) that matches
    /// `pattern`, each with its own bindings.
    pub fn find_matches(
        &self,
        root: NodeId,
        pattern_ast: &Ast,
        pattern: NodeId,
    ) -> Vec<(NodeId, Match)> {
        let found: Vec<_> = self
            .descendants(root)
            .filter_map(|node| Some((node, matches(pattern_ast, pattern, self, node)?)))
            .collect();
        tracing::debug!(%root, count = found.len(), "find_matches");
        found
    }
}
