//! Wildcard nodes for building pattern trees.
//!
//! Placeholders are ordinary nodes that every role accepts, so a pattern
//! is built with the same constructors as the trees it is matched against:
//!
//! ```
//! use sylva_core::nodes::{AstNode, GotoCaseStatement, PatternPlaceholder};
//! use sylva_core::tree::Ast;
//!
//! // goto case $x;
//! let mut ast = Ast::new();
//! let x = PatternPlaceholder::any_node(&mut ast, Some("x"));
//! let pattern = GotoCaseStatement::new(&mut ast, x.id()).unwrap();
//! assert_eq!(pattern.label_expression(&ast), Some(x.id()));
//! ```

use ecow::EcoString;

use crate::AstError;
use crate::kind::{NodeKind, PatternKind};
use crate::role::ROLES;
use crate::Vec;
use crate::tree::{Ast, NodeId};

ast_node!(PatternPlaceholder, NodeKind::Pattern(_));

impl PatternPlaceholder {
    fn alloc(ast: &mut Ast, kind: PatternKind) -> Self {
        Self(ast.alloc(NodeKind::Pattern(kind)))
    }

    /// Matches any present node; binds it to `group` when given.
    pub fn any_node(ast: &mut Ast, group: Option<&str>) -> Self {
        Self::alloc(
            ast,
            PatternKind::AnyNode {
                group: group.map(EcoString::from),
            },
        )
    }

    /// Like [`any_node`](Self::any_node), but an empty slot matches too.
    pub fn any_node_or_null(ast: &mut Ast, group: Option<&str>) -> Self {
        Self::alloc(
            ast,
            PatternKind::AnyNodeOrNull {
                group: group.map(EcoString::from),
            },
        )
    }

    /// Matches a node structurally equal to the one bound to `group`.
    pub fn backreference(ast: &mut Ast, group: &str) -> Self {
        Self::alloc(
            ast,
            PatternKind::Backreference {
                group: EcoString::from(group),
            },
        )
    }

    /// Matches `child` and binds the matched node to `group`.
    pub fn named(ast: &mut Ast, group: &str, child: NodeId) -> Result<Self, AstError> {
        let named = Self::alloc(
            ast,
            PatternKind::Named {
                group: EcoString::from(group),
            },
        );
        ast.set_child(named.0, &ROLES.pattern_child, Some(child))?;
        Ok(named)
    }

    /// Matches if any alternative does; the first success wins.
    pub fn choice(
        ast: &mut Ast,
        alternatives: impl IntoIterator<Item = NodeId>,
    ) -> Result<Self, AstError> {
        let choice = Self::alloc(ast, PatternKind::Choice);
        let alternatives: Vec<_> = alternatives
            .into_iter()
            .map(|alternative| (ROLES.alternative.id(), alternative))
            .collect();
        ast.check_attach_all(choice.0, &alternatives)?;
        for (role, alternative) in alternatives {
            ast.attach_new(choice.0, role, alternative);
        }
        Ok(choice)
    }

    pub fn pattern_kind(self, ast: &Ast) -> &PatternKind {
        match ast.kind(self.0) {
            NodeKind::Pattern(kind) => kind,
            other => unreachable!("PatternPlaceholder wraps a {}", other.name()),
        }
    }

    pub fn group(self, ast: &Ast) -> Option<&str> {
        self.pattern_kind(ast).group()
    }

    /// Inner pattern of a named placeholder.
    pub fn child(self, ast: &Ast) -> Option<NodeId> {
        ast.get_child(self.0, &ROLES.pattern_child)
    }

    pub fn alternatives(self, ast: &Ast) -> impl Iterator<Item = NodeId> + '_ {
        ast.children_by_role(self.0, &ROLES.alternative)
    }
}
