//! The goto family: `goto Label;`, `goto case Expr;` and `goto default;`.
//!
//! The three kinds are mutually exclusive and share no value-bearing slot.
//! Code that handles "any goto" goes through the visitor and implements
//! all three handlers.

use once_cell::sync::Lazy;

use super::{
    AstNode, TokenNode, attach_token, identifier_name, set_child_before, set_identifier, token,
};
use crate::AstError;
use crate::kind::{NodeKind, StatementKind, TokenKind};
use crate::role::{ROLES, Role, TokenSlot};
use crate::tree::{Ast, NodeId};

/// Slot of the `case` keyword in `goto case Expr;`.
pub static CASE_KEYWORD_ROLE: Lazy<Role<TokenSlot>> = Lazy::new(|| Role::define("CaseKeyword"));

/// Slot of the `default` keyword in `goto default;`.
pub static DEFAULT_KEYWORD_ROLE: Lazy<Role<TokenSlot>> =
    Lazy::new(|| Role::define("DefaultKeyword"));

ast_node!(
    /// `goto Label;`
    GotoStatement,
    NodeKind::Statement(StatementKind::Goto)
);

impl GotoStatement {
    /// Build `goto label;`. An empty label leaves the target slot empty.
    pub fn new(ast: &mut Ast, label: &str) -> Self {
        let node = ast.alloc(NodeKind::Statement(StatementKind::Goto));
        attach_token(ast, node, &ROLES.keyword, TokenKind::Goto);
        attach_token(ast, node, &ROLES.semicolon, TokenKind::Semicolon);
        let goto = Self(node);
        goto.set_label(ast, label);
        goto
    }

    pub fn goto_token(self, ast: &Ast) -> Option<TokenNode> {
        token(ast, self.0, &ROLES.keyword)
    }

    /// Target label, or `None` when no identifier is attached.
    ///
    /// A well-formed tree always has one; `None` only shows up on trees
    /// still under construction or after `set_label("")`.
    pub fn label(self, ast: &Ast) -> Option<&str> {
        identifier_name(ast, self.0, &ROLES.identifier)
    }

    /// Replace the target label. An empty string removes it.
    pub fn set_label(self, ast: &mut Ast, label: &str) {
        let anchor = self.semicolon_token(ast).map(TokenNode::id);
        set_identifier(ast, self.0, &ROLES.identifier, label, anchor);
    }

    pub fn semicolon_token(self, ast: &Ast) -> Option<TokenNode> {
        token(ast, self.0, &ROLES.semicolon)
    }
}

ast_node!(
    /// `goto case LabelExpression;`
    GotoCaseStatement,
    NodeKind::Statement(StatementKind::GotoCase)
);

impl GotoCaseStatement {
    pub fn new(ast: &mut Ast, label_expression: NodeId) -> Result<Self, AstError> {
        let node = ast.alloc(NodeKind::Statement(StatementKind::GotoCase));
        attach_token(ast, node, &ROLES.keyword, TokenKind::Goto);
        attach_token(ast, node, &CASE_KEYWORD_ROLE, TokenKind::Case);
        ast.set_child(node, &ROLES.expression, Some(label_expression))?;
        attach_token(ast, node, &ROLES.semicolon, TokenKind::Semicolon);
        Ok(Self(node))
    }

    pub fn goto_token(self, ast: &Ast) -> Option<TokenNode> {
        token(ast, self.0, &ROLES.keyword)
    }

    pub fn case_token(self, ast: &Ast) -> Option<TokenNode> {
        token(ast, self.0, &CASE_KEYWORD_ROLE)
    }

    /// The case value, e.g. `5` in `goto case 5;`.
    pub fn label_expression(self, ast: &Ast) -> Option<NodeId> {
        ast.get_child(self.0, &ROLES.expression)
    }

    /// Replace or remove the case value. Returns the detached expression.
    pub fn set_label_expression(
        self,
        ast: &mut Ast,
        expression: Option<NodeId>,
    ) -> Result<Option<NodeId>, AstError> {
        let anchor = self.semicolon_token(ast).map(TokenNode::id);
        set_child_before(ast, self.0, &ROLES.expression, expression, anchor)
    }

    pub fn semicolon_token(self, ast: &Ast) -> Option<TokenNode> {
        token(ast, self.0, &ROLES.semicolon)
    }
}

ast_node!(
    /// `goto default;`
    GotoDefaultStatement,
    NodeKind::Statement(StatementKind::GotoDefault)
);

impl GotoDefaultStatement {
    pub fn new(ast: &mut Ast) -> Self {
        let node = ast.alloc(NodeKind::Statement(StatementKind::GotoDefault));
        attach_token(ast, node, &ROLES.keyword, TokenKind::Goto);
        attach_token(ast, node, &DEFAULT_KEYWORD_ROLE, TokenKind::Default);
        attach_token(ast, node, &ROLES.semicolon, TokenKind::Semicolon);
        Self(node)
    }

    pub fn goto_token(self, ast: &Ast) -> Option<TokenNode> {
        token(ast, self.0, &ROLES.keyword)
    }

    pub fn default_token(self, ast: &Ast) -> Option<TokenNode> {
        token(ast, self.0, &DEFAULT_KEYWORD_ROLE)
    }

    pub fn semicolon_token(self, ast: &Ast) -> Option<TokenNode> {
        token(ast, self.0, &ROLES.semicolon)
    }
}
