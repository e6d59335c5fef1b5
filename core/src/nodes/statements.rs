use super::{
    AstNode, TokenNode, attach_token, identifier_name, set_child_before, set_identifier, token,
};
use crate::AstError;
use crate::kind::{NodeKind, StatementKind, TokenKind};
use crate::role::ROLES;
use crate::Vec;
use crate::tree::{Ast, NodeId};

ast_node!(
    /// Any statement, whatever its concrete kind.
    Statement,
    NodeKind::Statement(_)
);

ast_node!(
    /// `Label:`
    LabelStatement,
    NodeKind::Statement(StatementKind::Label)
);

impl LabelStatement {
    pub fn new(ast: &mut Ast, label: &str) -> Self {
        let node = ast.alloc(NodeKind::Statement(StatementKind::Label));
        attach_token(ast, node, &ROLES.colon, TokenKind::Colon);
        let statement = Self(node);
        statement.set_label(ast, label);
        statement
    }

    pub fn label(self, ast: &Ast) -> Option<&str> {
        identifier_name(ast, self.0, &ROLES.identifier)
    }

    /// Replace the label name. An empty string removes it.
    pub fn set_label(self, ast: &mut Ast, label: &str) {
        let anchor = self.colon_token(ast).map(TokenNode::id);
        set_identifier(ast, self.0, &ROLES.identifier, label, anchor);
    }

    pub fn colon_token(self, ast: &Ast) -> Option<TokenNode> {
        token(ast, self.0, &ROLES.colon)
    }
}

ast_node!(
    /// `{ Statement* }`
    BlockStatement,
    NodeKind::Statement(StatementKind::Block)
);

impl BlockStatement {
    pub fn new(ast: &mut Ast) -> Self {
        let node = ast.alloc(NodeKind::Statement(StatementKind::Block));
        attach_token(ast, node, &ROLES.lbrace, TokenKind::LBrace);
        attach_token(ast, node, &ROLES.rbrace, TokenKind::RBrace);
        Self(node)
    }

    /// Build a block holding `statements`, in order.
    pub fn with_statements(
        ast: &mut Ast,
        statements: impl IntoIterator<Item = NodeId>,
    ) -> Result<Self, AstError> {
        let block = Self::new(ast);
        let statements: Vec<_> = statements
            .into_iter()
            .map(|statement| (ROLES.statement.id(), statement))
            .collect();
        ast.check_attach_all(block.0, &statements)?;
        for (_, statement) in statements {
            block.add_statement(ast, statement)?;
        }
        Ok(block)
    }

    pub fn statements(self, ast: &Ast) -> impl Iterator<Item = NodeId> + '_ {
        ast.children_by_role(self.0, &ROLES.statement)
    }

    /// Append a statement, keeping it inside the braces.
    pub fn add_statement(self, ast: &mut Ast, statement: NodeId) -> Result<(), AstError> {
        match self.rbrace_token(ast) {
            Some(rbrace) => ast
                .insert_child_before(self.0, rbrace.id(), &ROLES.statement, statement)
                .map(|_| ()),
            None => ast.add_child(self.0, &ROLES.statement, statement),
        }
    }

    pub fn lbrace_token(self, ast: &Ast) -> Option<TokenNode> {
        token(ast, self.0, &ROLES.lbrace)
    }

    pub fn rbrace_token(self, ast: &Ast) -> Option<TokenNode> {
        token(ast, self.0, &ROLES.rbrace)
    }
}

ast_node!(
    /// `Expression;`
    ExpressionStatement,
    NodeKind::Statement(StatementKind::Expression)
);

impl ExpressionStatement {
    pub fn new(ast: &mut Ast, expression: NodeId) -> Result<Self, AstError> {
        let node = ast.alloc(NodeKind::Statement(StatementKind::Expression));
        ast.set_child(node, &ROLES.expression, Some(expression))?;
        attach_token(ast, node, &ROLES.semicolon, TokenKind::Semicolon);
        Ok(Self(node))
    }

    pub fn expression(self, ast: &Ast) -> Option<NodeId> {
        ast.get_child(self.0, &ROLES.expression)
    }

    pub fn set_expression(
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
