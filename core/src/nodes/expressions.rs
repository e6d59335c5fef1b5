use ecow::EcoString;

use super::{AstNode, IdentifierNode, TokenNode, identifier_name, set_identifier};
use crate::AstError;
use crate::kind::{BinaryOperator, ExpressionKind, Literal, NodeKind, TokenKind};
use crate::role::ROLES;
use crate::tree::{Ast, NodeId};

ast_node!(
    /// Any expression, whatever its concrete kind.
    Expression,
    NodeKind::Expression(_)
);

ast_node!(
    /// A literal value: `5`, `true`, `"text"`, `null`.
    PrimitiveExpression,
    NodeKind::Expression(ExpressionKind::Primitive(_))
);

impl PrimitiveExpression {
    pub fn new(ast: &mut Ast, value: Literal) -> Self {
        Self(ast.alloc(NodeKind::Expression(ExpressionKind::Primitive(value))))
    }

    pub fn int(ast: &mut Ast, value: i64) -> Self {
        Self::new(ast, Literal::Int(value))
    }

    pub fn bool(ast: &mut Ast, value: bool) -> Self {
        Self::new(ast, Literal::Bool(value))
    }

    pub fn str(ast: &mut Ast, value: &str) -> Self {
        Self::new(ast, Literal::Str(EcoString::from(value)))
    }

    pub fn value(self, ast: &Ast) -> &Literal {
        match ast.kind(self.0) {
            NodeKind::Expression(ExpressionKind::Primitive(value)) => value,
            other => unreachable!("PrimitiveExpression wraps a {}", other.name()),
        }
    }
}

ast_node!(
    /// A reference to a name.
    IdentifierExpression,
    NodeKind::Expression(ExpressionKind::Identifier)
);

impl IdentifierExpression {
    pub fn new(ast: &mut Ast, name: &str) -> Self {
        let node = ast.alloc(NodeKind::Expression(ExpressionKind::Identifier));
        let ident = IdentifierNode::new(ast, name);
        ast.attach_new(node, ROLES.identifier.id(), ident.id());
        Self(node)
    }

    pub fn identifier(self, ast: &Ast) -> Option<IdentifierNode> {
        let child = ast.get_child(self.0, &ROLES.identifier)?;
        IdentifierNode::cast(ast, child)
    }

    pub fn name(self, ast: &Ast) -> Option<&str> {
        identifier_name(ast, self.0, &ROLES.identifier)
    }

    pub fn set_name(self, ast: &mut Ast, name: &str) {
        set_identifier(ast, self.0, &ROLES.identifier, name, None);
    }
}

ast_node!(
    /// `Left Operator Right`
    BinaryExpression,
    NodeKind::Expression(ExpressionKind::Binary(_))
);

impl BinaryExpression {
    pub fn new(
        ast: &mut Ast,
        left: NodeId,
        operator: BinaryOperator,
        right: NodeId,
    ) -> Result<Self, AstError> {
        let node = ast.alloc(NodeKind::Expression(ExpressionKind::Binary(operator)));
        ast.check_attach_all(node, &[(ROLES.left.id(), left), (ROLES.right.id(), right)])?;
        ast.attach_new(node, ROLES.left.id(), left);
        let token = TokenNode::new(ast, TokenKind::Operator(operator));
        ast.attach_new(node, ROLES.operator.id(), token.id());
        ast.attach_new(node, ROLES.right.id(), right);
        Ok(Self(node))
    }

    pub fn operator(self, ast: &Ast) -> BinaryOperator {
        match ast.kind(self.0) {
            NodeKind::Expression(ExpressionKind::Binary(operator)) => *operator,
            other => unreachable!("BinaryExpression wraps a {}", other.name()),
        }
    }

    pub fn operator_token(self, ast: &Ast) -> Option<TokenNode> {
        let child = ast.get_child(self.0, &ROLES.operator)?;
        TokenNode::cast(ast, child)
    }

    pub fn left(self, ast: &Ast) -> Option<NodeId> {
        ast.get_child(self.0, &ROLES.left)
    }

    pub fn right(self, ast: &Ast) -> Option<NodeId> {
        ast.get_child(self.0, &ROLES.right)
    }
}
