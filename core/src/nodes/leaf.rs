use ecow::EcoString;

use crate::kind::{NodeKind, TokenKind};
use crate::tree::Ast;

ast_node!(
    /// A single keyword or punctuation token.
    ///
    /// Tokens are nodes rather than flags so that position and formatting
    /// metadata can later hang off them without changing the accessors of
    /// the kinds that own them.
    TokenNode,
    NodeKind::Token(_)
);

impl TokenNode {
    pub fn new(ast: &mut Ast, kind: TokenKind) -> Self {
        Self(ast.alloc(NodeKind::Token(kind)))
    }

    pub fn token_kind(self, ast: &Ast) -> TokenKind {
        match ast.kind(self.0) {
            NodeKind::Token(kind) => *kind,
            other => unreachable!("TokenNode wraps a {}", other.name()),
        }
    }

    pub fn text(self, ast: &Ast) -> &'static str {
        self.token_kind(ast).text()
    }
}

ast_node!(
    /// A bare name.
    IdentifierNode,
    NodeKind::Identifier(_)
);

impl IdentifierNode {
    pub fn new(ast: &mut Ast, name: &str) -> Self {
        Self(ast.alloc(NodeKind::Identifier(EcoString::from(name))))
    }

    pub fn name(self, ast: &Ast) -> &str {
        match ast.kind(self.0) {
            NodeKind::Identifier(name) => name.as_str(),
            other => unreachable!("IdentifierNode wraps a {}", other.name()),
        }
    }

    pub fn set_name(self, ast: &mut Ast, name: &str) {
        *ast.kind_mut(self.0) = NodeKind::Identifier(EcoString::from(name));
    }
}
