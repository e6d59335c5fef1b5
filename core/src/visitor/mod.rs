//! Double-dispatch visitor protocol.
//!
//! A pass implements [`AstVisitor`] with one handler per concrete node kind;
//! [`Ast::accept`] selects the handler from the node's kind and returns its
//! result unchanged. There are no default handlers: adding a node kind is a
//! compile error in every visitor until it decides what to do with it. A
//! visitor that cannot handle some kind should say so explicitly in that
//! handler (for example by returning an error).
//!
//! The visitor is responsible for recursing into children, typically by
//! calling `ast.accept` on them from inside its handlers.

use crate::kind::{ExpressionKind, NodeKind, StatementKind};
use crate::nodes::{
    BinaryExpression, BlockStatement, ExpressionStatement, GotoCaseStatement,
    GotoDefaultStatement, GotoStatement, IdentifierExpression, IdentifierNode, LabelStatement,
    PatternPlaceholder, PrimitiveExpression, TokenNode,
};
use crate::tree::{Ast, NodeId};

mod dump;

pub use dump::TreeDump;

/// One handler per concrete node kind.
///
/// `Ctx` is an input threaded through the dispatch; `Output` is whatever the
/// pass produces (`()` for side-effect passes, a value for evaluators, a
/// `Result` for validators).
pub trait AstVisitor<Ctx> {
    type Output;

    fn visit_token(&mut self, ast: &Ast, node: TokenNode, ctx: Ctx) -> Self::Output;

    fn visit_identifier(&mut self, ast: &Ast, node: IdentifierNode, ctx: Ctx) -> Self::Output;

    fn visit_primitive_expression(
        &mut self,
        ast: &Ast,
        node: PrimitiveExpression,
        ctx: Ctx,
    ) -> Self::Output;

    fn visit_identifier_expression(
        &mut self,
        ast: &Ast,
        node: IdentifierExpression,
        ctx: Ctx,
    ) -> Self::Output;

    fn visit_binary_expression(
        &mut self,
        ast: &Ast,
        node: BinaryExpression,
        ctx: Ctx,
    ) -> Self::Output;

    fn visit_goto_statement(&mut self, ast: &Ast, node: GotoStatement, ctx: Ctx) -> Self::Output;

    fn visit_goto_case_statement(
        &mut self,
        ast: &Ast,
        node: GotoCaseStatement,
        ctx: Ctx,
    ) -> Self::Output;

    fn visit_goto_default_statement(
        &mut self,
        ast: &Ast,
        node: GotoDefaultStatement,
        ctx: Ctx,
    ) -> Self::Output;

    fn visit_label_statement(&mut self, ast: &Ast, node: LabelStatement, ctx: Ctx)
    -> Self::Output;

    fn visit_block_statement(&mut self, ast: &Ast, node: BlockStatement, ctx: Ctx)
    -> Self::Output;

    fn visit_expression_statement(
        &mut self,
        ast: &Ast,
        node: ExpressionStatement,
        ctx: Ctx,
    ) -> Self::Output;

    fn visit_pattern_placeholder(
        &mut self,
        ast: &Ast,
        node: PatternPlaceholder,
        ctx: Ctx,
    ) -> Self::Output;
}

impl Ast {
    /// Dispatch `node` to the visitor handler for its kind.
    pub fn accept<Ctx, V>(&self, node: NodeId, visitor: &mut V, ctx: Ctx) -> V::Output
    where
        V: AstVisitor<Ctx> + ?Sized,
    {
        match self.kind(node) {
            NodeKind::Token(_) => visitor.visit_token(self, TokenNode(node), ctx),
            NodeKind::Identifier(_) => visitor.visit_identifier(self, IdentifierNode(node), ctx),
            NodeKind::Expression(kind) => match kind {
                ExpressionKind::Primitive(_) => {
                    visitor.visit_primitive_expression(self, PrimitiveExpression(node), ctx)
                }
                ExpressionKind::Identifier => {
                    visitor.visit_identifier_expression(self, IdentifierExpression(node), ctx)
                }
                ExpressionKind::Binary(_) => {
                    visitor.visit_binary_expression(self, BinaryExpression(node), ctx)
                }
            },
            NodeKind::Statement(kind) => match kind {
                StatementKind::Goto => visitor.visit_goto_statement(self, GotoStatement(node), ctx),
                StatementKind::GotoCase => {
                    visitor.visit_goto_case_statement(self, GotoCaseStatement(node), ctx)
                }
                StatementKind::GotoDefault => {
                    visitor.visit_goto_default_statement(self, GotoDefaultStatement(node), ctx)
                }
                StatementKind::Label => {
                    visitor.visit_label_statement(self, LabelStatement(node), ctx)
                }
                StatementKind::Block => {
                    visitor.visit_block_statement(self, BlockStatement(node), ctx)
                }
                StatementKind::Expression => {
                    visitor.visit_expression_statement(self, ExpressionStatement(node), ctx)
                }
            },
            NodeKind::Pattern(_) => {
                visitor.visit_pattern_placeholder(self, PatternPlaceholder(node), ctx)
            }
        }
    }
}
