use core::fmt::Write;

use super::AstVisitor;
use crate::nodes::{
    AstNode, BinaryExpression, BlockStatement, ExpressionStatement, GotoCaseStatement,
    GotoDefaultStatement, GotoStatement, IdentifierExpression, IdentifierNode, LabelStatement,
    PatternPlaceholder, PrimitiveExpression, TokenNode,
};
use crate::options::DumpOptions;
use crate::tree::{Ast, NodeId};
use crate::{String, format};

/// Visitor that renders a subtree as an s-expression.
///
/// `goto L1;` dumps as `(GotoStatement 'goto' L1 ';')`, or with
/// [`DumpOptions::show_roles`] as
/// `(GotoStatement Keyword='goto' Identifier=L1 Semicolon=';')`.
pub struct TreeDump {
    options: DumpOptions,
    output: String,
}

impl TreeDump {
    pub fn new(options: DumpOptions) -> Self {
        Self {
            options,
            output: String::new(),
        }
    }

    pub fn dump(ast: &Ast, node: NodeId) -> String {
        Self::dump_with(ast, node, DumpOptions::default())
    }

    pub fn dump_with(ast: &Ast, node: NodeId, options: DumpOptions) -> String {
        let mut dumper = Self::new(options);
        ast.accept(node, &mut dumper, ());
        dumper.output
    }

    fn write_children(&mut self, ast: &Ast, node: NodeId) {
        for &(role, child) in ast.children(node) {
            if !self.options.show_tokens && ast.kind(child).is_token() {
                continue;
            }
            self.output.push(' ');
            if self.options.show_roles {
                let _ = write!(self.output, "{role}=");
            }
            ast.accept(child, self, ());
        }
    }

    /// `(Head children...)`; `head` already includes any payload.
    fn composite(&mut self, ast: &Ast, node: NodeId, head: &str) {
        let _ = write!(self.output, "({head}");
        self.write_children(ast, node);
        self.output.push(')');
    }
}

impl AstVisitor<()> for TreeDump {
    type Output = ();

    fn visit_token(&mut self, ast: &Ast, node: TokenNode, _: ()) {
        let _ = write!(self.output, "'{}'", node.text(ast));
    }

    fn visit_identifier(&mut self, ast: &Ast, node: IdentifierNode, _: ()) {
        self.output.push_str(node.name(ast));
    }

    fn visit_primitive_expression(&mut self, ast: &Ast, node: PrimitiveExpression, _: ()) {
        let head = format!("PrimitiveExpression {}", node.value(ast));
        self.composite(ast, node.id(), &head);
    }

    fn visit_identifier_expression(&mut self, ast: &Ast, node: IdentifierExpression, _: ()) {
        self.composite(ast, node.id(), "IdentifierExpression");
    }

    fn visit_binary_expression(&mut self, ast: &Ast, node: BinaryExpression, _: ()) {
        self.composite(ast, node.id(), "BinaryExpression");
    }

    fn visit_goto_statement(&mut self, ast: &Ast, node: GotoStatement, _: ()) {
        self.composite(ast, node.id(), "GotoStatement");
    }

    fn visit_goto_case_statement(&mut self, ast: &Ast, node: GotoCaseStatement, _: ()) {
        self.composite(ast, node.id(), "GotoCaseStatement");
    }

    fn visit_goto_default_statement(&mut self, ast: &Ast, node: GotoDefaultStatement, _: ()) {
        self.composite(ast, node.id(), "GotoDefaultStatement");
    }

    fn visit_label_statement(&mut self, ast: &Ast, node: LabelStatement, _: ()) {
        self.composite(ast, node.id(), "LabelStatement");
    }

    fn visit_block_statement(&mut self, ast: &Ast, node: BlockStatement, _: ()) {
        self.composite(ast, node.id(), "BlockStatement");
    }

    fn visit_expression_statement(&mut self, ast: &Ast, node: ExpressionStatement, _: ()) {
        self.composite(ast, node.id(), "ExpressionStatement");
    }

    fn visit_pattern_placeholder(&mut self, ast: &Ast, node: PatternPlaceholder, _: ()) {
        let name = ast.kind(node.id()).name();
        let head = match node.group(ast) {
            Some(group) => format!("{name} ${group}"),
            None => String::from(name),
        };
        self.composite(ast, node.id(), &head);
    }
}
