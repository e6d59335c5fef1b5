//! End-to-end scenarios for the goto family: construction, label editing,
//! dispatch and matching through the public API only.

use sylva_core::nodes::{
    AstNode, BinaryExpression, BlockStatement, GotoCaseStatement, GotoDefaultStatement,
    GotoStatement, IdentifierExpression, IdentifierNode, LabelStatement, PatternPlaceholder,
    PrimitiveExpression,
};
use sylva_core::pattern::Match;
use sylva_core::{Ast, AstVisitor, KindTag, NodeId, ROLES};

/// Collects the kind of every goto it is dispatched to.
#[derive(Default)]
struct GotoKinds {
    seen: Vec<KindTag>,
}

impl AstVisitor<()> for GotoKinds {
    type Output = ();

    fn visit_token(&mut self, _: &Ast, _: sylva_core::nodes::TokenNode, _: ()) {}
    fn visit_identifier(&mut self, _: &Ast, _: IdentifierNode, _: ()) {}
    fn visit_primitive_expression(&mut self, _: &Ast, _: PrimitiveExpression, _: ()) {}
    fn visit_identifier_expression(&mut self, _: &Ast, _: IdentifierExpression, _: ()) {}
    fn visit_binary_expression(&mut self, _: &Ast, _: BinaryExpression, _: ()) {}
    fn visit_goto_statement(&mut self, _: &Ast, _: GotoStatement, _: ()) {
        self.seen.push(KindTag::GotoStatement);
    }
    fn visit_goto_case_statement(&mut self, _: &Ast, _: GotoCaseStatement, _: ()) {
        self.seen.push(KindTag::GotoCaseStatement);
    }
    fn visit_goto_default_statement(&mut self, _: &Ast, _: GotoDefaultStatement, _: ()) {
        self.seen.push(KindTag::GotoDefaultStatement);
    }
    fn visit_label_statement(&mut self, _: &Ast, _: LabelStatement, _: ()) {}
    fn visit_block_statement(&mut self, ast: &Ast, node: BlockStatement, _: ()) {
        for statement in node.statements(ast) {
            ast.accept(statement, self, ());
        }
    }
    fn visit_expression_statement(
        &mut self,
        _: &Ast,
        _: sylva_core::nodes::ExpressionStatement,
        _: (),
    ) {
    }
    fn visit_pattern_placeholder(&mut self, _: &Ast, _: PatternPlaceholder, _: ()) {}
}

fn goto_case(ast: &mut Ast, value: i64) -> NodeId {
    let literal = PrimitiveExpression::int(ast, value).id();
    GotoCaseStatement::new(ast, literal).unwrap().id()
}

#[test]
fn test_goto_label_cleared_to_empty() {
    let mut ast = Ast::new();
    let goto = GotoStatement::new(&mut ast, "L1");
    assert_eq!(goto.label(&ast), Some("L1"));

    goto.set_label(&mut ast, "");

    assert_eq!(goto.label(&ast), None);
    assert_eq!(ast.get_child(goto.id(), &ROLES.identifier), None);
}

#[test]
fn test_goto_default_pattern_rejects_goto_case() {
    let mut patterns = Ast::new();
    let pattern = GotoDefaultStatement::new(&mut patterns);
    let mut ast = Ast::new();
    let candidate = goto_case(&mut ast, 5);

    let mut m = Match::new();
    assert!(!patterns.do_match(pattern.id(), &ast, candidate, &mut m));
}

#[test]
fn test_goto_case_binding_reused_across_candidates() {
    let mut patterns = Ast::new();
    let x = PatternPlaceholder::any_node(&mut patterns, Some("X"));
    let pattern = GotoCaseStatement::new(&mut patterns, x.id()).unwrap();

    let mut ast = Ast::new();
    let five = goto_case(&mut ast, 5);
    let five_again = goto_case(&mut ast, 5);
    let six = goto_case(&mut ast, 6);

    let mut m = Match::new();
    assert!(patterns.do_match(pattern.id(), &ast, five, &mut m));
    let bound = m.get("X").unwrap();
    assert_eq!(ast.parent(bound), Some(five));

    assert!(patterns.do_match(pattern.id(), &ast, five_again, &mut m));
    assert!(!patterns.do_match(pattern.id(), &ast, six, &mut m));
    assert_eq!(m.get("X"), Some(bound));

    let mut elsewhere = Ast::new();
    let five_elsewhere = goto_case(&mut elsewhere, 5);
    assert!(patterns.do_match(pattern.id(), &elsewhere, five_elsewhere, &mut m));
    let (captured, copy) = m.captured("X").unwrap();
    assert_eq!(
        PrimitiveExpression::cast(captured, copy).map(|five| five.value(captured).clone()),
        Some(sylva_core::kind::Literal::Int(5))
    );
}

#[test]
fn test_visitor_sees_each_goto_kind_once() {
    let mut ast = Ast::new();
    let label = LabelStatement::new(&mut ast, "L1").id();
    let goto = GotoStatement::new(&mut ast, "L1").id();
    let case = goto_case(&mut ast, 1);
    let default = GotoDefaultStatement::new(&mut ast).id();
    let block = BlockStatement::with_statements(&mut ast, [label, goto, case, default]).unwrap();

    let mut visitor = GotoKinds::default();
    block.accept(&ast, &mut visitor, ());

    assert_eq!(
        visitor.seen,
        vec![
            KindTag::GotoStatement,
            KindTag::GotoCaseStatement,
            KindTag::GotoDefaultStatement,
        ]
    );
}

#[test]
fn test_retarget_every_goto() {
    let mut ast = Ast::new();
    let a = GotoStatement::new(&mut ast, "a").id();
    let b = GotoStatement::new(&mut ast, "b").id();
    let default = GotoDefaultStatement::new(&mut ast).id();
    let block = BlockStatement::with_statements(&mut ast, [a, default, b]).unwrap();

    let mut patterns = Ast::new();
    let target = PatternPlaceholder::any_node(&mut patterns, Some("target"));
    let pattern = GotoStatement::new(&mut patterns, "");
    patterns
        .set_child(pattern.id(), &ROLES.identifier, Some(target.id()))
        .unwrap();

    let found: Vec<NodeId> = ast
        .find_matches(block.id(), &patterns, pattern.id())
        .into_iter()
        .map(|(node, _)| node)
        .collect();
    assert_eq!(found, vec![a, b]);

    for node in found {
        let goto = GotoStatement::cast(&ast, node).unwrap();
        goto.set_label(&mut ast, "exit");
    }
    let labels: Vec<_> = block
        .statements(&ast)
        .filter_map(|node| GotoStatement::cast(&ast, node))
        .map(|goto| goto.label(&ast))
        .collect();
    assert_eq!(labels, vec![Some("exit"), Some("exit")]);
}
