//! Unit tests for the goto family.

use super::*;
use crate::kind::TokenKind;
use crate::role::ROLES;
use crate::tree::Ast;

fn child_roles(ast: &Ast, node: NodeId) -> Vec<&'static str> {
    ast.children(node)
        .iter()
        .map(|&(role, _)| role.name())
        .collect()
}

#[test]
fn test_goto_label_round_trip() {
    let mut ast = Ast::new();
    let goto = GotoStatement::new(&mut ast, "L1");
    assert_eq!(goto.label(&ast), Some("L1"));

    for label in ["a", "loop_end", "L1"] {
        goto.set_label(&mut ast, label);
        assert_eq!(goto.label(&ast), Some(label));
    }

    goto.set_label(&mut ast, "");
    assert_eq!(goto.label(&ast), None);
}

#[test]
fn test_goto_clearing_label_empties_identifier_role() {
    let mut ast = Ast::new();
    let goto = GotoStatement::new(&mut ast, "L1");
    let old = ast.get_child(goto.id(), &ROLES.identifier).unwrap();

    goto.set_label(&mut ast, "");

    assert_eq!(ast.get_child(goto.id(), &ROLES.identifier), None);
    assert!(ast.is_root(old));
    assert_eq!(child_roles(&ast, goto.id()), vec!["Keyword", "Semicolon"]);
}

#[test]
fn test_goto_label_readded_in_grammar_order() {
    let mut ast = Ast::new();
    let goto = GotoStatement::new(&mut ast, "L1");
    goto.set_label(&mut ast, "");
    goto.set_label(&mut ast, "L2");

    assert_eq!(
        child_roles(&ast, goto.id()),
        vec!["Keyword", "Identifier", "Semicolon"]
    );
}

#[test]
fn test_goto_with_empty_label() {
    let mut ast = Ast::new();
    let goto = GotoStatement::new(&mut ast, "");

    assert_eq!(goto.label(&ast), None);
    assert_eq!(goto.goto_token(&ast).unwrap().text(&ast), "goto");
    assert_eq!(goto.semicolon_token(&ast).unwrap().text(&ast), ";");
}

#[test]
fn test_goto_case_label_expression() {
    let mut ast = Ast::new();
    let five = PrimitiveExpression::int(&mut ast, 5).id();
    let goto = GotoCaseStatement::new(&mut ast, five).unwrap();

    assert_eq!(goto.label_expression(&ast), Some(five));
    assert_eq!(goto.case_token(&ast).unwrap().token_kind(&ast), TokenKind::Case);
    assert_eq!(
        child_roles(&ast, goto.id()),
        vec!["Keyword", "CaseKeyword", "Expression", "Semicolon"]
    );

    let six = PrimitiveExpression::int(&mut ast, 6).id();
    let old = goto.set_label_expression(&mut ast, Some(six)).unwrap();
    assert_eq!(old, Some(five));
    assert_eq!(goto.label_expression(&ast), Some(six));

    let old = goto.set_label_expression(&mut ast, None).unwrap();
    assert_eq!(old, Some(six));
    assert_eq!(goto.label_expression(&ast), None);

    goto.set_label_expression(&mut ast, Some(five)).unwrap();
    assert_eq!(
        child_roles(&ast, goto.id()),
        vec!["Keyword", "CaseKeyword", "Expression", "Semicolon"]
    );
}

#[test]
fn test_goto_case_rejects_statement_label() {
    let mut ast = Ast::new();
    let five = PrimitiveExpression::int(&mut ast, 5).id();
    let goto = GotoCaseStatement::new(&mut ast, five).unwrap();
    let other = GotoDefaultStatement::new(&mut ast);

    assert!(matches!(
        goto.set_label_expression(&mut ast, Some(other.id())),
        Err(crate::AstError::SlotMismatch { .. })
    ));
    assert_eq!(goto.label_expression(&ast), Some(five));
}

#[test]
fn test_goto_default_tokens() {
    let mut ast = Ast::new();
    let goto = GotoDefaultStatement::new(&mut ast);

    assert_eq!(goto.goto_token(&ast).unwrap().text(&ast), "goto");
    assert_eq!(goto.default_token(&ast).unwrap().text(&ast), "default");
    assert_eq!(goto.semicolon_token(&ast).unwrap().text(&ast), ";");
    assert_eq!(
        ast.get_child(goto.id(), &*DEFAULT_KEYWORD_ROLE),
        goto.default_token(&ast).map(TokenNode::id)
    );
}

#[test]
fn test_goto_kinds_cast_exclusively() {
    let mut ast = Ast::new();
    let five = PrimitiveExpression::int(&mut ast, 5).id();
    let goto = GotoStatement::new(&mut ast, "L1").id();
    let goto_case = GotoCaseStatement::new(&mut ast, five).unwrap().id();
    let goto_default = GotoDefaultStatement::new(&mut ast).id();

    assert!(GotoStatement::cast(&ast, goto).is_some());
    assert!(GotoStatement::cast(&ast, goto_case).is_none());
    assert!(GotoCaseStatement::cast(&ast, goto_default).is_none());
    assert!(GotoDefaultStatement::cast(&ast, goto).is_none());
    assert!(GotoDefaultStatement::cast(&ast, goto_default).is_some());

    for node in [goto, goto_case, goto_default] {
        assert!(Statement::cast(&ast, node).is_some());
        assert!(Expression::cast(&ast, node).is_none());
    }
}
