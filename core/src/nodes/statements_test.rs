//! Unit tests for the companion statement, expression and placeholder kinds.

use super::*;
use crate::AstError;
use crate::kind::{BinaryOperator, Literal, PatternKind};
use crate::role::ROLES;
use crate::tree::Ast;

#[test]
fn test_label_statement() {
    let mut ast = Ast::new();
    let label = LabelStatement::new(&mut ast, "exit");

    assert_eq!(label.label(&ast), Some("exit"));
    assert_eq!(ast.first_child(label.id()), ast.get_child(label.id(), &ROLES.identifier));

    label.set_label(&mut ast, "");
    assert_eq!(label.label(&ast), None);

    label.set_label(&mut ast, "retry");
    assert_eq!(label.label(&ast), Some("retry"));
    // Identifier goes back in front of the colon.
    assert_eq!(
        ast.next_sibling(ast.first_child(label.id()).unwrap()),
        label.colon_token(&ast).map(TokenNode::id)
    );
}

#[test]
fn test_block_statements_stay_inside_braces() {
    let mut ast = Ast::new();
    let block = BlockStatement::new(&mut ast);
    let first = GotoStatement::new(&mut ast, "A");
    let second = GotoDefaultStatement::new(&mut ast);

    block.add_statement(&mut ast, first.id()).unwrap();
    block.add_statement(&mut ast, second.id()).unwrap();

    let statements: Vec<_> = block.statements(&ast).collect();
    assert_eq!(statements, vec![first.id(), second.id()]);
    assert_eq!(
        ast.first_child(block.id()),
        block.lbrace_token(&ast).map(TokenNode::id)
    );
    assert_eq!(
        ast.next_sibling(second.id()),
        block.rbrace_token(&ast).map(TokenNode::id)
    );
}

#[test]
fn test_expression_statement() {
    let mut ast = Ast::new();
    let one = PrimitiveExpression::int(&mut ast, 1).id();
    let statement = ExpressionStatement::new(&mut ast, one).unwrap();

    assert_eq!(statement.expression(&ast), Some(one));
    assert_eq!(statement.set_expression(&mut ast, None).unwrap(), Some(one));
    assert_eq!(statement.expression(&ast), None);
    assert!(statement.semicolon_token(&ast).is_some());
}

#[test]
fn test_identifier_expression() {
    let mut ast = Ast::new();
    let x = IdentifierExpression::new(&mut ast, "x");

    assert_eq!(x.name(&ast), Some("x"));
    x.set_name(&mut ast, "y");
    assert_eq!(x.name(&ast), Some("y"));
    assert_eq!(x.identifier(&ast).unwrap().name(&ast), "y");

    x.identifier(&ast).unwrap().set_name(&mut ast, "z");
    assert_eq!(x.name(&ast), Some("z"));
}

#[test]
fn test_binary_expression() {
    let mut ast = Ast::new();
    let left = IdentifierExpression::new(&mut ast, "n").id();
    let right = PrimitiveExpression::int(&mut ast, 1).id();
    let sum = BinaryExpression::new(&mut ast, left, BinaryOperator::Add, right).unwrap();

    assert_eq!(sum.operator(&ast), BinaryOperator::Add);
    assert_eq!(sum.operator_token(&ast).unwrap().text(&ast), "+");
    assert_eq!(sum.left(&ast), Some(left));
    assert_eq!(sum.right(&ast), Some(right));
    assert_eq!(
        PrimitiveExpression::cast(&ast, right).unwrap().value(&ast),
        &Literal::Int(1)
    );
    assert!(Expression::cast(&ast, sum.id()).is_some());
}

#[test]
fn test_pattern_placeholders() {
    let mut ast = Ast::new();
    let any = PatternPlaceholder::any_node(&mut ast, Some("x"));
    let or_null = PatternPlaceholder::any_node_or_null(&mut ast, None);
    let back = PatternPlaceholder::backreference(&mut ast, "x");
    let goto = GotoStatement::new(&mut ast, "L1");
    let named = PatternPlaceholder::named(&mut ast, "target", goto.id()).unwrap();
    let choice = PatternPlaceholder::choice(&mut ast, [any.id(), or_null.id()]).unwrap();

    assert_eq!(any.group(&ast), Some("x"));
    assert_eq!(or_null.group(&ast), None);
    assert_eq!(
        back.pattern_kind(&ast),
        &PatternKind::Backreference { group: "x".into() }
    );
    assert_eq!(named.child(&ast), Some(goto.id()));
    assert_eq!(
        choice.alternatives(&ast).collect::<Vec<_>>(),
        vec![any.id(), or_null.id()]
    );
}

#[test]
fn test_placeholders_fit_every_slot() {
    let mut ast = Ast::new();
    let hole = PatternPlaceholder::any_node(&mut ast, None);
    let statement_hole = PatternPlaceholder::any_node(&mut ast, None);
    let expression = ExpressionStatement::new(&mut ast, hole.id()).unwrap();
    let block = BlockStatement::with_statements(&mut ast, [statement_hole.id()]).unwrap();

    assert_eq!(expression.expression(&ast), Some(hole.id()));
    assert_eq!(block.statements(&ast).next(), Some(statement_hole.id()));
}

#[test]
fn test_binary_expression_rejects_owned_right_without_adopting_left() {
    let mut ast = Ast::new();
    let left = IdentifierExpression::new(&mut ast, "n").id();
    let right = PrimitiveExpression::int(&mut ast, 1).id();
    let owner = ExpressionStatement::new(&mut ast, right).unwrap();

    let err = BinaryExpression::new(&mut ast, left, BinaryOperator::Add, right).unwrap_err();

    assert_eq!(
        err,
        AstError::AlreadyAttached {
            child: right,
            parent: owner.id()
        }
    );
    assert_eq!(ast.parent(left), None);
    assert_eq!(ast.parent(right), Some(owner.id()));
}

#[test]
fn test_binary_expression_rejects_same_operand_twice() {
    let mut ast = Ast::new();
    let n = IdentifierExpression::new(&mut ast, "n").id();

    assert!(BinaryExpression::new(&mut ast, n, BinaryOperator::Add, n).is_err());
    assert_eq!(ast.parent(n), None);
}

#[test]
fn test_with_statements_failure_adopts_nothing() {
    let mut ast = Ast::new();
    let first = GotoStatement::new(&mut ast, "A").id();
    let owned = GotoDefaultStatement::new(&mut ast).id();
    let other = BlockStatement::with_statements(&mut ast, [owned]).unwrap();

    assert!(BlockStatement::with_statements(&mut ast, [first, owned]).is_err());
    assert_eq!(ast.parent(first), None);
    assert_eq!(ast.parent(owned), Some(other.id()));
}

#[test]
fn test_choice_failure_adopts_nothing() {
    let mut ast = Ast::new();
    let free = PatternPlaceholder::any_node(&mut ast, None).id();
    let owned = PatternPlaceholder::any_node(&mut ast, None).id();
    let named = PatternPlaceholder::named(&mut ast, "x", owned).unwrap();

    assert!(PatternPlaceholder::choice(&mut ast, [free, owned]).is_err());
    assert_eq!(ast.parent(free), None);
    assert_eq!(ast.parent(owned), Some(named.id()));
}
