use once_cell::sync::Lazy;
use sylva::Ast;
use sylva::AstNode;
use sylva::NodeId;
use sylva::kind::BinaryOperator;
use sylva::nodes::*;

pub struct TestCase {
    pub name: &'static str,
    pub build: fn(&mut Ast) -> NodeId,
    pub dump: &'static str,
}

fn goto_case(ast: &mut Ast, value: i64) -> NodeId {
    let literal = PrimitiveExpression::int(ast, value).id();
    GotoCaseStatement::new(ast, literal).unwrap().id()
}

pub static TEST_CASES: Lazy<Vec<TestCase>> = Lazy::new(|| {
    vec![
        TestCase {
            name: "goto",
            build: |ast| GotoStatement::new(ast, "L1").id(),
            dump: "(GotoStatement 'goto' L1 ';')",
        },
        TestCase {
            name: "goto_without_label",
            build: |ast| GotoStatement::new(ast, "").id(),
            dump: "(GotoStatement 'goto' ';')",
        },
        TestCase {
            name: "goto_case",
            build: |ast| goto_case(ast, 5),
            dump: "(GotoCaseStatement 'goto' 'case' (PrimitiveExpression 5) ';')",
        },
        TestCase {
            name: "goto_case_expression",
            build: |ast| {
                let n = IdentifierExpression::new(ast, "n").id();
                let one = PrimitiveExpression::int(ast, 1).id();
                let sum = BinaryExpression::new(ast, n, BinaryOperator::Add, one)
                    .unwrap()
                    .id();
                GotoCaseStatement::new(ast, sum).unwrap().id()
            },
            dump: "(GotoCaseStatement 'goto' 'case' \
                   (BinaryExpression (IdentifierExpression n) '+' (PrimitiveExpression 1)) ';')",
        },
        TestCase {
            name: "goto_default",
            build: |ast| GotoDefaultStatement::new(ast).id(),
            dump: "(GotoDefaultStatement 'goto' 'default' ';')",
        },
        TestCase {
            name: "switch_body",
            build: |ast| {
                let label = LabelStatement::new(ast, "again").id();
                let case = goto_case(ast, 2);
                let default = GotoDefaultStatement::new(ast).id();
                let back = GotoStatement::new(ast, "again").id();
                BlockStatement::with_statements(ast, [label, case, default, back])
                    .unwrap()
                    .id()
            },
            dump: "(BlockStatement '{' (LabelStatement again ':') \
                   (GotoCaseStatement 'goto' 'case' (PrimitiveExpression 2) ';') \
                   (GotoDefaultStatement 'goto' 'default' ';') \
                   (GotoStatement 'goto' again ';') '}')",
        },
        TestCase {
            name: "expression_statement",
            build: |ast| {
                let text = PrimitiveExpression::str(ast, "done").id();
                ExpressionStatement::new(ast, text).unwrap().id()
            },
            dump: "(ExpressionStatement (PrimitiveExpression \"done\") ';')",
        },
    ]
});
