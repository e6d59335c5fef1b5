//! Closed set of node kinds.
//!
//! Every concrete statement and expression is a variant here rather than a
//! subtype, so visitors and the matcher get exhaustiveness checking from
//! the compiler. Value-bearing content that is not a child node (literal
//! values, identifier names, operators) lives in the variant payload;
//! everything else hangs off the node as role-labelled children.

use core::fmt;

use ecow::EcoString;

/// Coarse grouping of node kinds, used to decide which roles accept a node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NodeCategory {
    Token,
    Identifier,
    Expression,
    Statement,
    Pattern,
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeCategory::Token => "token",
            NodeCategory::Identifier => "identifier",
            NodeCategory::Expression => "expression",
            NodeCategory::Statement => "statement",
            NodeCategory::Pattern => "pattern",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Lt,
    Gt,
    And,
    Or,
}

impl BinaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Eq => "==",
            BinaryOperator::NotEq => "!=",
            BinaryOperator::Lt => "<",
            BinaryOperator::Gt => ">",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
        }
    }
}

/// Lexical atoms kept as leaf nodes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TokenKind {
    Goto,
    Case,
    Default,
    Semicolon,
    Colon,
    LBrace,
    RBrace,
    Operator(BinaryOperator),
}

impl TokenKind {
    pub fn text(self) -> &'static str {
        match self {
            TokenKind::Goto => "goto",
            TokenKind::Case => "case",
            TokenKind::Default => "default",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Operator(op) => op.symbol(),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Literal {
    Int(i64),
    Bool(bool),
    Str(EcoString),
    Null,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(value) => write!(f, "{value}"),
            Literal::Bool(value) => write!(f, "{value}"),
            Literal::Str(value) => write!(f, "{value:?}"),
            Literal::Null => f.write_str("null"),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum ExpressionKind {
    /// Literal value, no children.
    Primitive(Literal),
    /// Name reference: `Identifier`.
    Identifier,
    /// `Left`, `Operator` token, `Right`.
    Binary(BinaryOperator),
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum StatementKind {
    /// `goto Label;`
    Goto,
    /// `goto case LabelExpression;`
    GotoCase,
    /// `goto default;`
    GotoDefault,
    /// `Label:`
    Label,
    /// `{ Statement* }`
    Block,
    /// `Expression;`
    Expression,
}

/// Wildcard markers used in pattern trees.
///
/// A group name turns a placeholder into a pattern variable: the first
/// match binds the candidate node under that name, later occurrences must
/// match the bound node structurally.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum PatternKind {
    /// Any present node.
    AnyNode { group: Option<EcoString> },
    /// Any node, or an absent slot.
    AnyNodeOrNull { group: Option<EcoString> },
    /// The node previously bound to `group`.
    Backreference { group: EcoString },
    /// Matches its `PatternChild` and binds the candidate to `group`.
    Named { group: EcoString },
    /// Matches if any `Alternative` child does, tried in order.
    Choice,
}

impl PatternKind {
    pub fn group(&self) -> Option<&str> {
        match self {
            PatternKind::AnyNode { group } | PatternKind::AnyNodeOrNull { group } => {
                group.as_deref()
            }
            PatternKind::Backreference { group } | PatternKind::Named { group } => Some(group.as_str()),
            PatternKind::Choice => None,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum NodeKind {
    Token(TokenKind),
    Identifier(EcoString),
    Expression(ExpressionKind),
    Statement(StatementKind),
    Pattern(PatternKind),
}

/// Flat discriminant of a concrete node kind, without payload.
///
/// Two nodes are "of the same kind" exactly when their tags are equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum KindTag {
    Token,
    Identifier,
    PrimitiveExpression,
    IdentifierExpression,
    BinaryExpression,
    GotoStatement,
    GotoCaseStatement,
    GotoDefaultStatement,
    LabelStatement,
    BlockStatement,
    ExpressionStatement,
    AnyNode,
    AnyNodeOrNull,
    Backreference,
    NamedNode,
    Choice,
}

impl KindTag {
    pub fn name(self) -> &'static str {
        match self {
            KindTag::Token => "Token",
            KindTag::Identifier => "Identifier",
            KindTag::PrimitiveExpression => "PrimitiveExpression",
            KindTag::IdentifierExpression => "IdentifierExpression",
            KindTag::BinaryExpression => "BinaryExpression",
            KindTag::GotoStatement => "GotoStatement",
            KindTag::GotoCaseStatement => "GotoCaseStatement",
            KindTag::GotoDefaultStatement => "GotoDefaultStatement",
            KindTag::LabelStatement => "LabelStatement",
            KindTag::BlockStatement => "BlockStatement",
            KindTag::ExpressionStatement => "ExpressionStatement",
            KindTag::AnyNode => "AnyNode",
            KindTag::AnyNodeOrNull => "AnyNodeOrNull",
            KindTag::Backreference => "Backreference",
            KindTag::NamedNode => "NamedNode",
            KindTag::Choice => "Choice",
        }
    }
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl NodeKind {
    pub fn category(&self) -> NodeCategory {
        match self {
            NodeKind::Token(_) => NodeCategory::Token,
            NodeKind::Identifier(_) => NodeCategory::Identifier,
            NodeKind::Expression(_) => NodeCategory::Expression,
            NodeKind::Statement(_) => NodeCategory::Statement,
            NodeKind::Pattern(_) => NodeCategory::Pattern,
        }
    }

    pub fn tag(&self) -> KindTag {
        match self {
            NodeKind::Token(_) => KindTag::Token,
            NodeKind::Identifier(_) => KindTag::Identifier,
            NodeKind::Expression(ExpressionKind::Primitive(_)) => KindTag::PrimitiveExpression,
            NodeKind::Expression(ExpressionKind::Identifier) => KindTag::IdentifierExpression,
            NodeKind::Expression(ExpressionKind::Binary(_)) => KindTag::BinaryExpression,
            NodeKind::Statement(StatementKind::Goto) => KindTag::GotoStatement,
            NodeKind::Statement(StatementKind::GotoCase) => KindTag::GotoCaseStatement,
            NodeKind::Statement(StatementKind::GotoDefault) => KindTag::GotoDefaultStatement,
            NodeKind::Statement(StatementKind::Label) => KindTag::LabelStatement,
            NodeKind::Statement(StatementKind::Block) => KindTag::BlockStatement,
            NodeKind::Statement(StatementKind::Expression) => KindTag::ExpressionStatement,
            NodeKind::Pattern(PatternKind::AnyNode { .. }) => KindTag::AnyNode,
            NodeKind::Pattern(PatternKind::AnyNodeOrNull { .. }) => KindTag::AnyNodeOrNull,
            NodeKind::Pattern(PatternKind::Backreference { .. }) => KindTag::Backreference,
            NodeKind::Pattern(PatternKind::Named { .. }) => KindTag::NamedNode,
            NodeKind::Pattern(PatternKind::Choice) => KindTag::Choice,
        }
    }

    pub fn name(&self) -> &'static str {
        self.tag().name()
    }

    pub fn is_token(&self) -> bool {
        matches!(self, NodeKind::Token(_))
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, NodeKind::Pattern(_))
    }
}
