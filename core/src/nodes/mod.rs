//! Typed handles over [`NodeId`].
//!
//! Each concrete kind gets a `Copy` newtype whose accessors are written
//! purely in terms of role lookups on the [`Ast`]. The handles hold no
//! data of their own; the arena is passed explicitly to every accessor.

use crate::kind::TokenKind;
use crate::role::{Role, Slot, TokenSlot};
use crate::tree::{Ast, NodeId};
use crate::visitor::AstVisitor;

/// Common behaviour of typed node handles.
pub trait AstNode: Copy + Into<NodeId> {
    /// View `node` as `Self` if its kind fits.
    fn cast(ast: &Ast, node: NodeId) -> Option<Self>;

    fn id(self) -> NodeId;

    fn parent(self, ast: &Ast) -> Option<NodeId> {
        ast.parent(self.id())
    }

    fn accept<Ctx, V>(self, ast: &Ast, visitor: &mut V, ctx: Ctx) -> V::Output
    where
        V: AstVisitor<Ctx> + ?Sized,
    {
        ast.accept(self.id(), visitor, ctx)
    }
}

macro_rules! ast_node {
    ($(#[$meta:meta])* $name:ident, $pat:pat) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        pub struct $name(pub(crate) $crate::tree::NodeId);

        impl $crate::nodes::AstNode for $name {
            fn cast(ast: &$crate::tree::Ast, node: $crate::tree::NodeId) -> Option<Self> {
                matches!(ast.kind(node), $pat).then_some(Self(node))
            }

            fn id(self) -> $crate::tree::NodeId {
                self.0
            }
        }

        impl From<$name> for $crate::tree::NodeId {
            fn from(node: $name) -> $crate::tree::NodeId {
                node.0
            }
        }
    };
}

pub mod expressions;
pub mod goto;
pub mod leaf;
pub mod placeholder;
pub mod statements;

pub use expressions::{BinaryExpression, Expression, IdentifierExpression, PrimitiveExpression};
pub use goto::{
    CASE_KEYWORD_ROLE, DEFAULT_KEYWORD_ROLE, GotoCaseStatement, GotoDefaultStatement,
    GotoStatement,
};
pub use leaf::{IdentifierNode, TokenNode};
pub use placeholder::PatternPlaceholder;
pub use statements::{BlockStatement, ExpressionStatement, LabelStatement, Statement};

/// Name of the identifier under `role`, if one is attached.
pub(crate) fn identifier_name<'a, S: Slot>(
    ast: &'a Ast,
    node: NodeId,
    role: &Role<S>,
) -> Option<&'a str> {
    let child = ast.get_child(node, role)?;
    IdentifierNode::cast(ast, child).map(|ident| ident.name(ast))
}

/// Write-empty-removes setter shared by every name-bearing kind.
///
/// A new identifier is placed before `anchor` when the slot was empty, so
/// the grammar's child order survives a remove/re-add cycle.
pub(crate) fn set_identifier<S: Slot>(
    ast: &mut Ast,
    node: NodeId,
    role: &Role<S>,
    name: &str,
    anchor: Option<NodeId>,
) {
    if name.is_empty() {
        ast.take_child(node, role.id());
        return;
    }
    let ident = IdentifierNode::new(ast, name);
    ast.put_child(node, role.id(), ident.id(), anchor);
}

/// `set_child` that keeps grammar order: an empty slot is filled right
/// before `anchor` instead of at the end.
pub(crate) fn set_child_before<S: Slot>(
    ast: &mut Ast,
    node: NodeId,
    role: &Role<S>,
    child: Option<NodeId>,
    anchor: Option<NodeId>,
) -> Result<Option<NodeId>, crate::AstError> {
    match (child, anchor) {
        (Some(child), Some(anchor)) if ast.get_child(node, role).is_none() => {
            ast.insert_child_before(node, anchor, role, child)
        }
        _ => ast.set_child(node, role, child),
    }
}

pub(crate) fn token(ast: &Ast, node: NodeId, role: &Role<TokenSlot>) -> Option<TokenNode> {
    let child = ast.get_child(node, role)?;
    TokenNode::cast(ast, child)
}

pub(crate) fn attach_token(ast: &mut Ast, node: NodeId, role: &Role<TokenSlot>, kind: TokenKind) {
    let token = TokenNode::new(ast, kind);
    ast.attach_new(node, role.id(), token.id());
}

#[cfg(test)]
mod goto_test;
#[cfg(test)]
mod statements_test;
