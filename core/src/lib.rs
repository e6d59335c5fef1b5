//! Language-agnostic syntax tree core.
//!
//! * [`role`]: typed child slots and the process-wide role registry.
//! * [`tree`]: the node arena and role-keyed child access.
//! * [`nodes`]: typed handles for each concrete node kind.
//! * [`visitor`]: double dispatch over node kinds.
//! * [`pattern`]: structural pattern matching with named captures.

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{format, string::String, vec, vec::Vec};

pub mod error;
pub mod kind;
pub mod nodes;
pub mod options;
pub mod pattern;
pub mod role;
pub mod tree;
pub mod visitor;

pub use error::AstError;
pub use kind::{KindTag, NodeCategory, NodeKind};
pub use nodes::AstNode;
pub use options::{DumpOptions, MatchOptions};
pub use pattern::Match;
pub use role::{ROLES, Role, RoleId};
pub use tree::{Ast, NodeId};
pub use visitor::{AstVisitor, TreeDump};
