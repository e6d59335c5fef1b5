//! Sylva - a language-agnostic syntax tree core
//!
//! # Overview
//!
//! Sylva provides the machinery a language front end hangs its syntax tree
//! on, without committing to a particular grammar:
//!
//! - Typed child slots ("roles") with a process-wide registry
//! - A node arena with role-keyed child access and parent links
//! - Closed node kinds, including the goto family
//! - Double-dispatch visitors
//! - Structural pattern matching with named captures
//!
//! # Quick Start
//!
//! ```
//! use sylva::nodes::{GotoCaseStatement, PatternPlaceholder, PrimitiveExpression};
//! use sylva::{Ast, AstNode, Match, TreeDump};
//!
//! // A tree: goto case 5;
//! let mut ast = Ast::new();
//! let five = PrimitiveExpression::int(&mut ast, 5);
//! let goto = GotoCaseStatement::new(&mut ast, five.id()).unwrap();
//! assert_eq!(
//!     TreeDump::dump(&ast, goto.id()),
//!     "(GotoCaseStatement 'goto' 'case' (PrimitiveExpression 5) ';')"
//! );
//!
//! // A pattern: goto case $x;
//! let mut patterns = Ast::new();
//! let x = PatternPlaceholder::any_node(&mut patterns, Some("x"));
//! let pattern = GotoCaseStatement::new(&mut patterns, x.id()).unwrap();
//!
//! let mut m = Match::new();
//! assert!(patterns.do_match(pattern.id(), &ast, goto.id(), &mut m));
//! assert_eq!(m.get("x"), Some(five.id()));
//! ```
//!
//! # Visitors
//!
//! Passes over the tree implement [`AstVisitor`], which has one required
//! handler per node kind:
//!
//! ```ignore
//! struct CountGotos(usize);
//!
//! impl AstVisitor<()> for CountGotos {
//!     type Output = ();
//!
//!     fn visit_goto_statement(&mut self, _: &Ast, _: GotoStatement, _: ()) {
//!         self.0 += 1;
//!     }
//!     // ... one handler for every other kind
//! }
//! ```

// Re-export the tree core
pub use sylva_core::{
    Ast, AstError, AstNode, AstVisitor, DumpOptions, KindTag, Match, MatchOptions, NodeCategory,
    NodeId, NodeKind, ROLES, Role, RoleId, TreeDump,
};

// Re-export modules for the less common items
pub use sylva_core::{kind, nodes, options, pattern, role, tree, visitor};
