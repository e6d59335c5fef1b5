//! Typed child slots ("roles").
//!
//! A node's children are labelled by the role they were attached under.
//! Roles are process-wide keys: every call to [`Role::define`] yields a
//! fresh identity, even if the name collides with an existing role. The
//! name only exists for diagnostics.
//!
//! The slot marker `S` fixes which node category may occupy the role, so
//! attaching an expression where a token belongs is rejected at the seam
//! instead of surfacing later as a malformed tree.
//!
//! # Example
//!
//! ```
//! use sylva_core::role::{ExpressionSlot, Role};
//!
//! let condition: Role<ExpressionSlot> = Role::define("Condition");
//! let other: Role<ExpressionSlot> = Role::define("Condition");
//!
//! // Same name, different identity.
//! assert_ne!(condition, other);
//! assert_eq!(condition.name(), other.name());
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;

use crate::kind::NodeCategory;

/// Untyped identity of a role, as stored in a node's child list.
///
/// Carries the role's cardinality and accepted category so that the hot
/// paths (attachment checks, matching) never consult the registry.
#[derive(Clone, Copy, Debug)]
pub struct RoleId {
    index: u32,
    cardinality: Cardinality,
    accepts: Option<NodeCategory>,
}

impl RoleId {
    /// Diagnostic name this role was defined with.
    pub fn name(self) -> &'static str {
        role_info(self).map_or("<unknown>", |info| info.name)
    }

    /// Whether the role holds one child or an ordered list of them.
    pub fn cardinality(self) -> Cardinality {
        self.cardinality
    }

    /// Runtime counterpart of [`Slot::admits`] for untyped role ids.
    pub fn admits(self, category: NodeCategory) -> bool {
        category_admits(self.accepts, category)
    }
}

impl PartialEq for RoleId {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for RoleId {}

impl PartialOrd for RoleId {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RoleId {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.index.cmp(&other.index)
    }
}

impl Hash for RoleId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state)
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cardinality {
    /// At most one child; `set_child` replaces it.
    Single,
    /// Any number of children, kept in insertion order.
    Many,
}

/// Marker describing which node category a role accepts.
///
/// Pattern placeholders are accepted by every slot so that pattern trees
/// can be built from the same node kinds as the trees they search.
pub trait Slot: 'static {
    /// `None` accepts any category.
    const CATEGORY: Option<NodeCategory>;

    fn admits(category: NodeCategory) -> bool {
        category_admits(Self::CATEGORY, category)
    }
}

fn category_admits(accepts: Option<NodeCategory>, category: NodeCategory) -> bool {
    match accepts {
        None => true,
        Some(expected) => expected == category || category == NodeCategory::Pattern,
    }
}

/// Keywords and punctuation.
#[derive(Debug, Clone, Copy)]
pub struct TokenSlot;

/// Bare names.
#[derive(Debug, Clone, Copy)]
pub struct IdentifierSlot;

#[derive(Debug, Clone, Copy)]
pub struct ExpressionSlot;

#[derive(Debug, Clone, Copy)]
pub struct StatementSlot;

/// Any node at all. Used by the pattern placeholders.
#[derive(Debug, Clone, Copy)]
pub struct AnySlot;

impl Slot for TokenSlot {
    const CATEGORY: Option<NodeCategory> = Some(NodeCategory::Token);
}

impl Slot for IdentifierSlot {
    const CATEGORY: Option<NodeCategory> = Some(NodeCategory::Identifier);
}

impl Slot for ExpressionSlot {
    const CATEGORY: Option<NodeCategory> = Some(NodeCategory::Expression);
}

impl Slot for StatementSlot {
    const CATEGORY: Option<NodeCategory> = Some(NodeCategory::Statement);
}

impl Slot for AnySlot {
    const CATEGORY: Option<NodeCategory> = None;
}

/// A typed key into a node's children.
pub struct Role<S: Slot> {
    id: RoleId,
    name: &'static str,
    cardinality: Cardinality,
    _slot: PhantomData<fn() -> S>,
}

impl<S: Slot> Role<S> {
    /// Define a fresh single-valued role.
    pub fn define(name: &'static str) -> Self {
        Self::register(name, Cardinality::Single)
    }

    /// Define a fresh role that holds an ordered list of children.
    pub fn define_many(name: &'static str) -> Self {
        Self::register(name, Cardinality::Many)
    }

    fn register(name: &'static str, cardinality: Cardinality) -> Self {
        let mut registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
        // Ids are dense indices into the registry.
        let id = RoleId {
            index: registry.len() as u32,
            cardinality,
            accepts: S::CATEGORY,
        };
        registry.push(RoleInfo {
            id,
            name,
            cardinality,
            accepts: S::CATEGORY,
        });
        tracing::trace!(role = name, id = id.index, "defined role");
        Self {
            id,
            name,
            cardinality,
            _slot: PhantomData,
        }
    }

    pub fn id(&self) -> RoleId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    pub fn is_many(&self) -> bool {
        self.cardinality == Cardinality::Many
    }

    /// Whether a node of `category` may be attached under this role.
    pub fn admits(&self, category: NodeCategory) -> bool {
        S::admits(category)
    }
}

impl<S: Slot> Clone for Role<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Slot> Copy for Role<S> {}

impl<S: Slot> PartialEq for Role<S> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<S: Slot> Eq for Role<S> {}

impl<S: Slot> Hash for Role<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl<S: Slot> fmt::Debug for Role<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Role({}#{})", self.name, self.id.index)
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Registry entry for a defined role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleInfo {
    pub id: RoleId,
    pub name: &'static str,
    pub cardinality: Cardinality,
    /// Accepted node category, `None` for any.
    pub accepts: Option<NodeCategory>,
}

static REGISTRY: Lazy<Mutex<Vec<RoleInfo>>> = Lazy::new(|| Mutex::new(Vec::new()));

fn role_info(id: RoleId) -> Option<RoleInfo> {
    let registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
    registry.get(id.index as usize).copied()
}

/// Name of a role, or `<unknown>` for an id that was never defined.
pub fn role_name(id: RoleId) -> &'static str {
    id.name()
}

/// Snapshot of every role defined so far, in definition order.
pub fn registered_roles() -> Vec<RoleInfo> {
    REGISTRY
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

// ============================================================================
// Well-known roles
// ============================================================================

/// Roles shared by every node kind.
///
/// Constructors must attach children under these roles rather than
/// defining ad-hoc roles per instance.
#[derive(Debug)]
pub struct Roles {
    pub keyword: Role<TokenSlot>,
    pub identifier: Role<IdentifierSlot>,
    pub semicolon: Role<TokenSlot>,
    pub colon: Role<TokenSlot>,
    pub lbrace: Role<TokenSlot>,
    pub rbrace: Role<TokenSlot>,
    pub operator: Role<TokenSlot>,
    pub expression: Role<ExpressionSlot>,
    pub left: Role<ExpressionSlot>,
    pub right: Role<ExpressionSlot>,
    pub statement: Role<StatementSlot>,
    pub pattern_child: Role<AnySlot>,
    pub alternative: Role<AnySlot>,
}

impl Roles {
    fn define() -> Self {
        Self {
            keyword: Role::define("Keyword"),
            identifier: Role::define("Identifier"),
            semicolon: Role::define("Semicolon"),
            colon: Role::define("Colon"),
            lbrace: Role::define("LBrace"),
            rbrace: Role::define("RBrace"),
            operator: Role::define("Operator"),
            expression: Role::define("Expression"),
            left: Role::define("Left"),
            right: Role::define("Right"),
            statement: Role::define_many("Statement"),
            pattern_child: Role::define("PatternChild"),
            alternative: Role::define_many("Alternative"),
        }
    }
}

pub static ROLES: Lazy<Roles> = Lazy::new(Roles::define);
