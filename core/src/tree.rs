//! Node arena and the role-keyed child mechanism.
//!
//! Every node lives in an [`Ast`] and is addressed by a [`NodeId`]. A node
//! owns its children exclusively; the parent link is a plain handle used for
//! navigation only, so there are no ownership cycles. Detaching a child makes
//! it a root again: it stays in the arena until the `Ast` is dropped.
//!
//! Handles are only meaningful for the `Ast` that produced them. Passing a
//! handle from another arena either panics (out of bounds) or addresses an
//! unrelated node, exactly like indexing a slice with a foreign index.

use core::fmt;

use smallvec::SmallVec;

use crate::error::AstError;
use crate::kind::NodeKind;
use crate::role::{Role, RoleId, Slot};

/// Stable handle to a node inside an [`Ast`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

type ChildList = SmallVec<[(RoleId, NodeId); 4]>;

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: ChildList,
}

/// Arena owning a forest of syntax nodes.
#[derive(Debug, Clone, Default)]
pub struct Ast {
    nodes: Vec<NodeData>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes ever allocated, detached ones included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node allocated at or after `len`. Nodes below `len` must
    /// not link to the dropped ones.
    pub(crate) fn truncate(&mut self, len: usize) {
        debug_assert!(self.nodes[..len.min(self.nodes.len())].iter().all(|data| {
            data.parent.is_none_or(|NodeId(p)| (p as usize) < len)
                && data.children.iter().all(|&(_, NodeId(c))| (c as usize) < len)
        }));
        self.nodes.truncate(len);
    }

    /// Allocate a new root node with no children.
    pub fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            kind,
            parent: None,
            children: ChildList::new(),
        });
        id
    }

    fn data(&self, node: NodeId) -> &NodeData {
        &self.nodes[node.index()]
    }

    fn data_mut(&mut self, node: NodeId) -> &mut NodeData {
        &mut self.nodes[node.index()]
    }

    pub fn kind(&self, node: NodeId) -> &NodeKind {
        &self.data(node).kind
    }

    pub(crate) fn kind_mut(&mut self, node: NodeId) -> &mut NodeKind {
        &mut self.data_mut(node).kind
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.data(node).parent
    }

    pub fn is_root(&self, node: NodeId) -> bool {
        self.parent(node).is_none()
    }

    /// All children in tree order, labelled with their role.
    pub fn children(&self, node: NodeId) -> &[(RoleId, NodeId)] {
        &self.data(node).children
    }

    pub fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.children(node).first().map(|&(_, child)| child)
    }

    /// Role under which `node` is attached to its parent.
    pub fn role_of(&self, node: NodeId) -> Option<RoleId> {
        let parent = self.parent(node)?;
        self.children(parent)
            .iter()
            .find(|&&(_, child)| child == node)
            .map(|&(role, _)| role)
    }

    fn position_in_parent(&self, node: NodeId) -> Option<(NodeId, usize)> {
        let parent = self.parent(node)?;
        let position = self
            .children(parent)
            .iter()
            .position(|&(_, child)| child == node)?;
        Some((parent, position))
    }

    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let (parent, position) = self.position_in_parent(node)?;
        self.children(parent)
            .get(position + 1)
            .map(|&(_, sibling)| sibling)
    }

    pub fn prev_sibling(&self, node: NodeId) -> Option<NodeId> {
        let (parent, position) = self.position_in_parent(node)?;
        let previous = position.checked_sub(1)?;
        Some(self.children(parent)[previous].1)
    }

    /// Whether `ancestor` is a strict ancestor of `node`.
    pub fn is_ancestor_of(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.parent(node);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.parent(parent);
        }
        false
    }

    // ========================================================================
    // Role-keyed access
    // ========================================================================

    /// Child attached under `role`, or `None` when the slot is empty.
    ///
    /// For a many-valued role this is the first child.
    pub fn get_child<S: Slot>(&self, node: NodeId, role: &Role<S>) -> Option<NodeId> {
        self.child_by_role_id(node, role.id())
    }

    pub(crate) fn child_by_role_id(&self, node: NodeId, role: RoleId) -> Option<NodeId> {
        self.children(node)
            .iter()
            .find(|&&(r, _)| r == role)
            .map(|&(_, child)| child)
    }

    /// Children attached under `role`, in tree order.
    pub fn children_by_role<'a, S: Slot>(
        &'a self,
        node: NodeId,
        role: &Role<S>,
    ) -> impl Iterator<Item = NodeId> + use<'a, S> {
        self.children_by_role_id(node, role.id())
    }

    pub(crate) fn children_by_role_id(
        &self,
        node: NodeId,
        role: RoleId,
    ) -> impl Iterator<Item = NodeId> + '_ {
        self.children(node)
            .iter()
            .filter(move |&&(r, _)| r == role)
            .map(|&(_, child)| child)
    }

    /// Replace, create or remove the single child under `role`.
    ///
    /// `None` detaches the current child. `Some(child)` replaces the current
    /// child in place, or appends when the slot was empty. Returns the
    /// detached child, which becomes a root again.
    pub fn set_child<S: Slot>(
        &mut self,
        node: NodeId,
        role: &Role<S>,
        child: Option<NodeId>,
    ) -> Result<Option<NodeId>, AstError> {
        if role.is_many() {
            return Err(AstError::NotSingleValued { role: role.name() });
        }
        let Some(child) = child else {
            return Ok(self.take_child(node, role.id()));
        };
        if self.get_child(node, role) == Some(child) {
            return Ok(None);
        }
        self.check_attach(node, role.id(), child)?;
        Ok(self.put_child(node, role.id(), child, None))
    }

    /// Append `child` under a many-valued role.
    pub fn add_child<S: Slot>(
        &mut self,
        node: NodeId,
        role: &Role<S>,
        child: NodeId,
    ) -> Result<(), AstError> {
        if !role.is_many() {
            return Err(AstError::NotMultiValued { role: role.name() });
        }
        self.check_attach(node, role.id(), child)?;
        self.attach_new(node, role.id(), child);
        Ok(())
    }

    /// Insert `child` under `role` right before `anchor`, another child of
    /// `node`.
    ///
    /// For a single-valued role that is already occupied the existing child
    /// is replaced in place and `anchor` is ignored.
    pub fn insert_child_before<S: Slot>(
        &mut self,
        node: NodeId,
        anchor: NodeId,
        role: &Role<S>,
        child: NodeId,
    ) -> Result<Option<NodeId>, AstError> {
        if self.parent(anchor) != Some(node) {
            return Err(AstError::NotAChild {
                parent: node,
                anchor,
            });
        }
        self.check_attach(node, role.id(), child)?;
        if role.is_many() {
            let position = self
                .children(node)
                .iter()
                .position(|&(_, c)| c == anchor)
                .unwrap_or(self.children(node).len());
            self.data_mut(node)
                .children
                .insert(position, (role.id(), child));
            self.data_mut(child).parent = Some(node);
            Ok(None)
        } else {
            Ok(self.put_child(node, role.id(), child, Some(anchor)))
        }
    }

    /// Remove `node` from its parent. Returns the role it was attached
    /// under, or `None` if it already was a root.
    pub fn detach(&mut self, node: NodeId) -> Option<RoleId> {
        let (parent, position) = self.position_in_parent(node)?;
        let (role, _) = self.data_mut(parent).children.remove(position);
        self.data_mut(node).parent = None;
        tracing::debug!(%node, %parent, %role, "detached node");
        Some(role)
    }

    /// Put `replacement` where `node` currently sits, same role and
    /// position. `node` becomes a root.
    pub fn replace_with(&mut self, node: NodeId, replacement: NodeId) -> Result<(), AstError> {
        if node == replacement {
            return Ok(());
        }
        let (parent, position) = self
            .position_in_parent(node)
            .ok_or(AstError::Detached { node })?;
        let role = self.children(parent)[position].0;
        self.check_attach(parent, role, replacement)?;
        self.data_mut(parent).children[position].1 = replacement;
        self.data_mut(replacement).parent = Some(parent);
        self.data_mut(node).parent = None;
        tracing::debug!(%node, %replacement, %role, "replaced node");
        Ok(())
    }

    fn check_attach(&self, node: NodeId, role: RoleId, child: NodeId) -> Result<(), AstError> {
        let found = self.kind(child).category();
        if !role.admits(found) {
            return Err(AstError::SlotMismatch {
                role: role.name(),
                found,
            });
        }
        if let Some(parent) = self.parent(child) {
            return Err(AstError::AlreadyAttached { child, parent });
        }
        if child == node || self.is_ancestor_of(child, node) {
            return Err(AstError::Cycle {
                parent: node,
                child,
            });
        }
        Ok(())
    }

    /// Validate attaching every node of `children` under `node` before any
    /// of them is attached, so a failure leaves all of them untouched.
    pub(crate) fn check_attach_all(
        &self,
        node: NodeId,
        children: &[(RoleId, NodeId)],
    ) -> Result<(), AstError> {
        for (position, &(role, child)) in children.iter().enumerate() {
            if children[..position].iter().any(|&(_, earlier)| earlier == child) {
                return Err(AstError::AlreadyAttached {
                    child,
                    parent: node,
                });
            }
            self.check_attach(node, role, child)?;
        }
        Ok(())
    }

    /// Append a freshly allocated root under `role`. Callers guarantee the
    /// checks `check_attach` would perform.
    pub(crate) fn attach_new(&mut self, node: NodeId, role: RoleId, child: NodeId) {
        debug_assert!(self.parent(child).is_none());
        self.data_mut(node).children.push((role, child));
        self.data_mut(child).parent = Some(node);
    }

    /// Occupy the single slot `role`: replace in place if occupied,
    /// otherwise insert before `before` (or append). Returns the replaced
    /// child.
    pub(crate) fn put_child(
        &mut self,
        node: NodeId,
        role: RoleId,
        child: NodeId,
        before: Option<NodeId>,
    ) -> Option<NodeId> {
        let children = &mut self.data_mut(node).children;
        let old = match children.iter().position(|&(r, _)| r == role) {
            Some(position) => Some(core::mem::replace(&mut children[position].1, child)),
            None => {
                let position = before
                    .and_then(|anchor| children.iter().position(|&(_, c)| c == anchor))
                    .unwrap_or(children.len());
                children.insert(position, (role, child));
                None
            }
        };
        if let Some(old) = old {
            self.data_mut(old).parent = None;
            tracing::debug!(node = %node, %old, %child, %role, "replaced child");
        }
        self.data_mut(child).parent = Some(node);
        old
    }

    /// Remove the child under `role`, if any.
    pub(crate) fn take_child(&mut self, node: NodeId, role: RoleId) -> Option<NodeId> {
        let children = &mut self.data_mut(node).children;
        let position = children.iter().position(|&(r, _)| r == role)?;
        let (_, old) = children.remove(position);
        self.data_mut(old).parent = None;
        tracing::debug!(%node, %old, %role, "removed child");
        Some(old)
    }

    // ========================================================================
    // Traversal and copying
    // ========================================================================

    /// Pre-order iterator over `root` and everything below it.
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        Descendants {
            ast: self,
            stack: vec![root],
        }
    }

    /// Deep copy of the subtree at `node`, returned as a new root.
    pub fn clone_subtree(&mut self, node: NodeId) -> NodeId {
        let kind = self.kind(node).clone();
        let copy = self.alloc(kind);
        let mut stack = vec![(node, copy)];
        while let Some((original, copy)) = stack.pop() {
            let children = self.data(original).children.clone();
            for (role, child) in children {
                let kind = self.kind(child).clone();
                let child_copy = self.alloc(kind);
                self.attach_new(copy, role, child_copy);
                stack.push((child, child_copy));
            }
        }
        copy
    }

    /// Deep copy of a subtree that lives in another arena.
    pub fn import(&mut self, source: &Ast, node: NodeId) -> NodeId {
        let copy = self.alloc(source.kind(node).clone());
        let mut stack = vec![(node, copy)];
        while let Some((original, copy)) = stack.pop() {
            for &(role, child) in source.children(original) {
                let child_copy = self.alloc(source.kind(child).clone());
                self.attach_new(copy, role, child_copy);
                stack.push((child, child_copy));
            }
        }
        copy
    }
}

/// Iterator returned by [`Ast::descendants`].
pub struct Descendants<'a> {
    ast: &'a Ast,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let node = self.stack.pop()?;
        self.stack
            .extend(self.ast.children(node).iter().rev().map(|&(_, child)| child));
        Some(node)
    }
}
