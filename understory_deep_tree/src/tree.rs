// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, boundary edges, queries.

use alloc::{vec, vec::Vec};
use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::error::TreeError;
use crate::types::{Element, NodeData, NodeId, Position};

/// Innermost-first chain of nodes an event travels through.
///
/// Most paths are shallow enough to stay inline.
pub type ComposedPath = SmallVec<[NodeId; 16]>;

/// Composed node tree.
///
/// Every tree owns a single document root, created by [`Tree::new`]. Nodes inserted without
/// a parent (or later detached) stay alive but are not connected to the document.
///
/// Encapsulated scopes are modelled with boundary roots: [`Tree::attach_boundary`] creates a
/// boundary root with no structural parent and records a host edge in both directions. The
/// composed parent of a node is its structural parent if it has one, otherwise its host.
///
/// ## Example
///
/// ```rust
/// use understory_deep_tree::{NodeData, Tree};
///
/// let mut tree = Tree::new();
/// let body = tree.insert(Some(tree.document()), NodeData::element("body"));
/// let host = tree.insert(Some(body), NodeData::element("x-menu"));
/// let boundary = tree.attach_boundary(host).unwrap();
/// let item = tree.insert(Some(boundary), NodeData::element("li"));
///
/// // Ordinary containment stops at the boundary…
/// assert!(!tree.contains(host, item));
/// // …while the composed path crosses it.
/// let path = tree.composed_path(item);
/// assert_eq!(&path[..], &[item, boundary, host, body, tree.document()]);
/// ```
pub struct Tree {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    document: NodeId,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Tree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .field("document", &self.document)
            .finish_non_exhaustive()
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a hit test.
#[derive(Clone, Debug)]
pub struct Hit {
    /// The matched element.
    pub node: NodeId,
    /// Composed path from the element out to the document (inclusive).
    pub path: ComposedPath,
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Set on boundary roots.
    host: Option<NodeId>,
    /// Set on elements hosting a boundary root.
    boundary: Option<NodeId>,
    data: NodeData,
}

impl Node {
    fn new(generation: u32, data: NodeData) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            host: None,
            boundary: None,
            data,
        }
    }
}

impl Tree {
    /// Create a tree holding only a document root.
    pub fn new() -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            document: NodeId::new(0, 0),
        };
        tree.document = tree.alloc(NodeData::Document);
        tree
    }

    /// The document root.
    pub fn document(&self) -> NodeId {
        self.document
    }

    /// Insert a new node as the last child of `parent`, or unparented if `None`.
    ///
    /// A stale `parent` is treated like `None`.
    pub fn insert(&mut self, parent: Option<NodeId>, data: impl Into<NodeData>) -> NodeId {
        let id = self.alloc(data.into());
        if let Some(p) = parent
            && self.is_alive(p)
        {
            self.link_parent(id, p);
        }
        id
    }

    /// Attach a new, empty boundary root to `host`.
    ///
    /// The boundary root has no structural parent; its composed parent is `host`.
    pub fn attach_boundary(&mut self, host: NodeId) -> Result<NodeId, TreeError> {
        let host_node = self.node_opt(host).ok_or(TreeError::StaleNode(host))?;
        if host_node.data.as_element().is_none() {
            return Err(TreeError::NotAnElement(host));
        }
        if let Some(boundary) = host_node.boundary {
            return Err(TreeError::BoundaryExists { host, boundary });
        }
        let boundary = self.alloc(NodeData::BoundaryRoot);
        self.node_mut(boundary).host = Some(host);
        self.node_mut(host).boundary = Some(boundary);
        Ok(boundary)
    }

    /// Move `id` under `new_parent` (appended last), or detach it if `None`.
    pub fn reparent(&mut self, id: NodeId, new_parent: Option<NodeId>) -> Result<(), TreeError> {
        if !self.is_alive(id) {
            return Err(TreeError::StaleNode(id));
        }
        if id == self.document {
            return Err(TreeError::DocumentRoot);
        }
        if let Some(p) = new_parent {
            if !self.is_alive(p) {
                return Err(TreeError::StaleNode(p));
            }
            // Walk the composed chain so host edges can't close a loop either.
            let mut cur = Some(p);
            while let Some(n) = cur {
                if n == id {
                    return Err(TreeError::Cycle {
                        node: id,
                        parent: p,
                    });
                }
                cur = self.composed_parent_of(n);
            }
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        if let Some(p) = new_parent {
            self.link_parent(id, p);
        }
        Ok(())
    }

    /// Detach `id` from its structural parent, keeping it (and its subtree) alive.
    ///
    /// Detaching a boundary root has no effect on its host edge.
    pub fn detach(&mut self, id: NodeId) -> Result<(), TreeError> {
        self.reparent(id, None)
    }

    /// Remove a node, its subtree, and any boundary roots hosted in that subtree.
    ///
    /// Removing the document or a stale id is a no-op.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) || id == self.document {
            return;
        }
        let mut stack = vec![id];
        while let Some(n) = stack.pop() {
            // A reparented boundary root can be reached through both its host and its parent.
            let Some(node) = self.nodes[n.idx()].take() else {
                continue;
            };
            self.free_list.push(n.idx());
            // Edges into nodes that survive the sweep must not keep the freed id.
            if let Some(parent) = node.parent
                && let Some(p) = self.node_opt_mut(parent)
            {
                p.children.retain(|c| *c != n);
            }
            if let Some(host) = node.host
                && let Some(h) = self.node_opt_mut(host)
                && h.boundary == Some(n)
            {
                h.boundary = None;
            }
            stack.extend(node.children);
            stack.extend(node.boundary);
        }
    }

    /// Returns true if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some()
    }

    /// Returns the structural parent of a live node, or `None` for roots and stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// Returns the host of a boundary root.
    pub fn host_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.host)
    }

    /// Returns the boundary root attached to a host element.
    pub fn boundary_of(&self, host: NodeId) -> Option<NodeId> {
        self.node_opt(host).and_then(|n| n.boundary)
    }

    /// Structural parent if present, otherwise the host of a boundary root.
    pub fn composed_parent_of(&self, id: NodeId) -> Option<NodeId> {
        let n = self.node_opt(id)?;
        n.parent.or(n.host)
    }

    /// Get the children of a node, or empty slice if node is stale.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id).map_or(&[], |n| &n.children)
    }

    /// Payload of a live node.
    pub fn data(&self, id: NodeId) -> Option<&NodeData> {
        self.node_opt(id).map(|n| &n.data)
    }

    /// Element payload of a live element.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.data(id).and_then(NodeData::as_element)
    }

    /// Resolved position of an element; non-elements and stale ids report [`Position::Static`].
    pub fn position_of(&self, id: NodeId) -> Position {
        self.element(id).map_or(Position::Static, |e| e.position)
    }

    /// Update an element's positioning mode. Ignored for non-elements.
    pub fn set_position(&mut self, id: NodeId, position: Position) {
        if let Some(e) = self.element_mut(id) {
            e.position = position;
        }
    }

    /// Update an element's layout bounds. Ignored for non-elements.
    pub fn set_bounds(&mut self, id: NodeId, bounds: Option<Rect>) {
        if let Some(e) = self.element_mut(id) {
            e.bounds = bounds;
        }
    }

    /// Ordinary containment: `node` is `ancestor` or a structural descendant of it.
    ///
    /// Boundary edges are not followed, so a host does not contain its boundary's content.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        if !self.is_alive(ancestor) {
            return false;
        }
        let mut cur = Some(node).filter(|&n| self.is_alive(n));
        while let Some(n) = cur {
            if n == ancestor {
                return true;
            }
            cur = self.parent_of(n);
        }
        false
    }

    /// Returns true if the composed chain from `id` reaches the document.
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.composed_path(id).last() == Some(&self.document)
    }

    /// Innermost-first path from `target` out through structural parents and hosts.
    ///
    /// Returns an empty path for stale ids.
    pub fn composed_path(&self, target: NodeId) -> ComposedPath {
        let mut out = ComposedPath::new();
        let mut cur = Some(target).filter(|&n| self.is_alive(n));
        while let Some(n) = cur {
            out.push(n);
            cur = self.composed_parent_of(n);
        }
        out
    }

    /// Find the topmost connected element whose bounds contain `point`.
    ///
    /// Elements are visited in composed pre-order: a host's boundary content before its light
    /// children, siblings in document order. The last element visited that contains the
    /// point wins, so later siblings and descendants sit on top.
    pub fn hit_test_point(&self, point: Point) -> Option<Hit> {
        let mut best = None;
        let mut stack = vec![self.document];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if let Some(bounds) = node.data.as_element().and_then(|e| e.bounds)
                && bounds.contains(point)
            {
                best = Some(id);
            }
            stack.extend(node.children.iter().rev().copied());
            stack.extend(node.boundary);
        }
        best.map(|node| Hit {
            node,
            path: self.composed_path(node),
        })
    }

    // --- internals ---

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, data));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, data)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        NodeId::new(idx, generation)
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.node_opt_mut(id).and_then(|n| n.data.as_element_mut())
    }

    fn node(&self, id: NodeId) -> &Node {
        self.node_opt(id).expect("dangling NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.node_opt_mut(id).expect("dangling NodeId")
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        self.node_mut(parent).children.push(id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        self.node_mut(parent).children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }
}
