// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for Understory Deep Tree.
//!
//! ## Feature
//!
//! Enable with `deep_tree_adapter` (on by default).
//!
//! ## Notes
//!
//! Stale ids behave like detached nodes: no parent, no host, kind [`NodeKind::Other`].
//! Documents and comments both map to [`NodeKind::Other`].

use understory_deep_tree::{NodeData, NodeId, Tree};

use crate::types::{ComposedParent, DocumentLookup, NodeKind, Position, StyleLookup};
use crate::walk::TraversalError;

impl ComposedParent<NodeId> for Tree {
    fn parent_of(&self, node: &NodeId) -> Option<NodeId> {
        Self::parent_of(self, *node)
    }

    fn host_of(&self, node: &NodeId) -> Option<NodeId> {
        Self::host_of(self, *node)
    }
}

impl StyleLookup<NodeId> for Tree {
    fn kind_of(&self, node: &NodeId) -> NodeKind {
        match self.data(*node) {
            Some(NodeData::Element(_)) => NodeKind::Element,
            Some(NodeData::Text(_)) => NodeKind::Text,
            Some(NodeData::BoundaryRoot) => NodeKind::BoundaryRoot,
            Some(NodeData::Document | NodeData::Comment(_)) | None => NodeKind::Other,
        }
    }

    fn position_of(&self, element: &NodeId) -> Position {
        Self::position_of(self, *element).into()
    }
}

impl From<understory_deep_tree::Position> for Position {
    fn from(position: understory_deep_tree::Position) -> Self {
        use understory_deep_tree::Position as P;
        match position {
            P::Static => Self::Static,
            P::Relative => Self::Relative,
            P::Absolute => Self::Absolute,
            P::Fixed => Self::Fixed,
            P::Sticky => Self::Sticky,
        }
    }
}

impl DocumentLookup<NodeId> for Tree {
    fn document(&self) -> NodeId {
        Self::document(self)
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> Result<bool, TraversalError> {
        // The tree rejects structural cycles on edit, so the walk always ends.
        Ok(Self::contains(self, *ancestor, *node))
    }
}
