// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::NodeId;

/// Structural edit rejected by the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TreeError {
    /// The identifier does not refer to a live node.
    StaleNode(NodeId),
    /// The edit would make a node its own composed ancestor.
    Cycle {
        /// Node being moved.
        node: NodeId,
        /// Requested parent.
        parent: NodeId,
    },
    /// The document root cannot be moved.
    DocumentRoot,
    /// Boundaries can only be attached to elements.
    NotAnElement(NodeId),
    /// The host already carries a boundary root.
    BoundaryExists {
        /// Host element.
        host: NodeId,
        /// Its existing boundary root.
        boundary: NodeId,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleNode(id) => write!(f, "node {id:?} is not alive"),
            Self::Cycle { node, parent } => {
                write!(f, "moving {node:?} under {parent:?} would create a cycle")
            }
            Self::DocumentRoot => f.write_str("the document root cannot be moved"),
            Self::NotAnElement(id) => write!(f, "node {id:?} is not an element"),
            Self::BoundaryExists { host, boundary } => {
                write!(f, "host {host:?} already has boundary root {boundary:?}")
            }
        }
    }
}

impl core::error::Error for TreeError {}
