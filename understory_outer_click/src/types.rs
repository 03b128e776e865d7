// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node classification and the lookup traits a host document provides.
//!
//! The algorithms in this crate never own nodes. They read structure and resolved style
//! through these traits, keyed by a small copyable handle `K`.

use crate::walk::{DEFAULT_MAX_DEPTH, TraversalError};

/// Coarse node type, used in place of runtime instance checks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A text run.
    Text,
    /// An element; only elements can be popups.
    Element,
    /// Root of an encapsulated scope with a host element.
    BoundaryRoot,
    /// Anything else: documents, comments, fragments.
    Other,
}

/// Resolved positioning mode of an element.
///
/// This crate depends on no particular document model, so hosts convert their own style
/// values into this enum in [`StyleLookup::position_of`]. The `deep_tree_adapter` feature
/// provides the conversion from `understory_deep_tree::Position`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Position {
    /// Normal flow.
    #[default]
    Static,
    /// Normal flow, offset relative to itself.
    Relative,
    /// Out of flow, relative to the nearest positioned ancestor.
    Absolute,
    /// Out of flow, relative to the viewport.
    Fixed,
    /// Normal flow until a scroll threshold is crossed.
    Sticky,
}

impl Position {
    /// Returns `true` for [`Position::Absolute`] and [`Position::Fixed`].
    pub const fn is_floating(self) -> bool {
        matches!(self, Self::Absolute | Self::Fixed)
    }
}

/// Structural and boundary parent lookup.
///
/// Implementations must keep the combined parent/host chain acyclic. The walkers in
/// [`walk`](crate::walk) cap traversal depth and report a
/// [`TraversalError`](crate::walk::TraversalError) if that ever fails to hold.
pub trait ComposedParent<K> {
    /// Structural parent of `node`, if any.
    fn parent_of(&self, node: &K) -> Option<K>;

    /// Host element of `node` if it is a boundary root, `None` for every other node.
    fn host_of(&self, node: &K) -> Option<K>;
}

/// Node kind and resolved style lookup.
pub trait StyleLookup<K> {
    /// Coarse type of `node`.
    fn kind_of(&self, node: &K) -> NodeKind;

    /// Resolved positioning mode of `element`. Only consulted for [`NodeKind::Element`] nodes.
    fn position_of(&self, element: &K) -> Position;
}

/// Everything the outer-click classifier reads from a document.
pub trait DocumentLookup<K: Copy + Eq>: ComposedParent<K> + StyleLookup<K> {
    /// The document root that connected nodes ultimately hang from.
    fn document(&self) -> K;

    /// Ordinary containment: `node` is `ancestor` or one of its structural descendants.
    ///
    /// Boundary edges are not crossed. The default implementation walks
    /// [`ComposedParent::parent_of`] and fails with [`TraversalError::DepthExceeded`] after
    /// [`DEFAULT_MAX_DEPTH`] steps, like the composed walkers in [`crate::walk`].
    fn contains(&self, ancestor: &K, node: &K) -> Result<bool, TraversalError> {
        let mut cur = *node;
        for _ in 0..DEFAULT_MAX_DEPTH {
            if cur == *ancestor {
                return Ok(true);
            }
            match self.parent_of(&cur) {
                Some(p) => cur = p,
                None => return Ok(false),
            }
        }
        Err(TraversalError::DepthExceeded {
            limit: DEFAULT_MAX_DEPTH,
        })
    }
}
