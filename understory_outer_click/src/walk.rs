// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary-crossing ancestor traversal.
//!
//! The composed parent of a node is its structural parent when it has one. A boundary root
//! without a structural parent continues at its host. Walking these links from any node
//! visits every scope the node is nested in, up to its top-level root.
//!
//! ## Semantics
//!
//! - Traversal starts at the parent: the start node is never yielded or matched.
//! - The walk is capped at [`DEFAULT_MAX_DEPTH`] ancestors (or a caller-chosen limit). A chain
//!   longer than that is treated as a broken host environment and reported as
//!   [`TraversalError::DepthExceeded`].
//!
//! ## Example
//!
//! ```
//! use understory_outer_click::types::ComposedParent;
//! use understory_outer_click::walk::{contains_deep, find_ancestor, immediate_parent};
//!
//! // 1 is a host; 2 is its boundary root; 3 sits inside the boundary.
//! struct Parents;
//! impl ComposedParent<u32> for Parents {
//!     fn parent_of(&self, node: &u32) -> Option<u32> {
//!         (*node == 3).then_some(2)
//!     }
//!     fn host_of(&self, node: &u32) -> Option<u32> {
//!         (*node == 2).then_some(1)
//!     }
//! }
//!
//! assert_eq!(immediate_parent(&Parents, &2), Some(1));
//! assert_eq!(find_ancestor(&Parents, &3, |n| *n < 3).unwrap(), Some(2));
//! assert!(contains_deep(&Parents, &1, &3).unwrap());
//! assert!(!contains_deep(&Parents, &3, &3).unwrap());
//! ```

use core::fmt;

use crate::types::ComposedParent;

/// Default cap on the number of ancestors visited by one walk.
pub const DEFAULT_MAX_DEPTH: usize = 4096;

/// Ancestor traversal failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraversalError {
    /// The parent/host chain was longer than `limit`, most likely a host cycle.
    DepthExceeded {
        /// The limit that was hit.
        limit: usize,
    },
}

impl fmt::Display for TraversalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthExceeded { limit } => {
                write!(f, "ancestor chain exceeds {limit} nodes (parent/host cycle?)")
            }
        }
    }
}

impl core::error::Error for TraversalError {}

/// Structural parent of `node`, or its host if `node` is a boundary root.
pub fn immediate_parent<K, T>(tree: &T, node: &K) -> Option<K>
where
    T: ComposedParent<K> + ?Sized,
{
    tree.parent_of(node).or_else(|| tree.host_of(node))
}

/// Iterate over the composed ancestors of `node`, innermost first, excluding `node`.
///
/// Yields at most [`DEFAULT_MAX_DEPTH`] ancestors. If more remain, a single
/// [`TraversalError`] is yielded and iteration ends.
pub fn ancestors<'a, K, T>(tree: &'a T, node: &K) -> Ancestors<'a, K, T>
where
    T: ComposedParent<K> + ?Sized,
{
    ancestors_bounded(tree, node, DEFAULT_MAX_DEPTH)
}

/// Like [`ancestors`], with an explicit cap.
pub fn ancestors_bounded<'a, K, T>(tree: &'a T, node: &K, limit: usize) -> Ancestors<'a, K, T>
where
    T: ComposedParent<K> + ?Sized,
{
    Ancestors {
        tree,
        next: immediate_parent(tree, node),
        remaining: limit,
        limit,
    }
}

/// Iterator returned by [`ancestors`] and [`ancestors_bounded`].
pub struct Ancestors<'a, K, T: ?Sized> {
    tree: &'a T,
    next: Option<K>,
    remaining: usize,
    limit: usize,
}

impl<K: fmt::Debug, T: ?Sized> fmt::Debug for Ancestors<'_, K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ancestors")
            .field("next", &self.next)
            .field("remaining", &self.remaining)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

impl<K, T> Iterator for Ancestors<'_, K, T>
where
    T: ComposedParent<K> + ?Sized,
{
    type Item = Result<K, TraversalError>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        if self.remaining == 0 {
            return Some(Err(TraversalError::DepthExceeded { limit: self.limit }));
        }
        self.remaining -= 1;
        self.next = immediate_parent(self.tree, &node);
        Some(Ok(node))
    }
}

/// First composed ancestor of `node` (excluding `node`) that satisfies `predicate`.
pub fn find_ancestor<K, T>(
    tree: &T,
    node: &K,
    predicate: impl FnMut(&K) -> bool,
) -> Result<Option<K>, TraversalError>
where
    T: ComposedParent<K> + ?Sized,
{
    find_ancestor_bounded(tree, node, DEFAULT_MAX_DEPTH, predicate)
}

/// Like [`find_ancestor`], visiting at most `limit` ancestors.
pub fn find_ancestor_bounded<K, T>(
    tree: &T,
    node: &K,
    limit: usize,
    mut predicate: impl FnMut(&K) -> bool,
) -> Result<Option<K>, TraversalError>
where
    T: ComposedParent<K> + ?Sized,
{
    for ancestor in ancestors_bounded(tree, node, limit) {
        let ancestor = ancestor?;
        if predicate(&ancestor) {
            return Ok(Some(ancestor));
        }
    }
    Ok(None)
}

/// Returns `true` if `node` is nested under `ancestor`, crossing boundaries.
///
/// Irreflexive: `contains_deep(tree, a, a)` is `false`.
pub fn contains_deep<K, T>(tree: &T, ancestor: &K, node: &K) -> Result<bool, TraversalError>
where
    K: PartialEq,
    T: ComposedParent<K> + ?Sized,
{
    Ok(find_ancestor(tree, node, |n| n == ancestor)?.is_some())
}
