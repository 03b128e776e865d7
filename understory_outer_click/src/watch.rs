// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document-level outer-click watching for several components.
//!
//! Collapsible widgets (expansion lists, dropdowns, menus) typically start listening for
//! document clicks when they are connected and stop when they are disconnected. On every
//! click they ask whether it was an outer click and collapse if so.
//! [`OuterClickWatch`] keeps that set of listeners in one place. The host registers a
//! component with [`OuterClickWatch::watch`] on connect, removes it with
//! [`OuterClickWatch::unwatch`] on disconnect, and feeds each click's composed path to
//! [`OuterClickWatch::outer_clicks`] to learn which components to collapse.
//!
//! ```
//! # #[cfg(feature = "deep_tree_adapter")]
//! # {
//! use understory_deep_tree::{NodeData, Tree};
//! use understory_outer_click::popup::PopupRules;
//! use understory_outer_click::watch::OuterClickWatch;
//!
//! let mut tree = Tree::new();
//! let body = tree.insert(Some(tree.document()), NodeData::element("body"));
//! let list = tree.insert(Some(body), NodeData::element("x-expansion-list"));
//! let item = tree.insert(Some(list), NodeData::element("x-item"));
//! let toolbar = tree.insert(Some(body), NodeData::element("x-toolbar"));
//!
//! let mut watch = OuterClickWatch::new();
//! watch.watch(list);
//! watch.watch(toolbar);
//!
//! let rules = PopupRules::new();
//! let dismissed = watch.outer_clicks(&tree, &rules, &tree.composed_path(item)).unwrap();
//! assert_eq!(&dismissed[..], &[toolbar]);
//! # }
//! ```

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::classify::is_outer_click;
use crate::popup::PopupRules;
use crate::types::DocumentLookup;
use crate::walk::TraversalError;

/// Components that receive outer-click notifications, in registration order.
#[derive(Clone, Debug)]
pub struct OuterClickWatch<K> {
    watched: Vec<K>,
}

impl<K> Default for OuterClickWatch<K> {
    fn default() -> Self {
        Self {
            watched: Vec::new(),
        }
    }
}

impl<K: Copy + Eq> OuterClickWatch<K> {
    /// Create an empty watch list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `component`. Returns `false` if it was already watched.
    pub fn watch(&mut self, component: K) -> bool {
        if self.is_watching(&component) {
            return false;
        }
        self.watched.push(component);
        true
    }

    /// Stop watching `component`. Returns `false` if it was not watched.
    pub fn unwatch(&mut self, component: &K) -> bool {
        let before = self.watched.len();
        self.watched.retain(|c| c != component);
        self.watched.len() != before
    }

    /// Returns `true` if `component` is watched.
    pub fn is_watching(&self, component: &K) -> bool {
        self.watched.contains(component)
    }

    /// Watched components in registration order.
    pub fn watched(&self) -> &[K] {
        &self.watched
    }

    /// Number of watched components.
    pub fn len(&self) -> usize {
        self.watched.len()
    }

    /// Returns `true` if nothing is watched.
    pub fn is_empty(&self) -> bool {
        self.watched.is_empty()
    }

    /// Watched components for which the event with composed `path` is an outer click.
    ///
    /// Results keep registration order. The first traversal error aborts the scan.
    pub fn outer_clicks<T>(
        &self,
        tree: &T,
        rules: &PopupRules<T, K>,
        path: &[K],
    ) -> Result<SmallVec<[K; 4]>, TraversalError>
    where
        T: DocumentLookup<K>,
    {
        let mut out = SmallVec::new();
        for component in &self.watched {
            if is_outer_click(tree, rules, path, component)? {
                out.push(*component);
            }
        }
        Ok(out)
    }
}
