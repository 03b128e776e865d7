// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Outer Click: decide whether a pointer event happened outside a component.
//!
//! ## Overview
//!
//! Dropdowns, menus, expansion lists, and similar widgets collapse when the user clicks
//! somewhere else. Telling "somewhere else" apart is harder than a containment check:
//!
//! - Documents are split into encapsulated scopes (boundary roots hung off host elements),
//!   so a component's content is not always its structural descendant.
//! - Overlays a component opens (menus, tooltips, pickers) are often rendered at the end of
//!   the document for stacking reasons, far outside the component's subtree.
//! - Handlers sometimes remove the clicked element before the outer-click check runs.
//!
//! This crate classifies one event at a time from its composed path. It does not dispatch
//! events or resolve styles; it reads the host document through small lookup traits.
//!
//! ## Modules
//!
//! - [`walk`]: boundary-crossing ancestor traversal (`immediate_parent`, `find_ancestor`,
//!   `contains_deep`) with a depth guard.
//! - [`popup`]: positioning-based popup detection with caller-supplied false-positive rules.
//! - [`classify`]: the outer-click decision, with the reason that produced it.
//! - [`watch`]: a registry of components listening for outer clicks.
//! - [`types`]: node kinds, positioning modes, and the host lookup traits.
//! - [`adapters`]: trait implementations for other Understory crates.
//!
//! ## Example
//!
//! ```
//! # #[cfg(feature = "deep_tree_adapter")]
//! # {
//! use understory_deep_tree::{Element, NodeData, Position, Tree};
//! use understory_outer_click::classify::{InsideReason, Verdict, classify};
//! use understory_outer_click::popup::PopupRules;
//!
//! let mut tree = Tree::new();
//! let body = tree.insert(Some(tree.document()), NodeData::element("body"));
//! let menu_button = tree.insert(Some(body), NodeData::element("x-menu-button"));
//! let menu = tree.insert(Some(body), Element::new("x-menu").with_position(Position::Fixed));
//! let entry = tree.insert(Some(menu), NodeData::element("x-menu-item"));
//!
//! let rules = PopupRules::new();
//! let verdict = classify(&tree, &rules, &tree.composed_path(entry), &menu_button).unwrap();
//! assert_eq!(verdict, Verdict::Inside(InsideReason::OwnedPopup(menu)));
//! # }
//! ```
//!
//! ## Features
//!
//! - `deep_tree_adapter` (default): implements the lookup traits for
//!   `understory_deep_tree::Tree`.
//! - `std` / `libm`: forwarded to dependencies that need a float backend.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod classify;
pub mod popup;
pub mod types;
pub mod walk;
pub mod watch;

#[cfg(test)]
mod test_dom;
