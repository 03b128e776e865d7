// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Deep Tree: a composed node tree with encapsulated boundary roots.
//!
//! This crate models the part of a document that event routing cares about:
//!
//! - A single document root, plus elements, text, and comments linked by structural parents.
//! - Boundary roots (encapsulated scopes, similar to shadow roots) attached to host elements.
//!   A boundary root has no structural parent; its host stands in for it from the outside.
//! - Per-element resolved positioning ([`Position`]) and optional layout bounds.
//!
//! It does not compute styles or layout. Upstream code resolves those and writes the results
//! into the tree with [`Tree::set_position`] and [`Tree::set_bounds`].
//!
//! ## API overview
//!
//! - [`Tree`]: generational arena owning all nodes.
//! - [`NodeId`]: generational handle of a node; stale handles are reported as absent.
//! - [`NodeData`] / [`Element`]: node payloads.
//! - [`TreeError`]: structural edits that were rejected.
//!
//! Key operations:
//! - [`Tree::insert`], [`Tree::attach_boundary`], [`Tree::reparent`], [`Tree::detach`],
//!   [`Tree::remove`].
//! - [`Tree::contains`]: ordinary single-scope containment.
//! - [`Tree::composed_parent_of`] / [`Tree::composed_path`]: boundary-crossing parent and the
//!   innermost-first event path an event source would report.
//! - [`Tree::hit_test_point`]: topmost connected element under a point.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod tree;
mod types;

pub use error::TreeError;
pub use tree::{ComposedPath, Hit, Tree};
pub use types::{Element, NodeData, NodeId, Position};
