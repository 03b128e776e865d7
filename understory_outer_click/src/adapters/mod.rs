// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Understory crates.
//!
//! Each adapter is gated behind a feature flag so the classifier itself stays generic over
//! any host document.
//!
//! ## Available Adapters
//!
//! - [`deep_tree`] (`deep_tree_adapter` feature): implements the lookup traits for
//!   [`understory_deep_tree::Tree`], so its composed paths can be classified directly.

#[cfg(feature = "deep_tree_adapter")]
pub mod deep_tree;
