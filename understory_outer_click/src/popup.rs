// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popup detection from positioning, with caller-supplied exceptions.
//!
//! An element counts as a popup (menu, dialog, tooltip, …) when its resolved position is
//! [`Absolute`](crate::types::Position::Absolute) or [`Fixed`](crate::types::Position::Fixed).
//! Applications also use those modes for ordinary layout such as sidebars and sticky
//! headers, which the positioning heuristic cannot tell apart from overlays. [`PopupRules`]
//! holds an ordered list of false-positive rules; if any of them claims a floating element,
//! that element is not a popup.
//!
//! Rules are plain values owned by whoever composes the classifier and passed to each call,
//! so separate components (and separate tests) never observe each other's rules.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::types::StyleLookup;

/// A rule that recognises a floating element as not being a popup.
///
/// Receives the document and the candidate element.
pub type FalsePositive<T, K> = Box<dyn Fn(&T, &K) -> bool>;

/// Popup classifier configuration: an append-only list of false-positive rules.
///
/// ```
/// # #[cfg(feature = "deep_tree_adapter")]
/// # {
/// use understory_deep_tree::{Element, Position, Tree};
/// use understory_outer_click::popup::PopupRules;
///
/// let mut tree = Tree::new();
/// let sidebar = tree.insert(
///     Some(tree.document()),
///     Element::new("nav").with_class("sidebar").with_position(Position::Fixed),
/// );
/// let menu = tree.insert(
///     Some(tree.document()),
///     Element::new("x-menu").with_position(Position::Fixed),
/// );
///
/// let mut rules = PopupRules::new();
/// assert!(rules.is_popup(&tree, &sidebar));
///
/// rules.register_false_positive(|tree: &Tree, el| {
///     tree.element(*el).is_some_and(|e| e.has_class("sidebar"))
/// });
/// assert!(!rules.is_popup(&tree, &sidebar));
/// assert!(rules.is_popup(&tree, &menu));
/// # }
/// ```
pub struct PopupRules<T: ?Sized, K> {
    false_positives: Vec<FalsePositive<T, K>>,
}

impl<T: ?Sized, K> fmt::Debug for PopupRules<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PopupRules")
            .field("false_positives", &self.false_positives.len())
            .finish()
    }
}

impl<T: ?Sized, K> Default for PopupRules<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, K> PopupRules<T, K> {
    /// Rules with no exceptions: every floating element is a popup.
    pub const fn new() -> Self {
        Self {
            false_positives: Vec::new(),
        }
    }

    /// Append a false-positive rule.
    ///
    /// Rules are never removed or de-duplicated; registering the same logic twice is harmless.
    pub fn register_false_positive(&mut self, rule: impl Fn(&T, &K) -> bool + 'static) {
        self.false_positives.push(Box::new(rule));
    }

    /// Builder form of [`PopupRules::register_false_positive`].
    #[must_use]
    pub fn with_false_positive(mut self, rule: impl Fn(&T, &K) -> bool + 'static) -> Self {
        self.register_false_positive(rule);
        self
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.false_positives.len()
    }

    /// Returns `true` if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.false_positives.is_empty()
    }

    /// Returns `true` if any rule claims `element`.
    ///
    /// Rules run in registration order and stop at the first match.
    pub fn is_false_positive(&self, tree: &T, element: &K) -> bool {
        self.false_positives.iter().any(|rule| rule(tree, element))
    }

    /// Returns `true` if `element` is floating and no rule claims it.
    ///
    /// Rules are only consulted for floating elements.
    pub fn is_popup(&self, tree: &T, element: &K) -> bool
    where
        T: StyleLookup<K>,
    {
        tree.position_of(element).is_floating() && !self.is_false_positive(tree, element)
    }
}
