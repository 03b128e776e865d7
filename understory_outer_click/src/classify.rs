// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outer-click classification.
//!
//! ## Overview
//!
//! Decides whether one pointer event happened outside a reference component, given the
//! event's composed path (innermost target first) and the current document state.
//! Components use this to dismiss themselves on outside clicks without dismissing when the
//! user interacts with overlays they opened themselves.
//!
//! ## Rules
//!
//! Evaluated in order; the first rule that applies decides.
//!
//! 1. Empty path: inside (nothing was hit).
//! 2. The target is the reference: inside.
//! 3. Some path entry other than the reference is structurally contained by the reference:
//!    inside.
//! 4. The first path entry that is a popup element (see [`PopupRules`]) decides:
//!    - if the popup deeply contains the reference (for example the component lives in a
//!      dialog), the click is on the popup but outside the component: outside;
//!    - otherwise the popup is treated as one the component opened and rendered elsewhere
//!      in the document for stacking reasons: inside.
//!
//!    Only the innermost popup on the path is considered.
//! 5. The target is no longer connected to the document: inside. Buttons that close their
//!    own dialog are often removed before the outer-click handler runs.
//! 6. Otherwise: outside.
//!
//! ## Example
//!
//! ```
//! # #[cfg(feature = "deep_tree_adapter")]
//! # {
//! use understory_deep_tree::{Element, NodeData, Position, Tree};
//! use understory_outer_click::classify::is_outer_click;
//! use understory_outer_click::popup::PopupRules;
//!
//! let mut tree = Tree::new();
//! let body = tree.insert(Some(tree.document()), NodeData::element("body"));
//! let combo = tree.insert(Some(body), NodeData::element("x-combo"));
//! // The combo's dropdown is rendered as a child of the body.
//! let dropdown = tree.insert(Some(body), Element::new("x-list").with_position(Position::Fixed));
//! let option = tree.insert(Some(dropdown), NodeData::element("x-option"));
//! let elsewhere = tree.insert(Some(body), NodeData::element("p"));
//!
//! let rules = PopupRules::new();
//! assert!(!is_outer_click(&tree, &rules, &tree.composed_path(option), &combo).unwrap());
//! assert!(is_outer_click(&tree, &rules, &tree.composed_path(elsewhere), &combo).unwrap());
//! # }
//! ```

use crate::popup::PopupRules;
use crate::types::{DocumentLookup, NodeKind, StyleLookup};
use crate::walk::{TraversalError, contains_deep, find_ancestor};

/// Why an event was classified as inside the reference.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InsideReason<K> {
    /// The composed path was empty.
    EmptyPath,
    /// The event target is the reference itself.
    Reference,
    /// This path entry is inside the reference's subtree.
    Subtree(K),
    /// This popup does not enclose the reference, so it is treated as owned by it.
    OwnedPopup(K),
    /// The target is no longer connected to the document.
    Detached,
}

/// Why an event was classified as outside the reference.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutsideReason<K> {
    /// This popup encloses the reference; the event hit the popup outside the reference.
    EnclosingPopup(K),
    /// The event is unrelated to the reference.
    Unrelated,
}

/// Result of [`classify`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict<K> {
    /// Not an outer click.
    Inside(InsideReason<K>),
    /// An outer click.
    Outside(OutsideReason<K>),
}

impl<K> Verdict<K> {
    /// Returns `true` for [`Verdict::Outside`].
    pub const fn is_outside(&self) -> bool {
        matches!(self, Self::Outside(_))
    }

    /// Returns `true` for [`Verdict::Inside`].
    pub const fn is_inside(&self) -> bool {
        matches!(self, Self::Inside(_))
    }
}

/// Classify one event against `reference` and report which rule decided.
///
/// `path` is the event's composed path, innermost target first.
pub fn classify<K, T>(
    tree: &T,
    rules: &PopupRules<T, K>,
    path: &[K],
    reference: &K,
) -> Result<Verdict<K>, TraversalError>
where
    K: Copy + Eq,
    T: DocumentLookup<K>,
{
    let Some(target) = path.first() else {
        return Ok(Verdict::Inside(InsideReason::EmptyPath));
    };
    if target == reference {
        return Ok(Verdict::Inside(InsideReason::Reference));
    }
    if let Some(entry) = subtree_entry(tree, path, reference)? {
        return Ok(Verdict::Inside(InsideReason::Subtree(entry)));
    }
    if let Some(popup) = find_popup(tree, rules, path) {
        return Ok(if contains_deep(tree, &popup, reference)? {
            Verdict::Outside(OutsideReason::EnclosingPopup(popup))
        } else {
            Verdict::Inside(InsideReason::OwnedPopup(popup))
        });
    }
    let document = tree.document();
    if find_ancestor(tree, target, |n| *n == document)?.is_none() {
        return Ok(Verdict::Inside(InsideReason::Detached));
    }
    Ok(Verdict::Outside(OutsideReason::Unrelated))
}

/// Returns `true` if the event with composed `path` is an outer click for `reference`.
pub fn is_outer_click<K, T>(
    tree: &T,
    rules: &PopupRules<T, K>,
    path: &[K],
    reference: &K,
) -> Result<bool, TraversalError>
where
    K: Copy + Eq,
    T: DocumentLookup<K>,
{
    Ok(classify(tree, rules, path, reference)?.is_outside())
}

/// Returns `true` if any entry of `path` other than `reference` lies in its subtree.
///
/// This is the check a list widget runs to tell whether one of its own items was clicked.
pub fn path_in_subtree<K, T>(
    tree: &T,
    path: &[K],
    reference: &K,
) -> Result<bool, TraversalError>
where
    K: Copy + Eq,
    T: DocumentLookup<K>,
{
    Ok(subtree_entry(tree, path, reference)?.is_some())
}

/// First entry of `path` that is an element classified as a popup by `rules`.
pub fn find_popup<K, T>(tree: &T, rules: &PopupRules<T, K>, path: &[K]) -> Option<K>
where
    K: Copy,
    T: StyleLookup<K>,
{
    path.iter()
        .find(|n| tree.kind_of(n) == NodeKind::Element && rules.is_popup(tree, n))
        .copied()
}

fn subtree_entry<K, T>(
    tree: &T,
    path: &[K],
    reference: &K,
) -> Result<Option<K>, TraversalError>
where
    K: Copy + Eq,
    T: DocumentLookup<K>,
{
    for n in path {
        if n != reference && tree.contains(reference, n)? {
            return Ok(Some(*n));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_dom::TestDom;
    use crate::types::Position;
    use crate::walk::{DEFAULT_MAX_DEPTH, ancestors};
    use alloc::vec::Vec;

    /// Composed path as the event source would report it.
    fn path_of(dom: &TestDom, target: u32) -> Vec<u32> {
        let mut path = alloc::vec![target];
        path.extend(ancestors(dom, &target).map(Result::unwrap));
        path
    }

    struct Page {
        dom: TestDom,
        body: u32,
        reference: u32,
    }

    fn page() -> Page {
        let mut dom = TestDom::new();
        let body = dom.element(Some(dom.document()));
        let reference = dom.element(Some(body));
        Page {
            dom,
            body,
            reference,
        }
    }

    #[test]
    fn click_on_child_is_inside() {
        let Page {
            mut dom,
            body,
            reference,
        } = page();
        let button = dom.element(Some(reference));
        let path = [button, reference, body, dom.document()];
        let rules = PopupRules::new();
        assert_eq!(
            classify(&dom, &rules, &path, &reference),
            Ok(Verdict::Inside(InsideReason::Subtree(button)))
        );
        assert_eq!(is_outer_click(&dom, &rules, &path, &reference), Ok(false));
    }

    #[test]
    fn click_on_reference_is_inside() {
        let Page { dom, reference, .. } = page();
        let path = path_of(&dom, reference);
        assert_eq!(
            classify(&dom, &PopupRules::new(), &path, &reference),
            Ok(Verdict::Inside(InsideReason::Reference))
        );
    }

    #[test]
    fn click_in_own_detached_menu_is_inside() {
        let Page {
            mut dom,
            body,
            reference,
        } = page();
        // The component's menu is rendered as a sibling under the body.
        let menu = dom.positioned(Some(body), Position::Fixed);
        let item = dom.element(Some(menu));
        let path = path_of(&dom, item);
        assert_eq!(
            classify(&dom, &PopupRules::new(), &path, &reference),
            Ok(Verdict::Inside(InsideReason::OwnedPopup(menu)))
        );
    }

    #[test]
    fn click_on_enclosing_dialog_is_outside() {
        let mut dom = TestDom::new();
        let body = dom.element(Some(dom.document()));
        let dialog = dom.positioned(Some(body), Position::Absolute);
        let dialog_root = dom.boundary(dialog);
        let reference = dom.element(Some(dialog_root));
        let path = path_of(&dom, dialog);
        assert_eq!(
            classify(&dom, &PopupRules::new(), &path, &reference),
            Ok(Verdict::Outside(OutsideReason::EnclosingPopup(dialog)))
        );

        // A click inside the dialog's scope but beside the reference is outside too.
        let label = dom.element(Some(dialog_root));
        let path = path_of(&dom, label);
        assert_eq!(
            is_outer_click(&dom, &PopupRules::new(), &path, &reference),
            Ok(true)
        );
    }

    #[test]
    fn detached_target_is_inside() {
        let Page { mut dom, reference, .. } = page();
        let close_button = dom.element(None);
        let path = path_of(&dom, close_button);
        assert_eq!(
            classify(&dom, &PopupRules::new(), &path, &reference),
            Ok(Verdict::Inside(InsideReason::Detached))
        );
    }

    #[test]
    fn unrelated_click_is_outside() {
        let Page {
            mut dom,
            body,
            reference,
        } = page();
        let other = dom.element(Some(body));
        let path = path_of(&dom, other);
        assert_eq!(
            classify(&dom, &PopupRules::new(), &path, &reference),
            Ok(Verdict::Outside(OutsideReason::Unrelated))
        );
    }

    #[test]
    fn empty_path_is_inside() {
        let Page { dom, reference, .. } = page();
        assert_eq!(
            classify(&dom, &PopupRules::new(), &[], &reference),
            Ok(Verdict::Inside(InsideReason::EmptyPath))
        );
    }

    #[test]
    fn subtree_check_uses_ordinary_containment() {
        let Page { mut dom, reference, .. } = page();
        // Content of the reference's own boundary is not structurally under the host, so
        // only the rules after the subtree check can claim it.
        let root = dom.boundary(reference);
        let inner = dom.element(Some(root));
        let path = path_of(&dom, inner);
        assert_eq!(path_in_subtree(&dom, &path, &reference), Ok(false));
        assert_eq!(
            classify(&dom, &PopupRules::new(), &path, &reference),
            Ok(Verdict::Outside(OutsideReason::Unrelated))
        );

        let light = dom.element(Some(reference));
        assert_eq!(
            path_in_subtree(&dom, &path_of(&dom, light), &reference),
            Ok(true)
        );
    }

    #[test]
    fn false_positive_rule_turns_popup_click_into_outside() {
        let Page {
            mut dom,
            body,
            reference,
        } = page();
        let sidebar = dom.positioned(Some(body), Position::Fixed);
        let link = dom.element(Some(sidebar));
        let path = path_of(&dom, link);

        let rules = PopupRules::new();
        assert_eq!(is_outer_click(&dom, &rules, &path, &reference), Ok(false));

        let rules = PopupRules::new().with_false_positive(move |_, el| *el == sidebar);
        assert_eq!(is_outer_click(&dom, &rules, &path, &reference), Ok(true));
    }

    #[test]
    fn innermost_popup_decides() {
        let mut dom = TestDom::new();
        let body = dom.element(Some(dom.document()));
        let dialog = dom.positioned(Some(body), Position::Fixed);
        let reference = dom.element(Some(dialog));
        // A tooltip opened by the reference, rendered inside the dialog but outside the
        // reference's subtree.
        let tooltip = dom.positioned(Some(dialog), Position::Absolute);
        let path = path_of(&dom, tooltip);
        assert_eq!(
            classify(&dom, &PopupRules::new(), &path, &reference),
            Ok(Verdict::Inside(InsideReason::OwnedPopup(tooltip)))
        );

        // With the tooltip vetoed, the enclosing dialog is the first popup found.
        let rules = PopupRules::new().with_false_positive(move |_, el| *el == tooltip);
        assert_eq!(
            classify(&dom, &rules, &path, &reference),
            Ok(Verdict::Outside(OutsideReason::EnclosingPopup(dialog)))
        );
    }

    #[test]
    fn non_elements_are_never_popups() {
        let Page {
            mut dom,
            body,
            reference,
        } = page();
        let host = dom.element(Some(body));
        let root = dom.boundary(host);
        let text = dom.add(Some(root), NodeKind::Text);
        // Floating positions reported for non-elements are ignored.
        dom.set_position(root, Position::Fixed);
        dom.set_position(text, Position::Fixed);
        let path = path_of(&dom, text);
        let rules = PopupRules::new();
        assert_eq!(find_popup(&dom, &rules, &path), None);
        assert_eq!(is_outer_click(&dom, &rules, &path, &reference), Ok(true));
    }

    #[test]
    fn popup_scan_checks_entries_in_order() {
        let mut dom = TestDom::new();
        let body = dom.element(Some(dom.document()));
        let outer = dom.positioned(Some(body), Position::Fixed);
        let inner = dom.positioned(Some(outer), Position::Absolute);
        let rules = PopupRules::new();
        assert_eq!(find_popup(&dom, &rules, &path_of(&dom, inner)), Some(inner));
        assert_eq!(find_popup(&dom, &rules, &[body, outer, inner]), Some(outer));
    }

    #[test]
    fn host_cycle_surfaces_as_error() {
        let Page { mut dom, reference, .. } = page();
        let a = dom.element(None);
        let root_a = dom.boundary(a);
        let b = dom.element(Some(root_a));
        let root_b = dom.boundary(b);
        dom.set_parent(a, Some(root_b));
        assert_eq!(
            classify(&dom, &PopupRules::new(), &[b], &reference),
            Err(TraversalError::DepthExceeded {
                limit: DEFAULT_MAX_DEPTH
            })
        );
    }

    #[test]
    fn structural_cycle_in_subtree_check_is_an_error() {
        let Page {
            mut dom,
            body,
            reference,
        } = page();
        let x = dom.element(None);
        let y = dom.element(Some(x));
        dom.set_parent(x, Some(y));
        let menu = dom.positioned(Some(body), Position::Fixed);
        let depth = Err(TraversalError::DepthExceeded {
            limit: DEFAULT_MAX_DEPTH,
        });
        assert_eq!(DocumentLookup::contains(&dom, &reference, &x), depth);
        assert_eq!(path_in_subtree(&dom, &[x, menu], &reference), depth);
        // The popup after the cycle must not decide the verdict.
        assert_eq!(
            classify(&dom, &PopupRules::new(), &[x, menu], &reference),
            Err(TraversalError::DepthExceeded {
                limit: DEFAULT_MAX_DEPTH
            })
        );
    }
}
