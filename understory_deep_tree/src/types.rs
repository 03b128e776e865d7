// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the composed tree: node identifiers, node payloads, and element style.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

/// Identifier for a node in the tree (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Resolved value of an element's `position` style.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Position {
    /// Normal flow.
    #[default]
    Static,
    /// Normal flow, offset relative to itself.
    Relative,
    /// Out of flow, placed relative to the nearest positioned ancestor.
    Absolute,
    /// Out of flow, placed relative to the viewport.
    Fixed,
    /// Normal flow until a scroll threshold is crossed.
    Sticky,
}

impl Position {
    /// Returns `true` for the two modes that take an element out of normal flow.
    pub const fn is_floating(self) -> bool {
        matches!(self, Self::Absolute | Self::Fixed)
    }
}

/// Element payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    /// Tag name, e.g. `"div"` or `"my-menu"`.
    pub tag: String,
    /// Class list in declaration order.
    pub classes: Vec<String>,
    /// Resolved positioning mode.
    pub position: Position,
    /// Border box in document coordinates, if the element has been laid out.
    ///
    /// Elements without bounds never match [`Tree::hit_test_point`](crate::Tree::hit_test_point),
    /// but their descendants still can.
    pub bounds: Option<Rect>,
}

impl Element {
    /// Create a statically positioned element with the given tag and no classes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set the positioning mode.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Append a class.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set the layout bounds.
    #[must_use]
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Returns `true` if `class` is present in the class list.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Payload of a node.
///
/// Boundary roots are not created through [`Tree::insert`](crate::Tree::insert); use
/// [`Tree::attach_boundary`](crate::Tree::attach_boundary) so the host edge is recorded.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeData {
    /// A document root.
    Document,
    /// An element.
    Element(Element),
    /// A text run.
    Text(String),
    /// Root of an encapsulated scope; its host is tracked by the tree.
    BoundaryRoot,
    /// A comment.
    Comment(String),
}

impl NodeData {
    /// Shorthand for an element node with the given tag.
    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element(Element::new(tag))
    }

    /// Shorthand for a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Returns the element payload, if this is an element.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }

    pub(crate) fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Element> for NodeData {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}
