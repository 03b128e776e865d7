// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal in-memory document for unit tests.

use alloc::vec::Vec;

use crate::types::{ComposedParent, DocumentLookup, NodeKind, Position, StyleLookup};

#[derive(Clone, Debug)]
struct MockNode {
    parent: Option<u32>,
    host: Option<u32>,
    kind: NodeKind,
    position: Position,
}

/// Node 0 is the document.
#[derive(Clone, Debug)]
pub(crate) struct TestDom {
    nodes: Vec<MockNode>,
}

impl TestDom {
    pub(crate) fn new() -> Self {
        Self {
            nodes: alloc::vec![MockNode {
                parent: None,
                host: None,
                kind: NodeKind::Other,
                position: Position::Static,
            }],
        }
    }

    pub(crate) fn document(&self) -> u32 {
        0
    }

    pub(crate) fn add(&mut self, parent: Option<u32>, kind: NodeKind) -> u32 {
        self.nodes.push(MockNode {
            parent,
            host: None,
            kind,
            position: Position::Static,
        });
        #[allow(clippy::cast_possible_truncation, reason = "test documents are tiny")]
        let id = (self.nodes.len() - 1) as u32;
        id
    }

    pub(crate) fn element(&mut self, parent: Option<u32>) -> u32 {
        self.add(parent, NodeKind::Element)
    }

    pub(crate) fn positioned(&mut self, parent: Option<u32>, position: Position) -> u32 {
        let id = self.element(parent);
        self.set_position(id, position);
        id
    }

    pub(crate) fn set_position(&mut self, id: u32, position: Position) {
        self.nodes[id as usize].position = position;
    }

    pub(crate) fn boundary(&mut self, host: u32) -> u32 {
        let id = self.add(None, NodeKind::BoundaryRoot);
        self.nodes[id as usize].host = Some(host);
        id
    }

    pub(crate) fn set_parent(&mut self, id: u32, parent: Option<u32>) {
        self.nodes[id as usize].parent = parent;
    }
}

impl ComposedParent<u32> for TestDom {
    fn parent_of(&self, node: &u32) -> Option<u32> {
        self.nodes[*node as usize].parent
    }

    fn host_of(&self, node: &u32) -> Option<u32> {
        self.nodes[*node as usize].host
    }
}

impl StyleLookup<u32> for TestDom {
    fn kind_of(&self, node: &u32) -> NodeKind {
        self.nodes[*node as usize].kind
    }

    fn position_of(&self, element: &u32) -> Position {
        self.nodes[*element as usize].position
    }
}

impl DocumentLookup<u32> for TestDom {
    fn document(&self) -> u32 {
        0
    }
}
