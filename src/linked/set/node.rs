use std::mem;

use crate::util::error::AllocFailure;

pub(crate) type Link = Option<NodeIndex>;

// NOTE: Nodes live in an arena owned by their set and refer to each other by index, so no node is
// ever reachable from outside the set that allocated it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeIndex(usize);

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link,
}

pub(crate) enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Link },
}

pub(crate) struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free: Link,
    occupied: usize,
    limit: Option<usize>,
}

impl<T> NodeArena<T> {
    pub const fn new() -> NodeArena<T> {
        NodeArena {
            slots: Vec::new(),
            free: None,
            occupied: 0,
            limit: None,
        }
    }

    pub const fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub const fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
    }

    /// Stores `node`, reusing a vacant slot when there is one. On failure the node is handed back
    /// so that its value isn't lost.
    pub fn alloc(&mut self, node: Node<T>) -> Result<NodeIndex, (AllocFailure, Node<T>)> {
        if let Some(limit) = self.limit
            && self.occupied >= limit
        {
            return Err((AllocFailure::LimitReached { limit }, node));
        }

        let index = match self.free {
            Some(index) => {
                let slot = &mut self.slots[index.0];
                self.free = match slot {
                    Slot::Vacant { next_free } => *next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                *slot = Slot::Occupied(node);
                index
            },
            None => {
                if let Err(error) = self.slots.try_reserve(1) {
                    return Err((AllocFailure::Reserve(error), node));
                }
                self.slots.push(Slot::Occupied(node));
                NodeIndex(self.slots.len() - 1)
            },
        };

        self.occupied += 1;
        Ok(index)
    }

    /// Removes the node at `index`, leaving its slot vacant for reuse.
    pub fn take(&mut self, index: NodeIndex) -> Node<T> {
        let vacant = Slot::Vacant { next_free: self.free };
        match mem::replace(&mut self.slots[index.0], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(index);
                self.occupied -= 1;
                node
            },
            Slot::Vacant { .. } => unreachable!("attempted to take a vacant node"),
        }
    }

    pub fn get(&self, index: NodeIndex) -> &Node<T> {
        match &self.slots[index.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("attempted to read a vacant node"),
        }
    }

    pub fn get_mut(&mut self, index: NodeIndex) -> &mut Node<T> {
        match &mut self.slots[index.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("attempted to write a vacant node"),
        }
    }

    /// Drops every slot while keeping the allocation. Only valid once every node has been taken or
    /// when the remaining values should be dropped without further handling.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.occupied = 0;
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
