//! A circular singly-linked list used to keep patients in round-robin order.
//!
//! Nodes live in an arena and link to their successor by slot index, so the
//! cycle never needs shared or raw pointers. Following `next` from the head
//! `len()` times always lands back on the head.

use std::fmt;
use std::iter::Peekable;

pub struct CircularList<T> {
    slots: Vec<Option<Node<T>>>,
    vacant: Vec<usize>,
    head: Option<usize>,
}

struct Node<T> {
    value: T,
    next: usize,
}

impl<T> Node<T> {
    fn new(value: T, next: usize) -> Node<T> {
        Node { value, next }
    }
}

impl<T> CircularList<T> {
    pub fn new() -> CircularList<T> {
        CircularList {
            slots: Vec::new(),
            vacant: Vec::new(),
            head: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the nodes by walking the cycle once.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn head(&self) -> Option<&T> {
        self.head.map(|idx| &self.node(idx).value)
    }

    pub fn tail(&self) -> Option<&T> {
        self.tail_index().map(|idx| &self.node(idx).value)
    }

    /// Visits every value once, starting at the head.
    pub fn iter(&self) -> CircularListIter<'_, T> {
        CircularListIter {
            list: self,
            current: self.head,
        }
    }

    /// Adds `value` as the new tail. On an empty list the node becomes the
    /// head and links to itself.
    pub fn append(&mut self, value: T) {
        match self.tail_index() {
            None => {
                let idx = self.alloc(value, None);
                self.head = Some(idx);
                log::trace!("slot {} is a self-linked head", idx);
            }
            Some(tail) => {
                let idx = self.alloc(value, self.head);
                self.node_mut(tail).next = idx;
                log::trace!("slot {} spliced after tail slot {}", idx, tail);
            }
        }
    }

    /// Rebuilds the list from `values`, dropping every existing node.
    ///
    /// An empty input leaves the list untouched and returns `false`.
    pub fn create_from<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let mut values: Peekable<I::IntoIter> = values.into_iter().peekable();
        if values.peek().is_none() {
            return false;
        }
        self.clear();
        for value in values {
            self.append(value);
        }
        true
    }

    /// Splices `value` in right after the first node equal to `target`.
    /// Returns `false` without touching the list when `target` is absent.
    pub fn insert_after(&mut self, target: &T, value: T) -> bool
    where
        T: PartialEq,
    {
        let (_, idx) = match self.find(target) {
            Some(found) => found,
            None => return false,
        };
        let next = self.node(idx).next;
        let new_idx = self.alloc(value, Some(next));
        self.node_mut(idx).next = new_idx;
        log::trace!("slot {} spliced between {} and {}", new_idx, idx, next);
        true
    }

    /// Unlinks the first node equal to `value`. Returns `false` without
    /// touching the list when no node matches.
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove(value).is_some()
    }

    /// Like [`delete`](Self::delete), but hands the removed value back.
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let (prev, idx) = self.find(value)?;
        let next = self.node(idx).next;

        if next == idx {
            let removed = self.release(idx);
            self.clear();
            log::trace!("removed the only node");
            return Some(removed);
        }

        match prev {
            None => {
                // The tail still points at the old head.
                if let Some(tail) = self.tail_index() {
                    self.node_mut(tail).next = next;
                }
                self.head = Some(next);
                log::trace!("head moved from slot {} to slot {}", idx, next);
            }
            Some(prev) => {
                self.node_mut(prev).next = next;
                log::trace!("slot {} unlinked after slot {}", idx, prev);
            }
        }
        Some(self.release(idx))
    }

    /// Round-robin step: the head is served and waits at the back, so its
    /// successor becomes the new head. Returns the value that was served.
    pub fn rotate(&mut self) -> Option<&T> {
        let served = self.head?;
        self.head = Some(self.node(served).next);
        Some(&self.node(served).value)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
        self.head = None;
    }

    fn find(&self, target: &T) -> Option<(Option<usize>, usize)>
    where
        T: PartialEq,
    {
        let head = self.head?;
        let mut prev = None;
        let mut current = head;
        loop {
            if self.node(current).value == *target {
                return Some((prev, current));
            }
            prev = Some(current);
            current = self.node(current).next;
            if current == head {
                return None;
            }
        }
    }

    fn tail_index(&self) -> Option<usize> {
        let head = self.head?;
        let mut current = head;
        while self.node(current).next != head {
            current = self.node(current).next;
        }
        Some(current)
    }

    /// Places a node in a free slot. A `next` of `None` links it to itself.
    fn alloc(&mut self, value: T, next: Option<usize>) -> usize {
        let idx = match self.vacant.pop() {
            Some(idx) => idx,
            None => {
                self.slots.push(None);
                self.slots.len() - 1
            }
        };
        self.slots[idx] = Some(Node::new(value, next.unwrap_or(idx)));
        idx
    }

    fn release(&mut self, idx: usize) -> T {
        match self.slots[idx].take() {
            Some(node) => {
                self.vacant.push(idx);
                node.value
            }
            None => unreachable!("slot {} released twice", idx),
        }
    }

    fn node(&self, idx: usize) -> &Node<T> {
        match &self.slots[idx] {
            Some(node) => node,
            None => unreachable!("slot {} is linked but vacant", idx),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        match &mut self.slots[idx] {
            Some(node) => node,
            None => unreachable!("slot {} is linked but vacant", idx),
        }
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        CircularList::new()
    }
}

/// Renders the cycle with the head repeated at the end: `a -> b -> (a)`.
impl<T: fmt::Display> fmt::Display for CircularList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = match self.head() {
            Some(head) => head,
            None => return Ok(()),
        };
        for value in self.iter() {
            write!(f, "{} -> ", value)?;
        }
        write!(f, "({})", head)
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Node {
            value: self.value.clone(),
            next: self.next,
        }
    }
}

impl<T: Clone> Clone for CircularList<T> {
    fn clone(&self) -> Self {
        CircularList {
            slots: self.slots.clone(),
            vacant: self.vacant.clone(),
            head: self.head,
        }
    }
}

impl<T: PartialEq> PartialEq for CircularList<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut a = self.iter();
        let mut b = other.iter();
        loop {
            match (a.next(), b.next()) {
                (Some(a_value), Some(b_value)) => {
                    if a_value != b_value {
                        return false;
                    }
                }
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for CircularList<T> {}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut list = CircularList::new();
        list.extend(values);
        list
    }
}

impl<T> Extend<T> for CircularList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.append(value);
        }
    }
}

pub struct CircularListIterator<T> {
    list: CircularList<T>,
    current: Option<usize>,
}

pub struct CircularListIter<'a, T> {
    list: &'a CircularList<T>,
    current: Option<usize>,
}

impl<T> Iterator for CircularListIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let idx = self.current?;
        let node = match self.list.slots[idx].take() {
            Some(node) => node,
            None => unreachable!("slot {} is linked but vacant", idx),
        };
        self.current = if Some(node.next) == self.list.head {
            None
        } else {
            Some(node.next)
        };
        Some(node.value)
    }
}

impl<'a, T> Iterator for CircularListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let list: &'a CircularList<T> = self.list;
        let idx = self.current?;
        let node = list.node(idx);
        self.current = if Some(node.next) == list.head {
            None
        } else {
            Some(node.next)
        };
        Some(&node.value)
    }
}

impl<T> IntoIterator for CircularList<T> {
    type Item = T;
    type IntoIter = CircularListIterator<T>;

    fn into_iter(self) -> CircularListIterator<T> {
        let current = self.head;
        CircularListIterator {
            list: self,
            current,
        }
    }
}

impl<'a, T> IntoIterator for &'a CircularList<T> {
    type Item = &'a T;
    type IntoIter = CircularListIter<'a, T>;

    fn into_iter(self) -> CircularListIter<'a, T> {
        self.iter()
    }
}
