//! Eviction order list.
//!
//! An intrusive doubly linked list over the page-table array. The array owns
//! every record; the list only keeps the two cursors and a length, and the
//! links themselves live in each entry's `prev`/`next` fields. Head is the
//! next eviction candidate, tail is the most recently inserted or touched.

use crate::entry::{NIL, PageTableEntry, link};
use types::PageNumber;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderList {
    head: usize,
    tail: usize,
    len: usize,
}

impl OrderList {
    pub const fn new() -> Self {
        Self {
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    pub fn head(&self) -> Option<PageNumber> {
        link(self.head)
    }

    pub fn tail(&self) -> Option<PageNumber> {
        link(self.tail)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `index` is currently linked into this list.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `entries`.
    pub fn contains(&self, entries: &[PageTableEntry], index: PageNumber) -> bool {
        self.head == index || entries[index].prev != NIL || entries[index].next != NIL
    }

    /// Append `index` as the most recently relevant entry. Does nothing if
    /// `index` is already linked.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `entries`.
    pub fn insert_at_tail(&mut self, entries: &mut [PageTableEntry], index: PageNumber) {
        if self.contains(entries, index) {
            return;
        }
        entries[index].next = NIL;
        if self.tail == NIL {
            entries[index].prev = NIL;
            self.head = index;
        } else {
            entries[self.tail].next = index;
            entries[index].prev = self.tail;
        }
        self.tail = index;
        self.len += 1;
    }

    /// Detach `index` from wherever it sits and clear its links. Does
    /// nothing if `index` is not linked.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `entries`.
    pub fn remove(&mut self, entries: &mut [PageTableEntry], index: PageNumber) {
        if !self.contains(entries, index) {
            return;
        }
        let prev = entries[index].prev;
        let next = entries[index].next;

        match (prev == NIL, next == NIL) {
            // sole element
            (true, true) => {
                self.head = NIL;
                self.tail = NIL;
            }
            // head, more follow
            (true, false) => {
                entries[next].prev = NIL;
                self.head = next;
            }
            // tail, not head
            (false, true) => {
                entries[prev].next = NIL;
                self.tail = prev;
            }
            (false, false) => {
                entries[prev].next = next;
                entries[next].prev = prev;
            }
        }

        entries[index].prev = NIL;
        entries[index].next = NIL;
        self.len = self.len.saturating_sub(1);
    }

    /// Unlink and return the head.
    pub fn pop_head(&mut self, entries: &mut [PageTableEntry]) -> Option<PageNumber> {
        let head = self.head()?;
        self.remove(entries, head);
        Some(head)
    }

    /// Relocate a linked entry to the tail.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `entries`.
    pub fn move_to_tail(&mut self, entries: &mut [PageTableEntry], index: PageNumber) {
        if self.tail == index {
            return;
        }
        self.remove(entries, index);
        self.insert_at_tail(entries, index);
    }

    /// Walk from head to tail.
    ///
    /// The walk stops after `entries.len()` steps, so a corrupted (cyclic)
    /// list still terminates.
    pub fn iter<'a>(&self, entries: &'a [PageTableEntry]) -> Iter<'a> {
        Iter {
            entries,
            cursor: self.head,
            remaining: entries.len(),
        }
    }
}

impl Default for OrderList {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a> {
    entries: &'a [PageTableEntry],
    cursor: usize,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = PageNumber;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NIL || self.remaining == 0 {
            return None;
        }
        let current = self.cursor;
        self.cursor = self.entries.get(current).map_or(NIL, |e| e.next);
        self.remaining -= 1;
        Some(current)
    }
}
