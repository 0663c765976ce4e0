//! Replacement policies.
//!
//! Each policy only decides two things: what a hit does to the order list,
//! and which resident page to give up when memory is full. The access
//! handler calls into the active `Replacer` from exactly one place for each.

use std::fmt;

use crate::entry::PageTableEntry;
use crate::order::OrderList;
use types::{PageNumber, PageTableError, Policy, Result, Tick};

pub trait Replacer: fmt::Debug {
    fn policy(&self) -> Policy;

    /// Called after a hit on the resident page `page` has been counted.
    fn on_hit(&mut self, _entries: &mut [PageTableEntry], _order: &mut OrderList, _page: PageNumber) {}

    /// Choose a resident page to evict and unlink it from `order`.
    ///
    /// Only called when no free frame exists. The returned page is no longer
    /// linked when this returns; its other fields are left to the caller.
    fn select_victim(
        &mut self,
        entries: &mut [PageTableEntry],
        order: &mut OrderList,
        time: Tick,
    ) -> Result<PageNumber>;
}

/// Build the replacer for a policy.
pub fn replacer_for(policy: Policy) -> Box<dyn Replacer> {
    match policy {
        Policy::Fifo => Box::new(Fifo),
        Policy::Lru => Box::new(Lru),
        Policy::Clock => Box::new(Clock),
    }
}

fn pop_head(entries: &mut [PageTableEntry], order: &mut OrderList) -> Result<PageNumber> {
    order.pop_head(entries).ok_or(PageTableError::InternalError {
        page: None,
        reason: "no resident page to evict",
    })
}

/// First in, first out. Hits never move a page, so the head is always the
/// page with the oldest load time.
#[derive(Debug, Default, Clone, Copy)]
pub struct Fifo;

impl Replacer for Fifo {
    fn policy(&self) -> Policy {
        Policy::Fifo
    }

    fn select_victim(
        &mut self,
        entries: &mut [PageTableEntry],
        order: &mut OrderList,
        _time: Tick,
    ) -> Result<PageNumber> {
        pop_head(entries, order)
    }
}

/// Least recently used. Every hit moves the page to the tail, so the head is
/// always the page touched longest ago.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lru;

impl Replacer for Lru {
    fn policy(&self) -> Policy {
        Policy::Lru
    }

    fn on_hit(&mut self, entries: &mut [PageTableEntry], order: &mut OrderList, page: PageNumber) {
        order.move_to_tail(entries, page);
    }

    fn select_victim(
        &mut self,
        entries: &mut [PageTableEntry],
        order: &mut OrderList,
        _time: Tick,
    ) -> Result<PageNumber> {
        pop_head(entries, order)
    }
}

/// Second-chance clock.
///
/// The order list is read as a circle and the head cursor is the hand. A hit
/// sets the page's `referenced` bit. When a victim is needed the hand looks
/// at the page under it: a referenced page has its bit cleared and the hand
/// moves past it (the page rotates to the tail), an unreferenced page is
/// evicted. New pages are linked at the tail, just behind the hand.
#[derive(Debug, Default, Clone, Copy)]
pub struct Clock;

impl Replacer for Clock {
    fn policy(&self) -> Policy {
        Policy::Clock
    }

    fn on_hit(&mut self, entries: &mut [PageTableEntry], _order: &mut OrderList, page: PageNumber) {
        entries[page].referenced = true;
    }

    fn select_victim(
        &mut self,
        entries: &mut [PageTableEntry],
        order: &mut OrderList,
        _time: Tick,
    ) -> Result<PageNumber> {
        // One pass clears every bit, so the second pass must find a victim.
        for _ in 0..=order.len() {
            let hand = order.head().ok_or(PageTableError::InternalError {
                page: None,
                reason: "no resident page to evict",
            })?;
            if entries[hand].referenced {
                entries[hand].referenced = false;
                order.move_to_tail(entries, hand);
            } else {
                return pop_head(entries, order);
            }
        }
        Err(PageTableError::InternalError {
            page: None,
            reason: "clock hand completed a full turn without finding a victim",
        })
    }
}
