//! Collaborator interfaces consumed by the page table.
//!
//! The page table never owns physical memory or statistics. It asks a
//! `Frames` implementation for capacity and tells it when frames are loaded
//! or written back, and reports hits and faults to a `Counters` sink.

use crate::{FrameId, PageNumber, Tick};

/// Physical frame pool plus the backing store behind it.
pub trait Frames {
    /// Probe for a free frame without claiming it.
    fn find_free_frame(&self) -> Option<FrameId>;

    /// Fill `frame` with the contents of `page`. Always succeeds.
    fn load_frame(&mut self, frame: FrameId, page: PageNumber, time: Tick);

    /// Write the contents of `frame` back to the backing store. Always succeeds.
    fn save_frame(&mut self, frame: FrameId);

    /// Number of physical frames managed.
    fn capacity(&self) -> usize;
}

/// Hit/fault accounting. All methods default to no-ops.
pub trait Counters {
    fn count_page_fault(&mut self) {}

    fn count_page_hit(&mut self) {}
}
