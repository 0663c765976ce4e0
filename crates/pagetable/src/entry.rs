use types::{FrameId, PageNumber, PageStatus, Tick};

/// Sentinel stored in `prev`/`next` when there is no neighbour.
pub const NIL: usize = usize::MAX;

/// Per-page record. The eviction order list is threaded through these
/// records via `prev`/`next`, which hold page numbers or `NIL`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageTableEntry {
    pub status: PageStatus,
    /// Written since last load.
    pub modified: bool,
    /// `Some` exactly when `status == InMemory`.
    pub frame: Option<FrameId>,
    pub access_time: Option<Tick>,
    pub load_time: Option<Tick>,
    pub peeks: u64,
    pub pokes: u64,
    /// Second-chance bit, only consulted by the clock policy.
    pub referenced: bool,
    pub(crate) prev: usize,
    pub(crate) next: usize,
}

impl PageTableEntry {
    pub const fn new() -> Self {
        Self {
            status: PageStatus::NotUsed,
            modified: false,
            frame: None,
            access_time: None,
            load_time: None,
            peeks: 0,
            pokes: 0,
            referenced: false,
            prev: NIL,
            next: NIL,
        }
    }

    pub fn is_resident(&self) -> bool {
        self.status == PageStatus::InMemory
    }

    pub fn prev(&self) -> Option<PageNumber> {
        link(self.prev)
    }

    pub fn next(&self) -> Option<PageNumber> {
        link(self.next)
    }

    /// Drop the mapping after the page has been written out.
    pub(crate) fn evict(&mut self) {
        self.status = PageStatus::OnDisk;
        self.modified = false;
        self.frame = None;
        self.access_time = None;
        self.load_time = None;
        self.referenced = false;
    }
}

impl Default for PageTableEntry {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn link(index: usize) -> Option<PageNumber> {
    if index == NIL { None } else { Some(index) }
}
