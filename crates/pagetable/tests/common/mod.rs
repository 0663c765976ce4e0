#![allow(dead_code)]

use memory::{Memory, Stats};
use pagetable::{AccessMode, FrameId, PageNumber, PageTable, Policy};

/// Page table plus the collaborators it runs against.
pub struct Harness {
    pub table: PageTable,
    pub memory: Memory,
    pub stats: Stats,
    pub time: u64,
}

impl Harness {
    pub fn new(policy: Policy, pages: usize, frames: usize) -> Self {
        Self {
            table: PageTable::new(policy, pages).expect("page table"),
            memory: Memory::new(frames),
            stats: Stats::new(),
            time: 0,
        }
    }

    /// Issue one reference at the next tick.
    pub fn access(&mut self, page: PageNumber, mode: AccessMode) -> FrameId {
        let frame = self
            .table
            .request_access(page, mode, self.time, &mut self.memory, &mut self.stats)
            .expect("access");
        self.time += 1;
        self.table.verify().expect("invariants hold");
        frame
    }

    pub fn read(&mut self, page: PageNumber) -> FrameId {
        self.access(page, AccessMode::Read)
    }

    pub fn write(&mut self, page: PageNumber) -> FrameId {
        self.access(page, AccessMode::Write)
    }

    pub fn reads(&mut self, pages: &[PageNumber]) {
        for &page in pages {
            self.read(page);
        }
    }

    pub fn resident(&self) -> Vec<PageNumber> {
        self.table.resident().collect()
    }

    pub fn is_resident(&self, page: PageNumber) -> bool {
        self.table.entry(page).expect("entry").is_resident()
    }
}
