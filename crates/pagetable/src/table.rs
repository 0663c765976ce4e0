use crate::entry::{NIL, PageTableEntry};
use crate::order::OrderList;
use crate::policy::{Replacer, replacer_for};
use types::{
    AccessMode, Counters, FrameId, Frames, PageNumber, PageStatus, PageTableError, Policy, Result, Tick,
};

/// Page table for a single simulated process.
///
/// Owns one `PageTableEntry` per virtual page, the eviction order list
/// threaded through them, and the active replacement policy. Physical frames
/// and counters are supplied by the caller on every access.
#[derive(Debug)]
pub struct PageTable {
    entries: Vec<PageTableEntry>,
    order: OrderList,
    replacer: Box<dyn Replacer>,
    /// Print eviction and load decisions as they happen.
    pub verbose: bool,
}

impl PageTable {
    pub fn new(policy: Policy, pages: usize) -> Result<Self> {
        Self::with_replacer(replacer_for(policy), pages)
    }

    pub fn with_replacer(replacer: Box<dyn Replacer>, pages: usize) -> Result<Self> {
        if pages == 0 {
            return Err(PageTableError::InvalidConfig("page count must be positive"));
        }
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(pages)
            .map_err(|_| PageTableError::InvalidConfig("cannot allocate page table"))?;
        entries.resize(pages, PageTableEntry::new());

        Ok(Self {
            entries,
            order: OrderList::new(),
            replacer,
            verbose: false,
        })
    }

    pub fn policy(&self) -> Policy {
        self.replacer.policy()
    }

    pub fn pages(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[PageTableEntry] {
        &self.entries
    }

    pub fn order(&self) -> &OrderList {
        &self.order
    }

    /// Look up the entry for `page`.
    pub fn entry(&self, page: PageNumber) -> Result<&PageTableEntry> {
        self.check_page(page)?;
        Ok(&self.entries[page])
    }

    /// Resident pages in eviction order, next victim first.
    pub fn resident(&self) -> impl Iterator<Item = PageNumber> + '_ {
        self.order.iter(&self.entries)
    }

    pub fn resident_count(&self) -> usize {
        self.order.len()
    }

    fn check_page(&self, page: PageNumber) -> Result<()> {
        if page >= self.entries.len() {
            return Err(PageTableError::InvalidReference {
                page,
                pages: self.entries.len(),
            });
        }
        Ok(())
    }

    /// Service one reference to `page` and return the frame now holding it.
    ///
    /// A non-resident page faults: it is given a free frame, or the frame of
    /// a victim picked by the replacement policy (written back first if
    /// modified), and linked at the tail of the order list. A resident page
    /// is a hit and is handed to the policy. Either way the page's usage
    /// counters and access time are updated.
    pub fn request_access(
        &mut self,
        page: PageNumber,
        mode: AccessMode,
        time: Tick,
        frames: &mut dyn Frames,
        counters: &mut dyn Counters,
    ) -> Result<FrameId> {
        self.check_page(page)?;

        match self.entries[page].status {
            PageStatus::NotUsed | PageStatus::OnDisk => {
                counters.count_page_fault();
                self.fault(page, time, frames)?;
            }
            PageStatus::InMemory => {
                counters.count_page_hit();
                if self.verbose {
                    println!("✅ hit page {}", page);
                }
                self.replacer.on_hit(&mut self.entries, &mut self.order, page);
            }
        }

        let entry = &mut self.entries[page];
        match mode {
            AccessMode::Read => entry.peeks += 1,
            AccessMode::Write => {
                entry.pokes += 1;
                entry.modified = true;
            }
        }
        entry.access_time = Some(time);

        entry.frame.ok_or(PageTableError::InternalError {
            page: Some(page),
            reason: "page accessed without a frame",
        })
    }

    fn fault(&mut self, page: PageNumber, time: Tick, frames: &mut dyn Frames) -> Result<()> {
        let frame = match frames.find_free_frame() {
            Some(frame) => frame,
            None => self.reclaim(time, frames)?,
        };

        if self.verbose {
            println!("📥 page {} given frame {}", page, frame);
        }
        frames.load_frame(frame, page, time);

        let entry = &mut self.entries[page];
        entry.status = PageStatus::InMemory;
        entry.modified = false;
        entry.referenced = false;
        entry.frame = Some(frame);
        entry.load_time = Some(time);

        self.order.insert_at_tail(&mut self.entries, page);
        Ok(())
    }

    /// Evict a victim and return the frame it released.
    fn reclaim(&mut self, time: Tick, frames: &mut dyn Frames) -> Result<FrameId> {
        let victim = self
            .replacer
            .select_victim(&mut self.entries, &mut self.order, time)?;
        self.check_page(victim)?;

        if self.order.contains(&self.entries, victim) || self.order.tail() == Some(victim) {
            return Err(PageTableError::InternalError {
                page: Some(victim),
                reason: "victim is still linked into the order list",
            });
        }
        let entry = &mut self.entries[victim];
        if entry.status != PageStatus::InMemory {
            return Err(PageTableError::InternalError {
                page: Some(victim),
                reason: "victim is not resident",
            });
        }
        let frame = entry.frame.ok_or(PageTableError::InternalError {
            page: Some(victim),
            reason: "resident page has no frame",
        })?;

        if self.verbose {
            println!("🔁 evict page {} (frame {})", victim, frame);
        }
        if entry.modified {
            if self.verbose {
                println!("💾 save frame {}", frame);
            }
            frames.save_frame(frame);
        }
        entry.evict();
        Ok(frame)
    }

    /// Check the structural invariants of the table and its order list.
    ///
    /// - a page has a frame exactly when it is resident
    /// - no two pages share a frame
    /// - the order list holds exactly the resident pages, once each, with
    ///   consistent back links and `NIL` at both ends
    pub fn verify(&self) -> Result<()> {
        let internal = |page: Option<PageNumber>, reason| PageTableError::InternalError { page, reason };

        let mut owners: Vec<(FrameId, PageNumber)> = Vec::new();
        let mut resident = 0usize;
        for (page, entry) in self.entries.iter().enumerate() {
            match (entry.status, entry.frame) {
                (PageStatus::InMemory, Some(frame)) => {
                    if owners.iter().any(|&(f, _)| f == frame) {
                        return Err(internal(Some(page), "frame mapped by more than one page"));
                    }
                    owners.push((frame, page));
                    resident += 1;
                }
                (PageStatus::InMemory, None) => {
                    return Err(internal(Some(page), "resident page has no frame"));
                }
                (_, Some(_)) => {
                    return Err(internal(Some(page), "non-resident page holds a frame"));
                }
                (_, None) => {
                    if entry.prev != NIL || entry.next != NIL {
                        return Err(internal(Some(page), "non-resident page is linked"));
                    }
                }
            }
        }

        if self.order.len() != resident {
            return Err(internal(None, "order list length differs from resident count"));
        }

        let mut seen = vec![false; self.entries.len()];
        let mut walked = 0usize;
        let mut prev = NIL;
        for page in self.order.iter(&self.entries) {
            let entry = self
                .entries
                .get(page)
                .ok_or(internal(None, "order list links outside the table"))?;
            if seen[page] {
                return Err(internal(Some(page), "order list contains a cycle"));
            }
            if !entry.is_resident() {
                return Err(internal(Some(page), "order list contains a non-resident page"));
            }
            if entry.prev != prev {
                return Err(internal(Some(page), "order list back link is inconsistent"));
            }
            seen[page] = true;
            walked += 1;
            prev = page;
        }

        if walked != resident {
            return Err(internal(None, "order list does not reach every resident page"));
        }
        if self.order.tail().unwrap_or(NIL) != prev {
            return Err(internal(None, "order list tail cursor is stale"));
        }
        Ok(())
    }
}
