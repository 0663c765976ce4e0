use std::fmt::Write;

use types::{FrameId, Frames, PageNumber, Tick};

/// One physical frame and the page currently loaded in it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub page: Option<PageNumber>,
    pub loaded_at: Option<Tick>,
}

/// Simulated physical memory.
///
/// Frames are handed out bump-style: a frame is free until it has been
/// loaded once, and after that it only changes hands through eviction, so
/// the free pool is always the suffix `[next_free, capacity)`.
#[derive(Debug, Clone)]
pub struct Memory {
    frames: Vec<Frame>,
    next_free: FrameId,
    loads: u64,
    saves: u64,
    saved: Vec<FrameId>,
}

impl Memory {
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: vec![Frame::default(); capacity],
            next_free: 0,
            loads: 0,
            saves: 0,
            saved: Vec::new(),
        }
    }

    pub fn frame(&self, frame: FrameId) -> Option<&Frame> {
        self.frames.get(frame)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Total number of `load_frame` calls.
    pub fn loads(&self) -> u64 {
        self.loads
    }

    /// Total number of `save_frame` calls.
    pub fn saves(&self) -> u64 {
        self.saves
    }

    /// Frames written back, in the order the saves happened.
    pub fn saved_frames(&self) -> &[FrameId] {
        &self.saved
    }

    /// Frame table dump: one row per frame.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{:>4} {:>6} {:>7}", "Frame", "Page", "Load(t)");
        for (i, frame) in self.frames.iter().enumerate() {
            let _ = write!(out, "[{:02}]", i);
            match frame.page {
                Some(page) => {
                    let _ = write!(out, " {:>6}", page);
                }
                None => {
                    let _ = write!(out, " {:>6}", "-");
                }
            }
            match frame.loaded_at {
                Some(t) => {
                    let _ = writeln!(out, " {:>7}", t);
                }
                None => {
                    let _ = writeln!(out, " {:>7}", "-");
                }
            }
        }
        out
    }
}

impl Frames for Memory {
    fn find_free_frame(&self) -> Option<FrameId> {
        if self.next_free < self.frames.len() {
            Some(self.next_free)
        } else {
            None
        }
    }

    fn load_frame(&mut self, frame: FrameId, page: PageNumber, time: Tick) {
        if let Some(slot) = self.frames.get_mut(frame) {
            slot.page = Some(page);
            slot.loaded_at = Some(time);
        }
        if frame == self.next_free {
            self.next_free += 1;
        }
        self.loads += 1;
    }

    fn save_frame(&mut self, frame: FrameId) {
        self.saves += 1;
        self.saved.push(frame);
    }

    fn capacity(&self) -> usize {
        self.frames.len()
    }
}
