#![no_std]

pub mod access;
pub use access::{AccessMode, FrameId, PageNumber, Tick};

pub mod policy;
pub use policy::{ParsePolicyError, Policy};

pub mod result;
pub use result::{PageTableError, Result};

pub mod frames;
pub use frames::{Counters, Frames};

/// Residency state of a virtual page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageStatus {
    #[default]
    NotUsed,
    InMemory,
    OnDisk,
}

impl PageStatus {
    /// Short label used by the page-table dump.
    pub const fn label(self) -> &'static str {
        match self {
            PageStatus::NotUsed => "-",
            PageStatus::InMemory => "mem",
            PageStatus::OnDisk => "disk",
        }
    }
}
