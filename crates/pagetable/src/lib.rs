pub mod entry;
pub mod order;
pub mod policy;
pub mod render;
pub mod table;

pub use entry::{NIL, PageTableEntry};
pub use order::OrderList;
pub use policy::{Clock, Fifo, Lru, Replacer, replacer_for};
pub use table::PageTable;
pub use types::{AccessMode, FrameId, PageNumber, PageStatus, PageTableError, Policy, Result, Tick};
