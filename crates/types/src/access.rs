/// Index of a virtual page in the page table.
pub type PageNumber = usize;
/// Identifier of a physical frame.
pub type FrameId = usize;
/// Logical simulation clock, supplied by the driver.
pub type Tick = u64;

/// Kind of reference made to a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessMode {
    Read,
    Write,
}

impl AccessMode {
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'r' | 'R' => Some(AccessMode::Read),
            'w' | 'W' => Some(AccessMode::Write),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            AccessMode::Read => 'r',
            AccessMode::Write => 'w',
        }
    }
}
