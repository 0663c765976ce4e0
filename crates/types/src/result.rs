use core::fmt;

use crate::PageNumber;

/// Failures surfaced by the page table. Both reference and internal errors
/// are fatal to a simulation run; the caller decides how to abort.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTableError {
    /// Page number outside `[0, pages)`.
    InvalidReference { page: PageNumber, pages: usize },
    /// A table or order-list invariant no longer holds.
    InternalError { page: Option<PageNumber>, reason: &'static str },
    /// Table could not be created with the requested shape.
    InvalidConfig(&'static str),
}

impl fmt::Display for PageTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageTableError::InvalidReference { page, pages } => {
                write!(f, "invalid page reference {} (table has {} pages)", page, pages)
            }
            PageTableError::InternalError { page: Some(page), reason } => {
                write!(f, "internal page table error at page {}: {}", page, reason)
            }
            PageTableError::InternalError { page: None, reason } => {
                write!(f, "internal page table error: {}", reason)
            }
            PageTableError::InvalidConfig(reason) => {
                write!(f, "invalid page table configuration: {}", reason)
            }
        }
    }
}

impl core::error::Error for PageTableError {}

pub type Result<T> = core::result::Result<T, PageTableError>;
