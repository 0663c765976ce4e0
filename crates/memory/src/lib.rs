pub mod frames;
pub use frames::{Frame, Memory};

pub mod stats;
pub use stats::{NoopCounters, Stats};
