pub mod config;
pub mod report;
pub mod simulation;
pub mod trace;

pub use config::{OutputFormat, SimConfig};
pub use report::{EntryReport, RunReport};
pub use simulation::Simulation;
pub use trace::{parse_trace, Reference};
