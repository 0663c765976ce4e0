use anyhow::Result;
use serde::{Deserialize, Serialize};
use types::{FrameId, Frames, PageNumber, Tick};

use crate::simulation::Simulation;

/// Summary of a finished run, serialisable for `--format json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub policy: String,
    pub pages: usize,
    pub frames: usize,
    pub references: u64,
    pub faults: u64,
    pub hits: u64,
    pub loads: u64,
    pub saves: u64,
    pub entries: Vec<EntryReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryReport {
    pub page: PageNumber,
    pub status: String,
    pub modified: bool,
    pub frame: Option<FrameId>,
    pub access_time: Option<Tick>,
    pub load_time: Option<Tick>,
    pub peeks: u64,
    pub pokes: u64,
}

impl RunReport {
    pub fn from_simulation(sim: &Simulation) -> Self {
        let entries = sim
            .table
            .entries()
            .iter()
            .enumerate()
            .map(|(page, entry)| EntryReport {
                page,
                status: entry.status.label().to_string(),
                modified: entry.modified,
                frame: entry.frame,
                access_time: entry.access_time,
                load_time: entry.load_time,
                peeks: entry.peeks,
                pokes: entry.pokes,
            })
            .collect();

        Self {
            policy: sim.table.policy().to_string(),
            pages: sim.table.pages(),
            frames: sim.memory.capacity(),
            references: sim.stats.references(),
            faults: sim.stats.faults(),
            hits: sim.stats.hits(),
            loads: sim.memory.loads(),
            saves: sim.memory.saves(),
            entries,
        }
    }

    /// Faults as a percentage of all references.
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            return 0.0;
        }
        (self.faults as f64 / self.references as f64) * 100.0
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
