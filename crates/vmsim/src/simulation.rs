use anyhow::{Context, Result};
use memory::{Memory, Stats};
use pagetable::PageTable;
use types::FrameId;

use crate::config::SimConfig;
use crate::report::RunReport;
use crate::trace::Reference;

/// A page table wired to its physical memory and counters.
pub struct Simulation {
    pub config: SimConfig,
    pub table: PageTable,
    pub memory: Memory,
    pub stats: Stats,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;

        let mut table = PageTable::new(config.policy, config.pages)
            .context("Failed to initialise page table")?;
        table.verbose = config.verbose;
        let memory = Memory::new(config.frames);

        Ok(Self {
            config,
            table,
            memory,
            stats: Stats::new(),
        })
    }

    /// Issue a single reference.
    pub fn step(&mut self, reference: &Reference) -> Result<FrameId> {
        let frame = self
            .table
            .request_access(
                reference.page,
                reference.mode,
                reference.time,
                &mut self.memory,
                &mut self.stats,
            )
            .with_context(|| {
                format!(
                    "Reference {}{} at t={} failed",
                    reference.mode.as_char(),
                    reference.page,
                    reference.time
                )
            })?;

        if self.config.check {
            self.table
                .verify()
                .with_context(|| format!("Page table inconsistent after t={}", reference.time))?;
        }
        Ok(frame)
    }

    /// Issue every reference in order, calling `on_step` after each one.
    pub fn run<F>(&mut self, refs: &[Reference], mut on_step: F) -> Result<()>
    where
        F: FnMut(&Simulation, &Reference, FrameId),
    {
        for reference in refs {
            let frame = self.step(reference)?;
            on_step(&*self, reference, frame);
        }
        Ok(())
    }

    pub fn report(&self) -> RunReport {
        RunReport::from_simulation(self)
    }
}
