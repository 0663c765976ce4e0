use types::Counters;

/// Fault and hit counters for a simulation run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    faults: u64,
    hits: u64,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn faults(&self) -> u64 {
        self.faults
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Every reference is either a hit or a fault.
    pub fn references(&self) -> u64 {
        self.faults + self.hits
    }

    pub fn render(&self) -> String {
        format!("#Page faults: {}\n#Page hits:   {}\n", self.faults, self.hits)
    }
}

impl Counters for Stats {
    fn count_page_fault(&mut self) {
        self.faults += 1;
    }

    fn count_page_hit(&mut self) {
        self.hits += 1;
    }
}

/// Counters that record nothing.
#[derive(Debug, Default)]
pub struct NoopCounters;

impl Counters for NoopCounters {}
