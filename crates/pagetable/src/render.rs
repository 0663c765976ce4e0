use std::fmt::{self, Write};

use crate::table::PageTable;
use types::Tick;

fn cell(out: &mut String, width: usize, value: Option<Tick>) -> fmt::Result {
    match value {
        Some(v) => write!(out, " {:>width$}", v, width = width),
        None => write!(out, " {:>width$}", "-", width = width),
    }
}

impl PageTable {
    /// Fixed-column dump of every page, in page-number order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_table(&mut out);
        out
    }

    fn write_table(&self, out: &mut String) -> fmt::Result {
        writeln!(
            out,
            "{:>4} {:>6} {:>4} {:>6} {:>7} {:>7} {:>7} {:>7}",
            "Page", "Status", "Mod?", "Frame", "Acc(t)", "Load(t)", "#Peeks", "#Pokes"
        )?;
        for (page, entry) in self.entries().iter().enumerate() {
            write!(out, "[{:02}]", page)?;
            write!(out, " {:>6}", entry.status.label())?;
            write!(out, " {:>4}", if entry.modified { "yes" } else { "no" })?;
            cell(out, 6, entry.frame.map(|f| f as Tick))?;
            cell(out, 7, entry.access_time)?;
            cell(out, 7, entry.load_time)?;
            writeln!(out, " {:>7} {:>7}", entry.peeks, entry.pokes)?;
        }
        Ok(())
    }
}
