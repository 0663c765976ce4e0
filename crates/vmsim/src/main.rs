use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use types::Policy;
use vmsim::{parse_trace, OutputFormat, RunReport, SimConfig, Simulation};

/// Virtual memory simulator: replays a page reference trace against a page
/// table with a fixed number of physical frames.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Replacement policy (fifo, lru, clock)
    #[arg(short, long, default_value = "fifo")]
    policy: String,

    /// Number of virtual pages
    #[arg(short = 'n', long)]
    pages: usize,

    /// Number of physical frames
    #[arg(short, long)]
    frames: usize,

    /// Trace file (reads stdin when omitted)
    #[arg(short, long)]
    trace: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    format: String,

    /// Dump the page table after every reference
    #[arg(short, long)]
    show_steps: bool,

    /// Verify page table invariants after every reference
    #[arg(short, long)]
    check: bool,

    /// Print eviction and load decisions
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> Result<(SimConfig, Option<PathBuf>)> {
        let policy: Policy = self
            .policy
            .parse()
            .with_context(|| format!("Invalid policy: {}", self.policy))?;
        let config = SimConfig {
            policy,
            pages: self.pages,
            frames: self.frames,
            format: self.format.parse()?,
            show_steps: self.show_steps,
            check: self.check,
            verbose: self.verbose,
        };
        config.validate()?;
        Ok((config, self.trace))
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let (config, trace_path) = Args::parse().into_config()?;
    let text = config.format == OutputFormat::Text;

    let content = match &trace_path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read trace file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read trace from stdin")?;
            buf
        }
    };
    let refs = parse_trace(&content)?;

    if text {
        println!("{}", "Virtual Memory Simulator v0.1.0".bold().blue());
        println!("{}", "=====================================".blue());
        println!(
            "  policy: {}  pages: {}  frames: {}  references: {}",
            config.policy.to_string().yellow(),
            config.pages,
            config.frames,
            refs.len()
        );
        println!();
    }

    let show_steps = config.show_steps && text;
    let mut sim = Simulation::new(config)?;
    sim.run(&refs, |sim, reference, frame| {
        if show_steps {
            println!(
                "{} t={} {}{} -> frame {}",
                "▶".cyan(),
                reference.time,
                reference.mode.as_char(),
                reference.page,
                frame
            );
            print!("{}", sim.table.render());
            println!();
        }
    })?;

    let report = sim.report();
    if text {
        print!("{}", sim.table.render());
        println!();
        print!("{}", sim.memory.render());
        println!();
        print!("{}", sim.stats.render());
        print_summary(&report);
    } else {
        println!("{}", report.to_json()?);
    }

    Ok(())
}

fn print_summary(report: &RunReport) {
    println!();
    println!("{}", "=====================================".blue());
    println!("{}", "Summary".bold().green());
    println!("{}", "=====================================".blue());
    println!("  References: {}", report.references);
    println!(
        "  Faults: {} ({:.1}%)",
        report.faults.to_string().red(),
        report.fault_rate()
    );
    println!("  Hits: {}", report.hits.to_string().green());
    println!("  Frames loaded: {}  saved: {}", report.loads, report.saves);
}
