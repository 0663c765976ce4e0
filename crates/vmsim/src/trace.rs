use anyhow::{Context, Result};
use regex::Regex;
use types::{AccessMode, PageNumber, Tick};

/// One page reference from a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub page: PageNumber,
    pub mode: AccessMode,
    pub time: Tick,
}

/// Parse a reference trace.
///
/// Tokens are whitespace separated and look like `r3` or `W12`; `#` starts
/// a comment. The n-th reference in the file is issued at tick n.
pub fn parse_trace(content: &str) -> Result<Vec<Reference>> {
    let token_re = Regex::new(r"^([rRwW])(\d+)$")?;
    let mut refs = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("");

        for token in line.split_whitespace() {
            let captures = token_re
                .captures(token)
                .with_context(|| format!("line {}: malformed reference {:?}", i + 1, token))?;

            let mode = captures[1]
                .chars()
                .next()
                .and_then(AccessMode::from_char)
                .with_context(|| format!("line {}: bad access mode in {:?}", i + 1, token))?;
            let page: PageNumber = captures[2]
                .parse()
                .with_context(|| format!("line {}: page number out of range in {:?}", i + 1, token))?;

            refs.push(Reference {
                page,
                mode,
                time: refs.len() as Tick,
            });
        }
    }

    Ok(refs)
}
