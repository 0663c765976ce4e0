use core::fmt;
use core::str::FromStr;

/// Page replacement policy selected when the page table is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Policy {
    #[default]
    Fifo,
    Lru,
    Clock,
}

impl Policy {
    pub const fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "fifo",
            Policy::Lru => "lru",
            Policy::Clock => "clock",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsePolicyError;

impl fmt::Display for ParsePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown replacement policy (expected fifo, lru or clock)")
    }
}

impl core::error::Error for ParsePolicyError {}

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("fifo") {
            Ok(Policy::Fifo)
        } else if s.eq_ignore_ascii_case("lru") {
            Ok(Policy::Lru)
        } else if s.eq_ignore_ascii_case("clock") {
            Ok(Policy::Clock)
        } else {
            Err(ParsePolicyError)
        }
    }
}
