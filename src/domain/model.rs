use crate::core::profile::ProfileReport;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Pythagorean triple `(a, b, c)` with `a <= b < c` and `a² + b² = c²`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub a: u64,
    pub b: u64,
    pub c: u64,
}

impl Triple {
    pub fn new(a: u64, b: u64, c: u64) -> Self {
        Self { a, b, c }
    }

    /// Exact integer check of `a² + b² = c²`.
    pub fn is_pythagorean(&self) -> bool {
        let (a, b, c) = (self.a as u128, self.b as u128, self.c as u128);
        a * a + b * b == c * c
    }
}

impl From<(u64, u64, u64)> for Triple {
    fn from((a, b, c): (u64, u64, u64)) -> Self {
        Self::new(a, b, c)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.a, self.b, self.c)
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub bound: i64,
    pub triples: Vec<Triple>,
    pub profile: ProfileReport,
}

#[derive(Debug, Clone)]
pub struct RenderedOutput {
    pub filename: String,
    pub content: String,
    pub triples_found: usize,
    pub profile: ProfileReport,
}
