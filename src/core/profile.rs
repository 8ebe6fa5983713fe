//! Call counts and timing for one search run, printed in the shape of a
//! `cProfile` summary.

use serde::Serialize;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileReport {
    pub bound: i64,
    pub pair_evaluations: u64,
    pub hypotenuse_calls: u64,
    pub integrality_checks: u64,
    pub triples_found: u64,
    pub elapsed: Duration,
}

impl ProfileReport {
    pub fn new(bound: i64) -> Self {
        Self {
            bound,
            ..Self::default()
        }
    }

    /// Every call the search makes: the enumeration itself, one hypotenuse
    /// and one integrality check per pair, and one append per triple.
    pub fn function_calls(&self) -> u64 {
        1 + self.hypotenuse_calls + self.integrality_checks + self.triples_found
    }

    pub fn pairs_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.pair_evaluations as f64 / secs
        } else {
            0.0
        }
    }
}

/// Number of `(a, b)` pairs with `1 <= a <= b <= bound`.
pub fn expected_pair_evaluations(bound: i64) -> u64 {
    if bound < 1 {
        return 0;
    }
    let m = bound as u128;
    u64::try_from(m * (m + 1) / 2).unwrap_or(u64::MAX)
}

impl fmt::Display for ProfileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} function calls in {:.3} seconds (bound = {})",
            self.function_calls(),
            self.elapsed.as_secs_f64(),
            self.bound
        )?;
        writeln!(f)?;
        writeln!(f, "{:>10}  function", "ncalls")?;
        writeln!(f, "{:>10}  enumerate_triples", 1)?;
        writeln!(f, "{:>10}  hypotenuse", self.hypotenuse_calls)?;
        writeln!(f, "{:>10}  is_integral", self.integrality_checks)?;
        write!(f, "{:>10}  push", self.triples_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_pair_evaluations() {
        assert_eq!(expected_pair_evaluations(-3), 0);
        assert_eq!(expected_pair_evaluations(0), 0);
        assert_eq!(expected_pair_evaluations(1), 1);
        assert_eq!(expected_pair_evaluations(1000), 500_500);
        assert_eq!(expected_pair_evaluations(i64::MAX), u64::MAX);
    }

    #[test]
    fn test_function_calls_and_table() {
        let report = ProfileReport {
            bound: 1000,
            pair_evaluations: 500_500,
            hypotenuse_calls: 500_500,
            integrality_checks: 500_500,
            triples_found: 1034,
            elapsed: Duration::from_millis(287),
        };
        assert_eq!(report.function_calls(), 1_002_035);

        let text = report.to_string();
        assert!(text.starts_with("1002035 function calls in 0.287 seconds"));
        assert!(text.contains("    500500  hypotenuse"));
        assert!(text.contains("      1034  push"));
    }

    #[test]
    fn test_pairs_per_second_without_elapsed_time() {
        assert_eq!(ProfileReport::new(10).pairs_per_second(), 0.0);
    }
}
