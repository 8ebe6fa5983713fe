use crate::core::hypotenuse::{hypotenuse, is_integral};
use crate::core::profile::ProfileReport;
use crate::domain::model::Triple;
use std::time::Instant;

/// Visits every pair `1 <= a <= b <= bound` in `(a, b)` order.
fn for_each_pair(bound: i64, mut visit: impl FnMut(u64, u64)) {
    if bound < 1 {
        return;
    }
    let max = bound as u64;
    for a in 1..=max {
        for b in a..=max {
            visit(a, b);
        }
    }
}

/// All Pythagorean triples whose two shorter sides are at most `bound`.
///
/// Brute force over every pair with `a <= b`, keeping the pairs whose
/// floating point hypotenuse has no fractional part. Triples come back in
/// discovery order, i.e. sorted by `a` then `b`. A bound below 1 gives an
/// empty result.
pub fn enumerate_triples(bound: i64) -> Vec<Triple> {
    let mut triples = Vec::new();
    for_each_pair(bound, |a, b| {
        let h = hypotenuse(a, b);
        if is_integral(h) {
            triples.push(Triple::new(a, b, h as u64));
        }
    });
    triples
}

/// Same search as [`enumerate_triples`], also counting calls and timing the run.
pub fn enumerate_triples_profiled(bound: i64) -> (Vec<Triple>, ProfileReport) {
    let started = Instant::now();
    let mut report = ProfileReport::new(bound);
    let mut triples = Vec::new();

    for_each_pair(bound, |a, b| {
        report.pair_evaluations += 1;
        report.hypotenuse_calls += 1;
        let h = hypotenuse(a, b);
        report.integrality_checks += 1;
        if is_integral(h) {
            report.triples_found += 1;
            triples.push(Triple::new(a, b, h as u64));
        }
    });

    report.elapsed = started.elapsed();
    (triples, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(a: u64, b: u64, c: u64) -> Triple {
        Triple::new(a, b, c)
    }

    #[test]
    fn test_small_bounds_are_empty() {
        assert!(enumerate_triples(0).is_empty());
        assert!(enumerate_triples(1).is_empty());
        assert!(enumerate_triples(2).is_empty());
        assert!(enumerate_triples(3).is_empty());
        assert!(enumerate_triples(-7).is_empty());
        assert!(enumerate_triples(i64::MIN).is_empty());
    }

    #[test]
    fn test_bound_four_finds_first_triple() {
        assert_eq!(enumerate_triples(4), vec![t(3, 4, 5)]);
    }

    #[test]
    fn test_bound_five() {
        assert_eq!(enumerate_triples(5), vec![t(3, 4, 5)]);
    }

    #[test]
    fn test_bound_twenty_five() {
        assert_eq!(
            enumerate_triples(25),
            vec![
                t(3, 4, 5),
                t(5, 12, 13),
                t(6, 8, 10),
                t(7, 24, 25),
                t(8, 15, 17),
                t(9, 12, 15),
                t(10, 24, 26),
                t(12, 16, 20),
                t(15, 20, 25),
                t(18, 24, 30),
                t(20, 21, 29),
            ]
        );
    }

    #[test]
    fn test_profiled_matches_plain_search() {
        let (triples, report) = enumerate_triples_profiled(100);
        assert_eq!(triples, enumerate_triples(100));
        assert_eq!(report.triples_found, triples.len() as u64);
        assert_eq!(report.pair_evaluations, 5050);
        assert_eq!(report.hypotenuse_calls, 5050);
        assert_eq!(report.integrality_checks, 5050);
    }

    #[test]
    fn test_profiled_empty_bound() {
        let (triples, report) = enumerate_triples_profiled(0);
        assert!(triples.is_empty());
        assert_eq!(report.pair_evaluations, 0);
        assert_eq!(report.function_calls(), 1);
    }
}
