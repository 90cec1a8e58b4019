//! Drives correctness checks and wall-clock timing comparisons across the
//! four sort implementations.
//!
//! The criterion benches in `benches/` are the precise instrument; this
//! module is the quick single-shot comparison the binary prints.

use std::time::{Duration, Instant};

use crate::{patterns, stable, unstable, Sort};

/// In-place sort over `i32`, the element type the harness drives everything
/// with.
pub type SortFn = fn(&mut [i32]);

pub struct Algorithm {
    pub name: String,
    pub sort: SortFn,
    /// Quadratic algorithms are skipped above [`QUADRATIC_CUTOFF`] when
    /// timing.
    pub quadratic: bool,
}

/// All implementations under comparison, in menu order.
pub fn algorithms() -> Vec<Algorithm> {
    vec![
        Algorithm {
            name: unstable::quicksort::SortImpl::name(),
            sort: unstable::quicksort::sort::<i32>,
            quadratic: false,
        },
        Algorithm {
            name: stable::mergesort::SortImpl::name(),
            sort: stable::mergesort::sort::<i32>,
            quadratic: false,
        },
        Algorithm {
            name: unstable::heapsort::SortImpl::name(),
            sort: unstable::heapsort::sort::<i32>,
            quadratic: false,
        },
        Algorithm {
            name: stable::bubblesort::SortImpl::name(),
            sort: stable::bubblesort::sort::<i32>,
            quadratic: true,
        },
    ]
}

/// Fixed correctness inputs: empty, single element, duplicates, descending,
/// ascending and negative-containing sequences.
pub const FIXED_CASES: &[&[i32]] = &[
    &[],
    &[1],
    &[3, 1, 4, 1, 5, 9, 2, 6, 5, 3],
    &[10, 9, 8, 7, 6, 5, 4, 3, 2, 1],
    &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
    &[-3, -1, -4, -1, -5, 9, 2, 6, -5, 3],
];

pub struct CaseOutcome {
    pub algorithm: String,
    pub output: Vec<i32>,
    pub pass: bool,
}

pub struct CaseReport {
    pub input: Vec<i32>,
    pub outcomes: Vec<CaseOutcome>,
}

/// Runs every algorithm on a copy of each case and compares against the
/// stdlib sort as the trusted reference.
pub fn check_correctness(cases: &[&[i32]]) -> Vec<CaseReport> {
    cases
        .iter()
        .map(|case| {
            let mut expected = case.to_vec();
            expected.sort();

            let outcomes = algorithms()
                .into_iter()
                .map(|algo| {
                    let mut v = case.to_vec();
                    (algo.sort)(&mut v);

                    CaseOutcome {
                        algorithm: algo.name,
                        pass: v == expected,
                        output: v,
                    }
                })
                .collect();

            CaseReport {
                input: case.to_vec(),
                outcomes,
            }
        })
        .collect()
}

/// Input lengths the performance comparison runs by default.
pub const DEFAULT_SIZES: &[usize] = &[100, 500, 1000, 2000];

/// Largest input length the quadratic algorithms are timed on. Keeps the
/// total runtime of a comparison bounded.
pub const QUADRATIC_CUTOFF: usize = 1000;

pub struct Timing {
    pub algorithm: String,
    /// `None` when the algorithm was skipped for this length.
    pub elapsed: Option<Duration>,
}

pub struct PerfRow {
    pub len: usize,
    pub timings: Vec<Timing>,
}

/// Times every algorithm once per input length, each on its own copy of the
/// same uniformly random sequence.
pub fn measure_perf(sizes: &[usize]) -> Vec<PerfRow> {
    sizes
        .iter()
        .map(|&len| {
            let input = patterns::random_uniform(len, 1..=10_000);

            let timings = algorithms()
                .into_iter()
                .map(|algo| {
                    let elapsed = (!algo.quadratic || len <= QUADRATIC_CUTOFF).then(|| {
                        let mut v = input.clone();
                        let start = Instant::now();
                        (algo.sort)(&mut v);
                        start.elapsed()
                    });

                    Timing {
                        algorithm: algo.name,
                        elapsed,
                    }
                })
                .collect();

            PerfRow { len, timings }
        })
        .collect()
}
