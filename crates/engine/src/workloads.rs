//! Synthetic reference-string workloads.
//!
//! Deterministic access patterns for exercising and comparing replacement
//! policies: streaming scans, loops, seeded random traffic, and a few
//! application-shaped mixes. These generate engine *inputs*; nothing here
//! feeds back into step semantics.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::core::Page;

/// A named workload with its reference string and locality category.
#[derive(Debug, Clone, Serialize)]
pub struct Workload {
    /// Short workload name.
    pub name: &'static str,
    /// What the pattern models.
    pub description: &'static str,
    /// Coarse locality class.
    pub category: &'static str,
    /// The generated reference string.
    pub reference: Vec<Page>,
}

/// Summary statistics of a reference string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkloadStats {
    /// Number of accesses.
    pub length: usize,
    /// Number of distinct pages touched.
    pub unique_pages: usize,
    /// `unique_pages / length`; 0 for an empty string.
    pub working_set_ratio: f64,
}

/// Sequential file reading or array traversal.
pub fn sequential_access(start: Page, length: usize) -> Vec<Page> {
    (0..length as u64).map(|i| start + i).collect()
}

/// Repeated loop execution over a fixed page set.
pub fn loop_pattern(pages: &[Page], iterations: usize) -> Vec<Page> {
    pages
        .iter()
        .copied()
        .cycle()
        .take(pages.len() * iterations)
        .collect()
}

/// Uniform random traffic over `num_pages` pages, reproducible via `seed`.
pub fn random_access(num_pages: u64, accesses: usize, seed: u64) -> Vec<Page> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..accesses).map(|_| rng.gen_range(0..num_pages)).collect()
}

/// Temporal locality in the 80/20 shape: hot pages dominate, cold pages
/// sweep through between bursts.
pub fn locality_burst(hot: &[Page], cold: &[Page], bursts: usize) -> Vec<Page> {
    let mut pattern = Vec::with_capacity(bursts * (hot.len() * 4 + cold.len()));
    for _ in 0..bursts {
        for _ in 0..4 {
            pattern.extend_from_slice(hot);
        }
        pattern.extend_from_slice(cold);
    }
    pattern
}

/// Browser tab switching around a small hot working set.
pub fn web_browsing() -> Vec<Page> {
    vec![
        1, 2, 3, 1, 2, 4, 5, 1, 2, 3, 6, 7, 1, 2, 3, 4, 8, 9, 1, 2, 3,
    ]
}

/// Video playback with a few backward and forward seeks.
pub fn video_streaming() -> Vec<Page> {
    let mut stream: Vec<Page> = (1..45).collect();
    let seeks: [(usize, &[Page]); 3] = [
        (15, &[5, 6, 7, 8]),
        (30, &[20, 21, 22]),
        (40, &[35, 36, 37, 38]),
    ];
    for (position, pages) in seeks {
        for (offset, &page) in pages.iter().enumerate() {
            stream.insert(position + offset, page);
        }
    }
    stream
}

/// Database index-then-data page access: page 0 is the index root.
pub fn database_query() -> Vec<Page> {
    let mut pattern = Vec::new();
    for query in 0..5u64 {
        pattern.push(0);
        pattern.push(query * 2 + 1);
        pattern.push(query * 2 + 2);
    }
    pattern.push(0);
    pattern.extend_from_slice(&[3, 5, 7]);
    pattern.push(0);
    pattern.extend_from_slice(&[2, 4, 6]);
    pattern
}

/// Matrix multiplication touching row, column, and result pages.
pub fn matrix_multiplication() -> Vec<Page> {
    let n: u64 = 4;
    let mut pattern = Vec::with_capacity((n * n * 3) as usize);
    for i in 0..n {
        for j in 0..n {
            pattern.push(i);
            pattern.push(n + j);
            pattern.push(2 * n + i * n + j);
        }
    }
    pattern
}

/// All built-in workloads with metadata.
pub fn all_benchmarks() -> Vec<Workload> {
    vec![
        Workload {
            name: "Sequential",
            description: "Sequential file reading",
            category: "High Locality",
            reference: sequential_access(0, 30),
        },
        Workload {
            name: "Loop",
            description: "Repeated loop execution",
            category: "High Locality",
            reference: loop_pattern(&[1, 2, 3, 4], 5),
        },
        Workload {
            name: "Random",
            description: "Random database queries",
            category: "Low Locality",
            reference: random_access(10, 40, 42),
        },
        Workload {
            name: "Locality Burst",
            description: "Temporal locality (80/20)",
            category: "Medium Locality",
            reference: locality_burst(&[1, 2, 3], &[4, 5, 6, 7], 8),
        },
        Workload {
            name: "Web Browsing",
            description: "Browser tab switching",
            category: "Medium Locality",
            reference: web_browsing(),
        },
        Workload {
            name: "Video Streaming",
            description: "Video with seeks",
            category: "High Locality",
            reference: video_streaming(),
        },
        Workload {
            name: "Database",
            description: "Database index lookups",
            category: "Medium Locality",
            reference: database_query(),
        },
        Workload {
            name: "Matrix Ops",
            description: "Matrix multiplication",
            category: "Medium Locality",
            reference: matrix_multiplication(),
        },
    ]
}

/// Computes summary statistics for a reference string.
pub fn workload_stats(reference: &[Page]) -> WorkloadStats {
    let unique: std::collections::HashSet<_> = reference.iter().collect();
    let length = reference.len();
    WorkloadStats {
        length,
        unique_pages: unique.len(),
        working_set_ratio: if length == 0 {
            0.0
        } else {
            unique.len() as f64 / length as f64
        },
    }
}
