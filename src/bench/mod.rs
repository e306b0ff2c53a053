//! Benchmark workload runner
//!
//! Runs five independent synthetic workloads strictly in sequence and reports
//! total wall-clock time as a single plain-text line. The workloads share no
//! data; sequencing and the elapsed-time line are the whole contract.
//!
//! A failure in any workload aborts the rest of the run and surfaces as a
//! typed [`WorkloadError`]; there is no retry, no partial result, and no
//! cleanup on failure.

pub mod workloads;

use std::fmt;
use std::io;
use std::path::Path;
use std::time::Instant;

pub use workloads::JsonPayload;

/// Iteration bound shared by the CPU-side workloads
pub const MAX_INCREMENTS: u64 = 1_000_000;

/// Scratch file written, read, and deleted by the I/O workload
///
/// The name is fixed and resolved against the current working directory;
/// concurrent benchmark runs race on it.
pub const SCRATCH_FILE: &str = "benchmark_test.txt";

/// Line repeated into the scratch file
pub const SCRATCH_LINE: &str = "Hello World\n";

/// Number of times the line is repeated
pub const SCRATCH_REPEATS: usize = 100_000;

/// Error raised by a failed workload step
#[derive(Debug)]
pub enum WorkloadError {
    /// Scratch-file write, read, or delete failed
    Io(io::Error),
    /// JSON encode or decode failed
    Encode(serde_json::Error),
}

impl fmt::Display for WorkloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "file workload failed: {e}"),
            Self::Encode(e) => write!(f, "json workload failed: {e}"),
        }
    }
}

impl std::error::Error for WorkloadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Encode(e) => Some(e),
        }
    }
}

impl From<io::Error> for WorkloadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for WorkloadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Encode(e)
    }
}

/// Result of a completed benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchReport {
    /// Total wall-clock time across all workloads, in seconds
    pub elapsed_secs: f64,
}

impl BenchReport {
    /// Render the single output line, trailing newline included
    ///
    /// Uses the default `f64` formatting; no precision is imposed.
    #[must_use]
    pub fn to_output(&self) -> String {
        format!("Execution time: {} seconds\n", self.elapsed_secs)
    }
}

/// Run all five workloads in order and time the whole sequence
///
/// Blocking and CPU-heavy; callers on an async runtime should run this under
/// `spawn_blocking`.
pub fn run() -> Result<BenchReport, WorkloadError> {
    let start = Instant::now();

    // 1. Arithmetic: sum of square roots, result discarded
    let _sum = workloads::arithmetic(MAX_INCREMENTS);

    // 2. Traverse a fully materialized sequence
    let values = workloads::build_sequence(MAX_INCREMENTS);
    let _array_sum = workloads::traverse_sequence(&values);

    // 3. Repeated single-character appends
    let _buf = workloads::string_growth(MAX_INCREMENTS as usize);

    // 4. JSON encode/decode round trips
    workloads::json_round_trips(MAX_INCREMENTS)?;

    // 5. Scratch-file write, read, delete
    workloads::file_io(Path::new(SCRATCH_FILE), SCRATCH_LINE, SCRATCH_REPEATS)?;

    let elapsed_secs = start.elapsed().as_secs_f64();
    Ok(BenchReport { elapsed_secs })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_line_format() {
        let report = BenchReport { elapsed_secs: 1.25 };
        assert_eq!(report.to_output(), "Execution time: 1.25 seconds\n");
    }

    #[test]
    fn test_report_line_parses_back() {
        let report = BenchReport {
            elapsed_secs: 0.000_123_456,
        };
        let line = report.to_output();
        let inner = line
            .strip_prefix("Execution time: ")
            .and_then(|rest| rest.strip_suffix(" seconds\n"))
            .unwrap();
        let value: f64 = inner.parse().unwrap();
        assert!(value >= 0.0);
    }

    #[test]
    fn test_workload_error_display() {
        let err = WorkloadError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.to_string().contains("file workload failed"));
    }
}
