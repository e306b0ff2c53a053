//! Synthetic workload implementations
//!
//! Each workload is an independent unit of CPU, memory, or I/O work. They
//! share no data; the runner only sequences them and times the whole run.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::WorkloadError;

/// Sum of square roots over `0..bound`
///
/// Only the time cost matters; the sum is returned so the loop is not
/// optimized away and so tests can sanity-check it.
pub fn arithmetic(bound: u64) -> f64 {
    let mut sum = 0.0_f64;
    for i in 0..bound {
        #[allow(clippy::cast_precision_loss)]
        let value = i as f64;
        sum += value.sqrt();
    }
    sum
}

/// Materialize the full sequence `1..=max` in ascending order
///
/// The whole vector is held in memory at once; streaming it would remove the
/// memory-pressure characteristic this workload exists to exercise.
pub fn build_sequence(max: u64) -> Vec<u64> {
    (1..=max).collect()
}

/// Traverse a materialized sequence once, accumulating a running sum
pub fn traverse_sequence(values: &[u64]) -> u64 {
    let mut sum = 0_u64;
    for value in values {
        sum += value;
    }
    sum
}

/// Grow a string by appending one character per iteration
///
/// Deliberately one push per loop pass rather than a bulk repeat; the
/// repeated-append cost is the point of the workload.
pub fn string_growth(count: usize) -> String {
    let mut buf = String::new();
    for _ in 0..count {
        buf.push('a');
    }
    buf
}

/// Fixed payload for the JSON round-trip workload
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct JsonPayload {
    pub key: String,
    pub numbers: Vec<u32>,
}

impl JsonPayload {
    /// The fixed source value: a string field plus the sequence 1..=100
    pub fn fixture() -> Self {
        Self {
            key: "value".to_string(),
            numbers: (1..=100).collect(),
        }
    }
}

/// Serialize and immediately deserialize the fixed payload, `iterations` times
///
/// The decoded value is discarded each pass.
pub fn json_round_trips(iterations: u64) -> Result<(), WorkloadError> {
    let payload = JsonPayload::fixture();
    for _ in 0..iterations {
        let encoded = serde_json::to_string(&payload)?;
        let _decoded: JsonPayload = serde_json::from_str(&encoded)?;
    }
    Ok(())
}

/// Write a repeated text line to a scratch file, read it back, delete it
///
/// Exactly one write, one read, one delete. No existence check before the
/// delete and no cleanup on failure; an error leaves the file behind, which
/// matches the all-or-nothing contract of the run.
pub fn file_io(path: &Path, line: &str, repeats: usize) -> Result<usize, WorkloadError> {
    let contents = line.repeat(repeats);
    fs::write(path, &contents)?;
    let read_back = fs::read_to_string(path)?;
    fs::remove_file(path)?;
    Ok(read_back.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_small_bound() {
        // bound is exclusive: 0..4
        let expected = 0.0 + 1.0 + 2.0_f64.sqrt() + 3.0_f64.sqrt();
        let sum = arithmetic(4);
        assert!((sum - expected).abs() < 1e-12);
    }

    #[test]
    fn test_sequence_is_complete_and_ascending() {
        let values = build_sequence(1_000_000);
        assert_eq!(values.len(), 1_000_000);
        assert_eq!(values.first(), Some(&1));
        assert_eq!(values.last(), Some(&1_000_000));
        assert!(values.windows(2).all(|w| w[0] + 1 == w[1]));
    }

    #[test]
    fn test_traversal_sum_regression() {
        // Closed form n(n+1)/2 for n = 1_000_000
        let values = build_sequence(1_000_000);
        assert_eq!(traverse_sequence(&values), 500_000_500_000);
    }

    #[test]
    fn test_string_growth_one_char_per_pass() {
        let buf = string_growth(1000);
        assert_eq!(buf.len(), 1000);
        assert!(buf.bytes().all(|b| b == b'a'));
    }

    #[test]
    fn test_json_payload_round_trip_is_lossless() {
        let original = JsonPayload::fixture();
        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: JsonPayload = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);
        assert_eq!(decoded.key, "value");
        assert_eq!(decoded.numbers.len(), 100);
        assert_eq!(decoded.numbers.first(), Some(&1));
        assert_eq!(decoded.numbers.last(), Some(&100));
    }

    #[test]
    fn test_json_round_trips_complete() {
        assert!(json_round_trips(3).is_ok());
    }

    #[test]
    fn test_file_io_creates_then_removes_scratch() {
        let path = std::env::temp_dir().join(format!(
            "bench_server_scratch_{}_{}.txt",
            std::process::id(),
            line!()
        ));
        let read_len = file_io(&path, "Hello World\n", 100).unwrap();
        assert_eq!(read_len, "Hello World\n".len() * 100);
        assert!(!path.exists());
    }

    #[test]
    fn test_file_io_missing_dir_is_error() {
        let path = Path::new("/nonexistent-dir-for-sure/scratch.txt");
        assert!(file_io(path, "x\n", 1).is_err());
    }
}
