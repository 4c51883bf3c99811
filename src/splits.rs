//! Deterministic train/test partitioning.
//!
//! Rows are partitioned by a uniform shuffle under a fixed seed, so the
//! split is reproducible for a given table and ratio (but not stable across
//! different row counts).

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::errors::IngestionError;
use crate::table::Table;

/// Fraction of rows allocated to the test partition, validated into (0, 1).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitRatio(f32);

impl SplitRatio {
    /// Validate `ratio` into the open interval (0, 1).
    pub fn new(ratio: f32) -> Result<Self, IngestionError> {
        if ratio > 0.0 && ratio < 1.0 {
            Ok(Self(ratio))
        } else {
            Err(IngestionError::InvalidRatio(ratio))
        }
    }

    /// The validated test fraction.
    pub fn test_fraction(self) -> f32 {
        self.0
    }
}

/// Disjoint train/test row partitions of a source table.
#[derive(Clone, Debug)]
pub struct TrainTestSplit {
    /// Training partition (fraction ~ 1 - ratio).
    pub train: Table,
    /// Test partition (fraction ~ ratio).
    pub test: Table,
}

/// Partition `table` rows into train/test with a seeded uniform shuffle.
///
/// The test partition takes `ceil(rows * ratio)` rows of the shuffled order;
/// the rest form the training partition. Same table, ratio, and seed always
/// produce identical partitions.
pub fn split_table(table: &Table, ratio: SplitRatio, seed: u64) -> TrainTestSplit {
    let mut indices: Vec<usize> = (0..table.row_count()).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test_len = ((table.row_count() as f64) * f64::from(ratio.test_fraction())).ceil() as usize;
    let (test_indices, train_indices) = indices.split_at(test_len.min(indices.len()));

    TrainTestSplit {
        train: table.select_rows(train_indices),
        test: table.select_rows(test_indices),
    }
}
