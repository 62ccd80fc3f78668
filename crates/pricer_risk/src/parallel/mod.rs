//! Rayon-based parallelisation utilities.
//!
//! Every helper preserves input order: output element `i` is the result
//! for input element `i`, whether or not the work ran in parallel.

use rayon::prelude::*;

/// Minimum rows handed to one Rayon task.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Default row count from which evaluation runs in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Fallible map that runs in parallel when the config says so.
///
/// All items are evaluated; the error returned is the one from the first
/// failing item in input order, so the outcome does not depend on
/// scheduling.
pub fn try_map_ordered<T, R, E, F>(items: &[T], config: &ParallelConfig, mapper: F) -> Result<Vec<R>, E>
where
    T: Sync,
    R: Send,
    E: Send,
    F: Fn(&T) -> Result<R, E> + Sync + Send,
{
    let results: Vec<Result<R, E>> = if config.should_parallelize(items.len()) {
        items
            .par_iter()
            .with_min_len(config.batch_size)
            .map(&mapper)
            .collect()
    } else {
        items.iter().map(&mapper).collect()
    };
    results.into_iter().collect()
}

/// Configuration for parallel execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct ParallelConfig {
    /// Minimum rows per Rayon task
    pub batch_size: usize,
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(batch_size: usize, parallel_threshold: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            parallel_threshold,
        }
    }

    /// A configuration that never parallelises.
    pub fn sequential() -> Self {
        Self::new(DEFAULT_BATCH_SIZE, usize::MAX)
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }
}
