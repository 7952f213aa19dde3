use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::warn;

use crate::error::ConfigError;
use crate::loader::InputFormat;

/// Orders counted when none are requested.
pub const DEFAULT_ORDERS: [i64; 3] = [1, 2, 3];

/// Where the ranked rows go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    /// One `{n}-grams.tsv` file per order inside this directory.
    Directory(PathBuf),
    /// Every order in one file, rows prefixed with their order.
    Combined(PathBuf),
}

/// Validated settings of one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub format: InputFormat,
    pub output: OutputTarget,
    /// Distinct positive orders, ascending.
    pub orders: Vec<usize>,
    /// Rows kept per order, 0 for all.
    pub limit: usize,
    pub fold_case: bool,
    pub progress: bool,
}

/// Drops non-positive orders, then deduplicates and sorts the rest.
pub fn normalize_orders(requested: &[i64]) -> Vec<usize> {
    let orders: BTreeSet<usize> = requested
        .iter()
        .filter_map(|&n| usize::try_from(n).ok().filter(|&n| n > 0))
        .collect();
    orders.into_iter().collect()
}

impl RunConfig {
    /// Checks the raw settings and builds a [`RunConfig`].
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingInput`] if `input` is not a file
    /// - [`ConfigError::NoValidOrders`] if no order is positive
    /// - [`ConfigError::NegativeLimit`] if `limit < 0`
    pub fn validate(
        input: PathBuf,
        format: InputFormat,
        output: OutputTarget,
        orders: &[i64],
        limit: i64,
        fold_case: bool,
    ) -> Result<Self, ConfigError> {
        if !input.is_file() {
            return Err(ConfigError::MissingInput(input));
        }
        let normalized = normalize_orders(orders);
        if normalized.is_empty() {
            return Err(ConfigError::NoValidOrders);
        }
        let dropped: Vec<i64> = orders.iter().copied().filter(|&n| n <= 0).collect();
        if !dropped.is_empty() {
            warn!(?dropped, "ignoring non-positive n-gram orders");
        }
        let limit = usize::try_from(limit).map_err(|_| ConfigError::NegativeLimit(limit))?;

        Ok(Self {
            input,
            format,
            output,
            orders: normalized,
            limit,
            fold_case,
            progress: false,
        })
    }

    /// Draw a progress bar while counting.
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }

    /// The limit as handed to the ranking functions.
    pub fn row_limit(&self) -> Option<i64> {
        match self.limit {
            0 => None,
            l => Some(i64::try_from(l).unwrap_or(i64::MAX)),
        }
    }
}
