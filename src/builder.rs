//! Planner builder for flexible configuration
//!
//! This module provides a builder pattern for creating query planners with
//! a custom default precision and merge behavior.

use crate::config::Config;
use crate::error::{GeoHashError, Result};
use crate::planner::QueryPlanner;

/// Builder for planner configuration.
///
/// # Examples
///
/// ```rust
/// use geohash_query::QueryPlannerBuilder;
///
/// let planner = QueryPlannerBuilder::new()
///     .default_precision(12)
///     .merge_queries(false)
///     .build()
///     .unwrap();
/// assert_eq!(planner.config().default_precision, 12);
/// ```
#[derive(Debug, Default)]
pub struct QueryPlannerBuilder {
    config: Config,
}

impl QueryPlannerBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the precision used by [`QueryPlanner::encode`].
    pub fn default_precision(mut self, precision: usize) -> Self {
        self.config.default_precision = precision;
        self
    }

    /// Enable or disable merging of adjacent queries.
    pub fn merge_queries(mut self, merge: bool) -> Self {
        self.config.merge_queries = merge;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Validate the configuration and build the planner.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration fails validation.
    pub fn build(self) -> Result<QueryPlanner> {
        self.config.validate().map_err(GeoHashError::InvalidConfig)?;
        log::debug!("Building query planner with {:?}", self.config);
        Ok(QueryPlanner::from_validated(self.config))
    }
}
