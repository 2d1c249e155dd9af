//! Per-item results of bulk operations.
//!
//! Loops that write or remove several events record each failure here instead of
//! aborting, so callers learn exactly which items did not make it.

use std::fmt::Display;

use crate::model::api::{BatchFailureDto, BatchOutcomeDto};

/// One failed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    /// Identifies the item, e.g. an event id or an occurrence start time.
    pub item: String,
    pub error: String,
}

/// Successes and failures of a bulk operation, in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome<T> {
    pub succeeded: Vec<T>,
    pub failed: Vec<BatchFailure>,
}

impl<T> BatchOutcome<T> {
    pub fn new() -> Self {
        Self {
            succeeded: Vec::new(),
            failed: Vec::new(),
        }
    }

    pub fn record_success(&mut self, value: T) {
        self.succeeded.push(value);
    }

    pub fn record_failure(&mut self, item: impl Display, error: impl Display) {
        self.failed.push(BatchFailure {
            item: item.to_string(),
            error: error.to_string(),
        });
    }

    /// Whether every item succeeded.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl<T> Default for BatchOutcome<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchOutcome<i32> {
    pub fn into_dto(self) -> BatchOutcomeDto {
        BatchOutcomeDto {
            succeeded: self.succeeded,
            failed: self
                .failed
                .into_iter()
                .map(|f| BatchFailureDto {
                    item: f.item,
                    error: f.error,
                })
                .collect(),
        }
    }
}
