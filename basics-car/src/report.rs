//! Reporting collaborators for car age.

use std::fmt;

use tracing::info;

/// A computed age together with the year it was measured against.
///
/// Displays as `"<age> (assuming current year is <reference_year>)"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeSummary {
    pub age: u64,
    pub reference_year: i64,
}

impl fmt::Display for AgeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (assuming current year is {})",
            self.age, self.reference_year
        )
    }
}

/// Receives age summaries produced by [`Car::report_age`](crate::Car::report_age).
pub trait AgeReporter: Send + Sync {
    fn report(&self, summary: &AgeSummary);
}

/// Emits each summary as an `info` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl AgeReporter for TracingReporter {
    fn report(&self, summary: &AgeSummary) {
        info!(
            age = summary.age,
            reference_year = summary.reference_year,
            "{summary}"
        );
    }
}

/// Discards every summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl AgeReporter for SilentReporter {
    fn report(&self, _summary: &AgeSummary) {}
}
