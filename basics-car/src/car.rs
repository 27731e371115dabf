use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CarResult;
use crate::report::{AgeReporter, AgeSummary};
use crate::year::Year;

/// The year ages are measured against unless told otherwise.
pub const REFERENCE_YEAR: i64 = 2024;

/// Options for age computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeOptions {
    pub reference_year: i64,
}

impl Default for AgeOptions {
    fn default() -> Self {
        Self {
            reference_year: REFERENCE_YEAR,
        }
    }
}

/// A car. Fields are assigned verbatim at construction and never validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Car {
    pub make: String,
    pub model: String,
    pub year: Year,
}

impl Car {
    #[must_use]
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: impl Into<Year>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year: year.into(),
        }
    }

    /// Years between the car's year and [`REFERENCE_YEAR`].
    ///
    /// Always non-negative: a year after the reference year yields the
    /// distance forward. Fails if a textual year has no leading integer.
    pub fn age(&self) -> CarResult<u64> {
        self.age_at(REFERENCE_YEAR)
    }

    /// Years between the car's year and `reference_year`.
    pub fn age_at(&self, reference_year: i64) -> CarResult<u64> {
        let year = self.year.resolve()?;
        debug!(year, reference_year, "computing car age");
        Ok(year.abs_diff(reference_year))
    }

    /// Age using the reference year from `options`.
    pub fn age_with(&self, options: &AgeOptions) -> CarResult<u64> {
        self.age_at(options.reference_year)
    }

    /// Computes the age and hands the summary to `reporter`.
    ///
    /// Nothing is reported when the year cannot be resolved.
    pub fn report_age(&self, reporter: &dyn AgeReporter) -> CarResult<u64> {
        let age = self.age()?;
        reporter.report(&AgeSummary {
            age,
            reference_year: REFERENCE_YEAR,
        });
        Ok(age)
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.year, self.make, self.model)
    }
}
