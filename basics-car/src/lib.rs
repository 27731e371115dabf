//! Car value object.
//!
//! A [`Car`] carries a make, a model and a [`Year`] that may arrive either as
//! a number or as numeric text. Its age is the distance in years from
//! [`REFERENCE_YEAR`], always non-negative.
//!
//! Age computation is pure. The human-readable summary line goes through an
//! [`AgeReporter`] supplied by the caller.

mod car;
mod error;
mod report;
mod year;

pub use car::{AgeOptions, Car, REFERENCE_YEAR};
pub use error::{CarError, CarResult};
pub use report::{AgeReporter, AgeSummary, SilentReporter, TracingReporter};
pub use year::Year;
