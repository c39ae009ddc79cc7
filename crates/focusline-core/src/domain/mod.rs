//! # Domain Models
//!
//! Canonical domain types for focusline price series.
//!
//! ## Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`DataPoint`] | One month-bucketed price observation |
//! | [`Dataset`] | Non-empty, timestamp-ordered series |
//! | [`Domain`] | Closed interval `[min, max]` over times or values |
//! | [`UtcDateTime`] | UTC timestamp, parsed from `"Mon YYYY"` or RFC3339 |
//!
//! ## Validation
//!
//! All domain types enforce invariants at construction time:
//!
//! ```rust
//! use focusline_core::{DataPoint, Domain, UtcDateTime, ValidationError};
//!
//! let ts = UtcDateTime::parse_month_year("Jan 2013").unwrap();
//! assert!(DataPoint::new(ts, 100.0).is_ok());
//!
//! // Negative prices are rejected
//! let invalid = DataPoint::new(ts, -1.0);
//! assert!(matches!(invalid, Err(ValidationError::NegativeValue { .. })));
//!
//! // So are inverted domains
//! assert!(Domain::new(2.0, 1.0).is_err());
//! ```

mod models;
mod range;
mod timestamp;

pub use models::{DataPoint, Dataset};
pub use range::{Domain, DomainValue};
pub use timestamp::UtcDateTime;
