use serde::Serialize;

use crate::{Domain, UtcDateTime, ValidationError};

/// One month-bucketed observation of the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DataPoint {
    pub ts: UtcDateTime,
    pub price: f64,
}

impl DataPoint {
    pub fn new(ts: UtcDateTime, price: f64) -> Result<Self, ValidationError> {
        validate_non_negative("price", price)?;
        Ok(Self { ts, price })
    }
}

/// Immutable, timestamp-ordered series backing both charts.
///
/// Never empty: the overview domain of an empty series is undefined.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    points: Vec<DataPoint>,
}

impl Dataset {
    /// Sort `points` by timestamp (stable, duplicates kept) and wrap them.
    ///
    /// Returns `None` for an empty input.
    pub fn new(mut points: Vec<DataPoint>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        points.sort_by(|left, right| left.ts.cmp(&right.ts));
        Some(Self { points })
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `[first ts, last ts]`; the overview domain.
    pub fn time_extent(&self) -> Domain<UtcDateTime> {
        let first = self.points[0].ts;
        let last = self.points[self.points.len() - 1].ts;
        Domain::from_ordered(first, last)
    }

    /// `[0, max price]`; the y extent shared by the focus and context charts.
    pub fn value_domain(&self) -> Domain<f64> {
        let max = self
            .points
            .iter()
            .map(|point| point.price)
            .fold(0.0_f64, f64::max);
        Domain::from_ordered(0.0, max)
    }

    /// Points whose timestamp lies inside `domain` (closed on both ends).
    pub fn window(&self, domain: &Domain<UtcDateTime>) -> &[DataPoint] {
        let start = self.points.partition_point(|point| point.ts < domain.min());
        let end = self.points.partition_point(|point| point.ts <= domain.max());
        &self.points[start..end.max(start)]
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
