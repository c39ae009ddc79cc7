use std::fmt::Debug;

use serde::Serialize;

use crate::{UtcDateTime, ValidationError};

/// Values that can bound a continuous domain.
pub trait DomainValue: Copy + PartialOrd + Debug {
    /// Whether the value can take part in ordering comparisons.
    fn is_comparable(&self) -> bool {
        true
    }
}

impl DomainValue for f64 {
    fn is_comparable(&self) -> bool {
        self.is_finite()
    }
}

impl DomainValue for UtcDateTime {}

/// Closed one-dimensional interval `[min, max]` with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain<T> {
    min: T,
    max: T,
}

impl<T: DomainValue> Domain<T> {
    pub fn new(min: T, max: T) -> Result<Self, ValidationError> {
        if !min.is_comparable() || !max.is_comparable() {
            return Err(ValidationError::NonFiniteValue { field: "domain" });
        }
        if min > max {
            return Err(ValidationError::InvertedDomain {
                min: format!("{min:?}"),
                max: format!("{max:?}"),
            });
        }

        Ok(Self { min, max })
    }

    /// Bounds already known to be ordered and comparable.
    pub(crate) fn from_ordered(min: T, max: T) -> Self {
        debug_assert!(min <= max, "from_ordered called with {min:?} > {max:?}");
        Self { min, max }
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn contains_domain(&self, other: &Self) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

impl Domain<f64> {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}
