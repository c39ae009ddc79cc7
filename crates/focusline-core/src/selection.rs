use serde::Serialize;

use crate::{Domain, DomainValue, ValidationError};

/// Brush state on the overview axis.
///
/// `Empty` means nothing is brushed and the focus chart shows the full
/// overview domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Selection<T> {
    Empty,
    Interval(Domain<T>),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T: DomainValue> Selection<T> {
    pub fn interval(start: T, end: T) -> Result<Self, ValidationError> {
        Domain::new(start, end).map(Self::Interval)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn as_interval(&self) -> Option<&Domain<T>> {
        match self {
            Self::Empty => None,
            Self::Interval(domain) => Some(domain),
        }
    }
}
