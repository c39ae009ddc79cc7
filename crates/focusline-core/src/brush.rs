//! Brush gestures on the overview axis.
//!
//! A brush turns drags into [`Selection`]s. Selections it hands out are
//! always inside the overview domain, and a drag that collapses to zero
//! width clears the selection instead of producing an empty interval.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::{Domain, Selection, TimeScale, UtcDateTime, ValidationError};

/// A single user interaction with the brush.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BrushGesture {
    /// Explicit clear.
    Clear,
    /// Drag between two pixel positions on the overview axis.
    Drag { start_px: f64, end_px: f64 },
    /// Drag already expressed in domain units.
    Select { start: UtcDateTime, end: UtcDateTime },
}

impl FromStr for BrushGesture {
    type Err = ValidationError;

    /// Accepts `clear`, `drag:<px>..<px>` and `<Mon YYYY>..<Mon YYYY>`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidGesture {
            value: value.to_owned(),
        };
        let trimmed = value.trim();

        if trimmed.eq_ignore_ascii_case("clear") {
            return Ok(Self::Clear);
        }

        if let Some(pixels) = trimmed.strip_prefix("drag:") {
            let (start, end) = pixels.split_once("..").ok_or_else(invalid)?;
            let start_px = start.trim().parse::<f64>().map_err(|_| invalid())?;
            let end_px = end.trim().parse::<f64>().map_err(|_| invalid())?;
            if !start_px.is_finite() || !end_px.is_finite() {
                return Err(invalid());
            }
            return Ok(Self::Drag { start_px, end_px });
        }

        let (start, end) = trimmed.split_once("..").ok_or_else(invalid)?;
        let start = UtcDateTime::parse_month_year(start.trim()).map_err(|_| invalid())?;
        let end = UtcDateTime::parse_month_year(end.trim()).map_err(|_| invalid())?;
        Ok(Self::Select { start, end })
    }
}

impl Display for BrushGesture {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clear => f.write_str("clear"),
            Self::Drag { start_px, end_px } => write!(f, "drag:{start_px}..{end_px}"),
            Self::Select { start, end } => write!(
                f,
                "{}..{}",
                start.format_month_year(),
                end.format_month_year()
            ),
        }
    }
}

/// Brush bound to the overview time scale.
#[derive(Debug, Clone)]
pub struct Brush {
    scale: TimeScale,
    extent: Selection<UtcDateTime>,
}

impl Brush {
    pub fn new(scale: TimeScale) -> Self {
        Self {
            scale,
            extent: Selection::Empty,
        }
    }

    pub fn apply(&mut self, gesture: BrushGesture) -> Result<Selection<UtcDateTime>, ValidationError> {
        tracing::trace!(%gesture, "brush gesture");
        match gesture {
            BrushGesture::Clear => Ok(self.clear()),
            BrushGesture::Drag { start_px, end_px } => self.drag(start_px, end_px),
            BrushGesture::Select { start, end } => Ok(self.select(start, end)),
        }
    }

    /// Pixel drag; ends are clamped to the axis before inversion.
    pub fn drag(&mut self, start_px: f64, end_px: f64) -> Result<Selection<UtcDateTime>, ValidationError> {
        if !start_px.is_finite() || !end_px.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "drag" });
        }

        let lo_px = self.scale.clamp_px(start_px.min(end_px));
        let hi_px = self.scale.clamp_px(start_px.max(end_px));
        if lo_px == hi_px {
            return Ok(self.clear());
        }

        let first = self.scale.invert(lo_px)?;
        let second = self.scale.invert(hi_px)?;
        Ok(self.select(first, second))
    }

    /// Domain-unit drag, clamped to the overview bounds.
    pub fn select(&mut self, start: UtcDateTime, end: UtcDateTime) -> Selection<UtcDateTime> {
        let overview = self.scale.domain();
        let lo = overview.clamp(start.min(end));
        let hi = overview.clamp(start.max(end));

        self.extent = if lo == hi {
            Selection::Empty
        } else {
            Selection::Interval(Domain::from_ordered(lo, hi))
        };
        self.extent
    }

    pub fn clear(&mut self) -> Selection<UtcDateTime> {
        self.extent = Selection::Empty;
        self.extent
    }

    pub fn extent(&self) -> &Selection<UtcDateTime> {
        &self.extent
    }

    pub fn is_empty(&self) -> bool {
        self.extent.is_empty()
    }
}
