//! Continuous scales mapping a domain onto a pixel range.

use crate::{Domain, UtcDateTime, ValidationError};

/// Linear map from a numeric domain onto a pixel range.
///
/// The range may run backwards (`[height, 0]` for a y axis).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: Domain<f64>,
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: Domain<f64>, range: (f64, f64)) -> Result<Self, ValidationError> {
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "range" });
        }
        Ok(Self { domain, range })
    }

    pub fn domain(&self) -> &Domain<f64> {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn set_domain(&mut self, domain: Domain<f64>) {
        self.domain = domain;
    }

    /// A degenerate domain maps everything to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (r0, r1) = self.range;
        if self.domain.is_degenerate() {
            return (r0 + r1) / 2.0;
        }
        let t = (value - self.domain.min()) / self.domain.span();
        r0 + t * (r1 - r0)
    }

    pub fn invert(&self, px: f64) -> f64 {
        let (r0, r1) = self.range;
        if r0 == r1 || self.domain.is_degenerate() {
            return self.domain.min();
        }
        let t = (px - r0) / (r1 - r0);
        self.domain.min() + t * self.domain.span()
    }

    pub fn clamp_px(&self, px: f64) -> f64 {
        let (r0, r1) = self.range;
        px.clamp(r0.min(r1), r0.max(r1))
    }
}

/// Linear scale over UTC timestamps, measured in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: Domain<UtcDateTime>,
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(domain: Domain<UtcDateTime>, range: (f64, f64)) -> Result<Self, ValidationError> {
        Ok(Self {
            domain,
            linear: LinearScale::new(millis_domain(&domain), range)?,
        })
    }

    pub fn domain(&self) -> &Domain<UtcDateTime> {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.linear.range()
    }

    pub fn set_domain(&mut self, domain: Domain<UtcDateTime>) {
        self.domain = domain;
        self.linear.set_domain(millis_domain(&domain));
    }

    pub fn map(&self, ts: UtcDateTime) -> f64 {
        self.linear.map(ts.unix_millis())
    }

    pub fn invert(&self, px: f64) -> Result<UtcDateTime, ValidationError> {
        UtcDateTime::from_unix_millis(self.linear.invert(px))
    }

    pub fn clamp_px(&self, px: f64) -> f64 {
        self.linear.clamp_px(px)
    }
}

fn millis_domain(domain: &Domain<UtcDateTime>) -> Domain<f64> {
    Domain::from_ordered(domain.min().unix_millis(), domain.max().unix_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(input: &str) -> UtcDateTime {
        UtcDateTime::parse_month_year(input).expect("month")
    }

    #[test]
    fn maps_domain_ends_to_range_ends() {
        let scale = LinearScale::new(Domain::new(0.0, 110.0).expect("domain"), (40.0, 0.0))
            .expect("scale");
        assert_eq!(scale.map(0.0), 40.0);
        assert_eq!(scale.map(110.0), 0.0);
        assert_eq!(scale.map(55.0), 20.0);
        assert_eq!(scale.invert(20.0), 55.0);
    }

    #[test]
    fn degenerate_domain_maps_to_range_midpoint() {
        let scale =
            LinearScale::new(Domain::new(5.0, 5.0).expect("domain"), (0.0, 100.0)).expect("scale");
        assert_eq!(scale.map(5.0), 50.0);
        assert_eq!(scale.invert(80.0), 5.0);
    }

    #[test]
    fn clamps_pixels_for_reversed_range() {
        let scale = LinearScale::new(Domain::new(0.0, 1.0).expect("domain"), (40.0, 0.0))
            .expect("scale");
        assert_eq!(scale.clamp_px(-3.0), 0.0);
        assert_eq!(scale.clamp_px(50.0), 40.0);
    }

    #[test]
    fn rejects_non_finite_range() {
        let err = LinearScale::new(Domain::new(0.0, 1.0).expect("domain"), (0.0, f64::INFINITY))
            .expect_err("must fail");
        assert!(matches!(err, ValidationError::NonFiniteValue { field: "range" }));
    }

    #[test]
    fn time_scale_inverts_range_ends_exactly() {
        let domain = Domain::new(month("Jan 2013"), month("Mar 2013")).expect("domain");
        let scale = TimeScale::new(domain, (0.0, 910.0)).expect("scale");

        assert_eq!(scale.map(month("Jan 2013")), 0.0);
        assert_eq!(scale.map(month("Mar 2013")), 910.0);
        assert_eq!(scale.invert(0.0).expect("in range"), month("Jan 2013"));
        assert_eq!(scale.invert(910.0).expect("in range"), month("Mar 2013"));
    }

    #[test]
    fn set_domain_rezooms_time_scale() {
        let mut scale = TimeScale::new(
            Domain::new(month("Jan 2013"), month("Mar 2013")).expect("domain"),
            (0.0, 100.0),
        )
        .expect("scale");
        scale.set_domain(Domain::new(month("Feb 2013"), month("Mar 2013")).expect("domain"));

        assert_eq!(scale.map(month("Feb 2013")), 0.0);
        assert_eq!(scale.domain().min(), month("Feb 2013"));
    }

    #[test]
    fn inverting_a_far_off_pixel_is_out_of_range() {
        let domain = Domain::new(month("Jan 2013"), month("Mar 2013")).expect("domain");
        let scale = TimeScale::new(domain, (0.0, 910.0)).expect("scale");

        for px in [1e30, -1e30] {
            let err = scale.invert(px).expect_err("must fail");
            assert!(matches!(err, ValidationError::TimestampOutOfRange { .. }), "{px} -> {err:?}");
        }
    }
}
