use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::parsing::Parsed;
use time::{Date, OffsetDateTime};

use crate::ValidationError;

const MONTH_YEAR: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short case_sensitive:false] [year]");
const MONTH_YEAR_DISPLAY: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [year]");

const NANOS_PER_MILLI: i128 = 1_000_000;

/// A UTC instant, serialised as RFC3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDateTime(OffsetDateTime);

impl UtcDateTime {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    /// Parse an abbreviated month plus four-digit year (`"Jan 2013"`) into
    /// midnight UTC on the first day of that month.
    ///
    /// The whole input must match; trailing text is rejected.
    pub fn parse_month_year(input: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidMonthYear {
            value: input.to_owned(),
        };

        // `[year]` alone would also take a sign or a fifth digit.
        let (_, year) = input.split_once(' ').ok_or_else(invalid)?;
        if year.len() != 4 || !year.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(invalid());
        }

        let mut parsed = Parsed::new();
        let rest = parsed
            .parse_items(input.as_bytes(), MONTH_YEAR)
            .map_err(|_| invalid())?;
        if !rest.is_empty() {
            return Err(invalid());
        }

        let (Some(year), Some(month)) = (parsed.year(), parsed.month()) else {
            return Err(invalid());
        };
        let date = Date::from_calendar_date(year, month, 1).map_err(|_| invalid())?;

        Ok(Self(date.midnight().assume_utc()))
    }

    /// Build from milliseconds since the Unix epoch; fractional milliseconds
    /// are truncated toward zero.
    pub fn from_unix_millis(millis: f64) -> Result<Self, ValidationError> {
        if !millis.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "millis" });
        }
        let whole = millis.trunc() as i128;

        let out_of_range = || ValidationError::TimestampOutOfRange { millis: whole };
        let nanos = whole.checked_mul(NANOS_PER_MILLI).ok_or_else(out_of_range)?;

        OffsetDateTime::from_unix_timestamp_nanos(nanos)
            .map(Self)
            .map_err(|_| out_of_range())
    }

    pub fn unix_millis(self) -> f64 {
        (self.0.unix_timestamp_nanos() / NANOS_PER_MILLI) as f64
    }

    pub fn format_rfc3339(self) -> String {
        self.0
            .format(&Rfc3339)
            .unwrap_or_else(|_| String::from("<unformattable>"))
    }

    /// Render back to the `"Mon YYYY"` input form.
    pub fn format_month_year(self) -> String {
        self.0
            .format(MONTH_YEAR_DISPLAY)
            .unwrap_or_else(|_| self.format_rfc3339())
    }
}

impl Display for UtcDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_rfc3339())
    }
}

impl Serialize for UtcDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_month_year_to_first_of_month() {
        let parsed = UtcDateTime::parse_month_year("Feb 2013").expect("must parse");
        assert_eq!(parsed.format_rfc3339(), "2013-02-01T00:00:00Z");
        assert_eq!(parsed.format_month_year(), "Feb 2013");
    }

    #[test]
    fn month_abbreviation_is_case_insensitive() {
        let lower = UtcDateTime::parse_month_year("mar 2013").expect("must parse");
        let upper = UtcDateTime::parse_month_year("MAR 2013").expect("must parse");
        assert_eq!(lower, upper);
    }

    #[test]
    fn rejects_malformed_month_year() {
        for input in [
            "13/2013",
            "January 2013",
            "Jan 13",
            "Jan 2013x",
            "",
            "2013 Jan",
            "Jan -2013",
            "Jan +2013",
            "Jan 02013",
        ] {
            let err = UtcDateTime::parse_month_year(input).expect_err("must fail");
            assert!(
                matches!(err, ValidationError::InvalidMonthYear { .. }),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn unix_millis_round_trip_whole_months() {
        let jan = UtcDateTime::parse_month_year("Jan 2013").expect("must parse");
        assert_eq!(jan.unix_millis(), 1_356_998_400_000.0);
        let back = UtcDateTime::from_unix_millis(jan.unix_millis()).expect("in range");
        assert_eq!(back, jan);
    }

    #[test]
    fn rejects_non_finite_millis() {
        let err = UtcDateTime::from_unix_millis(f64::NAN).expect_err("must fail");
        assert!(matches!(err, ValidationError::NonFiniteValue { .. }));
    }

    #[test]
    fn far_out_millis_are_out_of_range() {
        for millis in [1e35, -1e35, 1e20] {
            let err = UtcDateTime::from_unix_millis(millis).expect_err("must fail");
            assert!(
                matches!(err, ValidationError::TimestampOutOfRange { .. }),
                "{millis} -> {err:?}"
            );
        }
    }
}
