//! Day count conventions and time-to-maturity helpers.
//!
//! Option expiries usually arrive as calendar dates while the pricing
//! formula consumes a maturity in years. This module bridges the two.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use super::error::DateError;

/// Date format accepted by [`parse_date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Day Count Convention (year fraction convention).
///
/// # Variants
/// - `Act365Fixed`: Actual days / 365 (standard for equity options)
/// - `Act360`: Actual days / 360 (money market instruments)
///
/// # Usage
///
/// ```
/// use pricer_core::types::time::DayCountConvention;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
///
/// // 182 days / 365.0 ≈ 0.4986
/// let yf = DayCountConvention::Act365Fixed.year_fraction(start, end).unwrap();
/// assert!((yf - 0.4986).abs() < 0.001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayCountConvention {
    /// Actual/365 Fixed: actual_days / 365.0
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "ACT/365F", alias = "act365f"))]
    Act365Fixed,

    /// Actual/360: actual_days / 360.0
    #[cfg_attr(feature = "serde", serde(rename = "ACT/360", alias = "act360"))]
    Act360,
}

impl DayCountConvention {
    /// Returns the standard convention name.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::DayCountConvention;
    ///
    /// assert_eq!(DayCountConvention::Act365Fixed.name(), "ACT/365F");
    /// assert_eq!(DayCountConvention::Act360.name(), "ACT/360");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act365Fixed => "ACT/365F",
            DayCountConvention::Act360 => "ACT/360",
        }
    }

    /// Days in the conventional year.
    #[inline]
    fn denominator(&self) -> f64 {
        match self {
            DayCountConvention::Act365Fixed => 365.0,
            DayCountConvention::Act360 => 360.0,
        }
    }

    /// Calculate year fraction between two dates.
    ///
    /// # Arguments
    /// * `start` - Start date (valuation date)
    /// * `end` - End date (expiry date)
    ///
    /// # Errors
    /// Returns `DateError::ReversedRange` if `end < start`. Equal dates
    /// give `0.0`, which the pricing formula reports as a domain error.
    pub fn year_fraction(&self, start: NaiveDate, end: NaiveDate) -> Result<f64, DateError> {
        if end < start {
            return Err(DateError::ReversedRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        let days = (end - start).num_days();
        Ok(days as f64 / self.denominator())
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DayCountConvention {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ACT/365F" | "ACT/365" | "ACT365F" => Ok(DayCountConvention::Act365Fixed),
            "ACT/360" | "ACT360" => Ok(DayCountConvention::Act360),
            other => Err(DateError::ParseError(format!(
                "unknown day count convention '{}'",
                other
            ))),
        }
    }
}

/// Calculate time to maturity in years using Act/365 Fixed.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use pricer_core::types::time_to_maturity;
///
/// let valuation = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let expiry = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
/// let t = time_to_maturity(valuation, expiry).unwrap();
/// assert!((t - 365.0 / 365.0).abs() < 1e-12);
///
/// assert!(time_to_maturity(expiry, valuation).is_err());
/// ```
pub fn time_to_maturity(valuation: NaiveDate, expiry: NaiveDate) -> Result<f64, DateError> {
    DayCountConvention::Act365Fixed.year_fraction(valuation, expiry)
}

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// # Examples
/// ```
/// use pricer_core::types::parse_date;
///
/// let date = parse_date("2024-03-15").unwrap();
/// assert_eq!(date.to_string(), "2024-03-15");
/// assert!(parse_date("15/03/2024").is_err());
/// ```
pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_act_365_known_dates() {
        let yf = DayCountConvention::Act365Fixed
            .year_fraction(ymd(2024, 1, 1), ymd(2024, 7, 1))
            .unwrap();
        assert_relative_eq!(yf, 182.0 / 365.0, epsilon = 1e-12);
    }

    #[test]
    fn test_act_360_known_dates() {
        let yf = DayCountConvention::Act360
            .year_fraction(ymd(2024, 1, 1), ymd(2024, 7, 1))
            .unwrap();
        assert_relative_eq!(yf, 182.0 / 360.0, epsilon = 1e-12);
    }

    #[test]
    fn test_same_date_is_zero() {
        let d = ymd(2024, 5, 20);
        assert_eq!(time_to_maturity(d, d).unwrap(), 0.0);
    }

    #[test]
    fn test_reversed_range_errors() {
        let result = time_to_maturity(ymd(2024, 6, 1), ymd(2024, 1, 1));
        match result {
            Err(DateError::ReversedRange { start, end }) => {
                assert_eq!(start, "2024-06-01");
                assert_eq!(end, "2024-01-01");
            }
            other => panic!("Expected ReversedRange, got {:?}", other),
        }
    }

    #[test]
    fn test_from_str_round_trips_name() {
        for dcc in [DayCountConvention::Act365Fixed, DayCountConvention::Act360] {
            assert_eq!(dcc.name().parse::<DayCountConvention>().unwrap(), dcc);
        }
        assert_eq!(
            "act/365".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act365Fixed
        );
        assert!("30/360".parse::<DayCountConvention>().is_err());
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("").is_err());
        assert_eq!(parse_date(" 2024-02-29 ").unwrap(), ymd(2024, 2, 29));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = NaiveDate> {
            (2000i32..2100i32, 1u32..13u32, 1u32..29u32)
                .prop_filter_map("valid date", |(year, month, day)| {
                    NaiveDate::from_ymd_opt(year, month, day)
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_year_fraction_non_negative(start in date_strategy(), end in date_strategy()) {
                let (start, end) = if start <= end { (start, end) } else { (end, start) };
                let yf = DayCountConvention::Act365Fixed.year_fraction(start, end).unwrap();
                prop_assert!(yf >= 0.0);
            }

            #[test]
            fn test_act_365_vs_act_360_ratio(start in date_strategy(), end in date_strategy()) {
                prop_assume!(start < end);
                let yf_365 = DayCountConvention::Act365Fixed.year_fraction(start, end).unwrap();
                let yf_360 = DayCountConvention::Act360.year_fraction(start, end).unwrap();
                prop_assert!((yf_360 / yf_365 - 365.0 / 360.0).abs() < 1e-12);
            }
        }
    }
}
