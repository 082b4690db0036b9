//! The Gregorian → IFC pipeline: leap-year check, ordinal day, IFC month/day.
//!
//! The three free functions take raw integers and reject anything that is not
//! a real date. [`DayOfYear`] carries an ordinal that has already been checked,
//! so converting it cannot fail.

use std::num::NonZeroU16;

use crate::GregorianDate;
use crate::consts::{
    IFC_INTERCALARY_DAY, IFC_MONTH_DAYS, LEAP_DAY_MONTH, LEAP_DAY_ORDINAL, MAX_MONTH, MIN_DAY,
    YEAR_DAY_MONTH,
};
use crate::types::{IfcMonth, days_in_month, days_in_year, is_leap_year};

/// Error type for the raw conversion functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Gregorian month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Day of month is zero or past the end of the month.
    #[error("Invalid day {day} for month {month} (leap year: {is_leap})")]
    InvalidDay { month: u8, day: u8, is_leap: bool },

    /// Ordinal outside the year it is claimed to belong to.
    #[error("Day of year {day_of_year} out of range (must be 1-{days_in_year})")]
    DayOfYearOutOfRange { day_of_year: u16, days_in_year: u16 },
}

/// Whether `year` is a Gregorian leap year.
///
/// Defined for every year, including zero and negative years (proleptic
/// calendar, astronomical numbering).
#[inline]
pub const fn is_leap(year: i32) -> bool {
    is_leap_year(year)
}

/// 1-based ordinal of a Gregorian month and day within its year.
///
/// # Errors
/// Returns `ConversionError::InvalidMonth` or `ConversionError::InvalidDay` if
/// `month` and `day` do not name a date in a year with the given leap status.
pub fn day_of_year(month: u8, day: u8, is_leap: bool) -> Result<u16, ConversionError> {
    if month == 0 || month > MAX_MONTH {
        return Err(ConversionError::InvalidMonth(month));
    }
    if day < MIN_DAY || day > days_in_month(month, is_leap) {
        return Err(ConversionError::InvalidDay {
            month,
            day,
            is_leap,
        });
    }
    Ok(ordinal(month, day, is_leap))
}

/// IFC `(month, day)` for a 1-based ordinal day.
///
/// # Errors
/// Returns `ConversionError::DayOfYearOutOfRange` if `day_of_year` is zero or
/// past the last day of the year.
pub fn ifc_date(day_of_year: u16, is_leap: bool) -> Result<(u8, u8), ConversionError> {
    let day = DayOfYear::new(day_of_year, is_leap)?;
    let (month, month_day) = day.to_ifc();
    Ok((month.get(), month_day))
}

/// An ordinal day together with the leap status it was validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfYear {
    ordinal: NonZeroU16,
    is_leap: bool,
}

impl DayOfYear {
    /// # Errors
    /// Returns `ConversionError::DayOfYearOutOfRange` if `ordinal` is zero or
    /// greater than the length of the year.
    pub fn new(ordinal: u16, is_leap: bool) -> Result<Self, ConversionError> {
        let total = days_in_year(is_leap);
        let out_of_range = ConversionError::DayOfYearOutOfRange {
            day_of_year: ordinal,
            days_in_year: total,
        };
        let non_zero = NonZeroU16::new(ordinal).ok_or(out_of_range)?;
        if ordinal > total {
            return Err(out_of_range);
        }
        Ok(Self {
            ordinal: non_zero,
            is_leap,
        })
    }

    /// Ordinal of an already-validated Gregorian date.
    pub fn from_gregorian(date: &GregorianDate) -> Self {
        let is_leap = date.year_typed().is_leap();
        let value = ordinal(date.month(), date.day(), is_leap);
        Self {
            ordinal: NonZeroU16::new(value).unwrap_or(NonZeroU16::MIN),
            is_leap,
        }
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.ordinal.get()
    }

    #[inline]
    pub const fn is_leap(self) -> bool {
        self.is_leap
    }

    /// Whether this is the last day of its year.
    pub const fn is_last(self) -> bool {
        self.ordinal.get() == days_in_year(self.is_leap)
    }

    /// IFC month and day-of-month for this ordinal.
    pub fn to_ifc(self) -> (IfcMonth, u8) {
        let position = RULES.iter().fold(Position::default(), |position, rule| {
            rule(self, position)
        });
        // A validated ordinal (<= 366) keeps month <= 13 and day <= 29.
        #[allow(clippy::cast_possible_truncation)]
        let (month, day) = (position.month as u8, position.day as u8);
        (IfcMonth::saturating(month), day)
    }
}

/// Sum of full months before `month`, plus `day`. Inputs are assumed valid.
fn ordinal(month: u8, day: u8, is_leap: bool) -> u16 {
    let before: u16 = (1..month)
        .map(|m| u16::from(days_in_month(m, is_leap)))
        .sum();
    before + u16::from(day)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Position {
    month: u16,
    day: u16,
}

type Rule = fn(DayOfYear, Position) -> Position;

/// Applied in order; each rule sees what the previous ones produced.
const RULES: [Rule; 4] = [
    block_baseline,
    leap_day_override,
    year_day_override,
    boundary_correction,
];

/// Every run of 28 ordinals is one month.
fn block_baseline(day: DayOfYear, _: Position) -> Position {
    let d = day.get();
    Position {
        month: d / IFC_MONTH_DAYS + 1,
        day: d % IFC_MONTH_DAYS,
    }
}

/// The leap day sits after June 28; every later ordinal shifts back by one.
fn leap_day_override(day: DayOfYear, position: Position) -> Position {
    if !day.is_leap() {
        return position;
    }
    let d = day.get();
    if d == LEAP_DAY_ORDINAL {
        Position {
            month: u16::from(LEAP_DAY_MONTH),
            day: u16::from(IFC_INTERCALARY_DAY),
        }
    } else if d > LEAP_DAY_ORDINAL {
        let after = d - LEAP_DAY_ORDINAL;
        Position {
            month: u16::from(LEAP_DAY_MONTH) + 1 + after / IFC_MONTH_DAYS,
            day: after % IFC_MONTH_DAYS,
        }
    } else {
        position
    }
}

/// The last ordinal of the year is December 29.
fn year_day_override(day: DayOfYear, position: Position) -> Position {
    if day.is_last() {
        Position {
            month: u16::from(YEAR_DAY_MONTH),
            day: u16::from(IFC_INTERCALARY_DAY),
        }
    } else {
        position
    }
}

/// Remainder 0 means day 28 of the previous block.
fn boundary_correction(_: DayOfYear, position: Position) -> Position {
    if position.day == 0 {
        Position {
            month: position.month - 1,
            day: IFC_MONTH_DAYS,
        }
    } else {
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DAYS_IN_LEAP_YEAR, DAYS_IN_YEAR};

    #[test]
    fn test_is_leap_known_years() {
        assert!(is_leap(2000));
        assert!(!is_leap(1900));
        assert!(is_leap(2024));
        assert!(!is_leap(2023));
    }

    #[test]
    fn test_is_leap_400_year_period() {
        for year in -800..=2800 {
            assert_eq!(is_leap(year), is_leap(year + 400), "year {year}");
        }
    }

    #[test]
    fn test_day_of_year_known_values() {
        assert_eq!(day_of_year(1, 1, false), Ok(1));
        assert_eq!(day_of_year(12, 31, false), Ok(365));
        assert_eq!(day_of_year(12, 31, true), Ok(366));
        assert_eq!(day_of_year(3, 1, true), Ok(61));
        assert_eq!(day_of_year(3, 1, false), Ok(60));
        assert_eq!(day_of_year(6, 30, true), Ok(182));
    }

    #[test]
    fn test_day_of_year_stays_in_range() {
        for is_leap in [false, true] {
            let total = days_in_year(is_leap);
            let mut previous = 0;
            for month in 1..=12 {
                for day in 1..=days_in_month(month, is_leap) {
                    let ordinal = day_of_year(month, day, is_leap).unwrap();
                    assert!((1..=total).contains(&ordinal));
                    assert_eq!(ordinal, previous + 1, "{month}/{day} leap={is_leap}");
                    previous = ordinal;
                }
            }
            assert_eq!(previous, total);
        }
    }

    #[test]
    fn test_day_of_year_rejects_invalid_month() {
        assert_eq!(
            day_of_year(0, 1, false),
            Err(ConversionError::InvalidMonth(0))
        );
        assert_eq!(
            day_of_year(13, 1, false),
            Err(ConversionError::InvalidMonth(13))
        );
    }

    #[test]
    fn test_day_of_year_rejects_invalid_day() {
        assert!(matches!(
            day_of_year(2, 29, false),
            Err(ConversionError::InvalidDay {
                month: 2,
                day: 29,
                is_leap: false
            })
        ));
        assert!(day_of_year(2, 29, true).is_ok());
        assert!(matches!(
            day_of_year(1, 0, true),
            Err(ConversionError::InvalidDay { day: 0, .. })
        ));
        assert!(matches!(
            day_of_year(4, 45, true),
            Err(ConversionError::InvalidDay { day: 45, .. })
        ));
    }

    #[test]
    fn test_ifc_date_first_day() {
        assert_eq!(ifc_date(1, false), Ok((1, 1)));
        assert_eq!(ifc_date(1, true), Ok((1, 1)));
    }

    #[test]
    fn test_ifc_date_block_boundary() {
        assert_eq!(ifc_date(28, false), Ok((1, 28)));
        assert_eq!(ifc_date(29, false), Ok((2, 1)));
        assert_eq!(ifc_date(56, false), Ok((2, 28)));
        assert_eq!(ifc_date(364, false), Ok((13, 28)));
    }

    #[test]
    fn test_ifc_date_leap_day() {
        assert_eq!(ifc_date(168, true), Ok((6, 28)));
        assert_eq!(ifc_date(169, true), Ok((6, 29)));
        assert_eq!(ifc_date(170, true), Ok((7, 1)));
        // Without a leap day, 169 is just the first of sunio.
        assert_eq!(ifc_date(169, false), Ok((7, 1)));
    }

    #[test]
    fn test_ifc_date_after_leap_day_shifted() {
        assert_eq!(ifc_date(182, true), Ok((7, 13)));
        assert_eq!(ifc_date(197, true), Ok((7, 28)));
        assert_eq!(ifc_date(198, true), Ok((8, 1)));
        assert_eq!(ifc_date(365, true), Ok((13, 28)));
    }

    #[test]
    fn test_ifc_date_year_day() {
        assert_eq!(ifc_date(365, false), Ok((13, 29)));
        assert_eq!(ifc_date(366, true), Ok((13, 29)));
    }

    #[test]
    fn test_ifc_date_common_year_blocks() {
        for d in 1..=364u16 {
            let (month, day) = ifc_date(d, false).unwrap();
            assert_eq!(u16::from(month), (d - 1) / 28 + 1, "ordinal {d}");
            assert_eq!(u16::from(day), (d - 1) % 28 + 1, "ordinal {d}");
        }
    }

    #[test]
    fn test_ifc_date_leap_year_blocks() {
        for d in 1..=365u16 {
            if d == LEAP_DAY_ORDINAL {
                continue;
            }
            let shifted = if d > LEAP_DAY_ORDINAL { d - 1 } else { d };
            let (month, day) = ifc_date(d, true).unwrap();
            assert_eq!(u16::from(month), (shifted - 1) / 28 + 1, "ordinal {d}");
            assert_eq!(u16::from(day), (shifted - 1) % 28 + 1, "ordinal {d}");
        }
    }

    #[test]
    fn test_ifc_date_out_of_range() {
        assert_eq!(
            ifc_date(0, false),
            Err(ConversionError::DayOfYearOutOfRange {
                day_of_year: 0,
                days_in_year: DAYS_IN_YEAR
            })
        );
        assert_eq!(
            ifc_date(366, false),
            Err(ConversionError::DayOfYearOutOfRange {
                day_of_year: 366,
                days_in_year: DAYS_IN_YEAR
            })
        );
        assert_eq!(
            ifc_date(400, true),
            Err(ConversionError::DayOfYearOutOfRange {
                day_of_year: 400,
                days_in_year: DAYS_IN_LEAP_YEAR
            })
        );
    }

    #[test]
    fn test_ifc_day_invariant_holds_everywhere() {
        for is_leap in [false, true] {
            for d in 1..=days_in_year(is_leap) {
                let (month, day) = ifc_date(d, is_leap).unwrap();
                assert!((1..=13).contains(&month));
                match (month, day) {
                    (6, 29) => assert!(is_leap && d == LEAP_DAY_ORDINAL),
                    (13, 29) => assert_eq!(d, days_in_year(is_leap)),
                    (_, day) => assert!((1..=28).contains(&day), "ordinal {d}"),
                }
            }
        }
    }

    #[test]
    fn test_rules_are_order_sensitive() {
        // Year day must win over the leap shift: 366 in a leap year would
        // otherwise land on month 14.
        let last = DayOfYear::new(366, true).unwrap();
        let without_year_day = [block_baseline, leap_day_override, boundary_correction]
            .iter()
            .fold(Position::default(), |p, rule| rule(last, p));
        assert_eq!(without_year_day, Position { month: 14, day: 1 });
        assert_eq!(last.to_ifc().1, 29);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConversionError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            ConversionError::DayOfYearOutOfRange {
                day_of_year: 0,
                days_in_year: 365
            }
            .to_string(),
            "Day of year 0 out of range (must be 1-365)"
        );
    }
}
