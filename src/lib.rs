mod clock;
mod consts;
mod convert;
mod prelude;
mod types;

pub use clock::{
    ClockError, MAX_OFFSET_MINUTES, gregorian_at, offset_from_minutes, today_gregorian, today_ifc,
};
pub use consts::*;
pub use convert::{ConversionError, DayOfYear, day_of_year, ifc_date, is_leap};
pub use types::{Day, IfcMonth, Month, Year, days_in_month, days_in_year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Invalid IFC month: {} (must be 1-{})", "_0", MAX_IFC_MONTH)]
    InvalidIfcMonth(u8),
    #[display(fmt = "Invalid IFC day {day} for month {year}-{month:02}")]
    InvalidIfcDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// A validated date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: Year,
    month: Month,
    day: Day,
}

impl GregorianDate {
    /// Creates a Gregorian date, checking the day against the month length.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` or `ParseError::InvalidDay`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year);
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    pub const fn is_leap(&self) -> bool {
        self.year.is_leap()
    }

    /// Ordinal of this date within its year.
    pub fn day_of_year(&self) -> DayOfYear {
        DayOfYear::from_gregorian(self)
    }

    pub fn to_ifc(&self) -> IfcDate {
        IfcDate::from_gregorian(*self)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_iso(f, self.year(), self.month(), self.day())
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = split_iso(s)?;
        Self::new(year, month, day)
    }
}

impl TryFrom<time::Date> for GregorianDate {
    type Error = ParseError;

    fn try_from(date: time::Date) -> Result<Self, Self::Error> {
        Self::new(date.year(), u8::from(date.month()), date.day())
    }
}

/// A date in the International Fixed Calendar.
///
/// Months 1-13 have 28 days. Day 29 exists only in month 6 of a leap year
/// (the leap day) and in month 13 (the year day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IfcDate {
    year: Year,
    month: IfcMonth,
    day: u8,
}

impl IfcDate {
    /// Creates an IFC date from its components.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidIfcMonth` for a month outside 1-13, and
    /// `ParseError::InvalidIfcDay` for a day the month does not have.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year);
        let month = IfcMonth::new(month)?;
        let max_day = match month.get() {
            LEAP_DAY_MONTH if year.is_leap() => IFC_INTERCALARY_DAY,
            YEAR_DAY_MONTH => IFC_INTERCALARY_DAY,
            _ => IFC_INTERCALARY_DAY - 1,
        };
        if day < MIN_DAY || day > max_day {
            return Err(ParseError::InvalidIfcDay {
                year: year.get(),
                month: month.get(),
                day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Converts a Gregorian date: leap check, then ordinal, then IFC month/day.
    pub fn from_gregorian(date: GregorianDate) -> Self {
        let ordinal = date.day_of_year();
        let (month, day) = ordinal.to_ifc();
        let ifc = Self {
            year: date.year_typed(),
            month,
            day,
        };
        tracing::trace!(%date, ordinal = ordinal.get(), %ifc, "converted to IFC");
        ifc
    }

    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn month_typed(&self) -> IfcMonth {
        self.month
    }

    pub const fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// IFC June 29, present only in leap years
    pub const fn is_leap_day(&self) -> bool {
        self.month.get() == LEAP_DAY_MONTH && self.day == IFC_INTERCALARY_DAY
    }

    /// IFC December 29, the last day of every year
    pub const fn is_year_day(&self) -> bool {
        self.month.get() == YEAR_DAY_MONTH && self.day == IFC_INTERCALARY_DAY
    }

    /// Esperanto sentence, e.g. `Jaro 2024: la 13 de sunio`.
    pub fn describe(&self) -> String {
        format!(
            "Jaro {}: la {} de {}",
            self.year,
            self.day,
            self.month.name()
        )
    }

    /// (year, month, day)
    pub const fn to_numeric(&self) -> (i32, u8, u8) {
        (self.year.get(), self.month.get(), self.day)
    }

    /// (year, month name, day)
    pub fn to_strings(&self) -> (String, String, String) {
        (
            self.year.to_string(),
            self.month.name().to_owned(),
            self.day.to_string(),
        )
    }

    pub fn to_record(&self) -> IfcRecord {
        IfcRecord {
            year: self.year.get(),
            month: self.month.get(),
            month_name: self.month.name().to_owned(),
            day: self.day,
        }
    }
}

impl From<GregorianDate> for IfcDate {
    fn from(date: GregorianDate) -> Self {
        Self::from_gregorian(date)
    }
}

impl fmt::Display for IfcDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_iso(f, self.year(), self.month(), self.day)
    }
}

impl FromStr for IfcDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = split_iso(s)?;
        Self::new(year, month, day)
    }
}

/// Structured view of an [`IfcDate`], suitable for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfcRecord {
    pub year: i32,
    pub month: u8,
    pub month_name: String,
    pub day: u8,
}

// --- ISO helpers shared by both calendars ---

fn write_iso(f: &mut fmt::Formatter<'_>, year: i32, month: u8, day: u8) -> fmt::Result {
    if year < 0 {
        write!(f, "-{:04}", year.unsigned_abs())?;
    } else {
        write!(f, "{year:04}")?;
    }
    write!(f, "{DATE_SEPARATOR}{month:02}{DATE_SEPARATOR}{day:02}")
}

/// Splits `[-]YYYY-MM-DD` into its numeric parts without validating ranges.
fn split_iso(s: &str) -> Result<(i32, u8, u8), ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    // A leading separator is the sign of a negative (astronomical) year
    let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let parts: Vec<&str> = body.split(DATE_SEPARATOR).map(str::trim).collect();
    match parts.len() {
        3 => {}
        n if n > 3 => {
            return Err(ParseError::InvalidFormat(format!(
                "Too many {} separators: expected 2, found {}",
                DATE_SEPARATOR,
                n - 1
            )));
        }
        _ => return Err(ParseError::InvalidFormat(s.to_owned())),
    }

    let year = parse_year(parts[0])?;
    let month = parse_u8(parts[1])?;
    let day = parse_u8(parts[2])?;

    Ok((if negative { -year } else { year }, month, day))
}

/// Helper to parse an unsigned year with better error messages
fn parse_year(s: &str) -> Result<i32, ParseError> {
    if !s.bytes().all(|b| b.is_ascii_digit()) || s.is_empty() {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    s.parse::<i32>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for IfcDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for IfcDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
