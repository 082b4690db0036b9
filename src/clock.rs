//! Reading "today" from the wall clock, shifted by a timezone offset.

use time::{OffsetDateTime, UtcOffset};
use tracing::debug;

use crate::consts::SECONDS_PER_MINUTE;
use crate::{GregorianDate, IfcDate, ParseError};

/// Largest shift `time::UtcOffset` can represent, in whole minutes (25:59).
pub const MAX_OFFSET_MINUTES: i32 = 25 * 60 + 59;

/// Error type for clock reads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// Shift does not fit in a UTC offset.
    #[error("Timezone offset of {0} minutes is out of range (must be within ±{max})", max = MAX_OFFSET_MINUTES)]
    InvalidOffset(i32),

    #[error(transparent)]
    Range(#[from] time::error::ComponentRange),

    #[error(transparent)]
    Date(#[from] ParseError),
}

/// Turns a timezone shift in minutes east of UTC into an offset.
///
/// # Errors
/// Returns `ClockError::InvalidOffset` if `|minutes| > MAX_OFFSET_MINUTES`.
pub fn offset_from_minutes(minutes: i32) -> Result<UtcOffset, ClockError> {
    if minutes.unsigned_abs() > MAX_OFFSET_MINUTES.unsigned_abs() {
        return Err(ClockError::InvalidOffset(minutes));
    }
    Ok(UtcOffset::from_whole_seconds(minutes * SECONDS_PER_MINUTE)?)
}

/// Gregorian date of `instant` as seen `offset_minutes` east of UTC.
///
/// # Errors
/// Returns `ClockError::InvalidOffset` for an unrepresentable offset.
pub fn gregorian_at(
    instant: OffsetDateTime,
    offset_minutes: i32,
) -> Result<GregorianDate, ClockError> {
    let offset = offset_from_minutes(offset_minutes)?;
    let local = instant.to_offset(offset);
    Ok(GregorianDate::try_from(local.date())?)
}

/// Today's Gregorian date at the given offset.
///
/// # Errors
/// Returns `ClockError::InvalidOffset` for an unrepresentable offset.
pub fn today_gregorian(offset_minutes: i32) -> Result<GregorianDate, ClockError> {
    let now = OffsetDateTime::now_utc();
    let date = gregorian_at(now, offset_minutes)?;
    debug!(%now, offset_minutes, %date, "read wall clock");
    Ok(date)
}

/// Today's IFC date at the given offset.
///
/// # Errors
/// Returns `ClockError::InvalidOffset` for an unrepresentable offset.
pub fn today_ifc(offset_minutes: i32) -> Result<IfcDate, ClockError> {
    today_gregorian(offset_minutes).map(IfcDate::from_gregorian)
}
