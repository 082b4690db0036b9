/// Maximum valid Gregorian month (December)
pub const MAX_MONTH: u8 = 12;

/// Maximum valid IFC month (December, the thirteenth month)
pub const MAX_IFC_MONTH: u8 = 13;

/// First day of any month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by days_in_month)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in a common year
pub const DAYS_IN_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Length of every regular IFC month
pub const IFC_MONTH_DAYS: u16 = 28;

/// Day number given to the two days outside the 28-day grid
pub const IFC_INTERCALARY_DAY: u8 = 29;

/// Ordinal of the leap day in a leap year (IFC June 29)
pub const LEAP_DAY_ORDINAL: u16 = 169;

/// IFC month holding the leap day
pub const LEAP_DAY_MONTH: u8 = 6;

/// IFC month holding the year day
pub const YEAR_DAY_MONTH: u8 = 13;

/// Esperanto names of the IFC months (index 0 is January)
pub const IFC_MONTH_NAMES: [&str; 13] = [
    "januaro",
    "februaro",
    "marto",
    "aprilo",
    "majo",
    "junio",
    "sunio",
    "julio",
    "aŭgusto",
    "septembro",
    "oktobro",
    "novembro",
    "decembro",
];

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Seconds per minute, for turning a timezone shift into an offset
pub(crate) const SECONDS_PER_MINUTE: i32 = 60;
