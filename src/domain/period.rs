//! Period and granularity types
//!
//! A [`Period`] is the half-open date interval `[start, end)` that one output
//! file covers. Its length is set by the configured [`Granularity`].

use super::errors::BackupError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bucketing unit for output files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One file per day
    #[default]
    Daily,
    /// One file per week
    Weekly,
    /// One file per calendar month
    Monthly,
    /// One file per calendar year
    Yearly,
}

impl Granularity {
    /// All granularities, in increasing length
    pub const ALL: [Granularity; 4] = [
        Granularity::Daily,
        Granularity::Weekly,
        Granularity::Monthly,
        Granularity::Yearly,
    ];

    /// Lowercase name as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
            Granularity::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = BackupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            "yearly" | "year" => Ok(Self::Yearly),
            _ => Err(BackupError::Configuration(format!(
                "Invalid granularity: {s}. Expected 'daily', 'weekly', 'monthly' or 'yearly'"
            ))),
        }
    }
}

/// First day of a week for weekly periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Weeks run Sunday to Saturday
    #[default]
    Sunday,
    /// Weeks run Monday to Sunday (ISO 8601)
    Monday,
}

impl WeekStart {
    /// Number of days between the start of the week and `date` (0..=6)
    pub fn days_into_week(&self, date: NaiveDate) -> u32 {
        match self {
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
            WeekStart::Monday => date.weekday().num_days_from_monday(),
        }
    }

    /// Lowercase name as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekStart::Sunday => "sunday",
            WeekStart::Monday => "monday",
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekStart {
    type Err = BackupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sunday" | "sun" => Ok(Self::Sunday),
            "monday" | "mon" => Ok(Self::Monday),
            _ => Err(BackupError::Configuration(format!(
                "Invalid week_start: {s}. Expected 'sunday' or 'monday'"
            ))),
        }
    }
}

/// Half-open date interval `[start, end)` covered by one output file
///
/// Both bounds mean midnight of the given day.
///
/// # Examples
///
/// ```
/// use entity_backup::domain::period::Period;
/// use chrono::NaiveDate;
///
/// let period = Period::new(
///     NaiveDate::from_ymd_opt(2023, 7, 16).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 7, 23).unwrap(),
/// );
/// assert_eq!(period.days(), 7);
/// assert_eq!(period.to_string(), "2023-07-16..2023-07-23");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// Inclusive start
    pub start: NaiveDate,
    /// Exclusive end
    pub end: NaiveDate,
}

impl Period {
    /// Creates a new period
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Length of the period in days
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whether `date` falls inside `[start, end)`
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
