//! Period boundary arithmetic
//!
//! The [`PeriodCalculator`] aligns instants to the start of their period and
//! walks forward period by period until an exclusive upper bound is passed.
//! It has no side effects and is shared by the export engine and the `plan`
//! command.

pub mod calculator;

pub use crate::domain::period::{Granularity, Period, WeekStart};
pub use calculator::{PeriodCalculator, Periods};
