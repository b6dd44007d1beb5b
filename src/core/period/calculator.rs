//! Period calculator
//!
//! Computes aligned period starts for a [`Granularity`]:
//!
//! - **Daily**: midnight of the day
//! - **Weekly**: midnight of the configured first day of the week
//! - **Monthly**: the 1st of the month
//! - **Yearly**: January 1st

use crate::domain::period::{Granularity, Period, WeekStart};
use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};

/// Pure period boundary calculator
///
/// # Examples
///
/// ```
/// use entity_backup::core::period::{Granularity, PeriodCalculator, WeekStart};
/// use chrono::NaiveDate;
///
/// let calculator = PeriodCalculator::new(Granularity::Weekly, WeekStart::Sunday);
/// let instant = NaiveDate::from_ymd_opt(2023, 7, 19)
///     .unwrap()
///     .and_hms_opt(19, 0, 0)
///     .unwrap();
///
/// let start = calculator.first_period_start(instant);
/// assert_eq!(start, NaiveDate::from_ymd_opt(2023, 7, 16).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodCalculator {
    granularity: Granularity,
    week_start: WeekStart,
}

impl PeriodCalculator {
    /// Create a new calculator
    pub fn new(granularity: Granularity, week_start: WeekStart) -> Self {
        Self {
            granularity,
            week_start,
        }
    }

    /// Configured granularity
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Configured first day of the week
    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Start of the period containing `instant`
    ///
    /// The instant is truncated to midnight and then aligned backward to the
    /// granularity boundary.
    pub fn first_period_start(&self, instant: NaiveDateTime) -> NaiveDate {
        let day = instant.date();

        match self.granularity {
            Granularity::Daily => day,
            Granularity::Weekly => day - Days::new(u64::from(self.week_start.days_into_week(day))),
            Granularity::Monthly => day - Days::new(u64::from(day.day0())),
            Granularity::Yearly => day - Days::new(u64::from(day.ordinal0())),
        }
    }

    /// Start of the period following `current`
    ///
    /// Returns `None` when `current` is `None`, or when the advanced boundary
    /// lies strictly after `upper`. A `None` result ends period iteration.
    pub fn next_period_start(
        &self,
        current: Option<NaiveDate>,
        upper: NaiveDateTime,
    ) -> Option<NaiveDate> {
        let next = self.advance(current?)?;

        if midnight(next) > upper {
            None
        } else {
            Some(next)
        }
    }

    /// Every period between `from` and `to`, in order
    ///
    /// The first period starts at `first_period_start(from)`. Iteration stops
    /// as soon as the next boundary would pass `to`, so a trailing period that
    /// is not yet complete is never yielded.
    pub fn periods(&self, from: NaiveDateTime, to: NaiveDateTime) -> Periods {
        let start = self.first_period_start(from);
        let end = self.next_period_start(Some(start), to);

        Periods {
            calculator: *self,
            start: Some(start),
            end,
            upper: to,
        }
    }

    // Month and year steps are taken from the aligned start so that the
    // result is always the 1st, whatever day `current` falls on.
    fn advance(&self, current: NaiveDate) -> Option<NaiveDate> {
        match self.granularity {
            Granularity::Daily => current.succ_opt(),
            Granularity::Weekly => {
                let step = 7 - self.week_start.days_into_week(current);
                current.checked_add_days(Days::new(u64::from(step)))
            }
            Granularity::Monthly => {
                let first = current - Days::new(u64::from(current.day0()));
                first.checked_add_months(Months::new(1))
            }
            Granularity::Yearly => NaiveDate::from_ymd_opt(current.year() + 1, 1, 1),
        }
    }
}

/// Iterator over the periods of one backup run
///
/// Created by [`PeriodCalculator::periods`].
#[derive(Debug, Clone)]
pub struct Periods {
    calculator: PeriodCalculator,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    upper: NaiveDateTime,
}

impl Iterator for Periods {
    type Item = Period;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.start?;
        let end = self.end?;

        self.start = Some(end);
        self.end = self.calculator.next_period_start(Some(end), self.upper);

        Some(Period::new(start, end))
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, 0, 0).unwrap()
    }

    fn calculator(granularity: Granularity) -> PeriodCalculator {
        PeriodCalculator::new(granularity, WeekStart::Sunday)
    }

    // Wednesday 2023-07-19 19:00
    #[test_case(Granularity::Daily, date(2023, 7, 19) ; "daily")]
    #[test_case(Granularity::Weekly, date(2023, 7, 16) ; "weekly")]
    #[test_case(Granularity::Monthly, date(2023, 7, 1) ; "monthly")]
    #[test_case(Granularity::Yearly, date(2023, 1, 1) ; "yearly")]
    fn test_first_period_start_wednesday(granularity: Granularity, expected: NaiveDate) {
        let start = calculator(granularity).first_period_start(at(2023, 7, 19, 19));
        assert_eq!(start, expected);
    }

    #[test_case(Granularity::Daily, date(2023, 7, 20) ; "daily")]
    #[test_case(Granularity::Weekly, date(2023, 7, 23) ; "weekly")]
    #[test_case(Granularity::Monthly, date(2023, 8, 1) ; "monthly")]
    #[test_case(Granularity::Yearly, date(2024, 1, 1) ; "yearly")]
    fn test_next_period_start_wednesday(granularity: Granularity, expected: NaiveDate) {
        let upper = at(2025, 12, 31, 0);
        let next = calculator(granularity).next_period_start(Some(date(2023, 7, 19)), upper);
        assert_eq!(next, Some(expected));
    }

    #[test]
    fn test_weekly_monday_start() {
        let calc = PeriodCalculator::new(Granularity::Weekly, WeekStart::Monday);
        let start = calc.first_period_start(at(2023, 7, 19, 19));
        assert_eq!(start, date(2023, 7, 17));

        let next = calc.next_period_start(Some(start), at(2023, 12, 31, 0));
        assert_eq!(next, Some(date(2023, 7, 24)));
    }

    #[test]
    fn test_weekly_start_on_sunday_is_already_aligned() {
        let calc = calculator(Granularity::Weekly);
        assert_eq!(calc.first_period_start(at(2023, 7, 16, 0)), date(2023, 7, 16));
    }

    #[test]
    fn test_monthly_lands_on_first_of_month() {
        let calc = calculator(Granularity::Monthly);
        let upper = at(2024, 12, 31, 0);
        assert_eq!(
            calc.next_period_start(Some(date(2023, 1, 31)), upper),
            Some(date(2023, 2, 1))
        );
    }

    #[test]
    fn test_monthly_december_rolls_over_year() {
        let calc = calculator(Granularity::Monthly);
        let upper = at(2024, 12, 31, 0);
        assert_eq!(
            calc.next_period_start(Some(date(2023, 12, 1)), upper),
            Some(date(2024, 1, 1))
        );
    }

    #[test]
    fn test_yearly_from_leap_day() {
        let calc = calculator(Granularity::Yearly);
        assert_eq!(calc.first_period_start(at(2024, 2, 29, 12)), date(2024, 1, 1));
    }

    #[test]
    fn test_next_period_start_none_propagates() {
        let calc = calculator(Granularity::Daily);
        assert_eq!(calc.next_period_start(None, at(2023, 7, 22, 0)), None);
    }

    #[test]
    fn test_next_period_start_upper_bound_is_inclusive_at_midnight() {
        let calc = calculator(Granularity::Daily);
        let upper = at(2023, 7, 22, 0);

        assert_eq!(
            calc.next_period_start(Some(date(2023, 7, 21)), upper),
            Some(date(2023, 7, 22))
        );
        assert_eq!(calc.next_period_start(Some(date(2023, 7, 22)), upper), None);
    }

    #[test_case(Granularity::Daily ; "daily")]
    #[test_case(Granularity::Weekly ; "weekly")]
    #[test_case(Granularity::Monthly ; "monthly")]
    #[test_case(Granularity::Yearly ; "yearly")]
    fn test_first_period_start_is_idempotent(granularity: Granularity) {
        let calc = calculator(granularity);
        let mut day = date(2023, 1, 1);
        while day < date(2025, 3, 1) {
            let start = calc.first_period_start(day.and_hms_opt(13, 30, 0).unwrap());
            assert_eq!(calc.first_period_start(midnight(start)), start);
            day = day.succ_opt().unwrap();
        }
    }

    #[test_case(Granularity::Daily ; "daily")]
    #[test_case(Granularity::Weekly ; "weekly")]
    #[test_case(Granularity::Monthly ; "monthly")]
    #[test_case(Granularity::Yearly ; "yearly")]
    fn test_first_period_start_within_one_unit(granularity: Granularity) {
        let calc = calculator(granularity);
        let far = at(2100, 1, 1, 0);
        let mut day = date(2023, 1, 1);
        while day < date(2025, 3, 1) {
            let instant = day.and_hms_opt(23, 59, 59).unwrap();
            let start = calc.first_period_start(instant);
            let next = calc.next_period_start(Some(start), far).unwrap();

            assert!(midnight(start) <= instant);
            assert!(instant < midnight(next), "{instant} not before {next}");
            day = day.succ_opt().unwrap();
        }
    }

    #[test_case(Granularity::Daily ; "daily")]
    #[test_case(Granularity::Weekly ; "weekly")]
    #[test_case(Granularity::Monthly ; "monthly")]
    #[test_case(Granularity::Yearly ; "yearly")]
    fn test_next_period_start_none_iff_past_upper(granularity: Granularity) {
        let calc = calculator(granularity);
        let far = at(2100, 1, 1, 0);
        let upper = at(2024, 6, 15, 8);
        let mut current = calc.first_period_start(at(2023, 1, 1, 0));

        loop {
            let advanced = calc.next_period_start(Some(current), far).unwrap();
            match calc.next_period_start(Some(current), upper) {
                Some(next) => {
                    assert_eq!(next, advanced);
                    assert!(next > current);
                    current = next;
                }
                None => {
                    assert!(midnight(advanced) > upper);
                    break;
                }
            }
        }
    }

    #[test]
    fn test_periods_daily_range() {
        let calc = calculator(Granularity::Daily);
        let periods: Vec<Period> = calc.periods(at(2023, 7, 19, 0), at(2023, 7, 22, 0)).collect();

        assert_eq!(
            periods,
            vec![
                Period::new(date(2023, 7, 19), date(2023, 7, 20)),
                Period::new(date(2023, 7, 20), date(2023, 7, 21)),
                Period::new(date(2023, 7, 21), date(2023, 7, 22)),
            ]
        );
    }

    #[test]
    fn test_periods_skip_incomplete_trailing_period() {
        let calc = calculator(Granularity::Monthly);
        let periods: Vec<Period> = calc.periods(at(2023, 7, 19, 0), at(2023, 8, 15, 0)).collect();

        assert_eq!(periods, vec![Period::new(date(2023, 7, 1), date(2023, 8, 1))]);
    }

    #[test]
    fn test_periods_empty_when_range_shorter_than_one_unit() {
        let calc = calculator(Granularity::Yearly);
        assert_eq!(calc.periods(at(2023, 3, 1, 0), at(2023, 9, 1, 0)).count(), 0);
    }

    #[test]
    fn test_periods_are_contiguous() {
        let calc = calculator(Granularity::Weekly);
        let periods: Vec<Period> = calc.periods(at(2023, 1, 4, 9), at(2023, 6, 1, 0)).collect();

        assert!(!periods.is_empty());
        for pair in periods.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert_eq!(pair[0].days(), 7);
        }
    }
}
