//! Time windows used to filter ledger records before aggregation.

use chrono::{Days, Months, NaiveDate};

/// A record carrying a calendar date.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl<T: Dated> Dated for &T {
    fn date(&self) -> NaiveDate {
        (*self).date()
    }
}

/// Quick-select periods, each anchored at `today`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    PastWeek,
    PastMonth,
    PastThreeMonths,
    PastYear,
}

/// A time range used to filter records, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Window {
    /// A preset period ending at `today`.
    Preset(Preset),
    /// One whole calendar month.
    Month { year: i32, month: u32 },
    /// An explicit date range. A range with either bound unset admits
    /// nothing.
    Range {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl Window {
    /// Inclusive `[start, end]` bounds of the window relative to `today`.
    ///
    /// Returns `None` for windows that admit nothing: a custom range with
    /// a missing bound, or an out-of-range month selection.
    pub fn bounds(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match *self {
            Window::Preset(preset) => {
                let start = match preset {
                    Preset::PastWeek => today.checked_sub_days(Days::new(7))?,
                    Preset::PastMonth => today.checked_sub_months(Months::new(1))?,
                    Preset::PastThreeMonths => today.checked_sub_months(Months::new(3))?,
                    Preset::PastYear => today.checked_sub_months(Months::new(12))?,
                };
                Some((start, today))
            }
            Window::Month { year, month } => {
                let start = NaiveDate::from_ymd_opt(year, month, 1)?;
                let end = start
                    .checked_add_months(Months::new(1))?
                    .checked_sub_days(Days::new(1))?;
                Some((start, end))
            }
            Window::Range {
                start: Some(start),
                end: Some(end),
            } => Some((start, end)),
            Window::Range { .. } => None,
        }
    }

    /// Whether `date` falls inside the window, inclusive on both ends.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        self.bounds(today)
            .is_some_and(|(start, end)| date >= start && date <= end)
    }
}

/// Keeps the records whose date falls inside `window`.
pub fn filter_by_window<'a, R: Dated>(
    records: &'a [R],
    window: &Window,
    today: NaiveDate,
) -> Vec<&'a R> {
    records
        .iter()
        .filter(|record| window.contains(record.date(), today))
        .collect()
}
