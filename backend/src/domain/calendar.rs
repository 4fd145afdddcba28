//! Calendar domain logic for the booking dialog.
//!
//! Generates the fixed 6x7 date grid shown on step 1 and decides which dates can be
//! booked. The UI only renders the grid; every date computation lives here.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use shared::{CalendarDay, CalendarGrid};

/// Number of cells in the calendar grid (6 weeks x 7 days)
pub const CALENDAR_GRID_SIZE: usize = 42;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Month shown on the booking calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMonthRef {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl CalendarMonthRef {
    /// Returns `None` for a month outside 1-12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing today's local date
    pub fn current() -> Self {
        Self::containing(today())
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        // month is kept in 1-12 by construction, day 1 always exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Heading label, e.g. "October 2026"
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

/// Today's local date with the time of day dropped
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The 42 dates of the grid for a month, starting from the Sunday on or before the 1st
pub fn generate_calendar_dates(month: CalendarMonthRef) -> Vec<NaiveDate> {
    let first = month.first_day();
    let offset = first.weekday().num_days_from_sunday() as i64;
    let start = first - Duration::days(offset);

    start.iter_days().take(CALENDAR_GRID_SIZE).collect()
}

/// A date is bookable iff it is not before `today` and is not a Sunday
pub fn is_date_available(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today && date.weekday() != Weekday::Sun
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid Month",
    }
}

/// Calendar service that annotates the grid for rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Build the grid for `month`, marking availability relative to `today`
    pub fn month_grid(&self, month: CalendarMonthRef, today: NaiveDate) -> CalendarGrid {
        let days = generate_calendar_dates(month)
            .into_iter()
            .map(|date| CalendarDay {
                date,
                day: date.day(),
                in_current_month: month.contains(date),
                available: is_date_available(date, today),
                is_today: date == today,
            })
            .collect();

        CalendarGrid {
            year: month.year,
            month: month.month,
            days,
        }
    }

    /// Whether a date can be picked while `month` is displayed
    pub fn is_selectable(&self, date: NaiveDate, month: CalendarMonthRef, today: NaiveDate) -> bool {
        month.contains(date) && is_date_available(date, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month(y: i32, m: u32) -> CalendarMonthRef {
        CalendarMonthRef::new(y, m).unwrap()
    }

    #[test]
    fn test_grid_always_has_42_dates_starting_on_sunday() {
        for year in [2024, 2025, 2026] {
            for m in 1..=12 {
                let dates = generate_calendar_dates(month(year, m));
                assert_eq!(dates.len(), CALENDAR_GRID_SIZE);
                assert_eq!(dates[0].weekday(), Weekday::Sun, "{}-{}", year, m);
                assert!(dates[0] <= month(year, m).first_day());
                // consecutive days
                for pair in dates.windows(2) {
                    assert_eq!(pair[1] - pair[0], Duration::days(1));
                }
            }
        }
    }

    #[test]
    fn test_grid_starts_on_first_when_month_begins_on_sunday() {
        // February 2026 starts on a Sunday
        let dates = generate_calendar_dates(month(2026, 2));
        assert_eq!(dates[0], date(2026, 2, 1));
        assert_eq!(dates[41], date(2026, 3, 14));
    }

    #[test]
    fn test_grid_includes_previous_month_padding() {
        // October 2026 starts on a Thursday
        let dates = generate_calendar_dates(month(2026, 10));
        assert_eq!(dates[0], date(2026, 9, 27));
        assert_eq!(dates[4], date(2026, 10, 1));
    }

    #[test]
    fn test_availability_rule() {
        let today = date(2026, 10, 19); // Monday

        assert!(is_date_available(today, today));
        assert!(is_date_available(date(2026, 10, 20), today));
        assert!(!is_date_available(date(2026, 10, 18), today)); // yesterday
        assert!(!is_date_available(date(2026, 10, 25), today)); // Sunday
        assert!(!is_date_available(date(2025, 1, 1), today));
    }

    #[test]
    fn test_no_past_date_is_available_in_grid() {
        let today = date(2026, 10, 19);
        let grid = CalendarService::new().month_grid(month(2026, 10), today);

        assert_eq!(grid.days.len(), CALENDAR_GRID_SIZE);
        for day in &grid.days {
            if day.date < today {
                assert!(!day.available, "{} should not be bookable", day.date);
            }
            if day.date.weekday() == Weekday::Sun {
                assert!(!day.available);
            }
        }
        assert_eq!(grid.days.iter().filter(|d| d.is_today).count(), 1);
        assert_eq!(grid.days.iter().filter(|d| d.in_current_month).count(), 31);
    }

    #[test]
    fn test_padding_days_are_not_selectable() {
        let service = CalendarService::new();
        let today = date(2026, 10, 1);
        let shown = month(2026, 10);

        // November 2 is available but belongs to the next month's page
        assert!(is_date_available(date(2026, 11, 2), today));
        assert!(!service.is_selectable(date(2026, 11, 2), shown, today));
        assert!(service.is_selectable(date(2026, 10, 2), shown, today));
    }

    #[test]
    fn test_month_navigation_wraps_years() {
        assert_eq!(month(2026, 1).previous(), month(2025, 12));
        assert_eq!(month(2026, 12).next(), month(2027, 1));
        assert_eq!(month(2026, 6).next(), month(2026, 7));
        assert!(CalendarMonthRef::new(2026, 13).is_none());
        assert_eq!(month(2026, 10).label(), "October 2026");
    }
}
