use crate::{CoreError, CoreResult};
use chrono::{Datelike, Days, Months, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Column headers for a Sunday-first calendar grid.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// A month being displayed in a calendar grid. Always a valid year/month
/// pair; navigation saturates at the calendar bounds instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthCursor(NaiveDate);

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(|| CoreError::ValidationError(format!("invalid month {year}-{month}")))
    }

    /// Cursor for the month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    /// Last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.next()
            .first_day()
            .pred_opt()
            .unwrap_or(self.0)
    }

    pub fn next(&self) -> Self {
        Self(self.0.checked_add_months(Months::new(1)).unwrap_or(self.0))
    }

    pub fn prev(&self) -> Self {
        Self(self.0.checked_sub_months(Months::new(1)).unwrap_or(self.0))
    }

    /// Header title, e.g. "August 2026".
    pub fn title(&self) -> String {
        self.0.format("%B %Y").to_string()
    }

    /// The grid of day cells for this month: whole weeks, Sunday through
    /// Saturday, from the week containing the 1st through the week
    /// containing the last day. Leading and trailing cells belong to the
    /// adjacent months.
    pub fn grid(&self) -> Vec<[NaiveDate; 7]> {
        let start = start_of_week(self.first_day());
        let end = end_of_week(self.last_day());

        let mut weeks = Vec::new();
        let mut day = start;
        while day <= end {
            let mut week = [day; 7];
            for cell in week.iter_mut() {
                *cell = day;
                day = match day.checked_add_days(Days::new(1)) {
                    Some(d) => d,
                    None => return weeks,
                };
            }
            weeks.push(week);
        }
        weeks
    }

    /// Whether `day` falls inside this month (vs a leading/trailing cell).
    pub fn contains(&self, day: NaiveDate) -> bool {
        day.year() == self.year() && day.month() == self.month()
    }
}

/// The Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_sunday() as u64;
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// The Saturday on or after `date`.
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    let forward = 6 - date.weekday().num_days_from_sunday() as u64;
    date.checked_add_days(Days::new(forward)).unwrap_or(date)
}

/// Whether a day cell may be picked, given optional lower/upper bounds
/// (both inclusive). Callers pass today as `min` to disable past dates.
pub fn is_selectable(day: NaiveDate, min: Option<NaiveDate>, max: Option<NaiveDate>) -> bool {
    if let Some(min) = min {
        if day < min {
            return false;
        }
    }
    if let Some(max) = max {
        if day > max {
            return false;
        }
    }
    true
}

/// Short display form, e.g. "Aug 6, 2026".
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Bare day number for a grid cell.
pub fn format_day(date: NaiveDate) -> String {
    date.format("%-d").to_string()
}

/// Clock display form, e.g. "08:15".
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_grid_covers_whole_weeks() {
        let cursor = MonthCursor::new(2026, 8).unwrap();
        let grid = cursor.grid();

        // August 2026 starts on a Saturday and ends on a Monday: six weeks.
        assert_eq!(grid.len(), 6);
        assert_eq!(grid[0][0].weekday(), chrono::Weekday::Sun);
        assert_eq!(grid[0][0], d(2026, 7, 26));
        assert_eq!(grid[5][6], d(2026, 9, 5));

        // Every day of the month is present exactly once.
        let in_month: Vec<_> = grid
            .iter()
            .flatten()
            .filter(|day| cursor.contains(**day))
            .collect();
        assert_eq!(in_month.len(), 31);
    }

    #[test]
    fn test_navigation_wraps_year() {
        let dec = MonthCursor::new(2025, 12).unwrap();
        let jan = dec.next();
        assert_eq!((jan.year(), jan.month()), (2026, 1));
        assert_eq!((jan.prev().year(), jan.prev().month()), (2025, 12));
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(MonthCursor::new(2026, 13).is_err());
        assert!(MonthCursor::new(2026, 0).is_err());
    }

    #[test]
    fn test_month_bounds() {
        let feb = MonthCursor::new(2024, 2).unwrap();
        assert_eq!(feb.first_day(), d(2024, 2, 1));
        assert_eq!(feb.last_day(), d(2024, 2, 29));
        assert_eq!(feb.title(), "February 2024");
    }

    #[test]
    fn test_selectable_window() {
        let min = d(2026, 8, 6);
        let max = d(2026, 8, 20);
        assert!(!is_selectable(d(2026, 8, 5), Some(min), Some(max)));
        assert!(is_selectable(d(2026, 8, 6), Some(min), Some(max)));
        assert!(is_selectable(d(2026, 8, 20), Some(min), Some(max)));
        assert!(!is_selectable(d(2026, 8, 21), Some(min), Some(max)));
        assert!(is_selectable(d(1990, 1, 1), None, None));
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(format_short_date(d(2026, 8, 6)), "Aug 6, 2026");
        assert_eq!(format_day(d(2026, 8, 6)), "6");
        let t = NaiveTime::from_hms_opt(8, 15, 0).unwrap();
        assert_eq!(format_time(t), "08:15");
    }
}
