//! Month grid model for the maintenance calendar.
//!
//! DESIGN
//! ======
//! The grid is always 7 header cells plus 42 day cells (six full weeks)
//! starting at the Sunday on or before the 1st, so the layout never jumps
//! between months. Only pending tasks that fall inside the displayed month
//! are highlighted; spill-over days from neighbouring months never are.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use time::{Date, Duration, Month};

use crate::net::types::{MaintenanceStatus, MaintenanceTask};
use crate::util::clock;

/// Weekday headers, Sunday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Number of day cells in every grid.
pub const GRID_CELLS: usize = 42;

/// Years beyond this are clamped so the six-week grid stays representable.
const MAX_YEAR: i32 = 9998;

/// The month being displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: Month,
}

impl CalendarMonth {
    #[must_use]
    pub fn containing(date: Date) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    /// The 1st of the month.
    #[must_use]
    pub fn first_day(self) -> Date {
        Date::from_calendar_date(self.year, self.month, 1).unwrap_or(Date::MIN)
    }

    /// Move by whole months; the day is implicitly 1 so short months never overflow.
    #[must_use]
    pub fn shift(self, delta: i32) -> Self {
        let index = i64::from(self.year) * 12 + i64::from(u8::from(self.month) - 1) + i64::from(delta);
        let year = index.div_euclid(12).clamp(i64::from(-MAX_YEAR), i64::from(MAX_YEAR));
        let month = u8::try_from(index.rem_euclid(12) + 1).unwrap_or(1);
        Self {
            year: i32::try_from(year).unwrap_or_default(),
            month: Month::try_from(month).unwrap_or(Month::January),
        }
    }

    /// `"March 2024"`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{} {}", self.month, self.year)
    }

    #[must_use]
    pub fn contains(self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// One day cell in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayCell {
    pub date: Date,
    pub in_month: bool,
    pub today: bool,
    pub has_maintenance: bool,
}

impl DayCell {
    #[must_use]
    pub fn class(&self) -> String {
        let mut class = String::from("calendar-day");
        if !self.in_month {
            class.push_str(" other-month");
        }
        if self.today {
            class.push_str(" today");
        }
        if self.has_maintenance {
            class.push_str(" has-maintenance");
        }
        class
    }
}

/// Rendered calendar: label, headers and exactly [`GRID_CELLS`] days.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarGrid {
    pub label: String,
    pub headers: [&'static str; 7],
    pub cells: Vec<DayCell>,
}

/// Build the grid for `month`, flagging `today` and pending maintenance days.
#[must_use]
pub fn build_grid(month: CalendarMonth, today: Date, pending: &[Date]) -> CalendarGrid {
    let first = month.first_day();
    let lead = i64::from(first.weekday().number_days_from_sunday());
    let start = first.checked_sub(Duration::days(lead)).unwrap_or(first);

    let mut cells = Vec::with_capacity(GRID_CELLS);
    let mut cursor = Some(start);
    while cells.len() < GRID_CELLS {
        let Some(date) = cursor else { break };
        let in_month = month.contains(date);
        cells.push(DayCell {
            date,
            in_month,
            today: date == today,
            has_maintenance: in_month && pending.contains(&date),
        });
        cursor = date.next_day();
    }

    CalendarGrid { label: month.label(), headers: WEEKDAY_HEADERS, cells }
}

/// Scheduled dates of tasks still pending.
#[must_use]
pub fn pending_maintenance_dates(tasks: &[MaintenanceTask]) -> Vec<Date> {
    tasks
        .iter()
        .filter(|t| t.completion_status == MaintenanceStatus::Pending)
        .filter_map(|t| t.scheduled_date.as_deref().and_then(clock::parse_date))
        .collect()
}
