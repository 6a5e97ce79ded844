//! Month grid arithmetic for the attendance calendar.
//!
//! Weeks run Sunday through Saturday. Day cells resolve to an attendance
//! record, a holiday, or nothing; a record wins when both exist for a date
//! since it carries the lecture detail.

use chrono::{Datelike, NaiveDate};
use rollcall_types::{AttendanceRecord, DayStatus, Holiday};

/// One displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    first: NaiveDate,
}

impl MonthGrid {
    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Column of day 1, with Sunday as 0.
    pub fn first_weekday(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    pub fn days_in_month(&self) -> u32 {
        let (next_year, next_month) = if self.month() == 12 {
            (self.year() + 1, 1)
        } else {
            (self.year(), self.month() + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .map(|d| d.day())
            .unwrap_or(30)
    }

    /// The date of `day` in this month, when it exists.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year(), self.month(), day)
    }

    /// Previous month. At the calendar's lower bound this is a no-op.
    pub fn prev(&self) -> Self {
        let (year, month) = if self.month() == 1 {
            (self.year() - 1, 12)
        } else {
            (self.year(), self.month() - 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    /// Next month. At the calendar's upper bound this is a no-op.
    pub fn next(&self) -> Self {
        let (year, month) = if self.month() == 12 {
            (self.year() + 1, 1)
        } else {
            (self.year(), self.month() + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    /// Header label, e.g. "August 2026".
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

/// What a single calendar day renders as.
#[derive(Debug, Clone, Copy)]
pub enum DayCell<'a> {
    Record(&'a AttendanceRecord),
    Holiday(&'a Holiday),
    Empty,
}

/// Resolves a date against the month's records and the holiday list.
pub fn day_cell<'a>(
    date: NaiveDate,
    records: &'a [AttendanceRecord],
    holidays: &'a [Holiday],
) -> DayCell<'a> {
    if let Some(record) = records.iter().find(|r| r.date == date) {
        return DayCell::Record(record);
    }
    if let Some(holiday) = holidays.iter().find(|h| h.date == date) {
        return DayCell::Holiday(holiday);
    }
    DayCell::Empty
}

/// Display aggregates for the calendar footer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthStats {
    pub present: u32,
    pub absent: u32,
    pub partial: u32,
    pub holidays: u32,
}

impl MonthStats {
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        let mut stats = Self::default();
        for record in records {
            match record.status {
                DayStatus::Present => stats.present += 1,
                DayStatus::Absent => stats.absent += 1,
                DayStatus::Partial => stats.partial += 1,
                DayStatus::Holiday => stats.holidays += 1,
            }
        }
        stats
    }

    /// Days with any attendance over days with classes. Holidays do not
    /// count either way. 0 for a month with no class days.
    pub fn attendance_percentage(&self) -> f32 {
        let class_days = self.present + self.absent + self.partial;
        if class_days == 0 {
            return 0.0;
        }
        (self.present + self.partial) as f32 * 100.0 / class_days as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_record(d: NaiveDate, status: DayStatus) -> AttendanceRecord {
        AttendanceRecord {
            date: d,
            status,
            lectures: vec![],
            total_minutes: 300,
            attended_minutes: 300,
            percentage: 100.0,
        }
    }

    #[test]
    fn test_first_weekday_sunday_based() {
        // August 2026 starts on a Saturday.
        let grid = MonthGrid::containing(date(2026, 8, 25));
        assert_eq!(grid.first_weekday(), 6);

        // February 2024 starts on a Thursday.
        let grid = MonthGrid::containing(date(2024, 2, 10));
        assert_eq!(grid.first_weekday(), 4);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(MonthGrid::containing(date(2026, 8, 1)).days_in_month(), 31);
        assert_eq!(MonthGrid::containing(date(2026, 2, 1)).days_in_month(), 28);
        assert_eq!(MonthGrid::containing(date(2024, 2, 1)).days_in_month(), 29);
        assert_eq!(MonthGrid::containing(date(2026, 4, 1)).days_in_month(), 30);
    }

    #[test]
    fn test_navigation_wraps_year_boundaries() {
        let jan = MonthGrid::containing(date(2026, 1, 15));
        let dec = jan.prev();
        assert_eq!((dec.year(), dec.month()), (2025, 12));

        let back = dec.next();
        assert_eq!((back.year(), back.month()), (2026, 1));
    }

    #[test]
    fn test_title() {
        let grid = MonthGrid::containing(date(2026, 8, 25));
        assert_eq!(grid.title(), "August 2026");
    }

    #[test]
    fn test_date_rejects_out_of_range_day() {
        let grid = MonthGrid::containing(date(2026, 2, 1));
        assert!(grid.date(28).is_some());
        assert!(grid.date(29).is_none());
    }

    #[test]
    fn test_day_cell_record_wins_over_holiday() {
        let d = date(2026, 8, 14);
        let records = vec![create_record(d, DayStatus::Present)];
        let holidays = vec![Holiday {
            date: d,
            name: "Founders Day".to_string(),
            description: String::new(),
            kind: rollcall_types::HolidayKind::Academic,
        }];

        match day_cell(d, &records, &holidays) {
            DayCell::Record(r) => assert_eq!(r.status, DayStatus::Present),
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[test]
    fn test_day_cell_falls_back_to_holiday_then_empty() {
        let d = date(2026, 8, 15);
        let holidays = vec![Holiday {
            date: d,
            name: "Independence Day".to_string(),
            description: String::new(),
            kind: rollcall_types::HolidayKind::National,
        }];

        assert!(matches!(day_cell(d, &[], &holidays), DayCell::Holiday(_)));
        assert!(matches!(
            day_cell(date(2026, 8, 16), &[], &holidays),
            DayCell::Empty
        ));
    }

    #[test]
    fn test_month_stats() {
        let records = vec![
            create_record(date(2026, 8, 3), DayStatus::Present),
            create_record(date(2026, 8, 4), DayStatus::Present),
            create_record(date(2026, 8, 5), DayStatus::Absent),
            create_record(date(2026, 8, 6), DayStatus::Partial),
            create_record(date(2026, 8, 7), DayStatus::Holiday),
        ];

        let stats = MonthStats::from_records(&records);
        assert_eq!(stats.present, 2);
        assert_eq!(stats.absent, 1);
        assert_eq!(stats.partial, 1);
        assert_eq!(stats.holidays, 1);

        // 3 attended-ish days of 4 class days.
        assert!((stats.attendance_percentage() - 75.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_month_stats_empty_is_zero() {
        assert_eq!(MonthStats::default().attendance_percentage(), 0.0);
    }
}
