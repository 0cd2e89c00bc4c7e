//! Layered month calendar with reform gaps
//!
//! A month grid carries two layers per day: the civil day-of-month and the
//! continuous day index. When reform gaps are shown, days removed by a
//! historical calendar reform are flagged.

use chrono::{Datelike, NaiveDate};
use uls_core::{Uls, UlsError, UlsResult};

/// Days removed by a named calendar reform
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReformGap {
    pub name: &'static str,
    pub year: i32,
    /// 0-based month
    pub month: u32,
    /// First removed day, inclusive
    pub first_day: u32,
    /// Last removed day, inclusive
    pub last_day: u32,
}

impl ReformGap {
    pub fn contains(&self, day: u32) -> bool {
        (self.first_day..=self.last_day).contains(&day)
    }

    pub fn removed_days(&self) -> u32 {
        self.last_day - self.first_day + 1
    }
}

/// The only two reforms that ever produce gaps
pub static REFORM_GAPS: [ReformGap; 2] = [
    ReformGap {
        name: "Gregorian reform (Inter gravissimas)",
        year: 1582,
        month: 9,
        first_day: 5,
        last_day: 14,
    },
    ReformGap {
        name: "British Calendar Act",
        year: 1752,
        month: 8,
        first_day: 3,
        last_day: 13,
    },
];

/// Reform affecting a given month, if any
pub fn reform_gap_for(year: i32, month: u32) -> Option<&'static ReformGap> {
    REFORM_GAPS
        .iter()
        .find(|gap| gap.year == year && gap.month == month)
}

/// One grid position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CalendarCell {
    /// Civil day-of-month; None for leading blanks
    pub civil_day: Option<u32>,
    /// floor(ULS / 86400) at that day's midnight; None for leading blanks
    pub day_index: Option<i64>,
    pub is_gap: bool,
}

impl CalendarCell {
    pub const BLANK: CalendarCell = CalendarCell {
        civil_day: None,
        day_index: None,
        is_gap: false,
    };

    pub fn is_blank(&self) -> bool {
        self.civil_day.is_none()
    }
}

/// Build the grid for one civil month
///
/// Leading blanks pad the weekdays (Sunday first) before the 1st. `month` is
/// 0-based; anything outside 0..=11 is rejected.
pub fn generate_layered_month(
    year: i32,
    month: u32,
    show_reform_gaps: bool,
) -> UlsResult<Vec<CalendarCell>> {
    if month > 11 {
        return Err(UlsError::InvalidMonth(month));
    }

    let first = NaiveDate::from_ymd_opt(year, month + 1, 1).ok_or(UlsError::InvalidDate {
        year,
        month: month + 1,
        day: 1,
    })?;
    let leading = first.weekday().num_days_from_sunday() as usize;
    let length = days_in_month(first);

    let gap = if show_reform_gaps {
        reform_gap_for(year, month)
    } else {
        None
    };

    let mut cells = Vec::with_capacity(leading + length as usize);
    cells.extend(std::iter::repeat(CalendarCell::BLANK).take(leading));

    let first_index = Uls::from_date(first).day_index();
    for day in 1..=length {
        cells.push(CalendarCell {
            civil_day: Some(day),
            day_index: Some(first_index + i64::from(day - 1)),
            is_gap: gap.map_or(false, |g| g.contains(day)),
        });
    }

    tracing::debug!(
        year,
        month,
        leading,
        days = length,
        reform = gap.map(|g| g.name),
        "layered month generated"
    );

    Ok(cells)
}

fn days_in_month(first: NaiveDate) -> u32 {
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_cell(cells: &[CalendarCell], day: u32) -> CalendarCell {
        *cells
            .iter()
            .find(|c| c.civil_day == Some(day))
            .expect("day present in grid")
    }

    #[test]
    fn test_october_1582_gap() {
        let cells = generate_layered_month(1582, 9, true).unwrap();
        for day in 5..=14 {
            assert!(day_cell(&cells, day).is_gap, "day {day}");
        }
        assert!(!day_cell(&cells, 4).is_gap);
        assert!(!day_cell(&cells, 15).is_gap);
        assert_eq!(cells.iter().filter(|c| c.is_gap).count(), 10);
    }

    #[test]
    fn test_september_1752_gap() {
        let cells = generate_layered_month(1752, 8, true).unwrap();
        for day in 3..=13 {
            assert!(day_cell(&cells, day).is_gap, "day {day}");
        }
        assert!(!day_cell(&cells, 2).is_gap);
        assert!(!day_cell(&cells, 14).is_gap);
        assert_eq!(cells.iter().filter(|c| c.is_gap).count(), 11);
    }

    #[test]
    fn test_gaps_hidden_without_flag() {
        let cells = generate_layered_month(1582, 9, false).unwrap();
        assert!(cells.iter().all(|c| !c.is_gap));
    }

    #[test]
    fn test_no_other_month_has_gaps() {
        for (year, month) in [(1582, 8), (1582, 10), (1752, 9), (2024, 1), (1583, 9)] {
            let cells = generate_layered_month(year, month, true).unwrap();
            let expected = reform_gap_for(year, month).map_or(0, |g| g.removed_days() as usize);
            assert_eq!(cells.iter().filter(|c| c.is_gap).count(), expected);
        }
        for month in 0..12 {
            let cells = generate_layered_month(1600, month, true).unwrap();
            assert!(cells.iter().all(|c| !c.is_gap));
        }
    }

    #[test]
    fn test_leading_blanks_match_weekday() {
        // 1 October 1582 (proleptic Gregorian) is a Friday
        let cells = generate_layered_month(1582, 9, false).unwrap();
        assert_eq!(cells.iter().take_while(|c| c.is_blank()).count(), 5);
        assert_eq!(cells.len(), 5 + 31);
    }

    #[test]
    fn test_february_leap_year() {
        let cells = generate_layered_month(2024, 1, false).unwrap();
        let days: Vec<_> = cells.iter().filter_map(|c| c.civil_day).collect();
        assert_eq!(days.len(), 29);
        // 1 February 2024 is a Thursday
        assert_eq!(cells.len() - days.len(), 4);
    }

    #[test]
    fn test_day_index_layer() {
        let cells = generate_layered_month(1, 0, false).unwrap();
        let first = day_cell(&cells, 1);
        assert_eq!(first.day_index, Some(0));
        assert_eq!(day_cell(&cells, 31).day_index, Some(30));

        let december = generate_layered_month(2023, 11, false).unwrap();
        let expected = Uls::from_civil(2023, 12, 25).unwrap().day_index();
        assert_eq!(day_cell(&december, 25).day_index, Some(expected));
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert_eq!(generate_layered_month(2024, 12, true), Err(UlsError::InvalidMonth(12)));
    }

    #[test]
    fn test_year_out_of_range_rejected() {
        assert!(matches!(
            generate_layered_month(1_000_000, 0, false),
            Err(UlsError::InvalidDate { .. })
        ));
    }
}
