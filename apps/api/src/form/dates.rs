//! Month-granularity dates as entered through `<input type="month">` (`YYYY-MM`),
//! plus the elapsed-duration arithmetic used by experience entries.

use chrono::{Datelike, Local};
use serde::Serialize;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month. `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(YearMonth { year, month })
    }

    /// Parses `YYYY-MM`. Anything else (including a full `YYYY-MM-DD`) is `None`;
    /// callers treat an unparsable month the same as an empty one.
    pub fn parse(raw: &str) -> Option<Self> {
        let (year, month) = raw.trim().split_once('-')?;
        if year.len() != 4 || month.len() != 2 {
            return None;
        }
        let year = year.parse::<i32>().ok()?;
        let month = month.parse::<u32>().ok()?;
        YearMonth::new(year, month)
    }

    /// The current month in local time.
    pub fn now() -> Self {
        let today = Local::now().date_naive();
        YearMonth {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Calendar-month difference `self - earlier`; negative when `earlier` is later.
    pub fn months_since(&self, earlier: &YearMonth) -> i32 {
        (self.year - earlier.year) * 12 + (self.month as i32 - earlier.month as i32)
    }

    /// Display form used in the preview, e.g. `Jan 2020`.
    /// A month outside `1..=12` prints as its number.
    pub fn display(&self) -> String {
        let index = (self.month as usize).wrapping_sub(1);
        match MONTH_ABBREVIATIONS.get(index) {
            Some(name) => format!("{name} {}", self.year),
            None => format!("{} {}", self.month, self.year),
        }
    }
}

/// Elapsed time between two months, floored into whole years and months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tenure {
    pub total_months: i32,
}

impl Tenure {
    pub fn years(&self) -> i32 {
        self.total_months.div_euclid(12)
    }

    pub fn months(&self) -> i32 {
        self.total_months.rem_euclid(12)
    }

    /// Zero and negative spans (end before start) both count as sub-month.
    pub fn is_sub_month(&self) -> bool {
        self.total_months <= 0
    }

    /// Editor form: `2 years 2 months`, `1 year`, `Less than a month`.
    pub fn long_text(&self) -> String {
        if self.is_sub_month() {
            return "Less than a month".to_string();
        }
        join_units(
            (self.years(), "year", "years"),
            (self.months(), "month", "months"),
        )
    }

    /// Preview form: `2 yrs 2 mos`, `1 yr`, `< 1 month`.
    pub fn compact_text(&self) -> String {
        if self.is_sub_month() {
            return "< 1 month".to_string();
        }
        join_units((self.years(), "yr", "yrs"), (self.months(), "mo", "mos"))
    }
}

fn join_units(years: (i32, &str, &str), months: (i32, &str, &str)) -> String {
    let mut parts = Vec::with_capacity(2);
    for (count, singular, plural) in [years, months] {
        if count > 0 {
            let unit = if count > 1 { plural } else { singular };
            parts.push(format!("{count} {unit}"));
        }
    }
    parts.join(" ")
}

/// Computes how long an experience lasted.
///
/// Requires a parsable `start`. When `current` is set the end is `now`; otherwise
/// the end is the parsed `end`, and with neither there is nothing to compute.
pub fn compute_tenure(start: &str, end: &str, current: bool, now: YearMonth) -> Option<Tenure> {
    let start = YearMonth::parse(start)?;
    let end = if current { now } else { YearMonth::parse(end)? };
    Some(Tenure {
        total_months: end.months_since(&start),
    })
}

/// Date range shown next to an experience item: `Jan 2020 - Present`,
/// `Jan 2020 - Mar 2022`, or just `Jan 2020`.
pub fn date_range(start: &str, end: &str, current: bool) -> Option<String> {
    let start = YearMonth::parse(start)?.display();
    if current {
        return Some(format!("{start} - Present"));
    }
    match YearMonth::parse(end) {
        Some(end) => Some(format!("{start} - {}", end.display())),
        None => Some(start),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_parse_month_input() {
        assert_eq!(YearMonth::parse("2020-01"), Some(ym(2020, 1)));
        assert_eq!(YearMonth::parse(" 2023-12 "), Some(ym(2023, 12)));
        assert_eq!(YearMonth::parse(""), None);
        assert_eq!(YearMonth::parse("2020-13"), None);
        assert_eq!(YearMonth::parse("2020-1"), None);
        assert_eq!(YearMonth::parse("January 2020"), None);
    }

    #[test]
    fn test_display_never_panics_on_out_of_range_month() {
        assert_eq!(ym(2020, 12).display(), "Dec 2020");
        assert_eq!(YearMonth { year: 2020, month: 0 }.display(), "0 2020");
        assert_eq!(YearMonth { year: 2020, month: 13 }.display(), "13 2020");
    }

    #[test]
    fn test_two_years_two_months() {
        let tenure = compute_tenure("2020-01", "2022-03", false, ym(2030, 1)).unwrap();
        assert_eq!(tenure.long_text(), "2 years 2 months");
        assert_eq!(tenure.compact_text(), "2 yrs 2 mos");
    }

    #[test]
    fn test_same_month_is_less_than_a_month() {
        let tenure = compute_tenure("2023-06", "2023-06", false, ym(2030, 1)).unwrap();
        assert_eq!(tenure.long_text(), "Less than a month");
        assert_eq!(tenure.compact_text(), "< 1 month");
    }

    #[test]
    fn test_current_uses_now() {
        let tenure = compute_tenure("2021-01", "", true, ym(2021, 7)).unwrap();
        assert_eq!(tenure.long_text(), "6 months");
    }

    #[test]
    fn test_current_ignores_stale_end() {
        let tenure = compute_tenure("2021-01", "2021-02", true, ym(2022, 1)).unwrap();
        assert_eq!(tenure.long_text(), "1 year");
    }

    #[test]
    fn test_end_before_start_falls_back_to_sub_month() {
        let tenure = compute_tenure("2022-05", "2020-02", false, ym(2030, 1)).unwrap();
        assert!(tenure.is_sub_month());
        assert_eq!(tenure.long_text(), "Less than a month");
    }

    #[test]
    fn test_no_duration_without_resolvable_end() {
        assert!(compute_tenure("2021-01", "", false, ym(2030, 1)).is_none());
        assert!(compute_tenure("", "2021-01", false, ym(2030, 1)).is_none());
    }

    #[test]
    fn test_singular_units() {
        let tenure = compute_tenure("2020-01", "2021-02", false, ym(2030, 1)).unwrap();
        assert_eq!(tenure.long_text(), "1 year 1 month");
        assert_eq!(tenure.compact_text(), "1 yr 1 mo");
    }

    #[test]
    fn test_date_range_variants() {
        assert_eq!(
            date_range("2020-01", "", true).as_deref(),
            Some("Jan 2020 - Present")
        );
        assert_eq!(
            date_range("2020-01", "2022-03", false).as_deref(),
            Some("Jan 2020 - Mar 2022")
        );
        assert_eq!(date_range("2020-01", "", false).as_deref(), Some("Jan 2020"));
        assert_eq!(date_range("", "2022-03", false), None);
    }
}
