#[cfg(test)]
mod tests {
    use chrono::{Datelike, Duration, Local, NaiveDate, TimeZone, Weekday};
    use clk::api::{TaskRef, TimeEntry};
    use clk::libs::week::{local_millis, WeekSummary, WeekWindow, BIN_COUNT};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(name: &str, start_ms: i64, end_ms: i64) -> TimeEntry {
        TimeEntry {
            task: TaskRef {
                id: "t1".to_string(),
                name: name.to_string(),
                custom_id: None,
            },
            start: start_ms.to_string(),
            end: end_ms.to_string(),
        }
    }

    #[test]
    fn test_window_spans_sunday_through_saturday() {
        // A handful of arbitrary reference dates across weekdays.
        for reference in [date(2024, 3, 13), date(2024, 3, 11), date(2024, 3, 16), date(2023, 12, 31)] {
            let window = WeekWindow::containing(reference);
            assert_eq!(window.start.weekday(), Weekday::Sun);
            assert_eq!(window.end.weekday(), Weekday::Sat);
            assert_eq!(window.start.time(), chrono::NaiveTime::from_hms_opt(0, 0, 0).unwrap());
            assert_eq!(window.end.time(), chrono::NaiveTime::from_hms_opt(23, 59, 59).unwrap());
            // Exactly 7 days from start to the inclusive end.
            assert_eq!(window.end - window.start, Duration::days(7) - Duration::seconds(1));
            assert!(window.start.date() <= reference && reference <= window.end.date());
        }
    }

    #[test]
    fn test_sunday_starts_its_own_week() {
        // 2024-03-10 is a Sunday.
        let window = WeekWindow::containing(date(2024, 3, 10));
        assert_eq!(window.start.date(), date(2024, 3, 10));
        assert_eq!(window.end.date(), date(2024, 3, 16));
    }

    #[test]
    fn test_midweek_window_boundaries() {
        // 2024-03-13 is a Wednesday; its week began Sunday the 10th.
        let window = WeekWindow::containing(date(2024, 3, 13));
        assert_eq!(window.start.date(), date(2024, 3, 10));
        assert_eq!(window.end.date(), date(2024, 3, 16));
    }

    #[test]
    fn test_last_bins_oldest_first_consecutive() {
        let today = date(2024, 3, 13);
        let bins = WeekWindow::last_bins(today);
        assert_eq!(bins.len(), BIN_COUNT as usize);

        // Consecutive weeks with no gaps, current week last.
        for pair in bins.windows(2) {
            assert_eq!(pair[1].start.date(), pair[0].start.date() + Duration::days(7));
        }
        let current = bins.last().unwrap();
        assert!(current.start.date() <= today && today <= current.end.date());
    }

    #[test]
    fn test_local_millis_round_trip() {
        let window = WeekWindow::containing(date(2024, 3, 13));
        let millis = window.start_millis().unwrap();
        let back = Local.timestamp_millis_opt(millis).unwrap().naive_local();
        assert_eq!(back, window.start);

        let noon = date(2024, 3, 13).and_hms_opt(12, 0, 0).unwrap();
        let round = Local.timestamp_millis_opt(local_millis(&noon).unwrap()).unwrap().naive_local();
        assert_eq!(round, noon);
    }

    #[test]
    fn test_summary_empty() {
        let summary = WeekSummary::from_entries(&[]).unwrap();
        assert_eq!(summary.entry_count, 0);
        assert_eq!(summary.total, Duration::zero());
        assert!(summary.buckets.is_empty());
    }

    #[test]
    fn test_summary_buckets_by_task_name() {
        let hour = 3_600_000;
        let entries = vec![
            entry("Acme", 0, hour),
            entry("Acme", 2 * hour, 3 * hour + hour / 2),
            entry("Beta", 4 * hour, 5 * hour),
        ];
        let summary = WeekSummary::from_entries(&entries).unwrap();

        assert_eq!(summary.entry_count, 3);
        assert_eq!(summary.total, Duration::minutes(210));
        assert_eq!(summary.buckets.len(), 2);
        assert_eq!(summary.buckets["Acme"], Duration::minutes(150));
        assert_eq!(summary.buckets["Beta"], Duration::hours(1));
    }

    #[test]
    fn test_summary_rejects_malformed_timestamps() {
        let mut bad = entry("Acme", 0, 1000);
        bad.start = "not-a-number".to_string();
        assert!(WeekSummary::from_entries(&[bad]).is_err());
    }
}
