#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use clk::libs::interval::{backwards_interval, clock_interval, AddSpec, TimeUnit};

    fn parse(first: &str, second: &str, target: &str) -> anyhow::Result<AddSpec> {
        AddSpec::parse(first, second, target)
    }

    #[test]
    fn test_since_last() {
        assert_eq!(parse("since", "last", "acme").unwrap(), AddSpec::SinceLast);
    }

    #[test]
    fn test_clock_range() {
        assert_eq!(parse("1300", "1330", "acme").unwrap(), AddSpec::ClockRange { start: 1300, end: 1330 });
        assert_eq!(parse("0", "2359", "acme").unwrap(), AddSpec::ClockRange { start: 0, end: 2359 });
    }

    #[test]
    fn test_clock_range_out_of_bounds() {
        assert!(parse("2360", "2359", "acme").is_err());
        assert!(parse("1300", "9999", "acme").is_err());
    }

    #[test]
    fn test_clock_range_invalid_minutes() {
        // 1380 would be 13:80.
        assert!(parse("1380", "1400", "acme").is_err());
        assert!(parse("1300", "1360", "acme").is_err());
    }

    #[test]
    fn test_clock_range_inverted_or_empty() {
        assert!(parse("1330", "1300", "acme").is_err());
        assert!(parse("1300", "1300", "acme").is_err());
    }

    #[test]
    fn test_backwards_minutes() {
        assert_eq!(
            parse("10", "min", "acme").unwrap(),
            AddSpec::Backwards {
                amount: 10,
                unit: TimeUnit::Minutes
            }
        );
        assert_eq!(
            parse("45", "m", "acme").unwrap(),
            AddSpec::Backwards {
                amount: 45,
                unit: TimeUnit::Minutes
            }
        );
    }

    #[test]
    fn test_backwards_hours() {
        assert_eq!(
            parse("2", "hour", "acme").unwrap(),
            AddSpec::Backwards {
                amount: 2,
                unit: TimeUnit::Hours
            }
        );
        assert_eq!(
            parse("1", "h", "acme").unwrap(),
            AddSpec::Backwards {
                amount: 1,
                unit: TimeUnit::Hours
            }
        );
    }

    #[test]
    fn test_backwards_rejects_non_positive_amounts() {
        assert!(parse("0", "min", "acme").is_err());
        assert!(parse("-5", "min", "acme").is_err());
    }

    #[test]
    fn test_numeric_target_rejected() {
        // The target slot is always a short name or task id.
        assert!(parse("10", "min", "42").is_err());
        assert!(parse("since", "last", "42").is_err());
        assert!(parse("1300", "1330", "-7").is_err());
    }

    #[test]
    fn test_invalid_syntax_rejected() {
        assert!(parse("since", "forever", "acme").is_err());
        assert!(parse("10", "fortnight", "acme").is_err());
        assert!(parse("foo", "bar", "acme").is_err());
    }

    #[test]
    fn test_clock_interval_expansion() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
        let (start, end) = clock_interval(1300, 1330, day);
        assert_eq!(start, day.and_hms_opt(13, 0, 0).unwrap());
        assert_eq!(end, day.and_hms_opt(13, 30, 0).unwrap());
    }

    #[test]
    fn test_backwards_interval_minutes() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap().and_hms_opt(14, 0, 0).unwrap();
        let (start, end) = backwards_interval(10, TimeUnit::Minutes, now);
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 3, 13).unwrap().and_hms_opt(13, 50, 0).unwrap());
        assert_eq!(end, now);
    }

    #[test]
    fn test_backwards_interval_hours() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap().and_hms_opt(14, 0, 0).unwrap();
        let (start, end) = backwards_interval(2, TimeUnit::Hours, now);
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 3, 13).unwrap().and_hms_opt(12, 0, 0).unwrap());
        assert_eq!(end, now);
    }

    #[test]
    fn test_backwards_interval_crosses_midnight() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap().and_hms_opt(0, 5, 0).unwrap();
        let (start, _) = backwards_interval(10, TimeUnit::Minutes, now);
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 3, 12).unwrap().and_hms_opt(23, 55, 0).unwrap());
    }
}
