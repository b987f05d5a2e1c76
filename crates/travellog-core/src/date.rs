// crates/travellog-core/src/date.rs
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// The only accepted textual date layout: `dd.mm.yyyy`.
pub const DATE_PATTERN: &str = "%d.%m.%Y";

/// Comparable value of a stored `dd.mm.yyyy` date.
///
/// Record dates that fail to parse become the current instant (see
/// [`DateKey::parse_or`]). This makes a malformed date sort as the most
/// recent entry instead of failing the whole refresh. It is a compatibility
/// behaviour carried over from the stored data, not a policy: new call sites
/// that need a date should use [`DateKey::parse_date`] and decide themselves
/// what a missing value means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDateTime);

impl DateKey {
    /// The fallback value used for unparsable record dates.
    pub fn now() -> Self {
        DateKey(Local::now().naive_local())
    }

    /// Midnight at the start of `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        DateKey(date.and_time(NaiveTime::MIN))
    }

    /// Strict parse of `dd.mm.yyyy`. Two-digit day and month, four-digit
    /// year, no surrounding whitespace.
    pub fn parse_date(text: &str) -> Option<NaiveDate> {
        let bytes = text.as_bytes();
        if bytes.len() != 10 || bytes[2] != b'.' || bytes[5] != b'.' {
            return None;
        }
        if !bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit())
        {
            return None;
        }
        NaiveDate::parse_from_str(text, DATE_PATTERN).ok()
    }

    /// Parses a record date, falling back to the current instant.
    pub fn parse(text: &str) -> Self {
        Self::parse_or(text, Self::now())
    }

    /// Parses a record date, falling back to `fallback`.
    ///
    /// Sorters take one `now` per call and pass it here, so every malformed
    /// date in a single sort compares equal.
    pub fn parse_or(text: &str, fallback: DateKey) -> Self {
        match Self::parse_date(text) {
            Some(d) => Self::from_date(d),
            None => {
                tracing::debug!(date = text, "unparsable record date, treating as now");
                fallback
            }
        }
    }

    /// Parses an optional filter bound. Blank or unparsable bounds are
    /// `None`, which disables that side of the range.
    pub fn parse_bound(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        match Self::parse_date(text.trim()) {
            Some(d) => Some(Self::from_date(d)),
            None => {
                tracing::debug!(bound = text, "ignoring unparsable date bound");
                None
            }
        }
    }
}

/// Inclusive date range check shared by the flight and place filters.
pub(crate) fn within(key: DateKey, from: Option<DateKey>, to: Option<DateKey>) -> bool {
    from.map_or(true, |f| key >= f) && to.map_or(true, |t| key <= t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> DateKey {
        DateKey::from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn parses_fixed_pattern() {
        assert_eq!(
            DateKey::parse_date("05.03.2021"),
            NaiveDate::from_ymd_opt(2021, 3, 5)
        );
    }

    #[test]
    fn rejects_other_layouts() {
        for bad in ["5.3.2021", "2021-03-05", "05/03/2021", "31.02.2021", "", " 05.03.2021", "aa.bb.cccc"] {
            assert_eq!(DateKey::parse_date(bad), None, "{bad}");
        }
    }

    #[test]
    fn malformed_record_date_uses_fallback() {
        let fallback = day(2030, 1, 1);
        assert_eq!(DateKey::parse_or("garbage", fallback), fallback);
        assert_eq!(DateKey::parse_or("01.01.2020", fallback), day(2020, 1, 1));
    }

    #[test]
    fn malformed_record_date_sorts_after_real_dates() {
        let real = DateKey::parse("01.01.2020");
        let broken = DateKey::parse("not a date");
        assert!(broken > real);
    }

    #[test]
    fn bounds_are_optional_and_lenient() {
        assert_eq!(DateKey::parse_bound(""), None);
        assert_eq!(DateKey::parse_bound("   "), None);
        assert_eq!(DateKey::parse_bound("junk"), None);
        assert_eq!(DateKey::parse_bound("01.02.2020"), Some(day(2020, 2, 1)));
    }

    #[test]
    fn range_is_inclusive() {
        let k = day(2020, 6, 1);
        assert!(within(k, Some(k), Some(k)));
        assert!(within(k, None, None));
        assert!(!within(k, Some(day(2020, 6, 2)), None));
        assert!(!within(k, None, Some(day(2020, 5, 31))));
    }
}
