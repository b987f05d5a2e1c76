// crates/travellog-core/src/duration.rs
use crate::error::{Result, TravelError};
use serde::{Deserialize, Serialize};

/// Flight duration in whole hours and minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FlightDuration {
    hours: u32,
    minutes: u32,
}

impl FlightDuration {
    /// Validated constructor. `minutes` must be in `0..=59`.
    pub fn new(hours: u32, minutes: u32) -> Result<Self> {
        if minutes > 59 {
            return Err(TravelError::InvalidDuration(format!(
                "minutes must be between 0 and 59, got {minutes}"
            )));
        }
        Ok(Self { hours, minutes })
    }

    /// Strict parse of the two text fields; both must be non-negative integers.
    pub fn parse(hours: &str, minutes: &str) -> Result<Self> {
        let h = hours.trim().parse::<u32>().map_err(|_| {
            TravelError::InvalidDuration(format!("hours is not a whole number: {hours:?}"))
        })?;
        let m = minutes.trim().parse::<u32>().map_err(|_| {
            TravelError::InvalidDuration(format!("minutes is not a whole number: {minutes:?}"))
        })?;
        Self::new(h, m)
    }

    /// Lenient parse for records already in storage.
    ///
    /// Compatibility shim: an unparsable side counts as zero and out-of-range
    /// minutes are kept as stored, so old records still sort by
    /// `hours * 60 + minutes` exactly as before.
    pub fn from_text(hours: &str, minutes: &str) -> Self {
        Self {
            hours: lenient_u32(hours),
            minutes: lenient_u32(minutes),
        }
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn total_minutes(&self) -> u64 {
        u64::from(self.hours) * 60 + u64::from(self.minutes)
    }
}

fn lenient_u32(s: &str) -> u32 {
    s.trim().parse::<u32>().unwrap_or(0)
}

/// Parses a duration filter bound (whole minutes). Blank or unparsable
/// bounds are `None` and the bound is skipped.
pub fn parse_minutes_bound(text: &str) -> Option<u64> {
    let t = text.trim();
    if t.is_empty() {
        return None;
    }
    match t.parse::<u64>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::debug!(bound = text, "ignoring unparsable duration bound");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_constructor_rejects_minutes_over_59() {
        assert!(FlightDuration::new(1, 59).is_ok());
        assert!(matches!(
            FlightDuration::new(1, 60),
            Err(TravelError::InvalidDuration(_))
        ));
    }

    #[test]
    fn strict_parse() {
        let d = FlightDuration::parse(" 2 ", "05").unwrap();
        assert_eq!(d.total_minutes(), 125);
        assert!(FlightDuration::parse("-1", "0").is_err());
        assert!(FlightDuration::parse("1", "x").is_err());
    }

    #[test]
    fn lenient_parse_treats_garbage_as_zero() {
        assert_eq!(FlightDuration::from_text("abc", "30").total_minutes(), 30);
        assert_eq!(FlightDuration::from_text("2", "").total_minutes(), 120);
        assert_eq!(FlightDuration::from_text("", "").total_minutes(), 0);
        assert_eq!(FlightDuration::from_text("-3", "10").total_minutes(), 10);
    }

    #[test]
    fn minute_bounds() {
        assert_eq!(parse_minutes_bound(""), None);
        assert_eq!(parse_minutes_bound("ninety"), None);
        assert_eq!(parse_minutes_bound(" 90 "), Some(90));
    }
}
