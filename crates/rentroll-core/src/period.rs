//! Payment periods and calendar-month windows
//!
//! A payment period is a calendar month identified by the exact string
//! `YYYY-MM`. The string is both the external API parameter and the grouping
//! key on persisted payout records, so its canonical form is preserved
//! byte-for-byte by `Display`.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

/// Years outside this range are rejected at parse time.
const MIN_YEAR: i32 = 2020;
const MAX_YEAR: i32 = 2030;

/// A calendar month used as the unit of commission aggregation.
///
/// Construction goes through `FromStr`, so a `PaymentPeriod` value is always
/// valid: year in `[2020, 2030]`, month in `[1, 12]`. Parsing at the boundary
/// replaces the standalone validator of the source system; no operation
/// deeper in the engine ever sees an unvalidated period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaymentPeriod {
    year: i32,
    month: u32,
}

impl PaymentPeriod {
    /// The period's year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The period's month (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Resolve the inclusive timestamp window covered by this period.
    ///
    /// The window runs from the first instant of the month to
    /// `23:59:59.999` on its last day. Payments qualify when their `paid_at`
    /// falls inside the window, both ends inclusive.
    pub fn window(&self) -> PeriodWindow {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("period is validated on construction");
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .expect("period is validated on construction");

        let start = first.and_hms_opt(0, 0, 0).expect("midnight exists").and_utc();
        let end = first_of_next
            .and_hms_opt(0, 0, 0)
            .expect("midnight exists")
            .and_utc()
            - Duration::milliseconds(1);

        PeriodWindow { start, end }
    }
}

impl std::str::FromStr for PaymentPeriod {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| LedgerError::InvalidPaymentPeriod {
            period: s.to_string(),
            reason: reason.to_string(),
        };

        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[4] == b'-'
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[5..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(invalid("expected YYYY-MM with ASCII digits"));
        }

        let year: i32 = s[..4].parse().map_err(|_| invalid("unparseable year"))?;
        let month: u32 = s[5..].parse().map_err(|_| invalid("unparseable month"))?;

        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(invalid("year must be between 2020 and 2030"));
        }
        if !(1..=12).contains(&month) {
            return Err(invalid("month must be between 01 and 12"));
        }

        Ok(PaymentPeriod { year, month })
    }
}

impl std::fmt::Display for PaymentPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for PaymentPeriod {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PaymentPeriod {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Inclusive timestamp range covered by a payment period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl PeriodWindow {
    /// Whether a payment timestamp falls inside this window (both ends inclusive)
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }
}
