use chrono::{DateTime, SecondsFormat, Utc};

/// A row in the `contacts` table.
#[derive(Debug, Clone)]
pub struct ContactRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// An accepted submission, not yet persisted.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    /// Empty when the visitor left the field out.
    pub phone: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Stored form of `created_at`: ISO-8601 UTC with milliseconds and a `Z`
/// suffix, e.g. `2026-10-16T08:30:00.123Z`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_is_millisecond_iso8601_utc() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 16, 8, 30, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "2026-10-16T08:30:00.000Z");
    }
}
