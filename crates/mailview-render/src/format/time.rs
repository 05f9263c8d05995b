use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// Table-cell date format: RFC 3339 input collapses to `YYYY-MM-DD HH:MM`;
/// anything unparseable passes through untouched.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

/// Detail-line date format: values already containing a `T` pass through;
/// bare dates and datetimes are lifted to UTC ISO-8601 with milliseconds.
pub fn format_date_iso(raw: &str) -> String {
    if raw.contains('T') {
        return raw.to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Utc
            .from_utc_datetime(&dt)
            .to_rfc3339_opts(SecondsFormat::Millis, true);
    }
    if let Some(dt) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Utc
            .from_utc_datetime(&dt)
            .to_rfc3339_opts(SecondsFormat::Millis, true);
    }
    raw.to_string()
}
