use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Local, SecondsFormat};

/// Last value handed out, as nanoseconds since the epoch. Guards against the
/// clock reporting the same instant twice in a tight loop.
static LAST_NANOS: AtomicI64 = AtomicI64::new(0);

/// Generates the current local time as an RFC 3339 string with a fixed
/// nine-digit fractional part, e.g. `2023-01-22T09:52:23.616414000-08:00`.
///
/// Values are strictly increasing within a process: when the clock has not
/// advanced past the previous call, the result is bumped by one nanosecond.
/// The fixed width keeps lexicographic order on the strings identical to
/// chronological order, which is what a string sort key sorts by.
pub fn generate() -> String {
    let now = Local::now();
    let candidate = now
        .timestamp_nanos_opt()
        .expect("system clock outside the nanosecond-representable range");

    let previous = match LAST_NANOS.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
        Some(candidate.max(last + 1))
    }) {
        Ok(previous) | Err(previous) => previous,
    };
    let unique = candidate.max(previous + 1);

    DateTime::from_timestamp_nanos(unique)
        .with_timezone(now.offset())
        .to_rfc3339_opts(SecondsFormat::Nanos, false)
}
