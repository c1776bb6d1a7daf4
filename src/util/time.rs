use chrono::{DateTime, Duration, Utc};

/// Formats how long ago `then` was, relative to `now`, in loose human terms.
///
/// The bucket thresholds mirror the relative-time humanizer commonly used in
/// web UIs: up to 44 seconds reads as "a few seconds ago", 45 seconds to
/// 89 seconds as "a minute ago", and so on through minutes, hours, days,
/// months, and years. Future timestamps (clock skew on the server side)
/// collapse to "a few seconds ago" rather than producing negative output.
pub fn humanize_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then).max(Duration::zero());
    let secs = elapsed.num_seconds();
    let mins = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if secs < 45 {
        "a few seconds ago".to_string()
    } else if secs < 90 {
        "a minute ago".to_string()
    } else if mins < 45 {
        format!("{} minutes ago", mins)
    } else if mins < 90 {
        "an hour ago".to_string()
    } else if hours < 22 {
        format!("{} hours ago", hours)
    } else if hours < 36 {
        "a day ago".to_string()
    } else if days < 26 {
        format!("{} days ago", days)
    } else if days < 46 {
        "a month ago".to_string()
    } else if days < 320 {
        // Calendar months approximated at 30 days, matching the humanizer
        // this replaces rather than true month arithmetic.
        format!("{} months ago", (days as f64 / 30.0).round() as i64)
    } else if days < 548 {
        "a year ago".to_string()
    } else {
        format!("{} years ago", (days as f64 / 365.0).round() as i64)
    }
}
