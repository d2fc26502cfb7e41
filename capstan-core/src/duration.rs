//! Duration rendering for log output

use std::time::Duration;

/// Format a duration as `H:MM:SS`, truncating fractional seconds
///
/// Hours are unpadded and keep growing past 24; estimated build durations
/// are announced in this form.
pub fn format_hms(duration: Duration) -> String {
    let total = duration.as_secs();
    format!(
        "{}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
