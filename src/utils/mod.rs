// Mon Oct 19 2026 - Alex

pub mod logging;

pub use logging::{LoggingUtils, ScopedTimer};

use std::time::Duration;

/// Short human form used in CLI summaries.
pub fn format_duration(duration: Duration) -> String {
    match duration.as_millis() {
        0 => format!("{}µs", duration.as_micros()),
        ms @ 1..=999 => format!("{}ms", ms),
        ms if ms < 60_000 => format!("{:.2}s", duration.as_secs_f64()),
        _ => {
            let secs = duration.as_secs();
            format!("{}m {}s", secs / 60, secs % 60)
        }
    }
}
