// Mon Oct 19 2026 - Alex

use crate::utils::format_duration;
use log::LevelFilter;
use std::time::{Duration, Instant};

pub struct LoggingUtils;

impl LoggingUtils {
    /// Installs `env_logger` at `level`. A logger that is already set is left
    /// in place.
    pub fn init_logger(level: LevelFilter) {
        let _ = env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init();
    }

    /// Case-insensitive level name, `warning` included. Anything else is `Info`.
    pub fn level_from_str(s: &str) -> LevelFilter {
        let s = s.trim();
        if s.eq_ignore_ascii_case("warning") {
            return LevelFilter::Warn;
        }
        s.parse().unwrap_or(LevelFilter::Info)
    }
}

/// Logs how long a stage ran once it goes out of scope.
pub struct ScopedTimer {
    stage: &'static str,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(stage: &'static str) -> Self {
        Self {
            stage,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        log::debug!("{} finished in {}", self.stage, format_duration(self.elapsed()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_str() {
        assert_eq!(LoggingUtils::level_from_str("DEBUG"), LevelFilter::Debug);
        assert_eq!(LoggingUtils::level_from_str(" warning "), LevelFilter::Warn);
        assert_eq!(LoggingUtils::level_from_str("off"), LevelFilter::Off);
        assert_eq!(LoggingUtils::level_from_str("loud"), LevelFilter::Info);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        LoggingUtils::init_logger(LevelFilter::Debug);
        LoggingUtils::init_logger(LevelFilter::Info);
        let timer = ScopedTimer::new("noop");
        assert!(timer.elapsed() < Duration::from_secs(60));
    }
}
