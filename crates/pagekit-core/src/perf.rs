//! Page load timing report.

use std::fmt;

use serde::Serialize;

/// Raw navigation timestamps, in milliseconds since the epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageTiming {
    pub navigation_start: f64,
    pub dom_content_loaded_end: f64,
    pub load_event_end: f64,
}

/// First paint availability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPaint {
    /// The paint timing API is missing.
    Unsupported,
    /// The API exists but reported no `first-paint` entry.
    Unavailable,
    /// Milliseconds since navigation start.
    At(f64),
}

impl fmt::Display for FirstPaint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => f.write_str("Not supported"),
            Self::Unavailable => f.write_str("Not available"),
            Self::At(ms) => write!(f, "{}ms", ms.round()),
        }
    }
}

/// Durations logged once the page has loaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceReport {
    pub total_load_ms: f64,
    pub dom_ready_ms: f64,
    pub first_paint: FirstPaint,
}

impl PerformanceReport {
    pub fn new(timing: PageTiming, first_paint: FirstPaint) -> Self {
        Self {
            total_load_ms: (timing.load_event_end - timing.navigation_start).max(0.0),
            dom_ready_ms: (timing.dom_content_loaded_end - timing.navigation_start).max(0.0),
            first_paint,
        }
    }
}

impl fmt::Display for PerformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Page Performance: total load {}ms, DOM ready {}ms, first paint {}",
            self.total_load_ms, self.dom_ready_ms, self.first_paint
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_durations() {
        let timing = PageTiming {
            navigation_start: 1_000.0,
            dom_content_loaded_end: 1_250.0,
            load_event_end: 1_900.0,
        };
        let report = PerformanceReport::new(timing, FirstPaint::At(123.6));

        assert_eq!(report.total_load_ms, 900.0);
        assert_eq!(report.dom_ready_ms, 250.0);
        assert_eq!(
            report.to_string(),
            "Page Performance: total load 900ms, DOM ready 250ms, first paint 124ms"
        );
    }

    #[test]
    fn test_unfinished_load_reads_zero() {
        let timing = PageTiming {
            navigation_start: 1_000.0,
            dom_content_loaded_end: 1_250.0,
            load_event_end: 0.0,
        };
        let report = PerformanceReport::new(timing, FirstPaint::Unsupported);

        assert_eq!(report.total_load_ms, 0.0);
        assert!(report.to_string().ends_with("first paint Not supported"));
    }
}
