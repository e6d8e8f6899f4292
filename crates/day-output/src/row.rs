//! Plain data row types written by output backends.

use std::fmt;
use std::time::Duration;

use chrono::NaiveDate;

/// What one calendar day looked like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySummary {
    pub date:          NaiveDate,
    /// Number of completed feedings (satisfactions).
    pub feedings:      u32,
    /// Number of preemptions.
    pub interventions: u32,
    /// Total idle time.
    pub free_time:     Duration,
}

impl fmt::Display for DailySummary {
    /// The console block printed at the end of every day.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----------DAILY SUMMARY----------")?;
        writeln!(f, "# milk feeding: {}", self.feedings)?;
        writeln!(f, "# intervention: {}", self.interventions)?;
        writeln!(f, "Freetime: {}", hh_mm(self.free_time))?;
        write!(f, "---------------------------------")
    }
}

/// `HH:MM`, hours not wrapped at 24.
pub fn hh_mm(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 3600, secs % 3600 / 60)
}
