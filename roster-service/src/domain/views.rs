use shared::types::Staff;

use crate::config::RosterConfig;

/// Slice of the roster shown on the dashboard: positions `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardWindow {
    pub start: usize,
    pub end: usize,
}

impl Default for DashboardWindow {
    fn default() -> Self {
        Self { start: 1, end: 5 }
    }
}

impl From<&RosterConfig> for DashboardWindow {
    fn from(config: &RosterConfig) -> Self {
        Self {
            start: config.dashboard_start,
            end: config.dashboard_end,
        }
    }
}

impl DashboardWindow {
    /// Keeps the staffs whose list position falls inside the window. Short lists
    /// yield fewer records; an inverted window yields none.
    pub fn apply(&self, staffs: Vec<Staff>) -> Vec<Staff> {
        staffs
            .into_iter()
            .skip(self.start)
            .take(self.end.saturating_sub(self.start))
            .collect()
    }
}

/// Normalizes a name typed into the staff list form. Blank input is rejected.
pub fn clean_name(raw: &str) -> Option<&str> {
    let name = raw.trim();
    (!name.is_empty()).then_some(name)
}
