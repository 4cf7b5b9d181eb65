//! Dashboard navigation and placeholder actions.
//!
//! None of the sections or actions exist yet; each one answers with an
//! informational message.

/// Labels of the dashboard navigation items, in display order.
pub const NAV_ITEMS: [&str; 4] = ["Dashboard", "My Scans", "Health Insights", "Profile"];

pub const SCAN_COMPLETED_MESSAGE: &str =
    "Scan completed successfully! Your health score has been updated.";

/// Message for a navigation item, matched case-insensitively on its label.
pub fn section_message(label: &str) -> &'static str {
    match label.trim().to_lowercase().as_str() {
        "dashboard" => "You are on the main dashboard.",
        "my scans" => "View your scan history and results.",
        "health insights" => "Detailed health analytics and trends.",
        "profile" => "Manage your account settings and preferences.",
        _ => "Section coming soon!",
    }
}

/// Navigation items with exactly one active entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NavMenu {
    labels: Vec<String>,
    active: usize,
}

impl NavMenu {
    /// The first item starts active.
    pub fn new<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            active: 0,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// Make `index` the only active item and return its message.
    pub fn select(&mut self, index: usize) -> Option<&'static str> {
        let label = self.labels.get(index)?;
        let message = section_message(label);
        self.active = index;
        Some(message)
    }
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new(NAV_ITEMS)
    }
}

/// Labels of the dashboard's quick-action buttons, in display order.
pub const QUICK_ACTIONS: [&str; 3] = ["Start Scan", "View History", "Settings"];

/// Buttons in the dashboard's quick-actions card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    StartScan,
    ViewHistory,
    Settings,
}

impl DashboardAction {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "start scan" => Some(Self::StartScan),
            "view history" => Some(Self::ViewHistory),
            "settings" => Some(Self::Settings),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::StartScan => "Start Scan",
            Self::ViewHistory => "View History",
            Self::Settings => "Settings",
        }
    }

    /// Informational message for actions that are not built yet.
    pub fn placeholder_message(self) -> Option<&'static str> {
        match self {
            Self::StartScan => None,
            Self::ViewHistory => Some("Scan history feature coming soon!"),
            Self::Settings => Some("Settings page coming soon!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_messages() {
        assert_eq!(section_message("Dashboard"), "You are on the main dashboard.");
        assert_eq!(section_message("MY SCANS"), "View your scan history and results.");
        assert_eq!(section_message(" Profile "), "Manage your account settings and preferences.");
        assert_eq!(section_message("Billing"), "Section coming soon!");
    }

    #[test]
    fn test_nav_selection_is_exclusive() {
        let mut nav = NavMenu::default();
        assert!(nav.is_active(0));

        assert_eq!(nav.select(2), Some("Detailed health analytics and trends."));
        let active: Vec<usize> = (0..nav.labels().len()).filter(|&i| nav.is_active(i)).collect();
        assert_eq!(active, vec![2]);

        // Out of range leaves the selection alone
        assert_eq!(nav.select(9), None);
        assert!(nav.is_active(2));
    }

    #[test]
    fn test_unknown_nav_label_falls_back() {
        let mut nav = NavMenu::new(["Dashboard", "Rewards"]);
        assert_eq!(nav.select(1), Some("Section coming soon!"));
        assert!(nav.is_active(1));
    }

    #[test]
    fn test_actions() {
        assert_eq!(DashboardAction::from_label("Start Scan"), Some(DashboardAction::StartScan));
        assert_eq!(DashboardAction::from_label("view history"), Some(DashboardAction::ViewHistory));
        assert_eq!(DashboardAction::from_label("Share"), None);

        for action in [
            DashboardAction::StartScan,
            DashboardAction::ViewHistory,
            DashboardAction::Settings,
        ] {
            assert_eq!(DashboardAction::from_label(action.label()), Some(action));
        }
        for label in QUICK_ACTIONS {
            assert!(DashboardAction::from_label(label).is_some());
        }
        assert_eq!(DashboardAction::StartScan.placeholder_message(), None);
        assert_eq!(
            DashboardAction::Settings.placeholder_message(),
            Some("Settings page coming soon!")
        );
    }
}
