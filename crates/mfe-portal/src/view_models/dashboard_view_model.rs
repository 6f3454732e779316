//! Dashboard View Model
//!
//! The dashboard is a static overview: the figures are fixed sample data.

use portal_theme::Theme;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRow {
    pub name: &'static str,
    pub status: &'static str,
    pub last_update: &'static str,
}

impl DeploymentRow {
    pub fn is_deployed(&self) -> bool {
        self.status == "deployed"
    }
}

#[derive(Debug, Clone)]
pub struct DashboardViewModel {
    pub stats: Vec<StatCard>,
    pub recent: Vec<DeploymentRow>,
}

const RECENT: [(&str, &str, &str); 4] = [
    ("user-dashboard", "deployed", "2 hours ago"),
    ("product-catalog", "building", "15 minutes ago"),
    ("checkout-flow", "deployed", "1 day ago"),
    ("auth-service", "deployed", "3 days ago"),
];

impl DashboardViewModel {
    pub fn new(theme: &Theme) -> Self {
        let stats = vec![
            StatCard {
                title: "Total MFEs",
                value: "12",
                color: theme.stat_blue,
            },
            StatCard {
                title: "Active Repositories",
                value: "8",
                color: theme.stat_green,
            },
            StatCard {
                title: "Team Members",
                value: "15",
                color: theme.stat_purple,
            },
            StatCard {
                title: "Deployments Today",
                value: "24",
                color: theme.stat_orange,
            },
        ];

        let recent = RECENT
            .iter()
            .map(|&(name, status, last_update)| DeploymentRow {
                name,
                status,
                last_update,
            })
            .collect();

        Self { stats, recent }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data() {
        let vm = DashboardViewModel::new(&Theme::default());
        let titles: Vec<_> = vm.stats.iter().map(|s| (s.title, s.value)).collect();
        assert_eq!(
            titles,
            vec![
                ("Total MFEs", "12"),
                ("Active Repositories", "8"),
                ("Team Members", "15"),
                ("Deployments Today", "24"),
            ]
        );
        assert_eq!(vm.recent.len(), 4);
        assert!(!vm.recent[1].is_deployed());
        assert!(vm.recent[0].is_deployed());
    }
}
