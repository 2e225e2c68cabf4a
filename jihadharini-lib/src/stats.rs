//! Dashboard summary statistics

use crate::domain::alert;
use crate::domain::member;
use crate::domain::mesh;
use crate::domain::project;
use crate::domain::report;
use crate::model::Record;
use crate::store::MemoryStore;

/// Direction of a stat card's recent change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// One summary card on the dashboard overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    /// Change over the comparison window, e.g. "+12%".
    pub change: String,
    pub trend: Trend,
    pub description: String,
}

impl StatCard {
    /// Creates a stat card.
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        change: impl Into<String>,
        trend: Trend,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            change: change.into(),
            trend,
            description: description.into(),
        }
    }
}

/// Computes the dashboard overview cards from current store contents.
///
/// Values are live counts; the week-over-week change figures are static
/// until a history feed exists.
pub fn dashboard_cards(store: &MemoryStore) -> Vec<StatCard> {
    let members = store.snapshot(member::ENTITY_NAME);
    let online_members = count_matching(&members, "status", "Online");

    let alerts = store.snapshot(alert::ENTITY_NAME);
    let active_alerts = count_matching(&alerts, "status", "Active");

    let reports = store.snapshot(report::ENTITY_NAME);
    let pending_reports = count_matching(&reports, "status", "Under Review");

    let projects = store.snapshot(project::ENTITY_NAME);
    let active_projects = count_matching(&projects, "status", "Active");

    let nodes = store.snapshot(mesh::ENTITY_NAME);
    let online_nodes = count_matching(&nodes, "status", "Online");

    vec![
        StatCard::new(
            "Registered Members",
            members.len().to_string(),
            "+12%",
            Trend::Up,
            format!("{online_members} currently online"),
        ),
        StatCard::new(
            "Active Alerts",
            active_alerts.to_string(),
            "+23%",
            Trend::Up,
            "Flood and drought warnings live now",
        ),
        StatCard::new(
            "Reports Awaiting Review",
            pending_reports.to_string(),
            "-5%",
            Trend::Down,
            "Community hazard reports in the queue",
        ),
        StatCard::new(
            "Active Projects",
            active_projects.to_string(),
            "+8%",
            Trend::Up,
            "Eco-restoration initiatives underway",
        ),
        StatCard::new(
            "Mesh Nodes Online",
            format!("{online_nodes}/{}", nodes.len()),
            "0%",
            Trend::Flat,
            "Connectivity across the relay network",
        ),
    ]
}

fn count_matching(records: &[Record], field: &str, value: &str) -> usize {
    records
        .iter()
        .filter(|record| {
            record
                .get(field)
                .is_some_and(|field_value| field_value.matches_filter(value))
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed_store;

    #[test]
    fn test_dashboard_cards_reflect_seed_counts() {
        let store = seed_store();
        let cards = dashboard_cards(&store);

        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].title, "Registered Members");
        assert_eq!(cards[0].value, "5");
        // Three seed alerts are Active: two flood, one drought.
        assert_eq!(cards[1].value, "3");
        assert_eq!(cards[4].value, "3/5");
    }
}
