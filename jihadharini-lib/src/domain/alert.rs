//! Climate alerts (flood and drought early warnings)

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::hours_ago;
use super::percent_cell;
use crate::model::Record;
use crate::model::schema::AttributeType;
use crate::model::schema::EntitySchema;
use crate::view::Column;
use crate::view::FilterOption;

/// Logical entity name for climate alerts.
pub const ENTITY_NAME: &str = "climate_alerts";

/// The hazard an alert warns about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    Flood,
    Drought,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Flood => "flood",
            AlertKind::Drought => "drought",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert severity scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertSeverity {
    Low,
    Moderate,
    High,
    Extreme,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Low => "Low",
            AlertSeverity::Moderate => "Moderate",
            AlertSeverity::High => "High",
            AlertSeverity::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    Active,
    Monitoring,
    Resolved,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Active => "Active",
            AlertStatus::Monitoring => "Monitoring",
            AlertStatus::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One flood or drought early warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateAlert {
    pub id: Uuid,
    pub title: String,
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub status: AlertStatus,
    pub region: String,
    /// What raised the alert: weather API, sensor network, manual report.
    pub trigger_source: String,
    pub issued_at: DateTime<Utc>,
    /// Human-readable validity window, e.g. "Next 12 hours".
    pub valid_for: String,
    /// Percent of targeted devices that confirmed delivery.
    pub delivery_success: i32,
    /// Percent of deliveries confirmed over the peer-to-peer mesh.
    pub peer_confirmations: i32,
    pub affected_regions: Vec<String>,
}

impl ClimateAlert {
    /// Declared schema for alert records.
    pub fn schema() -> EntitySchema {
        EntitySchema::new(ENTITY_NAME)
            .with_attribute("title", "Alert Title", AttributeType::String)
            .with_attribute("kind", "Type", AttributeType::String)
            .with_attribute("severity", "Severity", AttributeType::String)
            .with_attribute("status", "Status", AttributeType::String)
            .with_attribute("region", "Region", AttributeType::String)
            .with_attribute("trigger_source", "Trigger Source", AttributeType::String)
            .with_attribute("issued_at", "Issued", AttributeType::DateTime)
            .with_attribute("valid_for", "Duration", AttributeType::String)
            .with_attribute("delivery_success", "Delivery", AttributeType::Int)
            .with_attribute("peer_confirmations", "P2P Confirmed", AttributeType::Int)
            .with_attribute("affected_regions", "Affected Regions", AttributeType::Tags)
    }

    /// Converts the alert into a display record.
    pub fn to_record(&self) -> Record {
        Record::with_id(ENTITY_NAME, self.id)
            .set("title", self.title.as_str())
            .set("kind", self.kind.as_str())
            .set("severity", self.severity.as_str())
            .set("status", self.status.as_str())
            .set("region", self.region.as_str())
            .set("trigger_source", self.trigger_source.as_str())
            .set("issued_at", self.issued_at)
            .set("valid_for", self.valid_for.as_str())
            .set("delivery_success", self.delivery_success)
            .set("peer_confirmations", self.peer_confirmations)
            .set("affected_regions", self.affected_regions.clone())
    }

    /// Columns for the alert management tables.
    pub fn columns() -> Vec<Column> {
        vec![
            Column::new("title", "Alert Title").sortable(),
            Column::new("severity", "Severity").sortable(),
            Column::new("region", "Region").sortable(),
            Column::new("status", "Status").sortable(),
            Column::new("trigger_source", "Trigger Source"),
            Column::new("issued_at", "Issued").sortable(),
            Column::new("valid_for", "Duration"),
            Column::new("delivery_success", "Delivery")
                .sortable()
                .with_render(percent_cell),
        ]
    }

    /// Severity filter options for the alert tables.
    pub fn filter_options() -> Vec<FilterOption> {
        vec![
            FilterOption::new("Low", AlertSeverity::Low.as_str()),
            FilterOption::new("Moderate", AlertSeverity::Moderate.as_str()),
            FilterOption::new("High", AlertSeverity::High.as_str()),
            FilterOption::new("Extreme", AlertSeverity::Extreme.as_str()),
        ]
    }

    /// Seed alerts shown until live data arrives.
    pub fn seed() -> Vec<ClimateAlert> {
        vec![
            ClimateAlert {
                id: Uuid::from_u128(0xA1),
                title: "Severe Flood Warning - Kisumu".to_string(),
                kind: AlertKind::Flood,
                severity: AlertSeverity::High,
                status: AlertStatus::Active,
                region: "Kisumu County".to_string(),
                trigger_source: "Weather API".to_string(),
                issued_at: hours_ago(2),
                valid_for: "Next 12 hours".to_string(),
                delivery_success: 94,
                peer_confirmations: 87,
                affected_regions: vec!["Kisumu County".to_string(), "Kisumu Central".to_string()],
            },
            ClimateAlert {
                id: Uuid::from_u128(0xA2),
                title: "Heavy Rainfall Alert - Nyanza".to_string(),
                kind: AlertKind::Flood,
                severity: AlertSeverity::Moderate,
                status: AlertStatus::Active,
                region: "Nyanza Region".to_string(),
                trigger_source: "Sensor Network".to_string(),
                issued_at: hours_ago(4),
                valid_for: "Next 6 hours".to_string(),
                delivery_success: 98,
                peer_confirmations: 92,
                affected_regions: vec!["Nyanza Region".to_string()],
            },
            ClimateAlert {
                id: Uuid::from_u128(0xA3),
                title: "Water Level Rising - Lake Victoria".to_string(),
                kind: AlertKind::Flood,
                severity: AlertSeverity::Low,
                status: AlertStatus::Monitoring,
                region: "Lake Victoria Basin".to_string(),
                trigger_source: "Manual Report".to_string(),
                issued_at: hours_ago(6),
                valid_for: "Next 24 hours".to_string(),
                delivery_success: 89,
                peer_confirmations: 78,
                affected_regions: vec!["Lake Victoria Basin".to_string()],
            },
            ClimateAlert {
                id: Uuid::from_u128(0xA4),
                title: "Prolonged Dry Spell - Migori".to_string(),
                kind: AlertKind::Drought,
                severity: AlertSeverity::Extreme,
                status: AlertStatus::Active,
                region: "Migori County".to_string(),
                trigger_source: "Satellite Index".to_string(),
                issued_at: hours_ago(12),
                valid_for: "Next 14 days".to_string(),
                delivery_success: 91,
                peer_confirmations: 83,
                affected_regions: vec!["Migori County".to_string(), "Rural Migori".to_string()],
            },
            ClimateAlert {
                id: Uuid::from_u128(0xA5),
                title: "Crop Stress Advisory - Siaya".to_string(),
                kind: AlertKind::Drought,
                severity: AlertSeverity::Moderate,
                status: AlertStatus::Monitoring,
                region: "Siaya County".to_string(),
                trigger_source: "Sensor Network".to_string(),
                issued_at: hours_ago(26),
                valid_for: "Next 7 days".to_string(),
                delivery_success: 96,
                peer_confirmations: 88,
                affected_regions: vec!["Siaya County".to_string()],
            },
            ClimateAlert {
                id: Uuid::from_u128(0xA6),
                title: "Water Rationing Notice - Kisumu".to_string(),
                kind: AlertKind::Drought,
                severity: AlertSeverity::High,
                status: AlertStatus::Resolved,
                region: "Kisumu County".to_string(),
                trigger_source: "Manual Report".to_string(),
                issued_at: hours_ago(48),
                valid_for: "Expired".to_string(),
                delivery_success: 99,
                peer_confirmations: 95,
                affected_regions: vec!["Kisumu County".to_string()],
            },
        ]
    }
}
