//! Mesh network connectivity

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::percent_cell;
use crate::model::Record;
use crate::model::schema::AttributeType;
use crate::model::schema::EntitySchema;
use crate::view::Column;
use crate::view::FilterOption;

/// Logical entity name for mesh nodes.
pub const ENTITY_NAME: &str = "mesh_nodes";

/// Logical entity name for communities currently unreachable.
pub const OFFLINE_ENTITY_NAME: &str = "offline_communities";

/// Role of a node in the mesh topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Primary,
    Secondary,
    Community,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Primary => "Primary",
            NodeKind::Secondary => "Secondary",
            NodeKind::Community => "Community",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reachability state of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeStatus {
    Online,
    Offline,
    Degraded,
}

impl NodeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStatus::Online => "Online",
            NodeStatus::Offline => "Offline",
            NodeStatus::Degraded => "Degraded",
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of the community mesh network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshNode {
    pub id: Uuid,
    pub name: String,
    pub kind: NodeKind,
    pub status: NodeStatus,
    pub location: String,
    /// Number of peers currently connected.
    pub connections: i32,
    /// Uptime percentage over the reporting window.
    pub uptime: f64,
    /// Signal strength percentage; 0 when unreachable.
    pub signal: i32,
    /// Volume relayed over the reporting window, e.g. "2.4 GB".
    pub data_transferred: String,
    /// Relative last-contact text, e.g. "2 minutes ago".
    pub last_seen: String,
}

impl MeshNode {
    /// Declared schema for mesh node records.
    pub fn schema() -> EntitySchema {
        EntitySchema::new(ENTITY_NAME)
            .with_attribute("name", "Node", AttributeType::String)
            .with_attribute("kind", "Type", AttributeType::String)
            .with_attribute("status", "Status", AttributeType::String)
            .with_attribute("location", "Location", AttributeType::String)
            .with_attribute("connections", "Connections", AttributeType::Int)
            .with_attribute("uptime", "Uptime", AttributeType::Float)
            .with_attribute("signal", "Signal", AttributeType::Int)
            .with_attribute("data_transferred", "Data", AttributeType::String)
            .with_attribute("last_seen", "Last Seen", AttributeType::String)
    }

    /// Converts the node into a display record.
    pub fn to_record(&self) -> Record {
        Record::with_id(ENTITY_NAME, self.id)
            .set("name", self.name.as_str())
            .set("kind", self.kind.as_str())
            .set("status", self.status.as_str())
            .set("location", self.location.as_str())
            .set("connections", self.connections)
            .set("uptime", self.uptime)
            .set("signal", self.signal)
            .set("data_transferred", self.data_transferred.as_str())
            .set("last_seen", self.last_seen.as_str())
    }

    /// Columns for the mesh status table.
    pub fn columns() -> Vec<Column> {
        vec![
            Column::new("name", "Node").sortable(),
            Column::new("kind", "Type").sortable(),
            Column::new("status", "Status").sortable(),
            Column::new("location", "Location"),
            Column::new("connections", "Connections").sortable(),
            Column::new("uptime", "Uptime")
                .sortable()
                .with_render(percent_cell),
            Column::new("signal", "Signal")
                .sortable()
                .with_render(percent_cell),
            Column::new("last_seen", "Last Seen"),
        ]
    }

    /// Status filter options for the mesh status table.
    pub fn filter_options() -> Vec<FilterOption> {
        vec![
            FilterOption::new("Online", NodeStatus::Online.as_str()),
            FilterOption::new("Offline", NodeStatus::Offline.as_str()),
            FilterOption::new("Degraded", NodeStatus::Degraded.as_str()),
        ]
    }

    /// Seed nodes shown until live telemetry arrives.
    pub fn seed() -> Vec<MeshNode> {
        vec![
            MeshNode {
                id: Uuid::from_u128(0xF1),
                name: "Kisumu Central Hub".to_string(),
                kind: NodeKind::Primary,
                status: NodeStatus::Online,
                location: "Kisumu County".to_string(),
                connections: 15,
                uptime: 99.2,
                signal: 92,
                data_transferred: "2.4 GB".to_string(),
                last_seen: "2 minutes ago".to_string(),
            },
            MeshNode {
                id: Uuid::from_u128(0xF2),
                name: "Nyanza Bridge Node".to_string(),
                kind: NodeKind::Secondary,
                status: NodeStatus::Online,
                location: "Nyanza Region".to_string(),
                connections: 8,
                uptime: 97.8,
                signal: 87,
                data_transferred: "1.8 GB".to_string(),
                last_seen: "5 minutes ago".to_string(),
            },
            MeshNode {
                id: Uuid::from_u128(0xF3),
                name: "Migori Community Node".to_string(),
                kind: NodeKind::Community,
                status: NodeStatus::Offline,
                location: "Migori County".to_string(),
                connections: 0,
                uptime: 94.1,
                signal: 0,
                data_transferred: "1.2 GB".to_string(),
                last_seen: "2 hours ago".to_string(),
            },
            MeshNode {
                id: Uuid::from_u128(0xF4),
                name: "Siaya Village Node".to_string(),
                kind: NodeKind::Community,
                status: NodeStatus::Online,
                location: "Siaya County".to_string(),
                connections: 12,
                uptime: 98.5,
                signal: 89,
                data_transferred: "3.1 GB".to_string(),
                last_seen: "1 minute ago".to_string(),
            },
            MeshNode {
                id: Uuid::from_u128(0xF5),
                name: "Lake Victoria Station".to_string(),
                kind: NodeKind::Primary,
                status: NodeStatus::Degraded,
                location: "Lake Victoria".to_string(),
                connections: 6,
                uptime: 85.3,
                signal: 45,
                data_transferred: "890 MB".to_string(),
                last_seen: "15 minutes ago".to_string(),
            },
        ]
    }
}

/// A community whose mesh access is currently down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfflineCommunity {
    pub name: String,
    /// Relative last-online text, e.g. "2 hours ago".
    pub last_online: String,
    pub estimated_users: i32,
    pub priority: OutagePriority,
    pub reason: String,
}

/// How urgently an outage needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutagePriority {
    Low,
    Medium,
    High,
}

impl OutagePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutagePriority::Low => "Low",
            OutagePriority::Medium => "Medium",
            OutagePriority::High => "High",
        }
    }
}

impl fmt::Display for OutagePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OfflineCommunity {
    /// Converts the outage entry into a display record.
    pub fn to_record(&self) -> Record {
        Record::new(OFFLINE_ENTITY_NAME)
            .set("name", self.name.as_str())
            .set("last_online", self.last_online.as_str())
            .set("estimated_users", self.estimated_users)
            .set("priority", self.priority.as_str())
            .set("reason", self.reason.as_str())
    }

    /// Seed outage entries shown on the connectivity page.
    pub fn seed() -> Vec<OfflineCommunity> {
        vec![
            OfflineCommunity {
                name: "Rural Migori".to_string(),
                last_online: "2 hours ago".to_string(),
                estimated_users: 45,
                priority: OutagePriority::High,
                reason: "Hardware Failure".to_string(),
            },
            OfflineCommunity {
                name: "Remote Siaya".to_string(),
                last_online: "6 hours ago".to_string(),
                estimated_users: 23,
                priority: OutagePriority::Medium,
                reason: "Power Outage".to_string(),
            },
            OfflineCommunity {
                name: "Fishing Village".to_string(),
                last_online: "1 day ago".to_string(),
                estimated_users: 12,
                priority: OutagePriority::Low,
                reason: "Network Congestion".to_string(),
            },
        ]
    }
}
