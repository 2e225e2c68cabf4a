//! Eco-restoration projects and community suggestions

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::date;
use crate::model::Record;
use crate::model::Value;
use crate::model::schema::AttributeType;
use crate::model::schema::EntitySchema;
use crate::view::Column;
use crate::view::FilterOption;

/// Logical entity name for restoration projects.
pub const ENTITY_NAME: &str = "restoration_projects";

/// Logical entity name for community-suggested restoration ideas.
pub const IDEAS_ENTITY_NAME: &str = "restoration_ideas";

/// The kind of restoration work a project does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectKind {
    MangrovePlanting,
    TreePlanting,
    Cleanup,
    Conservation,
}

impl ProjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKind::MangrovePlanting => "Mangrove Planting",
            ProjectKind::TreePlanting => "Tree Planting",
            ProjectKind::Cleanup => "Cleanup",
            ProjectKind::Conservation => "Conservation",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planning,
    Active,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Active => "Active",
            ProjectStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected community impact of a suggested idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactRating {
    Low,
    Medium,
    High,
}

impl ImpactRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactRating::Low => "Low",
            ImpactRating::Medium => "Medium",
            ImpactRating::High => "High",
        }
    }
}

impl fmt::Display for ImpactRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One eco-restoration initiative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestorationProject {
    pub id: Uuid,
    pub title: String,
    pub kind: ProjectKind,
    pub region: String,
    pub status: ProjectStatus,
    /// Completion percentage, 0-100.
    pub progress: i32,
    /// Target count (trees, sites, hectares) for the project.
    pub target: i32,
    pub completed: i32,
    pub volunteers: i32,
    pub leader: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl RestorationProject {
    /// Declared schema for project records.
    pub fn schema() -> EntitySchema {
        EntitySchema::new(ENTITY_NAME)
            .with_attribute("title", "Initiative", AttributeType::String)
            .with_attribute("kind", "Type", AttributeType::String)
            .with_attribute("region", "Region", AttributeType::String)
            .with_attribute("status", "Status", AttributeType::String)
            .with_attribute("progress", "Progress", AttributeType::Int)
            .with_attribute("target", "Target", AttributeType::Int)
            .with_attribute("completed", "Completed", AttributeType::Int)
            .with_attribute("volunteers", "Volunteers", AttributeType::Int)
            .with_attribute("leader", "Leader", AttributeType::String)
            .with_attribute("start_date", "Start", AttributeType::DateTime)
            .with_attribute("end_date", "End", AttributeType::DateTime)
    }

    /// Converts the project into a display record.
    pub fn to_record(&self) -> Record {
        Record::with_id(ENTITY_NAME, self.id)
            .set("title", self.title.as_str())
            .set("kind", self.kind.as_str())
            .set("region", self.region.as_str())
            .set("status", self.status.as_str())
            .set("progress", self.progress)
            .set("target", self.target)
            .set("completed", self.completed)
            .set("volunteers", self.volunteers)
            .set("leader", self.leader.as_str())
            .set("start_date", self.start_date)
            .set("end_date", self.end_date)
    }

    /// Columns for the initiatives table.
    pub fn columns() -> Vec<Column> {
        vec![
            Column::new("title", "Initiative").sortable(),
            Column::new("kind", "Type").sortable(),
            Column::new("region", "Region").sortable(),
            Column::new("status", "Status").sortable(),
            Column::new("progress", "Progress")
                .sortable()
                .with_render(progress_cell),
            Column::new("volunteers", "Volunteers").sortable(),
            Column::new("leader", "Leader").sortable(),
        ]
    }

    /// Status filter options for the initiatives table.
    pub fn filter_options() -> Vec<FilterOption> {
        vec![
            FilterOption::new("Planning", ProjectStatus::Planning.as_str()),
            FilterOption::new("Active", ProjectStatus::Active.as_str()),
            FilterOption::new("Completed", ProjectStatus::Completed.as_str()),
        ]
    }

    /// Seed projects shown until live data arrives.
    pub fn seed() -> Vec<RestorationProject> {
        vec![
            RestorationProject {
                id: Uuid::from_u128(0xD1),
                title: "Mangrove Restoration - Lake Victoria".to_string(),
                kind: ProjectKind::MangrovePlanting,
                region: "Lake Victoria Basin".to_string(),
                status: ProjectStatus::Active,
                progress: 68,
                target: 1000,
                completed: 680,
                volunteers: 45,
                leader: "Sarah Otieno".to_string(),
                start_date: date(2024, 1, 1),
                end_date: date(2024, 6, 30),
            },
            RestorationProject {
                id: Uuid::from_u128(0xD2),
                title: "Community Tree Planting".to_string(),
                kind: ProjectKind::TreePlanting,
                region: "Kisumu County".to_string(),
                status: ProjectStatus::Active,
                progress: 82,
                target: 500,
                completed: 410,
                volunteers: 28,
                leader: "James Wanjiku".to_string(),
                start_date: date(2024, 2, 1),
                end_date: date(2024, 4, 30),
            },
            RestorationProject {
                id: Uuid::from_u128(0xD3),
                title: "Riverbank Cleanup - Nyanza".to_string(),
                kind: ProjectKind::Cleanup,
                region: "Nyanza Region".to_string(),
                status: ProjectStatus::Completed,
                progress: 100,
                target: 5,
                completed: 5,
                volunteers: 67,
                leader: "Mary Akinyi".to_string(),
                start_date: date(2024, 1, 15),
                end_date: date(2024, 1, 31),
            },
            RestorationProject {
                id: Uuid::from_u128(0xD4),
                title: "Wetland Conservation".to_string(),
                kind: ProjectKind::Conservation,
                region: "Migori County".to_string(),
                status: ProjectStatus::Planning,
                progress: 15,
                target: 200,
                completed: 30,
                volunteers: 12,
                leader: "Peter Ochieng".to_string(),
                start_date: date(2024, 3, 1),
                end_date: date(2024, 8, 31),
            },
        ]
    }
}

/// One community-suggested restoration idea awaiting adoption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestorationIdea {
    pub id: Uuid,
    pub title: String,
    pub region: String,
    pub impact: ImpactRating,
    pub description: String,
    /// Estimated cost in USD.
    pub estimated_cost: Decimal,
    /// Expected duration, e.g. "6 months".
    pub duration: String,
    pub benefits: Vec<String>,
}

impl RestorationIdea {
    /// Converts the idea into a display record.
    pub fn to_record(&self) -> Record {
        Record::with_id(IDEAS_ENTITY_NAME, self.id)
            .set("title", self.title.as_str())
            .set("region", self.region.as_str())
            .set("impact", self.impact.as_str())
            .set("description", self.description.as_str())
            .set("estimated_cost", self.estimated_cost)
            .set("duration", self.duration.as_str())
            .set("benefits", self.benefits.clone())
    }

    /// Seed suggestions shown on the restoration page.
    pub fn seed() -> Vec<RestorationIdea> {
        vec![
            RestorationIdea {
                id: Uuid::from_u128(0xE1),
                title: "Bamboo Cultivation Program".to_string(),
                region: "Siaya County".to_string(),
                impact: ImpactRating::High,
                description: "Fast-growing bamboo to prevent soil erosion and provide sustainable income"
                    .to_string(),
                estimated_cost: Decimal::new(2500, 0),
                duration: "6 months".to_string(),
                benefits: vec![
                    "Erosion Control".to_string(),
                    "Carbon Sequestration".to_string(),
                    "Income Generation".to_string(),
                ],
            },
            RestorationIdea {
                id: Uuid::from_u128(0xE2),
                title: "Urban Green Corridors".to_string(),
                region: "Kisumu Central".to_string(),
                impact: ImpactRating::Medium,
                description: "Create green pathways connecting parks and reducing urban heat"
                    .to_string(),
                estimated_cost: Decimal::new(4200, 0),
                duration: "8 months".to_string(),
                benefits: vec![
                    "Air Quality".to_string(),
                    "Urban Cooling".to_string(),
                    "Biodiversity".to_string(),
                ],
            },
            RestorationIdea {
                id: Uuid::from_u128(0xE3),
                title: "Drip Irrigation Demonstration".to_string(),
                region: "Nyanza Region".to_string(),
                impact: ImpactRating::High,
                description: "Water-efficient irrigation to support climate-resilient agriculture"
                    .to_string(),
                estimated_cost: Decimal::new(1800, 0),
                duration: "4 months".to_string(),
                benefits: vec![
                    "Water Conservation".to_string(),
                    "Crop Yield".to_string(),
                    "Drought Resilience".to_string(),
                ],
            },
        ]
    }
}

/// Renders the progress cell as "68% (680/1000)".
fn progress_cell(value: &Value, record: &Record) -> String {
    let percent = value.display_text().unwrap_or_default();
    match (
        record.get("completed").and_then(Value::display_text),
        record.get("target").and_then(Value::display_text),
    ) {
        (Some(completed), Some(target)) => format!("{percent}% ({completed}/{target})"),
        _ => format!("{percent}%"),
    }
}
