//! Community hazard reports

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::date;
use crate::model::Record;
use crate::model::schema::AttributeType;
use crate::model::schema::EntitySchema;
use crate::view::Column;
use crate::view::FilterOption;

/// Logical entity name for community reports.
pub const ENTITY_NAME: &str = "community_reports";

/// What the report is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportCategory {
    Infrastructure,
    Environmental,
    Sanitation,
    Conservation,
    Safety,
}

impl ReportCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportCategory::Infrastructure => "Infrastructure",
            ReportCategory::Environmental => "Environmental",
            ReportCategory::Sanitation => "Sanitation",
            ReportCategory::Conservation => "Conservation",
            ReportCategory::Safety => "Safety",
        }
    }
}

impl fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moderation state of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    UnderReview,
    Approved,
    Rejected,
    Flagged,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::UnderReview => "Under Review",
            ReportStatus::Approved => "Approved",
            ReportStatus::Rejected => "Rejected",
            ReportStatus::Flagged => "Flagged",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Triage priority assigned during review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportPriority {
    Low,
    Medium,
    High,
}

impl ReportPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportPriority::Low => "Low",
            ReportPriority::Medium => "Medium",
            ReportPriority::High => "High",
        }
    }
}

impl fmt::Display for ReportPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One hazard report submitted from the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityReport {
    pub id: Uuid,
    pub title: String,
    pub category: ReportCategory,
    pub location: String,
    /// "lat, lon" pair as captured by the reporting device.
    pub coordinates: String,
    pub reporter: String,
    pub status: ReportStatus,
    pub priority: ReportPriority,
    pub submitted_at: DateTime<Utc>,
    pub description: String,
    pub has_photos: bool,
    pub flagged: bool,
}

impl CommunityReport {
    /// Declared schema for report records.
    pub fn schema() -> EntitySchema {
        EntitySchema::new(ENTITY_NAME)
            .with_attribute("title", "Report", AttributeType::String)
            .with_attribute("category", "Category", AttributeType::String)
            .with_attribute("location", "Location", AttributeType::String)
            .with_attribute("coordinates", "Coordinates", AttributeType::String)
            .with_attribute("reporter", "Reporter", AttributeType::String)
            .with_attribute("status", "Status", AttributeType::String)
            .with_attribute("priority", "Priority", AttributeType::String)
            .with_attribute("submitted_at", "Submitted", AttributeType::DateTime)
            .with_attribute("description", "Description", AttributeType::String)
            .with_attribute("has_photos", "Photos", AttributeType::Bool)
            .with_attribute("flagged", "Flagged", AttributeType::Bool)
    }

    /// Converts the report into a display record.
    pub fn to_record(&self) -> Record {
        Record::with_id(ENTITY_NAME, self.id)
            .set("title", self.title.as_str())
            .set("category", self.category.as_str())
            .set("location", self.location.as_str())
            .set("coordinates", self.coordinates.as_str())
            .set("reporter", self.reporter.as_str())
            .set("status", self.status.as_str())
            .set("priority", self.priority.as_str())
            .set("submitted_at", self.submitted_at)
            .set("description", self.description.as_str())
            .set("has_photos", self.has_photos)
            .set("flagged", self.flagged)
    }

    /// Columns for the report moderation table.
    pub fn columns() -> Vec<Column> {
        vec![
            Column::new("title", "Report").sortable(),
            Column::new("category", "Category").sortable(),
            Column::new("location", "Location"),
            Column::new("reporter", "Reporter").sortable(),
            Column::new("status", "Status").sortable(),
            Column::new("priority", "Priority").sortable(),
            Column::new("submitted_at", "Submitted").sortable(),
        ]
    }

    /// Status filter options for the moderation table.
    pub fn filter_options() -> Vec<FilterOption> {
        vec![
            FilterOption::new("Under Review", ReportStatus::UnderReview.as_str()),
            FilterOption::new("Approved", ReportStatus::Approved.as_str()),
            FilterOption::new("Rejected", ReportStatus::Rejected.as_str()),
            FilterOption::new("Flagged", ReportStatus::Flagged.as_str()),
        ]
    }

    /// Seed reports shown until live data arrives.
    pub fn seed() -> Vec<CommunityReport> {
        vec![
            CommunityReport {
                id: Uuid::from_u128(0xC1),
                title: "Blocked Drainage System".to_string(),
                category: ReportCategory::Infrastructure,
                location: "Kisumu Central".to_string(),
                coordinates: "-0.0917, 34.7680".to_string(),
                reporter: "Sarah Otieno".to_string(),
                status: ReportStatus::UnderReview,
                priority: ReportPriority::High,
                submitted_at: date(2024, 1, 15),
                description: "Multiple drainage channels blocked with debris causing water accumulation"
                    .to_string(),
                has_photos: true,
                flagged: false,
            },
            CommunityReport {
                id: Uuid::from_u128(0xC2),
                title: "Riverbank Erosion".to_string(),
                category: ReportCategory::Environmental,
                location: "Migori County".to_string(),
                coordinates: "-1.0634, 34.4736".to_string(),
                reporter: "James Wanjiku".to_string(),
                status: ReportStatus::Approved,
                priority: ReportPriority::Medium,
                submitted_at: date(2024, 1, 14),
                description: "Severe erosion threatening nearby homesteads during rainy season"
                    .to_string(),
                has_photos: true,
                flagged: false,
            },
            CommunityReport {
                id: Uuid::from_u128(0xC3),
                title: "Waste Accumulation".to_string(),
                category: ReportCategory::Sanitation,
                location: "Siaya Town".to_string(),
                coordinates: "0.0607, 34.2888".to_string(),
                reporter: "Mary Akinyi".to_string(),
                status: ReportStatus::Flagged,
                priority: ReportPriority::High,
                submitted_at: date(2024, 1, 13),
                description: "Large waste accumulation blocking water flow in residential area"
                    .to_string(),
                has_photos: false,
                flagged: true,
            },
            CommunityReport {
                id: Uuid::from_u128(0xC4),
                title: "Tree Planting Opportunity".to_string(),
                category: ReportCategory::Conservation,
                location: "Nyanza Region".to_string(),
                coordinates: "-0.4167, 34.5000".to_string(),
                reporter: "Peter Ochieng".to_string(),
                status: ReportStatus::Approved,
                priority: ReportPriority::Low,
                submitted_at: date(2024, 1, 12),
                description: "Identified suitable area for community tree planting initiative"
                    .to_string(),
                has_photos: true,
                flagged: false,
            },
            CommunityReport {
                id: Uuid::from_u128(0xC5),
                title: "Flood Risk Assessment".to_string(),
                category: ReportCategory::Safety,
                location: "Lake Victoria Shore".to_string(),
                coordinates: "-0.3471, 34.5553".to_string(),
                reporter: "Grace Mwangi".to_string(),
                status: ReportStatus::UnderReview,
                priority: ReportPriority::High,
                submitted_at: date(2024, 1, 11),
                description: "Community request for flood risk assessment in vulnerable area"
                    .to_string(),
                has_photos: true,
                flagged: false,
            },
        ]
    }
}
