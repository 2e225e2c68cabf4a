//! Jihadharini domain entities and seed data
//!
//! Typed entities for the admin console's data views. Each module declares
//! its entity schema, converts into display [`Record`](crate::model::Record)s,
//! and ships the seed rows the console starts from.

pub mod alert;
pub mod member;
pub mod mesh;
pub mod project;
pub mod report;

use chrono::DateTime;
use chrono::Duration;
use chrono::TimeZone;
use chrono::Utc;

use crate::model::Record;
use crate::model::Value;
use crate::store::MemoryStore;

/// Loads every entity's seed rows into a fresh store.
pub fn seed_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.insert(
        alert::ENTITY_NAME,
        alert::ClimateAlert::seed()
            .iter()
            .map(alert::ClimateAlert::to_record)
            .collect(),
    );
    store.insert(
        report::ENTITY_NAME,
        report::CommunityReport::seed()
            .iter()
            .map(report::CommunityReport::to_record)
            .collect(),
    );
    store.insert(
        project::ENTITY_NAME,
        project::RestorationProject::seed()
            .iter()
            .map(project::RestorationProject::to_record)
            .collect(),
    );
    store.insert(
        project::IDEAS_ENTITY_NAME,
        project::RestorationIdea::seed()
            .iter()
            .map(project::RestorationIdea::to_record)
            .collect(),
    );
    store.insert(
        member::ENTITY_NAME,
        member::CommunityMember::seed()
            .iter()
            .map(member::CommunityMember::to_record)
            .collect(),
    );
    store.insert(
        mesh::ENTITY_NAME,
        mesh::MeshNode::seed()
            .iter()
            .map(mesh::MeshNode::to_record)
            .collect(),
    );
    store.insert(
        mesh::OFFLINE_ENTITY_NAME,
        mesh::OfflineCommunity::seed()
            .iter()
            .map(mesh::OfflineCommunity::to_record)
            .collect(),
    );
    store
}

/// Midnight UTC on a fixed calendar day.
pub(crate) fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// A timestamp the given number of hours before now.
pub(crate) fn hours_ago(hours: i64) -> DateTime<Utc> {
    Utc::now() - Duration::hours(hours)
}

/// Renders a numeric cell with a percent suffix.
pub(crate) fn percent_cell(value: &Value, _record: &Record) -> String {
    value
        .display_text()
        .map(|text| format!("{text}%"))
        .unwrap_or_default()
}
