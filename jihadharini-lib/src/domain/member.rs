//! Community members (platform users)

use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::model::Record;
use crate::model::Value;
use crate::model::schema::AttributeType;
use crate::model::schema::EntitySchema;
use crate::view::Column;
use crate::view::FilterOption;

/// Logical entity name for community members.
pub const ENTITY_NAME: &str = "community_members";

/// Platform role of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberRole {
    Admin,
    CommunityLeader,
    EnvironmentalOfficer,
    Volunteer,
    Resident,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Admin => "Admin",
            MemberRole::CommunityLeader => "Community Leader",
            MemberRole::EnvironmentalOfficer => "Environmental Officer",
            MemberRole::Volunteer => "Volunteer",
            MemberRole::Resident => "Resident",
        }
    }

    /// All roles, in the order the role filter offers them.
    pub fn all() -> [MemberRole; 5] {
        [
            MemberRole::Admin,
            MemberRole::CommunityLeader,
            MemberRole::EnvironmentalOfficer,
            MemberRole::Volunteer,
            MemberRole::Resident,
        ]
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the member is currently reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Presence {
    Online,
    Offline,
}

impl Presence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Presence::Online => "Online",
            Presence::Offline => "Offline",
        }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One registered community member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityMember {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub region: String,
    pub role: MemberRole,
    /// Relative last-seen text, e.g. "2 hours ago".
    pub last_online: String,
    /// Community trust rating on a 0.0-5.0 scale.
    pub trust_score: Decimal,
    pub presence: Presence,
    /// Month the account was created, e.g. "Jan 2024".
    pub joined: String,
}

impl CommunityMember {
    /// Declared schema for member records.
    pub fn schema() -> EntitySchema {
        EntitySchema::new(ENTITY_NAME)
            .with_attribute("name", "User", AttributeType::String)
            .with_attribute("email", "Email", AttributeType::String)
            .with_attribute("region", "Region", AttributeType::String)
            .with_attribute("role", "Role", AttributeType::String)
            .with_attribute("trust_score", "Trust Score", AttributeType::Decimal)
            .with_attribute("status", "Status", AttributeType::String)
            .with_attribute("last_online", "Last Online", AttributeType::String)
            .with_attribute("joined", "Joined", AttributeType::String)
    }

    /// Converts the member into a display record.
    pub fn to_record(&self) -> Record {
        Record::with_id(ENTITY_NAME, self.id)
            .set("name", self.name.as_str())
            .set("email", self.email.as_str())
            .set("region", self.region.as_str())
            .set("role", self.role.as_str())
            .set("trust_score", self.trust_score)
            .set("status", self.presence.as_str())
            .set("last_online", self.last_online.as_str())
            .set("joined", self.joined.as_str())
    }

    /// Columns for the user directory table.
    pub fn columns() -> Vec<Column> {
        vec![
            Column::new("name", "User").sortable().with_render(identity_cell),
            Column::new("region", "Region").sortable(),
            Column::new("role", "Role").sortable(),
            Column::new("trust_score", "Trust Score")
                .sortable()
                .with_render(score_cell),
            Column::new("status", "Status").sortable(),
            Column::new("last_online", "Last Online").sortable(),
        ]
    }

    /// Role filter options for the user directory.
    pub fn filter_options() -> Vec<FilterOption> {
        MemberRole::all()
            .iter()
            .map(|role| FilterOption::new(role.as_str(), role.as_str()))
            .collect()
    }

    /// Seed members shown until live data arrives.
    pub fn seed() -> Vec<CommunityMember> {
        vec![
            CommunityMember {
                id: Uuid::from_u128(0xB1),
                name: "Sarah Otieno".to_string(),
                email: "sarah.otieno@example.com".to_string(),
                region: "Kisumu".to_string(),
                role: MemberRole::CommunityLeader,
                last_online: "2 hours ago".to_string(),
                trust_score: Decimal::new(48, 1),
                presence: Presence::Online,
                joined: "Jan 2024".to_string(),
            },
            CommunityMember {
                id: Uuid::from_u128(0xB2),
                name: "James Wanjiku".to_string(),
                email: "james.w@example.com".to_string(),
                region: "Nyanza".to_string(),
                role: MemberRole::EnvironmentalOfficer,
                last_online: "5 minutes ago".to_string(),
                trust_score: Decimal::new(49, 1),
                presence: Presence::Online,
                joined: "Feb 2024".to_string(),
            },
            CommunityMember {
                id: Uuid::from_u128(0xB3),
                name: "Mary Akinyi".to_string(),
                email: "mary.akinyi@example.com".to_string(),
                region: "Migori".to_string(),
                role: MemberRole::Resident,
                last_online: "2 days ago".to_string(),
                trust_score: Decimal::new(42, 1),
                presence: Presence::Offline,
                joined: "Mar 2024".to_string(),
            },
            CommunityMember {
                id: Uuid::from_u128(0xB4),
                name: "Peter Ochieng".to_string(),
                email: "peter.o@example.com".to_string(),
                region: "Siaya".to_string(),
                role: MemberRole::Volunteer,
                last_online: "1 hour ago".to_string(),
                trust_score: Decimal::new(46, 1),
                presence: Presence::Online,
                joined: "Jan 2024".to_string(),
            },
            CommunityMember {
                id: Uuid::from_u128(0xB5),
                name: "Grace Mwangi".to_string(),
                email: "grace.m@example.com".to_string(),
                region: "Kisumu".to_string(),
                role: MemberRole::Admin,
                last_online: "Online now".to_string(),
                trust_score: Decimal::new(50, 1),
                presence: Presence::Online,
                joined: "Dec 2023".to_string(),
            },
        ]
    }
}

/// Renders the user column as "name <email>".
fn identity_cell(value: &Value, record: &Record) -> String {
    let name = value.display_text().unwrap_or_default();
    match record.get("email").and_then(Value::display_text) {
        Some(email) => format!("{name} <{email}>"),
        None => name,
    }
}

/// Renders the trust score with its rating mark.
fn score_cell(value: &Value, _record: &Record) -> String {
    value
        .display_text()
        .map(|text| format!("{text} ★"))
        .unwrap_or_default()
}
