//! Tests for the domain entities, seed data, and schema validation.

use jihadharini_lib::domain::alert;
use jihadharini_lib::domain::alert::ClimateAlert;
use jihadharini_lib::domain::member;
use jihadharini_lib::domain::member::CommunityMember;
use jihadharini_lib::domain::mesh;
use jihadharini_lib::domain::mesh::MeshNode;
use jihadharini_lib::domain::project;
use jihadharini_lib::domain::project::RestorationProject;
use jihadharini_lib::domain::report;
use jihadharini_lib::domain::report::CommunityReport;
use jihadharini_lib::domain::seed_store;
use jihadharini_lib::error::ViewError;
use jihadharini_lib::view::Column;
use jihadharini_lib::view::TableSpec;
use jihadharini_lib::view::ViewState;
use rust_decimal::Decimal;

#[test]
fn every_table_spec_validates_against_its_schema() {
    TableSpec::new(ClimateAlert::columns())
        .with_filter("severity", ClimateAlert::filter_options())
        .validate(&ClimateAlert::schema())
        .unwrap();

    TableSpec::new(CommunityReport::columns())
        .with_filter("status", CommunityReport::filter_options())
        .validate(&CommunityReport::schema())
        .unwrap();

    TableSpec::new(RestorationProject::columns())
        .with_filter("status", RestorationProject::filter_options())
        .validate(&RestorationProject::schema())
        .unwrap();

    TableSpec::new(CommunityMember::columns())
        .with_filter("role", CommunityMember::filter_options())
        .validate(&CommunityMember::schema())
        .unwrap();

    TableSpec::new(MeshNode::columns())
        .with_filter("status", MeshNode::filter_options())
        .validate(&MeshNode::schema())
        .unwrap();
}

#[test]
fn validation_rejects_undeclared_keys() {
    let spec = TableSpec::new(vec![Column::new("altitude", "Altitude")]);
    assert!(matches!(
        spec.validate(&MeshNode::schema()),
        Err(ViewError::UnknownColumn { .. })
    ));

    let spec = TableSpec::new(MeshNode::columns()).with_filter("county", vec![]);
    assert!(matches!(
        spec.validate(&MeshNode::schema()),
        Err(ViewError::UnknownFilterKey { .. })
    ));
}

#[test]
fn seed_store_holds_every_entity() {
    let store = seed_store();

    assert_eq!(store.count(alert::ENTITY_NAME), 6);
    assert_eq!(store.count(report::ENTITY_NAME), 5);
    assert_eq!(store.count(project::ENTITY_NAME), 4);
    assert_eq!(store.count(project::IDEAS_ENTITY_NAME), 3);
    assert_eq!(store.count(member::ENTITY_NAME), 5);
    assert_eq!(store.count(mesh::ENTITY_NAME), 5);
    assert_eq!(store.count(mesh::OFFLINE_ENTITY_NAME), 3);
    assert_eq!(store.len(), 7);
}

#[test]
fn alerts_split_into_flood_and_drought_views() {
    let store = seed_store();
    let alerts = store.snapshot(alert::ENTITY_NAME);

    let floods: Vec<_> = alerts
        .iter()
        .filter(|record| {
            record
                .get("kind")
                .is_some_and(|kind| kind.matches_filter("flood"))
        })
        .collect();
    let droughts = alerts.len() - floods.len();

    assert_eq!(floods.len(), 3);
    assert_eq!(droughts, 3);
}

#[test]
fn member_records_round_trip_typed_fields() {
    let member = &CommunityMember::seed()[0];
    let record = member.to_record();

    assert_eq!(record.entity_name(), member::ENTITY_NAME);
    assert_eq!(record.get_string("name").unwrap(), Some("Sarah Otieno"));
    assert_eq!(
        record.get_decimal("trust_score").unwrap(),
        Some(Decimal::new(48, 1))
    );
    assert_eq!(record.get_string("status").unwrap(), Some("Online"));
}

#[test]
fn user_directory_renders_identity_and_score_cells() {
    let records: Vec<_> = CommunityMember::seed()
        .iter()
        .map(CommunityMember::to_record)
        .collect();
    let spec = TableSpec::new(CommunityMember::columns());
    let mut state = ViewState::new();

    let view = spec.compute(&records, &mut state);
    let columns = spec.columns();

    assert_eq!(
        columns[0].cell_text(view.rows()[0]),
        "Sarah Otieno <sarah.otieno@example.com>"
    );
    assert_eq!(columns[3].cell_text(view.rows()[0]), "4.8 ★");
}

#[test]
fn report_table_filters_by_moderation_status() {
    let records: Vec<_> = CommunityReport::seed()
        .iter()
        .map(CommunityReport::to_record)
        .collect();
    let spec = TableSpec::new(CommunityReport::columns())
        .with_filter("status", CommunityReport::filter_options());
    let mut state = ViewState::new();

    state.set_filter("Under Review");
    let view = spec.compute(&records, &mut state);

    assert_eq!(view.page().total_filtered(), 2);
    for row in view.rows() {
        assert_eq!(row.get_string("status").unwrap(), Some("Under Review"));
    }
}
