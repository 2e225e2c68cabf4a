//! End-to-end tests for the tabular view pipeline.

use jihadharini_lib::model::Record;
use jihadharini_lib::view::Column;
use jihadharini_lib::view::FILTER_ALL;
use jihadharini_lib::view::FilterOption;
use jihadharini_lib::view::SortDirection;
use jihadharini_lib::view::TableSpec;
use jihadharini_lib::view::ViewState;

fn numbered_records(count: usize) -> Vec<Record> {
    (1..=count)
        .map(|n| {
            Record::new("items")
                .set("seq", n as i32)
                .set("name", format!("Item {n:02}"))
        })
        .collect()
}

fn people() -> Vec<Record> {
    let rows = [
        ("Sarah Otieno", "Community Leader", 4.8),
        ("James Wanjiku", "Environmental Officer", 4.2),
        ("Mary Akinyi", "Resident", 4.8),
        ("Grace Mwangi", "Admin", 5.0),
        ("Peter Ochieng", "Volunteer", 4.2),
    ];
    rows.iter()
        .map(|(name, role, score)| {
            Record::new("community_members")
                .set("name", *name)
                .set("role", *role)
                .set("trust_score", *score)
        })
        .collect()
}

fn people_spec() -> TableSpec {
    TableSpec::new(vec![
        Column::new("name", "User").sortable(),
        Column::new("role", "Role"),
        Column::new("trust_score", "Trust Score").sortable(),
    ])
    .with_filter(
        "role",
        vec![
            FilterOption::new("Admin", "Admin"),
            FilterOption::new("Resident", "Resident"),
        ],
    )
}

fn names(view_rows: &[&Record]) -> Vec<String> {
    view_rows
        .iter()
        .map(|record| record.get_string("name").unwrap().unwrap().to_string())
        .collect()
}

#[test]
fn first_page_of_unfiltered_records() {
    // Scenario A: 25 items, page size 10, no search/filter/sort.
    let records = numbered_records(25);
    let spec = TableSpec::new(vec![Column::new("name", "Name").sortable()]);
    let mut state = ViewState::new();

    let view = spec.compute(&records, &mut state);
    let page = view.page();

    assert_eq!(view.len(), 10);
    assert_eq!(page.current_page(), 1);
    assert_eq!(page.total_pages(), 3);
    assert_eq!(page.total_filtered(), 25);
    assert_eq!(page.range_start(), 1);
    assert_eq!(page.range_end(), 10);
    assert_eq!(
        view.rows()[0].get_string("name").unwrap(),
        Some("Item 01")
    );
}

#[test]
fn out_of_range_page_clamps_to_last() {
    // Scenario B: requesting page 5 of 3 lands on the last page.
    let records = numbered_records(25);
    let spec = TableSpec::new(vec![Column::new("name", "Name")]);
    let mut state = ViewState::new();

    state.go_to_page(5);
    let view = spec.compute(&records, &mut state);
    let page = view.page();

    assert_eq!(page.current_page(), 3);
    assert_eq!(state.page(), 3);
    assert_eq!(view.len(), 5);
    assert_eq!(page.range_start(), 21);
    assert_eq!(page.range_end(), 25);
    assert_eq!(
        view.rows()[0].get_string("name").unwrap(),
        Some("Item 21")
    );
}

#[test]
fn search_is_case_insensitive_substring_over_all_fields() {
    // Scenario C.
    let records = people();
    let spec = people_spec();
    let mut state = ViewState::new();

    state.set_search("otieno");
    let view = spec.compute(&records, &mut state);

    assert_eq!(names(view.rows()), vec!["Sarah Otieno"]);

    // Every excluded record really contains no match.
    let needle = "otieno";
    for record in &records {
        let matches = record.fields().values().any(|value| {
            value
                .display_text()
                .is_some_and(|text| text.to_lowercase().contains(needle))
        });
        let shown = view
            .rows()
            .iter()
            .any(|row| row.get_string("name").unwrap() == record.get_string("name").unwrap());
        assert_eq!(matches, shown);
    }
}

#[test]
fn search_matches_non_string_fields_via_display_text() {
    let records = numbered_records(25);
    let spec = TableSpec::new(vec![Column::new("seq", "Seq")]);
    let mut state = ViewState::new();

    state.set_search("17");
    let view = spec.compute(&records, &mut state);

    // "17" appears in seq 17 and in the zero-padded name "Item 17".
    assert_eq!(view.page().total_filtered(), 1);
    assert_eq!(view.rows()[0].get_int("seq").unwrap(), Some(17));
}

#[test]
fn disabled_search_ignores_the_term() {
    let records = people();
    let spec = people_spec().with_searchable(false);
    let mut state = ViewState::new();

    state.set_search("otieno");
    let view = spec.compute(&records, &mut state);

    assert_eq!(view.page().total_filtered(), 5);
}

#[test]
fn filter_selects_exact_string_matches_only() {
    // Scenario E: exactly one Admin among five members.
    let records = people();
    let spec = people_spec();
    let mut state = ViewState::new();

    state.set_filter("Admin");
    let view = spec.compute(&records, &mut state);

    assert_eq!(names(view.rows()), vec!["Grace Mwangi"]);

    // Resetting to "all" returns the full set unchanged, original order.
    state.set_filter(FILTER_ALL);
    let view = spec.compute(&records, &mut state);
    assert_eq!(view.page().total_filtered(), 5);
    assert_eq!(names(view.rows())[0], "Sarah Otieno");
}

#[test]
fn sort_cycle_ascending_descending_then_cleared() {
    // Scenario D: ties keep their input order in both directions, and the
    // third toggle restores input order.
    let records = people();
    let spec = people_spec();
    let mut state = ViewState::new();

    spec.toggle_sort(&mut state, "trust_score");
    assert_eq!(
        state.sort(),
        Some(("trust_score", SortDirection::Ascending))
    );
    let view = spec.compute(&records, &mut state);
    assert_eq!(
        names(view.rows()),
        vec![
            "James Wanjiku",
            "Peter Ochieng",
            "Sarah Otieno",
            "Mary Akinyi",
            "Grace Mwangi",
        ]
    );

    spec.toggle_sort(&mut state, "trust_score");
    assert_eq!(
        state.sort(),
        Some(("trust_score", SortDirection::Descending))
    );
    let view = spec.compute(&records, &mut state);
    assert_eq!(
        names(view.rows()),
        vec![
            "Grace Mwangi",
            "Sarah Otieno",
            "Mary Akinyi",
            "James Wanjiku",
            "Peter Ochieng",
        ]
    );

    spec.toggle_sort(&mut state, "trust_score");
    assert_eq!(state.sort(), None);
    let view = spec.compute(&records, &mut state);
    assert_eq!(
        names(view.rows()),
        vec![
            "Sarah Otieno",
            "James Wanjiku",
            "Mary Akinyi",
            "Grace Mwangi",
            "Peter Ochieng",
        ]
    );
}

#[test]
fn selecting_a_new_sort_column_resets_the_old_one() {
    let records = people();
    let spec = people_spec();
    let mut state = ViewState::new();

    spec.toggle_sort(&mut state, "trust_score");
    spec.toggle_sort(&mut state, "trust_score");
    spec.toggle_sort(&mut state, "name");

    assert_eq!(state.sort(), Some(("name", SortDirection::Ascending)));
}

#[test]
fn sort_toggle_is_a_noop_for_unknown_and_unsortable_columns() {
    let records = people();
    let spec = people_spec();
    let mut state = ViewState::new();

    spec.toggle_sort(&mut state, "does_not_exist");
    assert_eq!(state.sort(), None);

    // "role" is a real column but not sortable.
    spec.toggle_sort(&mut state, "role");
    assert_eq!(state.sort(), None);

    let view = spec.compute(&records, &mut state);
    assert_eq!(names(view.rows())[0], "Sarah Otieno");
}

#[test]
fn heterogeneous_sort_keys_stay_deterministic_without_panicking() {
    let records = vec![
        Record::new("items").set("name", "a").set("mixed", 3),
        Record::new("items").set("name", "b").set("mixed", "three"),
        Record::new("items").set("name", "c").set("mixed", 1),
        Record::new("items").set("name", "d"),
    ];
    let spec = TableSpec::new(vec![Column::new("mixed", "Mixed").sortable()]);
    let mut state = ViewState::new();

    spec.toggle_sort(&mut state, "mixed");
    let view = spec.compute(&records, &mut state);

    // Comparable values order naturally; the stray string and the record
    // missing the field sink to the end instead of crashing the sort.
    assert_eq!(view.page().total_filtered(), 4);
    assert_eq!(names(view.rows()), vec!["c", "a", "b", "d"]);
}

#[test]
fn search_shrink_clamps_a_stranded_page() {
    // A new search term does not reset the page to 1; the clamp brings a
    // now-out-of-range page back into the valid range.
    let records = numbered_records(25);
    let spec = TableSpec::new(vec![Column::new("name", "Name")]);
    let mut state = ViewState::new();

    state.go_to_page(3);
    spec.compute(&records, &mut state);
    assert_eq!(state.page(), 3);

    state.set_search("Item 0");
    let view = spec.compute(&records, &mut state);

    assert_eq!(view.page().total_filtered(), 9);
    assert_eq!(view.page().current_page(), 1);
    assert_eq!(state.page(), 1);
}

#[test]
fn empty_result_reports_no_results_on_page_one() {
    let records = people();
    let spec = people_spec();
    let mut state = ViewState::new();

    state.set_search("no such person");
    state.go_to_page(4);
    let view = spec.compute(&records, &mut state);
    let page = view.page();

    assert!(view.is_empty());
    assert_eq!(page.total_pages(), 1);
    assert_eq!(page.current_page(), 1);
    assert_eq!(page.range_start(), 0);
    assert_eq!(page.range_end(), 0);
    assert_eq!(page.summary(), "No results found");
}

#[test]
fn range_bounds_hold_across_operation_sequences() {
    let records = numbered_records(47);
    let spec = TableSpec::new(vec![Column::new("name", "Name").sortable()]);
    let mut state = ViewState::new();

    let steps: Vec<Box<dyn Fn(&TableSpec, &mut ViewState)>> = vec![
        Box::new(|_, state| state.go_to_page(2)),
        Box::new(|spec, state| spec.toggle_sort(state, "name")),
        Box::new(|_, state| state.set_search("Item 1")),
        Box::new(|_, state| state.go_to_page(99)),
        Box::new(|_, state| state.set_search("")),
        Box::new(|spec, state| spec.toggle_sort(state, "name")),
        Box::new(|_, state| state.go_to_page(5)),
    ];

    for step in steps {
        step(&spec, &mut state);
        let view = spec.compute(&records, &mut state);
        let page = view.page();

        assert!(page.current_page() >= 1);
        assert!(page.current_page() <= page.total_pages());
        assert_eq!(state.page(), page.current_page());
        if page.total_filtered() > 0 {
            assert!(page.range_start() >= 1);
            assert!(page.range_start() <= page.range_end());
            assert!(page.range_end() <= page.total_filtered());
        }
    }
}

#[test]
fn repeated_operations_are_idempotent() {
    let records = people();
    let spec = people_spec();

    let mut once = ViewState::new();
    once.set_search("kisumu");
    let mut twice = once.clone();
    twice.set_search("kisumu");
    assert_eq!(once, twice);

    spec.compute(&records, &mut once);
    spec.compute(&records, &mut twice);
    assert_eq!(once, twice);
}

#[test]
fn zero_page_size_falls_back_to_default() {
    let records = numbered_records(25);
    let spec = TableSpec::new(vec![Column::new("name", "Name")]).with_page_size(0);
    let mut state = ViewState::new();

    assert_eq!(spec.page_size(), 10);
    let view = spec.compute(&records, &mut state);
    assert_eq!(view.len(), 10);
    assert_eq!(view.page().total_pages(), 3);
}

#[test]
fn custom_renderers_and_defaults_produce_cell_text() {
    let spec = TableSpec::new(vec![
        Column::new("name", "Name"),
        Column::new("signal", "Signal").with_render(|value, _record| {
            value
                .display_text()
                .map(|text| format!("{text}%"))
                .unwrap_or_default()
        }),
        Column::new("absent", "Absent"),
    ]);
    let record = Record::new("mesh_nodes")
        .set("name", "Kisumu Central Hub")
        .set("signal", 92);

    let columns = spec.columns();
    assert_eq!(columns[0].cell_text(&record), "Kisumu Central Hub");
    assert_eq!(columns[1].cell_text(&record), "92%");
    assert_eq!(columns[2].cell_text(&record), "");
}
