//! Application state and key handling

use crossterm::event::{KeyCode, KeyEvent};
use log::debug;

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
use jihadharini_lib::model::Record;
use jihadharini_lib::stats::StatCard;
use jihadharini_lib::stats::dashboard_cards;
use jihadharini_lib::store::MemoryStore;
use jihadharini_lib::view::FILTER_ALL;
use jihadharini_lib::view::TableSpec;
use jihadharini_lib::view::ViewState;

/// Top-level admin views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    FloodAlerts,
    DroughtAlerts,
    Reports,
    Restoration,
    Users,
    Connectivity,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Dashboard,
        Tab::FloodAlerts,
        Tab::DroughtAlerts,
        Tab::Reports,
        Tab::Restoration,
        Tab::Users,
        Tab::Connectivity,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::FloodAlerts => "Flood Alerts",
            Tab::DroughtAlerts => "Drought Alerts",
            Tab::Reports => "Reports",
            Tab::Restoration => "Restoration",
            Tab::Users => "Users",
            Tab::Connectivity => "Connectivity",
        }
    }
}

/// Whether keystrokes edit the search box or drive the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// One data tab: its table spec, view state, and record snapshot.
pub struct TablePane {
    pub title: &'static str,
    pub spec: TableSpec,
    pub state: ViewState,
    pub records: Vec<Record>,
}

impl TablePane {
    fn new(title: &'static str, spec: TableSpec, records: Vec<Record>) -> Self {
        Self {
            title,
            spec,
            state: ViewState::new(),
            records,
        }
    }

    /// Advances the filter through "all" and the configured options,
    /// wrapping around.
    pub fn cycle_filter(&mut self) {
        if self.spec.filter_key().is_none() {
            return;
        }
        let mut values = vec![FILTER_ALL.to_string()];
        values.extend(
            self.spec
                .filter_options()
                .iter()
                .map(|option| option.value.clone()),
        );
        let index = values
            .iter()
            .position(|value| value == self.state.filter_value())
            .unwrap_or(0);
        let next = values[(index + 1) % values.len()].clone();
        debug!("{}: filter -> {next}", self.title);
        self.state.set_filter(next);
    }

    /// Display label for the active filter selection.
    pub fn filter_label(&self) -> String {
        let current = self.state.filter_value();
        if current == FILTER_ALL {
            return "All".to_string();
        }
        self.spec
            .filter_options()
            .iter()
            .find(|option| option.value == current)
            .map(|option| option.label.clone())
            .unwrap_or_else(|| current.to_string())
    }

    /// Toggles sort on the n-th displayed column.
    pub fn toggle_sort_at(&mut self, index: usize) {
        let Some(key) = self
            .spec
            .columns()
            .get(index)
            .map(|column| column.key().to_string())
        else {
            return;
        };
        self.spec.toggle_sort(&mut self.state, &key);
        debug!("{}: sort state {:?}", self.title, self.state.sort());
    }

    pub fn next_page(&mut self) {
        self.state.go_to_page(self.state.page() + 1);
    }

    pub fn previous_page(&mut self) {
        self.state.go_to_page(self.state.page().saturating_sub(1));
    }

    pub fn first_page(&mut self) {
        self.state.go_to_page(1);
    }

    pub fn last_page(&mut self) {
        let total = self
            .spec
            .compute(&self.records, &mut self.state)
            .page()
            .total_pages();
        self.state.go_to_page(total);
    }

    fn push_search_char(&mut self, c: char) {
        let mut term = self.state.search_term().to_string();
        term.push(c);
        self.state.set_search(term);
    }

    fn pop_search_char(&mut self) {
        let mut term = self.state.search_term().to_string();
        term.pop();
        self.state.set_search(term);
    }
}

/// The admin console: active tab, input mode, dashboard cards, and one
/// pane per data tab.
pub struct App {
    active: usize,
    pub mode: InputMode,
    pub cards: Vec<StatCard>,
    panes: Vec<TablePane>,
    pub should_quit: bool,
}

impl App {
    /// Builds the console from a seeded store: one snapshot per tab, taken
    /// once at startup.
    pub fn new(store: &MemoryStore) -> Self {
        let alerts = store.snapshot(alert::ENTITY_NAME);
        let floods = records_of_kind(&alerts, "flood");
        let droughts = records_of_kind(&alerts, "drought");

        let panes = vec![
            TablePane::new(
                "Flood Alerts Management",
                TableSpec::new(ClimateAlert::columns())
                    .with_search_placeholder("Search alerts by title or region...")
                    .with_filter("severity", ClimateAlert::filter_options()),
                floods,
            ),
            TablePane::new(
                "Drought Alerts Management",
                TableSpec::new(ClimateAlert::columns())
                    .with_search_placeholder("Search alerts by title or region...")
                    .with_filter("severity", ClimateAlert::filter_options()),
                droughts,
            ),
            TablePane::new(
                "Community Reports",
                TableSpec::new(CommunityReport::columns())
                    .with_search_placeholder("Search reports by title or location...")
                    .with_filter("status", CommunityReport::filter_options()),
                store.snapshot(report::ENTITY_NAME),
            ),
            TablePane::new(
                "Eco-Restoration Initiatives",
                TableSpec::new(RestorationProject::columns())
                    .with_search_placeholder("Search initiatives...")
                    .with_filter("status", RestorationProject::filter_options()),
                store.snapshot(project::ENTITY_NAME),
            ),
            TablePane::new(
                "User Directory",
                TableSpec::new(CommunityMember::columns())
                    .with_search_placeholder("Search users by name or email...")
                    .with_filter("role", CommunityMember::filter_options()),
                store.snapshot(member::ENTITY_NAME),
            ),
            TablePane::new(
                "Mesh Network Status",
                TableSpec::new(MeshNode::columns())
                    .with_search_placeholder("Search nodes by name or location...")
                    .with_filter("status", MeshNode::filter_options()),
                store.snapshot(mesh::ENTITY_NAME),
            ),
        ];

        Self {
            active: 0,
            mode: InputMode::Normal,
            cards: dashboard_cards(store),
            panes,
            should_quit: false,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_tab(&self) -> Tab {
        Tab::ALL[self.active]
    }

    /// The pane behind the active tab; `None` on the dashboard.
    pub fn active_pane_mut(&mut self) -> Option<&mut TablePane> {
        self.active
            .checked_sub(1)
            .and_then(|index| self.panes.get_mut(index))
    }

    pub fn next_tab(&mut self) {
        self.active = (self.active + 1) % Tab::ALL.len();
        self.mode = InputMode::Normal;
        debug!("switched to {}", self.active_tab().title());
    }

    pub fn previous_tab(&mut self) {
        self.active = (self.active + Tab::ALL.len() - 1) % Tab::ALL.len();
        self.mode = InputMode::Normal;
        debug!("switched to {}", self.active_tab().title());
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            InputMode::Search => self.handle_search_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.mode = InputMode::Normal,
            KeyCode::Backspace => {
                if let Some(pane) = self.active_pane_mut() {
                    pane.pop_search_char();
                }
            }
            KeyCode::Char(c) => {
                if let Some(pane) = self.active_pane_mut() {
                    pane.push_search_char(c);
                }
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.next_tab(),
            KeyCode::BackTab => self.previous_tab(),
            KeyCode::Char('/') => {
                if self.active_pane_mut().is_some() {
                    self.mode = InputMode::Search;
                }
            }
            KeyCode::Char('f') => {
                if let Some(pane) = self.active_pane_mut() {
                    pane.cycle_filter();
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pane) = self.active_pane_mut() {
                    let index = c as usize - '1' as usize;
                    pane.toggle_sort_at(index);
                }
            }
            KeyCode::Left | KeyCode::Char('[') => {
                if let Some(pane) = self.active_pane_mut() {
                    pane.previous_page();
                }
            }
            KeyCode::Right | KeyCode::Char(']') => {
                if let Some(pane) = self.active_pane_mut() {
                    pane.next_page();
                }
            }
            KeyCode::Char('g') => {
                if let Some(pane) = self.active_pane_mut() {
                    pane.first_page();
                }
            }
            KeyCode::Char('G') => {
                if let Some(pane) = self.active_pane_mut() {
                    pane.last_page();
                }
            }
            _ => {}
        }
    }
}

fn records_of_kind(alerts: &[Record], kind: &str) -> Vec<Record> {
    alerts
        .iter()
        .filter(|record| {
            record
                .get("kind")
                .is_some_and(|value| value.matches_filter(kind))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use jihadharini_lib::domain::seed_store;
    use jihadharini_lib::view::SortDirection;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let store = seed_store();
        let mut app = App::new(&store);

        assert_eq!(app.active_tab(), Tab::Dashboard);
        app.previous_tab();
        assert_eq!(app.active_tab(), Tab::Connectivity);
        app.next_tab();
        assert_eq!(app.active_tab(), Tab::Dashboard);
    }

    #[test]
    fn test_filter_cycle_wraps_through_all() {
        let store = seed_store();
        let mut app = App::new(&store);
        app.next_tab(); // Flood Alerts

        let pane = app.active_pane_mut().unwrap();
        let option_count = pane.spec.filter_options().len();
        assert_eq!(pane.filter_label(), "All");

        for _ in 0..option_count {
            pane.cycle_filter();
        }
        assert_ne!(pane.filter_label(), "All");
        pane.cycle_filter();
        assert_eq!(pane.filter_label(), "All");
    }

    #[test]
    fn test_search_mode_edits_the_active_pane() {
        let store = seed_store();
        let mut app = App::new(&store);
        app.next_tab();

        app.handle_key(press(KeyCode::Char('/')));
        assert_eq!(app.mode, InputMode::Search);
        app.handle_key(press(KeyCode::Char('k')));
        app.handle_key(press(KeyCode::Char('i')));
        app.handle_key(press(KeyCode::Backspace));
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.mode, InputMode::Normal);
        let pane = app.active_pane_mut().unwrap();
        assert_eq!(pane.state.search_term(), "k");
    }

    #[test]
    fn test_sort_keys_map_to_columns() {
        let store = seed_store();
        let mut app = App::new(&store);
        app.next_tab();

        app.handle_key(press(KeyCode::Char('1')));
        let pane = app.active_pane_mut().unwrap();
        assert_eq!(pane.state.sort(), Some(("title", SortDirection::Ascending)));

        // Out-of-range column digits are a no-op.
        app.handle_key(press(KeyCode::Char('9')));
        let pane = app.active_pane_mut().unwrap();
        assert_eq!(pane.state.sort(), Some(("title", SortDirection::Ascending)));
    }

    #[test]
    fn test_dashboard_has_no_pane() {
        let store = seed_store();
        let mut app = App::new(&store);
        assert!(app.active_pane_mut().is_none());

        // Search mode is unreachable from the dashboard.
        app.handle_key(press(KeyCode::Char('/')));
        assert_eq!(app.mode, InputMode::Normal);
    }
}
