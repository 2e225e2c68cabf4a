//! Rendering for the admin console

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs};

use jihadharini_lib::stats::{StatCard, Trend};
use jihadharini_lib::view::SortDirection;

use crate::app::{App, InputMode, Tab, TablePane};

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_tabs(frame, chunks[0], app);

    let mode = app.mode;
    if app.active_tab() == Tab::Dashboard {
        draw_dashboard(frame, chunks[1], &app.cards);
    } else if let Some(pane) = app.active_pane_mut() {
        draw_pane(frame, chunks[1], pane, mode);
    }

    draw_hints(frame, chunks[2], mode);
}

fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Tab::ALL.iter().map(|tab| Line::from(tab.title())).collect();
    let tabs = Tabs::new(titles)
        .select(app.active_index())
        .block(Block::default().borders(Borders::ALL).title("Jihadharini"))
        .highlight_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_dashboard(frame: &mut Frame, area: Rect, cards: &[StatCard]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Fill(1); cards.len().max(1)])
        .split(chunks[0]);

    for (card, cell) in cards.iter().zip(columns.iter()) {
        let trend_style = match card.trend {
            Trend::Up => Style::default().fg(Color::Green),
            Trend::Down => Style::default().fg(Color::Yellow),
            Trend::Flat => Style::default().fg(Color::DarkGray),
        };
        let lines = vec![
            Line::from(Span::styled(
                card.value.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} {}", trend_marker(card.trend), card.change),
                trend_style,
            )),
            Line::from(Span::styled(
                card.description.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(card.title.clone()),
        );
        frame.render_widget(paragraph, *cell);
    }
}

fn draw_pane(frame: &mut Frame, area: Rect, pane: &mut TablePane, mode: InputMode) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    draw_search_bar(frame, chunks[0], pane, mode);

    let view = pane.spec.compute(&pane.records, &mut pane.state);
    let page = view.page();
    let columns = pane.spec.columns();

    let header = Row::new(columns.iter().enumerate().map(|(index, column)| {
        let marker = match pane.state.sort() {
            Some((key, SortDirection::Ascending)) if key == column.key() => " ▲",
            Some((key, SortDirection::Descending)) if key == column.key() => " ▼",
            _ => "",
        };
        Cell::from(format!("{} {}{marker}", index + 1, column.label())).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    }))
    .height(1);

    let rows: Vec<Row> = view
        .rows()
        .iter()
        .map(|record| Row::new(columns.iter().map(|column| Cell::from(column.cell_text(record)))))
        .collect();

    let widths = vec![Constraint::Fill(1); columns.len().max(1)];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(pane.title),
    );
    frame.render_widget(table, chunks[1]);

    let footer = Line::from(vec![
        Span::raw(page.summary()),
        Span::styled(
            format!("  •  Page {} of {}", page.current_page(), page.total_pages()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(footer), chunks[2]);
}

fn draw_search_bar(frame: &mut Frame, area: Rect, pane: &TablePane, mode: InputMode) {
    let term = pane.state.search_term();
    let editing = mode == InputMode::Search;

    let search_span = if term.is_empty() && !editing {
        Span::styled(
            pane.spec.search_placeholder().to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        let cursor = if editing { "▏" } else { "" };
        Span::raw(format!("{term}{cursor}"))
    };

    let line = Line::from(vec![
        search_span,
        Span::styled(
            format!("    Filter: {}", pane.filter_label()),
            Style::default().fg(Color::Cyan),
        ),
    ]);

    let title = if editing { "Search (editing)" } else { "Search" };
    let paragraph =
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}

fn draw_hints(frame: &mut Frame, area: Rect, mode: InputMode) {
    let hints = match mode {
        InputMode::Search => "type to search  •  Enter/Esc done",
        InputMode::Normal => {
            "Tab switch view  •  / search  •  f filter  •  1-9 sort column  •  ←/→ page  •  g/G first/last  •  q quit"
        }
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(paragraph, area);
}

fn trend_marker(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "▲",
        Trend::Down => "▼",
        Trend::Flat => "–",
    }
}
