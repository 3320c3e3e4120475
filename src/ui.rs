use crate::{
    app::{App, InputMode},
    catalog::{FOLDERS, QUOTA_BYTES},
    colors::*,
    entry::{EntryKind, FileEntry},
    utils::{format_relative, format_size, truncate_name},
    view::{Scope, ViewMode},
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph},
    Frame,
};
use std::time::SystemTime;

const GRID_CELL_WIDTH: u16 = 24;
const GRID_CELL_HEIGHT: u16 = 5;

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(26), // Sidebar
            Constraint::Min(0),     // Main column
        ])
        .split(f.area());

    let [sidebar_area, main_area] = *chunks else {
        return;
    };

    render_sidebar(f, app, sidebar_area);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(2), // Header: scope + search
            Constraint::Min(0),    // Listing
            Constraint::Length(1), // Footer
        ])
        .split(main_area);

    let [title_area, header_area, body_area, footer_area] = *main_chunks else {
        return;
    };

    render_title_bar(f, title_area);
    render_header(f, app, header_area);
    match app.view.mode {
        ViewMode::List => render_list_view(f, app, body_area),
        ViewMode::Grid => render_grid_view(f, app, body_area),
    }
    render_footer(f, app, footer_area);

    if app.show_help {
        render_help_overlay(f);
    }
}

fn render_title_bar(f: &mut Frame, area: Rect) {
    let version = env!("CARGO_PKG_VERSION");
    let width = area.width as usize;

    let title_len = 1 + 5 + 2 + version.len() + 8 + 1 + 10 + 1; // " samos vX.X.X (press ? for help)"
    let padding = width.saturating_sub(title_len);

    let title_bar = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled("samos", Style::default().fg(COLOR_HEADER_FG).add_modifier(Modifier::BOLD)),
        Span::raw(format!(" v{}    (press ", version)),
        Span::styled("?", Style::default().fg(COLOR_HEADER_FG).add_modifier(Modifier::BOLD)),
        Span::raw(" for help)"),
        Span::raw(" ".repeat(padding)),
    ]))
    .style(Style::default().fg(COLOR_HEADER_FG).bg(COLOR_HEADER_BG));
    f.render_widget(title_bar, area);
}

fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Navigation
            Constraint::Length(3), // Storage gauge
            Constraint::Length(1), // Account line
        ])
        .split(area);

    let [nav_area, gauge_area, account_area] = *chunks else {
        return;
    };

    let locations = [
        (Scope::MyFiles, "1"),
        (Scope::Shared, "2"),
        (Scope::Recent, "3"),
        (Scope::Starred, "4"),
        (Scope::Trash, "5"),
    ];

    let mut lines = vec![
        Line::from(Span::styled(
            " ☁ Samos Cloud",
            Style::default().fg(COLOR_SCOPE_TITLE).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "   Storage & Collaboration",
            Style::default().fg(COLOR_HELP_HINT),
        )),
        Line::from(""),
    ];

    for (scope, key) in locations {
        lines.push(nav_line(app, &scope, key, scope.label()));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Folders",
        Style::default().fg(COLOR_HELP_HINT).add_modifier(Modifier::BOLD),
    )));
    for (i, (name, path)) in FOLDERS.iter().enumerate() {
        let scope = Scope::Folder((*path).to_string());
        let key = (i + 6).to_string();
        lines.push(nav_line(app, &scope, &key, name));
    }

    let nav = Paragraph::new(lines)
        .block(Block::default().borders(Borders::RIGHT));
    f.render_widget(nav, nav_area);

    let used = app.catalog.used_bytes();
    let ratio = (used as f64 / QUOTA_BYTES as f64).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::TOP | Borders::RIGHT)
                .title(" Storage "),
        )
        .gauge_style(Style::default().fg(COLOR_SCOPE_TITLE))
        .ratio(ratio)
        .label(format!("{} of {}", format_size(used), format_size(QUOTA_BYTES)));
    f.render_widget(gauge, gauge_area);

    let account = Paragraph::new(Line::from(Span::styled(
        " Demo User · user@samos.uz",
        Style::default().fg(COLOR_HELP_HINT),
    )))
    .block(Block::default().borders(Borders::RIGHT));
    f.render_widget(account, account_area);
}

fn nav_line<'a>(app: &App, scope: &Scope, key: &str, label: &str) -> Line<'a> {
    let count = app.catalog.count(scope);
    let active = app.view.scope == *scope;
    let style = if active {
        Style::default().fg(COLOR_SIDEBAR_ACTIVE_FG).bg(COLOR_SIDEBAR_ACTIVE_BG)
    } else {
        Style::default()
    };
    let marker = if active { "▸" } else { " " };
    Line::from(vec![
        Span::styled(format!("{marker}{key} {label}"), style),
        Span::styled(format!("  {count}"), Style::default().fg(COLOR_BADGE)),
    ])
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let item_count = app.visible_len();
    let scope_line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.view.scope.label()),
            Style::default().fg(COLOR_SCOPE_TITLE).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("[{item_count} items]"), Style::default().fg(COLOR_BADGE)),
        Span::styled(
            format!("  {} view", app.view.mode.name()),
            Style::default().fg(COLOR_HELP_HINT),
        ),
    ]);

    let search_line = match (&app.input, app.view.search_query.is_empty()) {
        (InputMode::Search, _) => Line::from(vec![
            Span::raw(" Search: "),
            Span::styled(app.view.search_query.clone(), Style::default().fg(COLOR_SEARCH)),
            Span::styled("▏", Style::default().fg(COLOR_SEARCH)),
        ]),
        (_, false) => Line::from(vec![
            Span::raw(" Search: "),
            Span::styled(app.view.search_query.clone(), Style::default().fg(COLOR_SEARCH)),
        ]),
        (_, true) => Line::from(Span::styled(
            " Search files, folders... (press /)",
            Style::default().fg(COLOR_HELP_HINT),
        )),
    };

    let header = Paragraph::new(vec![scope_line, search_line]);
    f.render_widget(header, area);
}

fn render_list_view(f: &mut Frame, app: &mut App, area: Rect) {
    let now = SystemTime::now();
    let items: Vec<ListItem> = app
        .visible_entries()
        .iter()
        .map(|entry| ListItem::new(list_line(entry, now)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::TOP))
        .highlight_style(Style::default().bg(COLOR_HIGHLIGHT_BG).fg(COLOR_HIGHLIGHT_FG));

    f.render_stateful_widget(list, area, &mut app.state);
}

fn list_line<'a>(entry: &FileEntry, now: SystemTime) -> Line<'a> {
    let (glyph, glyph_color, size_str) = match entry.kind {
        EntryKind::Folder => ("▸", COLOR_FOLDER, String::new()),
        EntryKind::File { media, size } => {
            (media.glyph(), media_color(media), format_size(size))
        }
    };
    let star = if entry.starred { "★" } else { " " };
    let shared = if entry.shared { "[Shared]" } else { "" };
    let owner = entry
        .owner
        .as_deref()
        .map(|o| format!("  By {o}"))
        .unwrap_or_default();

    Line::from(vec![
        Span::styled(format!(" {glyph} "), Style::default().fg(glyph_color)),
        Span::styled(format!("{star} "), Style::default().fg(COLOR_STAR)),
        Span::raw(format!("{:<36}", entry.name)),
        Span::styled(format!("{:>10}", size_str), Style::default().fg(COLOR_SIZE)),
        Span::styled(
            format!("  {:<14}", format_relative(entry.modified, now)),
            Style::default().fg(COLOR_MODIFIED),
        ),
        Span::styled(format!("{shared}{owner}"), Style::default().fg(COLOR_BADGE)),
    ])
}

fn render_grid_view(f: &mut Frame, app: &mut App, area: Rect) {
    let columns = (area.width / GRID_CELL_WIDTH).max(1) as usize;
    app.grid_columns = columns;

    let entries = app.visible_entries();
    if entries.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            " Nothing here",
            Style::default().fg(COLOR_HELP_HINT),
        )))
        .block(Block::default().borders(Borders::TOP));
        f.render_widget(empty, area);
        return;
    }

    let selected = app.state.selected().unwrap_or(0);
    let visible_rows = (area.height / GRID_CELL_HEIGHT).max(1) as usize;
    let selected_row = selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows.saturating_sub(1));
    let now = SystemTime::now();

    // Card data is collected first so the entries borrow ends before the
    // frame renders.
    struct Card {
        index: usize,
        title: Line<'static>,
        name: String,
        detail: Line<'static>,
    }
    let cards: Vec<Card> = entries
        .iter()
        .enumerate()
        .skip(first_row * columns)
        .take(visible_rows * columns)
        .map(|(index, entry)| Card {
            index,
            title: card_title(entry),
            name: truncate_name(&entry.name, GRID_CELL_WIDTH as usize - 4),
            detail: card_detail(entry, now),
        })
        .collect();

    for (slot, card) in cards.into_iter().enumerate() {
        let row = slot / columns;
        let col = slot % columns;
        let cell = Rect {
            x: area.x + col as u16 * GRID_CELL_WIDTH,
            y: area.y + row as u16 * GRID_CELL_HEIGHT,
            width: GRID_CELL_WIDTH.min(area.width.saturating_sub(col as u16 * GRID_CELL_WIDTH)),
            height: GRID_CELL_HEIGHT
                .min(area.height.saturating_sub(row as u16 * GRID_CELL_HEIGHT)),
        };
        if cell.width < 4 || cell.height < 3 {
            continue;
        }

        let is_selected = card.index == selected && app.state.selected().is_some();
        let border_style = if is_selected {
            Style::default().fg(COLOR_HIGHLIGHT_BG).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_BADGE)
        };
        let block = Block::default().borders(Borders::ALL).border_style(border_style);
        let body = Paragraph::new(vec![
            card.title,
            Line::from(Span::raw(card.name)),
            card.detail,
        ])
        .block(block);
        f.render_widget(body, cell);
    }
}

fn card_title(entry: &FileEntry) -> Line<'static> {
    let (glyph, color) = match entry.kind {
        EntryKind::Folder => ("▸", COLOR_FOLDER),
        EntryKind::File { media, .. } => (media.glyph(), media_color(media)),
    };
    let mut spans = vec![Span::styled(glyph.to_string(), Style::default().fg(color))];
    if entry.starred {
        spans.push(Span::styled(" ★", Style::default().fg(COLOR_STAR)));
    }
    if entry.shared {
        spans.push(Span::styled(" [Shared]", Style::default().fg(COLOR_BADGE)));
    }
    Line::from(spans)
}

fn card_detail(entry: &FileEntry, now: SystemTime) -> Line<'static> {
    let detail = match entry.kind.size() {
        Some(size) => format!("{} · {}", format_size(size), format_relative(entry.modified, now)),
        None => format_relative(entry.modified, now),
    };
    Line::from(Span::styled(detail, Style::default().fg(COLOR_MODIFIED)))
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;
    let hints = match &app.input {
        InputMode::Browse => "/ search  n new folder  u upload  v view  s star  d delete  ? help",
        InputMode::Search => "type to filter  Enter keep  Esc clear",
        InputMode::NewFolder { .. } => "type a name  Enter create  Esc cancel",
    };
    let status = app.status_message.as_deref().unwrap_or("");
    let left = match &app.input {
        InputMode::NewFolder { buffer } => format!(" New folder: {buffer}▏"),
        _ => format!(" {hints}"),
    };
    let padding = width.saturating_sub(left.len() + status.len() + 2);

    let status_style = if app.status_is_error {
        Style::default().fg(COLOR_ERROR).bg(COLOR_HEADER_BG)
    } else {
        Style::default().fg(COLOR_HEADER_FG).bg(COLOR_HEADER_BG)
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::raw(left),
        Span::raw(" ".repeat(padding)),
        Span::styled(format!("{status} "), status_style),
    ]))
    .style(Style::default().fg(COLOR_HEADER_FG).bg(COLOR_HEADER_BG));
    f.render_widget(footer, area);
}

fn render_help_overlay(f: &mut Frame) {
    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled("  samos - Samos Cloud terminal browser", Style::default().fg(COLOR_HELP_TITLE).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled("  Navigation:", Style::default().fg(COLOR_HELP_HEADER).add_modifier(Modifier::BOLD))),
        Line::from("    j / ↓           Move down (one row in grid)"),
        Line::from("    k / ↑           Move up"),
        Line::from("    h / ← , l / →   Move across"),
        Line::from("    Ctrl+d / PgDn   Jump down 10 items"),
        Line::from("    Ctrl+u / PgUp   Jump up 10 items"),
        Line::from("    Home / End      First / last item"),
        Line::from("    Enter / o       Open folder or preview file"),
        Line::from("    Backspace / b   Back to previous location"),
        Line::from("    1-9             Jump to sidebar location"),
        Line::from(""),
        Line::from(Span::styled("  Actions:", Style::default().fg(COLOR_HELP_HEADER).add_modifier(Modifier::BOLD))),
        Line::from("    s               Star / unstar"),
        Line::from("    d / Del         Move to trash (delete in Trash)"),
        Line::from("    x               Download"),
        Line::from("    p               Preview"),
        Line::from("    S               Share"),
        Line::from("    c               Make a copy"),
        Line::from("    u               Upload demo batch here"),
        Line::from("    n               New folder"),
        Line::from(""),
        Line::from(Span::styled("  Display:", Style::default().fg(COLOR_HELP_HEADER).add_modifier(Modifier::BOLD))),
        Line::from("    v / Tab         Toggle grid / list view"),
        Line::from("    /               Search (Enter keeps, Esc clears)"),
        Line::from("    a / m / z       Sort by name / modified / size"),
        Line::from(""),
        Line::from(Span::styled("  Other:", Style::default().fg(COLOR_HELP_HEADER).add_modifier(Modifier::BOLD))),
        Line::from("    ?               Toggle this help"),
        Line::from("    q / Esc         Quit"),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", Style::default().fg(COLOR_HELP_HINT))),
        Line::from(""),
    ];

    let help_height = help_text.len() as u16 + 2;
    let help_width = 50;
    let area = f.area();
    let help_area = Rect {
        x: area.width.saturating_sub(help_width) / 2,
        y: area.height.saturating_sub(help_height) / 2,
        width: help_width.min(area.width),
        height: help_height.min(area.height),
    };

    f.render_widget(Clear, help_area);
    let help_block = Paragraph::new(help_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::default().bg(Color::Black)))
        .style(Style::default().fg(Color::White).bg(Color::Black));
    f.render_widget(help_block, help_area);
}
