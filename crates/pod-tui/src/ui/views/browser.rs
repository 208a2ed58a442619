use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use pod_core::{AgentListing, SessionState};

use crate::ui::app::GRID_COLUMNS;
use crate::ui::components::{sidebar::render_sidebar, stats_bar::render_stats_bar};
use crate::ui::format::{format_grouped, truncate_with_ellipsis};
use crate::ui::{theme, App, InputMode, LayoutMode};

const SIDEBAR_WIDTH: u16 = 26;
const CARD_HEIGHT: u16 = 7;

/// The catalog browser: header, stats bar, sidebar and the listing grid.
pub fn render_browser(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header: search + wallet
        Constraint::Length(3), // Global stats bar
        Constraint::Min(0),    // Sidebar + listings
        Constraint::Length(2), // Footer hints
    ])
    .split(area);

    render_header(f, app, chunks[0]);
    render_stats_bar(f, app, chunks[1]);

    if app.sidebar_open {
        let body = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(chunks[2]);
        render_sidebar(f, app, body[0]);
        render_listings(f, app, body[1]);
    } else {
        render_listings(f, app, chunks[2]);
    }

    render_footer(f, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::horizontal([
        Constraint::Length(12),
        Constraint::Min(20),
        Constraint::Length(24),
    ])
    .split(area);

    let logo = Paragraph::new(Line::from(Span::styled(
        "◒ 0rca Pod",
        Style::default()
            .fg(theme::ACCENT_MINT)
            .add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL).border_style(border(false)));
    f.render_widget(logo, chunks[0]);

    let searching = app.input_mode == InputMode::Search;
    let search_line = if app.descriptor.search.is_empty() && !searching {
        Line::from(Span::styled(
            "Search agents... (/)",
            Style::default().fg(theme::TEXT_DIM),
        ))
    } else {
        let mut spans = vec![Span::styled(
            app.descriptor.search.clone(),
            Style::default().fg(theme::TEXT_PRIMARY),
        )];
        if searching {
            spans.push(Span::styled("▌", Style::default().fg(theme::ACCENT_MINT)));
        }
        Line::from(spans)
    };
    let search = Paragraph::new(search_line)
        .block(Block::default().borders(Borders::ALL).border_style(border(searching)));
    f.render_widget(search, chunks[1]);

    render_wallet_button(f, app, chunks[2]);
}

fn render_wallet_button(f: &mut Frame, app: &App, area: Rect) {
    let (label, color) = match app.session.state() {
        SessionState::Disconnected => ("Connect Wallet (w)".to_string(), theme::ACCENT_MINT),
        SessionState::Connecting => ("Connecting...".to_string(), theme::TEXT_MUTED),
        SessionState::Connected { address } => (
            crate::ui::format::short_address(address),
            theme::ACCENT_LIME,
        ),
    };

    let button = Paragraph::new(Line::from(Span::styled(
        label,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL).border_style(border(false)));
    f.render_widget(button, area);
}

fn render_listings(f: &mut Frame, app: &App, area: Rect) {
    let listings = app.visible_listings();

    let chunks =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(area);
    render_results_line(f, app, chunks[0]);

    if listings.is_empty() {
        // The empty state is explicit; a bare grid would read as a hang.
        let empty = Paragraph::new("No agents found matching your criteria.")
            .style(Style::default().fg(theme::TEXT_MUTED))
            .block(Block::default().borders(Borders::ALL).border_style(border(false)));
        f.render_widget(empty, chunks[1]);
        return;
    }

    match app.layout {
        LayoutMode::Grid => render_grid(f, app, chunks[1]),
        LayoutMode::List => render_list(f, app, chunks[1]),
    }
}

fn render_results_line(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            format!(" {} agents", app.visible_listings().len()),
            Style::default().fg(theme::TEXT_MUTED),
        ),
        Span::styled("  Sort: ", Style::default().fg(theme::TEXT_DIM)),
        Span::styled(
            app.descriptor.sort.label(),
            Style::default().fg(theme::ACCENT_MINT),
        ),
    ];
    if let Some(filter) = app.descriptor.quick_filter {
        spans.push(Span::styled("  Filter: ", Style::default().fg(theme::TEXT_DIM)));
        spans.push(Span::styled(
            filter.label(),
            Style::default().fg(theme::ACCENT_LIME),
        ));
    }
    if let Some(category) = app.descriptor.category.as_deref() {
        spans.push(Span::styled("  Category: ", Style::default().fg(theme::TEXT_DIM)));
        spans.push(Span::styled(
            category.to_string(),
            Style::default().fg(theme::ACCENT_LIME),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let listings = app.visible_listings();
    let rows = listings.len().div_ceil(GRID_COLUMNS);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let selected_row = app.selected / GRID_COLUMNS;

    let first_row = if selected_row >= visible_rows {
        selected_row - visible_rows + 1
    } else {
        0
    };

    for (screen_row, row) in (first_row..rows).take(visible_rows).enumerate() {
        let row_area = Rect {
            x: area.x,
            y: area.y + (screen_row as u16) * CARD_HEIGHT,
            width: area.width,
            height: CARD_HEIGHT.min(area.height.saturating_sub((screen_row as u16) * CARD_HEIGHT)),
        };
        if row_area.height == 0 {
            break;
        }

        let columns = Layout::horizontal(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(row_area);
        for col in 0..GRID_COLUMNS {
            let idx = row * GRID_COLUMNS + col;
            if let Some(listing) = listings.get(idx) {
                render_card(f, listing, idx == app.selected, columns[col]);
            }
        }
    }
}

fn render_card(f: &mut Frame, listing: &AgentListing, selected: bool, area: Rect) {
    let border_style = if selected {
        Style::default().fg(theme::ACCENT_MINT)
    } else {
        Style::default().fg(theme::BORDER_INACTIVE)
    };
    let bg = if selected { theme::BG_SELECTED } else { theme::BG_CARD };

    let name_width = area.width.saturating_sub(6) as usize;
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", theme::category_glyph(&listing.category)),
                Style::default().fg(theme::ACCENT_MINT),
            ),
            Span::styled(
                truncate_with_ellipsis(&listing.name, name_width),
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            truncate_with_ellipsis(&listing.byline(), name_width + 2),
            Style::default().fg(theme::TEXT_MUTED),
        )),
        Line::from(Span::styled(
            format!("[{}]", listing.category),
            Style::default().fg(theme::TEXT_DIM),
        )),
        Line::from(vec![
            Span::styled(
                format!("{} jobs", format_grouped(listing.jobs)),
                Style::default().fg(theme::TEXT_PRIMARY),
            ),
            Span::styled("  ", Style::default()),
            Span::styled(
                format!("{:.1}%", listing.success_rate),
                Style::default().fg(theme::ACCENT_LIME),
            ),
            Span::styled("  ", Style::default()),
            Span::styled(listing.price.clone(), Style::default().fg(theme::ACCENT_MINT)),
        ]),
    ];

    let mut badges: Vec<Span> = Vec::new();
    if listing.featured {
        badges.push(Span::styled("✦ Featured ", Style::default().fg(theme::ACCENT_MINT)));
    }
    if listing.trending {
        badges.push(Span::styled("⚑ Trending", Style::default().fg(theme::ACCENT_TRENDING)));
    }
    if !badges.is_empty() {
        lines.push(Line::from(badges));
    }

    let card = Paragraph::new(lines).style(Style::default().bg(bg)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(card, area);
}

fn render_list(f: &mut Frame, app: &App, area: Rect) {
    let listings = app.visible_listings();
    let visible_height = area.height.saturating_sub(2) as usize;
    let selected = app.selected.min(listings.len().saturating_sub(1));
    let scroll = if selected >= visible_height {
        selected - visible_height + 1
    } else {
        0
    };

    let items: Vec<ListItem> = listings
        .iter()
        .enumerate()
        .skip(scroll)
        .take(visible_height)
        .map(|(idx, listing)| list_row(listing, idx == selected))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border(false)),
    );
    f.render_widget(list, area);
}

fn list_row(listing: &AgentListing, selected: bool) -> ListItem<'static> {
    let marker = if selected { "▸ " } else { "  " };
    let name_style = if selected {
        Style::default()
            .fg(theme::ACCENT_MINT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::TEXT_PRIMARY)
    };

    let mut spans = vec![
        Span::styled(marker.to_string(), Style::default().fg(theme::ACCENT_MINT)),
        Span::styled(format!("[{}] ", listing.category), Style::default().fg(theme::TEXT_DIM)),
        Span::styled(listing.name.clone(), name_style),
        Span::styled(
            format!(" {} ", listing.byline()),
            Style::default().fg(theme::TEXT_MUTED),
        ),
        Span::styled(
            format!(
                "· {} jobs · {:.1}% · {}",
                format_grouped(listing.jobs),
                listing.success_rate,
                listing.price
            ),
            Style::default().fg(theme::TEXT_DIM),
        ),
    ];
    if listing.trending {
        spans.push(Span::styled(
            " ⚑",
            Style::default().fg(theme::ACCENT_TRENDING),
        ));
    }

    ListItem::new(Line::from(spans))
}

fn render_footer(f: &mut Frame, area: Rect) {
    let help = vec![
        ("↑↓←→", "navigate"),
        ("Enter", "details"),
        ("/", "search"),
        ("f", "filter"),
        ("c", "category"),
        ("s", "sort"),
        ("g", "grid/list"),
        ("w/d/y", "wallet"),
        ("q", "quit"),
    ];

    let mut spans = Vec::with_capacity(help.len() * 2);
    for (i, (key, action)) in help.iter().enumerate() {
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(theme::ACCENT_MINT),
        ));
        let sep = if i + 1 == help.len() { "" } else { " | " };
        spans.push(Span::styled(
            format!(" {action}{sep}"),
            Style::default().fg(theme::TEXT_MUTED),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(border(false)),
    );
    f.render_widget(footer, area);
}

fn border(active: bool) -> Style {
    if active {
        Style::default().fg(theme::ACCENT_MINT)
    } else {
        Style::default().fg(theme::BORDER_INACTIVE)
    }
}
