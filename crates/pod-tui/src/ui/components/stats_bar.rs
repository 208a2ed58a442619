use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::format::{format_compact, format_grouped};
use crate::ui::{theme, App};

/// The marketplace-wide counters under the header.
pub fn render_stats_bar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    render_tile(
        f,
        chunks[0],
        "Total Agents Online",
        format_grouped(app.stats.agents_online),
    );
    render_tile(
        f,
        chunks[1],
        "Transactions (24h)",
        format_compact(app.stats.transactions_24h),
    );
    render_tile(
        f,
        chunks[2],
        "Total Value Settled",
        format!("${:.2}M", app.stats.value_settled_m),
    );
}

fn render_tile(f: &mut Frame, area: Rect, label: &str, value: String) {
    let line = Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(theme::TEXT_MUTED)),
        Span::styled(value, Style::default().fg(theme::TEXT_PRIMARY)),
    ]);

    let tile = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_INACTIVE)),
    );
    f.render_widget(tile, area);
}
