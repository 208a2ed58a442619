use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use pod_core::models::detail::{analytics_series, sample_reviews, version_history};
use pod_core::AgentListing;

use crate::ui::format::{format_compact, format_grouped, format_relative_time, stars};
use crate::ui::{theme, App, DetailTab, InputMode};

/// Full-screen detail view for one listing, with the four content tabs.
pub fn render_detail(f: &mut Frame, app: &App, area: Rect) {
    f.render_widget(Clear, area);

    let Some(listing) = app.viewing_listing() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(4), // Listing header
        Constraint::Length(1), // Tab bar
        Constraint::Min(0),    // Tab content
        Constraint::Length(2), // Footer hints
    ])
    .split(area);

    render_header(f, listing, chunks[0]);
    render_tab_bar(f, app, chunks[1]);
    match app.detail_tab {
        DetailTab::Playground => render_playground(f, app, chunks[2]),
        DetailTab::Analytics => render_analytics(f, app, chunks[2]),
        DetailTab::Reviews => render_reviews(f, app, chunks[2]),
        DetailTab::Versions => render_versions(f, app, chunks[2]),
    }
    render_footer(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, listing: &AgentListing, area: Rect) {
    let title_line = Line::from(vec![
        Span::styled(
            format!("{} ", theme::category_glyph(&listing.category)),
            Style::default().fg(theme::ACCENT_MINT),
        ),
        Span::styled(
            listing.name.clone(),
            Style::default()
                .fg(theme::ACCENT_MINT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  [{}]", listing.category),
            Style::default().fg(theme::TEXT_MUTED),
        ),
    ]);

    let meta_line = Line::from(vec![
        Span::styled(listing.byline(), Style::default().fg(theme::TEXT_MUTED)),
        Span::styled(
            format!(
                "  ·  {} jobs  ·  {:.1}% success  ·  {}  ·  listed {}",
                format_grouped(listing.jobs),
                listing.success_rate,
                listing.price,
                format_relative_time(listing.created_at),
            ),
            Style::default().fg(theme::TEXT_DIM),
        ),
    ]);

    let header = Paragraph::new(vec![title_line, meta_line]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT_MINT)),
    );
    f.render_widget(header, area);
}

fn render_tab_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (i, tab) in DetailTab::ALL.iter().enumerate() {
        let style = if *tab == app.detail_tab {
            Style::default()
                .fg(theme::ACCENT_MINT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme::TEXT_MUTED)
        };
        spans.push(Span::styled(
            format!(" {} {} ", i + 1, tab.label()),
            style,
        ));
        spans.push(Span::styled("│", Style::default().fg(theme::BORDER_INACTIVE)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ===== Playground =====

fn render_playground(f: &mut Frame, app: &App, area: Rect) {
    let chunks =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).split(area);
    let panes =
        Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(chunks[0]);

    render_input_pane(f, app, panes[0]);
    render_output_pane(f, app, panes[1]);
    render_run_stats(f, app, chunks[1]);
}

fn render_input_pane(f: &mut Frame, app: &App, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let border = if editing {
        Style::default().fg(theme::ACCENT_MINT)
    } else {
        Style::default().fg(theme::BORDER_INACTIVE)
    };

    let mut text = app.playground.input.clone();
    if text.is_empty() && !editing {
        text = "Enter your test data here... (e to edit)".to_string();
    } else if editing {
        text.push('▌');
    }
    let style = if app.playground.input.is_empty() && !editing {
        Style::default().fg(theme::TEXT_DIM)
    } else {
        Style::default().fg(theme::TEXT_PRIMARY)
    };

    let pane = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Input ")
                .border_style(border),
        );
    f.render_widget(pane, area);
}

fn render_output_pane(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if app.playground.running {
        let elapsed = app
            .playground
            .started_at
            .map(|t| t.elapsed().as_millis())
            .unwrap_or(0);
        (
            format!("Processing... ({elapsed}ms)"),
            Style::default().fg(theme::TEXT_MUTED),
        )
    } else if let Some(output) = &app.playground.output {
        (output.clone(), Style::default().fg(theme::ACCENT_MINT))
    } else {
        (
            "// Output will appear here".to_string(),
            Style::default().fg(theme::TEXT_DIM),
        )
    };

    let pane = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll_offset as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Output ")
                .border_style(Style::default().fg(theme::BORDER_INACTIVE)),
        );
    f.render_widget(pane, area);
}

fn render_run_stats(f: &mut Frame, app: &App, area: Rect) {
    let line = match (app.playground.execution_time_ms, app.playground.cost_usd) {
        (Some(time), Some(cost)) => Line::from(vec![
            Span::styled("Time Taken: ", Style::default().fg(theme::TEXT_MUTED)),
            Span::styled(format!("{time}ms"), Style::default().fg(theme::TEXT_PRIMARY)),
            Span::styled("    Cost: ", Style::default().fg(theme::TEXT_MUTED)),
            Span::styled(format!("${cost:.2}"), Style::default().fg(theme::TEXT_PRIMARY)),
        ]),
        _ => Line::from(Span::styled(
            "Run the agent to see execution stats",
            Style::default().fg(theme::TEXT_DIM),
        )),
    };

    let stats = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_INACTIVE)),
    );
    f.render_widget(stats, area);
}

// ===== Analytics =====

fn render_analytics(f: &mut Frame, app: &App, area: Rect) {
    let series = analytics_series();
    let mut lines = vec![
        Line::from(Span::styled(
            "Live On-Chain Performance (Last 30 Days)",
            Style::default()
                .fg(theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let max_tx = series.iter().map(|p| p.transactions).max().unwrap_or(1);
    for point in &series {
        let bar_len = (point.transactions * 30 / max_tx.max(1)) as usize;
        lines.push(Line::from(vec![
            Span::styled(
                format!("Day {:>2}  ", point.day),
                Style::default().fg(theme::TEXT_MUTED),
            ),
            Span::styled("█".repeat(bar_len), Style::default().fg(theme::ACCENT_MINT)),
            Span::styled(
                format!(
                    "  {} tx · {:.1}% up · {}ms",
                    point.transactions, point.uptime, point.response_time_ms
                ),
                Style::default().fg(theme::TEXT_DIM),
            ),
        ]));
    }

    let count = series.len().max(1) as f64;
    let avg_uptime: f64 = series.iter().map(|p| p.uptime).sum::<f64>() / count;
    let avg_response: u64 =
        series.iter().map(|p| p.response_time_ms).sum::<u64>() / series.len().max(1) as u64;
    let total_tx: u64 = series.iter().map(|p| p.transactions).sum();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Average Uptime: ", Style::default().fg(theme::TEXT_MUTED)),
        Span::styled(format!("{avg_uptime:.1}%"), Style::default().fg(theme::TEXT_PRIMARY)),
        Span::styled("    Avg Response: ", Style::default().fg(theme::TEXT_MUTED)),
        Span::styled(format!("{avg_response}ms"), Style::default().fg(theme::TEXT_PRIMARY)),
        Span::styled("    Transactions: ", Style::default().fg(theme::TEXT_MUTED)),
        Span::styled(format_compact(total_tx), Style::default().fg(theme::TEXT_PRIMARY)),
    ]));

    render_scrollable(f, app, area, lines, " Analytics ");
}

// ===== Reviews =====

fn render_reviews(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    for review in sample_reviews() {
        let mut head = vec![
            Span::styled(
                stars(review.rating),
                Style::default().fg(theme::ACCENT_WARNING),
            ),
            Span::styled(
                format!("  {}", review.wallet),
                Style::default().fg(theme::TEXT_DIM),
            ),
        ];
        if review.verified {
            head.push(Span::styled(
                "  ✓ Verified Purchase",
                Style::default().fg(theme::ACCENT_LIME),
            ));
        }
        lines.push(Line::from(head));
        lines.push(Line::from(Span::styled(
            review.text.to_string(),
            Style::default().fg(theme::TEXT_PRIMARY),
        )));
        lines.push(Line::from(""));
    }

    render_scrollable(f, app, area, lines, " Reviews ");
}

// ===== Versions =====

fn render_versions(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    for entry in version_history() {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(theme::ACCENT_MINT)),
            Span::styled(
                entry.version.to_string(),
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", entry.date),
                Style::default().fg(theme::TEXT_MUTED),
            ),
        ]));
        for change in entry.changes {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(theme::ACCENT_MINT)),
                Span::styled(change.to_string(), Style::default().fg(theme::TEXT_DIM)),
            ]));
        }
        lines.push(Line::from(""));
    }

    render_scrollable(f, app, area, lines, " Version History ");
}

fn render_scrollable(f: &mut Frame, app: &App, area: Rect, lines: Vec<Line>, title: &str) {
    let visible_height = area.height.saturating_sub(2) as usize;
    let max_scroll = lines.len().saturating_sub(visible_height);
    let offset = app.scroll_offset.min(max_scroll);

    let visible: Vec<Line> = lines.into_iter().skip(offset).take(visible_height).collect();
    let content = Paragraph::new(visible).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(Style::default().fg(theme::BORDER_INACTIVE)),
    );
    f.render_widget(content, area);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let help: &[(&str, &str)] = if app.detail_tab == DetailTab::Playground {
        &[
            ("Tab/1-4", "tabs"),
            ("e", "edit input"),
            ("r", "run"),
            ("x", "clear"),
            ("Esc", "back"),
        ]
    } else {
        &[("Tab/1-4", "tabs"), ("j/k", "scroll"), ("Esc", "back")]
    };

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
            .border_style(Style::default().fg(theme::BORDER_INACTIVE)),
    );
    f.render_widget(footer, area);
}
