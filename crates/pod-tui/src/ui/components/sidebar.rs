use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use pod_core::constants::CATEGORIES;
use pod_core::QuickFilter;

use crate::ui::{theme, App};

/// Browse presets and the category list. Single-select each; the active
/// entries carry the lime highlight.
pub fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = Vec::new();

    items.push(section_header("Browse"));
    items.push(nav_item("All Agents", app.descriptor.quick_filter.is_none()));
    for filter in QuickFilter::ALL {
        items.push(nav_item(
            filter.label(),
            app.descriptor.quick_filter == Some(filter),
        ));
    }

    items.push(ListItem::new(Line::from("")));
    items.push(section_header("Categories"));
    items.push(nav_item("All Categories", app.descriptor.category.is_none()));
    for category in CATEGORIES {
        items.push(nav_item(
            category,
            app.descriptor.category.as_deref() == Some(*category),
        ));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Filters ")
            .border_style(Style::default().fg(theme::BORDER_INACTIVE))
            .style(Style::default().bg(theme::BG_SIDEBAR)),
    );

    f.render_widget(list, area);
}

fn section_header(label: &str) -> ListItem<'static> {
    ListItem::new(Line::from(Span::styled(
        label.to_string(),
        Style::default().fg(theme::TEXT_MUTED),
    )))
}

fn nav_item(label: &str, active: bool) -> ListItem<'static> {
    let (marker, style) = if active {
        (
            "▌ ",
            Style::default()
                .fg(theme::ACCENT_LIME)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().fg(theme::TEXT_PRIMARY))
    };

    ListItem::new(Line::from(vec![
        Span::styled(marker, Style::default().fg(theme::ACCENT_LIME)),
        Span::styled(label.to_string(), style),
    ]))
}
