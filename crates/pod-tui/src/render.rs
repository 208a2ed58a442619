use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::ui::components::statusbar::render_statusbar;
use crate::ui::{theme, views, App, View};

pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(theme::BG_APP)), area);

    let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);

    match app.view {
        View::Browser => views::render_browser(f, app, chunks[0]),
        View::Detail => views::render_detail(f, app, chunks[0]),
    }

    render_statusbar(f, app, chunks[1]);
}
