use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::notifications::NoticeLevel;
use crate::ui::{theme, App};

/// Bottom status line: the active toast, or the quit warning.
pub fn render_statusbar(f: &mut Frame, app: &App, area: Rect) {
    let line = if app.pending_quit {
        Line::from(Span::styled(
            "Press Ctrl+C again to quit",
            Style::default().fg(theme::ACCENT_WARNING),
        ))
    } else if let Some(notification) = app.notifications.current() {
        let color = match notification.level {
            NoticeLevel::Info => theme::ACCENT_MINT,
            NoticeLevel::Success => theme::ACCENT_SUCCESS,
            NoticeLevel::Error => theme::ACCENT_ERROR,
        };
        Line::from(vec![
            Span::styled(
                format!(" {} ", notification.level.icon()),
                Style::default().fg(color),
            ),
            Span::styled(notification.message.clone(), Style::default().fg(color)),
        ])
    } else {
        Line::from("")
    };

    f.render_widget(Paragraph::new(line), area);
}
