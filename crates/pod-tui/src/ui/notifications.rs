// Transient toast notifications for the status bar. Session failures and
// clipboard confirmations surface here; nothing in this queue is fatal.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "ℹ",
            NoticeLevel::Success => "✓",
            NoticeLevel::Error => "✗",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NoticeLevel,
    pub duration: Duration,
    shown_at: Option<Instant>,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self::with_level(message, NoticeLevel::Info, Duration::from_secs(3))
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::with_level(message, NoticeLevel::Success, Duration::from_secs(3))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_level(message, NoticeLevel::Error, Duration::from_secs(5))
    }

    fn with_level(message: impl Into<String>, level: NoticeLevel, duration: Duration) -> Self {
        Self {
            message: message.into(),
            level,
            duration,
            shown_at: None,
        }
    }

    fn is_expired(&self) -> bool {
        self.shown_at
            .map(|shown| shown.elapsed() >= self.duration)
            .unwrap_or(false)
    }

    fn mark_shown(&mut self) {
        if self.shown_at.is_none() {
            self.shown_at = Some(Instant::now());
        }
    }
}

/// FIFO toast queue with one visible notification at a time. A
/// higher-level toast replaces the visible one instead of waiting.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    current: Option<Notification>,
    queue: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mut notification: Notification) {
        match &self.current {
            Some(current) if notification.level <= current.level => {
                self.queue.push_back(notification);
            }
            _ => {
                notification.mark_shown();
                self.current = Some(notification);
            }
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
        self.advance();
    }

    /// Expire the visible notification and pull up the next one.
    pub fn tick(&mut self) {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
            self.advance();
        }
    }

    fn advance(&mut self) {
        if self.current.is_none() {
            if let Some(mut next) = self.queue.pop_front() {
                next.mark_shown();
                self.current = Some(next);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_shows_immediately_when_idle() {
        let mut q = NotificationQueue::new();
        assert!(q.current().is_none());
        q.push(Notification::info("hello"));
        assert_eq!(q.current().unwrap().message, "hello");
    }

    #[test]
    fn test_equal_level_queues_behind_current() {
        let mut q = NotificationQueue::new();
        q.push(Notification::info("first"));
        q.push(Notification::info("second"));
        assert_eq!(q.current().unwrap().message, "first");
        q.dismiss();
        assert_eq!(q.current().unwrap().message, "second");
    }

    #[test]
    fn test_error_replaces_lower_level() {
        let mut q = NotificationQueue::new();
        q.push(Notification::info("quiet"));
        q.push(Notification::error("loud"));
        assert_eq!(q.current().unwrap().message, "loud");
    }

    #[test]
    fn test_level_ordering() {
        assert!(NoticeLevel::Error > NoticeLevel::Success);
        assert!(NoticeLevel::Success > NoticeLevel::Info);
    }
}
