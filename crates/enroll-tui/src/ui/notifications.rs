// Toast notifications shown in the status bar
// Queue supports priorities and auto-dismiss

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Notification priority levels (higher = more important)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "\u{2139}",    // ℹ
            NotificationLevel::Success => "\u{2713}", // ✓
            NotificationLevel::Warning => "\u{26A0}", // ⚠
            NotificationLevel::Error => "\u{2717}",   // ✗
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration: Duration,
    pub shown_at: Option<Instant>,
}

impl Notification {
    fn with_level(message: impl Into<String>, level: NotificationLevel, secs: u64) -> Self {
        Self {
            message: message.into(),
            level,
            duration: Duration::from_secs(secs),
            shown_at: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::with_level(message, NotificationLevel::Info, 3)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::with_level(message, NotificationLevel::Success, 3)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_level(message, NotificationLevel::Warning, 4)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_level(message, NotificationLevel::Error, 5)
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at
            .map(|shown| shown.elapsed() >= self.duration)
            .unwrap_or(false)
    }

    pub fn mark_shown(&mut self) {
        if self.shown_at.is_none() {
            self.shown_at = Some(Instant::now());
        }
    }
}

/// Queue of notifications with priority handling
#[derive(Debug, Default)]
pub struct NotificationQueue {
    /// Pending notifications (front = next to show)
    queue: VecDeque<Notification>,
    current: Option<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification. A higher-priority one replaces the current toast;
    /// the replaced toast is dropped.
    pub fn push(&mut self, notification: Notification) {
        if let Some(ref current) = self.current {
            if notification.level > current.level {
                let mut n = notification;
                n.mark_shown();
                self.current = Some(n);
                return;
            }
            if current.message == notification.message && current.level == notification.level {
                return;
            }
        }

        if self.current.is_none() {
            let mut n = notification;
            n.mark_shown();
            self.current = Some(n);
        } else {
            let pos = self
                .queue
                .iter()
                .position(|n| n.level < notification.level)
                .unwrap_or(self.queue.len());
            self.queue.insert(pos, notification);
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
        self.advance();
    }

    /// Advance to the next notification if the current one expired
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

    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::info("test");
        assert_eq!(n.level, NotificationLevel::Info);
        assert_eq!(n.duration, Duration::from_secs(3));

        let n = Notification::error("error").duration(Duration::from_secs(10));
        assert_eq!(n.level, NotificationLevel::Error);
        assert_eq!(n.duration, Duration::from_secs(10));
    }

    #[test]
    fn test_queue_in_order() {
        let mut q = NotificationQueue::new();
        q.push(Notification::info("first"));
        q.push(Notification::info("second"));
        assert_eq!(q.current().unwrap().message, "first");

        q.dismiss();
        assert_eq!(q.current().unwrap().message, "second");
        q.dismiss();
        assert!(q.is_empty());
    }

    #[test]
    fn test_priority_replaces_current() {
        let mut q = NotificationQueue::new();
        q.push(Notification::info("Registered for CSE2001"));
        q.push(Notification::error("Course ECE3002 is full"));
        assert_eq!(q.current().unwrap().message, "Course ECE3002 is full");

        q.dismiss();
        assert!(q.current().is_none());
    }

    #[test]
    fn test_duplicate_of_current_is_skipped() {
        let mut q = NotificationQueue::new();
        q.push(Notification::warning("Please fill out this field."));
        q.push(Notification::warning("Please fill out this field."));
        q.dismiss();
        assert!(q.is_empty());
    }

    #[test]
    fn test_tick_expires_current() {
        let mut q = NotificationQueue::new();
        q.push(Notification::info("short").duration(Duration::ZERO));
        q.push(Notification::info("next"));
        q.tick();
        assert_eq!(q.current().unwrap().message, "next");
    }
}
