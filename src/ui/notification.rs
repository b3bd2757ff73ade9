use chrono::{DateTime, Local};
use std::time::Duration;

use crate::common::config::AppConfig;

#[derive(Clone, Debug)]
pub struct Notification {
    pub message: String,
    pub created_at: DateTime<Local>,
    pub duration_seconds: u64,
    pub notification_type: NotificationType,
}

#[derive(Clone, Debug)]
pub enum NotificationType {
    Info,
    Warning,
    Error,
    Status,
}

impl Notification {
    pub fn new(message: String, notification_type: NotificationType) -> Self {
        Self {
            message,
            created_at: Local::now(),
            duration_seconds: AppConfig::NOTIFICATION_DURATION_SECS,
            notification_type,
        }
    }

    pub fn with_duration(
        message: String,
        notification_type: NotificationType,
        duration_seconds: u64,
    ) -> Self {
        Self {
            message,
            created_at: Local::now(),
            duration_seconds,
            notification_type,
        }
    }

    pub fn is_expired(&self) -> bool {
        let elapsed = Local::now()
            .signed_duration_since(self.created_at)
            .to_std()
            .unwrap_or(Duration::from_secs(0));

        elapsed >= Duration::from_secs(self.duration_seconds)
    }
}

#[derive(Clone, Debug, Default)]
pub struct NotificationManager {
    pub current_notification: Option<Notification>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            current_notification: None,
        }
    }

    pub fn show(&mut self, message: String, notification_type: NotificationType) {
        self.current_notification = Some(Notification::new(message, notification_type));
    }

    pub fn clear(&mut self) {
        self.current_notification = None;
    }

    /// Drops the current notification once its display window has passed.
    pub fn update(&mut self) {
        if let Some(notification) = &self.current_notification {
            if notification.is_expired() {
                self.current_notification = None;
            }
        }
    }

    pub fn get_current_notification(&self) -> Option<&Notification> {
        self.current_notification.as_ref()
    }

    pub fn has_notification(&self) -> bool {
        self.current_notification.is_some()
    }
}

// Helper functions for common notification types
impl NotificationManager {
    pub fn info(&mut self, message: String) {
        self.show(message, NotificationType::Info);
    }

    pub fn warning(&mut self, message: String) {
        self.show(message, NotificationType::Warning);
    }

    pub fn error(&mut self, message: String) {
        self.show(message, NotificationType::Error);
    }

    pub fn status(&mut self, message: String) {
        self.show(message, NotificationType::Status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_clear() {
        let mut mgr = NotificationManager::new();
        assert!(!mgr.has_notification());
        mgr.info("Instance created".to_string());
        assert!(mgr.has_notification());
        mgr.clear();
        assert!(!mgr.has_notification());
    }

    #[test]
    fn test_update_keeps_fresh_notification() {
        let mut mgr = NotificationManager::new();
        mgr.status("Switching partition".to_string());
        mgr.update();
        assert!(mgr.has_notification());
    }

    #[test]
    fn test_expired_notification_is_dropped() {
        let mut mgr = NotificationManager::new();
        mgr.current_notification = Some(Notification::with_duration(
            "old".to_string(),
            NotificationType::Info,
            0,
        ));
        mgr.update();
        assert!(!mgr.has_notification());
    }
}
