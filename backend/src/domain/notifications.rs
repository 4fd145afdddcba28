//! Header notification list.
//!
//! Lives only for the signed-in session: seeded with sample entries on sign-in, a
//! welcome-back entry on top, emptied on sign-out.

use chrono::{DateTime, Duration, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use shared::{Notification, NotificationKind, UserType};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Newest first
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    fn push_back(&mut self, title: &str, message: &str, kind: NotificationKind, timestamp: DateTime<Utc>) {
        let notification = self.build(title, message, kind, timestamp);
        self.notifications.push(notification);
    }

    fn build(&mut self, title: &str, message: &str, kind: NotificationKind, timestamp: DateTime<Utc>) -> Notification {
        self.next_id += 1;
        Notification {
            id: format!("notification::{}", self.next_id),
            title: title.to_string(),
            message: message.to_string(),
            kind,
            timestamp,
            read: false,
        }
    }

    /// Fill an empty list with the sample entries for `user_type`: a welcome note now, a class
    /// update 30 minutes ago and an offer 2 hours ago. Does nothing if entries exist.
    pub fn seed(&mut self, user_type: UserType, now: DateTime<Utc>) {
        if !self.notifications.is_empty() {
            return;
        }

        match user_type {
            UserType::Trainer => {
                self.push_back(
                    "Welcome to Instructor Portal!",
                    "Your instructor account has been successfully created. Start managing your classes.",
                    NotificationKind::Success,
                    now,
                );
                self.push_back(
                    "Class Schedule Updated",
                    "Your Morning Vinyasa Flow class has been successfully scheduled.",
                    NotificationKind::Class,
                    now - Duration::minutes(30),
                );
                self.push_back(
                    "Instructor Bonus",
                    "You've earned a bonus for excellent student feedback this month!",
                    NotificationKind::Promotion,
                    now - Duration::hours(2),
                );
            }
            UserType::User => {
                self.push_back(
                    "Welcome to Svasthify!",
                    "Your account has been successfully created. Start exploring our yoga classes.",
                    NotificationKind::Success,
                    now,
                );
                self.push_back(
                    "New Class Available",
                    "Morning Vinyasa Flow with Sarah is now available for booking.",
                    NotificationKind::Class,
                    now - Duration::minutes(30),
                );
                self.push_back(
                    "Special Offer",
                    "Get 20% off on your first month premium membership!",
                    NotificationKind::Promotion,
                    now - Duration::hours(2),
                );
            }
        }
    }

    /// Record a successful sign-in: optionally seed, then put a welcome-back entry on top
    pub fn on_sign_in(&mut self, user_type: UserType, now: DateTime<Utc>, seed: bool) {
        if seed {
            self.seed(user_type, now);
        }

        let (title, message) = match user_type {
            UserType::Trainer => (
                "Welcome Back, Instructor!",
                "You have successfully signed in to your instructor portal.",
            ),
            UserType::User => ("Welcome Back!", "You have successfully signed in to your account."),
        };
        let welcome = self.build(title, message, NotificationKind::Success, now);
        self.notifications.insert(0, welcome);
        debug!("{} notifications, {} unread", self.notifications.len(), self.unread_count());
    }

    /// Returns `false` when no notification has that id
    pub fn mark_as_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_as_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
    }

    /// Sign-out drops everything
    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

/// Banner shown across the top of the page right after signing in
pub fn welcome_banner_message(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Trainer => "Welcome to Instructor Portal! You have successfully signed in.",
        UserType::User => "Welcome! You have successfully signed in.",
    }
}

/// "Just now", "5m ago", "3h ago", "2d ago". Future timestamps count as just now.
pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - timestamp;
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", elapsed.num_days())
    }
}
