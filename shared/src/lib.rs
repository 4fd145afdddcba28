use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod catalog;

/// A fixed time-of-day offering with its own availability flag and price
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSlot {
    /// Display label, e.g. "06:00 PM"
    pub time: &'static str,
    pub available: bool,
    /// Price in whole rupees for a 60 minute session
    pub price: u32,
}

/// Kind of session a client can book, with its additive surcharge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionType {
    pub id: &'static str,
    pub name: &'static str,
    /// Display label only, e.g. "75 min"
    pub duration: &'static str,
    pub surcharge: u32,
}

/// Session length option, applied to the slot price as a multiplier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DurationOption {
    pub id: &'static str,
    pub name: &'static str,
    pub multiplier: f64,
}

/// Everything the booking wizard collects from the client.
///
/// Created empty when the booking modal opens and discarded on close or after success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSelection {
    pub date: Option<NaiveDate>,
    /// Label of the chosen time slot, empty until one is picked
    pub time: String,
    pub duration_id: String,
    pub session_type_id: String,
    pub special_requests: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
}

impl Default for BookingSelection {
    fn default() -> Self {
        Self {
            date: None,
            time: String::new(),
            duration_id: catalog::DEFAULT_DURATION_ID.to_string(),
            session_type_id: catalog::DEFAULT_SESSION_TYPE_ID.to_string(),
            special_requests: String::new(),
            client_name: String::new(),
            client_email: String::new(),
            client_phone: String::new(),
        }
    }
}

impl BookingSelection {
    /// Date formatted as YYYY-MM-DD, or an empty string when none is selected
    pub fn date_label(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    pub fn has_date_and_time(&self) -> bool {
        self.date.is_some() && !self.time.is_empty()
    }
}

/// Request handed to the booking gateway once the wizard reaches submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub trainer_id: u32,
    pub trainer_name: String,
    pub selection: BookingSelection,
    pub total_price: u32,
}

/// Result of a successful booking submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    /// Booking reference in format: "booking::<uuid>"
    pub reference: String,
    pub trainer_name: String,
    pub date: Option<NaiveDate>,
    pub time: String,
    pub duration_id: String,
    pub total_price: u32,
}

/// Account flavour chosen on the auth modal tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    User,
    Trainer,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::User => "user",
            UserType::Trainer => "trainer",
        }
    }

    /// Label used on buttons ("Sign In as Practitioner")
    pub fn display_name(&self) -> &'static str {
        match self {
            UserType::User => "Practitioner",
            UserType::Trainer => "Trainer",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user. Persisted as the only session record (last login wins).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub user_type: UserType,
}

/// One cell of the booking calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Day of month, 1-31
    pub day: u32,
    /// False for the leading/trailing days borrowed from neighbouring months
    pub in_current_month: bool,
    /// Bookable: not in the past and not a Sunday
    pub available: bool,
    pub is_today: bool,
}

/// Fixed 6x7 calendar grid for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarGrid {
    pub year: i32,
    pub month: u32,
    pub days: Vec<CalendarDay>,
}

/// Type of header notification, drives icon and colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Class,
    Promotion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trainer {
    pub id: u32,
    pub name: &'static str,
    pub title: &'static str,
    pub specialization: &'static str,
    pub experience: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub location: &'static str,
    pub image: &'static str,
    pub certifications: &'static [&'static str],
    pub languages: &'static [&'static str],
    /// Display price, e.g. "₹1,200"
    pub price: &'static str,
    pub availability: &'static str,
    pub bio: &'static str,
    pub specialty: &'static str,
    pub sessions: u32,
    pub success_rate: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub age: u32,
    pub location: &'static str,
    pub profession: &'static str,
    pub image: &'static str,
    pub rating: u8,
    pub title: &'static str,
    pub testimonial: &'static str,
    pub results: &'static [&'static str],
    pub program: &'static str,
    pub duration: &'static str,
    pub before: &'static str,
    pub after: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub price: &'static str,
    pub duration: &'static str,
    pub rating: f32,
    pub sessions: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMember {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub specialization: &'static str,
    pub bio: &'static str,
    pub achievements: &'static [&'static str],
    pub email: &'static str,
}

/// Headline figure shown in the stats bars ("2500+ Success Stories")
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let selection = BookingSelection::default();
        assert_eq!(selection.date, None);
        assert!(selection.time.is_empty());
        assert_eq!(selection.duration_id, "60");
        assert_eq!(selection.session_type_id, "individual");
        assert!(!selection.has_date_and_time());
        assert_eq!(selection.date_label(), "");
    }

    #[test]
    fn test_user_serializes_like_stored_record() {
        let user = User {
            id: "1".to_string(),
            name: "a".to_string(),
            email: "a@b.com".to_string(),
            user_type: UserType::Trainer,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["userType"], "trainer");
        assert_eq!(json["email"], "a@b.com");

        let parsed: User = serde_json::from_str(
            r#"{"id":"42","name":"a","email":"a@b.com","userType":"user"}"#,
        )
        .unwrap();
        assert_eq!(parsed.user_type, UserType::User);
    }
}
