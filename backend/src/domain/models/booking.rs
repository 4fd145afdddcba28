use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::BookingRequest;

use super::validation::FieldErrors;

/// Where the booking dialog currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStep {
    /// Dialog not shown
    Closed,
    /// Step 1: pick a date on the calendar and a time slot
    DateTime,
    /// Step 2: duration, session type and special requests
    Details,
    /// Step 3: client name, email and phone
    Contact,
    /// Waiting on the booking gateway
    Submitting,
    /// Confirmation screen
    Complete,
}

impl BookingStep {
    /// Position in the 1-2-3 step indicator
    pub fn indicator(&self) -> Option<u8> {
        match self {
            BookingStep::DateTime => Some(1),
            BookingStep::Details => Some(2),
            BookingStep::Contact | BookingStep::Submitting => Some(3),
            BookingStep::Closed | BookingStep::Complete => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BookingStep::Closed => "",
            BookingStep::DateTime => "Select Date & Time",
            BookingStep::Details => "Session Details",
            BookingStep::Contact => "Contact Information",
            BookingStep::Submitting => "Booking...",
            BookingStep::Complete => "Booking Confirmed!",
        }
    }

    pub fn is_open(&self) -> bool {
        *self != BookingStep::Closed
    }
}

/// Handle for an in-flight submission.
///
/// Carries the request for the gateway and the wizard generation it was issued in, so a
/// completion that arrives after the dialog was closed can be recognised and dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionTicket {
    pub generation: u64,
    pub request: BookingRequest,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingError {
    #[error("Cannot {action} while the booking dialog is at {step:?}")]
    InvalidTransition {
        step: BookingStep,
        action: &'static str,
    },
    #[error("Please select a date and a time slot")]
    DateTimeRequired(FieldErrors),
    #[error("Please fill in the required contact details")]
    ContactDetailsRequired(FieldErrors),
    #[error("{0} is not available for booking")]
    DateUnavailable(NaiveDate),
    #[error("The {0} slot is not available")]
    SlotUnavailable(String),
    #[error("Unknown duration option: {0}")]
    UnknownDuration(String),
    #[error("Unknown session type: {0}")]
    UnknownSessionType(String),
}

impl BookingError {
    /// Per-field messages for inline display, when the error has any
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            BookingError::DateTimeRequired(errors) | BookingError::ContactDetailsRequired(errors) => {
                Some(errors)
            }
            _ => None,
        }
    }
}
