//! Booking dialog state machine.
//!
//! The wizard owns the `BookingSelection` for one trainer and walks it through
//! `DateTime -> Details -> Contact -> Submitting -> Complete`. It never waits on anything
//! itself: `begin_submission` hands out a [`SubmissionTicket`] for the caller to pass to a
//! booking gateway, and `finish_submission` applies the answer.
//!
//! ## Business Rules
//!
//! - Step 1 only advances with both a date and a time slot
//! - Submission needs a non-empty name, email and phone (no format checks)
//! - `back()` on step 1 is a cancellation and resets the wizard
//! - Closing the dialog at any step discards the selection
//! - Closing while a submission is in flight detaches it: the late completion is dropped

use chrono::NaiveDate;
use log::{debug, info};
use shared::{catalog, BookingConfirmation, BookingRequest, BookingSelection, Trainer};

use crate::domain::calendar::{CalendarMonthRef, CalendarService};
use crate::domain::models::{BookingError, BookingStep, FieldErrors, SubmissionTicket};
use crate::domain::pricing::{PriceQuote, PricingService};

#[derive(Debug, Clone, PartialEq)]
pub struct BookingWizard {
    step: BookingStep,
    trainer: Option<Trainer>,
    selection: BookingSelection,
    displayed_month: CalendarMonthRef,
    confirmation: Option<BookingConfirmation>,
    /// Bumped on every open and close; tickets from older generations are stale
    generation: u64,
    pricing: PricingService,
    calendar: CalendarService,
}

impl BookingWizard {
    pub fn new(pricing: PricingService) -> Self {
        Self {
            step: BookingStep::Closed,
            trainer: None,
            selection: BookingSelection::default(),
            displayed_month: CalendarMonthRef::current(),
            confirmation: None,
            generation: 0,
            pricing,
            calendar: CalendarService::new(),
        }
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn trainer(&self) -> Option<&Trainer> {
        self.trainer.as_ref()
    }

    pub fn selection(&self) -> &BookingSelection {
        &self.selection
    }

    pub fn displayed_month(&self) -> CalendarMonthRef {
        self.displayed_month
    }

    pub fn confirmation(&self) -> Option<&BookingConfirmation> {
        self.confirmation.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_open(&self) -> bool {
        self.step.is_open()
    }

    /// Open the dialog for `trainer` with an empty selection, showing the month of `today`
    pub fn open(&mut self, trainer: Trainer, today: NaiveDate) {
        info!("Opening booking dialog for trainer {} ({})", trainer.id, trainer.name);
        self.reset();
        self.trainer = Some(trainer);
        self.displayed_month = CalendarMonthRef::containing(today);
        self.step = BookingStep::DateTime;
    }

    /// Close the dialog from any step and throw the selection away
    pub fn close(&mut self) {
        if self.step == BookingStep::Submitting {
            info!("Booking dialog closed during submission, pending result will be ignored");
        } else {
            debug!("Closing booking dialog at {:?}", self.step);
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.generation += 1;
        self.step = BookingStep::Closed;
        self.trainer = None;
        self.selection = BookingSelection::default();
        self.confirmation = None;
    }

    pub fn show_previous_month(&mut self) {
        self.displayed_month = self.displayed_month.previous();
    }

    pub fn show_next_month(&mut self) {
        self.displayed_month = self.displayed_month.next();
    }

    fn ensure_step(&self, expected: BookingStep, action: &'static str) -> Result<(), BookingError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(BookingError::InvalidTransition { step: self.step, action })
        }
    }

    /// Steps where the selection may still be edited
    fn ensure_editing(&self, action: &'static str) -> Result<(), BookingError> {
        match self.step {
            BookingStep::DateTime | BookingStep::Details | BookingStep::Contact => Ok(()),
            step => Err(BookingError::InvalidTransition { step, action }),
        }
    }

    /// Pick a calendar date. It must be bookable and belong to the displayed month.
    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> Result<(), BookingError> {
        self.ensure_step(BookingStep::DateTime, "select a date")?;
        if !self.calendar.is_selectable(date, self.displayed_month, today) {
            return Err(BookingError::DateUnavailable(date));
        }
        self.selection.date = Some(date);
        Ok(())
    }

    /// Pick a time slot by its label. Unknown and unavailable slots are refused.
    pub fn select_time(&mut self, time: &str) -> Result<(), BookingError> {
        self.ensure_step(BookingStep::DateTime, "select a time")?;
        match catalog::find_time_slot(time) {
            Some(slot) if slot.available => {
                self.selection.time = slot.time.to_string();
                Ok(())
            }
            _ => Err(BookingError::SlotUnavailable(time.to_string())),
        }
    }

    pub fn select_duration(&mut self, duration_id: &str) -> Result<(), BookingError> {
        self.ensure_editing("choose a duration")?;
        let duration = catalog::find_duration(duration_id)
            .ok_or_else(|| BookingError::UnknownDuration(duration_id.to_string()))?;
        self.selection.duration_id = duration.id.to_string();
        Ok(())
    }

    pub fn select_session_type(&mut self, session_type_id: &str) -> Result<(), BookingError> {
        self.ensure_editing("choose a session type")?;
        let session_type = catalog::find_session_type(session_type_id)
            .ok_or_else(|| BookingError::UnknownSessionType(session_type_id.to_string()))?;
        self.selection.session_type_id = session_type.id.to_string();
        Ok(())
    }

    // Free-text fields follow the input as typed; edits outside the form steps are dropped.

    pub fn set_special_requests(&mut self, value: impl Into<String>) {
        if self.ensure_editing("edit special requests").is_ok() {
            self.selection.special_requests = value.into();
        }
    }

    pub fn set_client_name(&mut self, value: impl Into<String>) {
        if self.ensure_editing("edit the client name").is_ok() {
            self.selection.client_name = value.into();
        }
    }

    pub fn set_client_email(&mut self, value: impl Into<String>) {
        if self.ensure_editing("edit the client email").is_ok() {
            self.selection.client_email = value.into();
        }
    }

    pub fn set_client_phone(&mut self, value: impl Into<String>) {
        if self.ensure_editing("edit the client phone").is_ok() {
            self.selection.client_phone = value.into();
        }
    }

    /// Move forward one form step. `Contact` advances through [`Self::begin_submission`].
    pub fn next(&mut self) -> Result<BookingStep, BookingError> {
        match self.step {
            BookingStep::DateTime => {
                date_time_errors(&self.selection)
                    .into_result()
                    .map_err(BookingError::DateTimeRequired)?;
                self.step = BookingStep::Details;
            }
            BookingStep::Details => self.step = BookingStep::Contact,
            step => {
                return Err(BookingError::InvalidTransition { step, action: "continue" });
            }
        }
        debug!("Booking dialog advanced to {:?}", self.step);
        Ok(self.step)
    }

    /// Go back one step. On step 1 this cancels the booking and closes the dialog.
    pub fn back(&mut self) -> BookingStep {
        match self.step {
            BookingStep::DateTime => self.close(),
            BookingStep::Details => self.step = BookingStep::DateTime,
            BookingStep::Contact => self.step = BookingStep::Details,
            BookingStep::Closed | BookingStep::Submitting | BookingStep::Complete => {}
        }
        self.step
    }

    /// Price of the current selection for the open trainer
    pub fn quote(&self) -> PriceQuote {
        let price_label = self.trainer.as_ref().map(|t| t.price).unwrap_or_default();
        self.pricing.quote(price_label, &self.selection)
    }

    pub fn total_price(&self) -> u32 {
        self.quote().total
    }

    /// The side summary appears once a date and a time are chosen
    pub fn shows_summary(&self) -> bool {
        self.step.is_open() && self.selection.has_date_and_time()
    }

    /// Validate the contact details and enter `Submitting`.
    ///
    /// The returned ticket carries the request for the booking gateway; pass it back to
    /// [`Self::finish_submission`] together with the gateway's answer.
    pub fn begin_submission(&mut self) -> Result<SubmissionTicket, BookingError> {
        self.ensure_step(BookingStep::Contact, "submit")?;
        contact_errors(&self.selection)
            .into_result()
            .map_err(BookingError::ContactDetailsRequired)?;

        let trainer = self
            .trainer
            .as_ref()
            .ok_or(BookingError::InvalidTransition { step: self.step, action: "submit" })?;

        let request = BookingRequest {
            trainer_id: trainer.id,
            trainer_name: trainer.name.to_string(),
            selection: self.selection.clone(),
            total_price: self.total_price(),
        };

        info!(
            "Submitting booking with {} on {} at {} (total {})",
            request.trainer_name,
            request.selection.date_label(),
            request.selection.time,
            request.total_price
        );
        self.step = BookingStep::Submitting;

        Ok(SubmissionTicket {
            generation: self.generation,
            request,
        })
    }

    /// Apply a gateway confirmation. Returns `false` when the ticket is stale, i.e. the
    /// dialog was closed (or reopened) after the ticket was issued.
    pub fn finish_submission(&mut self, ticket: &SubmissionTicket, confirmation: BookingConfirmation) -> bool {
        if ticket.generation != self.generation || self.step != BookingStep::Submitting {
            debug!(
                "Ignoring booking confirmation {} from generation {} (current {}, {:?})",
                confirmation.reference, ticket.generation, self.generation, self.step
            );
            return false;
        }

        info!("Booking confirmed: {}", confirmation.reference);
        self.confirmation = Some(confirmation);
        self.step = BookingStep::Complete;
        true
    }

    /// The gateway call failed: go back to the contact step with the selection intact so the
    /// visitor can try again. Stale tickets are ignored like in [`Self::finish_submission`].
    pub fn abort_submission(&mut self, ticket: &SubmissionTicket) -> bool {
        if ticket.generation != self.generation || self.step != BookingStep::Submitting {
            return false;
        }
        self.step = BookingStep::Contact;
        true
    }
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new(PricingService::default())
    }
}

/// Missing step 1 fields
pub fn date_time_errors(selection: &BookingSelection) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if selection.date.is_none() {
        errors.add("date", "Please select a date");
    }
    if selection.time.is_empty() {
        errors.add("time", "Please select a time slot");
    }
    errors
}

/// Missing contact fields. Only emptiness is checked.
pub fn contact_errors(selection: &BookingSelection) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if selection.client_name.is_empty() {
        errors.add("name", "Full name is required");
    }
    if selection.client_email.is_empty() {
        errors.add("email", "Email address is required");
    }
    if selection.client_phone.is_empty() {
        errors.add("phone", "Phone number is required");
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2026, 10, 19) // Monday
    }

    fn trainer() -> Trainer {
        catalog::TRAINERS[0].clone()
    }

    fn confirmation(reference: &str) -> BookingConfirmation {
        BookingConfirmation {
            reference: reference.to_string(),
            trainer_name: trainer().name.to_string(),
            date: Some(date(2026, 10, 21)),
            time: "09:00 AM".to_string(),
            duration_id: "60".to_string(),
            total_price: 1200,
        }
    }

    fn opened() -> BookingWizard {
        let mut wizard = BookingWizard::default();
        wizard.open(trainer(), today());
        wizard
    }

    fn at_contact_step() -> BookingWizard {
        let mut wizard = opened();
        wizard.select_date(date(2026, 10, 21), today()).unwrap();
        wizard.select_time("09:00 AM").unwrap();
        wizard.next().unwrap();
        wizard.next().unwrap();
        wizard
    }

    fn fill_contact(wizard: &mut BookingWizard) {
        wizard.set_client_name("Asha Rao");
        wizard.set_client_email("asha@example.com");
        wizard.set_client_phone("+91 98765 43210");
    }

    #[test]
    fn test_open_starts_at_step_one_with_empty_selection() {
        let wizard = opened();
        assert_eq!(wizard.step(), BookingStep::DateTime);
        assert_eq!(wizard.selection(), &BookingSelection::default());
        assert_eq!(wizard.displayed_month(), CalendarMonthRef::new(2026, 10).unwrap());
        assert!(!wizard.shows_summary());
    }

    #[test]
    fn test_cannot_leave_step_one_without_date_and_time() {
        let mut wizard = opened();

        let err = wizard.next().unwrap_err();
        let fields = err.field_errors().unwrap();
        assert!(fields.contains("date"));
        assert!(fields.contains("time"));

        wizard.select_date(date(2026, 10, 21), today()).unwrap();
        let err = wizard.next().unwrap_err();
        assert_eq!(err.field_errors().unwrap().fields().collect::<Vec<_>>(), vec!["time"]);
        assert_eq!(wizard.step(), BookingStep::DateTime);

        wizard.select_time("09:00 AM").unwrap();
        assert!(wizard.shows_summary());
        assert_eq!(wizard.next().unwrap(), BookingStep::Details);
    }

    #[test]
    fn test_select_date_rejects_unbookable_dates() {
        let mut wizard = opened();

        assert_eq!(
            wizard.select_date(date(2026, 10, 18), today()),
            Err(BookingError::DateUnavailable(date(2026, 10, 18)))
        );
        // Sunday
        assert!(wizard.select_date(date(2026, 10, 25), today()).is_err());
        // padding day from next month
        assert!(wizard.select_date(date(2026, 11, 2), today()).is_err());

        wizard.show_next_month();
        assert!(wizard.select_date(date(2026, 11, 2), today()).is_ok());
        assert_eq!(wizard.selection().date_label(), "2026-11-02");
    }

    #[test]
    fn test_select_time_rejects_unavailable_slots() {
        let mut wizard = opened();
        assert_eq!(
            wizard.select_time("08:00 AM"),
            Err(BookingError::SlotUnavailable("08:00 AM".to_string()))
        );
        assert!(wizard.select_time("13:37").is_err());
        assert!(wizard.selection().time.is_empty());
    }

    #[test]
    fn test_details_step_options() {
        let mut wizard = opened();
        wizard.select_date(date(2026, 10, 21), today()).unwrap();
        wizard.select_time("09:00 AM").unwrap();
        wizard.next().unwrap();

        wizard.select_duration("90").unwrap();
        wizard.select_session_type("couple").unwrap();
        wizard.set_special_requests("Lower back pain");
        assert_eq!(
            wizard.select_duration("15"),
            Err(BookingError::UnknownDuration("15".to_string()))
        );
        assert!(wizard.select_session_type("family").is_err());

        let selection = wizard.selection();
        assert_eq!(selection.duration_id, "90");
        assert_eq!(selection.session_type_id, "couple");
        assert_eq!(selection.special_requests, "Lower back pain");
        // 09:00 AM slot is 1200
        assert_eq!(wizard.total_price(), 2300);
    }

    #[test]
    fn test_back_navigation() {
        let mut wizard = at_contact_step();
        assert_eq!(wizard.back(), BookingStep::Details);
        assert_eq!(wizard.back(), BookingStep::DateTime);
        // date and time survive stepping back
        assert!(wizard.selection().has_date_and_time());

        assert_eq!(wizard.back(), BookingStep::Closed);
        assert!(!wizard.is_open());
        assert_eq!(wizard.selection(), &BookingSelection::default());
    }

    #[test]
    fn test_cannot_submit_without_contact_fields() {
        let mut wizard = at_contact_step();
        assert_eq!(
            wizard.next(),
            Err(BookingError::InvalidTransition { step: BookingStep::Contact, action: "continue" })
        );

        wizard.set_client_name("Asha Rao");
        wizard.set_client_email("");
        let err = wizard.begin_submission().unwrap_err();
        let fields = err.field_errors().unwrap();
        assert_eq!(fields.get("email"), Some("Email address is required"));
        assert_eq!(fields.get("phone"), Some("Phone number is required"));
        assert!(!fields.contains("name"));
        assert_eq!(wizard.step(), BookingStep::Contact);
    }

    #[test]
    fn test_blank_but_non_empty_contact_fields_are_accepted() {
        let mut wizard = at_contact_step();
        wizard.set_client_name(" ");
        wizard.set_client_email(" ");
        wizard.set_client_phone(" ");

        let ticket = wizard.begin_submission().unwrap();
        assert_eq!(wizard.step(), BookingStep::Submitting);
        assert_eq!(ticket.request.selection.client_email, " ");
    }

    #[test]
    fn test_submission_completes() {
        let mut wizard = at_contact_step();
        fill_contact(&mut wizard);

        let ticket = wizard.begin_submission().unwrap();
        assert_eq!(wizard.step(), BookingStep::Submitting);
        assert_eq!(ticket.request.trainer_id, trainer().id);
        assert_eq!(ticket.request.total_price, 1200);
        assert_eq!(ticket.request.selection.client_name, "Asha Rao");

        // no edits while the request is out
        wizard.set_client_name("Someone Else");
        assert_eq!(wizard.back(), BookingStep::Submitting);
        assert!(wizard.begin_submission().is_err());

        assert!(wizard.finish_submission(&ticket, confirmation("booking::1")));
        assert_eq!(wizard.step(), BookingStep::Complete);
        assert_eq!(wizard.confirmation().unwrap().reference, "booking::1");
        assert_eq!(wizard.selection().client_name, "Asha Rao");
    }

    #[test]
    fn test_close_during_submission_detaches_result() {
        let mut wizard = at_contact_step();
        fill_contact(&mut wizard);
        let ticket = wizard.begin_submission().unwrap();

        wizard.close();
        assert!(!wizard.finish_submission(&ticket, confirmation("booking::late")));
        assert_eq!(wizard.step(), BookingStep::Closed);
        assert!(wizard.confirmation().is_none());

        // a stale ticket must not complete a newer booking either
        wizard.open(trainer(), today());
        assert!(!wizard.finish_submission(&ticket, confirmation("booking::late")));
        assert_eq!(wizard.step(), BookingStep::DateTime);
    }

    #[test]
    fn test_abort_returns_to_contact_step() {
        let mut wizard = at_contact_step();
        fill_contact(&mut wizard);
        let ticket = wizard.begin_submission().unwrap();

        assert!(wizard.abort_submission(&ticket));
        assert_eq!(wizard.step(), BookingStep::Contact);
        assert_eq!(wizard.selection().client_name, "Asha Rao");
        // already handled
        assert!(!wizard.abort_submission(&ticket));
    }

    #[test]
    fn test_close_resets_selection_for_next_open() {
        let mut wizard = at_contact_step();
        fill_contact(&mut wizard);
        wizard.close();

        wizard.open(catalog::TRAINERS[1].clone(), today());
        assert_eq!(wizard.selection(), &BookingSelection::default());
        assert_eq!(wizard.trainer().map(|t| t.id), Some(catalog::TRAINERS[1].id));
    }

    #[test]
    fn test_close_after_completion_resets() {
        let mut wizard = at_contact_step();
        fill_contact(&mut wizard);
        let ticket = wizard.begin_submission().unwrap();
        wizard.finish_submission(&ticket, confirmation("booking::2"));

        wizard.close();
        assert_eq!(wizard.step(), BookingStep::Closed);
        assert!(wizard.confirmation().is_none());
        assert_eq!(wizard.selection(), &BookingSelection::default());
    }
}
