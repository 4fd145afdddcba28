use std::rc::Rc;

use backend::{BookingError, BookingWizard, PricingService, SubmissionTicket};
use chrono::NaiveDate;
use shared::{BookingConfirmation, Trainer};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::AppServices;

pub enum WizardAction {
    Open { trainer: Trainer, today: NaiveDate },
    Close,
    Next,
    Back,
    PreviousMonth,
    NextMonth,
    SelectDate { date: NaiveDate, today: NaiveDate },
    SelectTime(String),
    SelectDuration(String),
    SelectSessionType(String),
    SetSpecialRequests(String),
    SetClientName(String),
    SetClientEmail(String),
    SetClientPhone(String),
    Submit,
    Confirmed(SubmissionTicket, BookingConfirmation),
    SubmissionFailed(SubmissionTicket),
}

#[derive(Clone, PartialEq)]
pub struct WizardState {
    pub wizard: BookingWizard,
    /// Outcome of the last refused action, shown inline
    pub error: Option<BookingError>,
    /// Shown when the gateway call failed
    pub submit_error: Option<String>,
    /// Submission waiting on the booking gateway
    pub pending: Option<SubmissionTicket>,
}

impl WizardState {
    fn new(pricing: PricingService) -> Self {
        Self {
            wizard: BookingWizard::new(pricing),
            error: None,
            submit_error: None,
            pending: None,
        }
    }
}

impl Reducible for WizardState {
    type Action = WizardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let wizard = &mut next.wizard;

        let result = match action {
            WizardAction::Open { trainer, today } => {
                wizard.open(trainer, today);
                next.pending = None;
                next.submit_error = None;
                Ok(())
            }
            WizardAction::Close => {
                wizard.close();
                next.pending = None;
                next.submit_error = None;
                Ok(())
            }
            WizardAction::Next => wizard.next().map(|_| ()),
            WizardAction::Back => {
                wizard.back();
                Ok(())
            }
            WizardAction::PreviousMonth => {
                wizard.show_previous_month();
                Ok(())
            }
            WizardAction::NextMonth => {
                wizard.show_next_month();
                Ok(())
            }
            WizardAction::SelectDate { date, today } => wizard.select_date(date, today),
            WizardAction::SelectTime(time) => wizard.select_time(&time),
            WizardAction::SelectDuration(id) => wizard.select_duration(&id),
            WizardAction::SelectSessionType(id) => wizard.select_session_type(&id),
            WizardAction::SetSpecialRequests(value) => {
                wizard.set_special_requests(value);
                Ok(())
            }
            WizardAction::SetClientName(value) => {
                wizard.set_client_name(value);
                Ok(())
            }
            WizardAction::SetClientEmail(value) => {
                wizard.set_client_email(value);
                Ok(())
            }
            WizardAction::SetClientPhone(value) => {
                wizard.set_client_phone(value);
                Ok(())
            }
            WizardAction::Submit => wizard.begin_submission().map(|ticket| {
                next.submit_error = None;
                next.pending = Some(ticket);
            }),
            WizardAction::Confirmed(ticket, confirmation) => {
                if wizard.finish_submission(&ticket, confirmation) {
                    next.pending = None;
                }
                Ok(())
            }
            WizardAction::SubmissionFailed(ticket) => {
                if wizard.abort_submission(&ticket) {
                    next.pending = None;
                    next.submit_error = Some(backend::GENERIC_FAILURE_MESSAGE.to_string());
                }
                Ok(())
            }
        };

        next.error = result.err();
        Rc::new(next)
    }
}

/// Booking dialog state. Submissions are sent to the booking gateway from an effect and their
/// answer is dispatched back; the wizard drops answers for a dialog that was closed meanwhile.
#[hook]
pub fn use_booking_wizard(services: &AppServices) -> UseReducerHandle<WizardState> {
    let pricing = PricingService::new(services.config.default_base_price);
    let state = use_reducer(move || WizardState::new(pricing));

    use_effect_with(state.pending.clone(), {
        let dispatcher = state.dispatcher();
        let gateway = services.booking_gateway.clone();

        move |pending| {
            if let Some(ticket) = pending.clone() {
                spawn_local(async move {
                    match gateway.submit_booking(&ticket.request).await {
                        Ok(confirmation) => dispatcher.dispatch(WizardAction::Confirmed(ticket, confirmation)),
                        Err(e) => {
                            Logger::error_with_component("booking", &format!("Booking failed: {:#}", e));
                            dispatcher.dispatch(WizardAction::SubmissionFailed(ticket));
                        }
                    }
                });
            }
            || ()
        }
    });

    state
}
