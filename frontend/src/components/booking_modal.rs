use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent};
use backend::{contact_errors, format_rupees, today, BookingStep};
use shared::{catalog, Trainer};
use super::booking_calendar::BookingCalendar;
use crate::hooks::use_booking_wizard::{use_booking_wizard, WizardAction};
use crate::services::AppServices;

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    /// Trainer being booked; `None` keeps the dialog closed
    pub trainer: Option<Trainer>,
    pub on_close: Callback<()>,
    pub services: AppServices,
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let state = use_booking_wizard(&props.services);
    let today = today();

    // Open with a fresh selection whenever a trainer is handed in, reset when taken away
    use_effect_with(props.trainer.clone(), {
        let dispatcher = state.dispatcher();
        move |trainer| {
            match trainer.clone() {
                Some(trainer) => dispatcher.dispatch(WizardAction::Open { trainer, today }),
                None => dispatcher.dispatch(WizardAction::Close),
            }
            || ()
        }
    });

    let wizard = &state.wizard;
    let Some(trainer) = wizard.trainer().cloned() else {
        return html! {};
    };
    let step = wizard.step();
    let selection = wizard.selection().clone();
    let quote = wizard.quote();

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_backdrop_click = on_close.clone();
    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_back = {
        let dispatcher = state.dispatcher();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            if step == BookingStep::DateTime {
                // cancelling from the first step closes the dialog
                on_close.emit(());
            } else {
                dispatcher.dispatch(WizardAction::Back);
            }
        })
    };

    let on_forward = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            if step == BookingStep::Contact {
                dispatcher.dispatch(WizardAction::Submit);
            } else {
                dispatcher.dispatch(WizardAction::Next);
            }
        })
    };

    let forward_disabled = match step {
        BookingStep::DateTime => !selection.has_date_and_time(),
        BookingStep::Contact => !contact_errors(&selection).is_empty(),
        BookingStep::Submitting => true,
        _ => false,
    };

    let field_error = |field: &str| -> Html {
        match state.error.as_ref().and_then(|e| e.field_errors()).and_then(|errors| errors.get(field)) {
            Some(message) => html! { <p class="field-error">{message}</p> },
            None => html! {},
        }
    };

    if step == BookingStep::Complete {
        let confirmation = wizard.confirmation().cloned();
        return html! {
            <div class="modal-backdrop" onclick={on_backdrop_click}>
                <div class="modal booking-modal" onclick={on_modal_click}>
                    <button class="modal-close" onclick={on_close.clone()}>{"×"}</button>
                    <div class="booking-complete">
                        <div class="success-icon">{"✓"}</div>
                        <h2>{step.title()}</h2>
                        <p>{format!("Your session with {} has been successfully booked.", trainer.name)}</p>
                        {if let Some(confirmation) = confirmation {
                            html! {
                                <div class="booking-details">
                                    <h3>{"Booking Details:"}</h3>
                                    <div class="detail-row"><span>{"Date:"}</span><span>{confirmation.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()}</span></div>
                                    <div class="detail-row"><span>{"Time:"}</span><span>{confirmation.time.clone()}</span></div>
                                    <div class="detail-row"><span>{"Duration:"}</span><span>{format!("{} minutes", confirmation.duration_id)}</span></div>
                                    <div class="detail-row total"><span>{"Total:"}</span><span>{format_rupees(confirmation.total_price)}</span></div>
                                    <div class="detail-row reference"><span>{"Reference:"}</span><span>{confirmation.reference.clone()}</span></div>
                                </div>
                            }
                        } else {
                            html! {}
                        }}
                        <p class="booking-note">{"A confirmation email has been sent to your email address with all the details."}</p>
                        <button class="button button-primary" onclick={on_close}>{"Close"}</button>
                    </div>
                </div>
            </div>
        };
    }

    let step_content = match step {
        BookingStep::DateTime => {
            let on_select_date = {
                let dispatcher = state.dispatcher();
                Callback::from(move |date: chrono::NaiveDate| dispatcher.dispatch(WizardAction::SelectDate { date, today }))
            };
            let on_previous_month = {
                let dispatcher = state.dispatcher();
                Callback::from(move |_: ()| dispatcher.dispatch(WizardAction::PreviousMonth))
            };
            let on_next_month = {
                let dispatcher = state.dispatcher();
                Callback::from(move |_: ()| dispatcher.dispatch(WizardAction::NextMonth))
            };

            html! {
                <div class="booking-step">
                    <h2>{step.title()}</h2>
                    <p class="step-subtitle">{"Choose your preferred date and time slot"}</p>
                    <BookingCalendar
                        month={wizard.displayed_month()}
                        {today}
                        selected={selection.date}
                        on_select={on_select_date}
                        {on_previous_month}
                        {on_next_month}
                    />
                    {field_error("date")}
                    {if selection.date.is_some() {
                        html! {
                            <div class="time-slots">
                                <h3>{"Available Time Slots"}</h3>
                                <div class="time-slot-grid">
                                    {for catalog::TIME_SLOTS.iter().map(|slot| {
                                        let class = if selection.time == slot.time {
                                            "time-slot selected"
                                        } else if slot.available {
                                            "time-slot"
                                        } else {
                                            "time-slot unavailable"
                                        };
                                        let onclick = {
                                            let dispatcher = state.dispatcher();
                                            let time = slot.time.to_string();
                                            Callback::from(move |_: MouseEvent| dispatcher.dispatch(WizardAction::SelectTime(time.clone())))
                                        };
                                        html! {
                                            <button {class} disabled={!slot.available} {onclick}>
                                                <div>{slot.time}</div>
                                                <div class="slot-price">{format_rupees(slot.price)}</div>
                                            </button>
                                        }
                                    })}
                                </div>
                                {field_error("time")}
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            }
        }
        BookingStep::Details => {
            let on_requests_input = {
                let dispatcher = state.dispatcher();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    dispatcher.dispatch(WizardAction::SetSpecialRequests(input.value()));
                })
            };

            html! {
                <div class="booking-step">
                    <h2>{step.title()}</h2>
                    <p class="step-subtitle">{"Customize your session preferences"}</p>

                    <label class="form-label">{"Session Duration"}</label>
                    <div class="duration-grid">
                        {for catalog::DURATIONS.iter().map(|duration| {
                            let class = if selection.duration_id == duration.id { "option-card selected" } else { "option-card" };
                            let onclick = {
                                let dispatcher = state.dispatcher();
                                let id = duration.id.to_string();
                                Callback::from(move |_: MouseEvent| dispatcher.dispatch(WizardAction::SelectDuration(id.clone())))
                            };
                            html! {
                                <button {class} {onclick}>
                                    <div class="option-title">{duration.name}</div>
                                    <div class="option-detail">{format!("×{} price", duration.multiplier)}</div>
                                </button>
                            }
                        })}
                    </div>

                    <label class="form-label">{"Session Type"}</label>
                    <div class="session-type-list">
                        {for catalog::SESSION_TYPES.iter().map(|session_type| {
                            let class = if selection.session_type_id == session_type.id { "option-row selected" } else { "option-row" };
                            let onclick = {
                                let dispatcher = state.dispatcher();
                                let id = session_type.id.to_string();
                                Callback::from(move |_: MouseEvent| dispatcher.dispatch(WizardAction::SelectSessionType(id.clone())))
                            };
                            let surcharge = if session_type.surcharge > 0 {
                                format!("+{}", format_rupees(session_type.surcharge))
                            } else {
                                "Included".to_string()
                            };
                            html! {
                                <button {class} {onclick}>
                                    <div>
                                        <div class="option-title">{session_type.name}</div>
                                        <div class="option-detail">{session_type.duration}</div>
                                    </div>
                                    <div class="option-price">{surcharge}</div>
                                </button>
                            }
                        })}
                    </div>

                    <label for="requests" class="form-label">{"Special Requests (Optional)"}</label>
                    <textarea
                        id="requests"
                        class="form-input"
                        placeholder="Any specific requirements, health conditions, or preferences..."
                        value={selection.special_requests.clone()}
                        oninput={on_requests_input}
                    />
                </div>
            }
        }
        BookingStep::Contact | BookingStep::Submitting => {
            let text_input = |make: fn(String) -> WizardAction| {
                let dispatcher = state.dispatcher();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    dispatcher.dispatch(make(input.value()));
                })
            };

            html! {
                <div class="booking-step">
                    <h2>{BookingStep::Contact.title()}</h2>
                    <p class="step-subtitle">{"Please provide your details to complete the booking"}</p>

                    <div class="form-group">
                        <label for="name" class="form-label">{"Full Name *"}</label>
                        <input id="name" type="text" class="form-input" placeholder="Enter your full name"
                            value={selection.client_name.clone()} oninput={text_input(WizardAction::SetClientName)} />
                        {field_error("name")}
                    </div>
                    <div class="form-group">
                        <label for="email" class="form-label">{"Email Address *"}</label>
                        <input id="email" type="email" class="form-input" placeholder="Enter your email address"
                            value={selection.client_email.clone()} oninput={text_input(WizardAction::SetClientEmail)} />
                        {field_error("email")}
                    </div>
                    <div class="form-group">
                        <label for="phone" class="form-label">{"Phone Number *"}</label>
                        <input id="phone" type="tel" class="form-input" placeholder="Enter your phone number"
                            value={selection.client_phone.clone()} oninput={text_input(WizardAction::SetClientPhone)} />
                        {field_error("phone")}
                    </div>

                    <div class="booking-terms">
                        <h4>{"Booking Terms"}</h4>
                        <ul>
                            {for catalog::BOOKING_TERMS.iter().map(|term| html! { <li>{*term}</li> })}
                        </ul>
                    </div>
                    {if let Some(message) = state.submit_error.clone() {
                        html! { <div class="submit-error">{message}</div> }
                    } else {
                        html! {}
                    }}
                </div>
            }
        }
        BookingStep::Closed | BookingStep::Complete => html! {},
    };

    let current_indicator = step.indicator().unwrap_or(0);
    let step_indicator = html! {
        <div class="step-indicator">
            {for (1u8..=3).map(|n| {
                let class = if current_indicator >= n { "step-dot active" } else { "step-dot" };
                let connector = if n < 3 {
                    let class = if current_indicator > n { "step-connector active" } else { "step-connector" };
                    html! { <div {class}></div> }
                } else {
                    html! {}
                };
                html! { <><div {class}>{n}</div>{connector}</> }
            })}
        </div>
    };

    let summary = if wizard.shows_summary() {
        let session_type_name = catalog::find_session_type(&selection.session_type_id)
            .map(|s| s.name)
            .unwrap_or_default();
        html! {
            <div class="booking-summary">
                <h4>{"Booking Summary"}</h4>
                <div class="detail-row"><span>{"Date:"}</span><span>{selection.date_label()}</span></div>
                <div class="detail-row"><span>{"Time:"}</span><span>{selection.time.clone()}</span></div>
                <div class="detail-row"><span>{"Duration:"}</span><span>{format!("{} min", selection.duration_id)}</span></div>
                <div class="detail-row"><span>{"Type:"}</span><span>{session_type_name}</span></div>
                <div class="detail-row total"><span>{"Total:"}</span><span>{format_rupees(quote.total)}</span></div>
            </div>
        }
    } else {
        html! {}
    };

    let forward_label = match step {
        BookingStep::Submitting => html! { <><span class="spinner-small"></span><span>{step.title()}</span></> },
        BookingStep::Contact => html! { {"Complete Booking"} },
        _ => html! { {"Next"} },
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal booking-modal" onclick={on_modal_click}>
                <button class="modal-close" onclick={on_close}>{"×"}</button>
                <div class="booking-layout">
                    <aside class="booking-trainer-panel">
                        <img src={trainer.image} alt={trainer.name} class="trainer-avatar" />
                        <h3>{trainer.name}</h3>
                        <p class="trainer-specialization">{trainer.specialization}</p>
                        <p class="trainer-rating">{format!("★ {} ({} reviews)", trainer.rating, trainer.reviews)}</p>
                        <ul class="trainer-facts">
                            <li>{format!("{} experience", trainer.experience)}</li>
                            <li>{trainer.location}</li>
                            <li>{trainer.availability}</li>
                        </ul>
                        <div class="trainer-about">
                            <h4>{"About"}</h4>
                            <p>{trainer.bio}</p>
                        </div>
                        {summary}
                    </aside>
                    <section class="booking-steps">
                        {step_indicator}
                        <div class="step-content">{step_content}</div>
                        <div class="step-actions">
                            <button class="button button-outline" onclick={on_back} disabled={step == BookingStep::Submitting}>
                                {if step == BookingStep::DateTime { "Cancel" } else { "Back" }}
                            </button>
                            <button class="button button-primary" onclick={on_forward} disabled={forward_disabled}>
                                {forward_label}
                            </button>
                        </div>
                    </section>
                </div>
            </div>
        </div>
    }
}
