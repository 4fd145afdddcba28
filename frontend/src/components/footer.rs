use std::rc::Rc;
use yew::prelude::*;
use web_sys::HtmlInputElement;
use gloo::timers::callback::Timeout;
use backend::NewsletterSignup;
use crate::services::AppServices;
use shared::catalog;

enum NewsletterAction {
    SetEmail(String),
    Subscribe,
    Expire(u64),
}

#[derive(Clone, Default, PartialEq)]
struct NewsletterState {
    signup: NewsletterSignup,
    /// Token of the confirmation currently showing
    pending_expiry: Option<u64>,
}

impl Reducible for NewsletterState {
    type Action = NewsletterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut signup = self.signup.clone();
        let mut pending_expiry = self.pending_expiry;
        match action {
            NewsletterAction::SetEmail(email) => signup.set_email(email),
            NewsletterAction::Subscribe => match signup.subscribe() {
                Some(token) => pending_expiry = Some(token),
                None => return self,
            },
            NewsletterAction::Expire(token) => signup.expire(token),
        }
        Rc::new(Self { signup, pending_expiry })
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub services: AppServices,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let newsletter = use_reducer(NewsletterState::default);
    let confirmation_ms = props.services.config.newsletter_confirmation_ms;

    // each signup gets its own timer; an older one expiring does not hide a newer confirmation
    use_effect_with(newsletter.pending_expiry, {
        let dispatcher = newsletter.dispatcher();
        move |pending| {
            if let Some(token) = *pending {
                Timeout::new(confirmation_ms, move || {
                    dispatcher.dispatch(NewsletterAction::Expire(token));
                })
                .forget();
            }
            || ()
        }
    });

    let on_email_input = {
        let newsletter = newsletter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            newsletter.dispatch(NewsletterAction::SetEmail(input.value()));
        })
    };

    let on_subscribe = {
        let newsletter = newsletter.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            newsletter.dispatch(NewsletterAction::Subscribe);
        })
    };

    html! {
        <footer id="contact" class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <a href="/" class="logo">{"Svasthify"}</a>
                    <p>{"Transform Your Life"}</p>
                    <p class="footer-note">
                        {"Personal yoga and wellness sessions at home, with certified trainers across India."}
                    </p>
                </div>

                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        {for catalog::FOOTER_LINKS.iter().map(|link| html! {
                            <li key={link.name}><a href={link.href}>{link.name}</a></li>
                        })}
                    </ul>
                </div>

                <div>
                    <h4>{"Our Services"}</h4>
                    <ul>
                        {for catalog::FOOTER_SERVICES.iter().map(|service| html! { <li key={*service}>{*service}</li> })}
                    </ul>
                </div>

                <div>
                    <h4>{"Get in Touch"}</h4>
                    <p>{"info@svasthify.com"}</p>
                    <p>{"+1 234 567 8910"}</p>

                    <h4>{"Weekly Wellness Tips"}</h4>
                    <form class="newsletter-form" onsubmit={on_subscribe}>
                        <input
                            type="email"
                            placeholder="Enter your email"
                            value={newsletter.signup.email().to_string()}
                            oninput={on_email_input}
                        />
                        <button type="submit" class="button button-primary">{"Subscribe"}</button>
                    </form>
                    if newsletter.signup.is_subscribed() {
                        <p class="newsletter-success">{"✓ Successfully subscribed!"}</p>
                    }
                </div>
            </div>
            <div class="footer-bottom">
                <p>{"© 2024 Svasthify Wellness Pvt. Ltd."}</p>
            </div>
        </footer>
    }
}
