use yew::prelude::*;
use gloo::timers::callback::Timeout;
use backend::welcome_banner_message;
use shared::{Trainer, User};

mod components;
mod hooks;
mod services;

use components::about_section::AboutSection;
use components::auth_modal::AuthModal;
use components::booking_modal::BookingModal;
use components::footer::Footer;
use components::header::Header;
use components::hero_section::HeroSection;
use components::services_section::ServicesSection;
use components::testimonials_section::TestimonialsSection;
use components::trainers_section::TrainersSection;
use hooks::use_auth::use_auth;
use hooks::use_notifications::{use_notifications, NotificationAction};
use services::logging::Logger;
use services::AppServices;

fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));
    match element {
        Some(element) => element.scroll_into_view(),
        None => Logger::warn_with_component("app", &format!("No section with id '{}'", id)),
    }
}

#[function_component(App)]
fn app() -> Html {
    let services = use_memo((), |_| AppServices::new());
    let services: AppServices = (*services).clone();

    let auth = use_auth(&services);
    let notifications = use_notifications();

    let show_auth_modal = use_state(|| false);
    let booking_trainer = use_state(|| Option::<Trainer>::None);
    let welcome_message = use_state(|| Option::<String>::None);
    // replacing the handle cancels the previous banner timer
    let welcome_timer = use_mut_ref(|| Option::<Timeout>::None);

    // A restored session gets the sample notifications but no welcome-back entry
    use_effect_with(auth.state.restoring, {
        let user = auth.state.user.clone();
        let notifications = notifications.clone();
        let seed = services.config.seed_notifications;
        move |restoring| {
            if let (false, Some(user)) = (*restoring, user) {
                notifications.dispatch(NotificationAction::Restored { user_type: user.user_type, seed });
            }
            || ()
        }
    });

    let on_sign_in_click = {
        let show_auth_modal = show_auth_modal.clone();
        Callback::from(move |_: ()| show_auth_modal.set(true))
    };

    let on_auth_close = {
        let show_auth_modal = show_auth_modal.clone();
        Callback::from(move |_: ()| show_auth_modal.set(false))
    };

    let on_auth_success = {
        let signed_in = auth.actions.signed_in.clone();
        let notifications = notifications.clone();
        let show_auth_modal = show_auth_modal.clone();
        let welcome_message = welcome_message.clone();
        let welcome_timer = welcome_timer.clone();
        let seed = services.config.seed_notifications;
        let toast_ms = services.config.welcome_toast_ms;
        Callback::from(move |user: User| {
            Logger::info_with_component("app", &format!("Signed in as {}", user.user_type));
            let user_type = user.user_type;
            signed_in.emit(user);
            notifications.dispatch(NotificationAction::SignedIn { user_type, seed });
            show_auth_modal.set(false);

            welcome_message.set(Some(welcome_banner_message(user_type).to_string()));
            let welcome_message = welcome_message.clone();
            *welcome_timer.borrow_mut() = Some(Timeout::new(toast_ms, move || welcome_message.set(None)));
        })
    };

    let on_sign_out = {
        let sign_out = auth.actions.sign_out.clone();
        let notifications = notifications.clone();
        Callback::from(move |_: ()| {
            sign_out.emit(());
            notifications.dispatch(NotificationAction::Clear);
        })
    };

    let on_mark_as_read = {
        let notifications = notifications.clone();
        Callback::from(move |id: String| notifications.dispatch(NotificationAction::MarkAsRead(id)))
    };

    let on_mark_all_as_read = {
        let notifications = notifications.clone();
        Callback::from(move |_: ()| notifications.dispatch(NotificationAction::MarkAllAsRead))
    };

    let on_book = {
        let booking_trainer = booking_trainer.clone();
        Callback::from(move |trainer: Trainer| {
            Logger::info_with_component("app", &format!("Booking {}", trainer.name));
            booking_trainer.set(Some(trainer));
        })
    };

    let on_booking_close = {
        let booking_trainer = booking_trainer.clone();
        Callback::from(move |_: ()| booking_trainer.set(None))
    };

    let on_explore = Callback::from(|_: ()| scroll_to_section("trainers"));

    html! {
        <div class="app">
            <Header
                user={auth.state.user.clone()}
                notifications={notifications.center.notifications().to_vec()}
                unread_count={notifications.center.unread_count()}
                welcome_message={(*welcome_message).clone()}
                {on_sign_in_click}
                {on_sign_out}
                {on_mark_as_read}
                {on_mark_all_as_read}
            />

            <main>
                <HeroSection {on_explore} />
                <ServicesSection />
                <TrainersSection {on_book} />
                <TestimonialsSection services={services.clone()} />
                <AboutSection />
            </main>

            <Footer services={services.clone()} />

            <BookingModal
                trainer={(*booking_trainer).clone()}
                on_close={on_booking_close}
                services={services.clone()}
            />
            <AuthModal
                is_open={*show_auth_modal}
                on_close={on_auth_close}
                on_success={on_auth_success}
                services={services.clone()}
            />
        </div>
    }
}

fn main() {
    Logger::init();
    Logger::info_with_component("app", "Starting Svasthify");
    yew::Renderer::<App>::new().render();
}
