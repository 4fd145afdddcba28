use yew::prelude::*;
use web_sys::{HtmlInputElement, MouseEvent};
use wasm_bindgen_futures::spawn_local;
use backend::{AuthForm, AuthMode, AuthSubmitError, FieldErrors};
use shared::{User, UserType};
use crate::services::AppServices;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct AuthModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    /// Fired with the user and the tab they signed in through
    pub on_success: Callback<User>,
    pub services: AppServices,
}

#[function_component(AuthModal)]
pub fn auth_modal(props: &AuthModalProps) -> Html {
    let mode = use_state(|| AuthMode::Login);
    let user_type = use_state(|| UserType::User);
    let form = use_state(AuthForm::default);
    let errors = use_state(FieldErrors::new);
    let submit_error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);
    let show_password = use_state(|| false);
    let remember_me = use_state(|| false);

    // Reset form state when modal opens
    use_effect_with(props.is_open, {
        let form = form.clone();
        let errors = errors.clone();
        let submit_error = submit_error.clone();
        let is_submitting = is_submitting.clone();
        let show_password = show_password.clone();
        let remember_me = remember_me.clone();
        move |is_open| {
            if *is_open {
                form.set(AuthForm::default());
                errors.set(FieldErrors::new());
                submit_error.set(None);
                is_submitting.set(false);
                show_password.set(false);
                remember_me.set(false);
            }
            || ()
        }
    });

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let select_user_type = |selected: UserType| {
        let user_type = user_type.clone();
        Callback::from(move |_: MouseEvent| user_type.set(selected))
    };

    let on_switch_mode = {
        let mode = mode.clone();
        let errors = errors.clone();
        let submit_error = submit_error.clone();
        Callback::from(move |_: MouseEvent| {
            mode.set(mode.toggled());
            errors.set(FieldErrors::new());
            submit_error.set(None);
        })
    };

    let field_input = |update: fn(&mut AuthForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            update(&mut next, input.value());
            form.set(next);
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let toggle_remember = {
        let remember_me = remember_me.clone();
        Callback::from(move |_: Event| remember_me.set(!*remember_me))
    };

    let on_submit = {
        let mode = mode.clone();
        let user_type = user_type.clone();
        let form = form.clone();
        let errors = errors.clone();
        let submit_error = submit_error.clone();
        let is_submitting = is_submitting.clone();
        let auth = props.services.auth.clone();
        let on_success = props.on_success.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let mode = *mode;
            let user_type = *user_type;
            let form = (*form).clone();
            let errors = errors.clone();
            let submit_error = submit_error.clone();
            let is_submitting = is_submitting.clone();
            let auth = auth.clone();
            let on_success = on_success.clone();
            let on_close = on_close.clone();

            errors.set(FieldErrors::new());
            submit_error.set(None);
            is_submitting.set(true);

            spawn_local(async move {
                match auth.submit_form(mode, user_type, &form).await {
                    Ok(user) => {
                        Logger::info_with_component("auth", &format!("Signed in as {}", user.email));
                        on_success.emit(user);
                        on_close.emit(());
                    }
                    Err(AuthSubmitError::Invalid(field_errors)) => errors.set(field_errors),
                    Err(e) => submit_error.set(e.submit_message().map(str::to_string)),
                }
                is_submitting.set(false);
            });
        })
    };

    if !props.is_open {
        return html! {};
    }

    let field_error = |field: &str| -> Html {
        match errors.get(field) {
            Some(message) => html! { <p class="field-error">{message}</p> },
            None => html! {},
        }
    };

    let input_class = |field: &str| {
        if errors.contains(field) { "form-input error" } else { "form-input" }
    };

    let tab_class = |tab: UserType| {
        if *user_type == tab { "auth-tab active" } else { "auth-tab" }
    };

    let password_type = if *show_password { "text" } else { "password" };
    let trainer_theme = *user_type == UserType::Trainer;

    html! {
        <div class="modal-backdrop" onclick={on_close.clone()}>
            <div class={classes!("modal", "auth-modal", trainer_theme.then_some("trainer-theme"))} onclick={on_modal_click}>
                <button class="modal-close" onclick={on_close}>{"×"}</button>

                <div class="auth-tabs">
                    <button class={tab_class(UserType::User)} onclick={select_user_type(UserType::User)}>{"Practitioner"}</button>
                    <button class={tab_class(UserType::Trainer)} onclick={select_user_type(UserType::Trainer)}>{"Trainer"}</button>
                </div>

                <div class="auth-body">
                    <h2>{mode.heading()}</h2>
                    <p class="auth-subheading">{mode.subheading(*user_type)}</p>

                    <form class="auth-form" onsubmit={on_submit}>
                        {if *mode == AuthMode::Signup {
                            html! {
                                <div class="form-group">
                                    <label for="auth-name" class="form-label">{"Full Name"}</label>
                                    <input id="auth-name" type="text" class={input_class("name")} placeholder="Enter your full name"
                                        value={form.name.clone()} oninput={field_input(|f, v| f.name = v)} />
                                    {field_error("name")}
                                </div>
                            }
                        } else {
                            html! {}
                        }}

                        <div class="form-group">
                            <label for="auth-email" class="form-label">{"Email"}</label>
                            <input id="auth-email" type="email" class={input_class("email")} placeholder="Enter your email"
                                value={form.email.clone()} oninput={field_input(|f, v| f.email = v)} />
                            {field_error("email")}
                        </div>

                        <div class="form-group">
                            <label for="auth-password" class="form-label">{"Password"}</label>
                            <div class="password-input-group">
                                <input id="auth-password" type={password_type} class={input_class("password")} placeholder="Enter your password"
                                    value={form.password.clone()} oninput={field_input(|f, v| f.password = v)} />
                                <button type="button" class="password-toggle" onclick={toggle_password}>
                                    {if *show_password { "Hide" } else { "Show" }}
                                </button>
                            </div>
                            {field_error("password")}
                        </div>

                        {if *mode == AuthMode::Signup {
                            html! {
                                <div class="form-group">
                                    <label for="auth-confirm" class="form-label">{"Confirm Password"}</label>
                                    <input id="auth-confirm" type={password_type} class={input_class("confirm_password")} placeholder="Confirm your password"
                                        value={form.confirm_password.clone()} oninput={field_input(|f, v| f.confirm_password = v)} />
                                    {field_error("confirm_password")}
                                </div>
                            }
                        } else {
                            html! {
                                <div class="auth-options">
                                    <label class="remember-me">
                                        <input type="checkbox" checked={*remember_me} onchange={toggle_remember} />
                                        {"Remember me"}
                                    </label>
                                    <a href="#" class="forgot-password">{"Forgot password?"}</a>
                                </div>
                            }
                        }}

                        {if let Some(message) = (*submit_error).clone() {
                            html! { <div class="submit-error">{message}</div> }
                        } else {
                            html! {}
                        }}

                        <button type="submit" class="button button-primary button-block" disabled={*is_submitting}>
                            {if *is_submitting {
                                mode.pending_label().to_string()
                            } else {
                                mode.submit_label(*user_type)
                            }}
                        </button>
                    </form>

                    <p class="auth-switch">
                        {if *mode == AuthMode::Login { "Don't have an account? " } else { "Already have an account? " }}
                        <button type="button" class="link-button" onclick={on_switch_mode}>
                            {if *mode == AuthMode::Login { "Sign up" } else { "Sign in" }}
                        </button>
                    </p>
                </div>
            </div>
        </div>
    }
}
