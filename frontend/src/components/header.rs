use yew::prelude::*;
use web_sys::MouseEvent;
use super::notification_panel::{NotificationPanel, PanelVariant};
use shared::{catalog, Notification, User, UserType};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub user: Option<User>,
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
    /// Text of the post-sign-in banner while it is showing
    pub welcome_message: Option<String>,
    pub on_sign_in_click: Callback<()>,
    pub on_sign_out: Callback<()>,
    pub on_mark_as_read: Callback<String>,
    pub on_mark_all_as_read: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let is_menu_open = use_state(|| false);

    let user_type = props.user.as_ref().map(|u| u.user_type).unwrap_or_default();
    let trainer_theme = user_type == UserType::Trainer;

    let toggle_menu = {
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |_: MouseEvent| is_menu_open.set(!*is_menu_open))
    };

    let close_menu = {
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |_: MouseEvent| is_menu_open.set(false))
    };

    let on_sign_in = {
        let on_sign_in_click = props.on_sign_in_click.clone();
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            is_menu_open.set(false);
            on_sign_in_click.emit(());
        })
    };

    let on_sign_out = {
        let on_sign_out = props.on_sign_out.clone();
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            is_menu_open.set(false);
            on_sign_out.emit(());
        })
    };

    let panel = |variant: PanelVariant| {
        html! {
            <NotificationPanel
                {variant}
                notifications={props.notifications.clone()}
                unread_count={props.unread_count}
                {user_type}
                on_mark_as_read={props.on_mark_as_read.clone()}
                on_mark_all_as_read={props.on_mark_all_as_read.clone()}
            />
        }
    };

    let contact_email = if trainer_theme { "instructors@svasthify.com" } else { "info@svasthify.com" };

    html! {
        <>
            if let Some(message) = &props.welcome_message {
                <div class={classes!("welcome-banner", trainer_theme.then_some("trainer-theme"))}>
                    <span>{message}</span>
                </div>
            }

            if *is_menu_open {
                <div class="menu-backdrop" onclick={close_menu.clone()}></div>
            }

            <header class={classes!("header", trainer_theme.then_some("trainer-theme"))}>
                <div class="info-bar">
                    <div class="container">
                        <span>{contact_email}</span>
                        <span>{"+1 234 567 8910"}</span>
                        if trainer_theme {
                            <span class="portal-label">{"Instructor Portal"}</span>
                        }
                    </div>
                </div>

                <div class="container header-main">
                    <a href="/" class="logo">{"Svasthify"}</a>

                    <nav class="nav-links">
                        {for catalog::NAV_ITEMS.iter().map(|item| html! {
                            <a key={item.name} href={item.href} class="nav-link">{item.name}</a>
                        })}
                    </nav>

                    <div class="header-right">
                        if let Some(user) = &props.user {
                            <div class="desktop-only">{panel(PanelVariant::Desktop)}</div>
                            <span class="user-greeting">{format!("Hi, {}", user.name)}</span>
                            <button class="button button-outline desktop-only" onclick={on_sign_out.clone()}>
                                {"Sign Out"}
                            </button>
                        } else {
                            <button class="button button-primary desktop-only" onclick={on_sign_in.clone()}>
                                {"Sign In"}
                            </button>
                        }

                        if props.user.is_some() {
                            <div class="mobile-only">{panel(PanelVariant::Mobile)}</div>
                        }
                        <button class="menu-toggle mobile-only" onclick={toggle_menu} aria-label="Menu">
                            {if *is_menu_open { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                if *is_menu_open {
                    <div class="mobile-menu">
                        {for catalog::NAV_ITEMS.iter().map(|item| html! {
                            <a key={item.name} href={item.href} class="mobile-nav-link" onclick={close_menu.clone()}>
                                {item.name}
                            </a>
                        })}
                        if props.user.is_some() {
                            <button class="button button-outline" onclick={on_sign_out}>{"Sign Out"}</button>
                        } else {
                            <button class="button button-primary" onclick={on_sign_in}>{"Sign In"}</button>
                        }
                    </div>
                }
            </header>
        </>
    }
}
