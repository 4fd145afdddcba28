use yew::prelude::*;
use web_sys::MouseEvent;
use backend::format_relative_time;
use chrono::Utc;
use shared::{Notification, NotificationKind, UserType};

/// Where the panel is rendered. Both share one implementation; only layout differs.
#[derive(Clone, Copy, PartialEq)]
pub enum PanelVariant {
    Desktop,
    Mobile,
}

impl PanelVariant {
    fn class(&self) -> &'static str {
        match self {
            PanelVariant::Desktop => "notification-dropdown",
            PanelVariant::Mobile => "notification-dropdown mobile",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationPanelProps {
    pub variant: PanelVariant,
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
    pub user_type: UserType,
    pub on_mark_as_read: Callback<String>,
    pub on_mark_all_as_read: Callback<()>,
}

fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "✓",
        NotificationKind::Info => "ℹ",
        NotificationKind::Warning => "!",
        NotificationKind::Class => "📅",
        NotificationKind::Promotion => "🎁",
    }
}

fn kind_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "kind-success",
        NotificationKind::Info => "kind-info",
        NotificationKind::Warning => "kind-warning",
        NotificationKind::Class => "kind-class",
        NotificationKind::Promotion => "kind-promotion",
    }
}

/// Badge text on the bell: counts above nine collapse to "9+"
pub fn badge_label(unread_count: usize) -> String {
    if unread_count > 9 {
        "9+".to_string()
    } else {
        unread_count.to_string()
    }
}

/// Bell button plus its dropdown list
#[function_component(NotificationPanel)]
pub fn notification_panel(props: &NotificationPanelProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    let on_backdrop_click = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            is_open.set(false);
        })
    };

    let on_dropdown_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_mark_all = {
        let on_mark_all_as_read = props.on_mark_all_as_read.clone();
        Callback::from(move |_: MouseEvent| on_mark_all_as_read.emit(()))
    };

    let trainer_theme = props.user_type == UserType::Trainer;
    let now = Utc::now();

    html! {
        <div class={classes!("notification-menu", trainer_theme.then_some("trainer-theme"))}>
            <button class="notification-bell" onclick={toggle} aria-label="Notifications">
                {"🔔"}
                if props.unread_count > 0 {
                    <span class="notification-badge">{badge_label(props.unread_count)}</span>
                }
            </button>

            if *is_open {
                <>
                    <div class="dropdown-backdrop" onclick={on_backdrop_click}></div>
                    <div class={props.variant.class()} onclick={on_dropdown_click}>
                        <div class="notification-header">
                            <h3>{"Notifications"}</h3>
                            if props.unread_count > 0 {
                                <button class="link-button" onclick={on_mark_all}>{"Mark all read"}</button>
                            }
                        </div>
                        if props.unread_count > 0 {
                            <p class="notification-summary">
                                {format!(
                                    "You have {} unread notification{}",
                                    props.unread_count,
                                    if props.unread_count == 1 { "" } else { "s" }
                                )}
                            </p>
                        }

                        <div class="notification-list">
                            if props.notifications.is_empty() {
                                <div class="notification-empty">{"No notifications yet"}</div>
                            } else {
                                {for props.notifications.iter().map(|notification| {
                                    let onclick = {
                                        let id = notification.id.clone();
                                        let on_mark_as_read = props.on_mark_as_read.clone();
                                        Callback::from(move |_: MouseEvent| on_mark_as_read.emit(id.clone()))
                                    };
                                    html! {
                                        <div
                                            key={notification.id.clone()}
                                            class={classes!("notification-item", (!notification.read).then_some("unread"))}
                                            {onclick}
                                        >
                                            <span class={classes!("notification-icon", kind_class(notification.kind))}>
                                                {kind_icon(notification.kind)}
                                            </span>
                                            <div class="notification-body">
                                                <p class="notification-title">{&notification.title}</p>
                                                <p class="notification-message">{&notification.message}</p>
                                                <p class="notification-time">
                                                    {format_relative_time(notification.timestamp, now)}
                                                </p>
                                            </div>
                                        </div>
                                    }
                                })}
                            }
                        </div>
                    </div>
                </>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_label_caps_at_nine() {
        assert_eq!(badge_label(1), "1");
        assert_eq!(badge_label(9), "9");
        assert_eq!(badge_label(10), "9+");
    }
}
