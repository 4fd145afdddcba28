use std::rc::Rc;

use backend::NotificationCenter;
use chrono::Utc;
use shared::UserType;
use yew::prelude::*;

pub enum NotificationAction {
    /// A stored session was picked up on load: sample entries only, no welcome-back entry
    Restored { user_type: UserType, seed: bool },
    SignedIn { user_type: UserType, seed: bool },
    MarkAsRead(String),
    MarkAllAsRead,
    Clear,
}

#[derive(Clone, Default, PartialEq)]
pub struct NotificationState {
    pub center: NotificationCenter,
}

impl Reducible for NotificationState {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut center = self.center.clone();
        match action {
            NotificationAction::Restored { user_type, seed } => {
                if !seed {
                    return self;
                }
                center.seed(user_type, Utc::now());
            }
            NotificationAction::SignedIn { user_type, seed } => center.on_sign_in(user_type, Utc::now(), seed),
            NotificationAction::MarkAsRead(id) => {
                center.mark_as_read(&id);
            }
            NotificationAction::MarkAllAsRead => center.mark_all_as_read(),
            NotificationAction::Clear => center.clear(),
        }
        Rc::new(Self { center })
    }
}

/// Header notification list for the signed-in session
#[hook]
pub fn use_notifications() -> UseReducerHandle<NotificationState> {
    use_reducer(NotificationState::default)
}
