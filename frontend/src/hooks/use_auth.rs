use yew::prelude::*;
use shared::User;
use crate::services::AppServices;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until the stored session has been checked
    pub restoring: bool,
}

pub struct UseAuthResult {
    pub state: AuthState,
    pub actions: UseAuthActions,
}

#[derive(Clone, PartialEq)]
pub struct UseAuthActions {
    /// The auth modal signed somebody in
    pub signed_in: Callback<User>,
    pub sign_out: Callback<()>,
}

/// Current user, restored from local storage on mount
#[hook]
pub fn use_auth(services: &AppServices) -> UseAuthResult {
    let user = use_state(|| Option::<User>::None);
    let restoring = use_state(|| true);

    use_effect_with((), {
        let auth = services.auth.clone();
        let user = user.clone();
        let restoring = restoring.clone();

        move |_| {
            match auth.restore_session() {
                Ok(restored) => user.set(restored),
                Err(e) => Logger::error_with_component("auth", &format!("Failed to restore session: {:#}", e)),
            }
            restoring.set(false);
            || ()
        }
    });

    let signed_in = {
        let user = user.clone();
        use_callback((), move |signed_in: User, _| {
            user.set(Some(signed_in));
        })
    };

    let sign_out = {
        let auth = services.auth.clone();
        let user = user.clone();
        use_callback((), move |_: (), _| {
            if let Err(e) = auth.logout() {
                Logger::error_with_component("auth", &format!("Failed to clear session: {:#}", e));
            }
            user.set(None);
        })
    };

    let state = AuthState {
        user: (*user).clone(),
        restoring: *restoring,
    };

    UseAuthResult {
        state,
        actions: UseAuthActions { signed_in, sign_out },
    }
}
