use contracts::system::auth::{Role, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl SessionState {
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// How a login attempt ended. Failed backend authentication never surfaces
/// as an error; it degrades into a locally provisioned demo session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated,
    DemoProvisioned,
}

/// Session context provider component.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(SessionState::default());

    // Restore a persisted session on mount.
    Effect::new(move |_| {
        let Some(token) = storage::get_token() else {
            return;
        };
        if storage::demo_mode_enabled() {
            // Demo sessions are rebuilt locally from the persisted role.
            let user = api::demo_user(storage::demo_role());
            set_session.set(SessionState {
                token: Some(token),
                user: Some(user),
            });
        } else {
            spawn_local(async move {
                match api::current_user(&token).await {
                    Ok(user) => set_session.set(SessionState {
                        token: Some(token),
                        user: Some(user),
                    }),
                    Err(_) => {
                        // Stale token; next render shows the login page.
                        storage::clear_token();
                    }
                }
            });
        }
    });

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access session state.
pub fn use_session() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let session = use_context::<ReadSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");
    let set_session = use_context::<WriteSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");
    (session, set_session)
}

/// Attempt a backend login; on any failure fall back to provisioning a demo
/// session instead of surfacing an error.
pub async fn do_login(
    username: String,
    password: String,
    set_session: WriteSignal<SessionState>,
) -> LoginOutcome {
    if storage::demo_mode_enabled() {
        start_demo(storage::demo_role(), set_session);
        return LoginOutcome::DemoProvisioned;
    }

    match api::login(username, password).await {
        Ok(response) => {
            storage::save_token(&response.token);
            set_session.set(SessionState {
                token: Some(response.token),
                user: Some(response.user),
            });
            LoginOutcome::Authenticated
        }
        Err(e) => {
            log::warn!("login failed ({}), provisioning demo session", e);
            storage::set_demo_mode(true);
            start_demo(storage::demo_role(), set_session);
            LoginOutcome::DemoProvisioned
        }
    }
}

/// Enter demo mode as the given role.
pub fn start_demo(role: Role, set_session: WriteSignal<SessionState>) {
    storage::set_demo_mode(true);
    storage::save_demo_role(role);
    let response = api::demo_login(role);
    storage::save_token(&response.token);
    set_session.set(SessionState {
        token: Some(response.token),
        user: Some(response.user),
    });
}

/// Switch the demo role in place, keeping the current token.
pub fn switch_demo_role(role: Role, set_session: WriteSignal<SessionState>) {
    storage::save_demo_role(role);
    let user = api::demo_user(role);
    set_session.update(|state| state.user = Some(user));
}

pub fn do_logout(set_session: WriteSignal<SessionState>) {
    storage::clear_token();
    set_session.set(SessionState::default());
}
