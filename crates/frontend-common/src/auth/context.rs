//! Global authentication context and provider

use super::expiry;
use crate::client;
use crate::config::AuthConfig;
use crate::session;
use quiz_http::StoredUser;
use quiz_http::client::session::SessionStore;
use std::rc::Rc;
use yew::prelude::*;

/// Authentication state
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub access_token: String,
    pub user: StoredUser,
}

impl AuthState {
    /// Rebuild the state from browser storage
    pub fn load() -> Option<Self> {
        let access_token = session::BrowserSession.access_token()?;
        Some(Self {
            access_token,
            user: session::stored_user().unwrap_or_default(),
        })
    }
}

/// Authentication context data
#[derive(Clone, Debug, PartialEq)]
pub struct AuthContextData {
    pub auth_state: Option<AuthState>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Authentication context actions
pub enum AuthAction {
    /// Fresh login; persisted to storage
    Login(AuthState),
    /// State found in storage on page load
    Restore(Option<AuthState>),
    Logout,
    /// Session could not be recovered
    Expired,
}

/// Authentication context
pub type AuthContext = UseReducerHandle<AuthContextData>;

const SESSION_EXPIRED_MESSAGE: &str = "세션이 만료되었습니다. 다시 로그인해 주세요.";

impl Default for AuthContextData {
    fn default() -> Self {
        Self {
            auth_state: None,
            is_loading: true, // Start with loading to check localStorage
            error: None,
        }
    }
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::Login(auth_state) => {
                if let Err(e) = session::save_login(&auth_state.access_token, &auth_state.user) {
                    error!(error = %e, "failed to persist login");
                }

                Rc::new(Self {
                    auth_state: Some(auth_state),
                    is_loading: false,
                    error: None,
                })
            }
            AuthAction::Restore(auth_state) => Rc::new(Self {
                auth_state,
                is_loading: false,
                error: None,
            }),
            AuthAction::Logout => {
                session::clear_login();

                Rc::new(Self {
                    auth_state: None,
                    is_loading: false,
                    error: None,
                })
            }
            AuthAction::Expired => {
                session::clear_login();

                Rc::new(Self {
                    auth_state: None,
                    is_loading: false,
                    error: Some(SESSION_EXPIRED_MESSAGE.to_string()),
                })
            }
        }
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth_state = use_reducer(AuthContextData::default);

    // Install the page's API client and follow its session expiry
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            if let Err(e) = client::api_client() {
                error!(error = %e, "failed to create api client");
            }

            let auth_state = auth_state.clone();
            expiry::set_session_expired_callback(Rc::new(move || {
                auth_state.dispatch(AuthAction::Expired);
            }));

            move || expiry::clear_session_expired_callback()
        });
    }

    // Load auth state from localStorage on mount
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            auth_state.dispatch(AuthAction::Restore(AuthState::load()));
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth_state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Hook to get current auth state
#[hook]
pub fn use_auth_state() -> Option<AuthState> {
    let auth = use_auth();
    auth.auth_state.clone()
}

/// Hook to check if authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    let auth = use_auth();
    auth.auth_state.is_some()
}

/// Hook returning a callback that logs out and sends the user home
#[hook]
pub fn use_logout() -> Callback<()> {
    let auth = use_auth();
    Callback::from(move |()| {
        auth.dispatch(AuthAction::Logout);
        session::navigate(AuthConfig::HOME_PATH);
    })
}
