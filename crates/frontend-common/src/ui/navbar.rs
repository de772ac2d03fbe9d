//! Top navigation bar fragment
//!
//! The markup depends only on [`NavbarState`], so it can be rendered anywhere
//! and prepended to pages that are not Yew apps.

use super::escape_html;
use crate::config::AuthConfig;
use crate::error::BrowserError;
use crate::session;
use gloo::events::EventListener;
use quiz_http::StoredUser;

/// Id of the logout link inside the dropdown
pub const LOGOUT_LINK_ID: &str = "navbarLogout";

const LOGOUT_CONFIRM: &str = "로그아웃 하시겠습니까?";

/// What the navbar needs to know about the visitor
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavbarState {
    pub logged_in: bool,
    pub user: StoredUser,
}

impl NavbarState {
    /// Read the login state from browser storage
    pub fn current() -> Self {
        Self {
            logged_in: session::is_logged_in(),
            user: session::stored_user().unwrap_or_default(),
        }
    }
}

fn logged_in_items(user: &StoredUser) -> String {
    let admin_link = if user.role.is_admin() {
        r#"
                            <li class="nav-item">
                                <a class="nav-link" href="/admin">🛠️ 관리자</a>
                            </li>"#
    } else {
        ""
    };
    let login_id = user
        .login_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .map_or_else(|| "사용자".to_string(), escape_html);

    format!(
        r##"
                            <li class="nav-item">
                                <a class="nav-link" href="/statistics">📊 통계</a>
                            </li>{admin_link}
                            <li class="nav-item dropdown">
                                <a class="nav-link dropdown-toggle" href="#" role="button" data-bs-toggle="dropdown">
                                    👤 {login_id}
                                </a>
                                <ul class="dropdown-menu dropdown-menu-end">
                                    <li><span class="dropdown-item-text"><small>역할: {role}</small></span></li>
                                    <li><hr class="dropdown-divider"></li>
                                    <li><a class="dropdown-item" href="#" id="{LOGOUT_LINK_ID}">로그아웃</a></li>
                                </ul>
                            </li>"##,
        role = user.role.label(),
    )
}

const LOGGED_OUT_ITEMS: &str = r#"
                            <li class="nav-item">
                                <a class="nav-link" href="/login">로그인</a>
                            </li>
                            <li class="nav-item">
                                <a class="nav-link btn btn-light text-primary px-3 ms-2" href="/signup">회원가입</a>
                            </li>"#;

/// Navbar markup followed by a spacer for the fixed bar
pub fn render_navbar(state: &NavbarState) -> String {
    let items = if state.logged_in {
        logged_in_items(&state.user)
    } else {
        LOGGED_OUT_ITEMS.to_string()
    };

    format!(
        r##"
        <nav class="navbar navbar-expand-lg navbar-dark" style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); position: fixed; top: 0; left: 0; right: 0; z-index: 1000;">
            <div class="container">
                <a class="navbar-brand fw-bold" href="/">☕ Spring Quiz</a>
                <button class="navbar-toggler" type="button" data-bs-toggle="collapse" data-bs-target="#navbarContent">
                    <span class="navbar-toggler-icon"></span>
                </button>
                <div class="collapse navbar-collapse" id="navbarContent">
                    <ul class="navbar-nav ms-auto align-items-center">{items}
                    </ul>
                </div>
            </div>
        </nav>
        <div style="height: 60px;"></div>
    "##
    )
}

/// Prepend the navbar for the current visitor to `<body>` and wire up logout
pub fn insert_navbar() -> Result<(), BrowserError> {
    let document = gloo::utils::document();
    let body = gloo::utils::body();

    let wrapper = document.create_element("div")?;
    wrapper.set_inner_html(&render_navbar(&NavbarState::current()));
    body.insert_before(&wrapper, body.first_child().as_ref())?;

    if let Some(link) = document.get_element_by_id(LOGOUT_LINK_ID) {
        EventListener::new(&link, "click", |event| {
            event.prevent_default();
            logout();
        })
        .forget();
    }
    Ok(())
}

/// Ask for confirmation, then drop the cached login and go home
pub fn logout() {
    let confirmed = gloo::utils::window()
        .confirm_with_message(LOGOUT_CONFIRM)
        .unwrap_or(false);
    if !confirmed {
        return;
    }

    session::clear_login();
    session::navigate(AuthConfig::HOME_PATH);
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_http::UserRole;

    fn signed_in(login_id: Option<&str>, role: UserRole) -> NavbarState {
        NavbarState {
            logged_in: true,
            user: StoredUser {
                login_id: login_id.map(str::to_string),
                role,
            },
        }
    }

    #[test]
    fn logged_out_shows_login_and_signup() {
        let html = render_navbar(&NavbarState::default());
        assert!(html.contains(r#"href="/login""#));
        assert!(html.contains(r#"href="/signup""#));
        assert!(!html.contains("/statistics"));
        assert!(!html.contains(LOGOUT_LINK_ID));
    }

    #[test]
    fn user_sees_statistics_but_not_admin() {
        let html = render_navbar(&signed_in(Some("kim"), UserRole::User));
        assert!(html.contains("/statistics"));
        assert!(!html.contains("/admin"));
        assert!(html.contains("👤 kim"));
        assert!(html.contains("역할: 사용자"));
        assert!(html.contains(LOGOUT_LINK_ID));
        assert!(!html.contains(r#"href="/login""#));
    }

    #[test]
    fn admin_gets_admin_link() {
        let html = render_navbar(&signed_in(Some("root"), UserRole::Admin));
        assert!(html.contains(r#"href="/admin""#));
        assert!(html.contains("역할: 관리자"));
    }

    #[test]
    fn missing_login_id_falls_back() {
        let html = render_navbar(&signed_in(None, UserRole::User));
        assert!(html.contains("👤 사용자"));
    }

    #[test]
    fn login_id_is_escaped() {
        let html = render_navbar(&signed_in(Some("<b>x</b>"), UserRole::User));
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(!html.contains("<b>x</b>"));
    }
}
