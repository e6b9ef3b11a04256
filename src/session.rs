//! Screen navigation and authentication. Pure state, no actor: the driver
//! owns a [`Session`] and applies transitions, so every rule here is
//! testable without any rendering or channels.

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::{Role, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Login,
    Menu,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    /// Shown inline on the login form.
    #[error("Username atau password salah.")]
    InvalidCredentials,
}

/// Exact-match scan over the in-memory user list. The role is part of the
/// match: the buyer form cannot log an admin in, and vice versa.
pub fn authenticate<'a>(
    users: &'a [User],
    username: &str,
    password: &str,
    role: Role,
) -> Result<&'a User, AuthError> {
    users
        .iter()
        .find(|u| u.username == username && u.password == password && u.role == role)
        .ok_or(AuthError::InvalidCredentials)
}

/// landing → login → menu, with logout back to landing.
#[derive(Debug, Clone)]
pub struct Session {
    page: Page,
    current_user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            page: Page::Landing,
            current_user: None,
        }
    }

    pub fn start_order(&mut self) {
        self.page = Page::Login;
    }

    #[allow(dead_code)]
    pub fn back_to_home(&mut self) {
        self.page = Page::Landing;
    }

    pub fn login(&mut self, user: User) {
        info!(username = %user.username, role = %user.role, "Logged in");
        self.current_user = Some(user);
        self.page = Page::Menu;
    }

    pub fn logout(&mut self) {
        info!("Logged out");
        self.current_user = None;
        self.page = Page::Landing;
    }

    /// The menu page without an authenticated user is an inconsistent
    /// state; it self-heals to the login page.
    pub fn page(&mut self) -> Page {
        if self.page == Page::Menu && self.current_user.is_none() {
            warn!("Menu page without a user, falling back to login");
            self.page = Page::Login;
        }
        self.page
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        matches!(
            self.current_user,
            Some(User { role: Role::Admin, .. })
        )
    }

    /// Keep the session snapshot in step when the logged-in account itself
    /// is edited.
    pub fn refresh_user(&mut self, user: User) {
        if let Some(current) = &self.current_user {
            if current.id == user.id {
                self.current_user = Some(user);
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_users;

    #[test]
    fn authentication_requires_the_exact_triple() {
        let users = seed_users();

        let user = authenticate(&users, "user", "user123", Role::Buyer).unwrap();
        assert_eq!(user.id, 2);

        assert_eq!(
            authenticate(&users, "user", "wrong", Role::Buyer),
            Err(AuthError::InvalidCredentials)
        );
        // Right credentials through the wrong panel still fail.
        assert_eq!(
            authenticate(&users, "user", "user123", Role::Admin),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            authenticate(&users, "ghost", "user123", Role::Buyer),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn navigation_walks_landing_login_menu() {
        let users = seed_users();
        let mut session = Session::new();
        assert_eq!(session.page(), Page::Landing);

        session.start_order();
        assert_eq!(session.page(), Page::Login);

        let user = authenticate(&users, "admin", "admin123", Role::Admin)
            .unwrap()
            .clone();
        session.login(user);
        assert_eq!(session.page(), Page::Menu);
        assert!(session.is_admin());

        session.logout();
        assert_eq!(session.page(), Page::Landing);
        assert!(session.current_user().is_none());
    }

    #[test]
    fn menu_without_a_user_self_heals_to_login() {
        let mut session = Session::new();
        session.start_order();
        session.login(User::new(2, "user", "user123", Role::Buyer));
        session.logout();

        // Force the inconsistent state directly.
        session.start_order();
        session.page = Page::Menu;
        assert_eq!(session.page(), Page::Login);
    }

    #[test]
    fn refresh_only_applies_to_the_logged_in_user() {
        let mut session = Session::new();
        session.login(User::new(1, "admin", "admin123", Role::Admin));

        session.refresh_user(User::new(2, "someone", "pw", Role::Buyer));
        assert_eq!(session.current_user().unwrap().username, "admin");

        session.refresh_user(User::new(1, "admin", "newpass", Role::Admin));
        assert_eq!(session.current_user().unwrap().password, "newpass");
    }
}
