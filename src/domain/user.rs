use std::fmt;

/// Account roles. Buyers order from the menu; admins also manage the
/// catalog and the user list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Buyer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Buyer => write!(f, "buyer"),
        }
    }
}

/// A registered account. Passwords are kept in plaintext on purpose: the
/// whole user collection lives only in process memory for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl User {
    pub fn new(
        id: u32,
        username: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
            role,
        }
    }
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Payload for updating an existing user.
///
/// A `None` password keeps the stored one; the admin form only supplies a
/// password when the operator typed a new one.
#[derive(Debug, Clone)]
pub struct UserPatch {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}
