use serde::{Deserialize, Serialize};

use super::events::{AuthEvents, Subscription};
use crate::error::Result;
use crate::storage::CachedUser;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    /// Display name given at sign-up; may be missing for older accounts.
    pub name: Option<String>,
    pub email_confirmed: bool,
}

impl User {
    /// Name to show, falling back to the mailbox part of the email.
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self
                .email
                .split('@')
                .next()
                .filter(|s| !s.is_empty())
                .unwrap_or("Usuário")
                .to_string(),
        }
    }

    pub fn to_cached(&self) -> CachedUser {
        CachedUser {
            id: self.id.clone(),
            name: self.display_name(),
            email: self.email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpOutcome {
    pub user: User,
    /// Present when the account was confirmed immediately and the provider
    /// signed the user in as part of sign-up.
    pub session: Option<Session>,
}

impl SignUpOutcome {
    pub fn is_confirmed(&self) -> bool {
        self.session.is_some() || self.user.email_confirmed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn(Session),
    SignedOut,
    UserUpdated(User),
    TokenRefreshed(Session),
}

impl AuthEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            AuthEvent::SignedIn(_) => "SIGNED_IN",
            AuthEvent::SignedOut => "SIGNED_OUT",
            AuthEvent::UserUpdated(_) => "USER_UPDATED",
            AuthEvent::TokenRefreshed(_) => "TOKEN_REFRESHED",
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            AuthEvent::SignedIn(s) | AuthEvent::TokenRefreshed(s) => Some(&s.user),
            AuthEvent::UserUpdated(u) => Some(u),
            AuthEvent::SignedOut => None,
        }
    }
}

/// The hosted authentication backend.
///
/// Implementations announce session changes through [`AuthProvider::events`]
/// after the call that caused them succeeds.
#[allow(async_fn_in_trait)]
pub trait AuthProvider {
    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<SignUpOutcome>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session>;

    async fn sign_out(&self) -> Result<()>;

    /// The user of the persisted session, if it is still valid.
    async fn current_user(&self) -> Result<Option<User>>;

    fn events(&self) -> &AuthEvents;

    fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&AuthEvent) + Send + Sync + 'static,
    {
        self.events().subscribe(listener)
    }
}
