use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::latency::SimulatedLatency;
use crate::storage::RepositoryError;

use super::domain::{Role, User, UserId};
use super::repository::{SessionStore, UserRepository};

/// Service composing the user repository and the persisted session slot.
pub struct IdentityService<U, S> {
    users: Arc<U>,
    sessions: Arc<S>,
    latency: SimulatedLatency,
}

static USER_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_user_id() -> UserId {
    let id = USER_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    UserId(format!("user-{id:06}"))
}

impl<U, S> IdentityService<U, S>
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    pub fn new(users: Arc<U>, sessions: Arc<S>, latency: SimulatedLatency) -> Self {
        Self {
            users,
            sessions,
            latency,
        }
    }

    /// Log in by email. On success the session token is persisted and the
    /// user returned; a lookup miss leaves the session slot untouched.
    ///
    /// TODO: verify the password once a credential store exists; the mock
    /// backend only checks that the email is registered.
    pub async fn login(&self, email: &str, _password: &str) -> Result<User, IdentityError> {
        self.latency.wait().await;
        match self.users.find_by_email(email)? {
            Some(user) => {
                self.sessions.persist(&user.id.0);
                Ok(user)
            }
            None => Err(IdentityError::InvalidCredentials),
        }
    }

    /// Register a new USER-role identity and log it in. A duplicate email
    /// fails without mutating the store.
    pub async fn signup(
        &self,
        full_name: &str,
        email: &str,
        _password: &str,
    ) -> Result<User, IdentityError> {
        self.latency.wait().await;
        if self.users.find_by_email(email)?.is_some() {
            return Err(IdentityError::DuplicateEmail {
                email: email.to_string(),
            });
        }

        let user = User {
            id: next_user_id(),
            full_name: full_name.to_string(),
            email: email.to_string(),
            role: Role::User,
        };
        let stored = self.users.insert(user)?;
        self.sessions.persist(&stored.id.0);
        Ok(stored)
    }

    /// Clear the persisted session token. Never fails; there is no
    /// server-side session to invalidate.
    pub fn logout(&self) {
        self.sessions.clear();
    }

    /// Resolve the persisted token back to a user record, `None` if the
    /// slot is empty or names an unknown user. Awaited by the presentation
    /// layer before rendering protected content.
    pub async fn check_session(&self) -> Result<Option<User>, IdentityError> {
        self.latency.brief().wait().await;
        let Some(token) = self.sessions.load() else {
            return Ok(None);
        };
        Ok(self.users.find_by_id(&UserId(token))?)
    }
}

/// Error raised by the identity service.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("no account registered for that email")]
    InvalidCredentials,
    #[error("an account already exists for {email}")]
    DuplicateEmail { email: String },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
