use crate::storage::RepositoryError;

use super::domain::{User, UserId};

/// Storage key under which the session token is persisted. Mirrors the
/// browser-local storage slot a web client would use.
pub const SESSION_TOKEN_KEY: &str = "session-token";

/// Storage abstraction over the registered identities so the service can be
/// exercised in isolation.
pub trait UserRepository: Send + Sync {
    fn insert(&self, user: User) -> Result<User, RepositoryError>;
    fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
}

/// Persistent key-value slot holding the opaque session token (value = the
/// user id string). There is no server-side session to invalidate, so the
/// operations are infallible.
pub trait SessionStore: Send + Sync {
    fn persist(&self, token: &str);
    fn load(&self) -> Option<String>;
    fn clear(&self);
}
