//! Identity and session handling: signup, login, logout, and resolving the
//! persisted session token back to a user on startup.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Role, SubmitterProfile, User, UserId};
pub use repository::{SessionStore, SESSION_TOKEN_KEY, UserRepository};
pub use router::identity_router;
pub use service::{IdentityError, IdentityService};
