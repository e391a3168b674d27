use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::identity::domain::{Role, User, UserId};
pub(super) use crate::identity::repository::{SessionStore, UserRepository};
use crate::identity::service::IdentityService;
use crate::latency::SimulatedLatency;
use crate::storage::RepositoryError;

#[derive(Default, Clone)]
pub(super) struct MemoryUsers {
    records: Arc<Mutex<HashMap<UserId, User>>>,
}

impl MemoryUsers {
    pub(super) fn with_seed(users: Vec<User>) -> Self {
        let repo = Self::default();
        {
            let mut guard = repo.records.lock().expect("user mutex poisoned");
            for user in users {
                guard.insert(user.id.clone(), user);
            }
        }
        repo
    }

    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("user mutex poisoned").len()
    }
}

impl UserRepository for MemoryUsers {
    fn insert(&self, user: User) -> Result<User, RepositoryError> {
        let mut guard = self.records.lock().expect("user mutex poisoned");
        if guard.values().any(|existing| existing.email == user.email) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let guard = self.records.lock().expect("user mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let guard = self.records.lock().expect("user mutex poisoned");
        Ok(guard.values().find(|user| user.email == email).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemorySessions {
    token: Arc<Mutex<Option<String>>>,
}

impl MemorySessions {
    pub(super) fn token(&self) -> Option<String> {
        self.token.lock().expect("session mutex poisoned").clone()
    }
}

impl SessionStore for MemorySessions {
    fn persist(&self, token: &str) {
        *self.token.lock().expect("session mutex poisoned") = Some(token.to_string());
    }

    fn load(&self) -> Option<String> {
        self.token.lock().expect("session mutex poisoned").clone()
    }

    fn clear(&self) {
        *self.token.lock().expect("session mutex poisoned") = None;
    }
}

/// Repository double that always reports storage unavailable.
pub(super) struct UnavailableUsers;

impl UserRepository for UnavailableUsers {
    fn insert(&self, _user: User) -> Result<User, RepositoryError> {
        Err(RepositoryError::Unavailable("users offline".to_string()))
    }

    fn find_by_id(&self, _id: &UserId) -> Result<Option<User>, RepositoryError> {
        Err(RepositoryError::Unavailable("users offline".to_string()))
    }

    fn find_by_email(&self, _email: &str) -> Result<Option<User>, RepositoryError> {
        Err(RepositoryError::Unavailable("users offline".to_string()))
    }
}

pub(super) fn seeded_user() -> User {
    User {
        id: UserId("user-1".to_string()),
        full_name: "John Doe".to_string(),
        email: "user@example.com".to_string(),
        role: Role::User,
    }
}

pub(super) fn seeded_admin() -> User {
    User {
        id: UserId("admin-1".to_string()),
        full_name: "Admin".to_string(),
        email: "admin@example.com".to_string(),
        role: Role::Admin,
    }
}

pub(super) fn build_service() -> (
    Arc<IdentityService<MemoryUsers, MemorySessions>>,
    MemoryUsers,
    MemorySessions,
) {
    let users = MemoryUsers::with_seed(vec![seeded_user(), seeded_admin()]);
    let sessions = MemorySessions::default();
    let service = Arc::new(IdentityService::new(
        Arc::new(users.clone()),
        Arc::new(sessions.clone()),
        SimulatedLatency::none(),
    ));
    (service, users, sessions)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
