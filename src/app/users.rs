//! User accounts
//!
//! Accounts live in memory for the lifetime of the process. They are seeded
//! from configuration and extended by the registration flow.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// A registered account.
///
/// Two users are equal when their account names are equal.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub account: String,
    pub password: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    pub fn new(
        account: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            password: password.into(),
            email: email.into(),
        }
    }

    pub fn check_password(&self, password: &str) -> bool {
        self.password == password
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.account == other.account
    }
}

impl Eq for User {}

/// Storage for user accounts.
pub trait UserRepository: Send + Sync {
    fn find_by_account(&self, account: &str) -> Option<User>;

    /// Stores a new user. Returns `false`, leaving the repository untouched,
    /// if the account is already taken.
    fn save(&self, user: User) -> bool;
}

/// Accounts kept in a locked `HashMap` keyed by account name.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `users`. Later duplicates are ignored.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let repo = Self::new();
        for user in users {
            repo.save(user);
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_account(&self, account: &str) -> Option<User> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(account)
            .cloned()
    }

    fn save(&self, user: User) -> bool {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);

        if users.contains_key(&user.account) {
            return false;
        }

        users.insert(user.account.clone(), user);
        true
    }
}
