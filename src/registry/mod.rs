//! Realm registry.
//!
//! # Data Flow
//! ```text
//! users.json
//!     → loader.rs (read & deserialize)
//!     → schema.rs (RealmEntry / UserEntry, plaintext)
//!     → hash every password
//!     → Registry (frozen, shared via Arc)
//! ```
//!
//! # Design Decisions
//! - Built once at startup, never mutated afterwards
//! - Domain index built at construction; for duplicate domains the first
//!   realm in file order wins and later ones are unreachable
//! - Users within a realm are scanned linearly in file order

pub mod loader;
pub mod schema;

use std::collections::HashMap;

use crate::security::PasswordHash;

/// A user entry with its hashed password.
#[derive(Debug, Clone)]
pub struct User {
    name: String,
    password_hash: PasswordHash,
}

impl User {
    pub fn new(name: impl Into<String>, password_hash: PasswordHash) -> Self {
        Self {
            name: name.into(),
            password_hash,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}

/// A domain and its authorized users.
#[derive(Debug, Clone)]
pub struct Realm {
    domain: String,
    users: Vec<User>,
}

impl Realm {
    pub fn new(domain: impl Into<String>, users: Vec<User>) -> Self {
        Self {
            domain: domain.into(),
            users,
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// True if a user with exactly this name and password hash exists.
    pub fn authenticate(&self, username: &str, submitted_hash: &str) -> bool {
        self.users
            .iter()
            .any(|u| u.name == username && u.password_hash.matches(submitted_hash))
    }
}

/// Every realm known to the service.
#[derive(Debug, Default)]
pub struct Registry {
    realms: Vec<Realm>,
    by_domain: HashMap<String, usize>,
}

impl Registry {
    pub fn new(realms: Vec<Realm>) -> Self {
        let mut by_domain = HashMap::with_capacity(realms.len());
        for (idx, realm) in realms.iter().enumerate() {
            by_domain.entry(realm.domain.clone()).or_insert(idx);
        }
        Self { realms, by_domain }
    }

    /// Look up a realm by exact domain.
    pub fn realm(&self, domain: &str) -> Option<&Realm> {
        self.by_domain.get(domain).map(|&idx| &self.realms[idx])
    }

    pub fn realms(&self) -> &[Realm] {
        &self.realms
    }

    pub fn realm_count(&self) -> usize {
        self.realms.len()
    }

    pub fn user_count(&self) -> usize {
        self.realms.iter().map(|r| r.users.len()).sum()
    }

    /// Domains of realms hidden behind an earlier entry with the same domain.
    pub fn shadowed_domains(&self) -> impl Iterator<Item = &str> {
        self.realms
            .iter()
            .enumerate()
            .filter(|(idx, realm)| self.by_domain.get(&realm.domain) != Some(idx))
            .map(|(_, realm)| realm.domain.as_str())
    }
}
