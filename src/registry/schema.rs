//! On-disk realm file format.
//!
//! ```json
//! [
//!   { "domain": "topcoder.com",
//!     "users": [ { "username": "takumi", "password": "ilovego" } ] }
//! ]
//! ```
//!
//! Absent or `null` fields read as empty: an empty domain, no users, an
//! empty username or password. Unknown keys are ignored.

use serde::{Deserialize, Deserializer};

use crate::registry::{Realm, User};
use crate::security::PasswordHash;

/// One realm as written in the realm file.
#[derive(Debug, Clone, Deserialize)]
pub struct RealmEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<UserEntry>,
}

/// One user as written in the realm file, with a plaintext password.
#[derive(Clone, Deserialize)]
pub struct UserEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub password: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl std::fmt::Debug for UserEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserEntry")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl From<UserEntry> for User {
    fn from(entry: UserEntry) -> Self {
        User::new(entry.username, PasswordHash::digest(&entry.password))
    }
}

impl From<RealmEntry> for Realm {
    fn from(entry: RealmEntry) -> Self {
        Realm::new(
            entry.domain,
            entry.users.into_iter().map(User::from).collect(),
        )
    }
}
