//! Realm file loading.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::registry::schema::RealmEntry;
use crate::registry::{Realm, Registry};

/// Error type for registry loading.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read realm file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse realm file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the realm file and hash every password.
pub fn load_registry(path: &Path) -> Result<Registry, RegistryError> {
    let content = fs::read_to_string(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let registry = parse_registry(&content).map_err(|source| RegistryError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    for domain in registry.shadowed_domains() {
        tracing::warn!(domain = %domain, "Duplicate realm ignored; first entry wins");
    }

    tracing::info!(
        path = ?path,
        realms = registry.realm_count(),
        users = registry.user_count(),
        "Registry loaded"
    );

    Ok(registry)
}

/// Parse realm file content into a hashed registry.
pub fn parse_registry(content: &str) -> Result<Registry, serde_json::Error> {
    let entries: Vec<RealmEntry> = serde_json::from_str(content)?;
    Ok(Registry::new(entries.into_iter().map(Realm::from).collect()))
}
