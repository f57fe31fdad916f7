use serde::Deserialize;
use std::{
    env,
    net::{IpAddr, Ipv4Addr},
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::domain::entities::User;

// Runtime/server settings read from the environment (and `.env` when present).

pub fn http_host() -> IpAddr {
    env::var("USER_SERVER_HOST")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

pub fn http_port() -> u16 {
    env::var("USER_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080)
}

pub fn seed_file() -> Option<PathBuf> {
    env::var_os("USER_SEED_FILE").map(PathBuf::from)
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("seed file lists user id {0} more than once")]
    DuplicateId(i64),
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    users: Vec<User>,
}

// Users served when no seed file is configured.
pub fn default_users() -> Vec<User> {
    vec![
        User::new(1, "Daniel", "Santiago"),
        User::new(2, "Cristiano", "Ronaldo"),
        User::new(3, "Lionel", "Messi"),
        User::new(4, "Neymar", "Jr"),
    ]
}

// Resolve the seed list: the configured TOML file, or the built-in users.
pub fn load_users() -> Result<Vec<User>, ConfigError> {
    match seed_file() {
        Some(path) => load_users_from(&path),
        None => Ok(default_users()),
    }
}

pub fn load_users_from(path: &Path) -> Result<Vec<User>, ConfigError> {
    let display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: display.clone(),
        source,
    })?;
    parse_users(&raw, &display)
}

// `origin` only labels parse errors.
pub fn parse_users(raw: &str, origin: &str) -> Result<Vec<User>, ConfigError> {
    let seed: SeedFile = toml::from_str(raw).map_err(|source| ConfigError::Parse {
        path: origin.to_string(),
        source,
    })?;

    let mut seen = std::collections::HashSet::new();
    for user in &seed.users {
        if !seen.insert(user.id) {
            return Err(ConfigError::DuplicateId(user.id));
        }
    }

    Ok(seed.users)
}
