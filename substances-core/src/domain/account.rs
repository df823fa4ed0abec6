//! Account domain model

use serde::{Deserialize, Serialize};

/// Identity of a player's account at an economy back end
///
/// The gateway holds no account state. Both fields are passed through to
/// provider calls untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    /// Display name, used by name-keyed back ends
    pub name: String,
    /// Stable secondary identifier (the player's xuid)
    pub xuid: String,
}

impl Account {
    pub fn new(name: impl Into<String>, xuid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            xuid: xuid.into(),
        }
    }
}
