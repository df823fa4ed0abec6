//! Economy provider kinds

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which economy back end the configuration asks for
///
/// Resolved once from configuration at start-up and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    EconomyApi,
    BedrockEconomy,
    CoinApi,
    /// Any identifier that matches no known back end (kept lowercased)
    Unknown(String),
}

impl ProviderKind {
    /// Known kinds in lookup order
    pub const KNOWN: [ProviderKind; 3] = [
        ProviderKind::EconomyApi,
        ProviderKind::BedrockEconomy,
        ProviderKind::CoinApi,
    ];

    /// Parse a configured identifier (case-insensitive, surrounding whitespace ignored)
    pub fn parse(identifier: &str) -> Self {
        let normalized = identifier.trim().to_lowercase();
        match normalized.as_str() {
            "economyapi" => ProviderKind::EconomyApi,
            "bedrockeconomy" => ProviderKind::BedrockEconomy,
            "coinapi" => ProviderKind::CoinApi,
            _ => ProviderKind::Unknown(normalized),
        }
    }

    /// Configuration token for this kind
    pub fn as_str(&self) -> &str {
        match self {
            ProviderKind::EconomyApi => "economyapi",
            ProviderKind::BedrockEconomy => "bedrockeconomy",
            ProviderKind::CoinApi => "coinapi",
            ProviderKind::Unknown(id) => id,
        }
    }

    /// Name under which the host registers the back end's extension
    pub fn extension_name(&self) -> Option<&'static str> {
        match self {
            ProviderKind::EconomyApi => Some("EconomyAPI"),
            ProviderKind::BedrockEconomy => Some("BedrockEconomy"),
            ProviderKind::CoinApi => Some("CoinAPI"),
            ProviderKind::Unknown(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ProviderKind::Unknown(_))
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
