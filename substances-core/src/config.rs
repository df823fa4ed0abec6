//! Configuration management
//!
//! `config.json` in the data folder:
//! ```json
//! {
//!   "economy": { "provider": "economyapi", "currencySymbol": "$" },
//!   "settings": { "prefix": "...", "uiTitle": "...", "purchaseMessage": "...", "notEnoughMoney": "..." },
//!   "substances": [ { "id": "coffee", "name": "Coffee", "price": 5, "effects": [ ... ] } ]
//! }
//! ```
//! Every field has a default. Substances keep file order, which is the
//! order of the menu buttons.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};
use crate::domain::{EffectSpec, Money, Substance};

/// Config file name inside the data folder
pub const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding `economy.provider`
pub const PROVIDER_ENV: &str = "SUBSTANCES_ECONOMY_PROVIDER";

/// Which economy back end to use and how to print money
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomySettings {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for EconomySettings {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_provider() -> String {
    "economyapi".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

/// Player-facing texts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSettings {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_ui_title")]
    pub ui_title: String,
    /// Placeholders: `{price}`, `{action}`
    #[serde(default = "default_purchase_message")]
    pub purchase_message: String,
    /// Placeholder: `{action}`
    #[serde(default = "default_not_enough_money")]
    pub not_enough_money: String,
}

impl Default for MessageSettings {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            ui_title: default_ui_title(),
            purchase_message: default_purchase_message(),
            not_enough_money: default_not_enough_money(),
        }
    }
}

fn default_prefix() -> String {
    "§7(§cSubstances§7)§r §f".to_string()
}

fn default_ui_title() -> String {
    "§7(§cSubstances§7)§r §bEntertainment Menu".to_string()
}

fn default_purchase_message() -> String {
    "{price} has been deducted from your account. You §e{action}".to_string()
}

fn default_not_enough_money() -> String {
    "You don't have enough money to §e{action}".to_string()
}

/// Substances configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub economy: EconomySettings,
    #[serde(default)]
    pub settings: MessageSettings,
    #[serde(default)]
    pub substances: Vec<Substance>,
}

impl Config {
    /// Path of the config file inside `data_dir`
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    /// Load config from the data folder
    ///
    /// A missing file yields defaults. A malformed file is an error rather
    /// than silently defaulted, since prices come from it.
    /// The provider can be overridden via `SUBSTANCES_ECONOMY_PROVIDER`.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = Self::path(data_dir);

        let mut config = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Self::from_json(&content)
                .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?
        } else {
            Self::default()
        };

        if let Ok(provider) = std::env::var(PROVIDER_ENV) {
            if !provider.trim().is_empty() {
                config.economy.provider = provider;
            }
        }

        Ok(config)
    }

    /// Parse and validate config JSON
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the data folder
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(Self::path(data_dir), content)?;
        Ok(())
    }

    /// Write the bundled default config unless a config file already exists
    ///
    /// Returns true if a file was written.
    pub fn write_default(data_dir: &Path) -> Result<bool> {
        if Self::path(data_dir).exists() {
            return Ok(false);
        }
        std::fs::create_dir_all(data_dir)?;
        Self::bundled().save(data_dir)?;
        Ok(true)
    }

    /// Reject configs the shop cannot serve consistently
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for substance in &self.substances {
            if substance.id.trim().is_empty() {
                return Err(Error::validation(format!(
                    "substance '{}' has an empty id",
                    substance.name
                )));
            }
            if !seen.insert(substance.id.as_str()) {
                return Err(Error::validation(format!(
                    "duplicate substance id '{}'",
                    substance.id
                )));
            }
        }
        Ok(())
    }

    /// Look up a substance by id
    pub fn substance(&self, id: &str) -> Result<&Substance> {
        self.substances
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::not_found(format!("substance '{}'", id)))
    }

    /// The default catalog written on first start
    pub fn bundled() -> Self {
        Self {
            economy: EconomySettings::default(),
            settings: MessageSettings::default(),
            substances: vec![
                Substance::new("coffee", "Coffee", Money::from(5))
                    .with_action_text("drank a strong coffee")
                    .with_effect(EffectSpec::new("speed", 30, 1))
                    .with_effect(EffectSpec::new("haste", 30, 0)),
                Substance::new("energy_drink", "Energy Drink", Money::from(12))
                    .with_action_text("downed an energy drink")
                    .with_effect(EffectSpec::new("speed", 60, 2))
                    .with_effect(EffectSpec::new("jump_boost", 60, 1))
                    .with_effect(EffectSpec::new("nausea", 10, 0)),
                Substance::new("painkillers", "Painkillers", Money::from(20))
                    .with_action_text("took some painkillers")
                    .with_effect(EffectSpec::new("regeneration", 15, 1))
                    .with_effect(EffectSpec::new("resistance", 30, 0)),
                Substance::new("night_drops", "Night Drops", Money::from(8))
                    .with_action_text("used night drops")
                    .with_effect(EffectSpec::new("night_vision", 120, 0)),
                Substance::new("clear_effects", "Milk", Money::from(3))
                    .with_action_text("drank milk and cleared all effects"),
            ],
        }
    }
}
