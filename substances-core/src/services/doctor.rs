//! Doctor service - configuration and economy health checks

use std::collections::HashSet;

use serde::Serialize;

use crate::config::Config;

use super::{EconomyGateway, Resolution};

/// Result of a single health check
#[derive(Debug, Clone, Serialize)]
pub struct Check {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

/// All checks, in the order they ran
#[derive(Debug, Clone, Serialize)]
pub struct DoctorReport {
    pub checks: Vec<Check>,
    pub passed: usize,
    pub warnings: usize,
    pub failures: usize,
}

impl DoctorReport {
    fn from_checks(checks: Vec<Check>) -> Self {
        let count = |status| checks.iter().filter(|c| c.status == status).count();
        let passed = count(CheckStatus::Pass);
        let warnings = count(CheckStatus::Warn);
        let failures = count(CheckStatus::Fail);
        Self {
            checks,
            passed,
            warnings,
            failures,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.failures == 0
    }
}

/// Stateless set of checks over a loaded config and its gateway
pub struct DoctorService;

impl DoctorService {
    pub fn check(config: &Config, gateway: &EconomyGateway) -> DoctorReport {
        let checks = vec![
            Self::check_economy(gateway),
            Self::check_catalog(config),
            Self::check_duplicate_ids(config),
            Self::check_effects(config),
            Self::check_prices(config),
        ];
        DoctorReport::from_checks(checks)
    }

    fn check_economy(gateway: &EconomyGateway) -> Check {
        let provider = gateway.provider_name();
        let (status, message) = match gateway.resolution() {
            Resolution::Bound => (
                CheckStatus::Pass,
                format!("Using economy provider: {}", provider),
            ),
            Resolution::MissingExtension => (
                CheckStatus::Warn,
                format!(
                    "Provider '{}' is configured but its plugin is not installed; purchases are disabled",
                    provider
                ),
            ),
            Resolution::IncompatibleExtension => (
                CheckStatus::Fail,
                format!("Installed plugin does not expose the '{}' API", provider),
            ),
            Resolution::UnknownProvider => (
                CheckStatus::Fail,
                format!(
                    "Unknown economy provider '{}' (expected economyapi, bedrockeconomy or coinapi)",
                    provider
                ),
            ),
        };

        Check {
            name: "economy_provider".to_string(),
            status,
            message,
            details: Vec::new(),
        }
    }

    fn check_catalog(config: &Config) -> Check {
        let count = config.substances.len();
        let (status, message) = if count == 0 {
            (CheckStatus::Warn, "No substances configured; the menu is empty".to_string())
        } else {
            (CheckStatus::Pass, format!("{} substances configured", count))
        };

        Check {
            name: "catalog".to_string(),
            status,
            message,
            details: Vec::new(),
        }
    }

    fn check_duplicate_ids(config: &Config) -> Check {
        let mut seen = HashSet::new();
        let duplicates: Vec<String> = config
            .substances
            .iter()
            .filter(|s| !seen.insert(s.id.as_str()))
            .map(|s| s.id.clone())
            .collect();

        let (status, message) = if duplicates.is_empty() {
            (CheckStatus::Pass, "All substance ids are unique".to_string())
        } else {
            (
                CheckStatus::Fail,
                format!("{} duplicate substance ids", duplicates.len()),
            )
        };

        Check {
            name: "duplicate_ids".to_string(),
            status,
            message,
            details: duplicates,
        }
    }

    fn check_effects(config: &Config) -> Check {
        let unknown: Vec<String> = config
            .substances
            .iter()
            .flat_map(|s| {
                s.unknown_effects()
                    .into_iter()
                    .map(move |effect| format!("{}: {}", s.id, effect))
            })
            .collect();

        let (status, message) = if unknown.is_empty() {
            (CheckStatus::Pass, "All effect names are known".to_string())
        } else {
            (
                CheckStatus::Warn,
                format!("{} unknown effect names will be skipped", unknown.len()),
            )
        };

        Check {
            name: "effects".to_string(),
            status,
            message,
            details: unknown,
        }
    }

    fn check_prices(config: &Config) -> Check {
        let free: Vec<String> = config
            .substances
            .iter()
            .filter(|s| s.price.is_zero())
            .map(|s| s.id.clone())
            .collect();

        let (status, message) = if free.is_empty() {
            (CheckStatus::Pass, "Every substance has a price".to_string())
        } else {
            (
                CheckStatus::Warn,
                format!("{} substances are free", free.len()),
            )
        };

        Check {
            name: "prices".to_string(),
            status,
            message,
            details: free,
        }
    }
}
