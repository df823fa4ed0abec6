//! Substances Core - economy gateway and shop logic for game server hosts
//!
//! This crate follows hexagonal architecture:
//!
//! - **domain**: Core entities (Money, Account, ProviderKind, Substance, effects)
//! - **ports**: Traits for what the host owns (economy back ends, extension lookup, players)
//! - **services**: The economy gateway, the shop and its diagnostics
//! - **adapters**: Concrete port implementations (name-keyed extension registry)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use config::Config;
use ports::ExtensionResolver;
use services::{DoctorReport, DoctorService, EconomyGateway, ShopService};

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{Account, EffectInstance, EffectKind, Money, ProviderKind, Substance};

/// Main context for the substances shop
///
/// Built once when the host enables the add-on and handed to whatever
/// drives the purchase flow. Holds the configuration, the economy gateway
/// resolved against the host's extensions, and the shop.
pub struct SubstancesContext {
    pub config: Config,
    pub gateway: Arc<EconomyGateway>,
    pub shop: ShopService,
}

impl SubstancesContext {
    /// Enable the add-on from a data folder
    ///
    /// Writes the default config on first start, then loads it.
    pub fn new<R>(data_dir: &Path, resolver: &R) -> Result<Self>
    where
        R: ExtensionResolver + ?Sized,
    {
        Config::write_default(data_dir)?;
        let config = Config::load(data_dir)?;
        Ok(Self::from_config(config, resolver))
    }

    /// Build from an already loaded config
    pub fn from_config<R>(config: Config, resolver: &R) -> Self
    where
        R: ExtensionResolver + ?Sized,
    {
        let gateway = Arc::new(EconomyGateway::new(&config.economy, resolver));
        let shop = ShopService::new(Arc::clone(&gateway), &config);

        info!(
            "Substances loaded with {} substances",
            config.substances.len()
        );
        if gateway.is_available() {
            info!("Using economy provider: {}", gateway.provider_name());
        } else {
            warn!("No compatible economy plugin found. Purchases will be disabled.");
        }

        Self {
            config,
            gateway,
            shop,
        }
    }

    /// Run configuration and economy diagnostics
    pub fn doctor(&self) -> DoctorReport {
        DoctorService::check(&self.config, &self.gateway)
    }
}
