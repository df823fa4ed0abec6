//! Economy gateway - one uniform balance contract over heterogeneous back ends
//!
//! The gateway resolves the configured back end once, at construction, and
//! then routes every balance query and mutation through that single handle.
//! It never raises across its public contract: an unavailable or failing
//! back end degrades to a zero balance or a `false` mutation.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;
use tracing::{error, warn};

use crate::config::EconomySettings;
use crate::domain::{Account, Money, ProviderKind};
use crate::ports::economy::ret;
use crate::ports::{ExtensionResolver, ProviderError, ProviderHandle, ProviderResult};

use super::bedrock::{self, Mutation};

/// How start-up resolution of the back end went
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    Bound,
    /// Known provider, but its extension is not installed
    MissingExtension,
    /// The installed extension does not speak the configured provider's API
    IncompatibleExtension,
    /// The configured identifier names no known provider
    UnknownProvider,
}

/// Uniform economy contract exposed to the purchase flow
#[derive(Debug)]
pub struct EconomyGateway {
    kind: ProviderKind,
    handle: Option<ProviderHandle>,
    resolution: Resolution,
    currency_symbol: String,
}

impl EconomyGateway {
    /// Resolve the configured provider against the host's extensions
    ///
    /// The resolver is asked at most once, and only for a known kind.
    /// Resolution failures are logged at warning level and leave the
    /// gateway permanently unavailable.
    pub fn new<R>(settings: &EconomySettings, resolver: &R) -> Self
    where
        R: ExtensionResolver + ?Sized,
    {
        let kind = ProviderKind::parse(&settings.provider);

        let (handle, resolution) = match kind.extension_name() {
            None => {
                warn!(
                    "Unknown economy provider: {}. Purchases will be disabled.",
                    kind
                );
                (None, Resolution::UnknownProvider)
            }
            Some(extension) => match resolver.resolve(&kind) {
                None => {
                    warn!(
                        "{} plugin not found. Purchases will be disabled.",
                        extension
                    );
                    (None, Resolution::MissingExtension)
                }
                Some(handle) if handle.kind() != kind => {
                    warn!(
                        "{} plugin does not expose the {} API. Purchases will be disabled.",
                        extension, kind
                    );
                    (None, Resolution::IncompatibleExtension)
                }
                Some(handle) => (Some(handle), Resolution::Bound),
            },
        };

        Self {
            kind,
            handle,
            resolution,
            currency_symbol: settings.currency_symbol.clone(),
        }
    }

    /// True iff a back end is bound
    pub fn is_available(&self) -> bool {
        self.handle.is_some()
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn provider_kind(&self) -> &ProviderKind {
        &self.kind
    }

    /// Configured provider identifier, lowercased
    pub fn provider_name(&self) -> &str {
        self.kind.as_str()
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Current balance, asked fresh from the back end on every call
    ///
    /// Zero when no back end is bound or the back end fails.
    pub fn balance(&self, account: &Account) -> Money {
        let Some(handle) = &self.handle else {
            return Money::ZERO;
        };

        let result = guarded(|| match handle {
            ProviderHandle::EconomyApi(api) => api.my_money(account).map(Money::from_provider),
            ProviderHandle::CoinApi(api) => api.my_coin(account).map(Money::from_provider),
            ProviderHandle::BedrockEconomy(economy) => {
                Ok(bedrock::balance(economy.as_ref(), account))
            }
        });

        match result {
            Ok(balance) => balance,
            Err(e) => {
                error!("Failed to get balance: {}", e);
                Money::ZERO
            }
        }
    }

    /// `balance(account) >= amount`, always re-querying the back end
    pub fn has_at_least(&self, account: &Account, amount: Money) -> bool {
        self.balance(account) >= amount
    }

    /// Take `amount` from the account
    ///
    /// Refused without touching the back end when none is bound or the
    /// balance is short. The back end remains the source of truth, so a
    /// concurrent spend elsewhere can still race this check.
    ///
    /// For BedrockEconomy's closure API, `true` means the request was
    /// accepted for settlement, not that it has settled.
    pub fn debit(&self, account: &Account, amount: Money) -> bool {
        if !self.is_available() || !self.has_at_least(account, amount) {
            return false;
        }
        self.mutate(account, amount, Mutation::Subtract)
    }

    /// Give `amount` to the account
    ///
    /// No balance precondition. Same settlement caveat as [`debit`](Self::debit).
    pub fn credit(&self, account: &Account, amount: Money) -> bool {
        self.mutate(account, amount, Mutation::Add)
    }

    /// Configured symbol followed by the amount with two decimals, e.g. `$5.00`
    pub fn format(&self, amount: Money) -> String {
        amount.format_with(&self.currency_symbol)
    }

    fn mutate(&self, account: &Account, amount: Money, mutation: Mutation) -> bool {
        let Some(handle) = &self.handle else {
            return false;
        };
        let value = amount.amount();

        let result = guarded(|| match (handle, mutation) {
            (ProviderHandle::EconomyApi(api), Mutation::Subtract) => {
                api.reduce_money(account, value).map(is_success)
            }
            (ProviderHandle::EconomyApi(api), Mutation::Add) => {
                api.add_money(account, value).map(is_success)
            }
            (ProviderHandle::CoinApi(api), Mutation::Subtract) => {
                api.reduce_coin(account, value).map(is_success)
            }
            (ProviderHandle::CoinApi(api), Mutation::Add) => {
                api.add_coin(account, value).map(is_success)
            }
            (ProviderHandle::BedrockEconomy(economy), mutation) => {
                Ok(bedrock::mutate(economy.as_ref(), account, amount, mutation))
            }
        });

        match result {
            Ok(accepted) => accepted,
            Err(e) => {
                match mutation {
                    Mutation::Subtract => error!("Failed to reduce balance: {}", e),
                    Mutation::Add => error!("Failed to add balance: {}", e),
                }
                false
            }
        }
    }
}

fn is_success(code: i32) -> bool {
    code == ret::SUCCESS
}

/// Run a provider call, turning a panic inside the back end into a failure
fn guarded<T>(call: impl FnOnce() -> ProviderResult<T>) -> ProviderResult<T> {
    panic::catch_unwind(AssertUnwindSafe(call)).unwrap_or_else(|payload| Err(panic_failure(payload)))
}

/// Describe a caught panic payload as a provider failure
pub(super) fn panic_failure(payload: Box<dyn Any + Send>) -> ProviderError {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    ProviderError::failed(format!("provider panicked: {}", message))
}
