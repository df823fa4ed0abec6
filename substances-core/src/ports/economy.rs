//! Economy back-end ports
//!
//! The three supported back ends expose mutually incompatible APIs. Each
//! surface is a trait here; the host wraps whatever it has installed in a
//! [`ProviderHandle`]. Every call returns a [`ProviderResult`], where `Err`
//! stands for the external provider throwing.

use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::{Account, ProviderKind};

/// Failure reported by an external economy provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The operation does not exist on the installed version
    #[error("operation not supported by installed version: {operation}")]
    Unsupported { operation: &'static str },

    /// The provider threw or refused the call
    #[error("provider call failed: {0}")]
    Failed(String),
}

impl ProviderError {
    pub fn unsupported(operation: &'static str) -> Self {
        Self::Unsupported { operation }
    }

    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }
}

pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Return codes of the EconomyAPI-style integer protocol (shared by CoinAPI)
pub mod ret {
    pub const SUCCESS: i32 = 1;
    pub const INVALID: i32 = 0;
    pub const NO_ACCOUNT: i32 = -1;
    pub const CANCELLED: i32 = -2;
    pub const NOT_FOUND: i32 = -3;
}

/// EconomyAPI surface
pub trait EconomyApi: Send + Sync {
    fn my_money(&self, account: &Account) -> ProviderResult<Decimal>;

    /// Returns one of the [`ret`] codes
    fn reduce_money(&self, account: &Account, amount: Decimal) -> ProviderResult<i32>;

    /// Returns one of the [`ret`] codes
    fn add_money(&self, account: &Account, amount: Decimal) -> ProviderResult<i32>;
}

/// CoinAPI surface
pub trait CoinApi: Send + Sync {
    fn my_coin(&self, account: &Account) -> ProviderResult<Decimal>;

    /// Returns one of the [`ret`] codes
    fn reduce_coin(&self, account: &Account, amount: Decimal) -> ProviderResult<i32>;

    /// Returns one of the [`ret`] codes
    fn add_coin(&self, account: &Account, amount: Decimal) -> ProviderResult<i32>;
}

/// Settlement callback of the closure-style BedrockEconomy API
pub type SettleCallback = Box<dyn FnOnce() + Send>;

/// Failure callback of the closure-style BedrockEconomy API
pub type ErrorCallback = Box<dyn FnOnce(ProviderError) + Send>;

/// Name-keyed balance API of BedrockEconomy
///
/// Used both for the version-pinned legacy accessor and for the plugin's
/// own advertised API object. Methods a version lacks keep the default
/// `Unsupported` body. Amounts are whole currency units.
pub trait BedrockBalanceApi: Send + Sync {
    /// `Ok(None)` means the back end has no balance for this player
    fn get_player_balance(&self, _name: &str) -> ProviderResult<Option<Decimal>> {
        Err(ProviderError::unsupported("getPlayerBalance"))
    }

    fn subtract_from_player_balance(&self, _name: &str, _amount: i64) -> ProviderResult<bool> {
        Err(ProviderError::unsupported("subtractFromPlayerBalance"))
    }

    fn add_to_player_balance(&self, _name: &str, _amount: i64) -> ProviderResult<bool> {
        Err(ProviderError::unsupported("addToPlayerBalance"))
    }
}

/// Closure-style asynchronous BedrockEconomy API
///
/// `Ok(())` means the request was accepted. Settlement happens later inside
/// the back end, which then invokes exactly one of the callbacks.
pub trait BedrockClosureApi: Send + Sync {
    fn subtract(
        &self,
        _xuid: &str,
        _name: &str,
        _amount: i64,
        _decimals: u8,
        _on_success: SettleCallback,
        _on_error: ErrorCallback,
    ) -> ProviderResult<()> {
        Err(ProviderError::unsupported("subtract"))
    }

    fn add(
        &self,
        _xuid: &str,
        _name: &str,
        _amount: i64,
        _decimals: u8,
        _on_success: SettleCallback,
        _on_error: ErrorCallback,
    ) -> ProviderResult<()> {
        Err(ProviderError::unsupported("add"))
    }
}

/// BedrockEconomy extension
///
/// Which accessors exist varies across deployed versions; an absent
/// accessor returns `None`.
pub trait BedrockEconomy: Send + Sync {
    fn legacy(&self) -> Option<Arc<dyn BedrockBalanceApi>> {
        None
    }

    fn closure(&self) -> Option<Arc<dyn BedrockClosureApi>> {
        None
    }

    fn api(&self) -> Option<Arc<dyn BedrockBalanceApi>> {
        None
    }
}

/// A live, externally owned economy back end
#[derive(Clone)]
pub enum ProviderHandle {
    EconomyApi(Arc<dyn EconomyApi>),
    BedrockEconomy(Arc<dyn BedrockEconomy>),
    CoinApi(Arc<dyn CoinApi>),
}

impl ProviderHandle {
    /// The back-end kind this handle speaks
    pub fn kind(&self) -> ProviderKind {
        match self {
            ProviderHandle::EconomyApi(_) => ProviderKind::EconomyApi,
            ProviderHandle::BedrockEconomy(_) => ProviderKind::BedrockEconomy,
            ProviderHandle::CoinApi(_) => ProviderKind::CoinApi,
        }
    }
}

impl std::fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ProviderHandle({})", self.kind())
    }
}
