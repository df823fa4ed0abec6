//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for everything the host owns: the installed
//! economy back ends, the extension lookup, and the connected player. The
//! core depends only on these traits.

pub mod economy;
mod player;
mod resolver;

pub use economy::{
    BedrockBalanceApi, BedrockClosureApi, BedrockEconomy, CoinApi, EconomyApi, ErrorCallback,
    ProviderError, ProviderHandle, ProviderResult, SettleCallback,
};
pub use player::{CommandSender, Player, Recipient};
pub use resolver::ExtensionResolver;
