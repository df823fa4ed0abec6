//! Core domain entities
//!
//! Pure data structures with validation logic - no I/O and no calls into
//! the host.

mod account;
pub mod effect;
pub mod money;
mod provider;
pub mod result;
pub mod substance;

pub use account::Account;
pub use effect::{EffectInstance, EffectKind};
pub use money::Money;
pub use provider::ProviderKind;
pub use substance::{EffectSpec, Substance};
