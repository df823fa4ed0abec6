//! Player port
//!
//! The connected player and other command senders, as seen by the shop.
//! Owned by the host.

use crate::domain::{Account, EffectInstance};

/// Anything that can receive a chat message
pub trait Recipient {
    fn send_message(&self, message: &str);
}

/// A connected player
pub trait Player: Recipient {
    fn name(&self) -> &str;

    /// Stable secondary identifier
    fn xuid(&self) -> &str;

    fn add_effect(&self, effect: EffectInstance);

    fn clear_effects(&self);

    /// Account identity used for economy calls
    fn account(&self) -> Account {
        Account::new(self.name(), self.xuid())
    }
}

/// Whoever issued a command
pub enum CommandSender<'a> {
    Player(&'a dyn Player),
    Console(&'a dyn Recipient),
}
