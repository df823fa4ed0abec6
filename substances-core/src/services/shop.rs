//! Shop service - the substances menu and the purchase flow

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{Config, MessageSettings};
use crate::domain::{Money, Substance};
use crate::ports::{CommandSender, Player};

use super::EconomyGateway;

/// Name of the chat command that opens the menu
pub const COMMAND_NAME: &str = "drugs";

/// Reply to the console when it runs the menu command
pub const PLAYERS_ONLY_MESSAGE: &str = "§cThis command can only be used by players!";

/// A rendered menu: title and one button per substance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Menu {
    pub title: String,
    pub buttons: Vec<MenuButton>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuButton {
    pub substance_id: String,
    pub text: String,
    pub price: String,
}

/// What happened when a player picked from the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PurchaseOutcome {
    /// The form was closed without a choice
    Dismissed,
    /// The index matched no substance
    InvalidSelection { index: usize },
    InsufficientFunds { substance_id: String, price: Money },
    /// Funds looked sufficient but the back end refused the debit
    PaymentFailed { substance_id: String, price: Money },
    Purchased {
        substance_id: String,
        price: Money,
        effects_applied: usize,
    },
}

/// Menu and purchase orchestration over the economy gateway
pub struct ShopService {
    gateway: Arc<EconomyGateway>,
    messages: MessageSettings,
    substances: Vec<Substance>,
}

impl ShopService {
    pub fn new(gateway: Arc<EconomyGateway>, config: &Config) -> Self {
        Self {
            gateway,
            messages: config.settings.clone(),
            substances: config.substances.clone(),
        }
    }

    pub fn substances(&self) -> &[Substance] {
        &self.substances
    }

    /// Build the menu shown to players, buttons in catalog order
    pub fn menu(&self) -> Menu {
        let buttons = self
            .substances
            .iter()
            .map(|substance| {
                let price = self.gateway.format(substance.price);
                MenuButton {
                    substance_id: substance.id.clone(),
                    text: substance.button_label(&price),
                    price,
                }
            })
            .collect();

        Menu {
            title: self.messages.ui_title.clone(),
            buttons,
        }
    }

    /// Handle the menu command
    ///
    /// Returns the menu to show, or None when the sender is not a player
    /// (the sender has then been told so).
    pub fn run_command(&self, sender: CommandSender<'_>) -> Option<Menu> {
        match sender {
            CommandSender::Player(_) => Some(self.menu()),
            CommandSender::Console(console) => {
                console.send_message(PLAYERS_ONLY_MESSAGE);
                None
            }
        }
    }

    /// Handle a menu response
    ///
    /// `selection` is the chosen button index, None if the form was closed.
    /// The debit happens before any effect is applied, so a refused payment
    /// never hands out effects.
    pub fn select(&self, player: &dyn Player, selection: Option<usize>) -> PurchaseOutcome {
        let Some(index) = selection else {
            return PurchaseOutcome::Dismissed;
        };
        let Some(substance) = self.substances.get(index) else {
            debug!("Menu selection {} out of range for {}", index, player.name());
            return PurchaseOutcome::InvalidSelection { index };
        };

        let account = player.account();
        let action = substance.action_text();

        if !self.gateway.has_at_least(&account, substance.price) {
            self.tell(player, &self.not_enough_money(&action));
            return PurchaseOutcome::InsufficientFunds {
                substance_id: substance.id.clone(),
                price: substance.price,
            };
        }

        if !self.gateway.debit(&account, substance.price) {
            self.tell(player, &self.not_enough_money(&action));
            return PurchaseOutcome::PaymentFailed {
                substance_id: substance.id.clone(),
                price: substance.price,
            };
        }

        let effects_applied = self.apply_effects(player, substance);

        let message = self
            .messages
            .purchase_message
            .replace("{price}", &self.gateway.format(substance.price))
            .replace("{action}", &action);
        self.tell(player, &message);

        PurchaseOutcome::Purchased {
            substance_id: substance.id.clone(),
            price: substance.price,
            effects_applied,
        }
    }

    /// Apply the substance's effects; returns how many were applied
    fn apply_effects(&self, player: &dyn Player, substance: &Substance) -> usize {
        if substance.clears_effects() {
            player.clear_effects();
            return 0;
        }

        let mut applied = 0;
        for spec in &substance.effects {
            match spec.resolve() {
                Some(effect) => {
                    player.add_effect(effect);
                    applied += 1;
                }
                None => warn!(
                    "Unknown effect '{}' on substance '{}', skipping",
                    spec.effect, substance.id
                ),
            }
        }
        applied
    }

    fn not_enough_money(&self, action: &str) -> String {
        self.messages.not_enough_money.replace("{action}", action)
    }

    fn tell(&self, player: &dyn Player, message: &str) {
        player.send_message(&format!("{}{}", self.messages.prefix, message));
    }
}
