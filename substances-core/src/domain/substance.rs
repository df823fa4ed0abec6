//! Substance catalog entries

use serde::{Deserialize, Serialize};

use super::effect::{EffectInstance, EffectKind, DEFAULT_AMPLIFIER, DEFAULT_DURATION_SECS};
use super::money::Money;

/// Catalog id whose purchase clears every active effect instead of adding any
pub const CLEAR_EFFECTS_ID: &str = "clear_effects";

/// One configured effect of a substance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectSpec {
    /// Effect name, resolved with [`EffectKind::from_name`]
    pub effect: String,
    /// Duration in seconds
    #[serde(default = "default_duration")]
    pub duration: u32,
    #[serde(default = "default_amplifier")]
    pub amplifier: u32,
}

fn default_duration() -> u32 {
    DEFAULT_DURATION_SECS
}

fn default_amplifier() -> u32 {
    DEFAULT_AMPLIFIER
}

impl EffectSpec {
    pub fn new(effect: impl Into<String>, duration: u32, amplifier: u32) -> Self {
        Self {
            effect: effect.into(),
            duration,
            amplifier,
        }
    }

    /// Resolve to an applicable effect, or None if the name is unknown
    pub fn resolve(&self) -> Option<EffectInstance> {
        EffectKind::from_name(&self.effect)
            .map(|kind| EffectInstance::new(kind, self.duration, self.amplifier))
    }
}

/// A purchasable menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Substance {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: Money,
    /// Button label; `{price}` is replaced with the formatted price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    /// Completes "You ..." in purchase messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_text: Option<String>,
    #[serde(default)]
    pub effects: Vec<EffectSpec>,
}

impl Substance {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            button_text: None,
            action_text: None,
            effects: Vec::new(),
        }
    }

    pub fn with_effect(mut self, effect: EffectSpec) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_button_text(mut self, text: impl Into<String>) -> Self {
        self.button_text = Some(text.into());
        self
    }

    pub fn with_action_text(mut self, text: impl Into<String>) -> Self {
        self.action_text = Some(text.into());
        self
    }

    pub fn clears_effects(&self) -> bool {
        self.id == CLEAR_EFFECTS_ID
    }

    pub fn action_text(&self) -> String {
        self.action_text
            .clone()
            .unwrap_or_else(|| format!("used {}", self.name))
    }

    pub fn button_label(&self, formatted_price: &str) -> String {
        let template = self
            .button_text
            .clone()
            .unwrap_or_else(|| format!("§e{} §f(§c{{price}}§f)", self.name));
        template.replace("{price}", formatted_price)
    }

    /// Effect names that do not resolve to a known effect
    pub fn unknown_effects(&self) -> Vec<&str> {
        self.effects
            .iter()
            .filter(|spec| spec.resolve().is_none())
            .map(|spec| spec.effect.as_str())
            .collect()
    }
}
