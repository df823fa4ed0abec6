//! Status effects a substance can apply

use std::fmt;

use serde::{Deserialize, Serialize};

/// Game ticks per second
pub const TICKS_PER_SECOND: u32 = 20;

/// Default effect duration in seconds
pub const DEFAULT_DURATION_SECS: u32 = 15;

/// Default effect amplifier
pub const DEFAULT_AMPLIFIER: u32 = 1;

macro_rules! effect_kinds {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Named status effects known to the host
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum EffectKind {
            $($variant),+
        }

        impl EffectKind {
            /// Every known effect, in display order
            pub const ALL: &'static [EffectKind] = &[$(EffectKind::$variant),+];

            /// Config name of the effect
            pub fn name(&self) -> &'static str {
                match self {
                    $(EffectKind::$variant => $name),+
                }
            }

            /// Look up an effect by config name (case-insensitive)
            pub fn from_name(name: &str) -> Option<Self> {
                let name = name.trim().to_lowercase();
                match name.as_str() {
                    $($name => Some(EffectKind::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

effect_kinds! {
    Speed => "speed",
    Slowness => "slowness",
    Haste => "haste",
    MiningFatigue => "mining_fatigue",
    Strength => "strength",
    InstantHealth => "instant_health",
    InstantDamage => "instant_damage",
    JumpBoost => "jump_boost",
    Nausea => "nausea",
    Regeneration => "regeneration",
    Resistance => "resistance",
    FireResistance => "fire_resistance",
    WaterBreathing => "water_breathing",
    Invisibility => "invisibility",
    Blindness => "blindness",
    NightVision => "night_vision",
    Hunger => "hunger",
    Weakness => "weakness",
    Poison => "poison",
    Wither => "wither",
    HealthBoost => "health_boost",
    Absorption => "absorption",
    Saturation => "saturation",
    Levitation => "levitation",
    FatalPoison => "fatal_poison",
    ConduitPower => "conduit_power",
    SlowFalling => "slow_falling",
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An effect ready to be applied to a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectInstance {
    pub kind: EffectKind,
    pub duration_ticks: u32,
    pub amplifier: u32,
}

impl EffectInstance {
    pub fn new(kind: EffectKind, duration_secs: u32, amplifier: u32) -> Self {
        Self {
            kind,
            duration_ticks: duration_secs.saturating_mul(TICKS_PER_SECOND),
            amplifier,
        }
    }
}
