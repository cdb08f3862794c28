//! Lure definitions and the effect dispatch table.
//!
//! Each lure maps to one [LureEffect]; every effect resolves to a structured
//! [LureModifiers] record once, at cast time. The trial engine reads the
//! record and never branches on the effect id itself, so adding an effect is
//! a change here, not in the engine.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LureDefinition {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub effect_id: LureEffect,
}

/// Closed effect enumeration mirroring the game's lure catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LureEffect {
    #[default]
    None,
    Attractive,
    Efficient,
    Magnet,
    Salty,
    Fresh,
    Small,
    Sparkling,
    Large,
    Gold,
    Double,
    Lucky,
    Challenge,
}

/// Rule selecting which of the three redundant (item, size) rolls is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RerollPolicy {
    /// First roll wins.
    First,
    /// Minimum by rolled size; ties keep the earlier roll.
    Smallest,
    /// Maximum by rolled size; ties keep the earlier roll.
    Largest,
    /// Maximum by item tier; ties keep the earlier roll.
    HighestTier,
    /// First roll whose item is flagged rare, else the first roll.
    PreferRare,
}

/// Structured modifier set one lure effect resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LureModifiers {
    /// Multiplier on the per-iteration bite chance.
    pub catch_mult: f64,
    /// Probability that the cast consumes its first bait unit.
    pub bait_use_chance: f64,
    /// Probability of consuming a second bait unit.
    pub extra_bait_chance: f64,
    /// Unconditional extra bait units consumed.
    pub flat_extra_bait: u32,
    /// Multiplier on the trash and treasure override probabilities.
    pub treasure_mult: f64,
    /// Zone override applied regardless of the ambient zone.
    pub forced_zone: Option<&'static str>,
    pub reroll: RerollPolicy,
    /// Chance of the catch producing two copies.
    pub double_catch_chance: f64,
    /// Whether the catch awards bonus gold scaled by its worth.
    pub gold_on_catch: bool,
}

impl Default for LureModifiers {
    fn default() -> Self {
        LureModifiers {
            catch_mult: 1.0,
            bait_use_chance: 1.0,
            extra_bait_chance: 0.0,
            flat_extra_bait: 0,
            treasure_mult: 1.0,
            forced_zone: None,
            reroll: RerollPolicy::First,
            double_catch_chance: 0.0,
            gold_on_catch: false,
        }
    }
}

impl LureEffect {
    pub fn modifiers(self) -> LureModifiers {
        let base = LureModifiers::default();
        match self {
            LureEffect::None | LureEffect::Challenge => base,
            LureEffect::Attractive => LureModifiers {
                catch_mult: 1.3,
                ..base
            },
            LureEffect::Efficient => LureModifiers {
                bait_use_chance: 0.8,
                ..base
            },
            LureEffect::Magnet => LureModifiers {
                treasure_mult: 2.0,
                ..base
            },
            LureEffect::Salty => LureModifiers {
                forced_zone: Some("ocean"),
                ..base
            },
            LureEffect::Fresh => LureModifiers {
                forced_zone: Some("lake"),
                ..base
            },
            LureEffect::Small => LureModifiers {
                reroll: RerollPolicy::Smallest,
                ..base
            },
            LureEffect::Sparkling => LureModifiers {
                extra_bait_chance: 0.25,
                reroll: RerollPolicy::HighestTier,
                ..base
            },
            LureEffect::Large => LureModifiers {
                extra_bait_chance: 0.25,
                reroll: RerollPolicy::Largest,
                ..base
            },
            LureEffect::Gold => LureModifiers {
                flat_extra_bait: 2,
                reroll: RerollPolicy::PreferRare,
                ..base
            },
            LureEffect::Double => LureModifiers {
                extra_bait_chance: 0.25,
                double_catch_chance: 0.15,
                ..base
            },
            LureEffect::Lucky => LureModifiers {
                gold_on_catch: true,
                ..base
            },
        }
    }
}
