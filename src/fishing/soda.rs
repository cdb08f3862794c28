//! Consumable ("soda") catalog. Each soda resolves to one [SodaModifiers]
//! record at cast time, the same dispatch shape as the lure effects, so the
//! trial engine never branches on the soda itself.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Soda {
    #[default]
    None,
    /// Fizzy bite booster: more frequent hooks.
    CatcherCola,
    /// Energy drink: faster reeling.
    ReelRush,
    /// Brain tonic: more XP per catch.
    ThinkerTonic,
    /// Sends a small labeled gold bonus with every catch.
    TipjarTango,
}

/// Modifier bundle one soda resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SodaModifiers {
    /// Multiplier on the per-iteration bite chance.
    pub catch_mult: f64,
    /// Multiplier on reel speed. Tracked for completeness; elapsed-time
    /// accounting does not model reel savings yet (the report warns).
    pub reel_mult: f64,
    /// Multiplier on XP per caught instance.
    pub xp_mult: f64,
    /// Flat bonus gold range per trial, inclusive. `lo <= hi`.
    pub flat_gold: Option<(u32, u32)>,
    /// Percent-of-worth bonus gold range per trial. `lo <= hi`.
    pub percent_gold: Option<(f64, f64)>,
    /// Shop cost of one can.
    pub cost: f64,
    /// Effect duration in seconds; drives the aggregator's repurchase model.
    pub duration_secs: f64,
}

impl Default for SodaModifiers {
    fn default() -> Self {
        SodaModifiers {
            catch_mult: 1.0,
            reel_mult: 1.0,
            xp_mult: 1.0,
            flat_gold: None,
            percent_gold: None,
            cost: 0.0,
            duration_secs: f64::INFINITY,
        }
    }
}

impl Soda {
    pub fn modifiers(self) -> SodaModifiers {
        let base = SodaModifiers::default();
        match self {
            Soda::None => base,
            Soda::CatcherCola => SodaModifiers {
                catch_mult: 1.1,
                cost: 40.0,
                duration_secs: 1200.0,
                ..base
            },
            Soda::ReelRush => SodaModifiers {
                reel_mult: 1.25,
                cost: 30.0,
                duration_secs: 1200.0,
                ..base
            },
            Soda::ThinkerTonic => SodaModifiers {
                xp_mult: 1.5,
                cost: 55.0,
                duration_secs: 1200.0,
                ..base
            },
            Soda::TipjarTango => SodaModifiers {
                flat_gold: Some((1, 3)),
                percent_gold: Some((0.01, 0.05)),
                cost: 70.0,
                duration_secs: 900.0,
                ..base
            },
        }
    }
}
