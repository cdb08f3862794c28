//! Quality tiers (Normal through Alpha): worth multiplier plus the
//! multiplicative/additive difficulty adjustment pair.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityTier {
    #[serde(default)]
    pub name: String,
    /// Worth and XP multiplier for catches of this quality.
    pub worth: f64,
    /// Multiplicative difficulty adjustment.
    pub diff: f64,
    /// Additive difficulty adjustment, applied after `diff`.
    pub bdiff: f64,
}

/// Canonical tier ladder used when the data dump does not override it.
pub fn default_quality_tiers() -> Vec<QualityTier> {
    [
        ("Normal", 1.0, 1.0, 0.0),
        ("Shining", 1.5, 1.25, 5.0),
        ("Glistening", 2.5, 1.5, 10.0),
        ("Opulent", 4.0, 1.75, 15.0),
        ("Radiant", 6.5, 2.0, 20.0),
        ("Alpha", 10.0, 2.25, 25.0),
    ]
    .into_iter()
    .map(|(name, worth, diff, bdiff)| QualityTier {
        name: name.to_string(),
        worth,
        diff,
        bdiff,
    })
    .collect()
}
