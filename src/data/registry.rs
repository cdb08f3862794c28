//! Startup-loaded reference data cache (DataRegistry).
//! Load once, pass via Arc to the trial engine and aggregator; read-only after load.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::data::bait::BaitDefinition;
use crate::data::item::ItemDefinition;
use crate::data::loot_table::LootTable;
use crate::data::lure::LureDefinition;
use crate::data::quality::{default_quality_tiers, QualityTier};
use crate::error::DataError;

/// On-disk shape of the reference data dump.
#[derive(Debug, Deserialize)]
struct RawDump {
    items: Vec<ItemDefinition>,
    baits: Vec<BaitDefinition>,
    lures: Vec<LureDefinition>,
    loot_tables: Vec<LootTable>,
    #[serde(default)]
    quality_tiers: Vec<QualityTier>,
}

/// Read-only registry of static game data loaded once at startup.
#[derive(Debug)]
pub struct DataRegistry {
    items: HashMap<String, ItemDefinition>,
    baits: HashMap<String, BaitDefinition>,
    lures: HashMap<String, LureDefinition>,
    loot_tables: HashMap<String, LootTable>,
    quality_tiers: Vec<QualityTier>,
}

impl DataRegistry {
    /// Load and validate the dump at `path`. Any failure here is fatal to
    /// startup; nothing is recoverable mid-trial.
    pub fn load(path: impl AsRef<Path>) -> Result<Arc<DataRegistry>, DataError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let dump: RawDump = serde_json::from_str(&raw).map_err(|source| DataError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        let registry = Self::from_parts(
            dump.items,
            dump.baits,
            dump.lures,
            dump.loot_tables,
            if dump.quality_tiers.is_empty() {
                default_quality_tiers()
            } else {
                dump.quality_tiers
            },
        )?;
        debug!(
            items = registry.items.len(),
            baits = registry.baits.len(),
            lures = registry.lures.len(),
            tables = registry.loot_tables.len(),
            "reference data loaded"
        );
        Ok(Arc::new(registry))
    }

    /// Assemble a registry from in-memory parts. Used by `load` and by tests
    /// that build fixture data without touching disk.
    pub fn from_parts(
        items: Vec<ItemDefinition>,
        baits: Vec<BaitDefinition>,
        lures: Vec<LureDefinition>,
        loot_tables: Vec<LootTable>,
        quality_tiers: Vec<QualityTier>,
    ) -> Result<DataRegistry, DataError> {
        let registry = DataRegistry {
            items: index_by_id(items, |i| i.id.clone(), "items")?,
            baits: index_by_id(baits, |b| b.id.clone(), "baits")?,
            lures: index_by_id(lures, |l| l.id.clone(), "lures")?,
            loot_tables: index_by_id(loot_tables, |t| t.id.clone(), "loot_tables")?,
            quality_tiers,
        };
        registry.validate()?;
        Ok(registry)
    }

    fn validate(&self) -> Result<(), DataError> {
        if self.quality_tiers.is_empty() {
            return Err(DataError::invalid("quality_tiers", "empty tier ladder"));
        }
        for item in self.items.values() {
            if item.average_size <= 0.0 {
                return Err(DataError::invalid(
                    format!("item {}", item.id),
                    format!("average_size must be positive, got {}", item.average_size),
                ));
            }
        }
        for bait in self.baits.values() {
            // Zero would make the bite-wait loop diverge; the penalty only
            // compounds the base rate.
            if !(bait.catch > 0.0 && bait.catch <= 1.0) {
                return Err(DataError::invalid(
                    format!("bait {}", bait.id),
                    format!("catch probability {} outside (0, 1]", bait.catch),
                ));
            }
            if let Some(p) = bait.quality.iter().find(|p| !(0.0..=1.0).contains(*p)) {
                return Err(DataError::invalid(
                    format!("bait {}", bait.id),
                    format!("quality probability {p} outside [0, 1]"),
                ));
            }
        }
        for table in self.loot_tables.values() {
            if table.total <= 0.0 {
                return Err(DataError::invalid(
                    format!("loot table {}", table.id),
                    format!("total weight must be positive, got {}", table.total),
                ));
            }
            for entry in &table.entries {
                if entry.weight < 0.0 {
                    return Err(DataError::invalid(
                        format!("loot table {}", table.id),
                        format!("negative weight for {}", entry.item),
                    ));
                }
                if !self.items.contains_key(&entry.item) {
                    return Err(DataError::invalid(
                        format!("loot table {}", table.id),
                        format!("entry references unknown item {}", entry.item),
                    ));
                }
            }
        }
        Ok(())
    }

    pub fn item(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.get(id)
    }

    pub fn bait(&self, id: &str) -> Option<&BaitDefinition> {
        self.baits.get(id)
    }

    pub fn lure(&self, id: &str) -> Option<&LureDefinition> {
        self.lures.get(id)
    }

    pub fn loot_table(&self, id: &str) -> Option<&LootTable> {
        self.loot_tables.get(id)
    }

    /// Quality tier by index, saturating at the top of the ladder.
    pub fn quality_tier(&self, quality: usize) -> &QualityTier {
        // validate() rejects an empty ladder, so len - 1 is in bounds.
        let top = self.quality_tiers.len() - 1;
        &self.quality_tiers[quality.min(top)]
    }

    pub fn quality_tiers(&self) -> &[QualityTier] {
        &self.quality_tiers
    }
}

fn index_by_id<T>(
    records: Vec<T>,
    id_of: impl Fn(&T) -> String,
    context: &str,
) -> Result<HashMap<String, T>, DataError> {
    let mut map = HashMap::with_capacity(records.len());
    for record in records {
        let id = id_of(&record);
        if map.insert(id.clone(), record).is_some() {
            return Err(DataError::invalid(context, format!("duplicate id {id}")));
        }
    }
    Ok(map)
}
