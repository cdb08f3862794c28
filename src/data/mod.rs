//! Reference data store: item/bait/lure/loot-table/quality definitions and
//! the startup-loaded registry. Read-only after load.

pub mod bait;
pub mod item;
pub mod loot_table;
pub mod lure;
pub mod quality;
pub mod registry;

pub use bait::{BaitDefinition, UNLIMITED_TIER};
pub use item::{ItemDefinition, MONEYBAG_ITEM_ID, TREASURE_CHEST_ITEM_ID};
pub use loot_table::{LootTable, LootTableEntry, RAIN_TABLE_ID, TRASH_TABLE_ID};
pub use lure::{LureDefinition, LureEffect, LureModifiers, RerollPolicy};
pub use quality::{default_quality_tiers, QualityTier};
pub use registry::DataRegistry;
