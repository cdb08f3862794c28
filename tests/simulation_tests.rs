use tacklebox::data::{
    default_quality_tiers, BaitDefinition, DataRegistry, ItemDefinition, LootTable,
    LootTableEntry, LureDefinition, LureEffect, MONEYBAG_ITEM_ID, TREASURE_CHEST_ITEM_ID,
};
use tacklebox::fishing::{self, Rng, Soda, TrialParams, WorthMode};
use tacklebox::ConfigError;

fn item(id: &str, tier: u32, rare: bool, average_size: f64, sell_value: f64) -> ItemDefinition {
    ItemDefinition {
        id: id.to_string(),
        item_name: id.to_string(),
        category: "fish".to_string(),
        tier,
        rare,
        catch_difficulty: 15.0,
        average_size,
        sell_value,
        loot_weight: 0.5,
        generate_worth: false,
        obtain_xp: 25.0,
    }
}

fn table(id: &str, total: f64, entries: &[(&str, f64)]) -> LootTable {
    LootTable {
        id: id.to_string(),
        total,
        entries: entries
            .iter()
            .map(|(item, weight)| LootTableEntry {
                item: item.to_string(),
                weight: *weight,
            })
            .collect(),
    }
}

fn lure(id: &str, effect_id: LureEffect) -> LureDefinition {
    LureDefinition {
        id: id.to_string(),
        name: id.to_string(),
        effect_id,
    }
}

fn bait(id: &str, catch: f64, max_tier: i32, quality: Vec<f64>) -> BaitDefinition {
    BaitDefinition {
        id: id.to_string(),
        catch,
        cost: 25.0,
        max_tier,
        quality,
    }
}

fn fixture() -> DataRegistry {
    DataRegistry::from_parts(
        vec![
            item("fish_ocean_sunfish", 0, false, 100.0, 50.0),
            item("fish_ocean_kraken", 3, true, 200.0, 300.0),
            item("fish_lake_carp", 0, false, 40.0, 25.0),
            item("junk_boot", 0, false, 10.0, 1.0),
            item("fish_rain_eel", 1, false, 60.0, 80.0),
            item(TREASURE_CHEST_ITEM_ID, 0, false, 60.0, 0.0),
            item(MONEYBAG_ITEM_ID, 0, false, 20.0, 10.0),
        ],
        vec![
            bait("worms", 0.4, -1, vec![0.3, 0.1]),
            bait("guaranteed", 1.0, -1, vec![1.0, 0.0]),
            bait("shallow", 0.5, 0, vec![]),
        ],
        vec![
            lure("salty_lure", LureEffect::Salty),
            lure("large_lure", LureEffect::Large),
            lure("lucky_lure", LureEffect::Lucky),
            lure("double_lure", LureEffect::Double),
        ],
        vec![
            table("ocean", 100.0, &[("fish_ocean_sunfish", 70.0), ("fish_ocean_kraken", 100.0)]),
            table("lake", 10.0, &[("fish_lake_carp", 10.0)]),
            table("water_trash", 5.0, &[("junk_boot", 5.0)]),
            table("rain", 8.0, &[("fish_rain_eel", 8.0)]),
            table("abyss", 5.0, &[("fish_ocean_kraken", 5.0)]),
        ],
        default_quality_tiers(),
    )
    .unwrap()
}

#[test]
fn valid_params_yield_a_wellformed_outcome_or_null() {
    let registry = fixture();
    let params = TrialParams::default();
    let mut rng = Rng::new(404);
    for _ in 0..1000 {
        let Some(outcome) = fishing::simulate(&registry, &params, &mut rng).unwrap() else {
            continue;
        };
        assert!(outcome.elapsed > 0.0);
        assert!(!outcome.items.is_empty());
        for instance in &outcome.items {
            assert!(instance.size >= 0.01);
            assert!(instance.tags.is_empty());
        }
        assert!(outcome.xp > 0.0);
    }
}

#[test]
fn guaranteed_upgrade_ladder_always_yields_tier_one() {
    // quality ladder [1.0, 0.0]: the first rung always upgrades to tier 1,
    // the second never fires, and iteration stops at the ladder's end.
    let registry = fixture();
    let params = TrialParams {
        casted_bait: "guaranteed".to_string(),
        fish_type: "lake".to_string(),
        ..TrialParams::default()
    };
    let mut rng = Rng::new(8);
    let mut catches = 0;
    for _ in 0..500 {
        let Some(outcome) = fishing::simulate(&registry, &params, &mut rng).unwrap() else {
            continue;
        };
        for instance in outcome.items {
            if instance.id == TREASURE_CHEST_ITEM_ID {
                assert_eq!(instance.quality, 0);
                continue;
            }
            assert_eq!(instance.quality, 1, "item {}", instance.id);
            catches += 1;
        }
    }
    assert!(catches > 400);
}

#[test]
fn null_outcome_when_any_roll_exhausts() {
    // The abyss table only holds a tier-3 item; a tier-0 bait ceiling blocks
    // every attempt, so all trials resolve to null rather than an error.
    let registry = fixture();
    let params = TrialParams {
        casted_bait: "shallow".to_string(),
        fish_type: "abyss".to_string(),
        junk_mult: 0.0, // no trash escape hatch
        ..TrialParams::default()
    };
    let mut rng = Rng::new(21);
    for _ in 0..50 {
        assert_eq!(fishing::simulate(&registry, &params, &mut rng).unwrap(), None);
    }
}

#[test]
fn salty_lure_forces_ocean_catches_from_a_lake() {
    let registry = fixture();
    let params = TrialParams {
        fish_type: "lake".to_string(),
        lure_selected: "salty_lure".to_string(),
        junk_mult: 0.0,
        ..TrialParams::default()
    };
    let mut rng = Rng::new(99);
    for _ in 0..300 {
        let Some(outcome) = fishing::simulate(&registry, &params, &mut rng).unwrap() else {
            continue;
        };
        for instance in outcome.items {
            assert_ne!(instance.id, "fish_lake_carp", "lake fish slipped through");
        }
    }
}

#[test]
fn saturated_junk_mult_redirects_every_cast_to_trash_at_average_size() {
    // junk chance 0.05 * 1.0 * 20.0 = 1.0: every trial lands in water_trash
    // with the size roll bypassed.
    let registry = fixture();
    let params = TrialParams {
        junk_mult: 20.0,
        ..TrialParams::default()
    };
    let boot_avg = registry.item("junk_boot").unwrap().average_size;
    let mut rng = Rng::new(3);
    let mut boots = 0;
    for _ in 0..200 {
        let Some(outcome) = fishing::simulate(&registry, &params, &mut rng).unwrap() else {
            continue;
        };
        for instance in outcome.items {
            match instance.id.as_str() {
                "junk_boot" => {
                    assert_eq!(instance.size, boot_avg);
                    boots += 1;
                }
                // Treasure still overrides independently of the junk redirect.
                id if id == TREASURE_CHEST_ITEM_ID => {}
                other => panic!("unexpected catch {other}"),
            }
        }
    }
    assert!(boots > 150);
}

#[test]
fn rain_redirect_pulls_from_the_rain_table() {
    let registry = fixture();
    let params = TrialParams {
        fish_type: "lake".to_string(),
        in_rain: true,
        junk_mult: 0.0,
        ..TrialParams::default()
    };
    let mut rng = Rng::new(12);
    let mut eels = 0;
    let mut carp = 0;
    for _ in 0..3000 {
        let Some(outcome) = fishing::simulate(&registry, &params, &mut rng).unwrap() else {
            continue;
        };
        for instance in outcome.items {
            match instance.id.as_str() {
                "fish_rain_eel" => eels += 1,
                "fish_lake_carp" => carp += 1,
                _ => {}
            }
        }
    }
    // 8% redirect chance: both tables must show up, lake dominating.
    assert!(eels > 100, "rain table never hit: {eels}");
    assert!(carp > eels);
}

#[test]
fn large_lure_keeps_the_biggest_of_three_rolls() {
    // With one item in the table all three rolls share an item, so the
    // chosen size must dominate a fresh single-roll distribution. Checked
    // cheaply: mean size under the large lure exceeds the no-lure mean.
    let registry = fixture();
    let base = TrialParams {
        fish_type: "lake".to_string(),
        junk_mult: 0.0,
        ..TrialParams::default()
    };
    let with_lure = TrialParams {
        lure_selected: "large_lure".to_string(),
        ..base.clone()
    };
    let mean_size = |params: &TrialParams, seed: u64| {
        let mut rng = Rng::new(seed);
        let mut sum = 0.0;
        let mut n = 0u32;
        for _ in 0..2000 {
            if let Some(outcome) = fishing::simulate(&registry, params, &mut rng).unwrap() {
                for instance in outcome.items {
                    if instance.id == "fish_lake_carp" {
                        sum += instance.size;
                        n += 1;
                    }
                }
            }
        }
        sum / f64::from(n)
    };
    let plain = mean_size(&base, 1);
    let large = mean_size(&with_lure, 1);
    assert!(
        large > plain + 1.0,
        "large lure mean {large} not above plain mean {plain}"
    );
}

#[test]
fn lucky_lure_always_pays_at_least_one_gold() {
    let registry = fixture();
    let params = TrialParams {
        lure_selected: "lucky_lure".to_string(),
        ..TrialParams::default()
    };
    let mut rng = Rng::new(77);
    let mut paid = 0;
    for _ in 0..300 {
        let Some(outcome) = fishing::simulate(&registry, &params, &mut rng).unwrap() else {
            continue;
        };
        assert!(outcome.bonus.lucky_lure >= 1.0);
        assert_eq!(outcome.bonus.soda_flat, 0.0);
        paid += 1;
    }
    assert!(paid > 200);
}

#[test]
fn double_lure_occasionally_doubles_the_catch_and_its_xp() {
    let registry = fixture();
    let params = TrialParams {
        fish_type: "lake".to_string(),
        lure_selected: "double_lure".to_string(),
        junk_mult: 0.0,
        soda: Soda::ThinkerTonic,
        ..TrialParams::default()
    };
    let mut rng = Rng::new(31);
    let mut doubles = 0;
    for _ in 0..2000 {
        let Some(outcome) = fishing::simulate(&registry, &params, &mut rng).unwrap() else {
            continue;
        };
        let copies = outcome
            .items
            .iter()
            .filter(|i| i.id == "fish_lake_carp")
            .count();
        if copies == 2 {
            doubles += 1;
            let a = &outcome.items[outcome.items.len() - 2];
            let b = &outcome.items[outcome.items.len() - 1];
            assert_eq!(a, b, "double catch copies must be identical");
        }
    }
    // 15% chance; 2000 trials make a zero count vanishingly unlikely.
    assert!(doubles > 150, "double catches: {doubles}");
}

#[test]
fn config_errors_cover_every_unknown_id() {
    let registry = fixture();
    let mut rng = Rng::new(1);
    let cases: Vec<(TrialParams, ConfigError)> = vec![
        (
            TrialParams {
                casted_bait: "gummy".to_string(),
                ..TrialParams::default()
            },
            ConfigError::UnknownBait("gummy".to_string()),
        ),
        (
            TrialParams {
                lure_selected: "disco".to_string(),
                ..TrialParams::default()
            },
            ConfigError::UnknownLure("disco".to_string()),
        ),
        (
            TrialParams {
                fish_type: "volcano".to_string(),
                ..TrialParams::default()
            },
            ConfigError::UnknownLootTable("volcano".to_string()),
        ),
    ];
    for (params, expected) in cases {
        assert_eq!(
            fishing::simulate(&registry, &params, &mut rng).unwrap_err(),
            expected
        );
    }
}

#[test]
fn worth_golden_value_through_the_public_api() {
    let registry = fixture();
    let sunfish = registry.item("fish_ocean_sunfish").unwrap();
    let normal = registry.quality_tier(0);
    assert_eq!(
        fishing::worth(sunfish, 100.0, normal, true, WorthMode::Money),
        50.0
    );
}
