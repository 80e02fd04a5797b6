//! Shared fixtures for omni-recruit tests.

#![allow(dead_code)]

use omni_recruit::{LevelRange, OperatorCatalog, OperatorRecord};

/// Interval used by most tests.
pub const DEFAULT_RANGE: LevelRange = LevelRange::new(1, 6);

/// O1(3, {Melee, Defense}) and O2(5, {Melee, Support}).
pub fn two_operator_catalog() -> OperatorCatalog {
    OperatorCatalog::new([
        OperatorRecord::new("O1", "Guard", 3, ["Melee", "Defense"]),
        OperatorRecord::new("O2", "Medic", 5, ["Melee", "Support"]),
    ])
    .unwrap()
}

/// A small catalog spread over several tags and levels.
pub fn sample_catalog() -> OperatorCatalog {
    OperatorCatalog::new([
        OperatorRecord::new("Fang", "Vanguard", 3, ["Melee", "DP-Recovery"]),
        OperatorRecord::new("Melantha", "Guard", 3, ["Melee", "DPS", "Survival"]),
        OperatorRecord::new("Texas", "Vanguard", 5, ["Melee", "DP-Recovery", "Crowd-Control"]),
        OperatorRecord::new("Kroos", "Sniper", 3, ["Ranged", "DPS"]),
        OperatorRecord::new("Ptilopsis", "Medic", 5, ["Ranged", "Healing", "Support"]),
        OperatorRecord::new("Lancet-2", "Medic", 1, ["Ranged", "Healing", "Robot"]).hidden(),
        OperatorRecord::new("Cuora", "Defender", 4, ["Melee", "Defense"]),
        OperatorRecord::new("Shining", "Medic", 6, ["Ranged", "Healing", "Support"]),
    ])
    .unwrap()
}

/// Sorted owned labels.
pub fn labels(items: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = items.iter().map(ToString::to_string).collect();
    out.sort();
    out
}
