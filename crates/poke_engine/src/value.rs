//! Plain data types with range invariants: moves and stat stages (C1).

use crate::types::Type;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    pub move_type: Type,
    pub category: MoveCategory,
    pub power: u16,
    pub accuracy: u8,
    pub priority: i8,
}

impl Move {
    pub fn new(
        name: impl Into<String>,
        move_type: Type,
        category: MoveCategory,
        power: u16,
        accuracy: u8,
        priority: i8,
    ) -> Self {
        let power = if category == MoveCategory::Status { 0 } else { power };
        Self {
            name: name.into(),
            move_type,
            category,
            power,
            accuracy: accuracy.min(100),
            priority,
        }
    }

    pub fn is_damaging(&self) -> bool {
        self.category != MoveCategory::Status && self.power > 0
    }
}

/// A stat stage in `[-6, +6]`, clamped on construction, §3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatStage(i8);

impl StatStage {
    pub fn new(value: i8) -> Self {
        Self(value.clamp(-6, 6))
    }

    pub fn value(self) -> i8 {
        self.0
    }

    /// Apply a signed delta, clamping the result, §3 invariant 2.
    pub fn adjust(self, delta: i8) -> Self {
        Self::new(self.0.saturating_add(delta))
    }
}

/// Effort values: each `0..=252`, optionally capped to a 510 total, §3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffortValues([u8; 6]);

impl EffortValues {
    pub const MAX_SINGLE: u16 = 252;
    pub const MAX_TOTAL: u16 = 510;

    /// Clamp each value to 252 and the running total to 510 ("normal" mode),
    /// in array order, matching the teacher's `PokemonConfig::evs` builder.
    pub fn new_normal(raw: [u8; 6]) -> Self {
        let mut total: u16 = 0;
        let mut out = [0u8; 6];
        for (i, &v) in raw.iter().enumerate() {
            let clamped = (v as u16).min(Self::MAX_SINGLE);
            let remaining = Self::MAX_TOTAL.saturating_sub(total);
            let final_v = clamped.min(remaining);
            out[i] = final_v as u8;
            total += final_v;
        }
        Self(out)
    }

    /// Clamp each value independently, ignoring the 510 team total.
    pub fn new_unconstrained(raw: [u8; 6]) -> Self {
        let mut out = [0u8; 6];
        for (i, &v) in raw.iter().enumerate() {
            out[i] = v.min(Self::MAX_SINGLE as u8);
        }
        Self(out)
    }

    pub fn get(&self, index: usize) -> u8 {
        self.0[index]
    }
}

/// Individual values: each `0..=31`, §3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualValues([u8; 6]);

impl IndividualValues {
    pub const MAX: u8 = 31;

    pub fn new(raw: [u8; 6]) -> Self {
        Self(raw.map(|v| v.min(Self::MAX)))
    }

    pub fn perfect() -> Self {
        Self([Self::MAX; 6])
    }

    pub fn get(&self, index: usize) -> u8 {
        self.0[index]
    }
}

impl Default for IndividualValues {
    fn default() -> Self {
        Self::perfect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_stage_clamps_on_construction_and_adjust() {
        assert_eq!(StatStage::new(10).value(), 6);
        assert_eq!(StatStage::new(-10).value(), -6);
        let s = StatStage::new(5).adjust(3);
        assert_eq!(s.value(), 6);
    }

    #[test]
    fn evs_normal_mode_caps_total_at_510() {
        let evs = EffortValues::new_normal([252, 252, 252, 0, 0, 0]);
        let total: u16 = (0..6).map(|i| evs.get(i) as u16).sum();
        assert_eq!(total, 510);
        assert_eq!(evs.get(0), 252);
        assert_eq!(evs.get(1), 252);
        assert_eq!(evs.get(2), 6);
    }

    #[test]
    fn ivs_clamp_to_31() {
        let ivs = IndividualValues::new([40, 0, 31, 31, 31, 31]);
        assert_eq!(ivs.get(0), 31);
    }
}
