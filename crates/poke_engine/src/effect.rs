//! The shared item/ability capability set (C6, §4.6).
//!
//! The teacher models ability/item hooks as `Option<fn(...)>` tables indexed
//! into a mutable SoA `BattleState` (`abilities::hooks::AbilityHooks`,
//! `items::hooks::ItemHooks`). That shape assumes in-place mutation; this port
//! is built on owned, immutable creature values, so the same capability set
//! becomes a small trait with default-identity methods (§9: "implement as a
//! tagged variant or a small trait object"), dispatched through the `Item`/
//! `Ability` enums in `crate::items` / `crate::abilities`.

use crate::natures::Stat;
use crate::types::Type;
use crate::value::MoveCategory;

/// Context available to a damage-modifying hook: just enough to decide
/// whether the hook applies, never a handle back into battle state.
#[derive(Clone, Copy, Debug)]
pub struct DamageHookContext {
    pub move_type: Type,
    pub category: MoveCategory,
}

pub trait Effect {
    /// Transform the attacker-side attack index before the damage formula
    /// runs, §4.3 step 6.
    fn modify_outgoing_damage(&self, ctx: DamageHookContext, input: u32) -> u32 {
        let _ = ctx;
        input
    }

    /// Transform the defender-side effective input analogously, §4.3 step 6.
    fn modify_incoming_damage(&self, ctx: DamageHookContext, input: u32) -> u32 {
        let _ = ctx;
        input
    }

    /// Transform a finished damage result (e.g. recoil, drain) before it is
    /// reported. Identity by default.
    fn after_damage(&self, dealt: u16) -> u16 {
        dealt
    }

    fn on_turn_start(&self) {}

    fn on_turn_end(&self) {}

    /// Transform a real stat value, e.g. Choice Band's 1.5x Attack, §4.6.
    fn modify_stat(&self, stat: Stat, value: u16) -> u16 {
        let _ = stat;
        value
    }
}

/// `value * (100 + pct) / 100`, integer division, matching both
/// `StatBoost`/`TypeBoost`'s mandated semantics in §4.6.
pub fn pct_boost(value: u32, pct: i32) -> u32 {
    let num = value as i64 * (100 + pct as i64);
    (num / 100).max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pct_boost_applies_integer_percentage() {
        assert_eq!(pct_boost(100, 50), 150);
        assert_eq!(pct_boost(100, -10), 90);
        assert_eq!(pct_boost(100, 0), 100);
    }
}
