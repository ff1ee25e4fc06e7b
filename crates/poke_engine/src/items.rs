//! Held items: a closed enum of `Effect` implementors (§4.6).
//!
//! Grounded on the capability set `poke_engine::items::hooks::ItemHooks`
//! exposes (`modify_attack`, `modify_defense`, ...), narrowed down to the two
//! concrete variants SPEC_FULL's tests mandate plus the `None` sentinel.

use crate::effect::{pct_boost, DamageHookContext, Effect};
use crate::natures::Stat;
use crate::types::Type;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Item {
    /// Always-identity sentinel, mandatory default (§4.6, §9).
    None,
    /// Boosts `stat` by `pct` percent whenever it's queried.
    StatBoost { name: String, stat: Stat, pct: i32 },
    /// Boosts outgoing attack index by `pct` percent when the move's type
    /// matches `move_type`.
    TypeBoost { name: String, move_type: Type, pct: i32 },
}

impl Default for Item {
    fn default() -> Self {
        Item::None
    }
}

impl Effect for Item {
    fn modify_outgoing_damage(&self, ctx: DamageHookContext, input: u32) -> u32 {
        match self {
            Item::TypeBoost { move_type, pct, .. } if *move_type == ctx.move_type => {
                pct_boost(input, *pct)
            }
            _ => input,
        }
    }

    fn modify_stat(&self, stat: Stat, value: u16) -> u16 {
        match self {
            Item::StatBoost { stat: target, pct, .. } if *target == stat => {
                pct_boost(value as u32, *pct) as u16
            }
            _ => value,
        }
    }
}
