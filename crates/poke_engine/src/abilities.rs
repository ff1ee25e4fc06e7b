//! Abilities: the other half of the shared item/ability capability set
//! (§4.6). Conforms to the same `Effect` trait and the same two mandated
//! concrete variants as `crate::items::Item` — §4.6 states both item and
//! ability share one capability set, so the variant shapes are identical;
//! what differs is which slot on a `Creature` holds them.

use crate::effect::{pct_boost, DamageHookContext, Effect};
use crate::natures::Stat;
use crate::types::Type;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Ability {
    None,
    StatBoost { name: String, stat: Stat, pct: i32 },
    TypeBoost { name: String, move_type: Type, pct: i32 },
}

impl Default for Ability {
    fn default() -> Self {
        Ability::None
    }
}

impl Effect for Ability {
    fn modify_outgoing_damage(&self, ctx: DamageHookContext, input: u32) -> u32 {
        match self {
            Ability::TypeBoost { move_type, pct, .. } if *move_type == ctx.move_type => {
                pct_boost(input, *pct)
            }
            _ => input,
        }
    }

    fn modify_stat(&self, stat: Stat, value: u16) -> u16 {
        match self {
            Ability::StatBoost { stat: target, pct, .. } if *target == stat => {
                pct_boost(value as u32, *pct) as u16
            }
            _ => value,
        }
    }
}
