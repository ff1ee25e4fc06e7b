//! Damage calculation pipeline (C4, §4.3/§4.4).
//!
//! Grounded on `poke_engine::damage::mod`'s pipeline-module shape (a
//! `calculate_damage` entry point composing effectiveness, formula, and
//! modifier-chain submodules) and on the `other_examples`
//! Pokemon_Champions damage module's ordered-modifier-application style.

pub mod formula;

use crate::creature::Creature;
use crate::effect::{DamageHookContext, Effect};
use crate::events::{DamageResult, Event};
use crate::natures::Stat;
use crate::value::{Move, MoveCategory};
use formula::round_half_down;

const MOD_SCALE: u32 = 4096;

/// Outcome of running the damage formula, before it is applied to a
/// defender's HP.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamageOutcome {
    pub effectiveness: f32,
    pub damage: u16,
    pub is_crit: bool,
}

fn stat_pair(category: MoveCategory) -> Option<(Stat, Stat)> {
    match category {
        MoveCategory::Physical => Some((Stat::Atk, Stat::Def)),
        MoveCategory::Special => Some((Stat::SpA, Stat::SpD)),
        MoveCategory::Status => None,
    }
}

fn stage_of(creature: &Creature, stat: Stat) -> i8 {
    use Stat::*;
    let idx = match stat {
        Atk => 0,
        Def => 1,
        SpA => 2,
        SpD => 3,
        Spe => 4,
    };
    creature.stages[idx]
}

/// The ordered damage pipeline, §4.3:
/// 1. zero for non-damaging moves or zero effectiveness;
/// 2. resolve attacker/defender stats (crit ignores unfavorable stages, §4.2);
/// 3. base formula;
/// 4. STAB × effectiveness × random × item/ability modifiers × crit;
/// 5. round half-down, clamp to at least 1.
pub fn calculate_damage(
    attacker: &Creature,
    defender: &Creature,
    mv: &Move,
    generation: u8,
    is_crit: bool,
    random_roll: u8,
) -> DamageOutcome {
    if mv.category == MoveCategory::Status || mv.power == 0 {
        return DamageOutcome { effectiveness: 0.0, damage: 0, is_crit };
    }

    let effectiveness = defender.effectiveness_of(mv.move_type);
    if effectiveness == 0.0 {
        return DamageOutcome { effectiveness, damage: 0, is_crit };
    }

    let (atk_stat, def_stat) = stat_pair(mv.category).expect("non-status move has a stat pair");

    // Crit ignores a defender's favorable (positive) defense stage and an
    // attacker's unfavorable (negative) attack stage, §4.2's "direct" flag.
    let attacker_direct = is_crit && stage_of(attacker, atk_stat) < 0;
    let defender_direct = is_crit && stage_of(defender, def_stat) > 0;

    let attack = attacker.effective_stat(atk_stat, attacker_direct) as f64;
    let defense = defender.effective_stat(def_stat, defender_direct).max(1) as f64;

    let level_factor = (2.0 * attacker.level as f64 / 5.0 + 2.0).floor();
    let base = (level_factor * mv.power as f64 * attack / defense) / 50.0 + 2.0;

    let stab = attacker.stab(mv.move_type) as f64;
    let random_factor = random_roll.clamp(85, 100) as f64 / 100.0;
    let crit_mult = if is_crit {
        if generation >= 6 { 1.5 } else { 2.0 }
    } else {
        1.0
    };

    let ctx = DamageHookContext { move_type: mv.move_type, category: mv.category };
    let outgoing_ratio = {
        let after_item = attacker.item.modify_outgoing_damage(ctx, MOD_SCALE);
        attacker.ability.modify_outgoing_damage(ctx, after_item) as f64 / MOD_SCALE as f64
    };
    let incoming_ratio = {
        let after_item = defender.item.modify_incoming_damage(ctx, MOD_SCALE);
        defender.ability.modify_incoming_damage(ctx, after_item) as f64 / MOD_SCALE as f64
    };

    let raw = base * stab * effectiveness as f64 * random_factor * outgoing_ratio * incoming_ratio * crit_mult;
    let damage = round_half_down(raw).max(1).min(u16::MAX as u32) as u16;

    DamageOutcome { effectiveness, damage, is_crit }
}

/// Apply a computed damage outcome to the defender, producing its new state
/// and the `DamageResult` the turn state machine logs and reacts to, §4.10
/// step 2.
pub fn apply_damage(defender: &Creature, outcome: DamageOutcome) -> (Creature, DamageResult) {
    let next = defender.take_damage(outcome.damage);
    let after_events: Vec<Event> = Vec::new();
    let result = if next.is_alive() {
        DamageResult::Alive { after_events, dealt: outcome.damage }
    } else {
        DamageResult::Dead { after_events, dealt: outcome.damage }
    };
    (next, result)
}
