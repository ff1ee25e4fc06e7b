//! Creature state (C5, §3/§4.5): the combat-ready unit. Every mutator takes
//! `&self` and returns an owned, distinct `Creature` — the teacher's
//! `PokemonConfig` builder methods take `mut self -> Self` for construction-time
//! configuration; here the same shape is used for in-battle transitions too,
//! since SPEC_FULL requires full value immutability rather than just a
//! builder pattern (§3: "All mutations yield new records").

use crate::abilities::Ability;
use crate::damage::formula::round_half_down;
use crate::effect::{DamageHookContext, Effect};
use crate::events::{ActionEvent, StatTag, StatusEvent, TypeEvent};
use crate::items::Item;
use crate::natures::Nature;
use crate::stats::{calc_hp, calc_stat_for, effective_stat};
use crate::types::{combined_effectiveness, Type};
use crate::value::{EffortValues, IndividualValues, Move, MoveCategory};

/// Order used everywhere a `[T; 5]` per-stat array is indexed: Atk, Def, SpA,
/// SpD, Spe.
fn stat_index(stat: crate::natures::Stat) -> usize {
    use crate::natures::Stat::*;
    match stat {
        Atk => 0,
        Def => 1,
        SpA => 2,
        SpD => 3,
        Spe => 4,
    }
}

/// A resolved user-event conversion failed locally and should be logged and
/// treated as a no-op (§4.11) rather than escaping as an `EngineError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocalInputError {
    InvalidMoveIndex,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Creature {
    pub name: String,
    pub level: u8,

    // type state
    pub original_types: Vec<Type>,
    pub temp_types: Option<Vec<Type>>,
    pub terastal_type: Option<Type>,
    pub terastal_active: bool,
    /// The "special-damage-tag" type (tar shot), §4.1.
    pub damage_tag: Option<Type>,

    // status state
    pub base_stats: [u16; 6], // [hp, atk, def, spa, spd, spe]
    pub ivs: IndividualValues,
    pub evs: EffortValues,
    pub nature: Nature,
    pub stages: [i8; 5],

    // hp state
    pub max_hp: u16,
    pub current_hp: u16,

    pub moves: Vec<Move>,
    pub item: Item,
    pub ability: Ability,
}

impl Creature {
    pub fn new(
        name: impl Into<String>,
        level: u8,
        original_types: Vec<Type>,
        base_stats: [u16; 6],
        ivs: IndividualValues,
        evs: EffortValues,
        nature: Nature,
        moves: Vec<Move>,
        item: Item,
        ability: Ability,
    ) -> Self {
        let max_hp = calc_hp(base_stats[0], ivs.get(0), evs.get(0), level);
        Self {
            name: name.into(),
            level,
            original_types,
            temp_types: None,
            terastal_type: None,
            terastal_active: false,
            damage_tag: None,
            base_stats,
            ivs,
            evs,
            nature,
            stages: [0; 5],
            max_hp,
            current_hp: max_hp,
            moves,
            item,
            ability,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Effective types: terastal type alone when active, else temp types if
    /// set, else original types, §3/§4.5.
    pub fn effective_types(&self) -> Vec<Type> {
        if self.terastal_active {
            if let Some(t) = self.terastal_type {
                return vec![t];
            }
        }
        self.temp_types.clone().unwrap_or_else(|| self.original_types.clone())
    }

    /// Real (un-staged) value of a non-HP stat, §4.2.
    pub fn real_stat(&self, stat: crate::natures::Stat) -> u16 {
        let idx = stat_index(stat) + 1; // base_stats[0] is HP
        calc_stat_for(self.base_stats[idx], self.ivs.get(idx), self.evs.get(idx), self.level, self.nature, stat)
    }

    /// Effective (staged, item/ability modified) value of a non-HP stat.
    pub fn effective_stat(&self, stat: crate::natures::Stat, direct: bool) -> u16 {
        let real = self.real_stat(stat);
        let staged = effective_stat(real, self.stages[stat_index(stat)], direct);
        let after_item = self.item.modify_stat(stat, staged);
        self.ability.modify_stat(stat, after_item)
    }

    /// `final_speed`, §4.5: real Speed composed with item then ability stat
    /// modifiers, always with the stage applied (never `direct`).
    pub fn final_speed(&self) -> u16 {
        self.effective_stat(crate::natures::Stat::Spe, false)
    }

    /// Saturating HP subtraction, §4.5.
    pub fn take_damage(&self, amount: u16) -> Self {
        let mut next = self.clone();
        next.current_hp = self.current_hp.saturating_sub(amount);
        next
    }

    /// HP heal clamped to max, §4.5.
    pub fn heal(&self, amount: u16) -> Self {
        let mut next = self.clone();
        next.current_hp = (self.current_hp.saturating_add(amount)).min(self.max_hp);
        next
    }

    /// Apply a stage event; HP-stage events are no-ops, §4.5.
    pub fn apply_status_event(&self, event: StatusEvent) -> Self {
        let mut next = self.clone();
        let (tag, delta) = match event {
            StatusEvent::StageUp(tag, step) => (tag, step as i8),
            StatusEvent::StageDown(tag, step) => (tag, -(step as i8)),
        };
        if let Some(stat) = tag.as_stat() {
            let idx = stat_index(stat);
            next.stages[idx] = (next.stages[idx] as i16 + delta as i16).clamp(-6, 6) as i8;
        }
        // StatTag::Hp is a deliberate no-op, matching §4.5.
        next
    }

    /// Apply a type-change event, §4.5. Once terastal is active, further type
    /// events are ignored.
    pub fn apply_type_event(&self, event: TypeEvent) -> Self {
        if self.terastal_active {
            return self.clone();
        }
        let mut next = self.clone();
        match event {
            TypeEvent::Change(t) => next.temp_types = Some(vec![t]),
            TypeEvent::Add(t) => {
                let mut types = next.temp_types.clone().unwrap_or_else(|| self.original_types.clone());
                if !types.contains(&t) {
                    types.push(t);
                }
                next.temp_types = Some(types);
            }
            TypeEvent::Remove(t) => {
                let mut types = next.temp_types.clone().unwrap_or_else(|| self.original_types.clone());
                types.retain(|&x| x != t);
                if types.is_empty() {
                    types.push(Type::None);
                }
                next.temp_types = Some(types);
            }
        }
        next
    }

    /// Activate terastallization; guarded, idempotent, §4.5/§8 property 8.
    pub fn activate_terastal(&self) -> Self {
        let mut next = self.clone();
        if self.terastal_type.is_some() {
            next.terastal_active = true;
        }
        next
    }

    /// Deactivate terastallization; identity when already inactive, §8 property 8.
    pub fn deactivate_terastal(&self) -> Self {
        let mut next = self.clone();
        next.terastal_active = false;
        next
    }

    /// Return to bench: clear temp types and all stages; terastal state
    /// persists, §3/§4.5. Idempotent, §8 property 9.
    pub fn on_return(&self) -> Self {
        let mut next = self.clone();
        next.temp_types = None;
        next.stages = [0; 5];
        next
    }

    /// STAB multiplier, §4.4. If the attacker's effective types contain
    /// Stellar, compatibility is computed against the original types rather
    /// than the temporary ones, §4.1/§9.
    pub fn stab(&self, move_type: Type) -> f32 {
        if move_type == Type::Normal {
            return 1.0;
        }
        let effective = self.effective_types();
        if effective.contains(&Type::Stellar) {
            return if self.original_types.contains(&move_type) { 1.5 } else { 1.0 };
        }
        let original_has = self.original_types.contains(&move_type);
        match (self.terastal_active, self.terastal_type) {
            (true, Some(tera)) if move_type == tera && original_has => 2.0,
            (true, Some(tera)) if move_type == tera => 1.5,
            _ if effective.contains(&move_type) => 1.5,
            _ => 1.0,
        }
    }

    /// Combined type effectiveness of `move_type` against this creature as a
    /// defender, §4.1. If the attacker's effective types contain Stellar,
    /// callers should compare against the attacker's original types instead —
    /// that branch lives in `crate::damage`, since it depends on the attacker,
    /// not the defender.
    pub fn effectiveness_of(&self, move_type: Type) -> f32 {
        combined_effectiveness(move_type, &self.effective_types(), self.damage_tag)
    }

    /// Map a `SelectMove`/`SwitchTo` user event to an `ActionEvent`, §4.5.
    /// `GiveUp` is handled earlier in the turn state machine (§4.10) and is
    /// therefore unsupported here.
    pub fn action_of(
        &self,
        event: crate::events::UserEvent,
    ) -> Result<Result<ActionEvent, LocalInputError>, crate::error::EngineError> {
        use crate::events::UserEvent::*;
        match event {
            SelectMove(i) => {
                let Some(mv) = self.moves.get(i) else {
                    return Ok(Err(LocalInputError::InvalidMoveIndex));
                };
                if mv.category == MoveCategory::Status {
                    return Ok(Ok(ActionEvent::MoveStatus { move_used: mv.clone() }));
                }
                let attacker_power = match mv.category {
                    MoveCategory::Physical => self.effective_stat(crate::natures::Stat::Atk, false),
                    _ => self.effective_stat(crate::natures::Stat::SpA, false),
                } as u32;
                let level_factor = (self.level as f32 * 0.4 + 2.0).floor() as u32;
                let raw = round_half_down(
                    level_factor as f64 * mv.power as f64 * attacker_power as f64 * self.stab(mv.move_type) as f64,
                );
                let ctx = DamageHookContext { move_type: mv.move_type, category: mv.category };
                let after_item = self.item.modify_outgoing_damage(ctx, raw);
                let attack_index = self.ability.modify_outgoing_damage(ctx, after_item);
                Ok(Ok(ActionEvent::MoveDamage { move_used: mv.clone(), attack_index }))
            }
            SwitchTo(i) => Ok(Ok(ActionEvent::Switch(i))),
            GiveUp => Err(crate::error::EngineError::UnsupportedEvent),
        }
    }
}
