//! Priority calculator and special-priority rules (C7/C8, §4.7/§4.8).
//!
//! Grounded on `poke_engine::damage::generations`' base-trait-plus-per-gen-
//! override shape (`Gen9` as the default, older generations overriding
//! individual hooks) applied here to turn-order instead of damage mechanics,
//! and on SPEC_FULL §4.8's explicit special-effect replacement table.

use crate::events::ActionEvent;
use std::collections::HashMap;

/// +∞ / -∞ / "+∞ - 1" stand-ins, §4.8. `i32` gives enough headroom that no
/// real move priority (-7..+5) or switch priority (+6) can collide with them.
pub const PRIORITY_ALWAYS_FIRST: i32 = i32::MAX;
pub const PRIORITY_ALWAYS_LAST: i32 = i32::MIN;
pub const PRIORITY_ROUND: i32 = i32::MAX - 1;

/// Switches always act before any move regardless of the move's own
/// priority, §4.7.
pub const SWITCH_PRIORITY: i32 = 6;

/// Fixed priority shared by Focus Punch, Beak Blast and Trap Shell, §4.8.
pub const FIXED_MINUS_THREE_MOVES: &[&str] = &["Focus Punch", "Beak Blast", "Trap Shell"];

/// A special-priority override applied in order on top of the base
/// priority, §4.8. `Encore`, `Instruct` and the generation-sensitive
/// predicates in §4.8 are all represented here rather than hardcoded into
/// `effective_priority`, so new effects can be added without touching the
/// ordering algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecialEffect {
    /// "Osakini Douzo": always first.
    GoFirst,
    /// "Saki Okuri": always last.
    GoLast,
    /// Replace with the priority of the originally selected move, not
    /// whatever move was forced out instead.
    Encore(i32),
    /// Focus Punch / Beak Blast / Trap Shell's fixed priority.
    TrapShell,
    /// Round: acts as if priority were "just above always-first".
    Round,
    /// No-op: preserves whatever priority was already computed. Modeled
    /// explicitly (rather than simply omitting the effect) so a caller can
    /// record "Instruct was considered" without changing the outcome.
    Instruct,
    /// Gen 2 wild flee: uses the selected move's priority when one was
    /// chosen, otherwise the fixed flee priority of -7, §4.8.
    Flee(Option<i32>),
}

impl SpecialEffect {
    fn apply(self, base: i32) -> i32 {
        match self {
            SpecialEffect::GoFirst => PRIORITY_ALWAYS_FIRST,
            SpecialEffect::GoLast => PRIORITY_ALWAYS_LAST,
            SpecialEffect::Encore(original) => original,
            SpecialEffect::TrapShell => -3,
            SpecialEffect::Round => PRIORITY_ROUND,
            SpecialEffect::Instruct => base,
            SpecialEffect::Flee(selected) => selected.unwrap_or(-7),
        }
    }
}

/// One side's candidate action for the turn, paired with enough context to
/// compute its effective priority without reaching back into `Party`/`Creature`.
#[derive(Clone, Debug)]
pub struct PriorityAction<T: Clone> {
    pub action: ActionEvent,
    pub move_name: Option<String>,
    pub final_speed: u16,
    pub special_effects: Vec<SpecialEffect>,
    /// Speed as it was before this turn's mega evolution took effect, if the
    /// actor is mega-evolving this turn. Only consulted on gen 6 (§4.8: "gen 6
    /// uses pre-mega priority, gen >=7 uses post-mega"); no move in the
    /// default catalog triggers mega evolution, so this stays `None` in
    /// practice but the seam is kept per SPEC_FULL §9.
    pub pre_mega_final_speed: Option<u16>,
    /// Opaque payload the caller threads through sort (e.g. a party index).
    pub payload: T,
}

impl<T: Clone> PriorityAction<T> {
    /// The speed used for tie-breaking, §4.7/§4.8: gen 6 compares with the
    /// actor's pre-mega-evolution speed when it mega-evolved this turn; gen
    /// >=7 (and any action that isn't mega-evolving) just uses `final_speed`.
    fn tiebreak_speed(&self, generation: u8) -> u16 {
        if generation == 6 {
            if let Some(pre) = self.pre_mega_final_speed {
                return pre;
            }
        }
        self.final_speed
    }
}

/// Shared context for a turn's priority resolution, §4.7.
pub struct PriorityContext {
    pub generation: u8,
    pub turn_start_priorities: HashMap<String, i32>,
    pub current_priorities: HashMap<String, i32>,
}

impl PriorityContext {
    pub fn new(generation: u8) -> Self {
        Self {
            generation,
            turn_start_priorities: HashMap::new(),
            current_priorities: HashMap::new(),
        }
    }

    fn base_move_priority(&self, name: &str, move_priority: i8) -> i32 {
        if FIXED_MINUS_THREE_MOVES.contains(&name) {
            return -3;
        }
        if self.generation <= 7 {
            if let Some(&p) = self.turn_start_priorities.get(name) {
                return p;
            }
        } else if let Some(&p) = self.current_priorities.get(name) {
            return p;
        }
        move_priority as i32
    }
}

/// Compute an action's effective priority, §4.7 step 1.
pub fn effective_priority<T: Clone>(action: &PriorityAction<T>, ctx: &PriorityContext) -> i32 {
    let base = match &action.action {
        ActionEvent::Switch(_) => SWITCH_PRIORITY,
        ActionEvent::MoveDamage { move_used, .. } => {
            ctx.base_move_priority(&move_used.name, move_used.priority)
        }
        ActionEvent::MoveStatus { move_used } => {
            ctx.base_move_priority(&move_used.name, move_used.priority)
        }
    };
    action
        .special_effects
        .iter()
        .fold(base, |acc, effect| effect.apply(acc))
}

/// Order a turn's actions, §4.7 step 2: descending effective priority, ties
/// broken by higher `final_speed`, remaining ties kept in input (stable)
/// order — §8 property 7 requires this to be deterministic across repeated
/// calls with identical inputs, which a stable sort guarantees.
pub fn order_actions<T: Clone>(
    actions: &[PriorityAction<T>],
    ctx: &PriorityContext,
) -> Vec<PriorityAction<T>> {
    let mut indexed: Vec<(usize, i32, &PriorityAction<T>)> = actions
        .iter()
        .enumerate()
        .map(|(i, a)| (i, effective_priority(a, ctx), a))
        .collect();
    indexed.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| b.2.tiebreak_speed(ctx.generation).cmp(&a.2.tiebreak_speed(ctx.generation)))
            .then_with(|| a.0.cmp(&b.0))
    });
    indexed.into_iter().map(|(_, _, a)| a.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Move, MoveCategory};

    fn move_action(name: &str, priority: i8, speed: u16, idx: usize) -> PriorityAction<usize> {
        PriorityAction {
            action: ActionEvent::MoveDamage {
                move_used: Move::new(name, crate::types::Type::Normal, MoveCategory::Physical, 40, 100, priority),
                attack_index: 0,
            },
            move_name: Some(name.to_string()),
            final_speed: speed,
            special_effects: vec![],
            pre_mega_final_speed: None,
            payload: idx,
        }
    }

    fn switch_action(speed: u16, idx: usize) -> PriorityAction<usize> {
        PriorityAction {
            action: ActionEvent::Switch(1),
            move_name: None,
            final_speed: speed,
            special_effects: vec![],
            pre_mega_final_speed: None,
            payload: idx,
        }
    }

    #[test]
    fn s1_basic_priority_beats_speed() {
        // Slow (Speed 50) uses priority +1; fast (Speed 100) uses priority 0.
        let slow = move_action("Quick Attack", 1, 50, 0);
        let fast = move_action("Tackle", 0, 100, 1);
        let ctx = PriorityContext::new(9);
        let ordered = order_actions(&[fast, slow], &ctx);
        assert_eq!(ordered[0].payload, 0); // slow (higher priority) first
        assert_eq!(ordered[1].payload, 1);
    }

    #[test]
    fn s2_speed_tie_break_on_equal_priority() {
        let slow = move_action("Tackle", 0, 50, 0);
        let fast = move_action("Tackle", 0, 100, 1);
        let ctx = PriorityContext::new(9);
        let ordered = order_actions(&[slow, fast], &ctx);
        assert_eq!(ordered[0].payload, 1);
    }

    #[test]
    fn s3_switch_outranks_positive_priority_move() {
        let fast_move = move_action("Quick Attack", 1, 100, 0);
        let slow_switch = switch_action(50, 1);
        let ctx = PriorityContext::new(9);
        let ordered = order_actions(&[fast_move, slow_switch], &ctx);
        assert_eq!(ordered[0].payload, 1);
    }

    #[test]
    fn s4_go_first_override_beats_higher_base_priority() {
        let mut slow = move_action("Counter", -6, 50, 0);
        slow.special_effects.push(SpecialEffect::GoFirst);
        let fast = move_action("Quick Attack", 1, 100, 1);
        let ctx = PriorityContext::new(9);
        let ordered = order_actions(&[fast, slow], &ctx);
        assert_eq!(ordered[0].payload, 0);
    }

    #[test]
    fn go_last_always_sorts_after_everything_else() {
        let mut cursed = move_action("Roar", 0, 200, 0);
        cursed.special_effects.push(SpecialEffect::GoLast);
        let ordinary = move_action("Tackle", -7, 1, 1);
        let ctx = PriorityContext::new(9);
        let ordered = order_actions(&[cursed, ordinary], &ctx);
        assert_eq!(ordered[1].payload, 0);
    }

    #[test]
    fn encore_uses_originally_selected_moves_priority() {
        let mut forced = move_action("Splash", 0, 50, 0);
        forced.special_effects.push(SpecialEffect::Encore(5));
        let ctx = PriorityContext::new(9);
        assert_eq!(effective_priority(&forced, &ctx), 5);
    }

    #[test]
    fn focus_punch_is_fixed_minus_three_regardless_of_catalog_priority() {
        let mv = move_action("Focus Punch", 0, 50, 0);
        let ctx = PriorityContext::new(9);
        assert_eq!(effective_priority(&mv, &ctx), -3);
    }

    #[test]
    fn generation_selects_which_priority_override_table_applies() {
        let mut ctx = PriorityContext::new(7);
        ctx.turn_start_priorities.insert("Gale Wings".into(), 1);
        ctx.current_priorities.insert("Gale Wings".into(), 2);
        let mv = move_action("Gale Wings", 0, 50, 0);
        assert_eq!(effective_priority(&mv, &ctx), 1);

        let mut ctx8 = PriorityContext::new(8);
        ctx8.turn_start_priorities.insert("Gale Wings".into(), 1);
        ctx8.current_priorities.insert("Gale Wings".into(), 2);
        assert_eq!(effective_priority(&mv, &ctx8), 2);
    }

    #[test]
    fn gen2_wild_flee_falls_back_to_minus_seven_without_a_selected_move() {
        let mut flee = move_action("Run Away", 0, 50, 0);
        flee.special_effects.push(SpecialEffect::Flee(None));
        let ctx = PriorityContext::new(2);
        assert_eq!(effective_priority(&flee, &ctx), -7);
    }

    #[test]
    fn gen2_wild_flee_uses_the_selected_moves_priority_when_present() {
        let mut flee = move_action("Quick Attack", 1, 50, 0);
        flee.special_effects.push(SpecialEffect::Flee(Some(1)));
        let ctx = PriorityContext::new(2);
        assert_eq!(effective_priority(&flee, &ctx), 1);
    }

    #[test]
    fn mega_evolution_tiebreak_uses_pre_mega_speed_only_in_gen_6() {
        let mut mega_mon = move_action("Tackle", 0, 120, 0);
        mega_mon.pre_mega_final_speed = Some(60);
        let slower_mon = move_action("Tackle", 0, 90, 1);

        let gen6_ctx = PriorityContext::new(6);
        let gen6_order = order_actions(&[mega_mon.clone(), slower_mon.clone()], &gen6_ctx);
        assert_eq!(gen6_order[0].payload, 1, "gen 6 compares pre-mega speed (60 < 90)");

        let gen9_ctx = PriorityContext::new(9);
        let gen9_order = order_actions(&[mega_mon, slower_mon], &gen9_ctx);
        assert_eq!(gen9_order[0].payload, 0, "gen >=7 compares post-mega speed (120 > 90)");
    }

    #[test]
    fn ordering_is_deterministic_across_repeated_calls() {
        // §8 property 7: identical inputs yield identical order every time.
        let a = move_action("Tackle", 0, 100, 0);
        let b = move_action("Tackle", 0, 100, 1);
        let ctx = PriorityContext::new(9);
        let first = order_actions(&[a.clone(), b.clone()], &ctx);
        let second = order_actions(&[a, b], &ctx);
        let first_payloads: Vec<_> = first.iter().map(|a| a.payload).collect();
        let second_payloads: Vec<_> = second.iter().map(|a| a.payload).collect();
        assert_eq!(first_payloads, second_payloads);
    }
}
