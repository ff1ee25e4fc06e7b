//! Turn state machine (C10, §4.10): decision → ordering → first action →
//! second action → end-of-turn, one turn at a time until a side is defeated.
//!
//! Grounded on SPEC_FULL §4.10's explicit state diagram; the async-fn-per-
//! transition style mirrors how `mingu600-tapu-simu::battle.rs` and
//! `milan090-pokemonlegends-backend`'s combat manager drive a per-turn loop
//! awaiting player input, since `poke_engine` itself assumed a synchronous
//! AI rollout and has no suspension points to adapt from.

use crate::damage::{apply_damage, calculate_damage};
use crate::events::{ActionEvent, DamageResult, UserEvent};
use crate::field::Field;
use crate::logger::Logger;
use crate::party::Party;
use crate::priority::{order_actions, PriorityAction, PriorityContext, SpecialEffect};
use crate::random::RandomSource;

/// Named states of the turn state machine, §4.10. Kept as an explicit enum
/// (rather than folding everything into one opaque driver function) so
/// embedders and tests can observe which phase produced a given log line or
/// outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnState {
    TurnStart,
    TurnStep1,
    FirstMove,
    SecondMove,
    SecondMoveSkip,
    TurnEnd,
}

/// Which side acted first/second this turn, and whether the battle is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl Side {
    fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Outcome of running one full turn, §4.10 "TurnEnd ... carries a boolean
/// `finish` signalling whether to loop."
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub finish: bool,
    pub winner: Option<Side>,
}

pub struct Battle<R: RandomSource> {
    pub side_a: Party,
    pub side_b: Party,
    pub field: Field,
    pub generation: u8,
    pub random: R,
}

impl<R: RandomSource> Battle<R> {
    pub fn new(side_a: Party, side_b: Party, field: Field, generation: u8, random: R) -> Self {
        Self { side_a, side_b, field, generation, random }
    }

    fn party(&mut self, side: Side) -> &mut Party {
        match side {
            Side::A => &mut self.side_a,
            Side::B => &mut self.side_b,
        }
    }

    fn party_ref(&self, side: Side) -> &Party {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
        }
    }

    /// Run a single turn to completion, §4.10's full state path. Returns the
    /// outcome the caller uses to decide whether to loop.
    pub async fn run_turn(&mut self, logger: &dyn Logger) -> TurnOutcome {
        // TurnStart: await one user event per party; GiveUp short-circuits.
        let event_a = self.side_a.get_action().await;
        let event_b = self.side_b.get_action().await;

        if matches!(event_a, UserEvent::GiveUp) {
            logger.log(&format!("{} gives up.", self.side_a.owner));
            return TurnOutcome { finish: true, winner: Some(Side::B) };
        }
        if matches!(event_b, UserEvent::GiveUp) {
            logger.log(&format!("{} gives up.", self.side_b.owner));
            return TurnOutcome { finish: true, winner: Some(Side::A) };
        }

        // TurnStep1: on_turn_start hooks, resolve user events into action
        // events, resolve switches immediately, then order the two moves.
        self.side_a.on_turn_start();
        self.side_b.on_turn_start();

        let action_a = self.resolve_event(Side::A, event_a, logger);
        let action_b = self.resolve_event(Side::B, event_b, logger);

        let (first, second) = self.order_turn(action_a, action_b);

        // FirstMove
        let first_result = self.execute_attack(first, logger).await;
        if first_result.finish {
            return TurnOutcome { finish: true, winner: first_result.winner };
        }

        // SecondMove / SecondMoveSkip: skipped here only by construction —
        // `execute_attack` already returned early above when the battle
        // finished, so reaching this point always means a real SecondMove.
        let second_result = self.execute_attack(second, logger).await;

        // TurnEnd: end-of-turn hooks on both parties (registration order)
        // then the field, §4.10/§5 "no interleaving".
        self.side_a.on_turn_end();
        self.side_b.on_turn_end();
        self.field.on_turn_end();

        TurnOutcome { finish: second_result.finish, winner: second_result.winner }
    }

    /// Convert a `UserEvent` into an `ActionEvent`, resolving switches
    /// immediately (§4.10 TurnStep1) and logging any local input error as a
    /// no-op rather than propagating it, §4.11.
    fn resolve_event(&mut self, side: Side, event: UserEvent, logger: &dyn Logger) -> Option<ActionEvent> {
        let resolved = self.party_ref(side).action_of(event);
        match resolved {
            Ok(Ok(action @ ActionEvent::Switch(target))) => {
                if let Err(reason) = self.party(side).handle_switch(target) {
                    self.party_ref(side).log_invalid_switch(logger, target, reason);
                    return None;
                }
                Some(action)
            }
            Ok(Ok(action)) => Some(action),
            Ok(Err(_local_error)) => {
                logger.log(&format!("{}: invalid action, turn is a no-op.", self.party_ref(side).owner));
                None
            }
            Err(e) => {
                logger.log(&format!("{}: unsupported event ({e}).", self.party_ref(side).owner));
                None
            }
        }
    }

    /// Order the two sides' actions via the priority calculator, §4.7,
    /// falling back to `final_speed()` when both are moves of equal
    /// priority (already handled inside `order_actions`'s tie-break).
    fn order_turn(
        &self,
        action_a: Option<ActionEvent>,
        action_b: Option<ActionEvent>,
    ) -> ((Side, Option<ActionEvent>), (Side, Option<ActionEvent>)) {
        let ctx = PriorityContext::new(self.generation);
        let candidate = |side: Side, action: &Option<ActionEvent>| -> PriorityAction<Side> {
            match action {
                Some(a) => PriorityAction {
                    action: a.clone(),
                    move_name: None,
                    final_speed: self.party_ref(side).active_creature().final_speed(),
                    special_effects: Vec::<SpecialEffect>::new(),
                    pre_mega_final_speed: None,
                    payload: side,
                },
                None => PriorityAction {
                    // A no-op action sorts as a status move at base priority
                    // zero; it still participates in speed tie-breaking.
                    action: ActionEvent::MoveStatus {
                        move_used: crate::value::Move::new(
                            "(no-op)",
                            crate::types::Type::None,
                            crate::value::MoveCategory::Status,
                            0,
                            100,
                            0,
                        ),
                    },
                    move_name: None,
                    final_speed: self.party_ref(side).active_creature().final_speed(),
                    special_effects: Vec::<SpecialEffect>::new(),
                    pre_mega_final_speed: None,
                    payload: side,
                },
            }
        };
        let candidates = vec![candidate(Side::A, &action_a), candidate(Side::B, &action_b)];
        let ordered = order_actions(&candidates, &ctx);
        let action_by_side = |side: Side| if side == Side::A { action_a.clone() } else { action_b.clone() };
        let first_side = ordered[0].payload;
        let second_side = ordered[1].payload;
        ((first_side, action_by_side(first_side)), (second_side, action_by_side(second_side)))
    }

    /// Execute one side's already-resolved action, §4.10 `executeAttack`.
    async fn execute_attack(&mut self, (side, action): (Side, Option<ActionEvent>), logger: &dyn Logger) -> TurnOutcome {
        let Some(ActionEvent::MoveDamage { move_used, .. }) = action else {
            return TurnOutcome { finish: false, winner: None };
        };

        let defender_side = side.other();
        let random_roll = self.random.roll_85_100();
        let attacker = self.party_ref(side).active_creature().clone();
        let defender = self.party_ref(defender_side).active_creature().clone();

        let outcome = calculate_damage(&attacker, &defender, &move_used, self.generation, false, random_roll);
        let (next_defender, result) = apply_damage(&defender, outcome);
        self.party(defender_side).set_active_creature(next_defender);

        if let DamageResult::Alive { after_events, .. } | DamageResult::Dead { after_events, .. } = &result {
            self.party(side).apply_action(after_events);
        }

        logger.log(&format!(
            "{} used {}! {} damage dealt.",
            self.party_ref(side).owner,
            move_used.name,
            result.dealt()
        ));

        if result.is_dead() {
            logger.log_blank_then(&format!("{} fainted!", self.party_ref(defender_side).active_creature().name));
            if !self.party(defender_side).switch_to_next_alive() {
                return TurnOutcome { finish: true, winner: Some(side) };
            }
            logger.log(&format!(
                "{} sends out {}!",
                self.party_ref(defender_side).owner,
                self.party_ref(defender_side).active_creature().name
            ));
        }

        TurnOutcome { finish: false, winner: None }
    }

    /// Run turns until one side is defeated, §4.10's outer loop ("either
    /// loop or terminate").
    pub async fn run_to_completion(&mut self, logger: &dyn Logger) -> Side {
        loop {
            let outcome = self.run_turn(logger).await;
            if outcome.finish {
                return outcome.winner.unwrap_or_else(|| {
                    if self.side_a.is_team_defeated() { Side::B } else { Side::A }
                });
            }
            if self.side_a.is_team_defeated() {
                return Side::B;
            }
            if self.side_b.is_team_defeated() {
                return Side::A;
            }
        }
    }
}
