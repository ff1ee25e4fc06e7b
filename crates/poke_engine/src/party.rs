//! Party state (C9, §3/§4.9): an ordered roster of creatures, an active
//! index, and the owner's async input provider.
//!
//! Grounded on `poke_engine::state`'s active-slot bookkeeping conventions,
//! reworked from the teacher's SoA index arrays into an owned `Vec<Creature>`
//! plus a plain `active: usize`, since this port's `Creature` is a full
//! immutable value rather than a row in shared battle state.

use std::future::Future;
use std::pin::Pin;

use crate::creature::Creature;
use crate::effect::Effect;
use crate::events::{ActionEvent, Event, StatusEvent, TypeEvent, UserEvent};
use crate::logger::Logger;

/// Reason a switch request was rejected, §4.9/§4.11. Callers log and no-op;
/// this never escapes as an `EngineError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchRejection {
    OutOfBounds,
    TargetIsFainted,
    TargetIsCurrentActive,
}

pub type InputFuture = Pin<Box<dyn Future<Output = UserEvent> + Send>>;
pub type InputProvider = Box<dyn FnMut() -> InputFuture + Send>;

/// An ordered, non-empty roster plus the active slot, §3/§4.9. The input
/// provider is a thunk bound at construction (§6, §9: "inject the providers
/// through party construction" rather than reaching into module-level state).
pub struct Party {
    pub owner: String,
    pub creatures: Vec<Creature>,
    pub active: usize,
    input_provider: InputProvider,
}

impl std::fmt::Debug for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Party")
            .field("owner", &self.owner)
            .field("creatures", &self.creatures)
            .field("active", &self.active)
            .finish()
    }
}

impl Party {
    pub fn new(owner: impl Into<String>, creatures: Vec<Creature>, input_provider: InputProvider) -> Self {
        assert!(!creatures.is_empty(), "a party must have at least one creature");
        Self { owner: owner.into(), creatures, active: 0, input_provider }
    }

    pub fn active_creature(&self) -> &Creature {
        &self.creatures[self.active]
    }

    fn replace_active(&mut self, next: Creature) {
        self.creatures[self.active] = next;
    }

    /// Await the bound input provider for this party's next `UserEvent`, §4.9/§5.
    pub async fn get_action(&mut self) -> UserEvent {
        (self.input_provider)().await
    }

    /// Delegate a `UserEvent` to the active creature, §4.9.
    pub fn action_of(
        &self,
        event: UserEvent,
    ) -> Result<Result<ActionEvent, crate::creature::LocalInputError>, crate::error::EngineError> {
        self.active_creature().action_of(event)
    }

    /// Apply a batch of post-action events to the active creature, §4.9/§4.10
    /// step 4.
    pub fn apply_action(&mut self, events: &[Event]) {
        for event in events {
            let next = match *event {
                Event::Status(e) => self.active_creature().apply_status_event(e),
                Event::Type(e) => self.active_creature().apply_type_event(e),
                Event::Field(_) => continue, // field events are handled by the battle's Field, not a party.
            };
            self.replace_active(next);
        }
    }

    /// Validate and perform a switch, §4.9: within bounds, not the fainted
    /// slot, target alive. Invalid switches are rejected for the caller to
    /// log; they do not panic or mutate state.
    pub fn handle_switch(&mut self, new_active: usize) -> Result<(), SwitchRejection> {
        if new_active >= self.creatures.len() {
            return Err(SwitchRejection::OutOfBounds);
        }
        if new_active == self.active {
            return Err(SwitchRejection::TargetIsCurrentActive);
        }
        if !self.creatures[new_active].is_alive() {
            return Err(SwitchRejection::TargetIsFainted);
        }
        let returning = self.creatures[self.active].on_return();
        self.creatures[self.active] = returning;
        self.active = new_active;
        Ok(())
    }

    /// Scan forward from `active + 1` for a living creature with no
    /// wraparound, §4.9. Returns whether a replacement was found.
    pub fn switch_to_next_alive(&mut self) -> bool {
        for i in (self.active + 1)..self.creatures.len() {
            if self.creatures[i].is_alive() {
                self.active = i;
                return true;
            }
        }
        false
    }

    /// A party is defeated iff no creature in it is alive, §3/§8 property 3.
    pub fn is_team_defeated(&self) -> bool {
        self.creatures.iter().all(|c| !c.is_alive())
    }

    pub fn on_turn_start(&self) {
        self.active_creature().item.on_turn_start();
        self.active_creature().ability.on_turn_start();
    }

    pub fn on_turn_end(&self) {
        self.active_creature().item.on_turn_end();
        self.active_creature().ability.on_turn_end();
    }

    /// Apply a move-targeted stage/type event directly, bypassing
    /// `apply_action`'s events-vec shape; used by the turn state machine when
    /// the acting side's own move has a self-targeted effect (§4.10).
    pub fn apply_status_to_active(&mut self, event: StatusEvent) {
        let next = self.active_creature().apply_status_event(event);
        self.replace_active(next);
    }

    pub fn apply_type_to_active(&mut self, event: TypeEvent) {
        let next = self.active_creature().apply_type_event(event);
        self.replace_active(next);
    }

    /// Write a newly damaged/healed creature back as the active slot's new
    /// state, §4.10 step 3.
    pub fn set_active_creature(&mut self, next: Creature) {
        self.replace_active(next);
    }

    pub fn log_invalid_switch(&self, logger: &dyn Logger, target: usize, reason: SwitchRejection) {
        logger.log(&format!(
            "{}: switch to slot {} rejected ({:?})",
            self.owner, target, reason
        ));
    }
}
