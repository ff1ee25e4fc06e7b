//! A deterministic, turn-based combat engine for Pokémon-style battles.
//!
//! The core is the turn execution engine: stat resolution, type
//! effectiveness, STAB, held-item/ability modifiers, damage, and the
//! priority/turn-order calculator with its generation-dependent special-
//! timing rules. Template loading (where creature data comes from) and
//! logging (where observations go) are injected collaborators, not baked
//! into the engine.

pub mod abilities;
pub mod config;
pub mod creature;
pub mod damage;
pub mod effect;
pub mod error;
pub mod events;
pub mod field;
pub mod items;
pub mod logger;
pub mod natures;
pub mod party;
pub mod priority;
pub mod random;
pub mod stats;
pub mod template;
pub mod turn;
pub mod types;
pub mod value;

pub use creature::Creature;
pub use error::EngineError;
pub use field::{Field, Weather};
pub use party::Party;
pub use template::{Template, TemplateProvider};
pub use turn::{Battle, Side, TurnOutcome, TurnState};
