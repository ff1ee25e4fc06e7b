//! Rounding and modifier-chaining utilities shared by the damage pipeline.
//!
//! Grounded on `poke_engine::damage::formula`'s fixed-point modifier chain
//! (`apply_modifier`, `chain_mods`) and its documented "pokeRound" half-down
//! legacy rounding rule, reworked from `u16`/4096-scale fixed point into plain
//! `f64` since this port's damage pipeline multiplies ordinary floating
//! multipliers (STAB, effectiveness, random roll) rather than chaining
//! discrete 4096-scale item/ability modifiers.

/// Round half down: an exact `.5` fraction rounds toward zero instead of away
/// from it. Per SPEC_FULL §9 (open question 2), this is preserved exactly as
/// the source intended, even though most other engines round half up.
pub fn round_half_down(value: f64) -> u32 {
    let floor = value.floor();
    let frac = value - floor;
    if frac > 0.5 {
        (floor as u32) + 1
    } else {
        floor as u32
    }
}
