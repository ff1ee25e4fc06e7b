//! Type enum and the 18-type effectiveness chart.
//!
//! Unlike the teacher crate's `poke_engine_codegen`, which generates this
//! module at build time from a Showdown `typechart.json`, types here are a
//! plain hand-authored table: the whole point of this port is that creature
//! data (species, moves, items) arrives at runtime through a `TemplateProvider`
//! (see `crate::template`), so there is nothing left to codegen from.

use serde::{Deserialize, Serialize};

/// One of the eighteen standard attacking/defending types, plus Stellar and a
/// `None` sentinel for "no type" (used for status moves and vacated type
/// slots).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
    Stellar,
    None,
}

impl Type {
    /// Parse a type name from an external source (template data arriving as
    /// loose strings rather than typed JSON tags). `"???"` is a reserved
    /// placeholder some generations of source data use for "not yet assigned
    /// a type" rather than a genuine none-type, and is rejected distinctly
    /// rather than silently folded into `Type::None`, per §7's
    /// `UnsupportedTypeChart` ("a reserved type such as '???' queried").
    pub fn from_str(s: &str) -> Result<Type, crate::error::EngineError> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "normal" => Type::Normal,
            "fire" => Type::Fire,
            "water" => Type::Water,
            "electric" => Type::Electric,
            "grass" => Type::Grass,
            "ice" => Type::Ice,
            "fighting" => Type::Fighting,
            "poison" => Type::Poison,
            "ground" => Type::Ground,
            "flying" => Type::Flying,
            "psychic" => Type::Psychic,
            "bug" => Type::Bug,
            "rock" => Type::Rock,
            "ghost" => Type::Ghost,
            "dragon" => Type::Dragon,
            "dark" => Type::Dark,
            "steel" => Type::Steel,
            "fairy" => Type::Fairy,
            "stellar" => Type::Stellar,
            "none" => Type::None,
            other => return Err(crate::error::EngineError::UnsupportedTypeChart(other.to_string())),
        })
    }
}

/// Single attack-type-vs-defense-type lookup, §4.1.
///
/// Reserved/unknown types (`Stellar`, `None`) are not rows in the chart and
/// always return neutral (1.0) against anything, matching the spec's "unknown
/// or reserved types return 1.0."
pub fn type_effectiveness(attack: Type, defend: Type) -> f32 {
    use Type::*;
    if matches!(attack, Stellar | None) || matches!(defend, Stellar | None) {
        return 1.0;
    }
    match (attack, defend) {
        (Normal, Rock) | (Normal, Steel) => 0.5,
        (Normal, Ghost) => 0.0,

        (Fire, Fire) | (Fire, Water) | (Fire, Rock) | (Fire, Dragon) => 0.5,
        (Fire, Grass) | (Fire, Ice) | (Fire, Bug) | (Fire, Steel) => 2.0,

        (Water, Water) | (Water, Grass) | (Water, Dragon) => 0.5,
        (Water, Fire) | (Water, Ground) | (Water, Rock) => 2.0,

        (Electric, Electric) | (Electric, Grass) | (Electric, Dragon) => 0.5,
        (Electric, Ground) => 0.0,
        (Electric, Water) | (Electric, Flying) => 2.0,

        (Grass, Fire) | (Grass, Grass) | (Grass, Poison) | (Grass, Flying)
        | (Grass, Bug) | (Grass, Dragon) | (Grass, Steel) => 0.5,
        (Grass, Water) | (Grass, Ground) | (Grass, Rock) => 2.0,

        (Ice, Fire) | (Ice, Water) | (Ice, Ice) | (Ice, Steel) => 0.5,
        (Ice, Grass) | (Ice, Ground) | (Ice, Flying) | (Ice, Dragon) => 2.0,

        (Fighting, Poison) | (Fighting, Flying) | (Fighting, Psychic)
        | (Fighting, Bug) | (Fighting, Fairy) => 0.5,
        (Fighting, Ghost) => 0.0,
        (Fighting, Normal) | (Fighting, Ice) | (Fighting, Rock)
        | (Fighting, Dark) | (Fighting, Steel) => 2.0,

        (Poison, Poison) | (Poison, Ground) | (Poison, Rock) | (Poison, Ghost) => 0.5,
        (Poison, Steel) => 0.0,
        (Poison, Grass) | (Poison, Fairy) => 2.0,

        (Ground, Grass) | (Ground, Bug) => 0.5,
        (Ground, Flying) => 0.0,
        (Ground, Fire) | (Ground, Electric) | (Ground, Poison)
        | (Ground, Rock) | (Ground, Steel) => 2.0,

        (Flying, Electric) | (Flying, Rock) | (Flying, Steel) => 0.5,
        (Flying, Grass) | (Flying, Fighting) | (Flying, Bug) => 2.0,

        (Psychic, Psychic) | (Psychic, Steel) => 0.5,
        (Psychic, Dark) => 0.0,
        (Psychic, Fighting) | (Psychic, Poison) => 2.0,

        (Bug, Fire) | (Bug, Fighting) | (Bug, Poison) | (Bug, Flying)
        | (Bug, Ghost) | (Bug, Steel) | (Bug, Fairy) => 0.5,
        (Bug, Grass) | (Bug, Psychic) | (Bug, Dark) => 2.0,

        (Rock, Fighting) | (Rock, Ground) | (Rock, Steel) => 0.5,
        (Rock, Fire) | (Rock, Ice) | (Rock, Flying) | (Rock, Bug) => 2.0,

        (Ghost, Dark) => 0.5,
        (Ghost, Normal) => 0.0,
        (Ghost, Psychic) | (Ghost, Ghost) => 2.0,

        (Dragon, Steel) => 0.5,
        (Dragon, Fairy) => 0.0,
        (Dragon, Dragon) => 2.0,

        (Dark, Fighting) | (Dark, Dark) | (Dark, Fairy) => 0.5,
        (Dark, Psychic) | (Dark, Ghost) => 2.0,

        (Steel, Fire) | (Steel, Water) | (Steel, Electric) | (Steel, Steel) => 0.5,
        (Steel, Ice) | (Steel, Rock) | (Steel, Fairy) => 2.0,

        (Fairy, Fire) | (Fairy, Poison) | (Fairy, Steel) => 0.5,
        (Fairy, Fighting) | (Fairy, Dragon) | (Fairy, Dark) => 2.0,

        _ => 1.0,
    }
}

/// Combined effectiveness of `attack` against every type a defender currently
/// has, per §4.1: the product of per-type multipliers, doubled again if
/// `tar_shot` is set and matches `attack`.
pub fn combined_effectiveness(attack: Type, defend_types: &[Type], tar_shot: Option<Type>) -> f32 {
    let mut total = 1.0;
    for &t in defend_types {
        total *= type_effectiveness(attack, t);
    }
    if tar_shot == Some(attack) {
        total *= 2.0;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_vs_fire_ground_is_quadruple() {
        // S5
        let m = combined_effectiveness(Type::Water, &[Type::Fire, Type::Ground], None);
        assert_eq!(m, 4.0);
    }

    #[test]
    fn ground_vs_flying_is_immune() {
        assert_eq!(type_effectiveness(Type::Ground, Type::Flying), 0.0);
    }

    #[test]
    fn effectiveness_is_symmetric_in_defender_type_order() {
        let a = combined_effectiveness(Type::Ice, &[Type::Grass, Type::Flying], None);
        let b = combined_effectiveness(Type::Ice, &[Type::Flying, Type::Grass], None);
        assert_eq!(a, b);
        assert_eq!(a, 4.0);
    }

    #[test]
    fn unlisted_ice_row_defaults_neutral() {
        // Open question: the teacher's source had two divergent Ice rows, one
        // defaulting to 1.0 for unlisted defenders and one to 0.0. We keep 1.0.
        assert_eq!(type_effectiveness(Type::Ice, Type::Normal), 1.0);
    }

    #[test]
    fn tar_shot_doubles_matching_attack() {
        let base = combined_effectiveness(Type::Ground, &[Type::Steel], None);
        let boosted = combined_effectiveness(Type::Ground, &[Type::Steel], Some(Type::Ground));
        assert_eq!(boosted, base * 2.0);
    }

    #[test]
    fn reserved_types_are_always_neutral() {
        assert_eq!(type_effectiveness(Type::Stellar, Type::Dragon), 1.0);
        assert_eq!(type_effectiveness(Type::Fire, Type::None), 1.0);
    }

    #[test]
    fn from_str_parses_known_type_names_case_insensitively() {
        assert_eq!(Type::from_str("FIRE"), Ok(Type::Fire));
        assert_eq!(Type::from_str("none"), Ok(Type::None));
    }

    #[test]
    fn from_str_rejects_the_reserved_unknown_type_placeholder() {
        // §7: "???" is a reserved placeholder, not a genuine none-type, and
        // is surfaced as `UnsupportedTypeChart` rather than silently mapped.
        assert_eq!(
            Type::from_str("???"),
            Err(crate::error::EngineError::UnsupportedTypeChart("???".to_string()))
        );
    }
}
