//! Natures: 25 tagged values, each boosting one non-HP stat by 10% and
//! lowering another by 10%, or neutral (five of the twenty-five pairs land on
//! the same stat and cancel out).

use serde::{Deserialize, Serialize};

/// A stat that can carry a stage modifier or a nature bonus/penalty. HP is
/// deliberately excluded, matching §3 ("Stat stage ... per non-HP stat").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Atk,
    Def,
    SpA,
    SpD,
    Spe,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nature {
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

impl Nature {
    /// `(boosted, lowered)`, or `None` for a neutral nature.
    fn stat_pair(self) -> Option<(Stat, Stat)> {
        use Nature::*;
        use Stat::*;
        Some(match self {
            Lonely => (Atk, Def),
            Brave => (Atk, Spe),
            Adamant => (Atk, SpA),
            Naughty => (Atk, SpD),
            Bold => (Def, Atk),
            Relaxed => (Def, Spe),
            Impish => (Def, SpA),
            Lax => (Def, SpD),
            Timid => (Spe, Atk),
            Hasty => (Spe, Def),
            Jolly => (Spe, SpA),
            Naive => (Spe, SpD),
            Modest => (SpA, Atk),
            Mild => (SpA, Def),
            Quiet => (SpA, Spe),
            Rash => (SpA, SpD),
            Calm => (SpD, Atk),
            Gentle => (SpD, Def),
            Sassy => (SpD, Spe),
            Careful => (SpD, SpA),
            Hardy | Docile | Serious | Bashful | Quirky => return None,
        })
    }

    pub fn is_neutral(self) -> bool {
        self.stat_pair().is_none()
    }

    /// Multiplier applied to `stat`'s pre-nature value: 1.1, 0.9, or 1.0.
    pub fn modifier(self, stat: Stat) -> f32 {
        match self.stat_pair() {
            Some((up, _)) if up == stat => 1.1,
            Some((_, down)) if down == stat => 0.9,
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adamant_boosts_attack_lowers_special_attack() {
        assert_eq!(Nature::Adamant.modifier(Stat::Atk), 1.1);
        assert_eq!(Nature::Adamant.modifier(Stat::SpA), 0.9);
        assert_eq!(Nature::Adamant.modifier(Stat::Spe), 1.0);
        assert!(!Nature::Adamant.is_neutral());
    }

    #[test]
    fn hardy_is_neutral() {
        assert!(Nature::Hardy.is_neutral());
        assert_eq!(Nature::Hardy.modifier(Stat::Atk), 1.0);
    }

    #[test]
    fn all_five_neutral_variants_are_neutral() {
        for n in [
            Nature::Hardy,
            Nature::Docile,
            Nature::Serious,
            Nature::Bashful,
            Nature::Quirky,
        ] {
            assert!(n.is_neutral());
        }
    }
}
