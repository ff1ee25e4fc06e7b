//! Injectable randomness (§5: "the only randomness is the damage random
//! factor in [85,100] ... implementations must accept an injectable source so
//! tests can pin it to 100").

use rand::Rng;

pub trait RandomSource {
    /// A uniformly chosen integer in `[85, 100]`.
    fn roll_85_100(&mut self) -> u8;
}

/// Default source, backed by `rand`'s thread RNG.
#[derive(Default)]
pub struct DefaultRandomSource;

impl RandomSource for DefaultRandomSource {
    fn roll_85_100(&mut self) -> u8 {
        rand::thread_rng().gen_range(85..=100)
    }
}

/// Fixed source for deterministic tests.
pub struct FixedRandomSource(pub u8);

impl RandomSource for FixedRandomSource {
    fn roll_85_100(&mut self) -> u8 {
        self.0.clamp(85, 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_source_always_returns_pinned_value() {
        let mut src = FixedRandomSource(100);
        assert_eq!(src.roll_85_100(), 100);
        assert_eq!(src.roll_85_100(), 100);
    }

    #[test]
    fn fixed_source_clamps_out_of_range() {
        let mut src = FixedRandomSource(50);
        assert_eq!(src.roll_85_100(), 85);
    }
}
