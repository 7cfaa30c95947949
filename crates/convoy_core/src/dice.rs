//! Randomness seam. Everything random in the game goes through
//! [`RandomSource`], so a seeded RNG or a scripted stub can drive it.

use rand::Rng;

pub const MOVEMENT_ROLL_MIN: i64 = 0;
pub const MOVEMENT_ROLL_MAX: i64 = 10;

pub trait RandomSource {
    /// Uniform integer in `[min, max]`, both ends inclusive.
    /// Returns `min` when the range is empty or a single value.
    fn roll_in_range(&mut self, min: i64, max: i64) -> i64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn roll_in_range(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        self.gen_range(min..=max)
    }
}

pub fn roll_movement(dice: &mut impl RandomSource) -> i64 {
    dice.roll_in_range(MOVEMENT_ROLL_MIN, MOVEMENT_ROLL_MAX)
}

/// True with `chance_percent`% probability.
pub fn roll_percent(dice: &mut impl RandomSource, chance_percent: u32) -> bool {
    dice.roll_in_range(1, 100) <= i64::from(chance_percent)
}
