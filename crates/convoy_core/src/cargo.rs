//! Cargo rarity rolls and collection.

use crate::dice::RandomSource;
use crate::{CargoItem, GameState, Rarity, RarityWeights, ResourceDelta, Resources};

impl RarityWeights {
    pub fn weight(&self, rarity: Rarity) -> u32 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Uncommon => self.uncommon,
            Rarity::Rare => self.rare,
            Rarity::Legendary => self.legendary,
        }
    }

    pub fn total(&self) -> u32 {
        self.common + self.uncommon + self.rare + self.legendary
    }
}

pub const RARITIES: [Rarity; 4] = [
    Rarity::Common,
    Rarity::Uncommon,
    Rarity::Rare,
    Rarity::Legendary,
];

/// Weighted rarity pick. Falls back to `Common` if every weight is zero.
pub fn roll_rarity(dice: &mut impl RandomSource, weights: &RarityWeights) -> Rarity {
    let total = weights.total();
    if total == 0 {
        return Rarity::Common;
    }
    let mut roll = dice.roll_in_range(1, i64::from(total));
    for rarity in RARITIES {
        roll -= i64::from(weights.weight(rarity));
        if roll <= 0 {
            return rarity;
        }
    }
    Rarity::Legendary
}

/// Puts `item` in the hold and credits its reward, clamped to `max`.
pub fn collect_cargo(state: &mut GameState, item: CargoItem, max: &Resources) {
    let delta = ResourceDelta::single(item.reward.resource, item.reward.amount);
    state.resources = crate::economy::apply_delta(&state.resources, &delta, max);
    state.cargo_hold.push(item);
}
