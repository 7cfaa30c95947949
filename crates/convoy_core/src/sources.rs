use crate::dice::RandomSource;
use crate::{CargoItem, RandomEvent};

/// Decides whether a random event fires this turn and which one.
pub trait EventSource {
    fn should_trigger_event(&mut self, dice: &mut impl RandomSource) -> bool;

    /// `None` when there is nothing to pick from.
    fn select_random_event(&mut self, dice: &mut impl RandomSource) -> Option<RandomEvent>;
}

/// Decides whether cargo is found this turn and which item.
pub trait CargoSource {
    fn should_discover_cargo(&mut self, dice: &mut impl RandomSource) -> bool;

    /// `None` when there is nothing to pick from.
    fn select_random_cargo(&mut self, dice: &mut impl RandomSource) -> Option<CargoItem>;
}

/// Source that never fires. Used for quiet runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Disabled;

impl EventSource for Disabled {
    fn should_trigger_event(&mut self, _dice: &mut impl RandomSource) -> bool {
        false
    }

    fn select_random_event(&mut self, _dice: &mut impl RandomSource) -> Option<RandomEvent> {
        None
    }
}

impl CargoSource for Disabled {
    fn should_discover_cargo(&mut self, _dice: &mut impl RandomSource) -> bool {
        false
    }

    fn select_random_cargo(&mut self, _dice: &mut impl RandomSource) -> Option<CargoItem> {
        None
    }
}
