//! Content-driven implementations of the engine's event and cargo hooks.

use convoy_core::dice::{roll_percent, RandomSource};
use convoy_core::{
    roll_rarity, CargoItem, CargoSource, EventSource, GameContent, RandomEvent, RarityWeights,
};

fn pick<'a, T>(items: &'a [T], dice: &mut impl RandomSource) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let last = i64::try_from(items.len() - 1).unwrap_or(i64::MAX);
    let index = usize::try_from(dice.roll_in_range(0, last)).unwrap_or(0);
    items.get(index)
}

/// Fires with `event_chance_percent` and picks uniformly from the event list.
#[derive(Debug, Clone, Copy)]
pub struct EventTable<'a> {
    events: &'a [RandomEvent],
    chance_percent: u32,
}

impl<'a> EventTable<'a> {
    pub fn new(events: &'a [RandomEvent], chance_percent: u32) -> Self {
        Self {
            events,
            chance_percent,
        }
    }

    pub fn from_content(content: &'a GameContent) -> Self {
        Self::new(&content.events, content.constants.event_chance_percent)
    }
}

impl EventSource for EventTable<'_> {
    fn should_trigger_event(&mut self, dice: &mut impl RandomSource) -> bool {
        roll_percent(dice, self.chance_percent)
    }

    fn select_random_event(&mut self, dice: &mut impl RandomSource) -> Option<RandomEvent> {
        pick(self.events, dice).cloned()
    }
}

/// Fires with `cargo_chance_percent`; rolls a rarity by weight, then picks
/// uniformly among items of that rarity. If none exist at the rolled
/// rarity, picks from the whole list.
#[derive(Debug, Clone, Copy)]
pub struct CargoTable<'a> {
    items: &'a [CargoItem],
    chance_percent: u32,
    weights: RarityWeights,
}

impl<'a> CargoTable<'a> {
    pub fn new(items: &'a [CargoItem], chance_percent: u32, weights: RarityWeights) -> Self {
        Self {
            items,
            chance_percent,
            weights,
        }
    }

    pub fn from_content(content: &'a GameContent) -> Self {
        Self::new(
            &content.cargo,
            content.constants.cargo_chance_percent,
            content.constants.rarity_weights,
        )
    }
}

impl CargoSource for CargoTable<'_> {
    fn should_discover_cargo(&mut self, dice: &mut impl RandomSource) -> bool {
        roll_percent(dice, self.chance_percent)
    }

    fn select_random_cargo(&mut self, dice: &mut impl RandomSource) -> Option<CargoItem> {
        if self.items.is_empty() {
            return None;
        }
        let rarity = roll_rarity(dice, &self.weights);
        let matching: Vec<&CargoItem> = self.items.iter().filter(|i| i.rarity == rarity).collect();
        if matching.is_empty() {
            return pick(self.items, dice).cloned();
        }
        pick(&matching, dice).map(|item| (*item).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use convoy_core::test_fixtures::{base_content, sample_cargo, ScriptedDice};
    use convoy_core::{CargoId, Rarity};

    fn rare_item() -> CargoItem {
        CargoItem {
            id: CargoId("cargo_gold_watch".to_string()),
            name: "Gold Watch".to_string(),
            rarity: Rarity::Rare,
            ..sample_cargo()
        }
    }

    #[test]
    fn event_chance_is_a_percent_roll() {
        let content = base_content();
        let mut table = EventTable::new(&content.events, 25);
        assert!(table.should_trigger_event(&mut ScriptedDice::new(&[25])));
        assert!(!table.should_trigger_event(&mut ScriptedDice::new(&[26])));
    }

    #[test]
    fn event_pick_uses_roll_as_index() {
        let mut content = base_content();
        let mut second = content.events[0].clone();
        second.id = convoy_core::EventId("event_second".to_string());
        content.events.push(second);

        let mut table = EventTable::from_content(&content);
        let picked = table
            .select_random_event(&mut ScriptedDice::new(&[1]))
            .unwrap();
        assert_eq!(picked.id.0, "event_second");
    }

    #[test]
    fn empty_event_list_selects_nothing() {
        let mut table = EventTable::new(&[], 100);
        assert!(table
            .select_random_event(&mut ScriptedDice::new(&[0]))
            .is_none());
    }

    #[test]
    fn cargo_pick_respects_rolled_rarity() {
        let items = vec![sample_cargo(), rare_item()];
        let weights = base_content().constants.rarity_weights;
        let mut table = CargoTable::new(&items, 100, weights);

        // 90 lands in the rare band (61..=85 uncommon, 86..=97 rare).
        let picked = table
            .select_random_cargo(&mut ScriptedDice::new(&[90, 0]))
            .unwrap();
        assert_eq!(picked.rarity, Rarity::Rare);

        let picked = table
            .select_random_cargo(&mut ScriptedDice::new(&[10, 0]))
            .unwrap();
        assert_eq!(picked.rarity, Rarity::Common);
    }

    #[test]
    fn missing_rarity_falls_back_to_any_item() {
        let items = vec![sample_cargo()];
        let weights = base_content().constants.rarity_weights;
        let mut table = CargoTable::new(&items, 100, weights);

        let picked = table.select_random_cargo(&mut ScriptedDice::new(&[99, 0]));
        assert_eq!(picked, Some(sample_cargo()));
    }
}
