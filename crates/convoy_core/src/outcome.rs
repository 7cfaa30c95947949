//! Terminal-state detection.

use crate::{GameOverReason, GameStatus, Resources};

/// Victory is checked before depletion: reaching the last waypoint wins
/// even on a turn that also empties a stockpile.
pub fn check_status(resources: &Resources, waypoint_index: usize, total_waypoints: usize) -> GameStatus {
    if waypoint_index >= total_waypoints.saturating_sub(1) {
        return GameStatus::Victory;
    }
    match depletion(resources) {
        Some(reason) => GameStatus::GameOver(reason),
        None => GameStatus::Playing,
    }
}

/// First depleted resource in precedence order: food, fuel, water, money.
pub fn depletion(resources: &Resources) -> Option<GameOverReason> {
    if resources.food <= 0 {
        Some(GameOverReason::Starvation)
    } else if resources.fuel <= 0 {
        Some(GameOverReason::OutOfFuel)
    } else if resources.water <= 0 {
        Some(GameOverReason::Dehydration)
    } else if resources.money <= 0 {
        Some(GameOverReason::Broke)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stocked() -> Resources {
        Resources {
            fuel: 10,
            food: 10,
            water: 10,
            money: 10,
        }
    }

    #[test]
    fn healthy_mid_route_keeps_playing() {
        assert_eq!(check_status(&stocked(), 4, 10), GameStatus::Playing);
    }

    #[test]
    fn final_waypoint_is_victory() {
        assert_eq!(check_status(&stocked(), 9, 10), GameStatus::Victory);
    }

    #[test]
    fn victory_beats_depletion() {
        let empty = Resources::default();
        assert_eq!(check_status(&empty, 9, 10), GameStatus::Victory);
    }

    #[test]
    fn all_empty_reports_starvation() {
        let empty = Resources::default();
        assert_eq!(
            check_status(&empty, 3, 10),
            GameStatus::GameOver(GameOverReason::Starvation)
        );
    }

    #[test]
    fn precedence_order() {
        let mut r = stocked();
        r.fuel = 0;
        r.water = 0;
        r.money = 0;
        assert_eq!(depletion(&r), Some(GameOverReason::OutOfFuel));

        let mut r = stocked();
        r.water = 0;
        r.money = 0;
        assert_eq!(depletion(&r), Some(GameOverReason::Dehydration));

        let mut r = stocked();
        r.money = 0;
        assert_eq!(depletion(&r), Some(GameOverReason::Broke));
    }
}
