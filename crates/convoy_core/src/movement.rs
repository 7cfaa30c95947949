//! Movement along the waypoint route.

use serde::{Deserialize, Serialize};

use crate::Vehicle;

/// Outcome of moving the convoy forward by some distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advance {
    pub new_progress: u32,
    /// At least one waypoint boundary was crossed.
    pub crossed: bool,
    pub new_waypoint_index: usize,
}

/// Dice roll plus vehicle speed. A negative roll counts as zero.
pub fn movement_distance(roll: i64, vehicle: &Vehicle) -> u32 {
    let roll = u32::try_from(roll.max(0)).unwrap_or(u32::MAX);
    roll.saturating_add(vehicle.speed)
}

/// Moves `movement` units past `progress`, rolling over as many waypoint
/// boundaries as the distance covers.
///
/// The index never passes `last_index`. Once there, leftover distance stays
/// in `new_progress` instead of being discarded or wrapped.
pub fn advance(
    progress: u32,
    movement: u32,
    distance_per_waypoint: u32,
    waypoint_index: usize,
    last_index: usize,
) -> Advance {
    let mut total = progress.saturating_add(movement);
    let mut index = waypoint_index.min(last_index);
    let mut crossed = false;

    while total >= distance_per_waypoint && index < last_index {
        total -= distance_per_waypoint;
        index += 1;
        crossed = true;
    }

    Advance {
        new_progress: total,
        crossed,
        new_waypoint_index: index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VehicleId;

    const LAST: usize = 9;

    #[test]
    fn single_crossing_keeps_remainder() {
        assert_eq!(
            advance(5, 8, 10, 0, LAST),
            Advance {
                new_progress: 3,
                crossed: true,
                new_waypoint_index: 1,
            }
        );
    }

    #[test]
    fn multiple_crossings_in_one_step() {
        assert_eq!(
            advance(5, 25, 10, 0, LAST),
            Advance {
                new_progress: 0,
                crossed: true,
                new_waypoint_index: 3,
            }
        );
    }

    #[test]
    fn exact_boundary_counts_as_crossing() {
        let step = advance(4, 6, 10, 2, LAST);
        assert!(step.crossed);
        assert_eq!(step.new_progress, 0);
        assert_eq!(step.new_waypoint_index, 3);
    }

    #[test]
    fn short_step_does_not_cross() {
        let step = advance(2, 3, 10, 4, LAST);
        assert!(!step.crossed);
        assert_eq!(step.new_progress, 5);
        assert_eq!(step.new_waypoint_index, 4);
    }

    #[test]
    fn zero_movement_is_a_no_op() {
        let step = advance(7, 0, 10, 1, LAST);
        assert!(!step.crossed);
        assert_eq!(step.new_progress, 7);
        assert_eq!(step.new_waypoint_index, 1);
    }

    #[test]
    fn capped_at_final_waypoint() {
        let step = advance(8, 40, 10, 8, LAST);
        assert!(step.crossed);
        assert_eq!(step.new_waypoint_index, LAST);
        assert_eq!(step.new_progress, 38, "leftover distance is absorbed");

        let parked = advance(step.new_progress, 15, 10, LAST, LAST);
        assert!(!parked.crossed);
        assert_eq!(parked.new_waypoint_index, LAST);
    }

    #[test]
    fn movement_adds_vehicle_speed() {
        let vehicle = Vehicle {
            id: VehicleId("vehicle_test".to_string()),
            name: "Test".to_string(),
            speed: 3,
            reliability: 3,
            power: 3,
        };
        assert_eq!(movement_distance(0, &vehicle), 3);
        assert_eq!(movement_distance(10, &vehicle), 13);
        assert_eq!(movement_distance(-4, &vehicle), 3);
    }
}
