//! Waypoint arrival reward. Same payout at every waypoint.

use crate::{Constants, ResourceDelta, WaypointReward};

/// `water_after_consumption` may be negative; the refill then covers the
/// shortfall too, so the summed delta still lands on the water cap.
pub fn waypoint_reward(
    water_after_consumption: i64,
    leader_security: u32,
    constants: &Constants,
) -> WaypointReward {
    WaypointReward {
        water_refill: (constants.max_resources.water - water_after_consumption).max(0),
        money_earned: constants.base_station_money
            + i64::from(leader_security) * constants.money_multiplier,
    }
}

impl WaypointReward {
    pub fn as_delta(&self) -> ResourceDelta {
        ResourceDelta {
            water: self.water_refill,
            money: self.money_earned,
            ..ResourceDelta::default()
        }
    }
}
