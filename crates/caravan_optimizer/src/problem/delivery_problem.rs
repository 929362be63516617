use caravan_routing::city::{City, CityIdx};
use caravan_routing::network::Network;

use crate::problem::fleet::Fleet;
use crate::problem::vehicle::{Vehicle, VehicleIdx};

/// Read-only input to the planner: the road network plus the fleet.
/// Nothing here mutates during planning, which is what makes the per-city
/// allocation safe to run in parallel.
#[derive(Debug)]
pub struct DeliveryProblem {
    network: Network,
    fleet: Fleet,
}

impl DeliveryProblem {
    pub fn new(network: Network, fleet: Fleet) -> Self {
        DeliveryProblem { network, fleet }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn city(&self, city: CityIdx) -> &City {
        self.network.city(city)
    }

    pub fn vehicle(&self, vehicle: VehicleIdx) -> &Vehicle {
        self.fleet.vehicle(vehicle)
    }

    pub fn warehouse(&self) -> CityIdx {
        self.network.warehouse()
    }
}
