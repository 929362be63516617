use caravan_routing::city::CityRecord;
use caravan_routing::network::Network;
use caravan_routing::road::RoadRecord;

use crate::problem::delivery_problem::DeliveryProblem;
use crate::problem::fleet::Fleet;
use crate::problem::vehicle::VehicleRecord;

pub(crate) fn city(id: &str, demand: f64, deadline: f64) -> CityRecord {
    CityRecord {
        id: id.to_owned(),
        demand,
        deadline,
        x: 0.0,
        y: 0.0,
    }
}

pub(crate) fn road(from: &str, to: &str, length: f64, load: f64) -> RoadRecord {
    RoadRecord {
        from: from.to_owned(),
        to: to.to_owned(),
        length,
        cost: 0.0,
        load,
    }
}

pub(crate) fn vehicle(label: &str, capacity: f64, speed: f64, cost_per_km: f64) -> VehicleRecord {
    VehicleRecord {
        vehicle_type: label.to_owned(),
        capacity,
        speed,
        cost_per_km,
    }
}

pub(crate) fn van() -> VehicleRecord {
    vehicle("Van", 50.0, 50.0, 2.0)
}

/// Problem with the first city as warehouse.
pub(crate) fn problem(
    cities: Vec<CityRecord>,
    roads: Vec<RoadRecord>,
    stock: f64,
    vehicles: Vec<VehicleRecord>,
) -> DeliveryProblem {
    let warehouse_id = cities[0].id.clone();
    let network = Network::from_records(cities, roads, &warehouse_id, stock).unwrap();
    DeliveryProblem::new(network, Fleet::new(vehicles).unwrap())
}

/// W plus cities A (30 kg) and B (10 kg), both reachable well within their
/// deadlines, against the given stock.
pub(crate) fn problem_with_stock(stock: f64, vehicles: Vec<VehicleRecord>) -> DeliveryProblem {
    problem(
        vec![
            city("W", 0.0, 1.0),
            city("A", 30.0, 5.0),
            city("B", 10.0, 5.0),
        ],
        vec![road("W", "A", 100.0, 0.0), road("W", "B", 50.0, 0.0)],
        stock,
        vehicles,
    )
}
