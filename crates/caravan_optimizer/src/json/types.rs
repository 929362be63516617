use serde::{Deserialize, Serialize};
use thiserror::Error;

use caravan_routing::city::CityRecord;
use caravan_routing::network::{Network, NetworkError};
use caravan_routing::road::RoadRecord;

use crate::error::ProblemError;
use crate::problem::delivery_problem::DeliveryProblem;
use crate::problem::fleet::Fleet;
use crate::problem::vehicle::VehicleRecord;

#[derive(Error, Debug)]
pub enum BuildProblemError {
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    Problem(#[from] ProblemError),
}

/// On-disk problem format: a fully-formed batch of records in one file,
/// replacing any interactive collection upstream.
#[derive(Serialize, Deserialize)]
#[serde(rename = "DeliveryProblem")]
pub struct JsonDeliveryProblem {
    pub warehouse: JsonWarehouse,
    pub cities: Vec<JsonCity>,
    pub roads: Vec<JsonRoad>,
    pub vehicles: Vec<JsonVehicle>,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename = "Warehouse")]
pub struct JsonWarehouse {
    pub city_id: String,
    pub stock: f64,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename = "City")]
pub struct JsonCity {
    pub id: String,
    pub demand: f64,
    pub deadline: f64,
    pub position: [f64; 2],
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename = "Road")]
pub struct JsonRoad {
    pub from: String,
    pub to: String,
    pub length: f64,
    pub cost: f64,
    pub load: f64,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename = "Vehicle")]
pub struct JsonVehicle {
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub capacity: f64,
    pub speed: f64,
    pub cost_per_km: f64,
}

impl JsonDeliveryProblem {
    pub fn build_problem(self) -> Result<DeliveryProblem, BuildProblemError> {
        let cities = self.cities.into_iter().map(CityRecord::from).collect();
        let roads = self.roads.into_iter().map(RoadRecord::from).collect();
        let vehicles = self.vehicles.into_iter().map(VehicleRecord::from).collect();

        let network =
            Network::from_records(cities, roads, &self.warehouse.city_id, self.warehouse.stock)?;
        let fleet = Fleet::new(vehicles)?;

        Ok(DeliveryProblem::new(network, fleet))
    }
}

impl From<JsonCity> for CityRecord {
    fn from(value: JsonCity) -> Self {
        CityRecord {
            id: value.id,
            demand: value.demand,
            deadline: value.deadline,
            x: value.position[0],
            y: value.position[1],
        }
    }
}

impl From<JsonRoad> for RoadRecord {
    fn from(value: JsonRoad) -> Self {
        RoadRecord {
            from: value.from,
            to: value.to,
            length: value.length,
            cost: value.cost,
            load: value.load,
        }
    }
}

impl From<JsonVehicle> for VehicleRecord {
    fn from(value: JsonVehicle) -> Self {
        VehicleRecord {
            vehicle_type: value.vehicle_type,
            capacity: value.capacity,
            speed: value.speed,
            cost_per_km: value.cost_per_km,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "warehouse": { "city_id": "W", "stock": 100.0 },
        "cities": [
            { "id": "W", "demand": 0.0, "deadline": 1.0, "position": [0.0, 0.0] },
            { "id": "A", "demand": 30.0, "deadline": 5.0, "position": [10.0, 0.0] }
        ],
        "roads": [
            { "from": "W", "to": "A", "length": 100.0, "cost": 15.0, "load": 0.0 }
        ],
        "vehicles": [
            { "type": "Van", "capacity": 50.0, "speed": 50.0, "cost_per_km": 2.0 }
        ]
    }"#;

    #[test]
    fn test_parse_and_build_problem() {
        let json: JsonDeliveryProblem = serde_json::from_str(SAMPLE).unwrap();
        let problem = json.build_problem().unwrap();

        assert_eq!(problem.network().node_count(), 2);
        assert_eq!(problem.network().stock(), 100.0);
        assert_eq!(problem.fleet().vehicles().len(), 1);
        assert_eq!(
            problem.network().city(problem.warehouse()).external_id(),
            "W"
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let json = r#"{ "type": "Van", "capacity": 1.0, "speed": 1.0, "cost_per_km": 1.0, "wheels": 4 }"#;
        assert!(serde_json::from_str::<JsonVehicle>(json).is_err());
    }

    #[test]
    fn test_bad_road_endpoint_surfaces_network_error() {
        let mut json: JsonDeliveryProblem = serde_json::from_str(SAMPLE).unwrap();
        json.roads[0].to = "X".to_owned();

        let err = json.build_problem().unwrap_err();
        assert!(matches!(
            err,
            BuildProblemError::Network(NetworkError::UnknownCity(_))
        ));
    }
}
