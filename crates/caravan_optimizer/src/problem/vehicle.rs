use serde::{Deserialize, Serialize};

use caravan_routing::define_index_newtype;

define_index_newtype!(VehicleIdx, Vehicle);

/// One vehicle type available at the warehouse. A single trip of one
/// vehicle serves one city, so the capacity must cover the whole demand.
#[derive(Debug, Clone)]
pub struct Vehicle {
    label: String,
    capacity_kg: f64,
    speed_kmh: f64,
    cost_per_km: f64,
}

impl Vehicle {
    pub fn new(record: VehicleRecord) -> Self {
        Vehicle {
            label: record.vehicle_type,
            capacity_kg: record.capacity,
            speed_kmh: record.speed,
            cost_per_km: record.cost_per_km,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn capacity_kg(&self) -> f64 {
        self.capacity_kg
    }

    /// Nominal speed in km/h; road load scales it down per edge.
    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    pub fn cost_per_km(&self) -> f64 {
        self.cost_per_km
    }

    pub fn can_carry(&self, demand_kg: f64) -> bool {
        self.capacity_kg >= demand_kg
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VehicleRecord {
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub capacity: f64,
    pub speed: f64,
    pub cost_per_km: f64,
}
