use serde::{Deserialize, Serialize};

use crate::define_index_newtype;

define_index_newtype!(CityIdx, City);

/// A demand location in the road network. The warehouse is a city whose
/// demand is ignored and which carries the stock on the [`crate::network::Network`].
#[derive(Debug, Clone)]
pub struct City {
    external_id: String,
    demand: f64,
    deadline_hours: f64,
    x: f64,
    y: f64,
}

impl City {
    pub(crate) fn new(record: CityRecord) -> Self {
        City {
            external_id: record.id,
            demand: record.demand,
            deadline_hours: record.deadline,
            x: record.x,
            y: record.y,
        }
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    /// Demand in kilograms.
    pub fn demand(&self) -> f64 {
        self.demand
    }

    /// Latest acceptable arrival time, in hours from departure.
    pub fn deadline_hours(&self) -> f64 {
        self.deadline_hours
    }

    /// Cartesian position, only used by rendering consumers.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CityRecord {
    pub id: String,
    pub demand: f64,
    pub deadline: f64,
    pub x: f64,
    pub y: f64,
}
