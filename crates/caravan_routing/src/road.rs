use serde::{Deserialize, Serialize};

use crate::city::CityIdx;
use crate::define_index_newtype;

define_index_newtype!(RoadIdx, Road);

/// An undirected edge of the network. `load` is the congestion factor in
/// [0, 1]; a fully loaded road (load = 1) is impassable for every vehicle.
#[derive(Debug, Clone)]
pub struct Road {
    start_node: CityIdx,
    end_node: CityIdx,
    length_km: f64,
    toll_cost: f64,
    load: f64,
}

impl Road {
    pub(crate) fn new(start_node: CityIdx, end_node: CityIdx, record: &RoadRecord) -> Self {
        Road {
            start_node,
            end_node,
            length_km: record.length,
            toll_cost: record.cost,
            load: record.load,
        }
    }

    pub fn start_node(&self) -> CityIdx {
        self.start_node
    }

    pub fn end_node(&self) -> CityIdx {
        self.end_node
    }

    /// The endpoint opposite to `node`.
    pub fn adj_node(&self, node: CityIdx) -> CityIdx {
        if self.start_node == node {
            self.end_node
        } else {
            self.start_node
        }
    }

    pub fn length_km(&self) -> f64 {
        self.length_km
    }

    pub fn toll_cost(&self) -> f64 {
        self.toll_cost
    }

    pub fn load(&self) -> f64 {
        self.load
    }

    pub fn is_passable(&self) -> bool {
        self.load < 1.0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RoadRecord {
    pub from: String,
    pub to: String,
    pub length: f64,
    pub cost: f64,
    pub load: f64,
}
