use fxhash::FxHashMap;
use thiserror::Error;
use tracing::info;

use crate::city::{City, CityIdx, CityRecord};
use crate::road::{Road, RoadIdx, RoadRecord};

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("duplicate city id '{0}'")]
    DuplicateCity(String),
    #[error("road references unknown city '{0}'")]
    UnknownCity(String),
    #[error("warehouse city '{0}' is not part of the network")]
    UnknownWarehouse(String),
    #[error("road {from} - {to} has non-positive length {length}")]
    NonPositiveLength { from: String, to: String, length: f64 },
    #[error("road {from} - {to} has load {load} outside [0, 1]")]
    LoadOutOfRange { from: String, to: String, load: f64 },
    #[error("city '{id}' has negative demand {demand}")]
    NegativeDemand { id: String, demand: f64 },
    #[error("city '{id}' has non-positive deadline {deadline}")]
    NonPositiveDeadline { id: String, deadline: f64 },
    #[error("warehouse stock {0} is negative")]
    NegativeStock(f64),
}

/// Immutable road network: cities, undirected roads, and one designated
/// warehouse node carrying the stock. Built once from records and never
/// mutated during route computation.
#[derive(Debug)]
pub struct Network {
    cities: Vec<City>,
    roads: Vec<Road>,
    adjacency_list: Vec<Vec<RoadIdx>>,
    id_index: FxHashMap<String, CityIdx>,
    warehouse: CityIdx,
    stock: f64,
}

impl Network {
    pub fn from_records(
        cities: Vec<CityRecord>,
        roads: Vec<RoadRecord>,
        warehouse_id: &str,
        stock: f64,
    ) -> Result<Network, NetworkError> {
        if stock < 0.0 {
            return Err(NetworkError::NegativeStock(stock));
        }

        let mut id_index = FxHashMap::default();
        let mut city_nodes = Vec::with_capacity(cities.len());

        for record in cities {
            if record.demand < 0.0 {
                return Err(NetworkError::NegativeDemand {
                    id: record.id,
                    demand: record.demand,
                });
            }
            if record.deadline <= 0.0 {
                return Err(NetworkError::NonPositiveDeadline {
                    id: record.id,
                    deadline: record.deadline,
                });
            }
            if id_index.contains_key(&record.id) {
                return Err(NetworkError::DuplicateCity(record.id));
            }

            let idx = CityIdx::new(city_nodes.len());
            id_index.insert(record.id.clone(), idx);
            city_nodes.push(City::new(record));
        }

        let warehouse = *id_index
            .get(warehouse_id)
            .ok_or_else(|| NetworkError::UnknownWarehouse(warehouse_id.to_owned()))?;

        let mut network = Network {
            adjacency_list: vec![Vec::new(); city_nodes.len()],
            cities: city_nodes,
            roads: Vec::with_capacity(roads.len()),
            id_index,
            warehouse,
            stock,
        };

        for record in &roads {
            network.add_road(record)?;
        }

        info!(
            cities = network.cities.len(),
            roads = network.roads.len(),
            warehouse = %network.cities[network.warehouse].external_id(),
            "network built"
        );

        Ok(network)
    }

    fn add_road(&mut self, record: &RoadRecord) -> Result<(), NetworkError> {
        if record.length <= 0.0 {
            return Err(NetworkError::NonPositiveLength {
                from: record.from.clone(),
                to: record.to.clone(),
                length: record.length,
            });
        }
        if !(0.0..=1.0).contains(&record.load) {
            return Err(NetworkError::LoadOutOfRange {
                from: record.from.clone(),
                to: record.to.clone(),
                load: record.load,
            });
        }

        let from = self.city_idx(&record.from)?;
        let to = self.city_idx(&record.to)?;

        let road_id = RoadIdx::new(self.roads.len());
        self.roads.push(Road::new(from, to, record));
        self.adjacency_list[from.get()].push(road_id);
        self.adjacency_list[to.get()].push(road_id);

        Ok(())
    }

    fn city_idx(&self, external_id: &str) -> Result<CityIdx, NetworkError> {
        self.id_index
            .get(external_id)
            .copied()
            .ok_or_else(|| NetworkError::UnknownCity(external_id.to_owned()))
    }

    pub fn city(&self, city: CityIdx) -> &City {
        &self.cities[city]
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn find_city(&self, external_id: &str) -> Option<CityIdx> {
        self.id_index.get(external_id).copied()
    }

    pub fn road(&self, road: RoadIdx) -> &Road {
        &self.roads[road]
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    pub fn node_roads(&self, node: CityIdx) -> &[RoadIdx] {
        &self.adjacency_list[node.get()]
    }

    pub fn node_count(&self) -> usize {
        self.cities.len()
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    pub fn warehouse(&self) -> CityIdx {
        self.warehouse
    }

    /// Stock held at the warehouse node, in kilograms.
    pub fn stock(&self) -> f64 {
        self.stock
    }

    /// Cities with a demand to serve, i.e. every node except the warehouse.
    pub fn demand_cities(&self) -> impl Iterator<Item = CityIdx> + '_ {
        (0..self.cities.len())
            .map(CityIdx::new)
            .filter(move |idx| *idx != self.warehouse)
    }

    pub fn total_demand(&self) -> f64 {
        self.demand_cities()
            .map(|idx| self.cities[idx].demand())
            .sum()
    }
}
