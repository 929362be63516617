use fxhash::{FxHashMap, FxHashSet};

use caravan_routing::city::CityIdx;
use caravan_routing::road::RoadIdx;
use caravan_routing::weighting::Hours;

use crate::problem::vehicle::VehicleIdx;

/// The chosen delivery for one city: a direct trip from the warehouse.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryRoute {
    city: CityIdx,
    vehicle: VehicleIdx,
    path: Vec<RoadIdx>,
    distance_km: f64,
    cost: f64,
    hours: Hours,
}

impl DeliveryRoute {
    pub(crate) fn new(
        city: CityIdx,
        vehicle: VehicleIdx,
        path: Vec<RoadIdx>,
        distance_km: f64,
        cost: f64,
        hours: Hours,
    ) -> Self {
        DeliveryRoute {
            city,
            vehicle,
            path,
            distance_km,
            cost,
            hours,
        }
    }

    pub fn city(&self) -> CityIdx {
        self.city
    }

    pub fn vehicle(&self) -> VehicleIdx {
        self.vehicle
    }

    /// Roads from the warehouse to the city, in travel order.
    pub fn path(&self) -> &[RoadIdx] {
        &self.path
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Distance-based cost: path length × the vehicle's cost per km.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn hours(&self) -> Hours {
        self.hours
    }
}

/// Per-city planning result. Undeliverable is an ordinary outcome, never
/// an error: one city without a feasible vehicle does not abort the batch.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryOutcome {
    Delivered(DeliveryRoute),
    Undeliverable,
}

impl DeliveryOutcome {
    pub fn route(&self) -> Option<&DeliveryRoute> {
        match self {
            DeliveryOutcome::Delivered(route) => Some(route),
            DeliveryOutcome::Undeliverable => None,
        }
    }

    pub fn is_undeliverable(&self) -> bool {
        matches!(self, DeliveryOutcome::Undeliverable)
    }
}

/// One outcome per non-warehouse city.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryPlan {
    outcomes: FxHashMap<CityIdx, DeliveryOutcome>,
}

impl DeliveryPlan {
    pub(crate) fn new(outcomes: FxHashMap<CityIdx, DeliveryOutcome>) -> Self {
        DeliveryPlan { outcomes }
    }

    pub fn outcome(&self, city: CityIdx) -> Option<&DeliveryOutcome> {
        self.outcomes.get(&city)
    }

    pub fn route(&self, city: CityIdx) -> Option<&DeliveryRoute> {
        self.outcomes.get(&city).and_then(DeliveryOutcome::route)
    }

    pub fn routes(&self) -> impl Iterator<Item = &DeliveryRoute> {
        self.outcomes.values().filter_map(DeliveryOutcome::route)
    }

    pub fn undeliverable_cities(&self) -> impl Iterator<Item = CityIdx> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_undeliverable())
            .map(|(&city, _)| city)
    }

    pub fn city_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Every road used by some chosen route, for rendering consumers.
    pub fn route_roads(&self) -> FxHashSet<RoadIdx> {
        self.routes()
            .flat_map(|route| route.path().iter().copied())
            .collect()
    }
}
