use fxhash::FxHashMap;
use rayon::prelude::*;
use tracing::{info, warn};

use caravan_routing::city::CityIdx;
use caravan_routing::shortest_path::{Dijkstra, ShortestPathTree};
use caravan_routing::weighting::LoadAwareWeighting;

use crate::error::PlanError;
use crate::feasibility::check_feasibility;
use crate::plan::{DeliveryOutcome, DeliveryPlan, DeliveryRoute};
use crate::problem::delivery_problem::DeliveryProblem;

/// Plan one direct warehouse trip per demand city, or fail the whole batch
/// on the aggregate stock gate.
pub fn compute_routes(problem: &DeliveryProblem) -> Result<DeliveryPlan, PlanError> {
    RoutePlanner::new(problem).plan()
}

/// Per-destination vehicle allocation over cached shortest-path trees.
///
/// Vehicles are ranked lexicographically: minimal arrival time first, and
/// among vehicles with exactly equal time, minimal distance-based cost.
pub struct RoutePlanner<'a> {
    problem: &'a DeliveryProblem,
}

impl<'a> RoutePlanner<'a> {
    pub fn new(problem: &'a DeliveryProblem) -> Self {
        RoutePlanner { problem }
    }

    pub fn plan(&self) -> Result<DeliveryPlan, PlanError> {
        check_feasibility(self.problem)?;

        let trees = self.build_speed_trees();
        let cities: Vec<CityIdx> = self.problem.network().demand_cities().collect();

        let outcomes: FxHashMap<CityIdx, DeliveryOutcome> = cities
            .into_par_iter()
            .map(|city| (city, self.allocate_city(city, &trees)))
            .collect();

        let plan = DeliveryPlan::new(outcomes);
        info!(
            cities = plan.city_count(),
            undeliverable = plan.undeliverable_cities().count(),
            "delivery plan computed"
        );

        Ok(plan)
    }

    /// One tree per distinct vehicle speed. The tree is a pure function of
    /// (network, speed), so it is shared across all cities and vehicles
    /// without changing any outcome.
    fn build_speed_trees(&self) -> FxHashMap<u64, ShortestPathTree> {
        let network = self.problem.network();
        let warehouse = network.warehouse();

        self.problem
            .fleet()
            .distinct_speeds()
            .into_par_iter()
            .map(|speed| {
                let weighting = LoadAwareWeighting::new(speed);
                let tree = Dijkstra::new(network).calc_tree(network, &weighting, warehouse);
                (speed.to_bits(), tree)
            })
            .collect()
    }

    fn allocate_city(
        &self,
        city_id: CityIdx,
        trees: &FxHashMap<u64, ShortestPathTree>,
    ) -> DeliveryOutcome {
        let network = self.problem.network();
        let city = self.problem.city(city_id);
        let mut best: Option<DeliveryRoute> = None;

        for (vehicle_id, vehicle) in self.problem.fleet().iter() {
            if !vehicle.can_carry(city.demand()) {
                continue;
            }

            let tree = &trees[&vehicle.speed_kmh().to_bits()];
            let hours = tree.hours_to(city_id);
            if hours > city.deadline_hours() {
                // Also covers unreachable cities: infinite hours miss
                // every deadline.
                continue;
            }

            let Some(path) = tree.path_to(city_id) else {
                continue;
            };
            let distance_km: f64 = path
                .iter()
                .map(|&road| network.road(road).length_km())
                .sum();
            let cost = distance_km * vehicle.cost_per_km();

            let improves = match &best {
                None => true,
                Some(current) => {
                    hours < current.hours() || (hours == current.hours() && cost < current.cost())
                }
            };
            if improves {
                best = Some(DeliveryRoute::new(
                    city_id,
                    vehicle_id,
                    path,
                    distance_km,
                    cost,
                    hours,
                ));
            }
        }

        match best {
            Some(route) => DeliveryOutcome::Delivered(route),
            None => {
                warn!(
                    city = %city.external_id(),
                    demand = city.demand(),
                    deadline = city.deadline_hours(),
                    "no vehicle satisfies capacity and deadline"
                );
                DeliveryOutcome::Undeliverable
            }
        }
    }
}
