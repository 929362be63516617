use comfy_table::Table;

use caravan_optimizer::overlay::RouteOverlay;
use caravan_optimizer::plan::DeliveryPlan;
use caravan_optimizer::problem::delivery_problem::DeliveryProblem;

/// Route table in city order: path string, vehicle, cost, travel time.
pub fn print_plan(problem: &DeliveryProblem, plan: &DeliveryPlan) {
    let network = problem.network();
    let mut table = Table::new();
    table.set_header(vec!["City", "Route", "Vehicle", "Cost", "Time (h)"]);

    for city_id in network.demand_cities() {
        let city = network.city(city_id);
        match plan.route(city_id) {
            Some(route) => {
                table.add_row(vec![
                    city.external_id().to_owned(),
                    path_string(problem, route.path()),
                    problem.vehicle(route.vehicle()).label().to_owned(),
                    format!("{:.2}", route.cost()),
                    format!("{:.2}", route.hours()),
                ]);
            }
            None => {
                table.add_row(vec![
                    city.external_id().to_owned(),
                    "undeliverable".to_owned(),
                    "-".to_owned(),
                    "-".to_owned(),
                    "-".to_owned(),
                ]);
            }
        }
    }

    println!("{table}");
}

/// "W -> A -> B" walk of a route's roads, starting at the warehouse.
fn path_string(problem: &DeliveryProblem, path: &[caravan_routing::road::RoadIdx]) -> String {
    let network = problem.network();
    let mut node = network.warehouse();
    let mut names = vec![network.city(node).external_id().to_owned()];

    for &road_id in path {
        node = network.road(road_id).adj_node(node);
        names.push(network.city(node).external_id().to_owned());
    }

    names.join(" -> ")
}

pub fn print_overlay(overlay: &RouteOverlay<'_>) {
    println!("nodes:");
    for (id, (x, y)) in overlay.nodes() {
        println!("  {id} at ({x}, {y})");
    }

    println!("roads:");
    for road in overlay.roads() {
        let marker = if road.highlighted { "*" } else { " " };
        println!("  {marker} {} - {}", road.from, road.to);
    }
}
