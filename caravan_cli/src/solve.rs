use std::fs::File;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use caravan_optimizer::allocation::compute_routes;
use caravan_optimizer::json::types::JsonDeliveryProblem;
use caravan_optimizer::overlay::RouteOverlay;

use crate::report;

pub fn run(input: &Path, with_overlay: bool) -> Result<(), anyhow::Error> {
    let file = File::open(input).with_context(|| format!("cannot open {}", input.display()))?;
    let json: JsonDeliveryProblem =
        serde_json::from_reader(file).context("invalid problem file")?;
    let problem = json.build_problem()?;

    info!(
        cities = problem.network().node_count(),
        roads = problem.network().road_count(),
        vehicles = problem.fleet().vehicles().len(),
        "problem loaded"
    );

    // An aggregate gate failure leaves nothing per-city to report, only
    // the deficit.
    let plan = compute_routes(&problem).map_err(|err| {
        let deficit = err.deficit();
        anyhow::Error::new(err).context(format!("no delivery plan possible, deficit {deficit:.2} kg"))
    })?;

    report::print_plan(&problem, &plan);

    if with_overlay {
        let overlay = RouteOverlay::new(problem.network(), &plan);
        report::print_overlay(&overlay);
    }

    Ok(())
}
