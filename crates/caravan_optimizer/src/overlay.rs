use fxhash::FxHashSet;

use caravan_routing::city::CityIdx;
use caravan_routing::network::Network;
use caravan_routing::road::RoadIdx;

use crate::plan::DeliveryPlan;

/// Rendering seam: node positions plus the roads chosen by the plan.
/// Consumers draw the network however they like; nothing here depends on
/// a drawing backend.
pub struct RouteOverlay<'a> {
    network: &'a Network,
    highlighted_roads: FxHashSet<RoadIdx>,
}

impl<'a> RouteOverlay<'a> {
    pub fn new(network: &'a Network, plan: &DeliveryPlan) -> Self {
        RouteOverlay {
            network,
            highlighted_roads: plan.route_roads(),
        }
    }

    pub fn warehouse(&self) -> CityIdx {
        self.network.warehouse()
    }

    /// Every node with its external id and position.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, (f64, f64))> {
        self.network
            .cities()
            .iter()
            .map(|c| (c.external_id(), c.position()))
    }

    /// Road endpoints with a flag for roads used by some chosen route.
    pub fn roads(&self) -> impl Iterator<Item = OverlayRoad<'_>> {
        self.network.roads().iter().enumerate().map(|(idx, road)| {
            let road_id = RoadIdx::new(idx);
            OverlayRoad {
                from: self.network.city(road.start_node()).external_id(),
                to: self.network.city(road.end_node()).external_id(),
                highlighted: self.highlighted_roads.contains(&road_id),
            }
        })
    }

    pub fn is_highlighted(&self, road: RoadIdx) -> bool {
        self.highlighted_roads.contains(&road)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayRoad<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub highlighted: bool,
}
