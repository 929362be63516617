use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::city::CityIdx;
use crate::network::Network;
use crate::road::RoadIdx;
use crate::weighting::{Hours, Weighting};

#[derive(Copy, Clone, Debug)]
struct HeapItem {
    node: CityIdx,
    hours: Hours,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip hours to make this a min-heap; equal-weight entries order
        // by node index so the search is deterministic.
        other
            .hours
            .total_cmp(&self.hours)
            .then_with(|| self.node.cmp(&other.node))
    }
}

#[derive(Copy, Clone)]
struct NodeData {
    hours: Hours,
    settled: bool,
    // Road taken from the parent into this node, None at the source and
    // at unreached nodes.
    parent: Option<(CityIdx, RoadIdx)>,
}

impl NodeData {
    fn unreached() -> Self {
        NodeData {
            hours: Hours::INFINITY,
            settled: false,
            parent: None,
        }
    }
}

/// Single-source shortest-path search over the road network for one
/// weighting. Computes the full tree from the source; the allocation
/// engine queries arbitrary destinations from it.
pub struct Dijkstra {
    heap: BinaryHeap<HeapItem>,
    data: Vec<NodeData>,
}

impl Dijkstra {
    pub fn new(network: &Network) -> Self {
        Dijkstra {
            heap: BinaryHeap::with_capacity(network.node_count()),
            data: Vec::with_capacity(network.node_count()),
        }
    }

    pub fn calc_tree(
        &mut self,
        network: &Network,
        weighting: &impl Weighting,
        source: CityIdx,
    ) -> ShortestPathTree {
        self.heap.clear();
        self.data.clear();
        self.data
            .resize(network.node_count(), NodeData::unreached());

        self.data[source.get()].hours = 0.0;
        self.heap.push(HeapItem {
            node: source,
            hours: 0.0,
        });

        let mut settled_nodes = 0;

        while let Some(HeapItem { node, hours }) = self.heap.pop() {
            if self.data[node.get()].settled {
                continue;
            }

            // Stale entry, a shorter arrival was found after this push.
            if hours > self.data[node.get()].hours {
                continue;
            }

            for &road_id in network.node_roads(node) {
                let road = network.road(road_id);
                let adj_node = road.adj_node(node);

                if self.data[adj_node.get()].settled {
                    continue;
                }

                let road_hours = weighting.calc_road_hours(road);
                if !road_hours.is_finite() {
                    continue;
                }

                let next_hours = hours + road_hours;
                if next_hours < self.data[adj_node.get()].hours {
                    self.data[adj_node.get()] = NodeData {
                        hours: next_hours,
                        settled: false,
                        parent: Some((node, road_id)),
                    };
                    self.heap.push(HeapItem {
                        node: adj_node,
                        hours: next_hours,
                    });
                }
            }

            self.data[node.get()].settled = true;
            settled_nodes += 1;
        }

        debug!(source = source.get(), settled_nodes, "shortest-path tree computed");

        ShortestPathTree {
            source,
            nodes: self
                .data
                .iter()
                .map(|data| (data.hours, data.parent))
                .collect(),
        }
    }
}

/// Result of one Dijkstra run: minimal travel hours and the parent road
/// for every node reachable from the source.
pub struct ShortestPathTree {
    source: CityIdx,
    nodes: Vec<(Hours, Option<(CityIdx, RoadIdx)>)>,
}

impl ShortestPathTree {
    pub fn source(&self) -> CityIdx {
        self.source
    }

    /// Minimal travel time to `city`, `INFINITY` when unreachable.
    pub fn hours_to(&self, city: CityIdx) -> Hours {
        self.nodes[city.get()].0
    }

    pub fn is_reachable(&self, city: CityIdx) -> bool {
        self.hours_to(city).is_finite()
    }

    /// Roads from the source to `city`, in travel order. Empty for the
    /// source itself, `None` when the city is unreachable.
    pub fn path_to(&self, city: CityIdx) -> Option<Vec<RoadIdx>> {
        if !self.is_reachable(city) {
            return None;
        }

        let mut path = Vec::new();
        let mut node = city;
        while let Some((parent, road_id)) = self.nodes[node.get()].1 {
            path.push(road_id);
            node = parent;
        }
        path.reverse();

        Some(path)
    }

    /// Cumulative length in km of the path to `city`.
    pub fn distance_km_to(&self, network: &Network, city: CityIdx) -> Option<f64> {
        let path = self.path_to(city)?;
        Some(path.iter().map(|&road| network.road(road).length_km()).sum())
    }
}
