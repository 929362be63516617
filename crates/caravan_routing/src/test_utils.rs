use crate::city::CityRecord;
use crate::network::Network;
use crate::road::RoadRecord;

pub(crate) fn city(id: &str, demand: f64, deadline: f64) -> CityRecord {
    CityRecord {
        id: id.to_owned(),
        demand,
        deadline,
        x: 0.0,
        y: 0.0,
    }
}

pub(crate) fn road(from: &str, to: &str, length: f64, load: f64) -> RoadRecord {
    RoadRecord {
        from: from.to_owned(),
        to: to.to_owned(),
        length,
        cost: 0.0,
        load,
    }
}

/// W - A - B line plus an isolated city C.
pub(crate) fn line_network() -> Network {
    Network::from_records(
        vec![
            city("W", 0.0, 1.0),
            city("A", 10.0, 5.0),
            city("B", 10.0, 5.0),
            city("C", 10.0, 5.0),
        ],
        vec![road("W", "A", 50.0, 0.0), road("A", "B", 50.0, 0.0)],
        "W",
        100.0,
    )
    .unwrap()
}
