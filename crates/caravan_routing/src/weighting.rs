use crate::road::Road;

/// Travel time in fractional hours.
pub type Hours = f64;

pub trait Weighting {
    fn can_access_road(&self, road: &Road) -> bool {
        self.calc_road_hours(road).is_finite()
    }

    /// Traversal time for one road, or `INFINITY` when the road cannot be
    /// used at all.
    fn calc_road_hours(&self, road: &Road) -> Hours;
}

/// Weights a road by its length divided by the vehicle's effective speed,
/// `speed × (1 − load)`. A fully loaded road has effective speed 0 and is
/// never selected by the search.
pub struct LoadAwareWeighting {
    speed_kmh: f64,
}

impl LoadAwareWeighting {
    pub fn new(speed_kmh: f64) -> Self {
        LoadAwareWeighting { speed_kmh }
    }

    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }
}

impl Weighting for LoadAwareWeighting {
    fn calc_road_hours(&self, road: &Road) -> Hours {
        let effective_speed = self.speed_kmh * (1.0 - road.load());
        if effective_speed <= 0.0 {
            return Hours::INFINITY;
        }

        road.length_km() / effective_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::CityIdx;
    use crate::road::Road;
    use crate::test_utils::road as road_record;

    fn make_road(length: f64, load: f64) -> Road {
        Road::new(
            CityIdx::new(0),
            CityIdx::new(1),
            &road_record("W", "A", length, load),
        )
    }

    #[test]
    fn test_free_flow_weight_is_length_over_speed() {
        let weighting = LoadAwareWeighting::new(50.0);
        assert_eq!(weighting.calc_road_hours(&make_road(100.0, 0.0)), 2.0);
    }

    #[test]
    fn test_half_load_halves_effective_speed() {
        let weighting = LoadAwareWeighting::new(50.0);
        assert_eq!(weighting.calc_road_hours(&make_road(100.0, 0.5)), 4.0);
    }

    #[test]
    fn test_full_load_is_impassable() {
        let weighting = LoadAwareWeighting::new(50.0);
        let road = make_road(100.0, 1.0);
        assert!(weighting.calc_road_hours(&road).is_infinite());
        assert!(!weighting.can_access_road(&road));
    }
}
