use crate::error::ProblemError;
use crate::problem::vehicle::{Vehicle, VehicleIdx, VehicleRecord};

/// The heterogeneous vehicle pool. Validated once at construction; fleet
/// order is the deterministic tie-break when two vehicles are equally good.
#[derive(Debug)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    pub fn new(records: Vec<VehicleRecord>) -> Result<Fleet, ProblemError> {
        if records.is_empty() {
            return Err(ProblemError::EmptyFleet);
        }

        let mut vehicles = Vec::with_capacity(records.len());
        for record in records {
            if record.capacity < 0.0 {
                return Err(ProblemError::NegativeCapacity {
                    label: record.vehicle_type,
                    capacity: record.capacity,
                });
            }
            if record.speed <= 0.0 {
                return Err(ProblemError::NonPositiveSpeed {
                    label: record.vehicle_type,
                    speed: record.speed,
                });
            }
            if record.cost_per_km < 0.0 {
                return Err(ProblemError::NegativeCostPerKm {
                    label: record.vehicle_type,
                    cost_per_km: record.cost_per_km,
                });
            }
            vehicles.push(Vehicle::new(record));
        }

        Ok(Fleet { vehicles })
    }

    #[inline]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    #[inline]
    pub fn vehicle(&self, vehicle_id: VehicleIdx) -> &Vehicle {
        &self.vehicles[vehicle_id]
    }

    pub fn iter(&self) -> impl Iterator<Item = (VehicleIdx, &Vehicle)> {
        self.vehicles
            .iter()
            .enumerate()
            .map(|(idx, vehicle)| (VehicleIdx::new(idx), vehicle))
    }

    /// Distinct nominal speeds across the fleet. The shortest-path tree
    /// depends only on speed, so one tree per entry here covers every
    /// vehicle.
    pub fn distinct_speeds(&self) -> Vec<f64> {
        let mut speeds: Vec<f64> = Vec::new();
        for vehicle in &self.vehicles {
            if !speeds.contains(&vehicle.speed_kmh()) {
                speeds.push(vehicle.speed_kmh());
            }
        }
        speeds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::vehicle;

    #[test]
    fn test_rejects_non_positive_speed() {
        let result = Fleet::new(vec![vehicle("Van", 50.0, 0.0, 2.0)]);
        assert!(matches!(result, Err(ProblemError::NonPositiveSpeed { .. })));
    }

    #[test]
    fn test_rejects_negative_capacity() {
        let result = Fleet::new(vec![vehicle("Van", -10.0, 50.0, 2.0)]);
        assert!(matches!(result, Err(ProblemError::NegativeCapacity { .. })));
    }

    #[test]
    fn test_rejects_negative_cost_per_km() {
        let result = Fleet::new(vec![vehicle("Van", 50.0, 50.0, -2.0)]);
        assert!(matches!(result, Err(ProblemError::NegativeCostPerKm { .. })));
    }

    #[test]
    fn test_rejects_empty_fleet() {
        assert!(matches!(Fleet::new(vec![]), Err(ProblemError::EmptyFleet)));
    }

    #[test]
    fn test_distinct_speeds_deduplicates() {
        let fleet = Fleet::new(vec![
            vehicle("Van", 50.0, 50.0, 2.0),
            vehicle("Truck", 200.0, 50.0, 5.0),
            vehicle("Bike", 10.0, 20.0, 0.5),
        ])
        .unwrap();

        assert_eq!(fleet.distinct_speeds(), vec![50.0, 20.0]);
    }
}
