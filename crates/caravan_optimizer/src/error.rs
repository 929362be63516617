use thiserror::Error;

/// Rejection of malformed vehicle records at construction time.
#[derive(Error, Debug)]
pub enum ProblemError {
    #[error("vehicle '{label}' has negative capacity {capacity}")]
    NegativeCapacity { label: String, capacity: f64 },
    #[error("vehicle '{label}' has non-positive speed {speed}")]
    NonPositiveSpeed { label: String, speed: f64 },
    #[error("vehicle '{label}' has negative cost per km {cost_per_km}")]
    NegativeCostPerKm { label: String, cost_per_km: f64 },
    #[error("fleet is empty")]
    EmptyFleet,
}

/// Fatal planning failures. A city that cannot be served is not an error,
/// it is a [`crate::plan::DeliveryOutcome::Undeliverable`] entry.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error(
        "insufficient stock: total demand {total_demand} kg exceeds warehouse stock {stock} kg"
    )]
    InsufficientStock { total_demand: f64, stock: f64 },
}

impl PlanError {
    /// Amount missing from the warehouse, in kilograms.
    pub fn deficit(&self) -> f64 {
        match self {
            PlanError::InsufficientStock {
                total_demand,
                stock,
            } => total_demand - stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_stock_message_carries_amounts() {
        let err = PlanError::InsufficientStock {
            total_demand: 30.0,
            stock: 20.0,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock: total demand 30 kg exceeds warehouse stock 20 kg"
        );
        assert_eq!(err.deficit(), 10.0);
    }
}
