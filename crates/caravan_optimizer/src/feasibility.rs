use tracing::debug;

use crate::error::PlanError;
use crate::problem::delivery_problem::DeliveryProblem;

/// Aggregate demand-vs-stock gate. Runs before any shortest-path work;
/// a deficit fails the whole batch and no per-city allocation is attempted.
pub fn check_feasibility(problem: &DeliveryProblem) -> Result<(), PlanError> {
    let network = problem.network();
    let total_demand = network.total_demand();
    let stock = network.stock();

    if total_demand > stock {
        return Err(PlanError::InsufficientStock {
            total_demand,
            stock,
        });
    }

    debug!(total_demand, stock, "feasibility gate passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{problem_with_stock, van};

    #[test]
    fn test_demand_within_stock_passes() {
        let problem = problem_with_stock(100.0, vec![van()]);
        assert!(check_feasibility(&problem).is_ok());
    }

    #[test]
    fn test_exact_stock_passes() {
        // Two cities of 30 and 10 kg against a stock of exactly 40 kg.
        let problem = problem_with_stock(40.0, vec![van()]);
        assert!(check_feasibility(&problem).is_ok());
    }

    #[test]
    fn test_deficit_fails_with_amount() {
        let problem = problem_with_stock(20.0, vec![van()]);
        let err = check_feasibility(&problem).unwrap_err();

        match &err {
            PlanError::InsufficientStock {
                total_demand,
                stock,
            } => {
                assert_eq!(*total_demand, 40.0);
                assert_eq!(*stock, 20.0);
            }
        }
        assert_eq!(err.deficit(), 20.0);
    }
}
