pub mod delivery_problem;
pub mod fleet;
pub mod vehicle;
