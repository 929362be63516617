pub mod allocation;
pub mod error;
pub mod feasibility;
pub mod json;
pub mod overlay;
pub mod plan;
pub mod problem;

#[cfg(test)]
pub(crate) mod test_utils;
