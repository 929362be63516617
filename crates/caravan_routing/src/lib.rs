pub mod city;
pub mod network;
pub mod newtype_index;
pub mod road;
pub mod shortest_path;
pub mod weighting;

#[cfg(test)]
pub(crate) mod test_utils;
