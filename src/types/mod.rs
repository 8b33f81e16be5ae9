pub mod combined;
pub mod extreme_values;
pub mod station;
