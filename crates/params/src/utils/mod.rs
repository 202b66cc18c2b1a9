//! Constants for the symmetric half of the pipeline

pub mod hash;
pub mod symmetric;
