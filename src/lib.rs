pub mod dataset;
pub mod generator;
pub mod model;
pub mod output;
pub mod sample;
pub mod tables;
