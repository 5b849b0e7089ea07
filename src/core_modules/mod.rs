pub mod answer;
pub mod cell;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod explanation;
pub mod grid_raster;
pub mod metrics;
pub mod question;
pub mod shape;
pub mod shape_generator;
pub mod utils;
