pub mod chart;
pub mod data;
pub mod parser;
pub mod render;
pub mod schedule;
pub mod viewer;
