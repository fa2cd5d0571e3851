pub mod args;
pub mod data;
pub mod logging;
pub mod model;
pub mod quips;
pub mod records;
pub mod report;
pub mod stats;
