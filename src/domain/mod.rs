// Domain layer - Pure data model and temporal logic
pub mod bucket;
pub mod dashboard;
pub mod day_window;
pub mod error;
pub mod probe;
pub mod series;
