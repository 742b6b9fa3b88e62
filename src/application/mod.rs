// Application layer - Use cases and ports
pub mod aggregator;
pub mod dashboard_service;
pub mod probe_repository;
pub mod series_builder;
