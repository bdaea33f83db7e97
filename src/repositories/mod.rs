pub mod fillup_repository;
pub mod maintenance_repository;
pub mod trip_repository;
pub mod vehicle_repository;
