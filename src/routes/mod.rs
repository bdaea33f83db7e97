pub mod dashboard_routes;
pub mod fillup_routes;
pub mod maintenance_routes;
pub mod trip_routes;
pub mod vehicle_routes;
