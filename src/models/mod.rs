pub mod fillup;
pub mod maintenance;
pub mod trip;
pub mod vehicle;
