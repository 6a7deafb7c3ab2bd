pub mod answer_routes;
pub mod ranking_routes;
pub mod system_routes;
