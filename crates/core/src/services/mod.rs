pub mod aggregation_service;
pub mod currency_service;
pub mod dashboard_service;
pub mod goal_service;
pub mod rate_service;
