mod analytics;
mod dashboard;
mod farmer;
mod live_map;
mod login;
mod model_performance;
mod predict;
mod prediction;
mod reports;
mod simulation;

pub use analytics::Analytics;
pub use dashboard::Dashboard;
pub use farmer::FarmerDashboard;
pub use live_map::LiveMap;
pub use login::Login;
pub use model_performance::ModelPerformance;
pub use predict::Predict;
pub use prediction::FuturePrediction;
pub use reports::Reports;
pub use simulation::Simulation;
