pub mod csv_export;
pub mod dashboard_service;
pub mod reports_service;
pub mod sales_trend;

pub use dashboard_service::DashboardService;
pub use reports_service::ReportsService;
