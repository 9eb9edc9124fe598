pub mod reports_repo;
pub use reports_repo::{PgReportsRepository, ReportsRepository};
