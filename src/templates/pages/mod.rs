pub mod dashboard;
pub mod insights;

pub use dashboard::{dashboard_page, DashboardVm};
pub use insights::insights_page;
