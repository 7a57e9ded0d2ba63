//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod reports;
pub mod rooms;
pub mod tenants;

pub use dashboard::Dashboard;
pub use reports::FinancialReports;
pub use rooms::Rooms;
pub use tenants::Tenants;
