//! Billing service and dashboard reporting

pub mod dashboard;
pub mod service;

pub use dashboard::{daily_sales, recent_invoices, DashboardStats, SalesPoint};
pub use service::BillingService;
