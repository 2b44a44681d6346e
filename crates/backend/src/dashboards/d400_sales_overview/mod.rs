pub mod aggregate;
pub mod filter;
pub mod service;

pub use service::SalesOverviewService;
