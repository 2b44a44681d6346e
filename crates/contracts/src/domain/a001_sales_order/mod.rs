pub mod record;

pub use record::SalesOrderRecord;
