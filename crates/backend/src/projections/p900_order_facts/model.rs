use chrono::NaiveDate;
use contracts::domain::a001_sales_order::SalesOrderRecord;

/// An order record with its derived reporting fields.
///
/// The derived columns are pure functions of the raw record and are computed
/// exactly once per loaded dataset; the dataset is immutable afterwards, so
/// they never need refreshing within a session.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFact {
    pub record: SalesOrderRecord,
    /// price × quantity
    pub revenue: f64,
    /// Date component of order_date
    pub order_day: NaiveDate,
    /// Hour component of order_date, 0-23
    pub order_hour: u32,
}
