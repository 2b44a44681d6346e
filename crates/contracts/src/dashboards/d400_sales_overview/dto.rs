use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Filter selection coming from the dashboard sidebar controls.
///
/// Both date bounds are inclusive and compared against the order day. A
/// missing bound leaves that side unconstrained; the sidebar normally sends
/// both, seeded from [`FilterBounds`]. An empty category list is a valid
/// selection that matches nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOverviewRequest {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub categories: Vec<String>,
}

/// Dataset extent used to seed the sidebar controls: date picker range and
/// multiselect defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterBounds {
    pub min_day: NaiveDate,
    pub max_day: NaiveDate,
    /// Distinct categories in dataset encounter order
    pub categories: Vec<String>,
}

/// Response for the sales overview dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOverviewResponse {
    /// Raw KPI scalars
    pub kpis: Kpis,
    /// Display-formatted KPI cards, in render order
    pub cards: Vec<KpiCard>,
    /// Revenue summed per order day, chronological
    pub daily_revenue: Vec<DailyRevenuePoint>,
    /// Revenue summed per category, dataset encounter order
    pub category_revenue: Vec<CategoryRevenuePoint>,
    /// Top products by revenue, descending, at most 5 rows
    pub top_products: Vec<ProductRevenuePoint>,
    /// Order counts for every hour 0-23, zero-filled
    pub hourly_orders: Vec<HourlyOrdersPoint>,
}

/// Scalar KPIs over the filtered subset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kpis {
    pub total_revenue: f64,
    /// Count of distinct order ids
    pub total_orders: u64,
    /// Mean revenue per row (not per distinct order)
    pub avg_order_value: f64,
    /// Share of rows flagged as repeating customers, 0-100
    pub repeat_rate: f64,
}

/// One display-ready metric card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiCard {
    /// Stable identifier (e.g., "total_revenue")
    pub id: String,
    /// Display label (e.g., "Total Revenue")
    pub label: String,
    /// Formatted value (e.g., "₹12,340.00")
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRevenuePoint {
    pub day: NaiveDate,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRevenuePoint {
    pub category: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRevenuePoint {
    pub product_name: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyOrdersPoint {
    /// Hour of day, 0-23
    pub hour: u32,
    pub orders: u64,
}
