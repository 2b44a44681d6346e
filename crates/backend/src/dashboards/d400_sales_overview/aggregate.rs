use std::collections::{BTreeMap, HashMap, HashSet};

use contracts::dashboards::d400_sales_overview::{
    CategoryRevenuePoint, DailyRevenuePoint, HourlyOrdersPoint, Kpis, ProductRevenuePoint,
};

use crate::projections::p900_order_facts::OrderFact;

/// How many products the product leaderboard keeps.
pub const TOP_PRODUCTS_LIMIT: usize = 5;

/// Scalar KPIs over a non-empty filtered subset.
///
/// `avg_order_value` is the mean revenue per row, not per distinct order:
/// a multi-line order contributes once per line here but once in
/// `total_orders`. The source reports it this way and the dashboard keeps
/// the behavior.
pub fn kpis(subset: &[&OrderFact]) -> Kpis {
    debug_assert!(!subset.is_empty(), "aggregation requires a non-empty subset");

    let row_count = subset.len() as f64;
    let total_revenue: f64 = subset.iter().map(|fact| fact.revenue).sum();
    let distinct_orders: HashSet<i64> =
        subset.iter().map(|fact| fact.record.order_id).collect();
    let repeating_rows = subset
        .iter()
        .filter(|fact| fact.record.is_repeating_customer)
        .count();

    Kpis {
        total_revenue,
        total_orders: distinct_orders.len() as u64,
        avg_order_value: total_revenue / row_count,
        repeat_rate: repeating_rows as f64 / row_count * 100.0,
    }
}

/// Revenue summed per order day, chronological.
pub fn revenue_by_day(subset: &[&OrderFact]) -> Vec<DailyRevenuePoint> {
    let mut totals = BTreeMap::new();
    for fact in subset {
        *totals.entry(fact.order_day).or_insert(0.0) += fact.revenue;
    }
    totals
        .into_iter()
        .map(|(day, revenue)| DailyRevenuePoint { day, revenue })
        .collect()
}

/// Revenue summed per category, in subset encounter order.
pub fn revenue_by_category(subset: &[&OrderFact]) -> Vec<CategoryRevenuePoint> {
    sum_by_key(subset, |fact| fact.record.category.clone())
        .into_iter()
        .map(|(category, revenue)| CategoryRevenuePoint { category, revenue })
        .collect()
}

/// Top products by revenue, descending. Stable sort keeps encounter order
/// between revenue ties; at most [`TOP_PRODUCTS_LIMIT`] rows.
pub fn top_products(subset: &[&OrderFact]) -> Vec<ProductRevenuePoint> {
    let mut points = sum_by_key(subset, |fact| fact.record.product_name.clone());
    points.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    points.truncate(TOP_PRODUCTS_LIMIT);
    points
        .into_iter()
        .map(|(product_name, revenue)| ProductRevenuePoint {
            product_name,
            revenue,
        })
        .collect()
}

/// Order counts for every hour of the day. Hours with no orders report 0
/// rather than being omitted, so the peak-hours chart always spans 0-23.
pub fn orders_by_hour(subset: &[&OrderFact]) -> Vec<HourlyOrdersPoint> {
    let mut counts = [0u64; 24];
    for fact in subset {
        counts[fact.order_hour as usize % 24] += 1;
    }
    counts
        .iter()
        .enumerate()
        .map(|(hour, orders)| HourlyOrdersPoint {
            hour: hour as u32,
            orders: *orders,
        })
        .collect()
}

/// Sums revenue per key, keeping first-encounter order of the keys.
fn sum_by_key<F>(subset: &[&OrderFact], key_of: F) -> Vec<(String, f64)>
where
    F: Fn(&OrderFact) -> String,
{
    let mut points: Vec<(String, f64)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for fact in subset {
        let key = key_of(fact);
        match index.get(&key) {
            Some(&i) => points[i].1 += fact.revenue,
            None => {
                index.insert(key.clone(), points.len());
                points.push((key, fact.revenue));
            }
        }
    }

    points
}
