use chrono::{Duration, NaiveDate, NaiveDateTime};
use contracts::domain::a001_sales_order::SalesOrderRecord;
use rand::Rng;

/// Number of rows in a freshly synthesized dataset.
pub const SYNTHETIC_ROWS: usize = 500;

/// Closed category set used for generated data.
pub const CATEGORIES: [&str; 4] = ["Electronics", "Fashion", "Home", "Beauty"];

/// First order id of the contiguous generated range.
const FIRST_ORDER_ID: i64 = 1000;

/// Number of distinct product names ("Product 1" .. "Product 10").
const PRODUCT_NAME_COUNT: i64 = 10;

/// Synthesizes an order log with the fixed distributions the dashboard demos
/// with: a contiguous order id range, uniform ids/price/quantity/rating, a
/// fair repeat-customer coin, and a regularly spaced hourly timestamp
/// sequence starting at 2024-01-01 00:00.
pub fn synthesize_orders(rows: usize) -> Vec<SalesOrderRecord> {
    let mut rng = rand::thread_rng();
    let start = first_timestamp();

    (0..rows)
        .map(|i| SalesOrderRecord {
            order_id: FIRST_ORDER_ID + i as i64,
            user_id: rng.gen_range(1..100),
            product_id: rng.gen_range(100..120),
            product_name: format!("Product {}", rng.gen_range(1..=PRODUCT_NAME_COUNT)),
            category: CATEGORIES[rng.gen_range(0..CATEGORIES.len())].to_string(),
            price: rng.gen_range(50..500) as f64,
            quantity: rng.gen_range(1..5),
            order_date: start + Duration::hours(i as i64),
            rating: rng.gen_range(1..=5),
            is_repeating_customer: rng.gen_bool(0.5),
        })
        .collect()
}

fn first_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .expect("valid calendar date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time of day")
}
