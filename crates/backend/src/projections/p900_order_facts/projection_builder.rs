use chrono::Timelike;
use contracts::domain::a001_sales_order::SalesOrderRecord;

use super::model::OrderFact;

/// Derives the reporting fact rows from raw order records.
///
/// Pure and idempotent: rebuilding from the same records yields identical
/// facts. Row order is preserved, which downstream encounter-order grouping
/// relies on.
pub fn build_facts(records: &[SalesOrderRecord]) -> Vec<OrderFact> {
    records.iter().map(build_fact).collect()
}

fn build_fact(record: &SalesOrderRecord) -> OrderFact {
    OrderFact {
        revenue: record.price * record.quantity as f64,
        order_day: record.order_date.date(),
        order_hour: record.order_date.hour(),
        record: record.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(
        order_id: i64,
        category: &str,
        price: f64,
        quantity: i64,
        date: (i32, u32, u32),
        hour: u32,
    ) -> SalesOrderRecord {
        SalesOrderRecord {
            order_id,
            user_id: 1,
            product_id: 100,
            product_name: format!("Product {}", order_id % 10),
            category: category.to_string(),
            price,
            quantity,
            order_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2)
                .unwrap()
                .and_hms_opt(hour, 30, 0)
                .unwrap(),
            rating: 4,
            is_repeating_customer: order_id % 2 == 0,
        }
    }

    #[test]
    fn test_derives_revenue_day_and_hour() {
        let records = vec![record(1000, "Electronics", 100.0, 2, (2024, 1, 1), 13)];
        let facts = build_facts(&records);

        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].revenue, 200.0);
        assert_eq!(
            facts[0].order_day,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(facts[0].order_hour, 13);
        assert_eq!(facts[0].record, records[0]);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let records = vec![
            record(1000, "Electronics", 100.0, 2, (2024, 1, 1), 0),
            record(1001, "Fashion", 50.0, 1, (2024, 1, 2), 23),
        ];
        assert_eq!(build_facts(&records), build_facts(&records));
    }

    #[test]
    fn test_preserves_row_order() {
        let records = vec![
            record(1002, "Home", 10.0, 1, (2024, 1, 3), 5),
            record(1000, "Beauty", 20.0, 1, (2024, 1, 1), 6),
        ];
        let facts = build_facts(&records);
        assert_eq!(facts[0].record.order_id, 1002);
        assert_eq!(facts[1].record.order_id, 1000);
    }
}
