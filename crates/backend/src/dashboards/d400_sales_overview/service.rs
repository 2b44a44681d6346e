use std::sync::Arc;

use contracts::dashboards::d400_sales_overview::{
    FilterBounds, KpiCard, Kpis, SalesOverviewRequest, SalesOverviewResponse,
};
use once_cell::sync::OnceCell;

use super::{aggregate, filter};
use crate::projections::p900_order_facts::{projection_builder, OrderFact};
use crate::shared::data::dataset::DatasetProvider;
use crate::shared::error::{DashboardError, DataLoadError};
use crate::shared::format::{format_count, format_currency, format_percent};

/// Presentation adapter for the sales overview dashboard.
///
/// Owns the session's caches: the dataset provider and the fact projection
/// derived from it exactly once. Each filter-selection change runs one full
/// filter → aggregate pass over the cached facts; nothing is mutated, the
/// previous results are simply superseded.
pub struct SalesOverviewService {
    provider: DatasetProvider,
    facts: OnceCell<Arc<Vec<OrderFact>>>,
}

impl SalesOverviewService {
    pub fn new(provider: DatasetProvider) -> Self {
        Self {
            provider,
            facts: OnceCell::new(),
        }
    }

    /// Dataset extent for seeding the sidebar controls.
    pub fn filter_bounds(&self) -> Result<FilterBounds, DashboardError> {
        let facts = self.facts()?;
        let selection =
            filter::default_selection(&facts).ok_or(DashboardError::EmptySelection)?;
        // default_selection always sets both bounds on a non-empty dataset
        let (Some(min_day), Some(max_day)) = (selection.date_from, selection.date_to) else {
            return Err(DashboardError::EmptySelection);
        };

        Ok(FilterBounds {
            min_day,
            max_day,
            categories: filter::distinct_categories(&facts),
        })
    }

    /// Runs one interaction pass: validate the selection, filter, aggregate,
    /// and assemble the response the rendering surface consumes.
    ///
    /// An empty subset short-circuits with [`DashboardError::EmptySelection`]
    /// before any aggregation runs; the view renders its "no data" notice.
    pub fn sales_overview(
        &self,
        request: &SalesOverviewRequest,
    ) -> Result<SalesOverviewResponse, DashboardError> {
        let facts = self.facts()?;
        let selection = filter::FilterSelection::from_request(request);
        selection.validate()?;

        let subset = filter::apply(&facts, &selection);
        if subset.is_empty() {
            tracing::debug!("Filter selection matched no rows");
            return Err(DashboardError::EmptySelection);
        }

        let kpis = aggregate::kpis(&subset);
        let cards = build_cards(&kpis);

        Ok(SalesOverviewResponse {
            daily_revenue: aggregate::revenue_by_day(&subset),
            category_revenue: aggregate::revenue_by_category(&subset),
            top_products: aggregate::top_products(&subset),
            hourly_orders: aggregate::orders_by_hour(&subset),
            kpis,
            cards,
        })
    }

    /// Loads the dataset and derives the fact projection, once per session.
    fn facts(&self) -> Result<Arc<Vec<OrderFact>>, DataLoadError> {
        self.facts
            .get_or_try_init(|| {
                let records = self.provider.get_dataset()?;
                Ok(Arc::new(projection_builder::build_facts(&records)))
            })
            .cloned()
    }
}

/// KPI cards with display formatting applied. Formatting happens here at the
/// boundary; the aggregation engine only ever produces raw scalars.
fn build_cards(kpis: &Kpis) -> Vec<KpiCard> {
    vec![
        KpiCard {
            id: "total_revenue".to_string(),
            label: "Total Revenue".to_string(),
            value: format_currency(kpis.total_revenue),
        },
        KpiCard {
            id: "total_orders".to_string(),
            label: "Total Orders".to_string(),
            value: format_count(kpis.total_orders),
        },
        KpiCard {
            id: "avg_order_value".to_string(),
            label: "Avg Order Value".to_string(),
            value: format_currency(kpis.avg_order_value),
        },
        KpiCard {
            id: "repeat_rate".to_string(),
            label: "Repeat Rate".to_string(),
            value: format_percent(kpis.repeat_rate),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use std::path::Path;

    use chrono::NaiveDate;

    use crate::shared::config::DatasetConfig;
    use crate::shared::data::generator;

    fn config_in(dir: &Path) -> DatasetConfig {
        DatasetConfig {
            dir: dir.join("data").to_string_lossy().into_owned(),
            filename: "ecommerce_with_repeating.csv".to_string(),
        }
    }

    fn write_fixture(config: &DatasetConfig, rows: &[&str]) {
        fs::create_dir_all(&config.dir).unwrap();
        let mut file = fs::File::create(config.target_path()).unwrap();
        writeln!(
            file,
            "order_id,user_id,product_id,product_name,category,price,quantity,order_date,rating,is_repeating_customer"
        )
        .unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
    }

    fn scenario_service(tmp: &Path) -> SalesOverviewService {
        let config = config_in(tmp);
        write_fixture(
            &config,
            &[
                "1,1,100,Product 1,Electronics,100,2,2024-01-01 09:00:00,5,true",
                "2,2,101,Product 2,Fashion,50,1,2024-01-02 10:00:00,4,false",
                "3,3,102,Product 3,Electronics,200,1,2024-01-02 11:00:00,3,false",
            ],
        );
        SalesOverviewService::new(DatasetProvider::new(config))
    }

    fn request(categories: &[&str]) -> SalesOverviewRequest {
        SalesOverviewRequest {
            date_from: NaiveDate::from_ymd_opt(2024, 1, 1),
            date_to: NaiveDate::from_ymd_opt(2024, 1, 2),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_filter_bounds_describe_the_dataset() {
        let tmp = tempfile::tempdir().unwrap();
        let service = scenario_service(tmp.path());

        let bounds = service.filter_bounds().unwrap();
        assert_eq!(bounds.min_day, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(bounds.max_day, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(bounds.categories, vec!["Electronics", "Fashion"]);
    }

    #[test]
    fn test_electronics_selection_end_to_end() {
        let tmp = tempfile::tempdir().unwrap();
        let service = scenario_service(tmp.path());

        let response = service.sales_overview(&request(&["Electronics"])).unwrap();

        assert_eq!(response.kpis.total_revenue, 400.0);
        assert_eq!(response.kpis.avg_order_value, 200.0);
        assert_eq!(response.kpis.total_orders, 2);
        assert_eq!(response.kpis.repeat_rate, 50.0);

        assert_eq!(response.daily_revenue.len(), 2);
        assert_eq!(response.daily_revenue[0].revenue, 200.0);
        assert_eq!(response.category_revenue.len(), 1);
        assert_eq!(response.category_revenue[0].category, "Electronics");
        assert_eq!(response.top_products.len(), 2);
        assert_eq!(response.hourly_orders.len(), 24);
        assert_eq!(response.hourly_orders[9].orders, 1);
        assert_eq!(response.hourly_orders[11].orders, 1);

        let card_values: Vec<&str> =
            response.cards.iter().map(|card| card.value.as_str()).collect();
        assert_eq!(card_values, vec!["₹400.00", "2", "₹200.00", "50.0%"]);
        let card_labels: Vec<&str> =
            response.cards.iter().map(|card| card.label.as_str()).collect();
        assert_eq!(
            card_labels,
            vec!["Total Revenue", "Total Orders", "Avg Order Value", "Repeat Rate"]
        );
    }

    #[test]
    fn test_empty_category_set_short_circuits() {
        let tmp = tempfile::tempdir().unwrap();
        let service = scenario_service(tmp.path());

        let error = service.sales_overview(&request(&[])).unwrap_err();
        assert!(matches!(error, DashboardError::EmptySelection));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let service = scenario_service(tmp.path());

        let mut request = request(&["Electronics"]);
        request.date_from = NaiveDate::from_ymd_opt(2024, 1, 2);
        request.date_to = NaiveDate::from_ymd_opt(2024, 1, 1);

        let error = service.sales_overview(&request).unwrap_err();
        assert!(matches!(error, DashboardError::InvalidDateRange { .. }));
    }

    #[test]
    fn test_generated_dataset_serves_the_default_view() {
        let tmp = tempfile::tempdir().unwrap();
        let service =
            SalesOverviewService::new(DatasetProvider::new(config_in(tmp.path())));

        let bounds = service.filter_bounds().unwrap();
        let request = SalesOverviewRequest {
            date_from: Some(bounds.min_day),
            date_to: Some(bounds.max_day),
            categories: bounds.categories.clone(),
        };

        let response = service.sales_overview(&request).unwrap();

        // Default selection covers the whole generated dataset
        let row_total: u64 = response.hourly_orders.iter().map(|p| p.orders).sum();
        assert_eq!(row_total, generator::SYNTHETIC_ROWS as u64);

        let daily_total: f64 = response.daily_revenue.iter().map(|p| p.revenue).sum();
        assert!((daily_total - response.kpis.total_revenue).abs() < 1e-6);

        let category_total: f64 =
            response.category_revenue.iter().map(|p| p.revenue).sum();
        assert!((category_total - response.kpis.total_revenue).abs() < 1e-6);

        assert!(response.top_products.len() <= aggregate::TOP_PRODUCTS_LIMIT);
    }

    #[test]
    fn test_empty_dataset_yields_no_bounds() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());
        write_fixture(&config, &[]);
        let service = SalesOverviewService::new(DatasetProvider::new(config));

        let error = service.filter_bounds().unwrap_err();
        assert!(matches!(error, DashboardError::EmptySelection));
    }
}
