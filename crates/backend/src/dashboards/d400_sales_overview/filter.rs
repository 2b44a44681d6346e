use std::collections::HashSet;

use chrono::NaiveDate;
use contracts::dashboards::d400_sales_overview::SalesOverviewRequest;

use crate::projections::p900_order_facts::OrderFact;
use crate::shared::error::DashboardError;

/// Filter predicate for the sales overview dashboard.
///
/// Date bounds are inclusive and compared against `order_day`; a missing
/// bound is unconstrained on that side. Categories are matched by set
/// membership, so an empty set retains nothing.
#[derive(Debug, Clone)]
pub struct FilterSelection {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub categories: HashSet<String>,
}

impl FilterSelection {
    pub fn from_request(request: &SalesOverviewRequest) -> Self {
        Self {
            date_from: request.date_from,
            date_to: request.date_to,
            categories: request.categories.iter().cloned().collect(),
        }
    }

    /// Rejects an inverted date range instead of silently matching nothing.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if let (Some(from), Some(to)) = (self.date_from, self.date_to) {
            if from > to {
                return Err(DashboardError::InvalidDateRange { from, to });
            }
        }
        Ok(())
    }

    pub fn matches(&self, fact: &OrderFact) -> bool {
        if let Some(from) = self.date_from {
            if fact.order_day < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if fact.order_day > to {
                return false;
            }
        }
        self.categories.contains(&fact.record.category)
    }
}

/// Returns the subset of facts matching the selection. Never mutates the
/// input; an empty result is a valid output at this layer.
pub fn apply<'a>(facts: &'a [OrderFact], selection: &FilterSelection) -> Vec<&'a OrderFact> {
    facts.iter().filter(|fact| selection.matches(fact)).collect()
}

/// The selection the dashboard opens with: the dataset's full day span and
/// every distinct category, in encounter order.
pub fn default_selection(facts: &[OrderFact]) -> Option<FilterSelection> {
    let first = facts.first()?;
    let mut min_day = first.order_day;
    let mut max_day = first.order_day;
    let mut categories = HashSet::new();

    for fact in facts {
        min_day = min_day.min(fact.order_day);
        max_day = max_day.max(fact.order_day);
        categories.insert(fact.record.category.clone());
    }

    Some(FilterSelection {
        date_from: Some(min_day),
        date_to: Some(max_day),
        categories,
    })
}

/// Distinct categories in dataset encounter order, for the sidebar defaults.
pub fn distinct_categories(facts: &[OrderFact]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories = Vec::new();
    for fact in facts {
        if seen.insert(fact.record.category.as_str()) {
            categories.push(fact.record.category.clone());
        }
    }
    categories
}
