//! Dashboard aggregation for the index page.

use serde::Serialize;

use crate::domain::budget::{BudgetStatus, HydratedBudget};
use crate::repository::{BudgetReader, CustomerReader, ProductReader};
use crate::services::{ServiceError, ServiceResult, budget as budget_service};

/// How many recent budgets the dashboard shows.
const RECENT_BUDGETS: usize = 5;

/// One slice of the status overview.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StatusCount {
    pub status: BudgetStatus,
    pub count: usize,
}

/// Data required to render the dashboard template.
pub struct DashboardData {
    pub customer_count: usize,
    pub product_count: usize,
    /// Counted over the stored rows, so budgets with dangling references
    /// still show up in the totals.
    pub budget_count: usize,
    /// Stored budgets broken down by status, in [`BudgetStatus::ALL`] order.
    pub status_counts: Vec<StatusCount>,
    /// Newest budgets, hydrated, capped at [`RECENT_BUDGETS`]. Records that
    /// fail hydration are skipped, as in the list view.
    pub recent_budgets: Vec<HydratedBudget>,
}

/// Loads entity counts, the per-status breakdown and the most recent budgets.
pub fn load_dashboard<R>(repo: &R) -> ServiceResult<DashboardData>
where
    R: BudgetReader + CustomerReader + ProductReader + ?Sized,
{
    let customer_count = repo.list_customers()?.len();
    let product_count = repo.list_products()?.len();

    let stored = repo.list_budgets()?;
    let budget_count = stored.len();
    let status_counts = BudgetStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: stored.iter().filter(|b| b.status == status).count(),
        })
        .collect();

    let mut recent_budgets = Vec::with_capacity(RECENT_BUDGETS);
    for budget in &stored {
        if recent_budgets.len() == RECENT_BUDGETS {
            break;
        }
        match budget_service::hydrate_budget(repo, budget) {
            Ok(hydrated) => recent_budgets.push(hydrated),
            Err(ServiceError::DanglingReference(reason)) => {
                log::warn!("Skipping budget {} on dashboard: {reason}", budget.id);
            }
            Err(err) => return Err(err),
        }
    }

    Ok(DashboardData {
        customer_count,
        product_count,
        budget_count,
        status_counts,
        recent_budgets,
    })
}
