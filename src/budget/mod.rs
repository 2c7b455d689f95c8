//! Budgets: planned amounts of money that expenses are recorded against.

mod card;
mod create;
mod db;
mod domain;
mod list;

pub use card::budget_card;
pub use create::create_budget_endpoint;
pub use db::{
    create_budget, create_budget_table, get_budget, get_budget_summaries, get_budget_summary,
};
pub use domain::{Budget, BudgetId, BudgetName, BudgetSummary, NewBudget};
pub use list::get_budgets_page;
