//! Expenses: money spent against a budget, and the form for adding them.

mod add;
mod db;
mod delete;
mod domain;
mod draft;
mod page;

pub use add::add_expense_endpoint;
pub use db::{create_expense, create_expense_table, delete_expense, get_expenses_for_budget};
pub use delete::delete_expense_endpoint;
pub use domain::{Expense, ExpenseId, ExpenseName, NewExpense};
pub use draft::{ExpenseDraft, ExpenseForm};
pub use page::{get_budget_expenses_page, get_expense_overview};
