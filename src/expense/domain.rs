//! Core expense domain types.

use std::fmt::Display;

use time::Date;

use crate::{Error, budget::BudgetId, database_id::DatabaseId};

/// Database identifier for an expense.
pub type ExpenseId = DatabaseId;

/// A validated, non-empty expense name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseName(String);

impl ExpenseName {
    /// Create an expense name from `name` with surrounding whitespace removed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyExpenseName] if `name` is empty or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyExpenseName)
        } else {
            Ok(Self(name.to_owned()))
        }
    }

    /// Create an expense name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl AsRef<str> for ExpenseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ExpenseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Money spent against a budget.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// What the money was spent on.
    pub name: ExpenseName,
    /// The amount spent in dollars, always greater than zero.
    pub amount: f64,
    /// The budget the expense counts towards.
    pub budget_id: BudgetId,
    /// The date the expense was recorded.
    pub created_at: Date,
}

/// A validated expense that has not been saved yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// What the money was spent on.
    pub name: ExpenseName,
    /// The amount spent in dollars, always greater than zero.
    pub amount: f64,
    /// The budget the expense counts towards.
    pub budget_id: BudgetId,
    /// The date the expense was recorded.
    pub created_at: Date,
}
