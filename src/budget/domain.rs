//! Core budget domain types.

use std::fmt::Display;

use serde::Deserialize;

use crate::{Error, amount::parse_positive_amount, database_id::DatabaseId};

/// Database identifier for a budget.
pub type BudgetId = DatabaseId;

/// A validated, non-empty budget name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BudgetName(String);

impl BudgetName {
    /// Create a budget name from `name` with surrounding whitespace removed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyBudgetName] if `name` is empty or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyBudgetName)
        } else {
            Ok(Self(name.to_owned()))
        }
    }

    /// Create a budget name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl AsRef<str> for BudgetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for BudgetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An amount of money planned for a category of spending, e.g. 'Groceries'.
#[derive(Debug, Clone, PartialEq)]
pub struct Budget {
    /// The ID of the budget.
    pub id: BudgetId,
    /// The name of the budget.
    pub name: BudgetName,
    /// The planned amount in dollars.
    pub amount: f64,
}

/// A validated budget that has not been saved yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    /// The name of the budget.
    pub name: BudgetName,
    /// The planned amount in dollars, always greater than zero.
    pub amount: f64,
}

impl NewBudget {
    /// Validate the raw form text for a budget.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyBudgetName] if the trimmed name is empty, or
    /// [Error::InvalidBudgetAmount] if `amount` is not a number greater than zero.
    pub fn new(name: &str, amount: &str) -> Result<Self, Error> {
        let name = BudgetName::new(name)?;
        let amount = parse_positive_amount(amount).ok_or(Error::InvalidBudgetAmount)?;

        Ok(Self { name, amount })
    }
}

/// A budget with the totals of the expenses made against it.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub budget: Budget,
    /// The sum of the amounts of the budget's expenses.
    pub total_spent: f64,
    pub expense_count: i64,
}

impl BudgetSummary {
    /// The planned amount minus the amount spent. Negative when overspent.
    pub fn remaining(&self) -> f64 {
        self.budget.amount - self.total_spent
    }

    /// The fraction of the budget that has been spent as a percentage, capped to 100.
    pub fn percent_spent(&self) -> f64 {
        if self.budget.amount <= 0.0 {
            return 100.0;
        }

        (self.total_spent / self.budget.amount * 100.0).clamp(0.0, 100.0)
    }
}

/// Form data for creating a budget.
#[derive(Debug, Default, Deserialize)]
pub struct BudgetFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: String,
}
