//! The state behind the Add Expense form and the submission flow.
//!
//! An [ExpenseDraft] holds the raw text the user typed. An [ExpenseForm] owns a
//! draft and tracks whether a submission is in progress. Submitting validates
//! the draft, inserts one expense, and on success resets the draft to empty:
//!
//! ```text
//! empty --edit--> draft --submit ok--> empty
//!                   |
//!                   +--invalid or insert failed--> draft (unchanged)
//! ```

use rusqlite::Connection;
use serde::Deserialize;
use time::Date;

use crate::{
    Error,
    amount::parse_positive_amount,
    budget::BudgetId,
    expense::{Expense, ExpenseName, NewExpense, create_expense},
};

/// Unsaved user input for an expense.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExpenseDraft {
    /// The expense name exactly as typed.
    #[serde(default)]
    pub name: String,
    /// The expense amount exactly as typed, parsed when the draft is submitted.
    #[serde(default)]
    pub amount: String,
}

impl ExpenseDraft {
    /// Create a draft from the text in the name and amount inputs.
    pub fn new(name: &str, amount: &str) -> Self {
        Self {
            name: name.to_owned(),
            amount: amount.to_owned(),
        }
    }

    /// Whether both inputs are empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.amount.is_empty()
    }

    /// Check the draft and turn it into an expense for `budget_id` dated `created_at`.
    ///
    /// The checks run in order and the first failure is returned.
    ///
    /// # Errors
    ///
    /// - [Error::EmptyExpenseName] if the trimmed name is empty.
    /// - [Error::InvalidExpenseAmount] if the amount is not a number greater than zero.
    pub fn validate(&self, budget_id: BudgetId, created_at: Date) -> Result<NewExpense, Error> {
        let name = ExpenseName::new(&self.name)?;
        let amount = parse_positive_amount(&self.amount).ok_or(Error::InvalidExpenseAmount)?;

        Ok(NewExpense {
            name,
            amount,
            budget_id,
            created_at,
        })
    }

    fn clear(&mut self) {
        self.name.clear();
        self.amount.clear();
    }
}

/// The Add Expense form: a draft plus a flag for whether it is being submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseForm {
    draft: ExpenseDraft,
    is_submitting: bool,
}

impl ExpenseForm {
    /// Create a form holding `draft` that is not being submitted.
    pub fn new(draft: ExpenseDraft) -> Self {
        Self {
            draft,
            is_submitting: false,
        }
    }

    /// The current user input.
    pub fn draft(&self) -> &ExpenseDraft {
        &self.draft
    }

    /// Whether an insert is in flight.
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Validate the draft and insert it as an expense for `budget_id` dated `created_at`.
    ///
    /// Exactly one insert is made when the draft is valid and none otherwise.
    /// On success the draft is cleared. On any error the draft keeps its
    /// values so the user can correct or retry it. The form is never left
    /// submitting once this function returns.
    ///
    /// The budget is not checked before the insert; an unknown `budget_id` is
    /// rejected by the database and returned as an error.
    ///
    /// # Errors
    ///
    /// - [Error::EmptyExpenseName] or [Error::InvalidExpenseAmount] if the draft is invalid.
    /// - Any error from the database if the insert fails.
    pub fn submit(
        &mut self,
        budget_id: BudgetId,
        created_at: Date,
        connection: &Connection,
    ) -> Result<Expense, Error> {
        let new_expense = self.draft.validate(budget_id, created_at)?;

        self.is_submitting = true;
        let result = create_expense(new_expense, connection);
        self.is_submitting = false;

        let expense = result?;
        self.draft.clear();

        Ok(expense)
    }
}
