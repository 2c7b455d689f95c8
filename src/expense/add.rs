//! The Add Expense form and the endpoint it submits to.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HX_TRIGGER;
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    alert::Alert,
    budget::BudgetId,
    endpoints::{self, format_endpoint},
    expense::{ExpenseDraft, ExpenseForm},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        loading_spinner,
    },
    timezone::local_today,
};

/// The client-side event fired after an expense is added or removed.
///
/// Fragments that show expenses listen for this event and reload themselves.
pub const EXPENSES_CHANGED_EVENT: &str = "expenses-changed";

/// The ID of the element wrapping the Add Expense form.
pub const ADD_EXPENSE_FORM_CONTAINER_ID: &str = "add-expense";

/// The state needed for adding an expense.
#[derive(Debug, Clone)]
pub struct AddExpenseState {
    /// The database connection for inserting expenses.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The timezone used to date new expenses.
    pub local_timezone: String,
}

impl FromRef<AppState> for AddExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Handle an Add Expense form submission for the budget `budget_id`.
///
/// On success the response is an empty form, a success alert swapped into the
/// alert container out-of-band, and an `HX-Trigger` header with
/// [EXPENSES_CHANGED_EVENT] so the budget overview refreshes.
///
/// Invalid input returns an error alert with status 422 and nothing is
/// inserted. A failed insert is logged and returns a generic error alert with
/// status 500. In both cases the form in the browser keeps its input.
pub async fn add_expense_endpoint(
    State(state): State<AddExpenseState>,
    Path(budget_id): Path<BudgetId>,
    Form(draft): Form<ExpenseDraft>,
) -> Response {
    let today = match local_today(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    let mut form = ExpenseForm::new(draft);

    match form.submit(budget_id, today, &connection) {
        Ok(expense) => {
            tracing::info!(
                "Added expense {} ({}, {}) to budget {budget_id}",
                expense.id,
                expense.name,
                expense.amount
            );

            let alert = Alert::SuccessSimple {
                message: "New Expense Added!".to_owned(),
            };

            (
                [(HX_TRIGGER, EXPENSES_CHANGED_EVENT)],
                html! {
                    (add_expense_form_view(budget_id, form.draft()))
                    (alert.into_oob_html())
                },
            )
                .into_response()
        }
        Err(error @ (Error::EmptyExpenseName | Error::InvalidExpenseAmount)) => {
            tracing::debug!("Rejected expense for budget {budget_id}: {error}");
            error.into_alert_response()
        }
        Err(error) => {
            tracing::error!("Could not add expense to budget {budget_id}: {error}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::ErrorSimple {
                    message: "Failed to add expense. Please try again.".to_owned(),
                },
            )
                .into_response()
        }
    }
}

/// The form for adding an expense to `budget_id`, prefilled with `draft`.
///
/// Only one submission is sent at a time: further submits are dropped while a
/// request is in flight and the submit button is disabled until it finishes.
pub fn add_expense_form_view(budget_id: BudgetId, draft: &ExpenseDraft) -> Markup {
    let target = format!("#{ADD_EXPENSE_FORM_CONTAINER_ID}");

    html! {
        form
            hx-post=(format_endpoint(endpoints::POST_EXPENSE, budget_id))
            hx-target=(target)
            hx-target-error="#alert-container"
            hx-sync="this:drop"
            hx-disabled-elt="find button[type='submit']"
            class={ (FORM_CONTAINER_STYLE) " space-y-4" }
        {
            h2 class="font-bold text-lg" { "Add Expense" }

            div
            {
                label for="expense-name" class=(FORM_LABEL_STYLE) { "Expense Name" }

                input
                    id="expense-name"
                    type="text"
                    name="name"
                    placeholder="e.g. Bedroom Decor"
                    required
                    value=(draft.name)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="expense-amount" class=(FORM_LABEL_STYLE) { "Expense Amount" }

                div class="input-wrapper w-full"
                {
                    input
                        id="expense-amount"
                        type="text"
                        inputmode="decimal"
                        name="amount"
                        placeholder="e.g. 1000"
                        required
                        value=(draft.amount)
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE)
            {
                span class="htmx-indicator" { (loading_spinner()) }
                "Add New Expense"
            }
        }
    }
}
