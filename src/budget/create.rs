//! Budget creation form and endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    budget::{NewBudget, create_budget, domain::BudgetFormData},
    endpoints::{self, format_endpoint},
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// The state needed for creating a budget.
#[derive(Debug, Clone)]
pub struct CreateBudgetEndpointState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateBudgetEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle budget creation form submission.
///
/// Invalid input re-renders the form with an error message, otherwise the
/// client is redirected to the new budget's expenses page.
pub async fn create_budget_endpoint(
    State(state): State<CreateBudgetEndpointState>,
    Form(form): Form<BudgetFormData>,
) -> Response {
    let new_budget = match NewBudget::new(&form.name, &form.amount) {
        Ok(new_budget) => new_budget,
        Err(error) => {
            return create_budget_form_view(&form, &format!("Error: {error}")).into_response();
        }
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match create_budget(new_budget, &connection) {
        Ok(budget) => {
            tracing::info!("Created budget {} ({})", budget.id, budget.name);
            (
                HxRedirect(format_endpoint(endpoints::BUDGET_EXPENSES_VIEW, budget.id)),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!("An unexpected error occurred while creating a budget: {error}");

            error.into_alert_response()
        }
    }
}

/// The form for creating a budget, prefilled with `form` and showing `error_message` if not empty.
pub fn create_budget_form_view(form: &BudgetFormData, error_message: &str) -> Markup {
    html! {
        form
            hx-post=(endpoints::POST_BUDGET)
            hx-target="#create-budget"
            hx-target-error="#alert-container"
            class={ (FORM_CONTAINER_STYLE) " space-y-4" }
        {
            h2 class="font-bold text-lg" { "Create New Budget" }

            div
            {
                label for="budget-name" class=(FORM_LABEL_STYLE) { "Budget Name" }

                input
                    id="budget-name"
                    type="text"
                    name="name"
                    placeholder="e.g. Home Decor"
                    required
                    value=(form.name)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="budget-amount" class=(FORM_LABEL_STYLE) { "Budget Amount" }

                div class="input-wrapper w-full"
                {
                    input
                        id="budget-amount"
                        type="text"
                        inputmode="decimal"
                        name="amount"
                        placeholder="e.g. 5000"
                        required
                        value=(form.amount)
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            @if !error_message.is_empty() {
                p class="text-red-600 dark:text-red-400"
                {
                    (error_message)
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Create Budget" }
        }
    }
}
